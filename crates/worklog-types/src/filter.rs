use crate::ids::ProjectId;
use chrono::NaiveDate;

/// Filter for entry queries. All set conditions are AND-combined.
///
/// `project_ids` keeps SQL `IN` semantics: `None` means "no project
/// condition" while `Some(vec![])` matches nothing. Callers that mean
/// "don't filter" must leave it unset.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Inclusive lower bound on the entry's calendar date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the entry's calendar date.
    pub end_date: Option<NaiveDate>,
    /// Restrict to these projects.
    pub project_ids: Option<Vec<ProjectId>>,
    /// Case-insensitive substring over title, notes, and path.
    pub text: Option<String>,
    /// Case-insensitive substring over the tags field.
    pub tags_contains: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn projects(mut self, ids: Vec<ProjectId>) -> Self {
        self.project_ids = Some(ids);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tags_contains(mut self, tag: impl Into<String>) -> Self {
        self.tags_contains = Some(tag.into());
        self
    }
}
