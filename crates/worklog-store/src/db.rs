use rusqlite::Connection;
use std::path::Path;
use worklog_types::{
    Attachment, AttachmentId, EntryFilter, EntryId, EntryRow, NewEntry, Project, ProjectId, time,
};

use crate::{Result, queries, schema};

/// Handle to the worklog database.
///
/// Opening runs the idempotent schema setup and switches on foreign-key
/// enforcement for the connection; one handle is meant to live for the
/// whole process.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    // Projects

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        queries::project::list(&self.conn)
    }

    pub fn find_project_id_by_name(&self, name: &str) -> Result<Option<ProjectId>> {
        queries::project::find_id_by_name(&self.conn, name)
    }

    pub fn upsert_project(&self, name: &str, base_path: Option<&str>) -> Result<ProjectId> {
        queries::project::upsert(&self.conn, name, base_path)
    }

    pub fn count_entries_for_project(&self, id: ProjectId) -> Result<usize> {
        queries::project::count_entries(&self.conn, id)
    }

    /// Delete a project row. Entries referencing it keep existing with
    /// their project cleared (ON DELETE SET NULL).
    pub fn delete_project(&self, id: ProjectId) -> Result<()> {
        queries::project::delete(&self.conn, id)
    }

    // Entries

    pub fn insert_entry(&self, entry: &NewEntry) -> Result<EntryId> {
        queries::entry::insert(&self.conn, entry)
    }

    pub fn query_entries(&self, filter: &EntryFilter) -> Result<Vec<EntryRow>> {
        queries::entry::query(&self.conn, filter)
    }

    pub fn get_entry(&self, id: EntryId) -> Result<Option<EntryRow>> {
        queries::entry::get(&self.conn, id)
    }

    pub fn recent_paths(&self, limit: usize) -> Result<Vec<String>> {
        queries::entry::recent_paths(&self.conn, limit)
    }

    /// Delete an entry row. Its attachment rows go with it
    /// (ON DELETE CASCADE); attachment files are not touched.
    pub fn delete_entry(&self, id: EntryId) -> Result<()> {
        queries::entry::delete(&self.conn, id)
    }

    // Attachments

    pub fn insert_attachment(
        &self,
        entry_id: EntryId,
        filename: &str,
        rel_path: &str,
    ) -> Result<AttachmentId> {
        queries::attachment::insert(&self.conn, entry_id, filename, rel_path, &time::now_utc())
    }

    pub fn list_attachments(&self, entry_id: EntryId) -> Result<Vec<Attachment>> {
        queries::attachment::list_for_entry(&self.conn, entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worklog_types::WorkType;

    fn sample_entry(ts: &str, title: &str, project_id: Option<ProjectId>) -> NewEntry {
        NewEntry {
            ts: time::parse_event_ts(ts).unwrap(),
            title: title.to_string(),
            project_id,
            work_type: WorkType::Coding,
            tags: String::new(),
            path: String::new(),
            duration_hours: None,
            notes_md: String::new(),
        }
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();

        let projects = db.list_projects().unwrap();
        assert_eq!(projects.len(), 0);
    }

    #[test]
    fn test_upsert_project_inserts_then_updates_in_place() {
        let db = Database::open_in_memory().unwrap();

        let id = db.upsert_project("atlas", Some("/work/atlas")).unwrap();
        let again = db.upsert_project("atlas", Some("/work/atlas-v2")).unwrap();
        assert_eq!(id, again);

        let projects = db.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "atlas");
        assert_eq!(projects[0].base_path, Some("/work/atlas-v2".to_string()));
    }

    #[test]
    fn test_upsert_project_preserves_created_at() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_project("atlas", None).unwrap();
        let created = db.list_projects().unwrap()[0].created_at.clone();

        db.upsert_project("atlas", Some("/elsewhere")).unwrap();
        assert_eq!(db.list_projects().unwrap()[0].created_at, created);
    }

    #[test]
    fn test_upsert_project_clears_base_path_with_none() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_project("atlas", Some("/work/atlas")).unwrap();
        db.upsert_project("atlas", None).unwrap();

        assert_eq!(db.list_projects().unwrap()[0].base_path, None);
    }

    #[test]
    fn test_list_projects_ordered_by_name() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_project("zephyr", None).unwrap();
        db.upsert_project("atlas", None).unwrap();
        db.upsert_project("mercury", None).unwrap();

        let names: Vec<String> = db
            .list_projects()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["atlas", "mercury", "zephyr"]);
    }

    #[test]
    fn test_find_project_id_by_name_is_exact() {
        let db = Database::open_in_memory().unwrap();

        let id = db.upsert_project("atlas", None).unwrap();
        assert_eq!(db.find_project_id_by_name("atlas").unwrap(), Some(id));
        assert_eq!(db.find_project_id_by_name("Atlas").unwrap(), None);
        assert_eq!(db.find_project_id_by_name("missing").unwrap(), None);
    }

    #[test]
    fn test_insert_entry_round_trips_through_query() {
        let db = Database::open_in_memory().unwrap();
        let project_id = db.upsert_project("atlas", None).unwrap();

        let entry = NewEntry {
            ts: time::parse_event_ts("2024-03-09T14:30:00").unwrap(),
            title: "Ran calibration".to_string(),
            project_id: Some(project_id),
            work_type: WorkType::Experiment,
            tags: "calib,v2".to_string(),
            path: "/data/runs/0309".to_string(),
            duration_hours: Some(1.5),
            notes_md: "Drift within tolerance.".to_string(),
        };
        let id = db.insert_entry(&entry).unwrap();

        let rows = db.query_entries(&EntryFilter::new()).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, id);
        assert_eq!(row.ts, "2024-03-09T14:30:00");
        assert_eq!(row.title, "Ran calibration");
        assert_eq!(row.project, "atlas");
        assert_eq!(row.work_type, WorkType::Experiment);
        assert_eq!(row.tags, "calib,v2");
        assert_eq!(row.path, "/data/runs/0309");
        assert_eq!(row.duration_hours, Some(1.5));
        assert_eq!(row.notes_md, "Drift within tolerance.");
    }

    #[test]
    fn test_entry_without_project_has_empty_project_name() {
        let db = Database::open_in_memory().unwrap();

        db.insert_entry(&sample_entry("2024-03-09T10:00:00", "Solo work", None))
            .unwrap();

        let rows = db.query_entries(&EntryFilter::new()).unwrap();
        assert_eq!(rows[0].project, "");
    }

    #[test]
    fn test_query_orders_newest_first() {
        let db = Database::open_in_memory().unwrap();

        db.insert_entry(&sample_entry("2024-03-08T09:00:00", "old", None))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-10T09:00:00", "new", None))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-09T09:00:00", "mid", None))
            .unwrap();

        let titles: Vec<String> = db
            .query_entries(&EntryFilter::new())
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_query_date_range_is_inclusive() {
        let db = Database::open_in_memory().unwrap();

        db.insert_entry(&sample_entry("2024-03-08T23:59:00", "before", None))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-09T00:00:00", "first", None))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-10T23:59:00", "last", None))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-11T00:00:00", "after", None))
            .unwrap();

        let filter = EntryFilter::new()
            .start_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .end_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let titles: Vec<String> = db
            .query_entries(&filter)
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["last", "first"]);
    }

    #[test]
    fn test_query_empty_project_list_matches_nothing() {
        let db = Database::open_in_memory().unwrap();
        let project_id = db.upsert_project("atlas", None).unwrap();

        db.insert_entry(&sample_entry("2024-03-09T10:00:00", "a", Some(project_id)))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-09T11:00:00", "b", None))
            .unwrap();

        let none = db
            .query_entries(&EntryFilter::new().projects(vec![]))
            .unwrap();
        assert!(none.is_empty());

        let all = db.query_entries(&EntryFilter::new()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_query_filters_by_project_set() {
        let db = Database::open_in_memory().unwrap();
        let atlas = db.upsert_project("atlas", None).unwrap();
        let zephyr = db.upsert_project("zephyr", None).unwrap();

        db.insert_entry(&sample_entry("2024-03-09T10:00:00", "a", Some(atlas)))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-09T11:00:00", "z", Some(zephyr)))
            .unwrap();
        db.insert_entry(&sample_entry("2024-03-09T12:00:00", "loose", None))
            .unwrap();

        let rows = db
            .query_entries(&EntryFilter::new().projects(vec![atlas]))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "a");

        let rows = db
            .query_entries(&EntryFilter::new().projects(vec![atlas, zephyr]))
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_query_text_matches_title_notes_and_path() {
        let db = Database::open_in_memory().unwrap();

        let mut in_title = sample_entry("2024-03-09T10:00:00", "Calibration sweep", None);
        in_title.notes_md = "nothing".to_string();
        db.insert_entry(&in_title).unwrap();

        let mut in_notes = sample_entry("2024-03-09T11:00:00", "Morning", None);
        in_notes.notes_md = "reran the calibration".to_string();
        db.insert_entry(&in_notes).unwrap();

        let mut in_path = sample_entry("2024-03-09T12:00:00", "Afternoon", None);
        in_path.path = "/data/calibration/out".to_string();
        db.insert_entry(&in_path).unwrap();

        db.insert_entry(&sample_entry("2024-03-09T13:00:00", "Unrelated", None))
            .unwrap();

        let rows = db
            .query_entries(&EntryFilter::new().text("CALIB"))
            .unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_query_by_tag_substring() {
        let db = Database::open_in_memory().unwrap();

        let mut tagged = sample_entry("2024-03-09T10:00:00", "a", None);
        tagged.tags = "calib,v2".to_string();
        db.insert_entry(&tagged).unwrap();
        db.insert_entry(&sample_entry("2024-03-09T11:00:00", "b", None))
            .unwrap();

        let rows = db
            .query_entries(&EntryFilter::new().tags_contains("v2"))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "a");
    }

    #[test]
    fn test_duration_zero_is_distinct_from_unset() {
        let db = Database::open_in_memory().unwrap();

        let mut zero = sample_entry("2024-03-09T10:00:00", "zero", None);
        zero.duration_hours = Some(0.0);
        db.insert_entry(&zero).unwrap();
        db.insert_entry(&sample_entry("2024-03-09T11:00:00", "unset", None))
            .unwrap();

        let rows = db.query_entries(&EntryFilter::new()).unwrap();
        let by_title = |t: &str| rows.iter().find(|r| r.title == t).unwrap().duration_hours;
        assert_eq!(by_title("zero"), Some(0.0));
        assert_eq!(by_title("unset"), None);
    }

    #[test]
    fn test_get_entry_by_id() {
        let db = Database::open_in_memory().unwrap();

        let id = db
            .insert_entry(&sample_entry("2024-03-09T10:00:00", "findable", None))
            .unwrap();

        let row = db.get_entry(id).unwrap().unwrap();
        assert_eq!(row.title, "findable");
        assert!(db.get_entry(EntryId::new(9999)).unwrap().is_none());
    }

    #[test]
    fn test_recent_paths_are_distinct_and_newest_first() {
        let db = Database::open_in_memory().unwrap();

        for (ts, path) in [
            ("2024-03-09T10:00:00", "/a"),
            ("2024-03-09T11:00:00", "/b"),
            ("2024-03-09T12:00:00", "/a"),
            ("2024-03-09T13:00:00", "  "),
            ("2024-03-09T14:00:00", "/c"),
        ] {
            let mut entry = sample_entry(ts, "x", None);
            entry.path = path.to_string();
            db.insert_entry(&entry).unwrap();
        }

        let paths = db.recent_paths(10).unwrap();
        assert_eq!(paths, vec!["/c", "/a", "/b"]);

        let limited = db.recent_paths(2).unwrap();
        assert_eq!(limited, vec!["/c", "/a"]);
    }

    #[test]
    fn test_delete_project_sets_entry_project_null() {
        let db = Database::open_in_memory().unwrap();
        let project_id = db.upsert_project("atlas", None).unwrap();

        let entry_id = db
            .insert_entry(&sample_entry("2024-03-09T10:00:00", "kept", Some(project_id)))
            .unwrap();

        db.delete_project(project_id).unwrap();

        let row = db.get_entry(entry_id).unwrap().unwrap();
        assert_eq!(row.project, "");
    }

    #[test]
    fn test_delete_entry_cascades_to_attachments() {
        let db = Database::open_in_memory().unwrap();

        let entry_id = db
            .insert_entry(&sample_entry("2024-03-09T10:00:00", "doomed", None))
            .unwrap();
        db.insert_attachment(entry_id, "a.txt", "attachments/entry_1/a.txt")
            .unwrap();
        assert_eq!(db.list_attachments(entry_id).unwrap().len(), 1);

        db.delete_entry(entry_id).unwrap();
        assert_eq!(db.list_attachments(entry_id).unwrap().len(), 0);
    }

    #[test]
    fn test_attachment_requires_existing_entry() {
        let db = Database::open_in_memory().unwrap();

        let err = db
            .insert_attachment(EntryId::new(42), "a.txt", "attachments/entry_42/a.txt")
            .unwrap_err();
        assert!(matches!(err, crate::Error::Constraint(_)));
    }

    #[test]
    fn test_duplicate_project_name_maps_to_duplicate_error() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_project("atlas", None).unwrap();

        // Bypass the upsert to provoke the raw UNIQUE failure
        let err = db
            .conn
            .execute(
                "INSERT INTO projects (name, created_at) VALUES ('atlas', '2024-01-01T00:00:00Z')",
                [],
            )
            .map_err(crate::Error::from)
            .unwrap_err();
        assert!(matches!(err, crate::Error::Duplicate(_)));
    }

    #[test]
    fn test_list_attachments_in_creation_order() {
        let db = Database::open_in_memory().unwrap();

        let entry_id = db
            .insert_entry(&sample_entry("2024-03-09T10:00:00", "e", None))
            .unwrap();
        db.insert_attachment(entry_id, "b.txt", "attachments/entry_1/b.txt")
            .unwrap();
        db.insert_attachment(entry_id, "a.txt", "attachments/entry_1/a.txt")
            .unwrap();

        let names: Vec<String> = db
            .list_attachments(entry_id)
            .unwrap()
            .into_iter()
            .map(|a| a.filename)
            .collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }
}
