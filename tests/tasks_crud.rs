#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::tasks::Tasks;
    use tudu::libs::task::{DeleteScope, FieldUpdate, PriorityFilter, SearchQuery, Task, TaskError};

    // HOME/LOCALAPPDATA are process-wide; hold the lock for the whole test
    // so parallel tests don't point each other at the wrong tempdir.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    /// A task due `offset_days` from today, created today.
    fn sample_task(name: &str, status: &str, tags: &str, priority: &str, offset_days: i64, info: &str) -> Task {
        let today = Local::now().date_naive();
        Task::new(name, status, tags, priority, today + Duration::days(offset_days), today, offset_days, info)
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn insert_normalizes_fields_and_assigns_increasing_ids(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "2%")).unwrap();
        let second = tasks.insert(&sample_task("WRITE REPORT", "in progress", "work", "medium", 7, "q3 draft")).unwrap();
        assert!(second > first);

        let stored = tasks.get_by_id(first).unwrap().unwrap();
        assert_eq!(stored.name, "Buy Milk");
        assert_eq!(stored.status, "Pending");
        assert_eq!(stored.tags, "Shopping");
        assert_eq!(stored.priority, "High");
        assert_eq!(stored.pending_days, 2);
        assert_eq!(stored.information, "2%");

        let other = tasks.get_by_id(second).unwrap().unwrap();
        assert_eq!(other.name, "Write Report");
        assert_eq!(other.status, "In Progress");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn insert_rejects_unknown_status(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(&sample_task("pay rent", "pending", "personal", "high", 1, "")).unwrap();

        let err = tasks.insert(&sample_task("bad task", "done", "work", "low", 1, "")).unwrap_err();
        assert!(matches!(err, TaskError::InvalidStatus(ref status) if status == "Done"));

        // No row was written for the rejected insert
        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn list_filters_by_priority(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "2%")).unwrap();
        tasks.insert(&sample_task("water plants", "pending", "personal", "low", 1, "")).unwrap();

        let high = tasks.fetch(PriorityFilter::High).unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].name, "Buy Milk");
        assert_eq!(high[0].pending_days, 2);

        let low = tasks.fetch(PriorityFilter::Low).unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Water Plants");

        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap().len(), 2);
        assert_eq!(tasks.fetch(PriorityFilter::Medium).unwrap().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn update_overwrites_exactly_one_field(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "2%")).unwrap();

        let affected = tasks.update_field(id, FieldUpdate::Status("Completed".to_string())).unwrap();
        assert_eq!(affected, 1);

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.status, "Completed");
        // Everything else untouched
        assert_eq!(stored.name, "Buy Milk");
        assert_eq!(stored.priority, "High");
        assert_eq!(stored.information, "2%");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn update_due_date_recomputes_pending_days(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "")).unwrap();

        let new_due = Local::now().date_naive() + Duration::days(5);
        tasks.update_field(id, FieldUpdate::DueDate(new_due)).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.due_date, new_due);
        assert_eq!(stored.pending_days, 5);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn update_status_skips_validation(_ctx: &mut TaskTestContext) {
        // Insert validates status; the update path does not. This asymmetry
        // is part of the persisted contract, pinned here.
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "")).unwrap();

        let affected = tasks.update_field(id, FieldUpdate::Status("done".to_string())).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().status, "done");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn update_missing_id_is_a_silent_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let affected = tasks.update_field(9999, FieldUpdate::Priority("Low".to_string())).unwrap();
        assert_eq!(affected, 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn delete_by_id_ignores_missing_or_zero_ids(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "")).unwrap();

        // Unspecified and zero ids delete nothing while still succeeding
        assert_eq!(tasks.delete(DeleteScope::ById(None)).unwrap(), 0);
        assert_eq!(tasks.delete(DeleteScope::ById(Some(0))).unwrap(), 0);
        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap().len(), 1);

        assert_eq!(tasks.delete(DeleteScope::ById(Some(id))).unwrap(), 1);
        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn delete_all_empties_the_table_and_is_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        for i in 1..=3 {
            tasks.insert(&sample_task(&format!("task {}", i), "pending", "work", "medium", i, "")).unwrap();
        }

        assert_eq!(tasks.delete(DeleteScope::All).unwrap(), 3);
        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap().len(), 0);

        // Deleting again is safe
        assert_eq!(tasks.delete(DeleteScope::All).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn search_matches_stored_casing_exactly(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(&sample_task("buy milk", "pending", "shopping", "high", 2, "")).unwrap();

        // Stored values are title-cased; the search value is not normalized
        assert!(tasks.search(&SearchQuery::Status("pending".to_string())).unwrap().is_empty());
        assert_eq!(tasks.search(&SearchQuery::Status("Pending".to_string())).unwrap().len(), 1);

        assert_eq!(tasks.search(&SearchQuery::Tags("Shopping".to_string())).unwrap().len(), 1);
        assert!(tasks.search(&SearchQuery::Tags("shopping".to_string())).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn search_by_missing_id_returns_empty(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let results = tasks.search(&SearchQuery::Id(12345)).unwrap();
        assert!(results.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn get_by_id_returns_none_for_missing_tasks(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.get_by_id(42).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn pending_days_is_not_refreshed_on_read(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let today = Local::now().date_naive();

        // Store a counter that disagrees with the dates on purpose: reads
        // must hand back the written value, not a recomputed one.
        let task = Task::new("stale check", "pending", "work", "low", today, today, 99, "");
        let id = tasks.insert(&task).unwrap();

        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().pending_days, 99);
        assert_eq!(tasks.fetch(PriorityFilter::All).unwrap()[0].pending_days, 99);
    }
}
