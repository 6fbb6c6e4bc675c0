#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::tasks::Tasks;
    use tudu::libs::export::{ExportFormat, ExportTask, Exporter};
    use tudu::libs::task::Task;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext {
                _guard: guard,
                temp_dir,
            }
        }
    }

    fn seed_tasks() -> Tasks {
        let mut tasks = Tasks::new().unwrap();
        let today = Local::now().date_naive();
        tasks
            .insert(&Task::new("buy milk", "pending", "shopping", "high", today + Duration::days(2), today, 2, "2%"))
            .unwrap();
        tasks
            .insert(&Task::new("file taxes", "in progress", "personal", "medium", today - Duration::days(3), today, -3, ""))
            .unwrap();
        tasks
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn csv_export_writes_one_row_per_task(ctx: &mut ExportTestContext) {
        let mut tasks = seed_tasks();
        let output = ctx.temp_dir.path().join("tasks.csv");

        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        let written = exporter.export(&tasks.all().unwrap()).unwrap();
        assert_eq!(written, output);

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + two rows
        assert!(lines[0].starts_with("id,name,status"));
        assert!(content.contains("Buy Milk"));
        assert!(content.contains("2 days left"));
        assert!(content.contains("Overdue, 3 days ago"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn json_export_round_trips(ctx: &mut ExportTestContext) {
        let mut tasks = seed_tasks();
        let output = ctx.temp_dir.path().join("tasks.json");

        Exporter::new(ExportFormat::Json, Some(output.clone())).export(&tasks.all().unwrap()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let rows: Vec<ExportTask> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Buy Milk");
        assert_eq!(rows[0].pending_days, 2);
        assert_eq!(rows[1].deadline, "Overdue, 3 days ago");
        assert_eq!(rows[1].information, "");
    }
}
