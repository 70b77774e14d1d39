#[cfg(test)]
mod tests {
    use habsync::db::checklists::{ChecklistItem, Checklists};
    use habsync::db::tasks::Tasks;
    use habsync::libs::task::{Task, TaskKind};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ChecklistTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ChecklistTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ChecklistTestContext { _temp_dir: temp_dir }
        }
    }

    fn item(name: &str, completed: bool, position: i32) -> ChecklistItem {
        ChecklistItem {
            name: name.to_string(),
            completed,
            position,
        }
    }

    fn seed_task(id: &str) {
        let mut tasks = Tasks::new().unwrap();
        tasks.upsert(&Task::new(id, "Task with checklist", TaskKind::Todo)).unwrap();
    }

    #[test_context(ChecklistTestContext)]
    #[test]
    fn test_checklist_round_trip(_ctx: &mut ChecklistTestContext) {
        seed_task("task-cl-1");
        let mut checklists = Checklists::new().unwrap();

        let items = vec![
            item("Pack bag", true, 0),
            item("Book tickets", false, 1),
            item("Print itinerary", false, 2),
        ];
        checklists.replace_for_task("task-cl-1", &items).unwrap();

        let stored = checklists.fetch_for_task("task-cl-1").unwrap();
        assert_eq!(stored, items);
    }

    #[test_context(ChecklistTestContext)]
    #[test]
    fn test_fetch_orders_by_position(_ctx: &mut ChecklistTestContext) {
        seed_task("task-cl-2");
        let mut checklists = Checklists::new().unwrap();

        // Stored out of order; position decides the read order
        let items = vec![item("Third", false, 2), item("First", false, 0), item("Second", false, 1)];
        checklists.replace_for_task("task-cl-2", &items).unwrap();

        let stored = checklists.fetch_for_task("task-cl-2").unwrap();
        let names: Vec<&str> = stored.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test_context(ChecklistTestContext)]
    #[test]
    fn test_replace_is_wholesale(_ctx: &mut ChecklistTestContext) {
        seed_task("task-cl-3");
        let mut checklists = Checklists::new().unwrap();

        checklists
            .replace_for_task("task-cl-3", &[item("Old one", false, 0), item("Old two", true, 1)])
            .unwrap();
        checklists.replace_for_task("task-cl-3", &[item("New only", false, 0)]).unwrap();

        let stored = checklists.fetch_for_task("task-cl-3").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "New only");

        // An empty remote checklist clears the stored one
        checklists.replace_for_task("task-cl-3", &[]).unwrap();
        assert!(checklists.fetch_for_task("task-cl-3").unwrap().is_empty());
    }

    #[test_context(ChecklistTestContext)]
    #[test]
    fn test_tasks_keep_separate_checklists(_ctx: &mut ChecklistTestContext) {
        seed_task("task-cl-4");
        seed_task("task-cl-5");
        let mut checklists = Checklists::new().unwrap();

        checklists.replace_for_task("task-cl-4", &[item("Only on four", false, 0)]).unwrap();
        checklists
            .replace_for_task("task-cl-5", &[item("Five a", false, 0), item("Five b", true, 1)])
            .unwrap();

        assert_eq!(checklists.fetch_for_task("task-cl-4").unwrap().len(), 1);
        assert_eq!(checklists.fetch_for_task("task-cl-5").unwrap().len(), 2);
    }
}
