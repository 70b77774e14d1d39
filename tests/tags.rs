#[cfg(test)]
mod tests {
    use habsync::db::tags::{TagSync, Tags};
    use habsync::db::tasks::Tasks;
    use habsync::libs::task::{Task, TaskKind};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TagTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TagTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_upsert_insert_and_rename(_ctx: &mut TagTestContext) {
        let mut tags = Tags::new().unwrap();

        // First sight of the tag inserts it
        assert_eq!(tags.upsert("tag-1", Some("Work")).unwrap(), TagSync::Inserted);
        assert_eq!(tags.get_by_id("tag-1").unwrap().unwrap().name, "Work");

        // Same name again changes nothing
        assert_eq!(tags.upsert("tag-1", Some("Work")).unwrap(), TagSync::Unchanged);

        // A remote rename is followed
        assert_eq!(tags.upsert("tag-1", Some("Office")).unwrap(), TagSync::Renamed);
        assert_eq!(tags.get_by_id("tag-1").unwrap().unwrap().name, "Office");
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_missing_or_empty_names_never_rename(_ctx: &mut TagTestContext) {
        let mut tags = Tags::new().unwrap();

        tags.upsert("tag-2", Some("Health")).unwrap();

        assert_eq!(tags.upsert("tag-2", None).unwrap(), TagSync::Unchanged);
        assert_eq!(tags.upsert("tag-2", Some("")).unwrap(), TagSync::Unchanged);
        assert_eq!(tags.get_by_id("tag-2").unwrap().unwrap().name, "Health");
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_without_name_is_stored_empty(_ctx: &mut TagTestContext) {
        let mut tags = Tags::new().unwrap();

        assert_eq!(tags.upsert("tag-3", None).unwrap(), TagSync::Inserted);
        assert_eq!(tags.get_by_id("tag-3").unwrap().unwrap().name, "");

        // A later run that learns the real name fills it in
        assert_eq!(tags.upsert("tag-3", Some("Chores")).unwrap(), TagSync::Renamed);
        assert_eq!(tags.get_by_id("tag-3").unwrap().unwrap().name, "Chores");
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_task_tag_links_replaced_wholesale(_ctx: &mut TagTestContext) {
        let mut tags = Tags::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.upsert(&Task::new("task-a", "Tagged task", TaskKind::Habit)).unwrap();
        tags.upsert("tag-a", Some("Alpha")).unwrap();
        tags.upsert("tag-b", Some("Beta")).unwrap();

        tags.set_task_tags("task-a", &["tag-a".to_string(), "tag-b".to_string()]).unwrap();
        let linked = tags.get_task_tags("task-a").unwrap();
        assert_eq!(linked.len(), 2);

        // The next run reports a single tag; the old links disappear
        tags.set_task_tags("task-a", &["tag-b".to_string()]).unwrap();
        let linked = tags.get_task_tags("task-a").unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, "tag-b");
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_links_to_unknown_tags_are_skipped(_ctx: &mut TagTestContext) {
        let mut tags = Tags::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.upsert(&Task::new("task-b", "Sparsely tagged", TaskKind::Todo)).unwrap();
        tags.upsert("tag-known", Some("Known")).unwrap();

        // The task payload references a tag the tag listing never returned
        tags.set_task_tags("task-b", &["tag-known".to_string(), "tag-ghost".to_string()])
            .unwrap();

        let linked = tags.get_task_tags("task-b").unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, "tag-known");
    }
}
