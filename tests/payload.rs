#[cfg(test)]
mod tests {
    use habsync::api::habitica::{HistoryRecord, RemoteTag, RemoteTask};
    use habsync::libs::history::{Signal, TimestampError};
    use habsync::libs::task::TaskKind;
    use serde_json::json;

    fn task_from(value: serde_json::Value) -> RemoteTask {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_task_payload_deserializes() {
        // Everything except the id may be absent
        let task = task_from(json!({"id": "3fa0a2a5-8ef6-4563-92f8-1c4b18f99e0a"}));

        assert_eq!(task.id, "3fa0a2a5-8ef6-4563-92f8-1c4b18f99e0a");
        assert!(task.text.is_empty());
        assert!(task.kind.is_empty());
        assert!(task.created_at.is_none());
        assert!(task.completed.is_none());
        assert!(task.value.is_none());
        assert!(task.history.is_empty());
        assert!(task.checklist.is_empty());
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_unknown_payload_fields_are_ignored() {
        let task = task_from(json!({
            "id": "t-1",
            "text": "Stretch",
            "type": "habit",
            "priority": 1.5,
            "challenge": {"id": "c-9"},
            "repeat": {"m": true, "t": false}
        }));

        assert_eq!(task.text, "Stretch");
        assert_eq!(task.task_kind(), TaskKind::Habit);
    }

    #[test]
    fn test_task_kind_mapping() {
        assert_eq!(task_from(json!({"id": "a", "type": "habit"})).task_kind(), TaskKind::Habit);
        assert_eq!(task_from(json!({"id": "b", "type": "daily"})).task_kind(), TaskKind::Daily);
        assert_eq!(task_from(json!({"id": "c", "type": "todo"})).task_kind(), TaskKind::Todo);
        assert_eq!(task_from(json!({"id": "d", "type": "reward"})).task_kind(), TaskKind::Reward);

        // Task types this tool does not know stay visible instead of failing
        let odd = task_from(json!({"id": "e", "type": "challenge"}));
        assert_eq!(odd.task_kind(), TaskKind::Other("challenge".to_string()));
    }

    #[test]
    fn test_present_signal_by_kind() {
        let daily = task_from(json!({"id": "t-2", "type": "daily", "completed": true, "value": 9.0}));
        assert_eq!(daily.present_signal(), Signal::Completed(true));

        let daily_unknown = task_from(json!({"id": "t-3", "type": "daily"}));
        assert_eq!(daily_unknown.present_signal(), Signal::Completed(false));

        let habit = task_from(json!({"id": "t-4", "type": "habit", "value": 4.5}));
        assert_eq!(habit.present_signal(), Signal::Score(4.5));

        let habit_unknown = task_from(json!({"id": "t-5", "type": "habit"}));
        assert_eq!(habit_unknown.present_signal(), Signal::Score(0.0));
    }

    #[test]
    fn test_history_record_to_entry_uses_completed_flag() {
        let record: HistoryRecord =
            serde_json::from_value(json!({"date": "2024-01-05", "completed": false, "value": 3.0})).unwrap();

        let entry = record.to_entry(&TaskKind::Daily).unwrap();
        assert_eq!(entry.signal, Signal::Completed(false));
    }

    #[test]
    fn test_history_record_falls_back_to_value() {
        // Old records carry only a value; positive means done
        let record: HistoryRecord = serde_json::from_value(json!({"date": "2024-01-06", "value": 1.0})).unwrap();
        assert_eq!(record.to_entry(&TaskKind::Daily).unwrap().signal, Signal::Completed(true));

        let record: HistoryRecord = serde_json::from_value(json!({"date": "2024-01-07", "value": 0.0})).unwrap();
        assert_eq!(record.to_entry(&TaskKind::Todo).unwrap().signal, Signal::Completed(false));

        let record: HistoryRecord = serde_json::from_value(json!({"date": "2024-01-08", "value": 2.25})).unwrap();
        assert_eq!(record.to_entry(&TaskKind::Habit).unwrap().signal, Signal::Score(2.25));
    }

    #[test]
    fn test_history_record_without_date_is_an_error() {
        let record: HistoryRecord = serde_json::from_value(json!({"value": 1.0})).unwrap();
        assert!(matches!(record.to_entry(&TaskKind::Habit), Err(TimestampError::Missing)));
    }

    #[test]
    fn test_raw_date_for_diagnostics() {
        let record: HistoryRecord = serde_json::from_value(json!({"date": "not a date"})).unwrap();
        assert_eq!(record.raw_date(), "not a date");

        let record: HistoryRecord = serde_json::from_value(json!({"date": {"nested": true}})).unwrap();
        assert_eq!(record.raw_date(), "{\"nested\":true}");

        let record: HistoryRecord = serde_json::from_value(json!({"value": 2.0})).unwrap();
        assert_eq!(record.raw_date(), "");
    }

    #[test]
    fn test_tag_name_may_be_missing() {
        let tag: RemoteTag = serde_json::from_value(json!({"id": "tag-1", "name": "Work"})).unwrap();
        assert_eq!(tag.name.as_deref(), Some("Work"));

        let tag: RemoteTag = serde_json::from_value(json!({"id": "tag-2", "name": null})).unwrap();
        assert!(tag.name.is_none());

        let tag: RemoteTag = serde_json::from_value(json!({"id": "tag-3"})).unwrap();
        assert!(tag.name.is_none());
    }

    #[test]
    fn test_checklist_defaults() {
        let task = task_from(json!({
            "id": "t-6",
            "type": "todo",
            "checklist": [
                {"text": "Draft", "completed": true},
                {"text": "Review"},
                {"completed": false}
            ]
        }));

        assert_eq!(task.checklist.len(), 3);
        assert!(task.checklist[0].completed);
        assert_eq!(task.checklist[1].text, "Review");
        assert!(!task.checklist[1].completed);
        assert!(task.checklist[2].text.is_empty());
    }
}
