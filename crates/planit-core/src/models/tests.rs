#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use crate::models::{EntryForm, ListSummary, Priority, SortKey, Task, Theme};

    fn create_test_task(id: &str, time: Option<&str>, priority: Priority, created_at: i64) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            time: time.map(str::to_string),
            priority,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    #[test]
    fn test_task_serializes_camel_case_without_completed_at() {
        let task = create_test_task("a1", None, Priority::High, 1_700_000_000_000);
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], "a1");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert!(json["time"].is_null());
        assert!(json.get("completedAt").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_task_serializes_completed_at_when_present() {
        let mut task = create_test_task("a1", Some("08:30"), Priority::Low, 10);
        task.toggle_completed(20);
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["completed"], true);
        assert_eq!(json["completedAt"], 20);
        assert_eq!(json["time"], "08:30");
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id":"x","name":"Read","createdAt":5}"#).unwrap();

        assert_eq!(task.time, None);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn test_toggle_completed_is_its_own_inverse() {
        let mut task = create_test_task("a", None, Priority::Medium, 1);
        let original = task.clone();

        task.toggle_completed(100);
        assert!(task.completed);
        assert_eq!(task.completed_at, Some(100));

        task.toggle_completed(200);
        assert_eq!(task, original);
    }

    #[test]
    fn test_normalize_completion() {
        let mut stale = create_test_task("a", None, Priority::Medium, 7);
        stale.completed_at = Some(9);
        assert!(stale.normalize_completion());
        assert_eq!(stale.completed_at, None);

        let mut missing = create_test_task("b", None, Priority::Medium, 7);
        missing.completed = true;
        assert!(missing.normalize_completion());
        assert_eq!(missing.completed_at, Some(7));

        let mut fine = create_test_task("c", None, Priority::Medium, 7);
        assert!(!fine.normalize_completion());
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
        assert_eq!(Priority::from_str("MEDIUM").unwrap(), Priority::Medium);
        assert_eq!(Priority::from_str(" Low ").unwrap(), Priority::Low);
        assert!(Priority::from_str("urgent").is_err());
        assert!(Priority::from_str("").is_err());
    }

    #[test]
    fn test_sort_by_time_puts_untimed_first() {
        let mut tasks = vec![
            create_test_task("late", Some("21:00"), Priority::Medium, 1),
            create_test_task("none", None, Priority::Medium, 2),
            create_test_task("early", Some("07:15"), Priority::Medium, 3),
        ];
        SortKey::Time.apply(&mut tasks);

        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["none", "early", "late"]);
    }

    #[test]
    fn test_sort_by_priority_high_first() {
        let mut tasks = vec![
            create_test_task("low", None, Priority::Low, 1),
            create_test_task("high", None, Priority::High, 2),
            create_test_task("medium", None, Priority::Medium, 3),
        ];
        SortKey::Priority.apply(&mut tasks);

        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_by_created_newest_first() {
        let mut tasks = vec![
            create_test_task("old", None, Priority::Medium, 1),
            create_test_task("new", None, Priority::Medium, 3),
            create_test_task("mid", None, Priority::Medium, 2),
        ];
        SortKey::Created.apply(&mut tasks);

        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let tasks = vec![
            create_test_task("a", Some("09:00"), Priority::High, 4),
            create_test_task("b", None, Priority::Low, 2),
            create_test_task("c", Some("09:00"), Priority::High, 9),
            create_test_task("d", Some("06:30"), Priority::Medium, 1),
            create_test_task("e", None, Priority::High, 2),
        ];

        for key in [SortKey::Time, SortKey::Priority, SortKey::Created] {
            let mut once = tasks.clone();
            key.apply(&mut once);
            let mut twice = once.clone();
            key.apply(&mut twice);
            assert_eq!(once, twice, "sorting by {} twice changed the order", key.as_str());
        }

        // Equal keys keep insertion order
        let mut by_priority = tasks;
        SortKey::Priority.apply(&mut by_priority);
        let ids: Vec<_> = by_priority.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "e", "d", "b"]);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("time").unwrap(), SortKey::Time);
        assert_eq!(SortKey::from_str("Priority").unwrap(), SortKey::Priority);
        assert_eq!(SortKey::from_str("created").unwrap(), SortKey::Created);
        assert_eq!(SortKey::from_str("createdAt").unwrap(), SortKey::Created);
        assert!(SortKey::from_str("name").is_err());
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_entry_form_has_content() {
        let mut form = EntryForm::default();
        assert!(!form.has_content());

        form.name = "   ".to_string();
        assert!(!form.has_content());

        form.name = "Foo".to_string();
        assert!(form.has_content());

        form.reset();
        form.time = "10:00".to_string();
        assert!(form.has_content());

        form.reset();
        form.priority = "high".to_string();
        assert!(form.has_content());

        form.reset();
        assert_eq!(form, EntryForm::default());
    }

    #[test]
    fn test_entry_form_to_params_drops_empty_time() {
        let form = EntryForm {
            name: "Foo".to_string(),
            time: String::new(),
            priority: "low".to_string(),
        };
        let params = form.to_params();
        assert_eq!(params.name, "Foo");
        assert_eq!(params.time, None);
        assert_eq!(params.priority.as_deref(), Some("low"));
    }

    #[test]
    fn test_list_summary_counts_and_percent() {
        let mut tasks = vec![
            create_test_task("a", None, Priority::High, 1),
            create_test_task("b", None, Priority::High, 2),
            create_test_task("c", None, Priority::Low, 3),
        ];
        tasks[1].toggle_completed(5);

        let summary = ListSummary::from(tasks.as_slice());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.remaining_high, 1);
        assert_eq!(summary.pending(), 2);
        assert_eq!(summary.percent(), 33);
        assert!(!summary.is_all_done());
    }

    #[test]
    fn test_list_summary_empty_is_zero_percent() {
        let tasks: Vec<Task> = Vec::new();
        let summary = ListSummary::from(tasks.as_slice());
        assert_eq!(summary.percent(), 0);
        assert!(!summary.is_all_done());
    }

    #[test]
    fn test_list_summary_rounds_half_up() {
        let summary = ListSummary {
            total: 8,
            completed: 5,
            remaining_high: 0,
        };
        // 62.5 rounds to 63
        assert_eq!(summary.percent(), 63);
    }
}
