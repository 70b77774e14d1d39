use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Habit,
    Daily,
    Todo,
    Reward,
    Other(String),
}

impl TaskKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "habit" => TaskKind::Habit,
            "daily" => TaskKind::Daily,
            "todo" => TaskKind::Todo,
            "reward" => TaskKind::Reward,
            other => TaskKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskKind::Habit => "habit",
            TaskKind::Daily => "daily",
            TaskKind::Todo => "todo",
            TaskKind::Reward => "reward",
            TaskKind::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub kind: TaskKind,
    pub created_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub last_synced: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(id: &str, name: &str, kind: TaskKind) -> Self {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            created_at: None,
            completed_at: None,
            last_synced: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Kind(TaskKind),
}
