use crate::{
    db::{checklists::Checklists, histories::Histories, tags::Tags, tasks::Tasks},
    libs::{
        messages::Message,
        task::{TaskFilter, TaskKind},
        view::View,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Display the stored tag list instead of tasks
    #[arg(long)]
    tags: bool,

    /// Display one task's full history, looked up by id or name
    #[arg(short, long)]
    task: Option<String>,

    /// Restrict the task list to one kind (habit, daily, todo, reward)
    #[arg(short, long)]
    kind: Option<String>,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    if args.tags {
        return handle_tags();
    }
    if let Some(query) = args.task {
        return handle_task(&query);
    }
    handle_list(args.kind)
}

fn handle_tags() -> Result<()> {
    let mut tags_db = Tags::new()?;
    let tags = tags_db.list()?;

    if tags.is_empty() {
        msg_info!(Message::NoTagsStored);
        return Ok(());
    }

    msg_print!(Message::ShowTagsHeader, true);
    View::tags(&tags)?;
    Ok(())
}

fn handle_task(query: &str) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    // Identifiers are opaque strings, so the query is tried as an id first
    // and as a name second
    let task = match tasks_db.find(query)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(query.to_string()));
            return Ok(());
        }
    };

    let mut histories_db = Histories::new()?;
    let history = histories_db.fetch_rows(&task.id)?;

    if history.is_empty() {
        msg_info!(Message::NoHistoryStored(task.name.clone()));
    } else {
        msg_print!(Message::ShowHistoryHeader(task.name.clone()), true);
        View::history(&history)?;
    }

    let checklist = Checklists::new()?.fetch_for_task(&task.id)?;
    if !checklist.is_empty() {
        msg_print!(Message::ShowChecklistHeader, true);
        View::checklist(&checklist)?;
    }

    Ok(())
}

fn handle_list(kind: Option<String>) -> Result<()> {
    let filter = match kind {
        Some(raw) => TaskFilter::Kind(TaskKind::parse(&raw)),
        None => TaskFilter::All,
    };

    let tasks = Tasks::new()?.fetch(filter)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksStored);
        return Ok(());
    }

    let mut histories_db = Histories::new()?;
    let mut rows = Vec::new();
    for task in tasks {
        let history = histories_db.fetch_rows(&task.id)?;
        let last_entry = history.last().map(|row| row.date);
        rows.push((task, history.len(), last_entry));
    }

    msg_print!(Message::ShowTasksHeader, true);
    View::tasks(&rows)?;
    Ok(())
}
