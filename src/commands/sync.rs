//! Synchronization command for the scheduled batch run.
//!
//! Pulls tags and tasks with their per-task history from the remote service,
//! reconciles each task's history against the locally stored entries, and
//! persists the merged result. Designed to be invoked by an external
//! scheduler (cron, Task Scheduler); a failed run is simply retried on the
//! next tick.
//!
//! ## Run Outline
//!
//! 1. Read configuration, apply environment overrides, verify credentials.
//! 2. Print stored row totals for before/after comparison.
//! 3. Fetch tags; upsert each (failure downgrades to a warning).
//! 4. Fetch tasks; failure here is fatal since there is nothing to process.
//! 5. Per task: upsert metadata, replace tag links and checklist, reconcile
//!    history, persist the merge. A failing task is warned and skipped.
//! 6. Print totals again plus the run summary table.

use crate::{
    api::habitica::{Habitica, RemoteTask},
    db::{
        checklists::{ChecklistItem, Checklists},
        histories::Histories,
        tags::{TagSync, Tags},
        tasks::Tasks,
    },
    libs::{
        config::Config,
        history::parse_remote_timestamp,
        messages::Message,
        reconcile::{reconcile, ReconcileOutcome, SyncSummary},
        task::Task,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{NaiveDate, Utc};

/// Executes the synchronization run.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut habitica_config = config.habitica.unwrap_or_default();
    habitica_config.apply_env_overrides();

    if !habitica_config.is_configured() {
        msg_bail_anyhow!(Message::CredentialsNotConfigured);
    }

    let api = Habitica::new(&habitica_config)?;

    let mut tasks_db = Tasks::new()?;
    let mut tags_db = Tags::new()?;
    let mut histories_db = Histories::new()?;
    let mut checklists_db = Checklists::new()?;

    msg_print!(Message::StoredTotalsHeader, true);
    View::totals(tasks_db.count()?, tags_db.count()?, histories_db.count()?, checklists_db.count()?)?;

    msg_print!(Message::SyncFetching(habitica_config.api_url.clone()), true);

    let mut summary = SyncSummary::default();

    // Tags are auxiliary: a failed fetch downgrades to a warning and the
    // run continues with tasks
    match api.fetch_tags().await {
        Ok(remote_tags) => {
            msg_info!(Message::TagsFetched(remote_tags.len()));
            for remote_tag in &remote_tags {
                match tags_db.upsert(&remote_tag.id, remote_tag.name.as_deref())? {
                    TagSync::Inserted => summary.tags_inserted += 1,
                    TagSync::Renamed => summary.tags_renamed += 1,
                    TagSync::Unchanged => {}
                }
            }
        }
        Err(e) => msg_warning!(Message::TagsFetchFailed(e.to_string())),
    }

    // Without a task list there is nothing to reconcile
    let remote_tasks = api.fetch_tasks().await?;
    msg_info!(Message::TasksFetched(remote_tasks.len()));

    let today = Utc::now().date_naive();
    for remote_task in &remote_tasks {
        match process_task(&mut tasks_db, &mut tags_db, &mut histories_db, &mut checklists_db, remote_task, today) {
            Ok(outcome) => summary.absorb(&outcome),
            Err(e) => {
                summary.tasks_failed += 1;
                msg_warning!(Message::TaskProcessFailed(remote_task.text.clone(), e.to_string()));
            }
        }
    }

    msg_print!(Message::StoredTotalsHeader, true);
    View::totals(tasks_db.count()?, tags_db.count()?, histories_db.count()?, checklists_db.count()?)?;

    msg_print!(Message::SyncSummaryHeader, true);
    View::sync_summary(&summary)?;

    msg_success!(Message::SyncComplete);
    Ok(())
}

/// Persists one remote task: metadata, tag links, checklist, and the
/// reconciled history.
///
/// Errors propagate to the caller, which records the task as failed and
/// moves on to the next one.
fn process_task(
    tasks_db: &mut Tasks,
    tags_db: &mut Tags,
    histories_db: &mut Histories,
    checklists_db: &mut Checklists,
    remote_task: &RemoteTask,
    today: NaiveDate,
) -> Result<ReconcileOutcome> {
    let mut task = Task::new(&remote_task.id, &remote_task.text, remote_task.task_kind());

    // Timestamps that fail to parse are stored as NULL rather than failing
    // the whole task
    task.created_at = remote_task.created_at.as_ref().and_then(|raw| parse_remote_timestamp(raw).ok());
    task.completed_at = remote_task.date_completed.as_ref().and_then(|raw| parse_remote_timestamp(raw).ok());

    tasks_db.upsert(&task)?;
    tags_db.set_task_tags(&remote_task.id, &remote_task.tags)?;

    let items: Vec<ChecklistItem> = remote_task
        .checklist
        .iter()
        .enumerate()
        .map(|(position, record)| ChecklistItem {
            name: record.text.clone(),
            completed: record.completed,
            position: position as i32,
        })
        .collect();
    checklists_db.replace_for_task(&remote_task.id, &items)?;

    let stored = histories_db.fetch_for_task(&remote_task.id, &task.kind)?;
    let outcome = reconcile(remote_task, stored, today);
    histories_db.upsert_merged(&remote_task.id, &outcome.entries)?;

    Ok(outcome)
}
