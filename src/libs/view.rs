use super::reconcile::SyncSummary;
use super::task::Task;
use crate::db::checklists::ChecklistItem;
use crate::db::histories::HistoryRow;
use crate::db::tags::Tag;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(rows: &Vec<(Task, usize, Option<NaiveDate>)>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "KIND", "ENTRIES", "LAST ENTRY"]);
        for (task, entries, last_entry) in rows {
            table.add_row(row![
                task.id,
                task.name,
                task.kind.as_str(),
                entries,
                last_entry.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &Vec<Tag>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for tag in tags {
            table.add_row(row![tag.id, tag.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn history(rows: &Vec<HistoryRow>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "VALUE", "ORIGIN", "TREND"]);
        for entry in rows {
            let trend = match entry.direction {
                1 => "↑",
                -1 => "↓",
                _ => "→",
            };
            table.add_row(row![entry.date.format("%Y-%m-%d"), format!("{:.2}", entry.value), entry.origin.as_str(), trend]);
        }
        table.printstd();

        Ok(())
    }

    pub fn checklist(items: &Vec<ChecklistItem>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ITEM", "DONE"]);
        for item in items {
            table.add_row(row![item.position + 1, item.name, if item.completed { "[x]" } else { "[ ]" }]);
        }
        table.printstd();

        Ok(())
    }

    pub fn totals(tasks: i64, tags: i64, entries: i64, checklist_items: i64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASKS", "TAGS", "HISTORY", "CHECKLIST ITEMS"]);
        table.add_row(row![tasks, tags, entries, checklist_items]);
        table.printstd();

        Ok(())
    }

    pub fn sync_summary(summary: &SyncSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["METRIC", "COUNT"]);
        table.add_row(row!["Tasks processed", summary.tasks_processed]);
        table.add_row(row!["Tasks failed", summary.tasks_failed]);
        table.add_row(row!["Entries added", summary.entries_added]);
        table.add_row(row!["Entries superseded", summary.entries_superseded]);
        table.add_row(row!["Entries skipped", summary.entries_skipped]);
        table.add_row(row!["Today entries recorded", summary.entries_synthesized]);
        table.add_row(row!["Tags added", summary.tags_inserted]);
        table.add_row(row!["Tags renamed", summary.tags_renamed]);
        table.printstd();

        Ok(())
    }
}
