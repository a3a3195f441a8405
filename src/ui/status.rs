//! Per-entry status lines

use crate::config::WATERMARK_FORMAT;
use crate::executor::{SyncEvent, SyncReport};
use crate::types::SyncAction;
use chrono::{DateTime, Local};
use console::style;
use indicatif::HumanBytes;
use std::path::Path;
use std::time::SystemTime;

/// Prints one line per handled entry plus a run header and summary
#[derive(Debug, Default)]
pub struct StatusReporter;

impl StatusReporter {
    pub fn new() -> Self {
        Self
    }

    /// Print the lines for one event.
    pub fn handle(&self, event: &SyncEvent<'_>) {
        println!("{}", format_event(event));
    }
}

/// Render an event as one or more status lines
pub fn format_event(event: &SyncEvent<'_>) -> String {
    match event {
        SyncEvent::Start {
            source,
            destination,
            watermark,
            total,
        } => format_header(source, destination, &watermark.to_string(), *total),
        SyncEvent::Entry {
            index,
            total,
            action,
        } => format!("{} {}", format_position(*index, *total), format_action(action)),
        SyncEvent::Missing { index, total, path } => format!(
            "{} {}   {}  removed before it could be inspected",
            format_position(*index, *total),
            style("MISSING").red(),
            path.display()
        ),
        SyncEvent::Complete { report } => format_summary(report),
    }
}

fn format_header(source: &Path, destination: &Path, watermark: &str, total: usize) -> String {
    format!(
        "Source Path: {}\nDestination Path: {}\nLast Run Time: {}\nFiles in Source Directory ({}): {}",
        source.display(),
        destination.display(),
        watermark,
        source.display(),
        total
    )
}

/// `[i/n]` prefix of an entry line
fn format_position(index: usize, total: usize) -> String {
    let position = format!("[{}/{}]", index, total);
    format!("  {}", style(position).dim())
}

fn format_action(action: &SyncAction) -> String {
    let name = action.name().display();
    match action {
        SyncAction::Copy(entry) => format!(
            "{}      {}  modified {} | {}",
            style("COPY").green(),
            name,
            format_mtime(entry.mtime),
            HumanBytes(entry.size)
        ),
        SyncAction::Skip { reason, .. } => {
            format!("{}      {}  {}", style("SKIP").dim(), name, reason)
        }
    }
}

fn format_summary(report: &SyncReport) -> String {
    let counts = format!(
        "Copied: {}  Skipped: {}  Missing: {} | {} transferred",
        report.copied,
        report.skipped,
        report.missing,
        HumanBytes(report.bytes_copied)
    );

    if report.dry_run {
        format!("{}\nDry-run mode: no changes were made.", counts)
    } else {
        format!("{}\nLast run time set to {}", counts, report.next_watermark)
    }
}

fn format_mtime(mtime: SystemTime) -> String {
    let local: DateTime<Local> = DateTime::from(mtime);
    local.format(WATERMARK_FORMAT).to_string()
}
