//! Main sync command

use crate::config::{Config, SyncOptions, Watermark};
use crate::diff::{decide, ExcludeFilter};
use crate::executor::{execute_action, SyncCallback, SyncEvent, SyncReport};
use crate::scanner::{inspect_entry, list_entry_names};
use crate::types::SyncError;

/// Run one incremental sync pass
///
/// Loads the configuration, copies every source file modified after the
/// stored watermark and persists the first whole second after the run
/// started as the new watermark. The run waits for that second to pass
/// before listing, so a second run right after this one copies nothing.
/// Decisions are always made against the watermark loaded at start; it
/// never moves during the run.
///
/// With `persist_each_entry` set in the configuration the new watermark is
/// also written after every entry. In a dry run nothing is copied and the
/// configuration is left untouched.
///
/// # Errors
/// * Configuration errors (`ConfigNotFound`, `ConfigParse`, `ConfigMissingKey`)
/// * `InvalidTimestamp` before any entry is looked at
/// * `SourceNotADirectory`
/// * `Io` for listing or copy failures; the rest of the run is abandoned and
///   the end-of-run watermark is not written
pub fn run(options: &SyncOptions, on_event: Option<&SyncCallback<'_>>) -> Result<SyncReport, SyncError> {
    let config = Config::load(&options.config_path)?;
    let watermark = config.watermark()?;
    config.validate()?;
    let filter = ExcludeFilter::new(&config.exclude_patterns)?;

    let next_watermark = Watermark::next_second_boundary();
    let updated = config.with_watermark(next_watermark);
    let persist = !options.dry_run;

    let names = list_entry_names(&config.source_directory)?;
    let total = names.len();
    tracing::info!(
        source = %config.source_directory.display(),
        destination = %config.destination_directory.display(),
        %watermark,
        entries = total,
        dry_run = options.dry_run,
        "sync started"
    );
    emit_event(
        on_event,
        SyncEvent::Start {
            source: &config.source_directory,
            destination: &config.destination_directory,
            watermark,
            total,
        },
    );

    let mut report = SyncReport::new(total, next_watermark, options.dry_run);

    for (idx, name) in names.iter().enumerate() {
        let index = idx + 1;
        match inspect_entry(&config.source_directory, name) {
            Ok(scanned) => {
                let action = decide(&scanned, &watermark, &filter);
                tracing::debug!(entry = %name.display(), action = action.action_name(), "decided");

                let bytes = if options.dry_run {
                    0
                } else {
                    execute_action(&action, &config.destination_directory)?
                };
                report.record(&action, bytes);

                emit_event(
                    on_event,
                    SyncEvent::Entry {
                        index,
                        total,
                        action: &action,
                    },
                );
            }
            Err(SyncError::FileNotFound { path }) => {
                tracing::warn!(path = %path.display(), "entry vanished before it could be inspected");
                report.missing += 1;
                emit_event(
                    on_event,
                    SyncEvent::Missing {
                        index,
                        total,
                        path: &path,
                    },
                );
            }
            Err(err) => return Err(err),
        }

        if persist && config.persist_each_entry {
            updated.save(&options.config_path)?;
        }
    }

    if persist {
        updated.save(&options.config_path)?;
    }

    tracing::info!(
        copied = report.copied,
        skipped = report.skipped,
        missing = report.missing,
        bytes = report.bytes_copied,
        "sync finished"
    );
    emit_event(on_event, SyncEvent::Complete { report: &report });

    Ok(report)
}

fn emit_event(on_event: Option<&SyncCallback<'_>>, event: SyncEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

/// Render an error as the single line shown to the operator
pub fn describe_error(error: &SyncError) -> String {
    match error {
        SyncError::Io(io) => format!("An unexpected error occurred: {}", io),
        other => format!("Error: {}", other),
    }
}
