use clap::Parser;
use std::process::ExitCode;
use watermark_sync::commands::sync::{describe_error, run};
use watermark_sync::config::Cli;
use watermark_sync::executor::SyncEvent;
use watermark_sync::ui::StatusReporter;
use watermark_sync::SyncOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = watermark_sync::logging::init_logging(cli.verbose) {
        eprintln!("Warning: logging could not be initialized: {}", e);
    }

    let options = SyncOptions::from(&cli);
    let reporter = StatusReporter::new();
    let on_event = |event: &SyncEvent<'_>| reporter.handle(event);

    match run(&options, Some(&on_event)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // Only a corrupt watermark ends with a failure status.
            println!("{}", describe_error(&err));
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
