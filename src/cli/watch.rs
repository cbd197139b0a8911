//! tdl reminder commands: one-shot scan and the watch loop.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::cli::context;
use crate::error::Result;
use crate::notify::DesktopNotifier;
use crate::output::{emit_success, OutputOptions};
use crate::scheduler::{scan, SchedulerHandle};

pub struct RemindOptions {
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct WatchOptions {
    pub interval: Option<u64>,
    pub dir: Option<PathBuf>,
    pub quiet: bool,
}

/// Run a single reminder scan. Suitable for cron.
pub fn run_remind(opts: RemindOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    let mut notifier = DesktopNotifier::new(ctx.lang);
    let fired = scan(&mut ctx.store, Utc::now(), &mut notifier)?;

    #[derive(Serialize)]
    struct RemindData {
        fired: usize,
    }

    let human = format!("Fired {fired} reminder(s)");
    emit_success(output, "remind", &RemindData { fired }, Some(&human))
}

/// Run the scheduler until the process is terminated.
pub fn run_watch(opts: WatchOptions) -> Result<()> {
    let ctx = context(opts.dir)?;
    let interval_secs = opts
        .interval
        .unwrap_or(ctx.config.scheduler.interval_secs)
        .max(1);
    let notifier = DesktopNotifier::new(ctx.lang);

    if !opts.quiet {
        println!("Watching for reminders every {interval_secs}s (Ctrl-C to stop)");
    }
    info!(interval_secs, "starting reminder scheduler");

    let _handle = SchedulerHandle::spawn(
        ctx.store,
        notifier,
        Duration::from_secs(interval_secs),
    );

    // The scheduler thread owns the store until the process exits.
    loop {
        std::thread::park();
    }
}
