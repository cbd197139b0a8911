//! Command-line interface for tdl
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in their own submodules.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::prefs::Lang;
use crate::storage::Storage;
use crate::task::TaskStore;

mod prefs;
mod tasks;
mod transfer;
mod watch;

/// tdl - To-Do List
///
/// A single-user task list with optional time-based reminders. Tasks live in
/// a local data directory; reminders fire best-effort desktop notifications.
#[derive(Parser, Debug)]
#[command(name = "tdl")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to the per-user data dir)
    #[arg(long, global = true, env = "TDL_DIR")]
    pub dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task text
        text: String,

        /// Reminder time (RFC 3339 or "YYYY-MM-DDTHH:MM", local time)
        #[arg(long)]
        remind: Option<String>,
    },

    /// List tasks
    List {
        /// Filter: all, active, completed
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Toggle a task's completion flag
    Toggle {
        /// Task id
        id: String,
    },

    /// Edit a task's text and reminder
    Edit {
        /// Task id
        id: String,

        /// New task text
        text: String,

        /// New reminder time (RFC 3339 or "YYYY-MM-DDTHH:MM", local time)
        #[arg(long, conflicts_with = "clear_remind")]
        remind: Option<String>,

        /// Remove the reminder
        #[arg(long)]
        clear_remind: bool,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },

    /// Delete all tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export tasks as a JSON array
    Export {
        /// Output path ("-" for stdout; defaults to the configured file name)
        path: Option<PathBuf>,
    },

    /// Import tasks from a JSON array, replacing the current list
    Import {
        /// File to import
        path: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Run a single reminder scan
    Remind,

    /// Watch for due reminders on a fixed interval
    Watch {
        /// Seconds between scans (defaults to the configured interval)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Show or set the color theme (light, dark)
    Theme {
        /// New theme; omit to show the current one
        value: Option<String>,
    },

    /// Show or set the interface language (ar, en)
    Lang {
        /// New language; omit to show the current one
        value: Option<String>,
    },
}

/// Shared per-invocation state resolved from the global flags.
pub(crate) struct Context {
    pub storage: Storage,
    pub store: TaskStore,
    pub lang: Lang,
    pub config: Config,
}

pub(crate) fn context(dir: Option<PathBuf>) -> Result<Context> {
    let data_dir = match dir {
        Some(dir) => dir,
        None => Storage::default_dir()?,
    };
    let storage = Storage::new(data_dir);
    let store = TaskStore::load(storage.clone())?;
    let lang = Lang::load(&storage);
    let config = Config::load_or_default(&storage.config_file());
    Ok(Context {
        storage,
        store,
        lang,
        config,
    })
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let json = self.json;
        let quiet = self.quiet;
        let dir = self.dir;

        match self.command {
            Commands::Add { text, remind } => tasks::run_add(tasks::AddOptions {
                text,
                remind,
                dir,
                json,
                quiet,
            }),
            Commands::List { filter } => tasks::run_list(tasks::ListOptions {
                filter,
                dir,
                json,
                quiet,
            }),
            Commands::Toggle { id } => tasks::run_toggle(tasks::ToggleOptions {
                id,
                dir,
                json,
                quiet,
            }),
            Commands::Edit {
                id,
                text,
                remind,
                clear_remind,
            } => tasks::run_edit(tasks::EditOptions {
                id,
                text,
                remind,
                clear_remind,
                dir,
                json,
                quiet,
            }),
            Commands::Rm { id } => tasks::run_rm(tasks::RmOptions {
                id,
                dir,
                json,
                quiet,
            }),
            Commands::Clear { yes } => tasks::run_clear(tasks::ClearOptions {
                yes,
                dir,
                json,
                quiet,
            }),
            Commands::Export { path } => transfer::run_export(transfer::ExportOptions {
                path,
                dir,
                json,
                quiet,
            }),
            Commands::Import { path, yes } => transfer::run_import(transfer::ImportOptions {
                path,
                yes,
                dir,
                json,
                quiet,
            }),
            Commands::Remind => watch::run_remind(watch::RemindOptions { dir, json, quiet }),
            Commands::Watch { interval } => watch::run_watch(watch::WatchOptions {
                interval,
                dir,
                quiet,
            }),
            Commands::Theme { value } => prefs::run_theme(prefs::ThemeOptions {
                value,
                dir,
                json,
                quiet,
            }),
            Commands::Lang { value } => prefs::run_lang(prefs::LangOptions {
                value,
                dir,
                json,
                quiet,
            }),
        }
    }
}
