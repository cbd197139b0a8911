//! tdl task command implementations.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::cli::context;
use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::render::render_tasks;
use crate::task::{Filter, Task};

pub struct AddOptions {
    pub text: String,
    pub remind: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub filter: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ToggleOptions {
    pub id: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub id: String,
    pub text: String,
    pub remind: Option<String>,
    pub clear_remind: bool,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RmOptions {
    pub id: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ClearOptions {
    pub yes: bool,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Parse a reminder argument: RFC 3339, or the datetime-local form
/// `YYYY-MM-DDTHH:MM` interpreted in local time.
pub(crate) fn parse_remind_arg(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            Error::InvalidArgument(format!(
                "invalid reminder time '{trimmed}' (expected RFC 3339 or YYYY-MM-DDTHH:MM)"
            ))
        })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            Error::InvalidArgument(format!("invalid local reminder time '{trimmed}'"))
        })
}

#[derive(Serialize)]
struct TaskData<'a> {
    task: &'a Task,
}

pub fn run_add(opts: AddOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };
    let remind_at = opts
        .remind
        .as_deref()
        .map(parse_remind_arg)
        .transpose()?;

    let mut ctx = context(opts.dir)?;
    match ctx.store.add(&opts.text, remind_at)? {
        Some(task) => {
            let human = format!("Added {}", task.id);
            emit_success(output, "add", &TaskData { task }, Some(&human))
        }
        // Empty text is a silent no-op.
        None => Ok(()),
    }
}

pub fn run_list(opts: ListOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };
    let filter: Filter = opts.filter.parse()?;

    let ctx = context(opts.dir)?;
    let filtered: Vec<&Task> = ctx.store.filter(filter).collect();
    let human = render_tasks(&filtered, ctx.lang.strings(), ctx.store.len());
    emit_success(output, "list", &filtered, Some(&human))
}

pub fn run_toggle(opts: ToggleOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    match ctx.store.toggle(&opts.id)? {
        Some(task) => {
            let state = if task.done { "done" } else { "active" };
            let human = format!("{} is now {state}", task.id);
            emit_success(output, "toggle", &TaskData { task }, Some(&human))
        }
        None => Err(Error::TaskNotFound(opts.id)),
    }
}

pub fn run_edit(opts: EditOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    let current = ctx
        .store
        .get(&opts.id)
        .ok_or_else(|| Error::TaskNotFound(opts.id.clone()))?;

    let remind_at = if opts.clear_remind {
        None
    } else {
        match opts.remind.as_deref() {
            Some(value) => Some(parse_remind_arg(value)?),
            None => current.remind_at,
        }
    };

    match ctx.store.edit(&opts.id, &opts.text, remind_at)? {
        Some(task) => {
            let human = format!("Updated {}", task.id);
            emit_success(output, "edit", &TaskData { task }, Some(&human))
        }
        // Empty text is a silent no-op.
        None => Ok(()),
    }
}

pub fn run_rm(opts: RmOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    match ctx.store.remove(&opts.id)? {
        Some(task) => {
            let human = format!("Deleted {}", task.id);
            emit_success(output, "rm", &TaskData { task: &task }, Some(&human))
        }
        None => Err(Error::TaskNotFound(opts.id)),
    }
}

pub fn run_clear(opts: ClearOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    if !opts.yes {
        return Err(Error::ConfirmationRequired(format!(
            "{} (pass --yes)",
            ctx.lang.strings().confirm_clear
        )));
    }

    let removed = ctx.store.clear()?;

    #[derive(Serialize)]
    struct ClearData {
        removed: usize,
    }

    let human = format!("Cleared {removed} task(s)");
    emit_success(output, "clear", &ClearData { removed }, Some(&human))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_remind_accepts_rfc3339() {
        let parsed = parse_remind_arg("2026-03-01T10:30:00Z").expect("parse");
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_remind_accepts_datetime_local() {
        let parsed = parse_remind_arg("2026-03-01T10:30").expect("parse");
        let local = parsed.with_timezone(&Local);
        assert_eq!(local.format("%Y-%m-%dT%H:%M").to_string(), "2026-03-01T10:30");
    }

    #[test]
    fn parse_remind_rejects_garbage() {
        let err = parse_remind_arg("tomorrow-ish").expect_err("invalid");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
