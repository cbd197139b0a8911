//! tdl export/import command implementations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::context;
use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::task::ImportedTask;

pub struct ExportOptions {
    pub path: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ImportOptions {
    pub path: PathBuf,
    pub yes: bool,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TransferData {
    tasks: usize,
    path: String,
}

pub fn run_export(opts: ExportOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let ctx = context(opts.dir)?;
    let exported = ctx.store.export_json()?;
    let path = opts
        .path
        .unwrap_or_else(|| PathBuf::from(&ctx.config.export.file));

    if path == Path::new("-") {
        println!("{exported}");
        return Ok(());
    }

    ctx.storage.write_atomic(&path, exported.as_bytes())?;

    let data = TransferData {
        tasks: ctx.store.len(),
        path: path.display().to_string(),
    };
    let human = format!("Exported {} task(s) to {}", data.tasks, data.path);
    emit_success(output, "export", &data, Some(&human))
}

pub fn run_import(opts: ImportOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };

    let mut ctx = context(opts.dir)?;
    let strings = ctx.lang.strings();

    let content = std::fs::read_to_string(&opts.path)?;
    // Anything that is not a JSON array of task-shaped objects is an
    // invalid file; the store is left untouched.
    let imported: Vec<ImportedTask> = serde_json::from_str(&content)
        .map_err(|_| Error::InvalidFile(strings.invalid_file.to_string()))?;

    if !opts.yes {
        return Err(Error::ConfirmationRequired(format!(
            "{} (pass --yes)",
            strings.confirm_import
        )));
    }

    let count = ctx.store.replace_all(imported)?;

    let data = TransferData {
        tasks: count,
        path: opts.path.display().to_string(),
    };
    let human = format!("Imported {} task(s) from {}", data.tasks, data.path);
    emit_success(output, "import", &data, Some(&human))
}
