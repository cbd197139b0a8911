//! tdl preference commands (theme and language).

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::context;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::prefs::{Lang, Theme};

pub struct ThemeOptions {
    pub value: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct LangOptions {
    pub value: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct PrefData {
    value: &'static str,
}

pub fn run_theme(opts: ThemeOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };
    let ctx = context(opts.dir)?;

    let theme = match opts.value {
        Some(value) => {
            let theme: Theme = value.parse()?;
            theme.save(&ctx.storage)?;
            theme
        }
        None => Theme::load(&ctx.storage),
    };

    let data = PrefData {
        value: theme.as_str(),
    };
    emit_success(output, "theme", &data, Some(data.value))
}

pub fn run_lang(opts: LangOptions) -> Result<()> {
    let output = OutputOptions {
        json: opts.json,
        quiet: opts.quiet,
    };
    let ctx = context(opts.dir)?;

    let lang = match opts.value {
        Some(value) => {
            let lang: Lang = value.parse()?;
            lang.save(&ctx.storage)?;
            lang
        }
        None => ctx.lang,
    };

    let data = PrefData {
        value: lang.as_str(),
    };
    emit_success(output, "lang", &data, Some(data.value))
}
