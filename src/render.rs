//! Task list rendering.
//!
//! A pure function of the filtered tasks and the active language strings;
//! never mutates the store.

use crate::i18n::Strings;
use crate::task::Task;

/// Render the filtered task list plus the localized counter line.
///
/// `total` is the size of the whole store, not the filtered view; the counter
/// always reports the full list.
pub fn render_tasks(tasks: &[&Task], strings: &Strings, total: usize) -> String {
    let mut lines = Vec::new();

    if tasks.is_empty() {
        lines.push(strings.no_tasks.to_string());
    }

    for task in tasks {
        let mark = if task.done { "x" } else { " " };
        let mut line = format!("[{mark}] {}  {}", task.id, task.text);
        if let Some(at) = task.remind_at {
            line.push_str("  (");
            line.push_str(&strings.remind_at(at));
            line.push(')');
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(strings.task_count(total));
    lines.join("\n")
}
