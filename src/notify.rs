//! Notification delivery.
//!
//! Delivery is best-effort and must never propagate a failure back into the
//! scheduler: the bell is fire-and-forget, and when the desktop channel is
//! unavailable the notifier falls back to a plain localized line on stderr.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::prefs::Lang;
use crate::task::Task;

/// Collaborator interface consumed by the scheduler.
pub trait Notifier {
    /// Attempt to notify the user about a due reminder.
    fn deliver(&mut self, task: &Task);
}

/// Default notifier: terminal bell plus `notify-send`, with a stderr fallback.
#[derive(Debug)]
pub struct DesktopNotifier {
    lang: Lang,
}

impl DesktopNotifier {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn try_desktop(&self, task: &Task) -> bool {
        let strings = self.lang.strings();
        let status = Command::new("notify-send")
            .arg(strings.reminder)
            .arg(&task.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!(task = %task.id, code = ?status.code(), "notify-send failed");
                false
            }
            Err(err) => {
                debug!(task = %task.id, %err, "notify-send unavailable");
                false
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn deliver(&mut self, task: &Task) {
        // Terminal bell; failures are ignored.
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();

        if !self.try_desktop(task) {
            let strings = self.lang.strings();
            eprintln!("{}: {}", strings.remind_prefix, task.text);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records delivered task ids for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub delivered: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn deliver(&mut self, task: &Task) {
            self.delivered.push(task.id.clone());
        }
    }
}
