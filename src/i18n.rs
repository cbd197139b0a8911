//! Localized label tables for the two supported interface languages.

use chrono::{DateTime, Local, Utc};

use crate::prefs::Lang;

/// Static label set for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub all: &'static str,
    pub active: &'static str,
    pub completed: &'static str,
    pub confirm_clear: &'static str,
    pub confirm_import: &'static str,
    pub invalid_file: &'static str,
    pub reminder: &'static str,
    pub remind_prefix: &'static str,
    pub no_tasks: &'static str,
    task_singular: &'static str,
    task_plural: &'static str,
}

static AR: Strings = Strings {
    title: "قائمة المهام",
    all: "الكل",
    active: "غير منجزة",
    completed: "منجزة",
    confirm_clear: "هل تريد مسح كل المهام؟",
    confirm_import: "هل تريد استبدال المهام الحالية بالمحتوى المستورد؟",
    invalid_file: "ملف غير صالح",
    reminder: "تذكير: مهمة",
    remind_prefix: "تذكير",
    no_tasks: "لا توجد مهام",
    task_singular: "مهمة",
    task_plural: "مهمة",
};

static EN: Strings = Strings {
    title: "To-Do List",
    all: "All",
    active: "Active",
    completed: "Completed",
    confirm_clear: "Clear all tasks?",
    confirm_import: "Replace current tasks with imported tasks?",
    invalid_file: "Invalid file",
    reminder: "Reminder: Task",
    remind_prefix: "Remind",
    no_tasks: "No tasks",
    task_singular: "task",
    task_plural: "tasks",
};

impl Lang {
    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

impl Strings {
    /// Localized counter line, e.g. "3 tasks".
    pub fn task_count(&self, n: usize) -> String {
        if n == 1 {
            format!("1 {}", self.task_singular)
        } else {
            format!("{n} {}", self.task_plural)
        }
    }

    /// Localized reminder label for a deadline, rendered in local time.
    pub fn remind_at(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&Local);
        format!("{}: {}", self.remind_prefix, local.format("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_count_pluralizes_in_english() {
        let strings = Lang::En.strings();
        assert_eq!(strings.task_count(1), "1 task");
        assert_eq!(strings.task_count(3), "3 tasks");
    }

    #[test]
    fn arabic_is_default_table() {
        let strings = Lang::Ar.strings();
        assert_eq!(strings.invalid_file, "ملف غير صالح");
    }

    #[test]
    fn remind_at_includes_prefix() {
        let strings = Lang::En.strings();
        let label = strings.remind_at(Utc::now());
        assert!(label.starts_with("Remind: "));
    }
}
