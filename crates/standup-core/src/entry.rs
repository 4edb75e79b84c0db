use std::fmt;

use serde::Serialize;

/// One of the three editable sub-lists of a project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    CompletedTasks,
    InProgressTasks,
    Dependencies,
}

impl ListField {
    /// Form order.
    pub const ALL: &'static [ListField] = &[
        ListField::CompletedTasks,
        ListField::InProgressTasks,
        ListField::Dependencies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListField::CompletedTasks => "Tasks Completed Yesterday",
            ListField::InProgressTasks => "Tasks In Progress",
            ListField::Dependencies => "Dependencies",
        }
    }

    /// Placeholder shown for an empty input row, e.g. "Enter dependency".
    pub fn placeholder(&self) -> &'static str {
        match self {
            ListField::CompletedTasks => "Enter task completed yesterday",
            ListField::InProgressTasks => "Enter task in progress",
            ListField::Dependencies => "Enter dependency",
        }
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One project's status-report record.
///
/// While the form is being edited every sub-list holds at least one entry so
/// there is always an input row to type into. [`ProjectEntry::cleaned`]
/// produces the copy that gets rendered and sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    /// Selected project identifier; empty until the user picks one.
    pub project: String,
    #[serde(rename = "tasks_completed_yesterday")]
    pub completed_tasks: Vec<String>,
    #[serde(rename = "tasks_in_progress")]
    pub in_progress_tasks: Vec<String>,
    pub dependencies: Vec<String>,
    pub notes: String,
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self::blank()
    }
}

impl ProjectEntry {
    /// A fresh entry: no project selected, one blank row per sub-list.
    pub fn blank() -> Self {
        Self {
            project: String::new(),
            completed_tasks: vec![String::new()],
            in_progress_tasks: vec![String::new()],
            dependencies: vec![String::new()],
            notes: String::new(),
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::CompletedTasks => &self.completed_tasks,
            ListField::InProgressTasks => &self.in_progress_tasks,
            ListField::Dependencies => &self.dependencies,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::CompletedTasks => &mut self.completed_tasks,
            ListField::InProgressTasks => &mut self.in_progress_tasks,
            ListField::Dependencies => &mut self.dependencies,
        }
    }

    pub fn has_project(&self) -> bool {
        !self.project.trim().is_empty()
    }

    /// Copy with whitespace-only sub-list entries dropped.
    /// Surviving entries are kept verbatim.
    pub fn cleaned(&self) -> Self {
        Self {
            project: self.project.clone(),
            completed_tasks: non_blank(&self.completed_tasks),
            in_progress_tasks: non_blank(&self.in_progress_tasks),
            dependencies: non_blank(&self.dependencies),
            notes: self.notes.clone(),
        }
    }
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(items: &[String]) -> Vec<String> {
    items.iter().filter(|s| !is_blank(s)).cloned().collect()
}
