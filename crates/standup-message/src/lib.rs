pub mod date;
pub mod section;
pub mod template;

pub use date::{report_date, today};
pub use template::{MessageTemplate, DEFAULT_LEAD, SEPARATOR};

use standup_core::ProjectEntry;

/// Render the status message for `projects` with the default lead label.
pub fn render_message(date: &str, projects: &[ProjectEntry]) -> String {
    MessageTemplate::default().render(date, projects)
}
