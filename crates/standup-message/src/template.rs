use standup_core::{ListField, ProjectEntry};

use crate::section;

pub const DEFAULT_LEAD: &str = "SANTHOSHKUMAR";

/// Line placed between consecutive project blocks.
pub const SEPARATOR: &str = "-x-x-x-x-x-x-x-x-x-x-x-x-x-x-x-x-";

/// The fixed status-message template.
///
/// Rendering is a pure function of the date, the lead label and the entries:
/// one block per project, in order, joined by [`SEPARATOR`] on its own line
/// with a blank line on either side. Blank list items are skipped, so callers
/// may pass entries straight from the form or already cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    lead: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD)
    }
}

impl MessageTemplate {
    pub fn new(lead: impl Into<String>) -> Self {
        Self { lead: lead.into() }
    }

    pub fn lead(&self) -> &str {
        &self.lead
    }

    pub fn render(&self, date: &str, projects: &[ProjectEntry]) -> String {
        let mut msg = String::new();
        for (i, project) in projects.iter().enumerate() {
            if i > 0 {
                msg.push('\n');
                msg.push_str(SEPARATOR);
                msg.push_str("\n\n");
            }
            self.append_project(&mut msg, date, project);
        }
        msg
    }

    fn append_project(&self, msg: &mut String, date: &str, project: &ProjectEntry) {
        msg.push_str(&format!("📅Date: {date}\n"));
        msg.push_str(&format!("📌Project: {}\n", project.project));
        msg.push_str(&format!("👤 Lead: {}\n", self.lead));
        msg.push_str("🤝 Dependency : null\n");

        for &field in ListField::ALL {
            msg.push('\n');
            section::append_list(msg, field, project.list(field));
        }

        msg.push('\n');
        section::append_notes(msg, &project.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn entry(
        project: &str,
        completed: &[&str],
        in_progress: &[&str],
        deps: &[&str],
        notes: &str,
    ) -> ProjectEntry {
        ProjectEntry {
            project: project.into(),
            completed_tasks: owned(completed),
            in_progress_tasks: owned(in_progress),
            dependencies: owned(deps),
            notes: notes.into(),
        }
    }

    const SINGLE: &str = concat!(
        "📅Date: 17/10/2026\n",
        "📌Project: #WC-25-022-BrilliantOffice\n",
        "👤 Lead: SANTHOSHKUMAR\n",
        "🤝 Dependency : null\n",
        "\n",
        "✅ *Tasks Completed Yesterday:*\n",
        " - Fixed bug \n",
        "\n",
        "🚧 *Tasks in Progress Today:* null\n",
        "\n",
        "⚠️ *Blockers / Dependencies:* null\n",
        "\n",
        "📝 *Notes / Comments:* null\n",
    );

    #[test]
    fn single_project_with_empty_sections() {
        let projects = vec![entry(
            "#WC-25-022-BrilliantOffice",
            &["Fixed bug"],
            &[""],
            &[],
            "",
        )];
        assert_eq!(MessageTemplate::default().render("17/10/2026", &projects), SINGLE);
    }

    #[test]
    fn two_projects_joined_by_separator() {
        let projects = vec![
            entry("#WC-25-022-BrilliantOffice", &["a"], &[], &[], ""),
            entry("#WC-23-002-Benir", &[], &["b"], &["c"], "note"),
        ];
        let msg = MessageTemplate::default().render("01/02/2026", &projects);

        assert_eq!(msg.matches(SEPARATOR).count(), 1);
        assert_eq!(msg.matches("📅Date: 01/02/2026").count(), 2);

        let sep = format!("\n{SEPARATOR}\n\n");
        let (first, second) = msg.split_once(&sep).unwrap();
        assert!(first.starts_with("📅Date: 01/02/2026\n📌Project: #WC-25-022-BrilliantOffice\n"));
        assert!(first.ends_with("📝 *Notes / Comments:* null\n"));
        assert!(second.starts_with("📅Date: 01/02/2026\n📌Project: #WC-23-002-Benir\n"));
        assert!(second.contains("🚧 *Tasks in Progress Today:* \n - b \n"));
        assert!(second.contains("⚠️ *Blockers / Dependencies:*\n - c \n"));
        assert!(second.ends_with("📝 *Notes / Comments:*\n - note \n"));
        assert!(!msg.trim_end().ends_with(SEPARATOR));
    }

    #[test]
    fn render_is_deterministic() {
        let projects = vec![
            entry("#WC-23-002-Benir", &["x", " "], &["y"], &[""], "n"),
            entry("#WC-25-022-BrilliantOffice", &[], &[], &["z"], ""),
        ];
        let template = MessageTemplate::default();
        assert_eq!(
            template.render("02/02/2026", &projects),
            template.render("02/02/2026", &projects)
        );
    }

    #[test]
    fn uncleaned_entries_render_like_cleaned() {
        let raw = entry("#WC-23-002-Benir", &["", "done", "  "], &["\t"], &[""], "");
        let template = MessageTemplate::default();
        assert_eq!(
            template.render("03/03/2026", &[raw.clone()]),
            template.render("03/03/2026", &[raw.cleaned()])
        );
    }

    #[test]
    fn whitespace_notes_render_null() {
        let projects = vec![entry("#WC-23-002-Benir", &["done"], &[], &[], "  \n\t")];
        let msg = MessageTemplate::default().render("03/03/2026", &projects);
        assert!(msg.ends_with("⚠️ *Blockers / Dependencies:* null\n\n📝 *Notes / Comments:* null\n"));
        assert!(!msg.contains(" -   "));
    }

    #[test]
    fn custom_lead() {
        let msg = MessageTemplate::new("ANU").render("03/03/2026", &[ProjectEntry::blank()]);
        assert!(msg.contains("👤 Lead: ANU\n"));
    }

    #[test]
    fn no_projects_renders_nothing() {
        assert_eq!(MessageTemplate::default().render("03/03/2026", &[]), "");
    }

    #[test]
    fn render_message_uses_default_lead() {
        let msg = crate::render_message("03/03/2026", &[ProjectEntry::blank()]);
        assert!(msg.contains(&format!("👤 Lead: {DEFAULT_LEAD}\n")));
    }
}
