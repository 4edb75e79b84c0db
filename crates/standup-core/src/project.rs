pub const DEFAULT_PROJECTS: &[&str] = &["#WC-25-022-BrilliantOffice", "#WC-23-002-Benir"];

/// The fixed set of project identifiers a report entry may select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<String>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ProjectCatalog {
    /// Build a catalog from configured identifiers. Blank and duplicate
    /// identifiers are dropped; an empty result falls back to the defaults.
    pub fn new<I, S>(projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for p in projects {
            let p = p.into().trim().to_string();
            if !p.is_empty() && !out.contains(&p) {
                out.push(p);
            }
        }
        if out.is_empty() {
            return Self::default();
        }
        Self { projects: out }
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn contains(&self, project: &str) -> bool {
        self.projects.iter().any(|p| p == project)
    }

    pub fn position(&self, project: &str) -> Option<usize> {
        self.projects.iter().position(|p| p == project)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("#WC-25-022-BrilliantOffice"));
        assert!(catalog.contains("#WC-23-002-Benir"));
        assert!(!catalog.contains("#WC-00-000-Nope"));
    }

    #[test]
    fn new_trims_and_dedups() {
        let catalog = ProjectCatalog::new([" #A ", "#B", "#A", ""]);
        assert_eq!(catalog.projects(), &["#A".to_string(), "#B".to_string()]);
        assert_eq!(catalog.position("#B"), Some(1));
    }

    #[test]
    fn new_empty_falls_back_to_defaults() {
        let catalog = ProjectCatalog::new(Vec::<String>::new());
        assert_eq!(catalog, ProjectCatalog::default());
    }

    #[test]
    fn blank_only_input_is_never_empty() {
        let catalog = ProjectCatalog::new(["", "   ", "\t"]);
        assert!(!catalog.is_empty());
        assert_eq!(catalog, ProjectCatalog::default());
    }
}
