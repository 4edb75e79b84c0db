use crate::entry::{ListField, ProjectEntry};
use crate::error::FormError;
use crate::project::ProjectCatalog;

/// In-memory state of the status-report form.
///
/// Holds at least one project entry at all times, and every sub-list of
/// every entry holds at least one row. Removals that would break either rule
/// are no-ops and report `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    projects: Vec<ProjectEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            projects: vec![ProjectEntry::blank()],
        }
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project(&self, index: usize) -> Result<&ProjectEntry, FormError> {
        self.projects
            .get(index)
            .ok_or(FormError::ProjectNotFound(index))
    }

    fn project_mut(&mut self, index: usize) -> Result<&mut ProjectEntry, FormError> {
        self.projects
            .get_mut(index)
            .ok_or(FormError::ProjectNotFound(index))
    }

    /// Whether the remove-project control should be offered.
    pub fn can_remove_project(&self) -> bool {
        self.projects.len() > 1
    }

    /// Append a blank entry, returning its index.
    pub fn add_project(&mut self) -> usize {
        self.projects.push(ProjectEntry::blank());
        self.projects.len() - 1
    }

    /// Remove the entry at `index`. Returns `false` without touching the
    /// form when it is the only entry left.
    pub fn remove_project(&mut self, index: usize) -> Result<bool, FormError> {
        self.project(index)?;
        if !self.can_remove_project() {
            return Ok(false);
        }
        self.projects.remove(index);
        Ok(true)
    }

    pub fn select_project(
        &mut self,
        index: usize,
        project: &str,
        catalog: &ProjectCatalog,
    ) -> Result<(), FormError> {
        if !catalog.contains(project) {
            return Err(FormError::UnknownProject(project.to_string()));
        }
        self.project_mut(index)?.project = project.to_string();
        Ok(())
    }

    pub fn set_notes(&mut self, index: usize, notes: impl Into<String>) -> Result<(), FormError> {
        self.project_mut(index)?.notes = notes.into();
        Ok(())
    }

    /// Whether the remove-item control should be offered for this list.
    pub fn can_remove_item(&self, project: usize, list: ListField) -> bool {
        self.projects
            .get(project)
            .is_some_and(|p| p.list(list).len() > 1)
    }

    /// Append an empty row to `list`, returning the new row's index.
    pub fn add_item(&mut self, project: usize, list: ListField) -> Result<usize, FormError> {
        let items = self.project_mut(project)?.list_mut(list);
        items.push(String::new());
        Ok(items.len() - 1)
    }

    /// Remove a row. Returns `false` without touching the list when it is the
    /// only row left.
    pub fn remove_item(
        &mut self,
        project: usize,
        list: ListField,
        item: usize,
    ) -> Result<bool, FormError> {
        let items = self.project_mut(project)?.list_mut(list);
        if item >= items.len() {
            return Err(FormError::ItemNotFound {
                project,
                list,
                item,
            });
        }
        if items.len() == 1 {
            return Ok(false);
        }
        items.remove(item);
        Ok(true)
    }

    pub fn set_item(
        &mut self,
        project: usize,
        list: ListField,
        item: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let slot = self
            .project_mut(project)?
            .list_mut(list)
            .get_mut(item)
            .ok_or(FormError::ItemNotFound {
                project,
                list,
                item,
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Validate the required project selection and return the cleaned
    /// entries, in form order, ready for rendering.
    pub fn submission(&self) -> Result<Vec<ProjectEntry>, FormError> {
        if let Some(index) = self.projects.iter().position(|p| !p.has_project()) {
            return Err(FormError::ProjectRequired { index });
        }
        Ok(self.projects.iter().map(ProjectEntry::cleaned).collect())
    }
}
