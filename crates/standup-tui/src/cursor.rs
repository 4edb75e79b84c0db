use standup_core::{FormState, ListField};

/// A focusable field within one project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Project,
    Item { list: ListField, item: usize },
    Notes,
}

/// Which field of which project has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub project: usize,
    pub field: Field,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::project_field(0)
    }
}

impl Cursor {
    pub fn project_field(project: usize) -> Self {
        Self {
            project,
            field: Field::Project,
        }
    }

    pub fn item(project: usize, list: ListField, item: usize) -> Self {
        Self {
            project,
            field: Field::Item { list, item },
        }
    }

    pub fn notes(project: usize) -> Self {
        Self {
            project,
            field: Field::Notes,
        }
    }

    /// The list the cursor is in, if it is on a list row.
    pub fn list(&self) -> Option<ListField> {
        match self.field {
            Field::Item { list, .. } => Some(list),
            _ => None,
        }
    }

    /// Every focusable field of `form`, in display order.
    pub fn positions(form: &FormState) -> Vec<Cursor> {
        let mut out = Vec::new();
        for (project, entry) in form.projects().iter().enumerate() {
            out.push(Self::project_field(project));
            for &list in ListField::ALL {
                for item in 0..entry.list(list).len() {
                    out.push(Self::item(project, list, item));
                }
            }
            out.push(Self::notes(project));
        }
        out
    }

    /// Move `delta` fields up or down, stopping at either end of the form.
    pub fn step(self, form: &FormState, delta: isize) -> Cursor {
        let positions = Self::positions(form);
        if positions.is_empty() {
            return Cursor::default();
        }
        let current = positions.iter().position(|c| *c == self).unwrap_or(0);
        let last = positions.len() as isize - 1;
        let next = (current as isize + delta).clamp(0, last) as usize;
        positions[next]
    }

    /// Pull the cursor back inside `form` after rows or projects were removed.
    pub fn clamped(self, form: &FormState) -> Cursor {
        if form.is_empty() {
            return Cursor::default();
        }
        let project = self.project.min(form.len() - 1);
        if project != self.project {
            return Self::project_field(project);
        }
        match self.field {
            Field::Item { list, item } => {
                let len = form.projects()[project].list(list).len();
                Self::item(project, list, item.min(len.saturating_sub(1)))
            }
            field => Cursor { project, field },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_of_blank_form() {
        let form = FormState::new();
        let positions = Cursor::positions(&form);
        assert_eq!(
            positions,
            vec![
                Cursor::project_field(0),
                Cursor::item(0, ListField::CompletedTasks, 0),
                Cursor::item(0, ListField::InProgressTasks, 0),
                Cursor::item(0, ListField::Dependencies, 0),
                Cursor::notes(0),
            ]
        );
    }

    #[test]
    fn step_crosses_projects_and_stops_at_ends() {
        let mut form = FormState::new();
        form.add_project();

        let c = Cursor::notes(0).step(&form, 1);
        assert_eq!(c, Cursor::project_field(1));

        assert_eq!(Cursor::default().step(&form, -1), Cursor::default());
        assert_eq!(Cursor::notes(1).step(&form, 3), Cursor::notes(1));
    }

    #[test]
    fn clamped_after_item_removal() {
        let mut form = FormState::new();
        form.add_item(0, ListField::Dependencies).unwrap();
        let cursor = Cursor::item(0, ListField::Dependencies, 1);
        form.remove_item(0, ListField::Dependencies, 1).unwrap();
        assert_eq!(
            cursor.clamped(&form),
            Cursor::item(0, ListField::Dependencies, 0)
        );
    }

    #[test]
    fn clamped_after_project_removal() {
        let mut form = FormState::new();
        form.add_project();
        let cursor = Cursor::notes(1);
        form.remove_project(1).unwrap();
        assert_eq!(cursor.clamped(&form), Cursor::project_field(0));
        assert_eq!(Cursor::notes(0).clamped(&form), Cursor::notes(0));
    }
}
