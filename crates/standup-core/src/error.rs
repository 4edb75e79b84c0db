use thiserror::Error;

use crate::entry::ListField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("project {0} not found")]
    ProjectNotFound(usize),

    #[error("no item {item} in {list} of project {project}")]
    ItemNotFound {
        project: usize,
        list: ListField,
        item: usize,
    },

    #[error("Project {}: project selection is required", .index + 1)]
    ProjectRequired { index: usize },

    #[error("unknown project: {0}")]
    UnknownProject(String),
}
