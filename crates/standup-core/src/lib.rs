pub mod entry;
pub mod error;
pub mod form;
pub mod project;

pub use entry::{ListField, ProjectEntry};
pub use error::FormError;
pub use form::FormState;
pub use project::ProjectCatalog;
