pub mod aggregate;
pub mod form_state;
pub mod list_state;
pub mod photo;

pub use aggregate::{BadgeArtifacts, Employee, EmployeeFields, EmployeeId, EmployeePayload, FieldKey, ValidationError};
pub use photo::{PhotoAction, PhotoError, PhotoSelection};
