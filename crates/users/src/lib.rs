//! # Crimemap Users Crate
//!
//! User accounts and authentication for the Crimemap application:
//! credential hashing, the signup / authenticate service, and the
//! user-creation form contract consumed by the request layer.

pub mod forms;
pub mod password;
pub mod service;

// Re-export database types used at this crate's boundary
pub use crimemap_database::{User, UserError, UserRepository, UserResult};

pub use forms::{FieldError, FormErrors, UserAddForm};
pub use password::CredentialHasher;
pub use service::{SignupRequest, UserService};
