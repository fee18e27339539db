//! Port traits (interfaces)
//!
//! These traits define the boundaries between the editing session and the
//! collaborators it does not own: where file bytes live, and how the user
//! picks a file. Adapters implement them.

pub mod dialog;
pub mod storage;

pub use dialog::*;
pub use storage::*;
