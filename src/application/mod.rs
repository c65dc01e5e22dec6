//! Application layer: document facade and edit scripts
//!
//! This layer pairs a tree with the rules from [`Settings`](crate::config::Settings).

pub mod document;
pub mod edit;
pub mod error;

pub use document::Document;
pub use edit::{Edit, EditScript};
pub use error::{ApplicationError, ApplicationResult};
