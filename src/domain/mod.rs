//! Domain layer: the tag tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod builder;
pub mod display;
pub mod error;
pub mod ops;
pub mod rules;
pub mod serializer;
pub mod tokens;

pub use arena::{TagNode, TagTree, ROOT_LABEL};
pub use builder::TreeBuilder;
pub use display::TreeDisplay;
pub use error::{DomainError, TreeResult};
pub use rules::{RemovePolicy, RewriteRules};
pub use tokens::WordMatcher;
