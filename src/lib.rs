//! Arena-backed tag tree for line-oriented markup.
//!
//! A document arrives as one token per line: `<label>`, `</label>`, or text.
//! [`TreeBuilder`](domain::TreeBuilder) turns it into a [`TagTree`](domain::TagTree),
//! the rewrite operations mutate that tree in place, and the serializer writes it
//! back out in the same shape.
//!
//! ```ignore
//! let mut doc: Document = "<html>\n<p>\nthe cat sat\n</p>\n</html>".parse()?;
//! doc.add_tag("cat", "b");
//! doc.remove_tag("p");
//! print!("{}", doc.to_html());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Document, Edit, EditScript};
pub use config::Settings;
pub use domain::{DomainError, RewriteRules, TagNode, TagTree, TreeBuilder, TreeResult};
