//! In-place structural rewrites of a [`TagTree`](crate::domain::TagTree).
//!
//! Each operation runs to completion over the current tree state and may be
//! applied in any order.

mod add_tag;
mod bold_row;
mod remove_tag;
mod replace_tag;
