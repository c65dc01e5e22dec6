use tracing::{debug, instrument};

use crate::domain::arena::TagTree;

impl TagTree {
    /// Renames every element labelled `old` to `new`. Text leaves are never renamed.
    ///
    /// Returns the number of elements renamed.
    #[instrument(level = "debug", skip(self))]
    pub fn replace_tag(&mut self, old: &str, new: &str) -> usize {
        let mut renamed = 0;
        for idx in self.indices() {
            if let Some(node) = self.get_mut(idx) {
                if node.is_element() && node.label == old {
                    node.label = new.to_string();
                    renamed += 1;
                }
            }
        }
        debug!(renamed, "replaced tags");
        renamed
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::builder::TreeBuilder;

    #[test]
    fn test_replace_tag_skips_matching_text() {
        let mut tree = TreeBuilder::new()
            .build(["<html>", "<em>", "em", "</em>", "</html>"])
            .unwrap();
        assert_eq!(tree.replace_tag("em", "i"), 1);
        assert_eq!(tree.to_lines(), vec!["<html>", "<i>", "em", "</i>", "</html>"]);
    }
}
