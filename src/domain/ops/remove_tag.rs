use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::TagTree;
use crate::domain::rules::{RemovePolicy, RewriteRules};

impl TagTree {
    /// Removes every `tag` element using the default rules.
    ///
    /// See [`TagTree::remove_tag_with`].
    pub fn remove_tag(&mut self, tag: &str) -> usize {
        self.remove_tag_with(tag, &RewriteRules::default())
    }

    /// Removes every `tag` element, promoting its children into its place.
    ///
    /// Tags in `rules.list_tags` additionally relabel each immediate child to
    /// `rules.list_item_label`. Any tag the rules do not name is a silent no-op.
    /// After a splice the node is examined again before descending, so directly
    /// nested wrappers of the same tag are all removed.
    ///
    /// Returns the number of wrappers removed.
    #[instrument(level = "debug", skip(self, rules))]
    pub fn remove_tag_with(&mut self, tag: &str, rules: &RewriteRules) -> usize {
        let Some(policy) = rules.removal_policy(tag) else {
            debug!(tag, "tag not removable, ignoring");
            return 0;
        };

        let mut removed = 0;
        let mut stack = vec![self.root()];
        while let Some(idx) = stack.pop() {
            while self.is_removable(idx, tag) {
                if !self.unwrap_in_place(idx, policy, &rules.list_item_label) {
                    break;
                }
                removed += 1;
            }
            if let Some(node) = self.get(idx) {
                if let Some(next) = node.next {
                    stack.push(next);
                }
                if let Some(child) = node.child {
                    stack.push(child);
                }
            }
        }
        debug!(removed, "removed tags");
        removed
    }

    fn is_removable(&self, idx: Index, tag: &str) -> bool {
        self.get(idx)
            .is_some_and(|n| n.is_element() && n.label == tag)
    }

    /// Turns the element at `idx` into its own first child and splices the
    /// remaining children in between it and its former next sibling.
    fn unwrap_in_place(&mut self, idx: Index, policy: RemovePolicy, item_label: &str) -> bool {
        let Some(first) = self.get(idx).and_then(|n| n.child) else {
            return false;
        };

        if policy == RemovePolicy::UnwrapList {
            let items: Vec<Index> = self.children(idx).collect();
            for item in items {
                if let Some(item) = self.get_mut(item) {
                    item.label = item_label.to_string();
                }
            }
        }

        let Some(first) = self.release(first) else {
            return false;
        };
        trace!(label = %first.label, "promoting first child");

        let Some(former_next) = self.get(idx).map(|n| n.next) else {
            return false;
        };
        let next = match first.next {
            Some(rest) => {
                let tail = self.last_sibling(rest);
                if let Some(tail) = self.get_mut(tail) {
                    tail.next = former_next;
                }
                Some(rest)
            }
            None => former_next,
        };

        if let Some(node) = self.get_mut(idx) {
            node.label = first.label;
            node.child = first.child;
            node.next = next;
        }
        true
    }
}
