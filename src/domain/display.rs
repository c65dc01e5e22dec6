/*
Tree rendering for debugging output: elements show as `<label>`, text leaves
as quoted strings.

The termtree value is assembled without recursion, but termtree's own Display
and Drop recurse per level, so very deep documents should not be rendered.
 */
use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::TagTree;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for TagTree {
    fn to_tree_string(&self) -> Tree<String> {
        // Pre-order slots with their parent's slot; children of one parent get
        // increasing slots in document order
        let mut order: Vec<(Index, Option<usize>)> = Vec::with_capacity(self.len());
        let mut stack = vec![(self.root(), None)];
        while let Some((idx, parent)) = stack.pop() {
            let slot = order.len();
            order.push((idx, parent));
            let children: Vec<Index> = self.children(idx).collect();
            for child in children.into_iter().rev() {
                stack.push((child, Some(slot)));
            }
        }

        // Assemble bottom-up so no subtree is built recursively
        let mut pending: Vec<Vec<Tree<String>>> = (0..order.len()).map(|_| Vec::new()).collect();
        for slot in (0..order.len()).rev() {
            let (idx, parent) = order[slot];
            let Some(node) = self.get(idx) else {
                continue;
            };
            let leaves = std::mem::take(&mut pending[slot]);
            let tree = Tree::new(node.to_string()).with_leaves(leaves.into_iter().rev());
            match parent {
                Some(parent) => pending[parent].push(tree),
                None => return tree,
            }
        }
        Tree::new("Empty tree".to_string())
    }
}
