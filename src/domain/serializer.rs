//! Tree to line serialization.

use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::TagTree;

enum Step {
    Enter(Index),
    Close(Index),
}

impl TagTree {
    /// One line per leaf and per opening/closing marker, in document order.
    #[instrument(level = "debug", skip(self))]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() * 2);
        let mut stack = vec![Step::Enter(self.root())];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(idx) => {
                    let Some(node) = self.get(idx) else {
                        continue;
                    };
                    if let Some(next) = node.next {
                        stack.push(Step::Enter(next));
                    }
                    match node.child {
                        Some(child) => {
                            lines.push(format!("<{}>", node.label));
                            stack.push(Step::Close(idx));
                            stack.push(Step::Enter(child));
                        }
                        None => lines.push(node.label.clone()),
                    }
                }
                Step::Close(idx) => {
                    if let Some(label) = self.label(idx) {
                        lines.push(format!("</{label}>"));
                    }
                }
            }
        }
        lines
    }

    /// Whole document as text, every line terminated by a line break.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
