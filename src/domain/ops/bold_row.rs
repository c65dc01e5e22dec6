use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TagTree;
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::rules::RewriteRules;

const TABLE_LABEL: &str = "table";

impl TagTree {
    /// Wraps the content of every cell in `row` (1-based) in a `b` element.
    pub fn bold_row(&mut self, row: usize) -> TreeResult<usize> {
        self.bold_row_with(row, &RewriteRules::default())
    }

    /// Wraps the content of every cell in `row` (1-based) of the first table in a
    /// new `rules.bold_label` element. Text cells have no content to wrap and are
    /// left alone.
    ///
    /// Returns the number of cells wrapped.
    #[instrument(level = "debug", skip(self, rules))]
    pub fn bold_row_with(&mut self, row: usize, rules: &RewriteRules) -> TreeResult<usize> {
        let table = self.find_table().ok_or(DomainError::TableNotFound)?;
        let rows: Vec<Index> = self.children(table).collect();
        let target = row
            .checked_sub(1)
            .and_then(|i| rows.get(i))
            .copied()
            .ok_or(DomainError::RowOutOfRange {
                row,
                rows: rows.len(),
            })?;

        let cells: Vec<Index> = self.children(target).collect();
        let mut wrapped = 0;
        for cell in cells {
            let Some(content) = self.get(cell).and_then(|c| c.child) else {
                continue;
            };
            let bold = self.insert_node(rules.bold_label.as_str(), Some(content), None);
            if let Some(cell) = self.get_mut(cell) {
                cell.child = Some(bold);
                wrapped += 1;
            }
        }
        debug!(row, wrapped, "bolded row");
        Ok(wrapped)
    }

    /// First `table` element, searching each node's following siblings before its
    /// children.
    pub fn find_table(&self) -> Option<Index> {
        let mut stack = vec![self.root()];
        while let Some(idx) = stack.pop() {
            let Some(node) = self.get(idx) else {
                continue;
            };
            if node.is_element() && node.label == TABLE_LABEL {
                return Some(idx);
            }
            if let Some(child) = node.child {
                stack.push(child);
            }
            if let Some(next) = node.next {
                stack.push(next);
            }
        }
        None
    }
}
