//! Text rendering of a tree: the full `DISPLAY TREE` report and single
//! traversal listings.

use std::fmt;

use crate::binary_tree::{Order, OrderedTree};

const RULE: &str = "==============================================";

/// The `DISPLAY TREE` report: emptiness, height, node count, then the pre-,
/// in- and post-order listings with one `<id> <information>` line per record.
pub struct DisplayTree<'a> {
    tree: &'a OrderedTree,
}

/// One traversal, one `<id> <information>` line per record.
pub struct DisplayOrder<'a> {
    tree: &'a OrderedTree,
    order: Order,
}

impl OrderedTree {
    pub fn display(&self) -> DisplayTree<'_> {
        DisplayTree { tree: self }
    }

    pub fn display_order(&self, order: Order) -> DisplayOrder<'_> {
        DisplayOrder { tree: self, order }
    }
}

impl Order {
    pub fn title(&self) -> &'static str {
        match self {
            Order::PreOrder => "Pre-Order Traversal",
            Order::InOrder => "In-Order Traversal",
            Order::PostOrder => "Post-Order Traversal",
        }
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        writeln!(f, "DISPLAY TREE")?;
        writeln!(f, "{RULE}")?;
        if tree.is_empty() {
            writeln!(f, "Tree is empty")?;
        } else {
            writeln!(f, "Tree is NOT empty")?;
        }
        writeln!(f, "Height: {}", tree.height())?;
        writeln!(f, "Node count: {}", tree.len())?;
        writeln!(f)?;

        for order in [Order::PreOrder, Order::InOrder] {
            writeln!(f, "{}", order.title())?;
            write!(f, "{}", tree.display_order(order))?;
            writeln!(f)?;
        }
        writeln!(f, "{}", Order::PostOrder.title())?;
        write!(f, "{}", tree.display_order(Order::PostOrder))?;
        writeln!(f, "{RULE}")?;
        writeln!(f)
    }
}

impl fmt::Display for DisplayOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.tree.traverse(self.order) {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let tree = OrderedTree::new();
        let expected = "\
DISPLAY TREE
==============================================
Tree is empty
Height: 0
Node count: 0

Pre-Order Traversal

In-Order Traversal

Post-Order Traversal
==============================================

";
        assert_eq!(tree.display().to_string(), expected);
    }

    #[test]
    fn populated_report() {
        let mut tree = OrderedTree::new();
        for (id, information) in [(5, "five"), (3, "three"), (8, "eight"), (1, "one with spaces")] {
            tree.insert(id, information);
        }
        let expected = "\
DISPLAY TREE
==============================================
Tree is NOT empty
Height: 3
Node count: 4

Pre-Order Traversal
5 five
3 three
1 one with spaces
8 eight

In-Order Traversal
1 one with spaces
3 three
5 five
8 eight

Post-Order Traversal
1 one with spaces
3 three
8 eight
5 five
==============================================

";
        assert_eq!(tree.display().to_string(), expected);
    }

    #[test]
    fn report_after_removal_scenario() {
        let mut tree = OrderedTree::new();
        tree.insert(5, "a");
        tree.insert(3, "b");
        tree.insert(8, "c");
        tree.remove(3);
        let report = tree.display().to_string();
        assert!(report.contains("In-Order Traversal\n5 a\n8 c\n\n"));
        assert!(report.contains("Node count: 2\n"));
        assert!(report.contains("Height: 2\n"));
    }

    #[test]
    fn single_order_listing() {
        let tree: OrderedTree = [(2, "b"), (1, "a"), (3, "")].into_iter().collect();
        assert_eq!(tree.display_order(Order::InOrder).to_string(), "1 a\n2 b\n3 \n");
        assert_eq!(tree.display_order(Order::PostOrder).to_string(), "1 a\n3 \n2 b\n");
        assert_eq!(OrderedTree::new().display_order(Order::PreOrder).to_string(), "");
    }
}
