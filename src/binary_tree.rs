use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::record::Record;
use crate::tree::TreeOps;

/// Unbalanced binary search tree of [`Record`]s keyed by `id`.
///
/// Every id appears at most once. Lookups and mutations cost O(depth), and
/// depth is only bounded by the number of records: ascending inserts build a
/// chain.
pub struct OrderedTree {
    root: Link,
    len: usize,
}

struct Node {
    record: Record,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

/// Visiting order of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// node, left, right
    PreOrder,
    /// left, node, right: ascending ids
    InOrder,
    /// left, right, node
    PostOrder,
}

/// Lazy depth-first walk over every record of a tree.
pub struct Traversal<'a> {
    order: Order,
    stack: Vec<Step<'a>>,
}

enum Step<'a> {
    Expand(&'a Node),
    Emit(&'a Node),
}

impl OrderedTree {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Adds a record unless `id` is already present. An existing record is
    /// never overwritten.
    pub fn insert(&mut self, id: i32, information: impl Into<String>) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match id.cmp(&node.record.id) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    debug!(id, "rejected duplicate id");
                    return false;
                }
            }
        }
        *link = Some(Box::new(Node::new(Record::new(id, information))));
        self.len += 1;
        trace!(id, len = self.len, "inserted record");
        true
    }

    /// Removes the record with `id`, reporting whether anything was removed.
    ///
    /// A node with two children takes over its in-order successor's record,
    /// and the successor node is then unlinked from the right subtree.
    pub fn remove(&mut self, id: i32) -> bool {
        let before = self.len;
        let slot = Self::slot_for(&mut self.root, id);
        Self::unlink(slot, &mut self.len);
        let removed = self.len < before;
        if removed {
            trace!(id, len = self.len, "removed record");
        } else {
            debug!(id, "no record to remove");
        }
        removed
    }

    pub fn contains(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    pub fn find(&self, id: i32) -> Option<&Record> {
        let mut link = &self.root;
        while let Some(node) = link {
            match id.cmp(&node.record.id) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Copies the record with `id` into `out`. On a miss `out` is left as it was.
    pub fn get(&self, id: i32, out: &mut Record) -> bool {
        match self.find(id) {
            Some(record) => {
                out.clone_from(record);
                true
            }
            None => false,
        }
    }

    pub fn root(&self) -> Option<&Record> {
        self.root.as_deref().map(|node| &node.record)
    }

    /// Copies the root record into `out`, or writes [`Record::sentinel`]
    /// (`id == -1`) when the tree is empty.
    pub fn get_root(&self, out: &mut Record) -> bool {
        match self.root() {
            Some(record) => {
                out.clone_from(record);
                true
            }
            None => {
                *out = Record::sentinel();
                false
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path, recomputed on every
    /// call. An empty tree has height 0 and a lone root height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        height
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        Traversal {
            order,
            stack: self.root.as_deref().map(Step::Expand).into_iter().collect(),
        }
    }

    pub fn pre_order(&self) -> Traversal<'_> {
        self.traverse(Order::PreOrder)
    }

    pub fn in_order(&self) -> Traversal<'_> {
        self.traverse(Order::InOrder)
    }

    pub fn post_order(&self) -> Traversal<'_> {
        self.traverse(Order::PostOrder)
    }

    /// Frees every node, children before their parent. Clearing an empty tree
    /// does nothing.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }

        let mut freed = 0usize;
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => {
                    drop(node);
                    freed += 1;
                }
                (left, right) => {
                    // revisit the parent once both children are gone
                    pending.push(node);
                    pending.extend(left);
                    pending.extend(right);
                }
            }
        }
        self.len = 0;
        debug!(freed, "cleared tree");
    }

    /// The link holding `id`, or the empty link where it would be inserted.
    fn slot_for(mut link: &mut Link, id: i32) -> &mut Link {
        loop {
            match link.as_deref().map(|node| id.cmp(&node.record.id)) {
                None | Some(Ordering::Equal) => return link,
                Some(Ordering::Less) => {
                    if let Some(node) = link {
                        link = &mut node.left;
                    }
                }
                Some(Ordering::Greater) => {
                    if let Some(node) = link {
                        link = &mut node.right;
                    }
                }
            }
        }
    }

    fn unlink(slot: &mut Link, len: &mut usize) {
        let Some(mut node) = slot.take() else {
            return;
        };
        match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *slot = child;
                *len -= 1;
            }
            (left, right) => {
                node.left = left;
                node.right = right;
                // the successor has no left child, so unlinking it is the
                // single-child case and accounts for the removed record
                if let Some(successor) = Self::take_leftmost(&mut node.right) {
                    node.record = successor.record;
                    *len -= 1;
                }
                *slot = Some(node);
            }
        }
    }

    /// Detaches the minimum node of a subtree, splicing its right child into
    /// its place.
    fn take_leftmost(mut link: &mut Link) -> Link {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

impl Node {
    fn new(record: Record) -> Self {
        Node {
            record,
            left: None,
            right: None,
        }
    }
}

impl Default for OrderedTree {
    fn default() -> Self {
        OrderedTree::new()
    }
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl TreeOps for OrderedTree {
    fn insert(&mut self, id: i32, information: String) -> bool {
        OrderedTree::insert(self, id, information)
    }

    fn contains(&self, id: i32) -> bool {
        OrderedTree::contains(self, id)
    }

    fn remove(&mut self, id: i32) -> bool {
        OrderedTree::remove(self, id)
    }

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(node) => return Some(&node.record),
                Step::Expand(node) => self.expand(node),
            }
        }
        None
    }
}

impl<'a> Traversal<'a> {
    pub fn order(&self) -> Order {
        self.order
    }

    // Steps are pushed in reverse of the order they must be popped.
    fn expand(&mut self, node: &'a Node) {
        let left = node.left.as_deref().map(Step::Expand);
        let right = node.right.as_deref().map(Step::Expand);
        let steps = match self.order {
            Order::PreOrder => [right, left, Some(Step::Emit(node))],
            Order::InOrder => [right, Some(Step::Emit(node)), left],
            Order::PostOrder => [Some(Step::Emit(node)), right, left],
        };
        self.stack.extend(steps.into_iter().flatten());
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = &'a Record;
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<S: Into<String>> Extend<(i32, S)> for OrderedTree {
    fn extend<I: IntoIterator<Item = (i32, S)>>(&mut self, iter: I) {
        for (id, information) in iter {
            self.insert(id, information);
        }
    }
}

impl<S: Into<String>> FromIterator<(i32, S)> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = (i32, S)>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl fmt::Debug for OrderedTree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("id", &self.record.id)
            .field("information", &self.record.information)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
