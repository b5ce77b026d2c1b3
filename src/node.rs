use std::cmp::{self, Ordering};

use crate::error::DuplicateKey;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    pub(crate) height: usize,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Cached height of an optional subtree. An absent child contributes 0.
    pub(crate) fn height(link: &Link<K, V>) -> usize {
        link.as_ref().map_or(0, |node| node.height)
    }

    /// Positive means the right subtree is taller.
    fn balance_factor(&self) -> isize {
        Self::height(&self.right) as isize - Self::height(&self.left) as isize
    }

    /// Recomputes the cached height from the child links.
    /// Must be called on any node whose children just changed,
    /// before its balance factor is read.
    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(Self::height(&self.left), Self::height(&self.right));
    }

    /// Rotates the subtree to the left and returns the pivot as new root.
    /// The right child must be present.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let mut pivot = node.right.take().unwrap();
        node.right = pivot.left.take();
        node.adjust_height();
        pivot.left = Some(node);
        pivot.adjust_height();
        pivot
    }

    /// Rotates the subtree to the right and returns the pivot as new root.
    /// The left child must be present.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let mut pivot = node.left.take().unwrap();
        node.left = pivot.right.take();
        node.adjust_height();
        pivot.right = Some(node);
        pivot.adjust_height();
        pivot
    }

    /// Restores the AVL condition at this node and adjusts its height.
    /// Resulting balance factor will be -1, 0 or +1.
    /// The entry balance factor never exceeds +-2 after a single update.
    fn balance(mut node: Box<Self>) -> Box<Self> {
        node.adjust_height();
        match node.balance_factor() {
            2 => {
                // Right heavy. A right child leaning left needs a
                // double rotation, a single one would not restore balance.
                let right = node.right.take().unwrap();
                node.right = Some(if right.balance_factor() < 0 {
                    Self::rotate_right(right)
                } else {
                    right
                });
                Self::rotate_left(node)
            }
            -2 => {
                // Left heavy, mirror image.
                let left = node.left.take().unwrap();
                node.left = Some(if left.balance_factor() > 0 {
                    Self::rotate_left(left)
                } else {
                    left
                });
                Self::rotate_right(node)
            }
            _ => node,
        }
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Inserts into the subtree behind `link`, rebalancing every visited
    /// node on the way back up. If the key is already present the subtree
    /// is left untouched, heights included.
    pub(crate) fn insert(link: &mut Link<K, V>, key: K, value: V) -> Result<(), DuplicateKey> {
        let Some(mut node) = link.take() else {
            *link = Some(Node::new(key, value));
            return Ok(());
        };
        let child = match key.cmp(&node.key) {
            Ordering::Equal => {
                *link = Some(node);
                return Err(DuplicateKey);
            }
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
        };
        let result = Self::insert(child, key, value);
        *link = match result {
            Ok(()) => Some(Self::balance(node)),
            Err(_) => Some(node),
        };
        result
    }

    /// Removes `key` from the subtree behind `link` and returns its value.
    /// An absent key leaves the subtree untouched. Unlike insertion,
    /// removal can require rebalancing on every level up to the root.
    pub(crate) fn remove(link: &mut Link<K, V>, key: &K) -> Option<V> {
        let mut node = link.take()?;
        let child = match key.cmp(&node.key) {
            Ordering::Equal => {
                let (replacement, value) = Self::splice_out(node);
                *link = replacement;
                return Some(value);
            }
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
        };
        let value = Self::remove(child, key);
        *link = match value {
            Some(_) => Some(Self::balance(node)),
            None => Some(node),
        };
        value
    }

    /// Unlinks this node and returns the subtree that takes its place.
    /// With no left child the right child is promoted directly. Otherwise
    /// the in-order predecessor is detached from the left subtree and
    /// spliced into the hole.
    fn splice_out(mut node: Box<Self>) -> (Link<K, V>, V) {
        let replacement = match node.left.take() {
            None => node.right.take(),
            Some(left) => {
                let (rest, mut predecessor) = Self::detach_max(left);
                predecessor.left = rest;
                predecessor.right = node.right.take();
                Some(Self::balance(predecessor))
            }
        };
        (replacement, node.value)
    }

    /// Detaches the maximum node of the subtree, returning the remaining
    /// subtree and the detached node. A node without a right child is the
    /// maximum and its left child gets promoted; every other node on the
    /// descent path is rebalanced on the way back up.
    fn detach_max(mut node: Box<Self>) -> (Link<K, V>, Box<Self>) {
        match node.right.take() {
            None => {
                let rest = node.left.take();
                (rest, node)
            }
            Some(right) => {
                let (rest, max) = Self::detach_max(right);
                node.right = rest;
                (Some(Self::balance(node)), max)
            }
        }
    }
}
