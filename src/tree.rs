use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::DuplicateKey;
use crate::node::{Link, Node};

/// An ordered map backed by an AVL tree.
///
/// Keys are unique under their `Ord` relation. Insertion, lookup and
/// removal take O(log n) time; every mutating call rebalances the path
/// it visited before returning.
#[derive(Clone)]
pub struct AvlMap<K: Ord, V> {
    pub(crate) root: Link<K, V>,
    num_nodes: usize,
}

impl<K: Ord, V> AvlMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree. An empty map has height 0,
    /// a single element height 1.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Fails with [`DuplicateKey`] if the key is already present, in which
    /// case the map is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<(), DuplicateKey> {
        Node::insert(&mut self.root, key, value)?;
        self.num_nodes += 1;
        Ok(())
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Removes a key from the map. Removing an absent key is a no-op.
    pub fn remove_key(&mut self, key: &K) {
        if Node::remove(&mut self.root, key).is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
    }

    /// Returns the largest key in the map.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty.
    pub fn max_key(&self) -> &K {
        let mut node = self.root.as_deref().expect("max_key called on empty map");
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.key
    }

    /// Visits all key-value pairs in ascending key order.
    pub fn traverse_in_order<F: FnMut(&K, &V)>(&self, mut f: F) {
        Self::in_order(&self.root, &mut f);
    }

    /// Visits all key-value pairs level by level, top to bottom.
    pub fn traverse_level_order<F: FnMut(&K, &V)>(&self, mut f: F) {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            f(&node.key, &node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let num_nodes = Self::check_subtree(&self.root, None, None);
        assert_eq!(num_nodes, self.num_nodes);
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn in_order<F: FnMut(&K, &V)>(link: &Link<K, V>, f: &mut F) {
        if let Some(node) = link {
            Self::in_order(&node.left, f);
            f(&node.key, &node.value);
            Self::in_order(&node.right, f);
        }
    }

    // Checks BST order within bounds, cached heights and the AVL
    // condition. Returns the number of nodes in the subtree.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree(link: &Link<K, V>, lower: Option<&K>, upper: Option<&K>) -> usize {
        let Some(node) = link else {
            return 0;
        };
        if let Some(lower) = lower {
            assert!(lower < &node.key);
        }
        if let Some(upper) = upper {
            assert!(&node.key < upper);
        }
        let num_left = Self::check_subtree(&node.left, lower, Some(&node.key));
        let num_right = Self::check_subtree(&node.right, Some(&node.key), upper);

        let left_height = Node::height(&node.left);
        let right_height = Node::height(&node.right);
        assert_eq!(node.height, 1 + std::cmp::max(left_height, right_height));
        assert!(left_height <= right_height + 1);
        assert!(right_height <= left_height + 1);

        num_left + num_right + 1
    }
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
