//! An ordered map implemented with an AVL tree.
//!
//! Keys are unique under their `Ord` relation. Insertion, lookup and
//! removal run in O(log n) time; the tree restores the AVL balance
//! condition with single and double rotations after every update.
//!
//! # Example
//!
//! ```
//! use avlmap::AvlMap;
//!
//! let mut map = AvlMap::new();
//! map.add(1, "one")?;
//! map.add(2, "two")?;
//! assert!(map.contains_key(&1));
//! assert_eq!(map.get(&2), Some(&"two"));
//!
//! map.remove_key(&1);
//! assert!(!map.contains_key(&1));
//! # Ok::<(), avlmap::DuplicateKey>(())
//! ```

mod error;
mod node;
mod print;
mod tree;

pub use error::DuplicateKey;
pub use tree::AvlMap;
