use thiserror::Error;

/// Returned by [`AvlMap::add`](crate::AvlMap::add) when the key is already
/// in the map. The map is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duplicate key")]
pub struct DuplicateKey;
