use thiserror::Error;

/// Error types for `DynList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynListError {
    /// Position is outside the operation's valid range
    #[error("Index out of bounds: index {index} is beyond list length {length}")]
    IndexOutOfBounds {
        /// Index that was supplied
        index: usize,
        /// Current length of the list
        length: usize,
    },
    /// Operation requires at least one element
    #[error("Operation attempted on an empty list")]
    EmptyList,
}
