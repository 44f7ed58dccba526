use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Range window does not fit in the vector
    #[error("Invalid range: index {index} with count {count} does not fit in vector length {length}")]
    InvalidRange {
        /// Start of the requested window
        index: usize,
        /// Number of elements in the requested window
        count: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Requested capacity is below the number of stored elements
    #[error("Capacity too small: requested {requested}, but {size} elements are stored")]
    CapacityTooSmall {
        /// Capacity that was requested
        requested: usize,
        /// Number of elements currently stored
        size: usize,
    },
    /// Destination slice cannot hold the copied elements
    #[error("Destination too small: {required} slots required, but only {provided} provided")]
    DestinationTooSmall {
        /// Slots required at the destination
        required: usize,
        /// Slots the destination actually has
        provided: usize,
    },
    /// The container was structurally modified while a cursor was bound to it
    #[error("Concurrent modification: cursor bound to version {bound}, container is at version {current}")]
    ConcurrentModification {
        /// Version stamp the cursor was created with
        bound: u64,
        /// Live version stamp of the container
        current: u64,
    },
    /// Cursor is not positioned on an element
    #[error("Cursor is not positioned on an element")]
    CursorOutOfPosition,
    /// Value handed to the type-erased adapter does not hold the element type
    #[error("Type mismatch: expected a value of type {expected}")]
    TypeMismatch {
        /// Name of the expected element type
        expected: &'static str,
    },
}
