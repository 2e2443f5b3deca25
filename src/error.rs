use thiserror::Error;

/// Errors reported by [`OrderedMap`](crate::OrderedMap) operations.
///
/// A missing key is not an error: lookups and removals return `None`.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A node slot could not be allocated.
    ///
    /// The map is left exactly as it was before the failing call.
    #[error("out of memory while allocating a map node")]
    OutOfMemory,
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
