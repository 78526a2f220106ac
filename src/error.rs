use thiserror::Error;

/// Errors returned by fallible [`Tree`][crate::Tree] operations.
///
/// Lookups that can miss (`find`, `replace`, `successor`, `predecessor`)
/// report absence with `None` instead. Only `remove` treats a missing item as
/// an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The item passed to [`Tree::remove`][crate::Tree::remove] is not stored
    /// in the tree. Nothing was changed.
    #[error("item not in tree")]
    KeyNotFound,
}
