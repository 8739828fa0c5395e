/// Errors reported by list operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListError {
    #[error("cannot pop from an empty list")]
    Empty,
}
