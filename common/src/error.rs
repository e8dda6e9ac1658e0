use thiserror::Error;

/// Rejected editor operations. The state is left untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("the canvas is read-only in preview mode")]
    ReadOnly,
    #[error("placeholder {0} not found")]
    PlaceholderNotFound(String),
    #[error("iteration {0} not found")]
    IterationNotFound(String),
    #[error("please select an image file (got {0})")]
    NotAnImage(String),
    #[error("placeholder {0} does not take images")]
    NotAnImagePlaceholder(String),
    #[error("unsupported background media type: {0}")]
    UnsupportedMedia(String),
}
