use serde::Serialize;

/// State of a render job as reported by one poll of the compositing provider.
///
/// ```text
/// Pending (repeats) -> Done | Failed
/// ```
///
/// Running out of poll attempts is not a provider state; the orchestrator
/// reports it as a timeout error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum RenderJobState {
    /// Still working; carries the provider's own status word.
    Pending(String),
    /// Finished; carries the provider URL of the rendered asset.
    Done(String),
    Failed(String),
}
