use common::api::ApiError;
use common::model::shared::SharedTemplate;

pub enum Msg {
    Play,
    Pause,
    Next,
    Previous,
    /// The dwell timer of the current iteration expired.
    Tick,
    Share,
    Shared {
        fingerprint: String,
        result: Result<SharedTemplate, ApiError>,
    },
    Unshare,
    Unshared(Result<(), ApiError>),
    ToggleFullscreen,
}
