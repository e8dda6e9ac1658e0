use common::api::ApiError;
use common::model::render::{OutputFormat, RenderResponse};
use common::studio::canvas::{CanvasPoint, DragGesture, PlaceholderPatch};

use crate::components::data_manager::ImageUpload;

pub enum Msg {
    Rename(String),
    AddPlaceholder(CanvasPoint),
    MovePlaceholder(String, CanvasPoint),
    DropPlaceholder(DragGesture, f64, f64),
    UpdatePlaceholder(String, PlaceholderPatch),
    DeletePlaceholder(String),
    AddIteration,
    UpdateValue(String, String, String),
    /// Iteration id and the duration typed by the user, in seconds.
    UpdateDuration(String, f64),
    DeleteIteration(String),
    ImageUploaded(ImageUpload),
    ChooseBackground,
    BackgroundChosen(web_sys::File),
    BackgroundLoaded { mime: String, bytes: Vec<u8> },
    TemplateUrlChanged(String),
    FormatChanged(OutputFormat),
    Render,
    Rendered(Result<RenderResponse, ApiError>),
}
