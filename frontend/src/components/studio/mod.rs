//! Studio: the editing page.
//!
//! Owns the template document being edited and applies every intent the
//! canvas and the data manager report. Children receive the document as an
//! `Rc`, so an edit clones it once (`Rc::make_mut`) and re-renders them.

mod messages;
mod view;

use std::rc::Rc;

use common::model::render::OutputFormat;
use common::model::template::{TemplateData, TemplateDocument};
use common::studio::canvas::CanvasMode;
use common::studio::data::{seconds_to_millis, IterationPatch};
use common::studio::media::BackgroundKind;
use common::timeline::build_render_request;
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::render::RenderApi;
use crate::api::templates::TemplatesApi;
use crate::helpers::show_toast;
pub use messages::Msg;

#[derive(Properties, PartialEq, Clone)]
pub struct StudioProps {
    pub api: TemplatesApi,
    pub render_api: RenderApi,
}

pub struct Studio {
    pub document: Rc<TemplateDocument>,
    pub background_input_ref: NodeRef,
    /// Video the overlays are composited onto.
    pub template_url: String,
    pub output_format: OutputFormat,
    pub rendering: bool,
    pub video_url: Option<String>,
}

impl Component for Studio {
    type Message = Msg;
    type Properties = StudioProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            document: Rc::new(TemplateDocument {
                template: TemplateData::new("Untitled template"),
                iterations: Vec::new(),
            }),
            background_input_ref: NodeRef::default(),
            template_url: String::new(),
            output_format: OutputFormat::default(),
            rendering: false,
            video_url: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result = match msg {
            Msg::Rename(name) => {
                self.document_mut().template.name = name;
                Ok(())
            }
            Msg::AddPlaceholder(point) => self
                .document_mut()
                .add_placeholder(CanvasMode::Edit, point)
                .map(|_| ()),
            Msg::MovePlaceholder(id, point) => self.document_mut().move_placeholder(&id, point),
            Msg::DropPlaceholder(gesture, client_x, client_y) => {
                gesture.finish(self.document_mut(), client_x, client_y)
            }
            Msg::UpdatePlaceholder(id, patch) => self.document_mut().update_placeholder(&id, patch),
            Msg::DeletePlaceholder(id) => self.document_mut().delete_placeholder(&id).map(|_| ()),
            Msg::AddIteration => {
                self.document_mut().add_iteration();
                Ok(())
            }
            Msg::UpdateValue(iteration_id, placeholder_id, value) => {
                self.document_mut()
                    .update_iteration_value(&iteration_id, &placeholder_id, value)
            }
            Msg::UpdateDuration(iteration_id, seconds) => self.document_mut().update_iteration(
                &iteration_id,
                IterationPatch {
                    duration: Some(seconds_to_millis(seconds)),
                    values: None,
                },
            ),
            Msg::DeleteIteration(id) => self.document_mut().delete_iteration(&id).map(|_| ()),
            Msg::ImageUploaded(upload) => self.document_mut().set_image_value(
                &upload.iteration_id,
                &upload.placeholder_id,
                &upload.mime,
                &upload.bytes,
            ),
            Msg::ChooseBackground => {
                if let Some(input) = self.background_input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.click();
                }
                return false;
            }
            Msg::BackgroundChosen(file) => {
                let mime = file.type_();
                if let Err(e) = BackgroundKind::classify(&mime) {
                    show_toast(&e.to_string());
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => link.send_message(Msg::BackgroundLoaded { mime, bytes }),
                        Err(e) => show_toast(&format!("Could not read the file: {}", e)),
                    }
                });
                return false;
            }
            Msg::BackgroundLoaded { mime, bytes } => self
                .document_mut()
                .template
                .set_background_media(&mime, &bytes)
                .map(|_| ()),
            Msg::TemplateUrlChanged(url) => {
                self.template_url = url;
                return false;
            }
            Msg::FormatChanged(format) => {
                self.output_format = format;
                return false;
            }
            Msg::Render => {
                let template_url = self.template_url.trim();
                if self.rendering {
                    return false;
                }
                if template_url.is_empty() {
                    show_toast("Enter the template video URL first");
                    return false;
                }
                let request =
                    build_render_request(&self.document, template_url, Some(self.output_format), None);
                self.rendering = true;
                self.video_url = None;
                let api = ctx.props().render_api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Rendered(api.render(&request).await));
                });
                return true;
            }
            Msg::Rendered(result) => {
                self.rendering = false;
                match result {
                    Ok(response) => {
                        show_toast("Video rendered");
                        self.video_url = Some(response.video_url);
                    }
                    Err(e) => {
                        gloo_console::error!(format!("render failed: {}", e));
                        show_toast(&e.to_string());
                    }
                }
                return true;
            }
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                gloo_console::warn!(format!("edit rejected: {}", e));
                show_toast(&e.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

impl Studio {
    fn document_mut(&mut self) -> &mut TemplateDocument {
        Rc::make_mut(&mut self.document)
    }
}
