use crate::api::render::RenderApi;
use crate::api::templates::TemplatesApi;
use crate::components::shared_preview::SharedPreview;
use crate::components::studio::Studio;
use crate::helpers::{location_origin, query_param};
use yew::{html, Component, Context, Html};

/// Root component: the studio, or the shared preview when the page was
/// opened from a share link.
pub struct App {
    api: TemplatesApi,
    render_api: RenderApi,
    shared_id: Option<String>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let origin = location_origin().unwrap_or_default();
        Self {
            api: TemplatesApi::for_origin(&origin),
            render_api: RenderApi::for_origin(&origin),
            shared_id: query_param("id"),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.shared_id {
            Some(id) => html! { <SharedPreview id={id.clone()} api={self.api.clone()} /> },
            None => html! { <Studio api={self.api.clone()} render_api={self.render_api.clone()} /> },
        }
    }
}
