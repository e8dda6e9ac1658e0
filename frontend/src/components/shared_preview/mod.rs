//! Read-only page behind a share link (`/?id=<record id>`): loads the shared
//! document and replays it in the preview player.

use std::rc::Rc;

use common::model::template::TemplateDocument;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::templates::TemplatesApi;
use crate::components::preview_player::PreviewPlayerComponent;

#[derive(Properties, PartialEq, Clone)]
pub struct SharedPreviewProps {
    pub id: String,
    pub api: TemplatesApi,
}

pub enum Msg {
    Loaded(TemplateDocument),
    Failed(String),
}

pub enum SharedPreview {
    Loading,
    Ready(Rc<TemplateDocument>),
    Error(String),
}

impl Component for SharedPreview {
    type Message = Msg;
    type Properties = SharedPreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match props.api.get(&props.id).await {
                Ok(record) => link.send_message(Msg::Loaded(record.template_data)),
                Err(e) => link.send_message(Msg::Failed(e.to_string())),
            }
        });
        SharedPreview::Loading
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        *self = match msg {
            Msg::Loaded(document) => SharedPreview::Ready(Rc::new(document)),
            Msg::Failed(message) => {
                gloo_console::error!(format!("shared template unavailable: {}", message));
                SharedPreview::Error(message)
            }
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self {
            SharedPreview::Loading => html! { <div class="shared-preview"><p>{"Loading template..."}</p></div> },
            SharedPreview::Error(message) => html! {
                <div class="shared-preview">
                    <h2>{"This template is not available"}</h2>
                    <p>{ message.clone() }</p>
                    <a href="/">{"Open the studio"}</a>
                </div>
            },
            SharedPreview::Ready(document) => html! {
                <div class="shared-preview">
                    <h2>{ document.template.name.clone() }</h2>
                    <PreviewPlayerComponent
                        document={document.clone()}
                        api={ctx.props().api.clone()}
                        shareable={false}
                        autoplay={true}
                    />
                </div>
            },
        }
    }
}
