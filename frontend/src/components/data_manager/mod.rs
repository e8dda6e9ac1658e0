//! Data manager: the table of iterations, one row per value set.
//!
//! Values and durations are reported to the studio through callbacks. Image
//! uploads are read here, after the MIME type has been checked, and handed
//! over as raw bytes.

use std::rc::Rc;

use common::model::placeholder::{Placeholder, PlaceholderType};
use common::model::template::TemplateDocument;
use common::studio::data::millis_to_seconds;
use common::studio::media::ensure_image;
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::show_toast;

/// An uploaded image, ready to be stored as an iteration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub iteration_id: String,
    pub placeholder_id: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct DataManagerProps {
    pub document: Rc<TemplateDocument>,
    pub on_add: Callback<()>,
    /// `(iteration id, placeholder id, value)`
    pub on_value: Callback<(String, String, String)>,
    /// `(iteration id, seconds)`
    pub on_duration: Callback<(String, f64)>,
    pub on_delete: Callback<String>,
    pub on_image: Callback<ImageUpload>,
}

pub enum Msg {
    FileChosen {
        iteration_id: String,
        placeholder_id: String,
        file: web_sys::File,
    },
}

pub struct DataManager;

impl Component for DataManager {
    type Message = Msg;
    type Properties = DataManagerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataManager
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen {
                iteration_id,
                placeholder_id,
                file,
            } => {
                let mime = file.type_();
                if let Err(e) = ensure_image(&mime) {
                    show_toast(&capitalize(&e.to_string()));
                    return false;
                }
                let on_image = ctx.props().on_image.clone();
                spawn_local(async move {
                    match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => on_image.emit(ImageUpload {
                            iteration_id,
                            placeholder_id,
                            mime,
                            bytes,
                        }),
                        Err(e) => show_toast(&format!("Could not read the file: {}", e)),
                    }
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let placeholders = &props.document.template.placeholders;
        let on_add = props.on_add.reform(|_: MouseEvent| ());

        html! {
            <div class="data-manager">
                <div class="data-manager-header">
                    <h3>{"Iterations"}</h3>
                    <button onclick={on_add} disabled={placeholders.is_empty()}>{"Add iteration"}</button>
                </div>
                {
                    if placeholders.is_empty() {
                        html! { <p class="hint">{"Add placeholders on the canvas before entering data."}</p> }
                    } else if props.document.iterations.is_empty() {
                        html! { <p class="hint">{"No iterations yet."}</p> }
                    } else {
                        html! {
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"#"}</th>
                                        { for placeholders.iter().map(|p| html! { <th>{ p.name.clone() }</th> }) }
                                        <th>{"Duration (s)"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.document.iterations.iter().enumerate().map(|(index, iteration)| {
                                        let id = iteration.id.clone();
                                        let on_duration = props.on_duration.reform({
                                            let id = id.clone();
                                            move |e: Event| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                (id.clone(), input.value_as_number())
                                            }
                                        });
                                        let on_delete = props.on_delete.reform({
                                            let id = id.clone();
                                            move |_: MouseEvent| id.clone()
                                        });
                                        html! {
                                            <tr key={id.clone()}>
                                                <td>{ index + 1 }</td>
                                                { for placeholders.iter().map(|p| {
                                                    let value = iteration.values.get(&p.id).map(|v| v.to_string()).unwrap_or_default();
                                                    html! { <td>{ value_cell(p, &id, value, props, link) }</td> }
                                                }) }
                                                <td>
                                                    <input type="number" min="0.5" step="0.5"
                                                        value={millis_to_seconds(iteration.duration).to_string()}
                                                        onchange={on_duration} />
                                                </td>
                                                <td><button class="danger" onclick={on_delete}>{"Delete"}</button></td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }
}

fn value_cell(
    placeholder: &Placeholder,
    iteration_id: &str,
    value: String,
    props: &DataManagerProps,
    link: &Scope<DataManager>,
) -> Html {
    if placeholder.placeholder_type == PlaceholderType::Image {
        let iteration_id = iteration_id.to_string();
        let placeholder_id = placeholder.id.clone();
        let onchange = link.batch_callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            file.map(|file| Msg::FileChosen {
                iteration_id: iteration_id.clone(),
                placeholder_id: placeholder_id.clone(),
                file,
            })
        });
        return html! {
            <div class="image-cell">
                { if value.is_empty() { Html::default() } else { html! { <img src={value} alt="" /> } } }
                <input type="file" accept="image/*" {onchange} />
            </div>
        };
    }

    let ids = (iteration_id.to_string(), placeholder.id.clone());
    let oninput = props.on_value.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (ids.0.clone(), ids.1.clone(), input.value())
    });
    let input_type = if placeholder.placeholder_type == PlaceholderType::Price {
        "number"
    } else {
        "text"
    };
    html! { <input type={input_type} {value} {oninput} placeholder={placeholder.name.clone()} /> }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
