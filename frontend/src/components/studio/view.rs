use common::model::render::OutputFormat;
use common::studio::canvas::CanvasMode;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::canvas::CanvasEditor;
use crate::components::data_manager::DataManager;
use crate::components::preview_player::PreviewPlayerComponent;

use super::{Msg, Studio};

pub fn view(studio: &Studio, ctx: &Context<Studio>) -> Html {
    let link = ctx.link();
    let document = studio.document.clone();

    let on_rename = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Rename(input.value())
    });
    let on_background = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(Msg::BackgroundChosen)
    });

    html! {
        <div class="studio">
            <header class="studio-header">
                <input class="template-name" type="text" value={document.template.name.clone()} oninput={on_rename} />
                <button onclick={link.callback(|_| Msg::ChooseBackground)}>{"Upload background"}</button>
                <input
                    type="file"
                    accept="image/*,video/*"
                    style="display: none;"
                    ref={studio.background_input_ref.clone()}
                    onchange={on_background}
                />
            </header>
            <div class="studio-body">
                <section class="studio-editor">
                    <h3>{"Canvas"}</h3>
                    <p class="hint">{"Click the canvas to add a placeholder, drag to move it, click it to edit."}</p>
                    <CanvasEditor
                        document={document.clone()}
                        mode={CanvasMode::Edit}
                        on_add={link.callback(Msg::AddPlaceholder)}
                        on_move={link.callback(|(id, point)| Msg::MovePlaceholder(id, point))}
                        on_drop={link.callback(|(gesture, x, y)| Msg::DropPlaceholder(gesture, x, y))}
                        on_update={link.callback(|(id, patch)| Msg::UpdatePlaceholder(id, patch))}
                        on_delete={link.callback(Msg::DeletePlaceholder)}
                    />
                    <DataManager
                        document={document.clone()}
                        on_add={link.callback(|_| Msg::AddIteration)}
                        on_value={link.callback(|(iteration, placeholder, value)| Msg::UpdateValue(iteration, placeholder, value))}
                        on_duration={link.callback(|(iteration, seconds)| Msg::UpdateDuration(iteration, seconds))}
                        on_delete={link.callback(Msg::DeleteIteration)}
                        on_image={link.callback(Msg::ImageUploaded)}
                    />
                </section>
                <section class="studio-preview">
                    <h3>{"Preview"}</h3>
                    <PreviewPlayerComponent document={document} api={ctx.props().api.clone()} />
                    { render_panel(studio, link) }
                </section>
            </div>
        </div>
    }
}

fn render_panel(studio: &Studio, link: &Scope<Studio>) -> Html {
    let on_url = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TemplateUrlChanged(input.value())
    });
    let on_format = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match select.value().as_str() {
            "webm" => Msg::FormatChanged(OutputFormat::Webm),
            _ => Msg::FormatChanged(OutputFormat::Mp4),
        }
    });

    html! {
        <div class="render-panel">
            <h3>{"Render video"}</h3>
            <input
                type="url"
                placeholder="Template video URL"
                value={studio.template_url.clone()}
                oninput={on_url}
            />
            <select onchange={on_format}>
                { for [OutputFormat::Mp4, OutputFormat::Webm].into_iter().map(|choice| html! {
                    <option value={choice.extension()} selected={choice == studio.output_format}>{ choice.extension() }</option>
                }) }
            </select>
            <button disabled={studio.rendering} onclick={link.callback(|_| Msg::Render)}>
                { if studio.rendering { "Rendering..." } else { "Render" } }
            </button>
            if let Some(url) = &studio.video_url {
                <a class="render-result" href={url.clone()} target="_blank">{"Open rendered video"}</a>
            }
        </div>
    }
}
