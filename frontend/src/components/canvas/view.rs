use common::model::placeholder::{ObjectFit, Placeholder, PlaceholderType};
use common::studio::canvas::{display_text, media_source, CanvasMode, PlaceholderPatch};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::{CanvasEditor, Msg};

pub fn view(component: &CanvasEditor, ctx: &Context<CanvasEditor>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let template = &props.document.template;
    let editing = props.mode == CanvasMode::Edit;

    let onclick = link.callback(|e: MouseEvent| Msg::CanvasClicked {
        client_x: e.client_x() as f64,
        client_y: e.client_y() as f64,
    });

    let selected = component
        .selection
        .selected()
        .and_then(|id| template.placeholder(id))
        .filter(|_| editing);

    html! {
        <div class="canvas-editor">
            <div
                class={classes!("canvas-surface", editing.then_some("editing"))}
                ref={component.canvas_ref.clone()}
                {onclick}
            >
                { background(template.background_image.as_deref(), template.background_video.as_deref()) }
                { for template.placeholders.iter().map(|p| {
                    let is_selected = selected.is_some_and(|s| s.id == p.id);
                    placeholder_view(p, props.mode, props.current_data.as_ref(), is_selected, link)
                }) }
            </div>
            { selected.map(|p| property_editor(p, link)).unwrap_or_default() }
        </div>
    }
}

fn background(image: Option<&str>, video: Option<&str>) -> Html {
    match (video, image) {
        (Some(src), _) => html! {
            <video class="canvas-background" src={src.to_string()} autoplay=true loop=true muted=true playsinline=true />
        },
        (None, Some(src)) => html! { <img class="canvas-background" src={src.to_string()} alt="Template background" /> },
        (None, None) => html! {
            <div class="canvas-empty">{"Upload a background image or video to start"}</div>
        },
    }
}

fn placeholder_view(
    placeholder: &Placeholder,
    mode: CanvasMode,
    current_data: Option<&common::model::iteration::IterationValues>,
    selected: bool,
    link: &Scope<CanvasEditor>,
) -> Html {
    let mut style = format!(
        "left: {}%; top: {}%; font-size: {}px; color: {};",
        placeholder.x, placeholder.y, placeholder.font_size, placeholder.color
    );
    if let (Some(w), Some(h)) = (placeholder.width, placeholder.height) {
        style.push_str(&format!(" width: {}px; height: {}px;", w, h));
    }

    let id = placeholder.id.clone();
    let onpointerdown = link.batch_callback(move |e: PointerEvent| {
        if mode != CanvasMode::Edit {
            return None;
        }
        e.prevent_default();
        e.stop_propagation();
        Some(Msg::PointerDown {
            id: id.clone(),
            client_x: e.client_x() as f64,
            client_y: e.client_y() as f64,
        })
    });
    // Clicks on a placeholder never reach the canvas click handler.
    let onclick = Callback::from(|e: MouseEvent| e.stop_propagation());

    let media = (mode == CanvasMode::Preview)
        .then(|| media_source(placeholder, current_data))
        .flatten();
    let fit = placeholder.object_fit.unwrap_or(ObjectFit::Cover).as_css();
    let content = match (placeholder.placeholder_type, media) {
        (PlaceholderType::Image, Some(src)) => {
            html! { <img {src} alt={placeholder.name.clone()} style={format!("width: 100%; height: 100%; object-fit: {};", fit)} /> }
        }
        (PlaceholderType::Video, Some(src)) => {
            html! { <video {src} autoplay=true loop=true muted=true style={format!("width: 100%; height: 100%; object-fit: {};", fit)} /> }
        }
        _ => html! { <span>{ display_text(placeholder, current_data) }</span> },
    };

    html! {
        <div
            key={placeholder.id.clone()}
            class={classes!("placeholder", placeholder.placeholder_type.as_str(), selected.then_some("selected"))}
            {style}
            {onpointerdown}
            {onclick}
        >
            { content }
        </div>
    }
}

fn property_editor(placeholder: &Placeholder, link: &Scope<CanvasEditor>) -> Html {
    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Patch(PlaceholderPatch {
            name: Some(input.value()),
            ..Default::default()
        })
    });
    let on_type = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        PlaceholderType::parse(&select.value()).map(|t| {
            Msg::Patch(PlaceholderPatch {
                placeholder_type: Some(t),
                ..Default::default()
            })
        })
    });
    let on_font_size = link.batch_callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value().parse::<f64>().ok().map(|size| {
            Msg::Patch(PlaceholderPatch {
                font_size: Some(size),
                ..Default::default()
            })
        })
    });
    let on_color = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Patch(PlaceholderPatch {
            color: Some(input.value()),
            ..Default::default()
        })
    });

    html! {
        <div class="property-editor">
            <label>{"Name"}
                <input type="text" value={placeholder.name.clone()} oninput={on_name} />
            </label>
            <label>{"Type"}
                <select onchange={on_type}>
                    { for PlaceholderType::ALL.iter().map(|t| html! {
                        <option value={t.as_str()} selected={*t == placeholder.placeholder_type}>{ t.as_str() }</option>
                    }) }
                </select>
            </label>
            <label>{"Font size"}
                <input type="number" min="1" value={placeholder.font_size.to_string()} oninput={on_font_size} />
            </label>
            <label>{"Color"}
                <input type="color" value={placeholder.color.clone()} oninput={on_color} />
            </label>
            <button class="danger" onclick={link.callback(|_| Msg::Delete)}>{"Delete"}</button>
            <button onclick={link.callback(|_| Msg::Select(None))}>{"Close"}</button>
        </div>
    }
}
