//! Update function for the preview player, Elm style: mutate the state for a
//! `Msg`, start side effects through the link, return whether to re-render.

use common::api::preview_link;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{copy_to_clipboard, document_fingerprint, location_origin, show_toast};

use super::messages::Msg;
use super::state::{PreviewPlayerComponent, SharedLink};

pub fn update(component: &mut PreviewPlayerComponent, ctx: &Context<PreviewPlayerComponent>, msg: Msg) -> bool {
    let props = ctx.props();
    let iterations = &props.document.iterations;

    match msg {
        Msg::Play => {
            if !component.player.play(iterations) {
                show_toast("Add an iteration to preview");
            }
            component.rearm(ctx);
            true
        }
        Msg::Pause => {
            component.player.pause();
            component.timer = None;
            true
        }
        Msg::Next => {
            component.player.next(iterations);
            component.rearm(ctx);
            true
        }
        Msg::Previous => {
            component.player.previous(iterations);
            component.rearm(ctx);
            true
        }
        Msg::Tick => {
            component.timer = None;
            component.player.timer_fired(iterations);
            component.rearm(ctx);
            true
        }
        Msg::Share => {
            if component.busy {
                return false;
            }
            let document = props.document.as_ref().clone();
            let fingerprint = document_fingerprint(&document);

            if let Some(shared) = &component.shared {
                if shared.fingerprint == fingerprint {
                    copy_link(&shared.id);
                    return false;
                }
            }

            component.busy = true;
            let api = props.api.clone();
            let shared_id = component.shared.as_ref().map(|s| s.id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match shared_id {
                    Some(id) => api.update(&id, &document).await,
                    None => api.create(&document).await,
                };
                link.send_message(Msg::Shared { fingerprint, result });
            });
            true
        }
        Msg::Shared { fingerprint, result } => {
            component.busy = false;
            match result {
                Ok(record) => {
                    copy_link(&record.id);
                    component.shared = Some(SharedLink {
                        id: record.id,
                        fingerprint,
                    });
                }
                Err(e) => {
                    gloo_console::error!(format!("share failed: {}", e));
                    show_toast(&format!("Failed to share template: {}", e));
                }
            }
            true
        }
        Msg::Unshare => {
            let Some(shared) = &component.shared else {
                return false;
            };
            if component.busy {
                return false;
            }
            component.busy = true;
            let api = props.api.clone();
            let id = shared.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Unshared(api.delete(&id).await));
            });
            true
        }
        Msg::Unshared(result) => {
            component.busy = false;
            match result {
                Ok(()) => {
                    component.shared = None;
                    show_toast("The shared link no longer works");
                }
                Err(e) => show_toast(&format!("Failed to unshare template: {}", e)),
            }
            true
        }
        Msg::ToggleFullscreen => {
            toggle_fullscreen(component);
            false
        }
    }
}

fn copy_link(id: &str) {
    let Some(origin) = location_origin() else {
        show_toast("Template shared, but the page origin is unknown");
        return;
    };
    let link = preview_link(&origin, id);
    spawn_local(async move {
        match copy_to_clipboard(&link).await {
            Ok(()) => show_toast("Share link copied to clipboard"),
            Err(_) => show_toast(&format!("Share link: {}", link)),
        }
    });
}

fn toggle_fullscreen(component: &PreviewPlayerComponent) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    if let Some(container) = component.container_ref.cast::<web_sys::Element>() {
        if let Err(e) = container.request_fullscreen() {
            gloo_console::warn!(e);
            show_toast("Fullscreen is not available");
        }
    }
}
