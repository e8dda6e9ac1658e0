//! Browser utilities shared by the studio components.
//!
//! - **User Feedback**: temporary toast notifications for share results,
//!   rejected uploads and fullscreen failures.
//! - **Hashing**: MD5 fingerprints of template documents, used to tell
//!   whether a shared document has been edited since it was last sent.
//! - **Location**: page origin and query parameters, for preview links.
//! - **Geometry**: the client rectangle of the canvas element.

use common::model::template::TemplateDocument;
use common::studio::canvas::CanvasRect;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, UrlSearchParams};

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds. `message` is inserted as
/// text, never as markup, since it may echo server messages.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Computes the MD5 hash of a string and returns it as a hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of a document as it would be sent to the server.
pub fn document_fingerprint(document: &TemplateDocument) -> String {
    compute_md5(&serde_json::to_string(document).unwrap_or_default())
}

pub fn location_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
        .filter(|value| !value.is_empty())
}

pub fn element_rect(element: &Element) -> CanvasRect {
    let rect = element.get_bounding_client_rect();
    CanvasRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
