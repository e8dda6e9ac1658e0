use common::studio::canvas::DragGesture;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::html::Scope;

use super::{CanvasEditor, Msg};

/// Pointer travel, in pixels, below which a press counts as a click.
const CLICK_SLOP_PX: f64 = 3.0;

/// A drag in progress: the gesture plus the window-level listeners that feed
/// it. The listeners are removed when the session is dropped.
pub struct DragSession {
    gesture: DragGesture,
    origin: (f64, f64),
    moved: bool,
    _listeners: [EventListener; 2],
}

impl DragSession {
    pub fn start(
        gesture: DragGesture,
        client_x: f64,
        client_y: f64,
        link: &Scope<CanvasEditor>,
    ) -> Option<Self> {
        let window = web_sys::window()?;

        let on_move = {
            let link = link.clone();
            EventListener::new(&window, "pointermove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    link.send_message(Msg::PointerMoved {
                        client_x: event.client_x() as f64,
                        client_y: event.client_y() as f64,
                    });
                }
            })
        };
        let on_up = {
            let link = link.clone();
            EventListener::new(&window, "pointerup", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    link.send_message(Msg::PointerReleased {
                        client_x: event.client_x() as f64,
                        client_y: event.client_y() as f64,
                    });
                }
            })
        };

        Some(Self {
            gesture,
            origin: (client_x, client_y),
            moved: false,
            _listeners: [on_move, on_up],
        })
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Records a pointer move; returns whether the gesture is now a drag.
    pub fn track(&mut self, client_x: f64, client_y: f64) -> bool {
        if !self.moved {
            let (x0, y0) = self.origin;
            self.moved = (client_x - x0).hypot(client_y - y0) > CLICK_SLOP_PX;
        }
        self.moved
    }

    pub fn end(self) -> (DragGesture, bool) {
        (self.gesture, self.moved)
    }
}
