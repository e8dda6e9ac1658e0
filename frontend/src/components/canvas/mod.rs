//! Canvas editor: the background surface with its placeholders.
//!
//! The component does not own the template. It reports intents (add, move,
//! drop, patch, delete) through callbacks and the studio applies them to the
//! document it holds. In preview mode it only displays values.

mod drag;
mod view;

use std::rc::Rc;

use common::model::iteration::IterationValues;
use common::model::template::TemplateDocument;
use common::studio::canvas::{
    CanvasMode, CanvasPoint, CanvasSelection, DragGesture, PlaceholderPatch,
};
use drag::DragSession;
use web_sys::Element;
use yew::prelude::*;

use crate::helpers::element_rect;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasProps {
    pub document: Rc<TemplateDocument>,
    pub mode: CanvasMode,
    /// Values of the iteration being previewed.
    #[prop_or_default]
    pub current_data: Option<IterationValues>,
    #[prop_or_default]
    pub on_add: Callback<CanvasPoint>,
    #[prop_or_default]
    pub on_move: Callback<(String, CanvasPoint)>,
    #[prop_or_default]
    pub on_drop: Callback<(DragGesture, f64, f64)>,
    #[prop_or_default]
    pub on_update: Callback<(String, PlaceholderPatch)>,
    #[prop_or_default]
    pub on_delete: Callback<String>,
}

pub enum Msg {
    CanvasClicked { client_x: f64, client_y: f64 },
    PointerDown { id: String, client_x: f64, client_y: f64 },
    PointerMoved { client_x: f64, client_y: f64 },
    PointerReleased { client_x: f64, client_y: f64 },
    Select(Option<String>),
    Patch(PlaceholderPatch),
    Delete,
}

pub struct CanvasEditor {
    canvas_ref: NodeRef,
    selection: CanvasSelection,
    drag: Option<DragSession>,
}

impl Component for CanvasEditor {
    type Message = Msg;
    type Properties = CanvasProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            selection: CanvasSelection::default(),
            drag: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::CanvasClicked { client_x, client_y } => {
                let had_selection = self.selection.selected().is_some();
                if self.selection.empty_canvas_clicked(props.mode) {
                    if let Some(canvas) = self.canvas_ref.cast::<Element>() {
                        props.on_add.emit(element_rect(&canvas).to_percent(client_x, client_y));
                    }
                }
                had_selection
            }
            Msg::PointerDown { id, client_x, client_y } => {
                let Some(canvas) = self.canvas_ref.cast::<Element>() else {
                    return false;
                };
                match DragGesture::begin(props.mode, id, element_rect(&canvas)) {
                    Ok(gesture) => {
                        self.drag = DragSession::start(gesture, client_x, client_y, ctx.link());
                    }
                    Err(e) => gloo_console::debug!(format!("drag ignored: {}", e)),
                }
                false
            }
            Msg::PointerMoved { client_x, client_y } => {
                if let Some(drag) = &mut self.drag {
                    if drag.track(client_x, client_y) {
                        let gesture = drag.gesture();
                        props.on_move.emit((
                            gesture.placeholder_id().to_string(),
                            gesture.pointer_moved(client_x, client_y),
                        ));
                    }
                }
                false
            }
            Msg::PointerReleased { client_x, client_y } => {
                // Dropping the session detaches its window listeners.
                let Some(drag) = self.drag.take() else {
                    return false;
                };
                let (gesture, moved) = drag.end();
                if moved {
                    self.selection.drag_finished();
                    props.on_drop.emit((gesture, client_x, client_y));
                    false
                } else {
                    self.selection.select(Some(gesture.placeholder_id().to_string()));
                    true
                }
            }
            Msg::Select(selected) => {
                self.selection.select(selected);
                true
            }
            Msg::Patch(patch) => {
                if let Some(id) = self.selection.selected() {
                    props.on_update.emit((id.to_string(), patch));
                }
                false
            }
            Msg::Delete => {
                if let Some(id) = self.selection.take() {
                    props.on_delete.emit(id);
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.selection.retain(&props.document, props.mode);
        if props.mode == CanvasMode::Preview {
            self.drag = None;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
