use crate::error::StudioError;
use crate::model::iteration::IterationValues;
use crate::model::placeholder::{
    ObjectFit, Placeholder, PlaceholderType, DEFAULT_COLOR, DEFAULT_FONT_SIZE,
};
use crate::model::template::TemplateDocument;

/// Whether the canvas accepts edits or only displays iteration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    Edit,
    Preview,
}

/// A position on the canvas in percent of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of the canvas element in client (viewport) pixels, as
/// reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    /// Converts a pointer position to canvas percentages, clamped to
    /// `[0, 100]` so a pointer outside the canvas pins to the nearest edge.
    pub fn to_percent(&self, client_x: f64, client_y: f64) -> CanvasPoint {
        CanvasPoint {
            x: axis_percent(client_x - self.left, self.width),
            y: axis_percent(client_y - self.top, self.height),
        }
    }
}

fn axis_percent(offset: f64, size: f64) -> f64 {
    if size <= 0.0 || !size.is_finite() {
        return 0.0;
    }
    let percent = offset / size * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Fields changed by the inline property editor. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderPatch {
    pub name: Option<String>,
    pub placeholder_type: Option<PlaceholderType>,
    pub font_size: Option<f64>,
    pub color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub object_fit: Option<ObjectFit>,
}

impl PlaceholderPatch {
    fn apply(self, placeholder: &mut Placeholder) {
        if let Some(name) = self.name {
            placeholder.name = name;
        }
        if let Some(font_size) = self.font_size.filter(|size| size.is_finite() && *size > 0.0) {
            placeholder.font_size = font_size;
        }
        if let Some(color) = self.color {
            placeholder.color = color;
        }
        if let Some(width) = self.width {
            placeholder.width = Some(width);
        }
        if let Some(height) = self.height {
            placeholder.height = Some(height);
        }
        if let Some(object_fit) = self.object_fit {
            placeholder.object_fit = Some(object_fit);
        }
        if let Some(placeholder_type) = self.placeholder_type {
            placeholder.placeholder_type = placeholder_type;
            placeholder.apply_media_defaults();
        }
    }
}

impl TemplateDocument {
    /// Creates a text placeholder at `at` with the default style and an
    /// auto-numbered name.
    pub fn add_placeholder(
        &mut self,
        mode: CanvasMode,
        at: CanvasPoint,
    ) -> Result<&Placeholder, StudioError> {
        if mode == CanvasMode::Preview {
            return Err(StudioError::ReadOnly);
        }
        let placeholders = &mut self.template.placeholders;
        let placeholder = Placeholder {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("Placeholder {}", placeholders.len() + 1),
            placeholder_type: PlaceholderType::Text,
            x: at.x.clamp(0.0, 100.0),
            y: at.y.clamp(0.0, 100.0),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            width: None,
            height: None,
            object_fit: None,
        };
        placeholders.push(placeholder);
        Ok(&placeholders[placeholders.len() - 1])
    }

    pub fn update_placeholder(
        &mut self,
        id: &str,
        patch: PlaceholderPatch,
    ) -> Result<(), StudioError> {
        let placeholder = self
            .template
            .placeholder_mut(id)
            .ok_or_else(|| StudioError::PlaceholderNotFound(id.to_string()))?;
        patch.apply(placeholder);
        Ok(())
    }

    pub fn move_placeholder(&mut self, id: &str, to: CanvasPoint) -> Result<(), StudioError> {
        let placeholder = self
            .template
            .placeholder_mut(id)
            .ok_or_else(|| StudioError::PlaceholderNotFound(id.to_string()))?;
        placeholder.x = to.x.clamp(0.0, 100.0);
        placeholder.y = to.y.clamp(0.0, 100.0);
        Ok(())
    }

    /// Removes a placeholder and its value from every iteration.
    pub fn delete_placeholder(&mut self, id: &str) -> Result<Placeholder, StudioError> {
        let index = self
            .template
            .placeholders
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StudioError::PlaceholderNotFound(id.to_string()))?;
        let removed = self.template.placeholders.remove(index);
        for iteration in &mut self.iterations {
            iteration.values.remove(id);
        }
        Ok(removed)
    }
}

/// Text shown inside a placeholder: the current iteration's value when one
/// exists for it, otherwise the placeholder's own name.
pub fn display_text(placeholder: &Placeholder, current_data: Option<&IterationValues>) -> String {
    current_data
        .and_then(|values| values.get(&placeholder.id))
        .map(|value| value.to_string())
        .unwrap_or_else(|| placeholder.name.clone())
}

/// Source shown by an image or video placeholder in preview: the current
/// iteration's non-empty value, if any. Without one the placeholder falls
/// back to its name, even when the value equals that name.
pub fn media_source(placeholder: &Placeholder, current_data: Option<&IterationValues>) -> Option<String> {
    current_data
        .and_then(|values| values.get(&placeholder.id))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

/// Which placeholder the editor has selected, plus the click suppression
/// that follows a drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasSelection {
    selected: Option<String>,
    swallow_click: bool,
}

impl CanvasSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    pub fn take(&mut self) -> Option<String> {
        self.selected.take()
    }

    /// A drag moved a placeholder; the click fired on release is ignored.
    pub fn drag_finished(&mut self) {
        self.swallow_click = true;
    }

    /// Click on empty canvas area. Clears any selection and returns whether a
    /// placeholder should be added at the click position.
    pub fn empty_canvas_clicked(&mut self, mode: CanvasMode) -> bool {
        self.selected = None;
        if std::mem::take(&mut self.swallow_click) {
            return false;
        }
        mode == CanvasMode::Edit
    }

    /// Drops the selection in preview mode or once the placeholder is gone.
    pub fn retain(&mut self, document: &TemplateDocument, mode: CanvasMode) {
        let keep = mode == CanvasMode::Edit
            && self
                .selected
                .as_deref()
                .is_some_and(|id| document.template.placeholder(id).is_some());
        if !keep {
            self.selected = None;
        }
        if mode == CanvasMode::Preview {
            self.swallow_click = false;
        }
    }
}

/// One drag gesture over the canvas.
///
/// Captures the canvas box when the pointer goes down; every move is mapped
/// through it until the gesture is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    placeholder_id: String,
    rect: CanvasRect,
}

impl DragGesture {
    pub fn begin(
        mode: CanvasMode,
        placeholder_id: impl Into<String>,
        rect: CanvasRect,
    ) -> Result<Self, StudioError> {
        if mode == CanvasMode::Preview {
            return Err(StudioError::ReadOnly);
        }
        Ok(Self {
            placeholder_id: placeholder_id.into(),
            rect,
        })
    }

    pub fn placeholder_id(&self) -> &str {
        &self.placeholder_id
    }

    pub fn pointer_moved(&self, client_x: f64, client_y: f64) -> CanvasPoint {
        self.rect.to_percent(client_x, client_y)
    }

    /// Applies the final pointer position and ends the gesture.
    pub fn finish(
        self,
        document: &mut TemplateDocument,
        client_x: f64,
        client_y: f64,
    ) -> Result<(), StudioError> {
        let to = self.pointer_moved(client_x, client_y);
        document.move_placeholder(&self.placeholder_id, to)
    }
}
