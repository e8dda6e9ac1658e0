//! Turns a template document into a render request.
//!
//! Iterations are laid end to end: iteration *k* starts when the previous
//! ones have finished, and every placeholder value of that iteration becomes
//! an overlay lasting exactly the iteration's duration.

use crate::model::placeholder::{Placeholder, PlaceholderType};
use crate::model::render::{
    OutputFormat, OverlayKind, OverlayPosition, OverlayStyle, RenderOverlay, RenderQuality,
    RenderRequest,
};
use crate::model::template::TemplateDocument;
use crate::studio::data::millis_to_seconds;

pub fn build_render_request(
    document: &TemplateDocument,
    template_url: impl Into<String>,
    output_format: Option<OutputFormat>,
    quality: Option<RenderQuality>,
) -> RenderRequest {
    let mut overlays = Vec::new();
    let mut start_ms: u64 = 0;

    for iteration in &document.iterations {
        for placeholder in &document.template.placeholders {
            let Some(kind) = overlay_kind(placeholder) else {
                continue;
            };
            let Some(value) = iteration.values.get(&placeholder.id) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            overlays.push(RenderOverlay {
                id: format!("{}-{}", iteration.id, placeholder.id),
                kind,
                value: value.to_string(),
                start_time: millis_to_seconds(start_ms),
                duration: millis_to_seconds(iteration.duration),
                position: Some(OverlayPosition {
                    x: placeholder.x,
                    y: placeholder.y,
                }),
                style: (kind == OverlayKind::Text).then(|| OverlayStyle {
                    font_size: Some(placeholder.font_size),
                    color: Some(placeholder.color.clone()),
                    font_family: None,
                }),
            });
        }
        start_ms += iteration.duration;
    }

    RenderRequest {
        template_url: template_url.into(),
        placeholders: overlays,
        output_format,
        quality,
    }
}

/// Video placeholders have no overlay counterpart on the providers.
fn overlay_kind(placeholder: &Placeholder) -> Option<OverlayKind> {
    match placeholder.placeholder_type {
        PlaceholderType::Text | PlaceholderType::Price | PlaceholderType::Category => {
            Some(OverlayKind::Text)
        }
        PlaceholderType::Image => Some(OverlayKind::Image),
        PlaceholderType::Video => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::canvas::{CanvasMode, CanvasPoint, PlaceholderPatch};
    use crate::studio::data::IterationPatch;

    #[test]
    fn lays_iterations_end_to_end() {
        let mut doc = TemplateDocument::default();
        let title = doc
            .add_placeholder(CanvasMode::Edit, CanvasPoint { x: 50.0, y: 10.0 })
            .unwrap()
            .id
            .clone();
        let clip = doc
            .add_placeholder(CanvasMode::Edit, CanvasPoint { x: 50.0, y: 60.0 })
            .unwrap()
            .id
            .clone();
        doc.update_placeholder(
            &clip,
            PlaceholderPatch {
                placeholder_type: Some(PlaceholderType::Video),
                ..PlaceholderPatch::default()
            },
        )
        .unwrap();

        let first = doc.add_iteration().id.clone();
        doc.update_iteration_value(&first, &title, "Espresso").unwrap();
        doc.update_iteration_value(&first, &clip, "https://cdn.example.com/c.mp4")
            .unwrap();
        doc.update_iteration(
            &first,
            IterationPatch {
                duration: Some(1500),
                ..IterationPatch::default()
            },
        )
        .unwrap();
        doc.add_iteration();
        let third = doc.add_iteration().id.clone();
        doc.update_iteration_value(&third, &title, "Latte").unwrap();

        let request = build_render_request(
            &doc,
            "https://bucket.s3.amazonaws.com/t.mp4",
            None,
            Some(RenderQuality::High),
        );

        assert_eq!(request.placeholders.len(), 2);
        let espresso = &request.placeholders[0];
        assert_eq!(espresso.value, "Espresso");
        assert_eq!(espresso.start_time, 0.0);
        assert_eq!(espresso.duration, 1.5);
        assert_eq!(espresso.position, Some(OverlayPosition { x: 50.0, y: 10.0 }));
        assert_eq!(espresso.style.as_ref().unwrap().font_size, Some(24.0));

        let latte = &request.placeholders[1];
        assert_eq!(latte.start_time, 3.5);
        assert_eq!(latte.duration, 2.0);
        assert_eq!(latte.kind, OverlayKind::Text);
    }
}
