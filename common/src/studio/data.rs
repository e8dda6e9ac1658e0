use crate::error::StudioError;
use crate::model::iteration::{
    DataIteration, IterationValues, PlaceholderValue, DEFAULT_DURATION_MS, MIN_DURATION_MS,
};
use crate::model::placeholder::PlaceholderType;
use crate::model::template::TemplateDocument;
use crate::studio::media;

/// Top-level iteration fields the data manager can change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationPatch {
    pub duration: Option<u64>,
    pub values: Option<IterationValues>,
}

impl TemplateDocument {
    /// Appends an iteration with an empty value for every current placeholder.
    pub fn add_iteration(&mut self) -> &DataIteration {
        let values = self
            .template
            .placeholders
            .iter()
            .map(|p| (p.id.clone(), PlaceholderValue::default()))
            .collect();
        self.iterations.push(DataIteration {
            id: uuid::Uuid::new_v4().to_string(),
            values,
            duration: DEFAULT_DURATION_MS,
        });
        &self.iterations[self.iterations.len() - 1]
    }

    pub fn update_iteration_value(
        &mut self,
        iteration_id: &str,
        placeholder_id: &str,
        value: impl Into<PlaceholderValue>,
    ) -> Result<(), StudioError> {
        let iteration = self.iteration_mut(iteration_id)?;
        iteration
            .values
            .insert(placeholder_id.to_string(), value.into());
        Ok(())
    }

    pub fn update_iteration(
        &mut self,
        iteration_id: &str,
        patch: IterationPatch,
    ) -> Result<(), StudioError> {
        let iteration = self.iteration_mut(iteration_id)?;
        if let Some(duration) = patch.duration {
            iteration.duration = duration.max(MIN_DURATION_MS);
        }
        if let Some(values) = patch.values {
            iteration.values = values;
        }
        Ok(())
    }

    pub fn delete_iteration(&mut self, iteration_id: &str) -> Result<DataIteration, StudioError> {
        let index = self
            .iterations
            .iter()
            .position(|i| i.id == iteration_id)
            .ok_or_else(|| StudioError::IterationNotFound(iteration_id.to_string()))?;
        Ok(self.iterations.remove(index))
    }

    /// Stores an uploaded image as the value of an image placeholder.
    ///
    /// The file is embedded as a data URL so the preview works without a
    /// server round trip. Nothing changes when the MIME type is not an image.
    pub fn set_image_value(
        &mut self,
        iteration_id: &str,
        placeholder_id: &str,
        mime: &str,
        bytes: &[u8],
    ) -> Result<(), StudioError> {
        media::ensure_image(mime)?;
        let placeholder = self
            .template
            .placeholder(placeholder_id)
            .ok_or_else(|| StudioError::PlaceholderNotFound(placeholder_id.to_string()))?;
        if placeholder.placeholder_type != PlaceholderType::Image {
            return Err(StudioError::NotAnImagePlaceholder(placeholder.name.clone()));
        }
        let url = media::data_url(mime, bytes);
        self.update_iteration_value(iteration_id, placeholder_id, url)
    }

    fn iteration_mut(&mut self, iteration_id: &str) -> Result<&mut DataIteration, StudioError> {
        self.iterations
            .iter_mut()
            .find(|i| i.id == iteration_id)
            .ok_or_else(|| StudioError::IterationNotFound(iteration_id.to_string()))
    }
}

/// Converts the seconds typed in the duration field to stored milliseconds.
/// Values below half a second, or that are not numbers, become the minimum.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() {
        return MIN_DURATION_MS;
    }
    let millis = (seconds * 1000.0).round();
    if millis < MIN_DURATION_MS as f64 {
        MIN_DURATION_MS
    } else {
        millis as u64
    }
}

pub fn millis_to_seconds(millis: u64) -> f64 {
    millis as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::canvas::{CanvasMode, CanvasPoint};

    fn doc_with_placeholders(count: usize) -> TemplateDocument {
        let mut doc = TemplateDocument::default();
        for i in 0..count {
            doc.add_placeholder(
                CanvasMode::Edit,
                CanvasPoint {
                    x: i as f64,
                    y: i as f64,
                },
            )
            .unwrap();
        }
        doc
    }

    fn placeholder_ids(doc: &TemplateDocument) -> Vec<String> {
        doc.template.placeholders.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn seeds_current_placeholder_set() {
        let mut doc = doc_with_placeholders(1);
        doc.add_iteration();
        doc.add_placeholder(CanvasMode::Edit, CanvasPoint { x: 9.0, y: 9.0 })
            .unwrap();
        doc.add_placeholder(CanvasMode::Edit, CanvasPoint { x: 8.0, y: 8.0 })
            .unwrap();
        let latest = doc.add_iteration().clone();

        let keys: Vec<String> = latest.values.keys().cloned().collect();
        let mut expected = placeholder_ids(&doc);
        expected.sort();
        assert_eq!(keys, expected);
        assert!(latest.values.values().all(|v| *v == PlaceholderValue::from("")));
        assert_eq!(latest.duration, 2000);
        assert_eq!(doc.iterations[0].values.len(), 1);
    }

    #[test]
    fn updates_single_value_and_duration() {
        let mut doc = doc_with_placeholders(2);
        let ids = placeholder_ids(&doc);
        let iteration = doc.add_iteration().id.clone();

        doc.update_iteration_value(&iteration, &ids[0], "Coffee").unwrap();
        doc.update_iteration(
            &iteration,
            IterationPatch {
                duration: Some(3500),
                ..IterationPatch::default()
            },
        )
        .unwrap();

        let updated = &doc.iterations[0];
        assert_eq!(updated.values[&ids[0]], PlaceholderValue::from("Coffee"));
        assert_eq!(updated.values[&ids[1]], PlaceholderValue::from(""));
        assert_eq!(updated.duration, 3500);

        doc.update_iteration(
            &iteration,
            IterationPatch {
                duration: Some(10),
                ..IterationPatch::default()
            },
        )
        .unwrap();
        assert_eq!(doc.iterations[0].duration, MIN_DURATION_MS);
    }

    #[test]
    fn deletes_iterations_by_id() {
        let mut doc = doc_with_placeholders(1);
        let first = doc.add_iteration().id.clone();
        let second = doc.add_iteration().id.clone();
        doc.delete_iteration(&first).unwrap();
        assert_eq!(doc.iterations.len(), 1);
        assert_eq!(doc.iterations[0].id, second);
        assert_eq!(
            doc.delete_iteration(&first),
            Err(StudioError::IterationNotFound(first))
        );
    }

    #[test]
    fn rejects_non_image_upload_without_touching_value() {
        let mut doc = doc_with_placeholders(1);
        let id = placeholder_ids(&doc).remove(0);
        doc.update_placeholder(
            &id,
            crate::studio::canvas::PlaceholderPatch {
                placeholder_type: Some(PlaceholderType::Image),
                ..Default::default()
            },
        )
        .unwrap();
        let iteration = doc.add_iteration().id.clone();
        doc.update_iteration_value(&iteration, &id, "https://cdn.example.com/old.png")
            .unwrap();

        let err = doc
            .set_image_value(&iteration, &id, "application/pdf", b"%PDF-1.7")
            .unwrap_err();
        assert_eq!(err, StudioError::NotAnImage("application/pdf".to_string()));
        assert_eq!(
            doc.iterations[0].values[&id],
            PlaceholderValue::from("https://cdn.example.com/old.png")
        );

        doc.set_image_value(&iteration, &id, "image/png", &[0x89, b'P', b'N', b'G'])
            .unwrap();
        assert_eq!(
            doc.iterations[0].values[&id],
            PlaceholderValue::from("data:image/png;base64,iVBORw==")
        );
    }

    #[test]
    fn converts_durations_at_the_display_boundary() {
        assert_eq!(seconds_to_millis(2.5), 2500);
        assert_eq!(seconds_to_millis(0.1), 500);
        assert_eq!(seconds_to_millis(f64::NAN), 500);
        assert_eq!(millis_to_seconds(1500), 1.5);
    }
}
