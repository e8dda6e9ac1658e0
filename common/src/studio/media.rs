use crate::error::StudioError;
use crate::model::template::TemplateData;
use base64::{engine::general_purpose, Engine as _};

/// Which background slot an uploaded file goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Image,
    Video,
}

impl BackgroundKind {
    pub fn classify(mime: &str) -> Result<Self, StudioError> {
        if is_video(mime) {
            Ok(BackgroundKind::Video)
        } else if is_image(mime) {
            Ok(BackgroundKind::Image)
        } else {
            Err(StudioError::UnsupportedMedia(display_mime(mime)))
        }
    }
}

pub fn is_image(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

pub fn is_video(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("video/")
}

pub fn ensure_image(mime: &str) -> Result<(), StudioError> {
    if is_image(mime) {
        Ok(())
    } else {
        Err(StudioError::NotAnImage(display_mime(mime)))
    }
}

fn display_mime(mime: &str) -> String {
    if mime.trim().is_empty() {
        "unknown type".to_string()
    } else {
        mime.trim().to_string()
    }
}

/// Encodes file contents as an embeddable `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime.trim(),
        general_purpose::STANDARD.encode(bytes)
    )
}

impl TemplateData {
    /// Puts an uploaded file in the matching background slot, clearing the
    /// other one.
    pub fn set_background_media(
        &mut self,
        mime: &str,
        bytes: &[u8],
    ) -> Result<BackgroundKind, StudioError> {
        let kind = BackgroundKind::classify(mime)?;
        let url = data_url(mime, bytes);
        match kind {
            BackgroundKind::Image => self.set_background_image(url),
            BackgroundKind::Video => self.set_background_video(url),
        }
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_background_media() {
        assert_eq!(BackgroundKind::classify("video/mp4"), Ok(BackgroundKind::Video));
        assert_eq!(BackgroundKind::classify("IMAGE/JPEG"), Ok(BackgroundKind::Image));
        assert_eq!(
            BackgroundKind::classify(""),
            Err(StudioError::UnsupportedMedia("unknown type".to_string()))
        );
    }

    #[test]
    fn uploading_background_replaces_other_slot() {
        let mut template = TemplateData::new("Promo");
        template.set_background_image("https://cdn.example.com/bg.png".to_string());
        let kind = template.set_background_media("video/webm", b"webm").unwrap();
        assert_eq!(kind, BackgroundKind::Video);
        assert_eq!(template.background_image, None);
        assert_eq!(
            template.background_video.as_deref(),
            Some("data:video/webm;base64,d2VibQ==")
        );
    }

    #[test]
    fn rejected_background_keeps_state() {
        let mut template = TemplateData::new("Promo");
        template.set_background_image("https://cdn.example.com/bg.png".to_string());
        assert!(template.set_background_media("text/csv", b"a,b").is_err());
        assert_eq!(
            template.background_image.as_deref(),
            Some("https://cdn.example.com/bg.png")
        );
    }
}
