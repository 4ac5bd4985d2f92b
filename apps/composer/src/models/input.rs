//! Input document loading — the boundary where malformed data is rejected.

use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::presentation::{PresentationConfig, RawPresentation};
use crate::models::resume::ResumeData;

/// `{ "resume": { ... }, "presentation": { ... } }`. `presentation` is optional.
#[derive(Debug, Deserialize)]
pub struct InputDocument {
    pub resume: ResumeData,
    #[serde(default)]
    pub presentation: RawPresentation,
}

/// Parses and validates an input document.
///
/// Both shape errors and configuration errors surface here, so composition only ever starts
/// with a complete, validated `PresentationConfig`.
pub fn parse_input(json: &str) -> Result<(ResumeData, PresentationConfig), AppError> {
    let document: InputDocument = serde_json::from_str(json)?;
    let presentation = PresentationConfig::try_from(document.presentation)?;

    debug!(
        direction = ?presentation.text_direction,
        jobs = document.resume.work_experience.len(),
        "Input document parsed"
    );

    Ok((document.resume, presentation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::{SectionKey, TextDirection};
    use serde_json::json;

    #[test]
    fn test_presentation_is_optional() {
        let (resume, config) = parse_input(r#"{ "resume": { "full_name": "Jane Doe" } }"#).unwrap();
        assert_eq!(resume.full_name, "Jane Doe");
        assert!(resume.languages.is_empty());
        assert_eq!(config, PresentationConfig::default());
    }

    #[test]
    fn test_missing_resume_object_is_input_error() {
        let err = parse_input(r#"{ "presentation": {} }"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json_is_input_error() {
        let err = parse_input("{ not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_label_aborts_before_composition() {
        let doc = json!({
            "resume": {},
            "presentation": { "section_labels": { "languages": "Languages" } }
        });
        let err = parse_input(&doc.to_string()).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingSectionLabel(SectionKey::PersonalDetails)
        ));
    }

    #[test]
    fn test_full_document_round_trip_fields() {
        let doc = json!({
            "resume": {
                "full_name": "Dana Levi",
                "personal_info": [
                    { "text": "dana@example.com", "hyperlink": "mailto:dana@example.com", "icon": "icons/mail.svg" }
                ],
                "languages": ["Hebrew", "English"],
                "military_service": [
                    { "position": "Medic", "branch": "Corps", "description": ["Treated patients."] }
                ]
            },
            "presentation": { "text_direction": "right_to_left", "font_family": "Rubik" }
        });

        let (resume, config) = parse_input(&doc.to_string()).unwrap();
        assert_eq!(resume.personal_info[0].icon.as_deref(), Some("icons/mail.svg"));
        assert_eq!(resume.languages, vec!["Hebrew", "English"]);
        assert_eq!(resume.military_service[0].details.len(), 1);
        assert_eq!(config.text_direction, TextDirection::RightToLeft);
        assert_eq!(config.font_family, "Rubik");
    }
}
