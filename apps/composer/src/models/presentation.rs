//! Presentation configuration — every non-data input that governs how a resume renders.
//!
//! The raw form (`RawPresentation`) is what the input document carries; every field is
//! optional. `PresentationConfig` is the validated form, built once before composition and
//! only ever handed to components as `&PresentationConfig`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::policy::{EmptySectionPolicy, SectionPolicies};

// ────────────────────────────────────────────────────────────────────────────
// Direction & sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// The closed set of logical resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    PersonalDetails,
    Languages,
    Education,
    Courses,
    AboutMe,
    WorkExperience,
    MilitaryService,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::PersonalDetails,
        SectionKey::Languages,
        SectionKey::Education,
        SectionKey::Courses,
        SectionKey::AboutMe,
        SectionKey::WorkExperience,
        SectionKey::MilitaryService,
    ];

    /// Position of this key in per-section tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::PersonalDetails => "personal_details",
            SectionKey::Languages => "languages",
            SectionKey::Education => "education",
            SectionKey::Courses => "courses",
            SectionKey::AboutMe => "about_me",
            SectionKey::WorkExperience => "work_experience",
            SectionKey::MilitaryService => "military_service",
        }
    }

    fn default_label(self) -> &'static str {
        match self {
            SectionKey::PersonalDetails => "Personal Info",
            SectionKey::Languages => "Languages",
            SectionKey::Education => "Education",
            SectionKey::Courses => "Courses",
            SectionKey::AboutMe => "Summary",
            SectionKey::WorkExperience => "Working Experience",
            SectionKey::MilitaryService => "Military Service",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display labels for all seven sections.
///
/// Only constructible complete, so `get` cannot miss. An explicit label map from the input
/// replaces the defaults wholesale and must therefore name every key.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLabels([String; 7]);

impl SectionLabels {
    pub fn get(&self, key: SectionKey) -> &str {
        &self.0[key.index()]
    }
}

impl Default for SectionLabels {
    fn default() -> Self {
        SectionLabels(SectionKey::ALL.map(|key| key.default_label().to_string()))
    }
}

impl TryFrom<BTreeMap<SectionKey, String>> for SectionLabels {
    type Error = AppError;

    fn try_from(mut labels: BTreeMap<SectionKey, String>) -> Result<Self, Self::Error> {
        let mut take = |key: SectionKey| {
            labels
                .remove(&key)
                .ok_or(AppError::MissingSectionLabel(key))
        };

        Ok(SectionLabels([
            take(SectionKey::PersonalDetails)?,
            take(SectionKey::Languages)?,
            take(SectionKey::Education)?,
            take(SectionKey::Courses)?,
            take(SectionKey::AboutMe)?,
            take(SectionKey::WorkExperience)?,
            take(SectionKey::MilitaryService)?,
        ]))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Styling
// ────────────────────────────────────────────────────────────────────────────

/// A 6-digit RGB hex color, stored lowercase without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidPresentation(format!(
                "'{value}' is not a 6-digit hex color"
            )));
        }
        Ok(Color(hex.to_ascii_lowercase()))
    }

    pub(crate) fn known(hex: &'static str) -> Self {
        Color(hex.to_string())
    }

    pub fn white() -> Self {
        Color::known("ffffff")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub default: f32,
    pub block_title: f32,
    pub block_subtitle: f32,
    pub major_title: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            default: 10.0,
            block_title: 12.0,
            block_subtitle: 8.0,
            major_title: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawBackgroundColors {
    pub header: String,
    pub details: String,
    pub main: String,
}

impl Default for RawBackgroundColors {
    fn default() -> Self {
        RawBackgroundColors {
            header: "35373d".to_string(),
            details: "e9e2dd".to_string(),
            main: "ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundColors {
    pub header: Color,
    pub details: Color,
    pub main: Color,
}

impl TryFrom<RawBackgroundColors> for BackgroundColors {
    type Error = AppError;

    fn try_from(raw: RawBackgroundColors) -> Result<Self, Self::Error> {
        Ok(BackgroundColors {
            header: Color::parse(&raw.header)?,
            details: Color::parse(&raw.details)?,
            main: Color::parse(&raw.main)?,
        })
    }
}

/// Relative widths of the two body columns (and of the matching header slots).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnProportions {
    pub details: f32,
    pub main: f32,
}

impl Default for ColumnProportions {
    fn default() -> Self {
        ColumnProportions {
            details: 1.0,
            main: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw & validated config
// ────────────────────────────────────────────────────────────────────────────

/// The `presentation` object of an input document, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPresentation {
    pub text_direction: TextDirection,
    pub font_family: Option<String>,
    pub page_size: PageSize,
    pub section_labels: Option<BTreeMap<SectionKey, String>>,
    pub section_policies: BTreeMap<SectionKey, EmptySectionPolicy>,
    pub font_sizes: FontSizes,
    pub background_colors: RawBackgroundColors,
    pub column_proportions: ColumnProportions,
}

const DEFAULT_FONT_FAMILY: &str = "Arial";

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationConfig {
    pub text_direction: TextDirection,
    pub font_family: String,
    pub page_size: PageSize,
    pub section_labels: SectionLabels,
    pub section_policies: SectionPolicies,
    pub font_sizes: FontSizes,
    pub background_colors: BackgroundColors,
    pub column_proportions: ColumnProportions,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        PresentationConfig {
            text_direction: TextDirection::LeftToRight,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            page_size: PageSize::A4,
            section_labels: SectionLabels::default(),
            section_policies: SectionPolicies::default(),
            font_sizes: FontSizes::default(),
            background_colors: BackgroundColors {
                header: Color::known("35373d"),
                details: Color::known("e9e2dd"),
                main: Color::known("ffffff"),
            },
            column_proportions: ColumnProportions::default(),
        }
    }
}

impl TryFrom<RawPresentation> for PresentationConfig {
    type Error = AppError;

    fn try_from(raw: RawPresentation) -> Result<Self, Self::Error> {
        let section_labels = match raw.section_labels {
            Some(labels) => SectionLabels::try_from(labels)?,
            None => SectionLabels::default(),
        };

        let sizes = raw.font_sizes;
        require_positive("font_sizes.default", sizes.default)?;
        require_positive("font_sizes.block_title", sizes.block_title)?;
        require_positive("font_sizes.block_subtitle", sizes.block_subtitle)?;
        require_positive("font_sizes.major_title", sizes.major_title)?;

        let proportions = raw.column_proportions;
        require_positive("column_proportions.details", proportions.details)?;
        require_positive("column_proportions.main", proportions.main)?;

        let font_family = match raw.font_family {
            Some(family) if !family.trim().is_empty() => family,
            _ => DEFAULT_FONT_FAMILY.to_string(),
        };

        Ok(PresentationConfig {
            text_direction: raw.text_direction,
            font_family,
            page_size: raw.page_size,
            section_labels,
            section_policies: SectionPolicies::default().with_overrides(&raw.section_policies),
            font_sizes: sizes,
            background_colors: BackgroundColors::try_from(raw.background_colors)?,
            column_proportions: proportions,
        })
    }
}

fn require_positive(field: &str, value: f32) -> Result<(), AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidPresentation(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}
