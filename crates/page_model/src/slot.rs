//! Slot types - positioned placeholders for image and text content
//!
//! A slot describes where content lives on a page and how it is presented.
//! Free-form slots carry a percent-space [`Rect`]; slots without a rect are
//! governed by a fixed grid supplied by the presentation layer (legacy
//! library layouts) until converted to free-form geometry.

use crate::{Rect, SlotId};
use serde::{Deserialize, Serialize};

/// What kind of content a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Image,
    Text,
}

/// Crop anchor for image content, in percent of the slot box per axis.
/// `{50, 50}` centers the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropPosition {
    pub x: f64,
    pub y: f64,
}

impl CropPosition {
    pub const CENTER: CropPosition = CropPosition { x: 50.0, y: 50.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for CropPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// How image content is fitted into its slot box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
}

/// Visual filter applied to image content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilter {
    None,
    Grayscale,
    Sepia,
    Contrast,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical text alignment inside the slot box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Font weight, including the numeric weights the text renderer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Per-slot visual settings. Every field is optional; a page stores only
/// the settings the user actually changed, and partial patches fold over a
/// base via [`SlotSettings::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSettings {
    // Image settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ImageFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_y: Option<f64>,

    // Text settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
}

impl SlotSettings {
    /// Fold a partial patch over this base: fields present in `patch` win,
    /// everything else keeps the base value.
    pub fn merge(&self, patch: &SlotSettings) -> SlotSettings {
        SlotSettings {
            fit: patch.fit.or(self.fit),
            filter: patch.filter.or(self.filter),
            crop_x: patch.crop_x.or(self.crop_x),
            crop_y: patch.crop_y.or(self.crop_y),
            align: patch.align.or(self.align),
            font_family: patch.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: patch.font_size.or(self.font_size),
            font_weight: patch.font_weight.or(self.font_weight),
            font_style: patch.font_style.or(self.font_style),
            line_height: patch.line_height.or(self.line_height),
            letter_spacing: patch.letter_spacing.or(self.letter_spacing),
            color: patch.color.clone().or_else(|| self.color.clone()),
            uppercase: patch.uppercase.or(self.uppercase),
            vertical_align: patch.vertical_align.or(self.vertical_align),
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}

/// One placeholder on a page or template.
///
/// Owned exclusively by its parent layout; duplicated by value. Paint order
/// is the slot's position in the owning layout's slot array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    #[serde(rename = "type")]
    pub kind: SlotType,
    /// Free-form geometry. `None` means the slot's position is governed by
    /// the owning layout's fixed grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    /// Rotation in degrees around the rect center. Stored unwrapped.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub border_radius: f64,
    /// Locked slots ignore move/resize but still accept rotation
    #[serde(default)]
    pub locked: bool,
    /// Placeholder text shown while the slot has no content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Seed content copied into a page when the layout is applied:
    /// an image URL for IMAGE slots, text for TEXT slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_content: Option<String>,
    /// Crop anchor copied into the page's slot settings on layout apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_content_position: Option<CropPosition>,
    /// Default visual settings copied on layout apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_settings: Option<SlotSettings>,
}

impl Slot {
    /// Create a free-form slot with a generated id
    pub fn new(kind: SlotType, rect: Rect) -> Self {
        Self {
            id: SlotId::generate(),
            kind,
            rect: Some(rect.normalized()),
            rotation: 0.0,
            opacity: 1.0,
            border_radius: 0.0,
            locked: false,
            placeholder: None,
            default_content: None,
            default_content_position: None,
            default_settings: None,
        }
    }

    /// Create a free-form image slot
    pub fn image(rect: Rect) -> Self {
        Self::new(SlotType::Image, rect)
    }

    /// Create a free-form text slot
    pub fn text(rect: Rect) -> Self {
        Self::new(SlotType::Text, rect)
    }

    /// Create a grid-governed slot (no free-form rect) with a stable id,
    /// as used by the built-in layout library
    pub fn grid(id: impl Into<SlotId>, kind: SlotType) -> Self {
        Self {
            id: id.into(),
            kind,
            rect: None,
            rotation: 0.0,
            opacity: 1.0,
            border_radius: 0.0,
            locked: false,
            placeholder: None,
            default_content: None,
            default_content_position: None,
            default_settings: None,
        }
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the seed content
    pub fn with_default_content(mut self, content: impl Into<String>) -> Self {
        self.default_content = Some(content.into());
        self
    }

    /// Set the default visual settings
    pub fn with_default_settings(mut self, settings: SlotSettings) -> Self {
        self.default_settings = Some(settings);
        self
    }

    /// Whether this slot has free-form geometry
    pub fn is_free_form(&self) -> bool {
        self.rect.is_some()
    }
}
