//! Device classes and their per-class view configuration.
//!
//! The preview approximates how a platform renders a post at different
//! device widths. Each device class maps to a static [`ViewConfig`] that
//! drives text wrapping, the collapsed-height budget, and the card width.

/// Horizontal text padding inside the card, in pixels (both sides combined).
const CARD_TEXT_PADDING_PX: f32 = 24.0;

/// Average glyph width as a fraction of the font size, used to translate
/// a pixel width into a text column budget.
const AVG_GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Device class the preview is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Phone-width preview
    #[default]
    Compact,
    /// Tablet-width preview
    Tablet,
    /// Desktop-width preview
    Wide,
}

impl DeviceClass {
    /// All device classes in cycling order.
    pub const ALL: [Self; 3] = [Self::Compact, Self::Tablet, Self::Wide];

    /// Returns the next device class in cycling order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Compact => Self::Tablet,
            Self::Tablet => Self::Wide,
            Self::Wide => Self::Compact,
        }
    }

    /// Human-readable label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Tablet => "tablet",
            Self::Wide => "wide",
        }
    }

    /// Returns the static view configuration for this device class.
    #[must_use]
    pub const fn view_config(self) -> ViewConfig {
        match self {
            Self::Compact => ViewConfig {
                max_visible_lines: 2,
                max_visible_height_px: 56.0,
                container_width_px: 340.0,
                font_size_px: 14.0,
                line_height_ratio: 1.4,
            },
            Self::Tablet => ViewConfig {
                max_visible_lines: 2,
                max_visible_height_px: 56.0,
                container_width_px: 440.0,
                font_size_px: 14.0,
                line_height_ratio: 1.4,
            },
            Self::Wide => ViewConfig {
                max_visible_lines: 2,
                max_visible_height_px: 56.0,
                container_width_px: 540.0,
                font_size_px: 14.0,
                line_height_ratio: 1.4,
            },
        }
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" | "mobile" | "phone" => Ok(Self::Compact),
            "tablet" => Ok(Self::Tablet),
            "wide" | "desktop" => Ok(Self::Wide),
            other => Err(format!(
                "Unknown device class '{other}'. Expected: compact, tablet, or wide"
            )),
        }
    }
}

/// Static per-device rendering parameters for the collapsed preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Number of text lines visible before truncation.
    pub max_visible_lines: usize,
    /// Collapsed text block height budget in pixels.
    pub max_visible_height_px: f32,
    /// Card width in pixels.
    pub container_width_px: f32,
    /// Body font size in pixels.
    pub font_size_px: f32,
    /// Line height as a multiple of the font size.
    pub line_height_ratio: f32,
}

impl ViewConfig {
    /// Height of a single rendered text line in pixels.
    #[must_use]
    pub fn line_height_px(&self) -> f32 {
        self.font_size_px * self.line_height_ratio
    }

    /// Text column budget derived from the container width.
    ///
    /// The terminal has no font metrics, so the pixel width is translated
    /// into display columns using an average glyph width.
    #[must_use]
    pub fn text_columns(&self) -> usize {
        let usable = (self.container_width_px - CARD_TEXT_PADDING_PX).max(1.0);
        (usable / (self.font_size_px * AVG_GLYPH_WIDTH_RATIO)).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_cycle_order() {
        assert_eq!(DeviceClass::Compact.next(), DeviceClass::Tablet);
        assert_eq!(DeviceClass::Tablet.next(), DeviceClass::Wide);
        assert_eq!(DeviceClass::Wide.next(), DeviceClass::Compact);
    }

    #[test]
    fn test_view_config_values() {
        let compact = DeviceClass::Compact.view_config();
        assert_eq!(compact.max_visible_lines, 2);
        assert!((compact.max_visible_height_px - 56.0).abs() < f32::EPSILON);
        assert!((compact.container_width_px - 340.0).abs() < f32::EPSILON);

        let wide = DeviceClass::Wide.view_config();
        assert!((wide.container_width_px - 540.0).abs() < f32::EPSILON);
        // Height budget is shared across device classes
        assert!((wide.max_visible_height_px - compact.max_visible_height_px).abs() < f32::EPSILON);
    }

    #[test]
    fn test_line_height() {
        let cfg = DeviceClass::Compact.view_config();
        assert!((cfg.line_height_px() - 19.6).abs() < 0.001);
    }

    #[test]
    fn test_text_columns_grow_with_width() {
        let compact = DeviceClass::Compact.view_config().text_columns();
        let tablet = DeviceClass::Tablet.view_config().text_columns();
        let wide = DeviceClass::Wide.view_config().text_columns();
        assert!(compact < tablet);
        assert!(tablet < wide);
        assert!(compact > 20, "compact column budget too small: {compact}");
    }

    #[test]
    fn test_device_from_str() {
        assert_eq!("compact".parse::<DeviceClass>().unwrap(), DeviceClass::Compact);
        assert_eq!("Tablet".parse::<DeviceClass>().unwrap(), DeviceClass::Tablet);
        assert_eq!("desktop".parse::<DeviceClass>().unwrap(), DeviceClass::Wide);
        assert!("watch".parse::<DeviceClass>().is_err());
    }
}
