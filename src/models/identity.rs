//! Author identity resolution for the preview card.
//!
//! The card shows either the fixed default identity or the user's override,
//! decided field by field: the override value wins only when the override is
//! enabled AND the field is non-empty.

use std::path::PathBuf;

use crate::constants::{DEFAULT_PROFILE_HEADLINE, DEFAULT_PROFILE_NAME};
use crate::settings::Settings;

/// Photo shown in the card's avatar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPhoto {
    /// User-supplied custom photo reference.
    Custom(PathBuf),
    /// Generic placeholder avatar (override enabled, no custom photo).
    Placeholder,
    /// The fixed default identity's photo.
    Default,
}

/// Identity fields resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Display name shown in the card header.
    pub display_name: String,
    /// Headline shown under the name.
    pub headline: String,
    /// Avatar photo outcome.
    pub photo: ResolvedPhoto,
}

impl ResolvedIdentity {
    /// Uppercased first letter of the display name, for the badge fallback
    /// when a photo reference cannot be loaded.
    #[must_use]
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map_or('?', |c| c.to_uppercase().next().unwrap_or(c))
    }
}

/// Resolves the identity to render from the persisted settings.
#[must_use]
pub fn resolve_identity(settings: &Settings) -> ResolvedIdentity {
    let display_name = if settings.use_profile_override && !settings.author_name.is_empty() {
        settings.author_name.clone()
    } else {
        DEFAULT_PROFILE_NAME.to_string()
    };

    let headline = if settings.use_profile_override && !settings.author_headline.is_empty() {
        settings.author_headline.clone()
    } else {
        DEFAULT_PROFILE_HEADLINE.to_string()
    };

    let photo = if settings.use_profile_override {
        settings
            .custom_photo
            .clone()
            .map_or(ResolvedPhoto::Placeholder, ResolvedPhoto::Custom)
    } else {
        ResolvedPhoto::Default
    };

    ResolvedIdentity {
        display_name,
        headline,
        photo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity_when_override_disabled() {
        let mut settings = Settings::new();
        settings.author_name = "Sam".to_string();
        settings.author_headline = "Engineer".to_string();
        settings.use_profile_override = false;

        let identity = resolve_identity(&settings);
        assert_eq!(identity.display_name, DEFAULT_PROFILE_NAME);
        assert_eq!(identity.headline, DEFAULT_PROFILE_HEADLINE);
        assert_eq!(identity.photo, ResolvedPhoto::Default);
    }

    #[test]
    fn test_override_wins_per_field() {
        let mut settings = Settings::new();
        settings.use_profile_override = true;
        settings.author_name = "Sam".to_string();
        // Headline left empty: falls back to the default

        let identity = resolve_identity(&settings);
        assert_eq!(identity.display_name, "Sam");
        assert_eq!(identity.headline, DEFAULT_PROFILE_HEADLINE);
    }

    #[test]
    fn test_photo_placeholder_without_custom() {
        let mut settings = Settings::new();
        settings.use_profile_override = true;
        let identity = resolve_identity(&settings);
        assert_eq!(identity.photo, ResolvedPhoto::Placeholder);
    }

    #[test]
    fn test_photo_custom_when_set() {
        let mut settings = Settings::new();
        settings.use_profile_override = true;
        settings.custom_photo = Some(PathBuf::from("/tmp/me.png"));
        let identity = resolve_identity(&settings);
        assert_eq!(
            identity.photo,
            ResolvedPhoto::Custom(PathBuf::from("/tmp/me.png"))
        );
    }

    #[test]
    fn test_initial_letter() {
        let mut settings = Settings::new();
        settings.use_profile_override = true;
        settings.author_name = "jordan".to_string();
        let identity = resolve_identity(&settings);
        assert_eq!(identity.initial(), 'J');

        settings.author_name = String::new();
        let identity = resolve_identity(&settings);
        // Falls back to the default profile's first letter
        assert_eq!(identity.initial(), 'J');
    }
}
