//! Data models for the post draft, media attachments, and identity.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod device;
pub mod draft;
pub mod identity;
pub mod media;

// Re-export all model types
pub use device::{DeviceClass, ViewConfig};
pub use draft::PostDraft;
pub use identity::{resolve_identity, ResolvedIdentity, ResolvedPhoto};
pub use media::{DocumentAttachment, DocumentPage, ImageRef, MediaAttachment};
