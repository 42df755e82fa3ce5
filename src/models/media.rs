//! Media attachments: images or a paginated document.
//!
//! A post carries at most one attachment kind at a time. The sum type makes
//! that invariant structural: switching kinds replaces the whole variant and
//! with it every piece of the previous kind's state.

use std::path::{Path, PathBuf};

use crate::constants::MAX_IMAGES;

/// Reference to an attached image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Path to the image on disk.
    pub path: PathBuf,
}

impl ImageRef {
    /// Creates an image reference from a path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// A single rendered (or placeholder) document page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPage {
    /// Zero-based page index.
    pub index: usize,
    /// Rendered thumbnail artifact, or `None` for a placeholder page.
    pub thumbnail: Option<PathBuf>,
}

impl DocumentPage {
    /// Creates a placeholder page with no thumbnail.
    #[must_use]
    pub const fn placeholder(index: usize) -> Self {
        Self {
            index,
            thumbnail: None,
        }
    }
}

/// An attached document with its page list and a bounded page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttachment {
    /// Display title, editable; defaults to the source file stem.
    pub title: String,
    /// Path to the source document.
    pub source: PathBuf,
    /// Ordered pages. May be empty while rendering is in flight.
    pub pages: Vec<DocumentPage>,
    current_page: usize,
}

impl DocumentAttachment {
    /// Creates a document attachment with the title derived from the file
    /// stem (extension stripped).
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let title = source
            .file_stem()
            .map_or_else(|| source.display().to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            title,
            source,
            pages: Vec::new(),
            current_page: 0,
        }
    }

    /// Replaces the page list and resets the cursor to the first page.
    pub fn set_pages(&mut self, pages: Vec<DocumentPage>) {
        self.pages = pages;
        self.current_page = 0;
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page the cursor is on.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The page the cursor is on, if any pages exist.
    #[must_use]
    pub fn current(&self) -> Option<&DocumentPage> {
        self.pages.get(self.current_page)
    }

    /// Advances the cursor. No-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page + 1 < self.pages.len() {
            self.current_page += 1;
        }
    }

    /// Moves the cursor back. No-op on the first page.
    pub fn prev_page(&mut self) {
        if self.current_page > 0 {
            self.current_page -= 1;
        }
    }
}

/// The post's media attachment. At most one kind is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaAttachment {
    /// No attachment.
    #[default]
    None,
    /// Up to [`MAX_IMAGES`] attached images.
    Images(Vec<ImageRef>),
    /// A single attached document.
    Document(DocumentAttachment),
}

impl MediaAttachment {
    /// Whether no attachment is active.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The attached images, if the image kind is active.
    #[must_use]
    pub fn images(&self) -> Option<&[ImageRef]> {
        match self {
            Self::Images(images) => Some(images),
            _ => None,
        }
    }

    /// The attached document, if the document kind is active.
    #[must_use]
    pub fn document(&self) -> Option<&DocumentAttachment> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Mutable access to the attached document.
    pub fn document_mut(&mut self) -> Option<&mut DocumentAttachment> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Adds images, switching to the image kind if necessary.
    ///
    /// Switching kinds discards the previous attachment. Existing images are
    /// kept and the combined list is capped at [`MAX_IMAGES`]. Returns the
    /// number of images actually added.
    pub fn add_images<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        if !matches!(self, Self::Images(_)) {
            *self = Self::Images(Vec::new());
        }
        let Self::Images(images) = self else {
            unreachable!()
        };
        let before = images.len();
        for path in paths {
            images.push(ImageRef::new(path));
        }
        images.truncate(MAX_IMAGES);
        let added = images.len() - before;
        if images.is_empty() {
            *self = Self::None;
        }
        added
    }

    /// Removes the image at `index`. Removing the last image clears the
    /// attachment kind entirely.
    pub fn remove_image(&mut self, index: usize) {
        if let Self::Images(images) = self {
            if index < images.len() {
                images.remove(index);
            }
            if images.is_empty() {
                *self = Self::None;
            }
        }
    }

    /// Attaches a document, discarding any previous attachment.
    pub fn attach_document(&mut self, source: impl AsRef<Path>) -> &mut DocumentAttachment {
        *self = Self::Document(DocumentAttachment::new(source.as_ref()));
        let Self::Document(doc) = self else {
            unreachable!()
        };
        doc
    }

    /// Removes any attachment.
    pub fn clear(&mut self) {
        *self = Self::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_images_caps_at_four() {
        let mut media = MediaAttachment::None;
        let added = media.add_images(["a.png", "b.png", "c.png", "d.png", "e.png"]);
        assert_eq!(added, 4);
        assert_eq!(media.images().unwrap().len(), 4);

        // Appending to a full attachment adds nothing
        let added = media.add_images(["f.png"]);
        assert_eq!(added, 0);
        assert_eq!(media.images().unwrap().len(), 4);
    }

    #[test]
    fn test_add_images_appends() {
        let mut media = MediaAttachment::None;
        media.add_images(["a.png"]);
        media.add_images(["b.png", "c.png"]);
        let names: Vec<String> = media
            .images()
            .unwrap()
            .iter()
            .map(ImageRef::display_name)
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_remove_last_image_clears_kind() {
        let mut media = MediaAttachment::None;
        media.add_images(["a.png", "b.png"]);
        media.remove_image(0);
        assert_eq!(media.images().unwrap().len(), 1);
        media.remove_image(0);
        assert!(media.is_none());
    }

    #[test]
    fn test_remove_image_out_of_bounds_is_noop() {
        let mut media = MediaAttachment::None;
        media.add_images(["a.png"]);
        media.remove_image(5);
        assert_eq!(media.images().unwrap().len(), 1);
    }

    #[test]
    fn test_switching_to_document_discards_images() {
        let mut media = MediaAttachment::None;
        media.add_images(["a.png", "b.png"]);
        media.attach_document("slides.pdf");
        assert!(media.images().is_none());
        assert_eq!(media.document().unwrap().title, "slides");
    }

    #[test]
    fn test_switching_to_images_discards_document() {
        let mut media = MediaAttachment::None;
        media.attach_document("slides.pdf");
        media.add_images(["a.png"]);
        assert!(media.document().is_none());
        assert_eq!(media.images().unwrap().len(), 1);
    }

    #[test]
    fn test_document_title_from_stem() {
        let doc = DocumentAttachment::new("/tmp/Quarterly Report.pdf");
        assert_eq!(doc.title, "Quarterly Report");
    }

    #[test]
    fn test_page_cursor_bounded() {
        let mut doc = DocumentAttachment::new("deck.pdf");
        doc.set_pages((0..3).map(DocumentPage::placeholder).collect());

        assert_eq!(doc.current_page(), 0);
        doc.prev_page();
        assert_eq!(doc.current_page(), 0);

        doc.next_page();
        doc.next_page();
        assert_eq!(doc.current_page(), 2);
        doc.next_page();
        assert_eq!(doc.current_page(), 2);

        doc.prev_page();
        assert_eq!(doc.current_page(), 1);
    }

    #[test]
    fn test_set_pages_resets_cursor() {
        let mut doc = DocumentAttachment::new("deck.pdf");
        doc.set_pages((0..5).map(DocumentPage::placeholder).collect());
        doc.next_page();
        doc.next_page();
        doc.set_pages((0..2).map(DocumentPage::placeholder).collect());
        assert_eq!(doc.current_page(), 0);
    }

    #[test]
    fn test_empty_document_cursor() {
        let mut doc = DocumentAttachment::new("deck.pdf");
        assert!(doc.current().is_none());
        doc.next_page();
        assert_eq!(doc.current_page(), 0);
    }
}
