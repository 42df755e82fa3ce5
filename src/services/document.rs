//! Document page rendering behind a collaborator seam.
//!
//! Turning an attached document into page thumbnails is delegated to a
//! [`DocumentPageSource`]. The default implementation sniffs the PDF page
//! count without rasterizing; a real rasterizer implements the same trait.
//! Rendering runs as a single-flight background thread reporting back over
//! a message channel, polled from the event loop.
//!
//! Failure policy: a source that cannot read the document degrades to a
//! fixed-length placeholder page list. The failure is logged, never surfaced
//! as an error.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use crate::constants::PLACEHOLDER_PAGE_COUNT;
use crate::models::DocumentPage;

/// Produces the ordered page list for an attached document.
pub trait DocumentPageSource: Send {
    /// Renders (or at least enumerates) the document's pages in order.
    fn render_pages(&self, source: &Path) -> Result<Vec<DocumentPage>>;
}

/// The fixed placeholder page list used when a document cannot be read.
#[must_use]
pub fn placeholder_pages() -> Vec<DocumentPage> {
    (0..PLACEHOLDER_PAGE_COUNT)
        .map(DocumentPage::placeholder)
        .collect()
}

/// Default page source: counts page objects in a PDF body.
///
/// Produces pages without thumbnails; the preview renders its placeholder
/// box for them. Rasterizing real thumbnails is an alternate implementation
/// of [`DocumentPageSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageScanner;

impl PdfPageScanner {
    /// Counts `/Type /Page` objects in a PDF body, excluding `/Pages` nodes.
    #[must_use]
    pub fn count_page_objects(bytes: &[u8]) -> usize {
        const TYPE_KEY: &[u8] = b"/Type";
        const PAGE_VALUE: &[u8] = b"/Page";

        let mut count = 0;
        let mut i = 0;
        while i + TYPE_KEY.len() <= bytes.len() {
            if &bytes[i..i + TYPE_KEY.len()] != TYPE_KEY {
                i += 1;
                continue;
            }

            let mut j = i + TYPE_KEY.len();
            while j < bytes.len() && matches!(bytes[j], b' ' | b'\t' | b'\r' | b'\n') {
                j += 1;
            }

            if bytes[j..].starts_with(PAGE_VALUE) {
                let after = j + PAGE_VALUE.len();
                // A delimiter here distinguishes /Page from /Pages etc.
                let is_page = matches!(
                    bytes.get(after),
                    None | Some(b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'>' | b'<' | b'[' | b']')
                );
                if is_page {
                    count += 1;
                }
                i = after;
            } else {
                i += TYPE_KEY.len();
            }
        }

        count
    }
}

impl DocumentPageSource for PdfPageScanner {
    fn render_pages(&self, source: &Path) -> Result<Vec<DocumentPage>> {
        let bytes = std::fs::read(source).context(format!(
            "Failed to read document: {}",
            source.display()
        ))?;

        if !bytes.starts_with(b"%PDF") {
            anyhow::bail!("Not a PDF document: {}", source.display());
        }

        let page_count = Self::count_page_objects(&bytes);
        if page_count == 0 {
            anyhow::bail!("No page objects found in {}", source.display());
        }

        Ok((0..page_count)
            .map(|index| DocumentPage {
                index,
                thumbnail: None,
            })
            .collect())
    }
}

/// Message sent from the render thread to the main thread.
#[derive(Debug)]
enum RenderMessage {
    /// Rendering finished; `degraded` marks the placeholder fallback.
    Complete {
        pages: Vec<DocumentPage>,
        degraded: bool,
    },
}

/// Poll result of a [`DocumentRenderJob`].
#[derive(Debug)]
pub enum RenderPoll {
    /// Still rendering.
    Pending,
    /// Rendering finished.
    Done {
        /// The ordered page list (possibly the placeholder fallback).
        pages: Vec<DocumentPage>,
        /// Whether the placeholder fallback was taken.
        degraded: bool,
    },
}

/// Single-flight background page-rendering job.
///
/// At most one job runs at a time; the event loop polls it each tick and
/// installs the pages when they arrive.
#[derive(Debug)]
pub struct DocumentRenderJob {
    receiver: Receiver<RenderMessage>,
    /// Source document the job was started for.
    pub source: PathBuf,
}

impl DocumentRenderJob {
    /// Spawns a render thread for `source` using the given page source.
    #[must_use]
    pub fn spawn(source: PathBuf, page_source: Box<dyn DocumentPageSource>) -> Self {
        let (sender, receiver) = channel();
        let thread_source = source.clone();

        thread::spawn(move || {
            let (pages, degraded) = match page_source.render_pages(&thread_source) {
                Ok(pages) if !pages.is_empty() => (pages, false),
                Ok(_) => {
                    log::warn!(
                        "Document page source returned no pages for {}; using placeholders",
                        thread_source.display()
                    );
                    (placeholder_pages(), true)
                }
                Err(e) => {
                    log::warn!(
                        "Document page rendering failed for {}: {e:#}; using placeholders",
                        thread_source.display()
                    );
                    (placeholder_pages(), true)
                }
            };
            // Receiver may be gone if the attachment was removed meanwhile
            let _ = sender.send(RenderMessage::Complete { pages, degraded });
        });

        Self { receiver, source }
    }

    /// Polls the job without blocking.
    ///
    /// A thread that died without reporting degrades to the placeholder
    /// list, keeping the soft-fallback policy airtight.
    #[must_use]
    pub fn poll(&self) -> RenderPoll {
        match self.receiver.try_recv() {
            Ok(RenderMessage::Complete { pages, degraded }) => RenderPoll::Done { pages, degraded },
            Err(TryRecvError::Empty) => RenderPoll::Pending,
            Err(TryRecvError::Disconnected) => RenderPoll::Done {
                pages: placeholder_pages(),
                degraded: true,
            },
        }
    }
}
