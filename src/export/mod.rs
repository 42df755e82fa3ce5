//! Export of the preview card to a shareable artifact.
//!
//! The capture itself is delegated to a [`CardRasterizer`]; the default
//! implementation renders a text diagram with the watermark stamped at a
//! fixed position. Export runs as a single-flight background job guarded by
//! a busy flag. Failures are logged only; the busy flag is cleared so the
//! action stays retryable.

pub mod card_renderer;

pub use card_renderer::{render_card_text, TextCardRasterizer};

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use crate::models::{MediaAttachment, ResolvedIdentity, ViewConfig};

/// Everything needed to render the card without the live UI.
///
/// Snapshots are taken with the Expanded state forced so the captured text
/// is never clipped; `text` always holds the full post text.
#[derive(Debug, Clone)]
pub struct CardSnapshot {
    /// Resolved author identity.
    pub identity: ResolvedIdentity,
    /// Full post text (unclamped).
    pub text: String,
    /// Media attachment state.
    pub media: MediaAttachment,
    /// View configuration of the active device class.
    pub view: ViewConfig,
    /// Whether the dark theme was active.
    pub dark_mode: bool,
    /// Post age label shown in the header.
    pub age_label: String,
}

/// Capture options passed through the rasterizer seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Background color as a hex string.
    pub background: String,
    /// Raster scale factor.
    pub scale: u8,
    /// Raster quality (0-100).
    pub quality: u8,
}

impl ExportOptions {
    /// Options matching a theme background.
    #[must_use]
    pub fn for_theme(dark_mode: bool) -> Self {
        Self {
            background: if dark_mode { "#1b1f23" } else { "#ffffff" }.to_string(),
            scale: 2,
            quality: 100,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::for_theme(false)
    }
}

/// Captures a card snapshot into artifact bytes.
pub trait CardRasterizer: Send {
    /// Produces the artifact for a snapshot.
    fn rasterize(&self, snapshot: &CardSnapshot, options: &ExportOptions) -> Result<Vec<u8>>;
}

/// Default export file name, timestamped in local time.
#[must_use]
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "post-preview-{}.txt",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Renders a snapshot and writes the artifact to `path`.
///
/// Used directly by the headless CLI path; the TUI wraps it in a job.
pub fn write_card(
    snapshot: &CardSnapshot,
    options: &ExportOptions,
    rasterizer: &dyn CardRasterizer,
    path: &Path,
) -> Result<()> {
    let bytes = rasterizer
        .rasterize(snapshot, options)
        .context("Failed to rasterize card")?;
    std::fs::write(path, bytes).context(format!(
        "Failed to write export artifact: {}",
        path.display()
    ))?;
    Ok(())
}

/// Message sent from the export thread to the main thread.
#[derive(Debug)]
enum ExportMessage {
    Complete(Result<PathBuf, String>),
}

/// Poll result of an [`ExportJob`].
#[derive(Debug)]
pub enum ExportPoll {
    /// Still capturing.
    Pending,
    /// Finished; `Ok` carries the artifact path, `Err` the logged failure.
    Done(Result<PathBuf, String>),
}

/// Single-flight background export job.
///
/// A second export while one is in flight must be refused by the caller's
/// busy check; the job itself has no queue and no cancellation.
#[derive(Debug)]
pub struct ExportJob {
    receiver: Receiver<ExportMessage>,
}

impl ExportJob {
    /// Spawns the capture thread.
    #[must_use]
    pub fn spawn(
        snapshot: CardSnapshot,
        options: ExportOptions,
        rasterizer: Box<dyn CardRasterizer>,
        path: PathBuf,
    ) -> Self {
        let (sender, receiver) = channel();

        thread::spawn(move || {
            let result = match write_card(&snapshot, &options, rasterizer.as_ref(), &path) {
                Ok(()) => Ok(path),
                Err(e) => {
                    log::error!("Export failed: {e:#}");
                    Err(format!("{e:#}"))
                }
            };
            let _ = sender.send(ExportMessage::Complete(result));
        });

        Self { receiver }
    }

    /// Polls the job without blocking.
    #[must_use]
    pub fn poll(&self) -> ExportPoll {
        match self.receiver.try_recv() {
            Ok(ExportMessage::Complete(result)) => ExportPoll::Done(result),
            Err(TryRecvError::Empty) => ExportPoll::Pending,
            Err(TryRecvError::Disconnected) => {
                ExportPoll::Done(Err("export thread terminated".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{resolve_identity, DeviceClass};
    use crate::settings::Settings;
    use tempfile::TempDir;

    fn snapshot() -> CardSnapshot {
        CardSnapshot {
            identity: resolve_identity(&Settings::new()),
            text: "a post".to_string(),
            media: MediaAttachment::None,
            view: DeviceClass::Compact.view_config(),
            dark_mode: true,
            age_label: "21m".to_string(),
        }
    }

    #[test]
    fn test_options_follow_theme() {
        assert_eq!(ExportOptions::for_theme(true).background, "#1b1f23");
        assert_eq!(ExportOptions::for_theme(false).background, "#ffffff");
        assert_eq!(ExportOptions::default().scale, 2);
    }

    #[test]
    fn test_write_card_creates_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.txt");
        write_card(
            &snapshot(),
            &ExportOptions::default(),
            &TextCardRasterizer,
            &path,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("a post"));
        assert!(content.contains(crate::constants::EXPORT_WATERMARK));
    }

    #[test]
    fn test_export_job_completes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.txt");
        let job = ExportJob::spawn(
            snapshot(),
            ExportOptions::default(),
            Box::new(TextCardRasterizer),
            path.clone(),
        );

        let outcome = loop {
            match job.poll() {
                ExportPoll::Pending => thread::sleep(std::time::Duration::from_millis(5)),
                ExportPoll::Done(result) => break result,
            }
        };
        assert_eq!(outcome.unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_export_job_reports_failure() {
        let job = ExportJob::spawn(
            snapshot(),
            ExportOptions::default(),
            Box::new(TextCardRasterizer),
            PathBuf::from("/nonexistent-dir/card.txt"),
        );

        let outcome = loop {
            match job.poll() {
                ExportPoll::Pending => thread::sleep(std::time::Duration::from_millis(5)),
                ExportPoll::Done(result) => break result,
            }
        };
        assert!(outcome.is_err());
    }

    #[test]
    fn test_default_export_path_shape() {
        let path = default_export_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("post-preview-"));
        assert!(name.ends_with(".txt"));
    }
}
