//! Integration tests for media attachment flows.
//!
//! Drives `AppState` through image/document attachment the way the popup
//! handlers do, including the background page-render job and its placeholder
//! fallback.

use std::io::Write;
use std::time::Duration;

use postpeek::constants::PLACEHOLDER_PAGE_COUNT;
use postpeek::models::{DeviceClass, MediaAttachment, PostDraft};
use postpeek::settings::Settings;
use postpeek::tui::{AppState, ThemeMode};
use tempfile::NamedTempFile;

const TWO_PAGE_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n\
2 0 obj << /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >> endobj\n\
3 0 obj << /Type /Page /Parent 2 0 R >> endobj\n\
4 0 obj << /Type /Page /Parent 2 0 R >> endobj\n\
trailer << /Root 1 0 R >>\n%%EOF";

fn app() -> AppState {
    AppState::new(
        PostDraft::from_text("a post"),
        None,
        Settings::new(),
        DeviceClass::Compact,
        ThemeMode::Dark,
    )
}

/// Polls jobs until the document job completes (bounded wait).
fn wait_for_document(state: &mut AppState) {
    for _ in 0..400 {
        state.poll_jobs();
        if state.document_job.is_none() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("document job did not complete");
}

#[test]
fn switching_from_images_to_document_clears_images() {
    let mut state = app();
    state.attach_images(vec!["a.png".to_string(), "b.png".to_string()]);
    assert_eq!(state.media.images().unwrap().len(), 2);

    state.attach_document("deck.pdf".into());
    assert!(state.media.images().is_none());
    assert!(state.media.document().is_some());

    wait_for_document(&mut state);
}

#[test]
fn image_cap_enforced_through_app() {
    let mut state = app();
    state.attach_images((1..=6).map(|i| format!("img{i}.png")).collect());
    assert_eq!(state.media.images().unwrap().len(), 4);
}

#[test]
fn removing_last_image_clears_attachment() {
    let mut state = app();
    state.attach_images(vec!["a.png".to_string()]);
    state.media.remove_image(0);
    assert!(state.media.is_none());
}

#[test]
fn document_pages_installed_after_render() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TWO_PAGE_PDF).unwrap();

    let mut state = app();
    state.attach_document(file.path().to_path_buf());
    assert!(state.document_job.is_some());

    wait_for_document(&mut state);

    let doc = state.media.document().unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.current_page(), 0);
}

#[test]
fn unreadable_document_falls_back_to_placeholder_pages() {
    let mut state = app();
    state.attach_document("/nonexistent/deck.pdf".into());
    wait_for_document(&mut state);

    // Soft degradation: no error, a fixed-length placeholder page list
    assert!(state.error_message.is_none());
    let doc = state.media.document().unwrap();
    assert_eq!(doc.page_count(), PLACEHOLDER_PAGE_COUNT);
    assert!(doc.pages.iter().all(|p| p.thumbnail.is_none()));
}

#[test]
fn page_navigation_is_bounded() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TWO_PAGE_PDF).unwrap();

    let mut state = app();
    state.attach_document(file.path().to_path_buf());
    wait_for_document(&mut state);

    state.document_prev_page();
    assert_eq!(state.media.document().unwrap().current_page(), 0);

    state.document_next_page();
    assert_eq!(state.media.document().unwrap().current_page(), 1);

    state.document_next_page();
    assert_eq!(state.media.document().unwrap().current_page(), 1);
}

#[test]
fn stale_render_results_are_discarded() {
    let mut state = app();
    state.attach_document("/nonexistent/deck.pdf".into());
    // The document is removed while the job is still in flight
    state.remove_media();
    assert!(state.media.is_none());

    wait_for_document(&mut state);
    // The late result must not resurrect the attachment
    assert!(state.media.is_none());
}

#[test]
fn clearing_post_drops_media_too() {
    let mut state = app();
    state.attach_images(vec!["a.png".to_string()]);
    state.clear_post();
    assert!(state.media.is_none());
    assert!(state.draft.is_empty());
    assert!(matches!(state.media, MediaAttachment::None));
}
