//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod card;
pub mod component;
pub mod editor;
pub mod handlers;
pub mod help_overlay;
pub mod identity_editor;
pub mod path_prompt;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::constants::{APP_BINARY_NAME, APP_NAME, MAX_IMAGES};
use crate::export::{
    default_export_path, CardSnapshot, ExportJob, ExportOptions, ExportPoll, TextCardRasterizer,
};
use crate::formatter::auto_space;
use crate::models::{resolve_identity, DeviceClass, MediaAttachment, PostDraft};
use crate::preview::{text_overflows, ExpandState};
use crate::services::{DocumentRenderJob, PdfPageScanner, RenderPoll};
use crate::settings::Settings;

// Re-export TUI components
pub use card::PreviewCard;
pub use component::{Component, ComponentEvent, PromptPurpose};
pub use editor::EditorState;
pub use handlers::handle_key_event;
pub use help_overlay::HelpOverlay;
pub use identity_editor::IdentityEditor;
pub use path_prompt::PathPrompt;
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeMode};

/// How long the transient "copied" indicator stays visible.
const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Which pane receives plain key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The draft text editor
    #[default]
    Editor,
    /// The preview card
    Preview,
}

/// Currently active popup component. Only one can be open at a time.
#[derive(Debug)]
pub enum ActivePopup {
    /// Identity editor popup
    IdentityEditor(IdentityEditor),
    /// Path input popup (images, document, or rename)
    PathPrompt(PathPrompt),
    /// Help overlay popup
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth.
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Current post draft with derived counters
    pub draft: PostDraft,
    /// Path to the draft file, if one was opened
    pub source_path: Option<PathBuf>,
    /// Whether the draft has unsaved changes
    pub dirty: bool,
    /// Media attachment state
    pub media: MediaAttachment,
    /// Persisted identity settings
    pub settings: Settings,

    // Display state
    /// Current UI theme
    pub theme: Theme,
    /// Theme mode preference (Auto detects the OS)
    pub theme_mode: ThemeMode,
    /// Active device class for the preview
    pub device: DeviceClass,
    /// Collapsed/Expanded display state
    pub expand: ExpandState,
    /// Whether the text exceeds the device's collapsed height
    pub overflowing: bool,
    /// Which pane has focus
    pub focus: Focus,

    // Editor
    /// Multiline editor buffer and cursor
    pub editor: EditorState,

    // UI state
    /// Currently active popup (if any)
    pub active_popup: Option<ActivePopup>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// When the post text was last copied (drives the transient indicator)
    pub copied_at: Option<Instant>,
    /// Whether the next quit keypress discards unsaved changes
    pub quit_armed: bool,

    // Background jobs (single-flight, busy while Some)
    /// In-flight document page rendering
    pub document_job: Option<DocumentRenderJob>,
    /// In-flight card export
    pub export_job: Option<ExportJob>,
}

impl AppState {
    /// Creates application state from a draft and loaded settings.
    #[must_use]
    pub fn new(
        draft: PostDraft,
        source_path: Option<PathBuf>,
        settings: Settings,
        device: DeviceClass,
        theme_mode: ThemeMode,
    ) -> Self {
        let editor = EditorState::from_text(draft.text());
        let view = device.view_config();
        let overflowing = text_overflows(draft.text(), &view);

        Self {
            draft,
            source_path,
            dirty: false,
            media: MediaAttachment::None,
            settings,
            theme: Theme::from_mode(theme_mode),
            theme_mode,
            device,
            expand: ExpandState::new(),
            overflowing,
            focus: Focus::Editor,
            editor,
            active_popup: None,
            status_message: "Press F1 for help".to_string(),
            error_message: None,
            copied_at: None,
            quit_armed: false,
            document_job: None,
            export_job: None,
        }
    }

    // === Derived-state maintenance ===

    /// Recomputes the overflow flag for the current text and device.
    pub fn refresh_overflow(&mut self) {
        self.overflowing = text_overflows(self.draft.text(), &self.device.view_config());
    }

    /// Called after every editor mutation: recomputes counters and overflow
    /// synchronously, resets the expand machine, and marks the draft dirty.
    pub fn on_text_changed(&mut self) {
        self.draft.set_text(self.editor.text());
        self.expand.reset();
        self.refresh_overflow();
        self.dirty = true;
    }

    // === Display actions ===

    /// Switches to the next device class and resets the expand state.
    pub fn cycle_device(&mut self) {
        self.set_device(self.device.next());
    }

    /// Switches device class; resets the expand machine per the state rules.
    pub fn set_device(&mut self, device: DeviceClass) {
        self.device = device;
        self.expand.reset();
        self.refresh_overflow();
        self.set_status(format!("Device: {}", device.label()));
    }

    /// Toggles between dark and light theme.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::from_mode(self.theme_mode);
    }

    /// "See more" / "see less" from the preview pane.
    pub fn toggle_expand(&mut self) {
        if self.expand.is_expanded() {
            if self.expand.can_collapse() {
                self.expand.see_less();
            }
        } else if self.overflowing {
            self.expand.see_more();
        }
        self.refresh_overflow();
    }

    // === Draft actions ===

    /// Loads the sample post into an empty draft.
    pub fn load_sample(&mut self) {
        if !self.draft.is_empty() {
            self.set_status("Draft is not empty - clear it first (Ctrl+X)");
            return;
        }
        self.editor.set_text(crate::constants::SAMPLE_POST);
        self.on_text_changed();
        self.set_status("Sample post loaded");
    }

    /// Clears the post text and any media.
    pub fn clear_post(&mut self) {
        self.editor.set_text("");
        self.on_text_changed();
        self.media.clear();
        self.set_status("Post cleared");
    }

    /// Runs the auto-spacing formatter over the draft.
    pub fn apply_auto_spacing(&mut self) {
        let spaced = auto_space(self.draft.text());
        self.editor.set_text(&spaced);
        self.on_text_changed();
        self.set_status("Auto-spacing applied");
    }

    /// Saves the draft back to its file.
    pub fn save_draft(&mut self) {
        let Some(path) = self.source_path.clone() else {
            self.set_status(format!(
                "No draft file - start with: {APP_BINARY_NAME} FILE"
            ));
            return;
        };
        match std::fs::write(&path, self.draft.text()) {
            Ok(()) => {
                self.dirty = false;
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(e) => self.set_error(format!("Failed to save draft: {e}")),
        }
    }

    /// Copies the post text to the system clipboard.
    ///
    /// Failure is logged only; the copied indicator never activates.
    pub fn copy_post_text(&mut self) {
        if self.draft.is_empty() {
            self.set_status("Nothing to copy");
            return;
        }
        match arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(self.draft.text().to_string()))
        {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                self.set_status("Post text copied");
            }
            Err(e) => log::warn!("Failed to copy to clipboard: {e}"),
        }
    }

    /// Whether the transient "copied" indicator is visible.
    #[must_use]
    pub fn copied_indicator_active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_INDICATOR_DURATION)
    }

    // === Media actions ===

    /// Attaches image paths, switching the media kind if needed.
    pub fn attach_images(&mut self, values: Vec<String>) {
        let added = self.media.add_images(values.iter().map(PathBuf::from));
        let total = self.media.images().map_or(0, <[_]>::len);
        if added == 0 {
            self.set_status(format!("Image limit reached ({MAX_IMAGES})"));
        } else {
            self.set_status(format!(
                "Added {added} image{} ({total}/{MAX_IMAGES})",
                if added == 1 { "" } else { "s" }
            ));
        }
    }

    /// Attaches a document and starts the single-flight page render job.
    pub fn attach_document(&mut self, path: PathBuf) {
        if self.document_job.is_some() {
            self.set_status("Document rendering already in progress");
            return;
        }
        self.media.attach_document(&path);
        self.document_job = Some(DocumentRenderJob::spawn(path, Box::new(PdfPageScanner)));
        self.set_status("Rendering document pages…");
    }

    /// Removes the most recently added image. Removing the last one clears
    /// the attachment kind entirely.
    pub fn remove_last_image(&mut self) {
        let Some(images) = self.media.images() else {
            self.set_status("No images attached");
            return;
        };
        let index = images.len() - 1;
        self.media.remove_image(index);
        if self.media.is_none() {
            self.set_status("Last image removed - no attachment");
        } else {
            self.set_status("Image removed");
        }
    }

    /// Removes any media attachment.
    pub fn remove_media(&mut self) {
        if self.media.is_none() {
            self.set_status("No media attached");
            return;
        }
        self.media.clear();
        self.set_status("Media removed");
    }

    /// Moves the document page cursor back.
    pub fn document_prev_page(&mut self) {
        if let Some(doc) = self.media.document_mut() {
            doc.prev_page();
        }
    }

    /// Advances the document page cursor.
    pub fn document_next_page(&mut self) {
        if let Some(doc) = self.media.document_mut() {
            doc.next_page();
        }
    }

    // === Export ===

    /// Builds a card snapshot of the current state.
    #[must_use]
    pub fn card_snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            identity: resolve_identity(&self.settings),
            text: self.draft.text().to_string(),
            media: self.media.clone(),
            view: self.device.view_config(),
            dark_mode: self.theme.is_dark(),
            age_label: self.draft.age_label(Utc::now()),
        }
    }

    /// Starts the single-flight export job.
    ///
    /// The expand state is forced to Expanded for the capture so the text is
    /// never clipped, then restored exactly; a second export while one is in
    /// flight is refused.
    pub fn start_export(&mut self, path: Option<PathBuf>) {
        if self.export_job.is_some() {
            self.set_status("Export already in progress");
            return;
        }
        if self.draft.is_empty() && self.media.is_none() {
            self.set_status("Nothing to export");
            return;
        }

        let prior_expand = self.expand;
        self.expand.see_more();
        self.refresh_overflow();
        let snapshot = self.card_snapshot();
        self.expand = prior_expand;
        self.refresh_overflow();

        let path = path.unwrap_or_else(default_export_path);
        let options = ExportOptions::for_theme(self.theme.is_dark());
        self.export_job = Some(ExportJob::spawn(
            snapshot,
            options,
            Box::new(TextCardRasterizer),
            path,
        ));
        self.set_status("Exporting card…");
    }

    // === Background job polling ===

    /// Polls in-flight jobs and expires the copied indicator.
    ///
    /// Called once per event-loop tick, before rendering.
    pub fn poll_jobs(&mut self) {
        if let Some(job) = &self.document_job {
            if let RenderPoll::Done { pages, .. } = job.poll() {
                let source = job.source.clone();
                self.document_job = None;
                // Install only if the same document is still attached
                if let Some(doc) = self.media.document_mut() {
                    if doc.source == source {
                        let count = pages.len();
                        doc.set_pages(pages);
                        self.set_status(format!(
                            "Document ready: {count} {}",
                            if count == 1 { "page" } else { "pages" }
                        ));
                    }
                }
            }
        }

        if let Some(job) = &self.export_job {
            if let ExportPoll::Done(result) = job.poll() {
                self.export_job = None;
                // Failures were already logged; clearing the busy flag keeps
                // the action retryable
                if let Ok(path) = result {
                    self.set_status(format!("Exported: {}", path.display()));
                }
            }
        }

        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_INDICATOR_DURATION {
                self.copied_at = None;
            }
        }
    }

    // === Popups ===

    /// Opens the identity editor popup.
    pub fn open_identity_editor(&mut self) {
        self.active_popup = Some(ActivePopup::IdentityEditor(IdentityEditor::new(
            &self.settings,
        )));
    }

    /// Opens the image path prompt, unless a document is attached.
    pub fn open_image_prompt(&mut self) {
        if self.media.document().is_some() {
            self.set_status("Remove the document first (Ctrl+R)");
            return;
        }
        self.active_popup = Some(ActivePopup::PathPrompt(PathPrompt::new(
            PromptPurpose::Images,
        )));
    }

    /// Opens the document path prompt, unless images are attached.
    pub fn open_document_prompt(&mut self) {
        if self.media.images().is_some() {
            self.set_status("Remove the images first (Ctrl+R)");
            return;
        }
        if self.document_job.is_some() {
            self.set_status("Document rendering already in progress");
            return;
        }
        self.active_popup = Some(ActivePopup::PathPrompt(PathPrompt::new(
            PromptPurpose::Document,
        )));
    }

    /// Opens the rename prompt for the attached document.
    pub fn open_document_title_prompt(&mut self) {
        if let Some(doc) = self.media.document() {
            self.active_popup = Some(ActivePopup::PathPrompt(PathPrompt::with_value(
                PromptPurpose::DocumentTitle,
                doc.title.clone(),
            )));
        } else {
            self.set_status("No document attached");
        }
    }

    /// Opens the help overlay popup.
    pub fn open_help_overlay(&mut self) {
        self.active_popup = Some(ActivePopup::HelpOverlay(HelpOverlay::new()));
    }

    // === Status helpers ===

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }
}

/// Initialize terminal for TUI mode
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.theme_mode);

        // Poll single-flight jobs and expire transient indicators
        state.poll_jobs();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(6), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    // Editor pane | preview pane
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_editor(f, panes[0], state);
    PreviewCard::render(f, panes[1], state, &state.theme);

    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(popup) = &state.active_popup {
        match popup {
            ActivePopup::IdentityEditor(editor) => editor.render(f, f.area(), &state.theme),
            ActivePopup::PathPrompt(prompt) => prompt.render(f, f.area(), &state.theme),
            ActivePopup::HelpOverlay(overlay) => overlay.render(f, f.area(), &state.theme),
        }
    }
}

/// Render title bar with draft name and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let dirty_indicator = if state.dirty { " *" } else { "" };
    let draft_name = state.source_path.as_ref().map_or_else(
        || "scratch".to_string(),
        |p| p.file_name().map_or_else(
            || p.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        ),
    );
    let title = format!(" {APP_NAME} - {draft_name}{dirty_indicator}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the draft editor pane
fn render_editor(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let border_style = if state.focus == Focus::Editor {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Post Text ");

    let inner_height = (area.height.saturating_sub(2) as usize).max(1);
    let (cursor_row, cursor_col) = state.editor.cursor();
    // Keep the cursor row inside the viewport
    let scroll = (cursor_row + 1).saturating_sub(inner_height);

    let content: Paragraph = if state.draft.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "What do you want to talk about?",
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
    } else {
        let lines: Vec<Line> = state
            .editor
            .lines()
            .iter()
            .map(|l| Line::from(l.clone()))
            .collect();
        Paragraph::new(lines).scroll((scroll as u16, 0))
    };

    f.render_widget(
        content
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(block),
        area,
    );

    // Place the hardware cursor when the editor has focus
    if state.focus == Focus::Editor && state.active_popup.is_none() {
        let line = &state.editor.lines()[cursor_row];
        let prefix: String = line.chars().take(cursor_col).collect();
        let x = area.x + 1 + UnicodeWidthStr::width(prefix.as_str()) as u16;
        let y = area.y + 1 + (cursor_row - scroll) as u16;
        if x < area.x + area.width - 1 && y < area.y + area.height - 1 {
            f.set_cursor_position((x, y));
        }
    }
}
