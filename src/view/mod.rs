//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod menu;
mod styles;
pub mod timeline;

pub use help::render_help_overlay;
pub use layout::{calculate_timeline_area, render_layout};
pub use menu::render_menu;
pub use styles::{icon_glyph, parse_color, ColorConfig, TimelineStyles};
pub use timeline::{render_timeline, truncate_to_width};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, Itinerary, KeyAction};
use crate::state::{handle_key_action, handle_mouse_click, handle_mouse_scroll, AppState};
use crate::state::TimelineEditor;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: TimelineStyles,
    /// Timeline area of the last draw (for mouse hit testing)
    last_timeline_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        itinerary: Itinerary,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            build_state(itinerary, config),
            TimelineStyles::new(colors),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, app_state: AppState, styles: TimelineStyles) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            last_timeline_area: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            return true;
        }

        debug!(?action, "Key action");
        handle_key_action(&mut self.app_state, action);
        let height = self.timeline_area().height;
        self.app_state.ensure_selection_visible(height);
        false
    }

    /// Handle a single mouse event
    ///
    /// Presses go to the click handler, the wheel scrolls the timeline.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let area = self.timeline_area();
        match mouse.kind {
            MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Right)) => {
                handle_mouse_click(&mut self.app_state, button, mouse.column, mouse.row, area);
            }
            MouseEventKind::ScrollDown => handle_mouse_scroll(&mut self.app_state, 1, area.height),
            MouseEventKind::ScrollUp => handle_mouse_scroll(&mut self.app_state, -1, area.height),
            _ => {}
        }
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Handling resize");
        let area = calculate_timeline_area(Rect::new(0, 0, width, height));
        self.last_timeline_area = Some(area);
        self.app_state.scroll_by(0, area.height);
        self.app_state.ensure_selection_visible(area.height);
    }

    /// Timeline area of the last draw, or of the current terminal size.
    fn timeline_area(&self) -> Rect {
        if let Some(area) = self.last_timeline_area {
            return area;
        }
        let size = self.terminal.size().unwrap_or_default();
        calculate_timeline_area(Rect::new(0, 0, size.width, size.height))
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.last_timeline_area = Some(calculate_timeline_area(Rect::new(
            0,
            0,
            size.width,
            size.height,
        )));

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::with_terminal(terminal, app_state, TimelineStyles::default())
    }
}

/// Application state for a snapshot under the resolved configuration.
fn build_state(itinerary: Itinerary, config: &ResolvedConfig) -> AppState {
    let mut editor = TimelineEditor::new(itinerary);
    editor.set_editable(config.editable);
    let mut state = AppState::new(editor);
    state.units_per_row = config.units_per_row;
    state.show_help_hint = config.show_help_hint;
    state
}

/// Initialize and run the TUI application over `itinerary`
///
/// Handles terminal setup, runs the event loop and restores the terminal
/// on exit, even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_itinerary(
    itinerary: Itinerary,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    info!(
        title = %itinerary.title,
        segments = itinerary.segments.len(),
        editable = config.editable,
        "Starting timeline"
    );
    let mut app = TuiApp::new(itinerary, config, colors)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
