//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and handling events.
//! Form values and results live in [`AppState`]; App adds the purely visual
//! bits (focus, edit buffers, scroll, spinner) and queues the effects the
//! state asks for so the terminal loop can run them.

use crate::config::settings::Settings;
use crate::display::report::format_rate;
use crate::models::{MAX_YEARS, MIN_YEARS};
use crate::state::{Action, AppState, Effect};

use super::widgets::TextInput;

/// Spinner frames shown while affirmations are being generated
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rate change per arrow key press
pub const RATE_STEP: f64 = 0.1;

/// Which form element has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    Years,
    Rate,
    Trigger,
}

impl FormField {
    /// Next element in tab order
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Years,
            Self::Years => Self::Rate,
            Self::Rate => Self::Trigger,
            Self::Trigger => Self::Amount,
        }
    }

    /// Previous element in tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Trigger,
            Self::Years => Self::Amount,
            Self::Rate => Self::Years,
            Self::Trigger => Self::Rate,
        }
    }

    /// Whether this element takes typed text
    pub fn is_input(self) -> bool {
        !matches!(self, Self::Trigger)
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Form values, projection and affirmations
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused form element
    pub focused: FormField,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Edit buffers for the three inputs
    pub amount_input: TextInput,
    pub years_input: TextInput,
    pub rate_input: TextInput,

    /// Scroll offset for the affirmation list
    pub scroll_offset: usize,

    /// Largest useful scroll offset, measured at the last render
    pub max_scroll: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current spinner frame
    pub spinner_frame: usize,

    /// Effects waiting for the terminal loop
    pending_effects: Vec<Effect>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let state = AppState::from_settings(settings);
        let mut app = Self {
            settings,
            state,
            should_quit: false,
            focused: FormField::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            amount_input: TextInput::new(),
            years_input: TextInput::new(),
            rate_input: TextInput::new(),
            scroll_offset: 0,
            max_scroll: 0,
            status_message: None,
            spinner_frame: 0,
            pending_effects: Vec::new(),
        };
        app.sync_inputs();
        app
    }

    /// Apply an action to the state and queue any resulting effect
    pub fn dispatch(&mut self, action: Action) {
        if let Some(effect) = self.state.apply(action) {
            self.scroll_offset = 0;
            self.pending_effects.push(effect);
        }
    }

    /// Take the queued effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_effects)
    }

    /// Copy state values back into the edit buffers
    pub fn sync_inputs(&mut self) {
        self.amount_input.set_content(self.state.amount.clone());
        self.years_input.set_content(self.state.years.to_string());
        let rate = format_rate(self.state.rate_percent);
        self.rate_input.set_content(rate.trim_end_matches('%'));
    }

    /// The edit buffer of the focused input, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Years => Some(&mut self.years_input),
            FormField::Rate => Some(&mut self.rate_input),
            FormField::Trigger => None,
        }
    }

    /// Start editing the focused input
    pub fn start_editing(&mut self) {
        if self.focused.is_input() {
            self.input_mode = InputMode::Editing;
            if let Some(input) = self.focused_input() {
                input.move_end();
            }
        }
    }

    /// Push the edited text of the focused input into the state
    ///
    /// The amount is committed on every keystroke, so only years and rate
    /// are parsed here. Text that does not parse is discarded.
    pub fn commit_edit(&mut self) {
        match self.focused {
            FormField::Years => match self.years_input.value().trim().parse::<u32>() {
                Ok(years) => self.dispatch(Action::SetYears(years)),
                Err(_) => self.set_status(format!(
                    "Số năm phải là số nguyên từ {} đến {}",
                    MIN_YEARS, MAX_YEARS
                )),
            },
            FormField::Rate => {
                let text = self.rate_input.value().trim().replace(',', ".");
                match text.parse::<f64>() {
                    Ok(rate) => self.dispatch(Action::SetRate(rate)),
                    Err(_) => self.set_status("Lãi suất không hợp lệ"),
                }
            }
            FormField::Amount | FormField::Trigger => {}
        }
        self.input_mode = InputMode::Normal;
        self.sync_inputs();
    }

    /// Leave editing without applying years or rate changes
    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.sync_inputs();
    }

    /// Re-sanitize the amount after a keystroke
    pub fn amount_changed(&mut self) {
        let raw = self.amount_input.value().to_string();
        self.dispatch(Action::SetAmount(raw));
        self.amount_input.set_content(self.state.amount.clone());
    }

    /// Step the focused numeric input up or down
    pub fn step_focused(&mut self, up: bool) {
        match self.focused {
            FormField::Years => {
                let years = if up {
                    self.state.years.saturating_add(1)
                } else {
                    self.state.years.saturating_sub(1)
                };
                self.dispatch(Action::SetYears(years));
            }
            FormField::Rate => {
                let delta = if up { RATE_STEP } else { -RATE_STEP };
                let rate = ((self.state.rate_percent + delta) * 10.0).round() / 10.0;
                self.dispatch(Action::SetRate(rate));
            }
            FormField::Amount | FormField::Trigger => {}
        }
        self.sync_inputs();
    }

    /// Press the trigger
    pub fn submit(&mut self) {
        if self.input_mode == InputMode::Editing {
            self.commit_edit();
        }
        if self.state.principal() == 0 {
            self.set_status("Nhập số tiền mục tiêu trước khi kích hoạt");
            return;
        }
        if self.state.is_loading() {
            return;
        }
        self.clear_status();
        self.dispatch(Action::Submit);
    }

    /// Move focus forward or back, committing any edit in progress
    pub fn move_focus(&mut self, forward: bool) {
        if self.input_mode == InputMode::Editing {
            self.commit_edit();
        }
        self.focused = if forward {
            self.focused.next()
        } else {
            self.focused.prev()
        };
    }

    /// Scroll the affirmation list
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll);
    }

    /// Scroll the affirmation list back
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Advance the spinner while a request is in flight
    pub fn tick(&mut self) {
        if self.state.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}
