//! Application state management for the terminal dashboard.
//!
//! This module holds the state of each view, the wizard controller, and the
//! deadline timers that stand in for the simulated submission latency. All
//! state is owned by a single [`App`] value on the UI thread; switching views
//! discards the state of the view being left, which also cancels any pending
//! deadline.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::domain::errors::FetchError;
use crate::domain::filter::compute_visible;
use crate::domain::models::UserRecord;
use crate::domain::wizard::{validate_step, Field, FieldErrors, FormData, WizardStep};

/// Simulated latency of the add-user submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// How long the success toast stays on screen before navigating back.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Which view currently owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing page
    Home,
    /// User listing with search
    Dashboard,
    /// Add-user wizard
    AddUser,
}

/// Lifecycle of the one-shot users fetch for the current dashboard mount.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Fetch not yet performed (or in progress this frame)
    Loading,
    /// Users are in memory
    Loaded,
    /// Fetch failed; the message is shown in the error view
    Failed(String),
}

/// State owned by the dashboard (listing) view.
#[derive(Debug)]
pub struct DashboardState {
    /// Full list as fetched, immutable until the view reloads
    pub users: Vec<UserRecord>,
    /// Filtered subset currently visible
    pub visible: Vec<UserRecord>,
    /// Free-text search query, updated on every keystroke
    pub query: String,
    pub load: LoadState,
    /// Selected row within `visible`
    pub selected: usize,
    /// First row visible in the viewport
    pub scroll: usize,
    /// Viewport height in rows, for scroll clamping
    pub viewport_rows: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            load: LoadState::Loading,
            selected: 0,
            scroll: 0,
            viewport_rows: 20,
        }
    }
}

impl DashboardState {
    /// Recomputes the visible subset after the query or the list changed.
    /// No caching: the whole list is rescanned every time.
    fn refresh_visible(&mut self) {
        self.visible = compute_visible(&self.users, &self.query);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
        if self.scroll > self.selected {
            self.scroll = self.selected;
        }
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.visible.get(self.selected)
    }
}

/// Progress of the simulated submission.
///
/// The two submission delays are explicit deadlines processed by
/// [`App::tick`]; dropping this state (by leaving the view) cancels
/// whatever is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    /// Simulated request in flight until the deadline
    InFlight { until: Instant },
    /// Success toast showing until the deadline
    Toast { until: Instant },
}

/// State owned by the add-user wizard view.
#[derive(Debug)]
pub struct AddUserState {
    pub step: WizardStep,
    pub form: FormData,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// Index into the current step's field list
    pub focus: usize,
    /// Cursor position within the focused field, in characters
    pub cursor: usize,
}

impl Default for AddUserState {
    fn default() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            form: FormData::default(),
            errors: FieldErrors::default(),
            phase: SubmitPhase::Idle,
            focus: 0,
            cursor: 0,
        }
    }
}

impl AddUserState {
    /// The field currently receiving keystrokes, if the step has any.
    pub fn focused_field(&self) -> Option<Field> {
        self.step.fields().get(self.focus).copied()
    }

    fn char_len(&self, field: Field) -> usize {
        self.form.get(field).chars().count()
    }

    /// Places the cursor at the end of the newly focused field.
    fn sync_cursor(&mut self) {
        self.cursor = self
            .focused_field()
            .map(|field| self.char_len(field))
            .unwrap_or(0);
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use tudash::application::{App, View};
///
/// let app = App::default();
/// assert_eq!(app.view, View::Home);
/// ```
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub dashboard: DashboardState,
    pub add_user: AddUserState,
    /// Temporary status message shown in the status bar
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            view: View::Home,
            dashboard: DashboardState::default(),
            add_user: AddUserState::default(),
            status_message: None,
        }
    }
}

impl App {
    // ----- navigation -------------------------------------------------------

    /// Returns to the landing view, discarding both other views' state.
    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.dashboard = DashboardState::default();
        self.add_user = AddUserState::default();
        self.status_message = None;
    }

    /// Opens (or reloads) the dashboard. The listing starts in its loading
    /// state and the event loop performs the fetch on the next pass.
    pub fn open_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.dashboard = DashboardState::default();
        self.add_user = AddUserState::default();
        self.status_message = None;
    }

    /// Opens the add-user wizard with a fresh form.
    pub fn open_add_user(&mut self) {
        self.view = View::AddUser;
        self.add_user = AddUserState::default();
        self.status_message = None;
    }

    // ----- data fetch -------------------------------------------------------

    /// Whether the event loop should perform the users fetch now.
    pub fn fetch_pending(&self) -> bool {
        self.view == View::Dashboard && matches!(self.dashboard.load, LoadState::Loading)
    }

    /// Applies the outcome of the users fetch.
    ///
    /// Ignored unless the dashboard is actually waiting for one, so a stale
    /// result can never clobber a view that has since been torn down.
    pub fn set_fetch_result(&mut self, result: Result<Vec<UserRecord>, FetchError>) {
        if !self.fetch_pending() {
            return;
        }

        match result {
            Ok(users) => {
                info!(count = users.len(), "fetched users");
                self.dashboard.users = users;
                self.dashboard.load = LoadState::Loaded;
                self.dashboard.selected = 0;
                self.dashboard.scroll = 0;
                self.dashboard.refresh_visible();
            }
            Err(err) => {
                warn!(error = %err, "users fetch failed");
                self.dashboard.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Manual retry from the error view: reloads the entire dashboard.
    pub fn retry_fetch(&mut self) {
        if matches!(self.dashboard.load, LoadState::Failed(_)) {
            self.open_dashboard();
        }
    }

    // ----- search query -----------------------------------------------------

    pub fn push_query_char(&mut self, c: char) {
        self.dashboard.query.push(c);
        self.dashboard.refresh_visible();
    }

    pub fn pop_query_char(&mut self) {
        self.dashboard.query.pop();
        self.dashboard.refresh_visible();
    }

    pub fn clear_query(&mut self) {
        self.dashboard.query.clear();
        self.dashboard.refresh_visible();
    }

    // ----- list selection ---------------------------------------------------

    pub fn select_next(&mut self) {
        if self.dashboard.selected + 1 < self.dashboard.visible.len() {
            self.dashboard.selected += 1;
            self.ensure_selection_visible();
        }
    }

    pub fn select_previous(&mut self) {
        if self.dashboard.selected > 0 {
            self.dashboard.selected -= 1;
            self.ensure_selection_visible();
        }
    }

    /// Adjusts the scroll offset so the selected row stays in the viewport.
    pub fn ensure_selection_visible(&mut self) {
        let d = &mut self.dashboard;
        if d.selected < d.scroll {
            d.scroll = d.selected;
        } else if d.viewport_rows > 0 && d.selected >= d.scroll + d.viewport_rows {
            d.scroll = d.selected.saturating_sub(d.viewport_rows - 1);
        }
    }

    pub fn update_viewport_rows(&mut self, rows: usize) {
        self.dashboard.viewport_rows = rows.max(1);
        self.ensure_selection_visible();
    }

    // ----- wizard: field editing --------------------------------------------

    /// Sets a field to `value` unconditionally, clearing that field's error
    /// if one is showing. No validation happens here; that is deferred to the
    /// next advance attempt.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.add_user.form.get_mut(field) = value.into();
        if !self.add_user.errors.get(field).is_empty() {
            self.add_user.errors.clear(field);
        }
    }

    /// Inserts a character at the cursor of the focused field.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.add_user.focused_field() else {
            return;
        };
        let mut chars: Vec<char> = self.add_user.form.get(field).chars().collect();
        let at = self.add_user.cursor.min(chars.len());
        chars.insert(at, c);
        self.update_field(field, chars.into_iter().collect::<String>());
        self.add_user.cursor = at + 1;
    }

    /// Deletes the character before the cursor of the focused field.
    pub fn delete_char_back(&mut self) {
        let Some(field) = self.add_user.focused_field() else {
            return;
        };
        let mut chars: Vec<char> = self.add_user.form.get(field).chars().collect();
        let at = self.add_user.cursor.min(chars.len());
        if at == 0 {
            return;
        }
        chars.remove(at - 1);
        self.update_field(field, chars.into_iter().collect::<String>());
        self.add_user.cursor = at - 1;
    }

    /// Deletes the character under the cursor of the focused field.
    pub fn delete_char_forward(&mut self) {
        let Some(field) = self.add_user.focused_field() else {
            return;
        };
        let mut chars: Vec<char> = self.add_user.form.get(field).chars().collect();
        if self.add_user.cursor >= chars.len() {
            return;
        }
        chars.remove(self.add_user.cursor);
        self.update_field(field, chars.into_iter().collect::<String>());
    }

    pub fn cursor_left(&mut self) {
        if self.add_user.cursor > 0 {
            self.add_user.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(field) = self.add_user.focused_field() {
            if self.add_user.cursor < self.add_user.char_len(field) {
                self.add_user.cursor += 1;
            }
        }
    }

    pub fn cursor_home(&mut self) {
        self.add_user.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        if let Some(field) = self.add_user.focused_field() {
            self.add_user.cursor = self.add_user.char_len(field);
        }
    }

    /// Moves focus to the next field of the step, wrapping around.
    pub fn focus_next_field(&mut self) {
        let count = self.add_user.step.fields().len();
        if count > 0 {
            self.add_user.focus = (self.add_user.focus + 1) % count;
            self.add_user.sync_cursor();
        }
    }

    /// Moves focus to the previous field of the step, wrapping around.
    pub fn focus_previous_field(&mut self) {
        let count = self.add_user.step.fields().len();
        if count > 0 {
            self.add_user.focus = (self.add_user.focus + count - 1) % count;
            self.add_user.sync_cursor();
        }
    }

    // ----- wizard: step transitions -----------------------------------------

    /// Attempts to advance to the next step.
    ///
    /// Validates the current step first; on failure the step does not move
    /// and the errors are stored for display. The review step has no next
    /// step; its advance action is routed to [`App::submit`] by the input
    /// layer instead.
    pub fn advance(&mut self) {
        let result = validate_step(self.add_user.step, &self.add_user.form);
        if !result.valid {
            self.add_user.errors = result.errors;
            return;
        }

        if let Some(next) = self.add_user.step.next() {
            self.add_user.step = next;
            self.add_user.focus = 0;
            self.add_user.errors = FieldErrors::default();
            self.add_user.sync_cursor();
        }
    }

    /// Steps back without validating. Disabled at the first step. Form data
    /// is never reset by backward navigation.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.add_user.step.previous() {
            self.add_user.step = previous;
            self.add_user.focus = 0;
            self.add_user.sync_cursor();
        }
    }

    // ----- wizard: submission -----------------------------------------------

    /// Starts the simulated submission.
    ///
    /// Only callable from the review step while no submission is pending;
    /// anything else is a no-op, which is what makes re-invoking it during
    /// the in-flight window safe.
    pub fn submit(&mut self, now: Instant) {
        if self.view != View::AddUser
            || !self.add_user.step.is_last()
            || self.add_user.phase != SubmitPhase::Idle
        {
            return;
        }
        self.add_user.phase = SubmitPhase::InFlight {
            until: now + SUBMIT_DELAY,
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.add_user.phase, SubmitPhase::InFlight { .. })
    }

    pub fn toast_visible(&self) -> bool {
        matches!(self.add_user.phase, SubmitPhase::Toast { .. })
    }

    /// Advances the submit phases past any elapsed deadline.
    ///
    /// Called by the event loop on every pass. The in-flight window ends by
    /// logging the form (the submission goes nowhere else) and showing the
    /// success toast; the toast window ends by navigating back to the
    /// dashboard, which discards the form.
    pub fn tick(&mut self, now: Instant) {
        match self.add_user.phase {
            SubmitPhase::InFlight { until } if now >= until => {
                info!(form = ?self.add_user.form, "add-user form submitted");
                self.add_user.phase = SubmitPhase::Toast {
                    until: now + TOAST_DURATION,
                };
            }
            SubmitPhase::Toast { until } if now >= until => {
                self.open_dashboard();
            }
            _ => {}
        }
    }
}
