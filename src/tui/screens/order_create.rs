//! Order composition screen — the core form for creating war orders.

use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{
    OrderDraft, OrderField, TeamSummary, WarOrder, default_end_date, validate_draft,
};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the order title.
const TITLE: usize = 0;
/// Field index for the order description.
const DESCRIPTION: usize = 1;
/// Field index for the contact string.
const CONTACT: usize = 2;

/// Transient notice shown when validation passes but no team is selected.
pub const NOTICE_SELECT_TEAM: &str = "select a team";
/// Transient notice shown when field validation fails at submit time.
pub const NOTICE_FORMAT_ERROR: &str = "format error, please check and resubmit";

/// Submission lifecycle for a single submit attempt.
///
/// Every transition happens synchronously inside `submit()`. The resting
/// value after an attempt is either `Idle` (rejected, ready to retry) or
/// `Done` (payload dispatched); the intermediate states are passed through
/// within the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No attempt dispatched; ready for one.
    #[default]
    Idle,
    /// Field rules are being evaluated.
    Validating,
    /// The attempt was rejected before dispatch.
    Blocked(BlockReason),
    /// The payload is being assembled and dispatched.
    Submitting,
    /// The last attempt dispatched a payload.
    Done,
}

/// Why a submit attempt was rejected before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// One or more fields failed their rules.
    InvalidFields,
    /// Every rule passed but no team was selected.
    NoTeamSelected,
}

/// State for the order composition screen.
///
/// Owns the transient field values for the lifetime of the screen; nothing
/// here is persisted until a submit attempt succeeds.
#[derive(Debug, Clone)]
pub struct OrderCreateState {
    form: Form,
    teams: Vec<TeamSummary>,
    selected_team: Option<usize>,
    end_date: NaiveDate,
    submit_state: SubmitState,
    last_block: Option<BlockReason>,
    notice: Option<&'static str>,
    pending: bool,
}

impl OrderCreateState {
    /// Creates the screen state for an order composed on `today`.
    ///
    /// The end date defaults two weeks out; the contact field is pre-filled
    /// from the stored profile when available.
    pub fn new(today: NaiveDate, contact_prefill: Option<&str>) -> Self {
        let mut form = Form::new(vec![
            FormField::new("Title", true).with_placeholder("enter a title"),
            FormField::new("Description", true).with_placeholder("describe the challenge"),
            FormField::new("Contact", true).with_placeholder("how opponents reach you"),
        ]);
        if let Some(contact) = contact_prefill {
            form.set_value(CONTACT, contact);
        }

        Self {
            form,
            teams: Vec::new(),
            selected_team: None,
            end_date: default_end_date(today),
            submit_state: SubmitState::default(),
            last_block: None,
            notice: None,
            pending: false,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Alt+T/D cycle team / push the end date; Shift reverses.
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('t') => {
                    self.cycle_team(true);
                    return Action::None;
                }
                KeyCode::Char('d') => {
                    self.adjust_end_date(true);
                    return Action::None;
                }
                KeyCode::Char('n') => {
                    return Action::Navigate(Screen::TeamCreate);
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT {
            match key.code {
                KeyCode::Char('T') => {
                    self.cycle_team(false);
                    return Action::None;
                }
                KeyCode::Char('D') => {
                    self.adjust_end_date(false);
                    return Action::None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.notice = None;
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.notice = None;
                self.form.delete_char();
                Action::None
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the selected team's id, if any team is selected.
    pub fn selected_team_id(&self) -> Option<&str> {
        self.selected_team
            .and_then(|i| self.teams.get(i))
            .map(|team| team.id.as_str())
    }

    /// Returns the current end date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the resting submission state of the last attempt.
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    /// Returns why the last attempt was blocked, if it was.
    pub fn last_block(&self) -> Option<BlockReason> {
        self.last_block
    }

    /// Returns the transient notice, if one is showing.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Replaces the selectable team list.
    ///
    /// The current selection is kept when its team id survives the refresh
    /// and dropped otherwise. Only ids from this list can ever be selected.
    pub fn set_teams(&mut self, teams: &[TeamSummary]) {
        let previous_id = self.selected_team_id().map(str::to_string);
        self.teams = teams.to_vec();
        self.selected_team = previous_id
            .and_then(|id| self.teams.iter().position(|team| team.id == id));
    }

    /// Mirrors the session's pending flag; submit is disabled while set.
    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Resets all fields to a fresh state for `today`.
    pub fn reset(&mut self, today: NaiveDate, contact_prefill: Option<&str>) {
        let teams = std::mem::take(&mut self.teams);
        *self = Self::new(today, contact_prefill);
        self.teams = teams;
    }

    /// Cycles the team selection forward or backward, wrapping around.
    ///
    /// With no teams loaded the selection stays empty.
    fn cycle_team(&mut self, forward: bool) {
        if self.teams.is_empty() {
            return;
        }
        self.notice = None;
        let len = self.teams.len();
        self.selected_team = Some(match (self.selected_team, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    /// Moves the end date one day forward or backward.
    fn adjust_end_date(&mut self, forward: bool) {
        self.notice = None;
        self.end_date = if forward {
            self.end_date + Days::new(1)
        } else {
            self.end_date - Days::new(1)
        };
    }

    /// Runs the submission pipeline: validate every field, check the team
    /// precondition, then hand the assembled payload outward.
    ///
    /// While a prior submission is pending this is a no-op; the session owns
    /// the in-flight request and only one may be outstanding.
    fn submit(&mut self) -> Action {
        if self.pending {
            return Action::None;
        }

        self.submit_state = SubmitState::Validating;
        self.last_block = None;
        self.form.clear_errors();
        self.notice = None;

        let draft = OrderDraft {
            title: self.form.value(TITLE),
            description: self.form.value(DESCRIPTION),
            contact: self.form.value(CONTACT),
            end_date: Some(self.end_date),
        };
        if let Err(violations) = validate_draft(&draft) {
            for violation in &violations {
                if let Some(index) = field_index(violation.0) {
                    self.form.set_error(index, violation.to_string());
                }
            }
            return self.block(BlockReason::InvalidFields, NOTICE_FORMAT_ERROR);
        }

        let Some(team_id) = self.selected_team_id().map(str::to_string) else {
            return self.block(BlockReason::NoTeamSelected, NOTICE_SELECT_TEAM);
        };

        self.submit_state = SubmitState::Submitting;
        match WarOrder::new(
            team_id,
            self.form.value(CONTACT).to_string(),
            self.form.value(TITLE).to_string(),
            self.form.value(DESCRIPTION).to_string(),
            self.end_date,
        ) {
            Ok(order) => {
                self.submit_state = SubmitState::Done;
                Action::SubmitOrder(order)
            }
            Err(violations) => {
                // Shouldn't happen since the draft was validated above, but
                // handle gracefully.
                for violation in &violations {
                    if let Some(index) = field_index(violation.0) {
                        self.form.set_error(index, violation.to_string());
                    }
                }
                self.block(BlockReason::InvalidFields, NOTICE_FORMAT_ERROR)
            }
        }
    }

    /// Records a rejected attempt and returns the controller to idle.
    fn block(&mut self, reason: BlockReason, notice: &'static str) -> Action {
        self.last_block = Some(reason);
        self.notice = Some(notice);
        self.submit_state = SubmitState::Idle;
        Action::None
    }
}

/// Maps a rule-engine field to its form index, when it has one.
fn field_index(field: OrderField) -> Option<usize> {
    match field {
        OrderField::Title => Some(TITLE),
        OrderField::Description => Some(DESCRIPTION),
        OrderField::Contact => Some(CONTACT),
        OrderField::EndDate => None,
    }
}

/// Renders the order composition screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_order_create(state: &OrderCreateState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Compose War Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, team_area, date_area, notice_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    let team_line = if state.teams.is_empty() {
        Line::from(Span::styled(
            "no teams yet - press Alt+N to create one first",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let name = state
            .selected_team
            .and_then(|i| state.teams.get(i))
            .map_or("none selected (Alt+T)", |team| team.display_name());
        Line::from(vec![
            Span::styled("Team: ", Style::default().fg(Color::Cyan)),
            Span::raw(name.to_string()),
        ])
    };
    frame.render_widget(Paragraph::new(team_line), team_area);

    let date_line = Line::from(vec![
        Span::styled("Ends: ", Style::default().fg(Color::Cyan)),
        Span::raw(state.end_date.format("%Y-%m-%d").to_string()),
    ]);
    frame.render_widget(Paragraph::new(date_line), date_area);

    if let Some(notice) = state.notice() {
        let line = Paragraph::new(Span::styled(notice, Style::default().fg(Color::Red)));
        frame.render_widget(line, notice_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  Alt+T: team  Alt+D: end date  Alt+N: new team  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
