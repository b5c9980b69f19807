use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::client::Session;

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, OrderCreateState, TeamCreateState, draw_help, draw_order_create, draw_team_create,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Compose and submit a war order.
    OrderCreate,
    /// Register a new team.
    TeamCreate,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// Owns the session and the per-screen state; screens never touch the
/// session directly. Session data a screen needs (team list, contact
/// pre-fill, pending flag) is pushed into it by the app.
pub struct App {
    screen: Screen,
    session: Session,
    today: NaiveDate,
    order_create: OrderCreateState,
    team_create: TeamCreateState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::OrderCreate`] screen.
    ///
    /// Bootstraps the team list: if the session's cache is empty, one load
    /// is issued here and never again. A failed load is not fatal; the
    /// session's status line carries the error and the screen opens with an
    /// empty team list.
    pub fn new(mut session: Session, today: NaiveDate) -> Self {
        let _ = session.ensure_teams_loaded();

        let mut order_create = OrderCreateState::new(today, session.contact());
        order_create.set_teams(session.teams());

        Self {
            screen: Screen::OrderCreate,
            session,
            today,
            order_create,
            team_create: TeamCreateState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen with the status bar underneath.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let [screen_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::OrderCreate => draw_order_create(&self.order_create, frame, screen_area),
            Screen::TeamCreate => draw_team_create(&self.team_create, frame, screen_area),
            Screen::Help => draw_help(&self.help, frame, screen_area),
        }

        let ctx = StatusBarContext {
            fetching: self.session.is_fetching(),
            pending: self.session.is_pending(),
            status: self.session.status().map(str::to_string),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event by dispatching to the active screen and applying
    /// the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Refresh the pending mirror before dispatch so the order screen's
        // submit guard always sees the session's current flag.
        self.order_create.set_pending(self.session.is_pending());

        let action = match self.screen {
            Screen::OrderCreate => self.order_create.handle_key(key),
            Screen::TeamCreate => self.team_create.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::SubmitOrder(order) => {
                if self.session.submit_order(&order).is_ok() {
                    self.order_create.reset(self.today, self.session.contact());
                }
            }
            Action::CreateTeam(team) => match self.session.create_team(&team) {
                Ok(()) => {
                    self.order_create.set_teams(self.session.teams());
                    self.team_create.reset();
                    self.navigate(Screen::OrderCreate);
                }
                Err(e) => self.team_create.set_error(e.to_string()),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if screen == Screen::Help {
            self.help.set_origin(self.screen);
            self.help.reset();
        }
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`Session`].
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the order screen state.
    pub fn order_create(&self) -> &OrderCreateState {
        &self.order_create
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
