use super::error::ClientError;
use super::spool::OrderSpool;
use crate::model::{TeamSummary, WarOrder};

/// Shared external state read by the order screen, plus the operations that
/// mutate it.
///
/// Everything the screen needs from outside — the team list, the contact
/// pre-fill, the fetching and pending flags, the status line — lives here
/// and is injected explicitly rather than read from ambient globals.
pub struct Session {
    spool: OrderSpool,
    teams: Vec<TeamSummary>,
    contact: Option<String>,
    fetching: bool,
    status: Option<String>,
    pending: bool,
    teams_loaded: bool,
    loads_issued: usize,
}

impl Session {
    /// Creates a session over the given spool, loading the profile pre-fill.
    pub fn new(spool: OrderSpool) -> Result<Self, ClientError> {
        let contact = spool.load_profile()?.contact;
        Ok(Self {
            spool,
            teams: Vec::new(),
            contact,
            fetching: false,
            status: None,
            pending: false,
            teams_loaded: false,
            loads_issued: 0,
        })
    }

    /// Returns the cached team list, in load order.
    pub fn teams(&self) -> &[TeamSummary] {
        &self.teams
    }

    /// Returns the contact pre-fill from the stored profile, if any.
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    /// Returns `true` while a load or submission is running.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Returns the current status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns `true` while a submission is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns a reference to the underlying spool.
    pub fn spool(&self) -> &OrderSpool {
        &self.spool
    }

    /// Loads the team list if it is empty and has never been loaded.
    ///
    /// Issues at most one load for the session lifetime; later calls are
    /// no-ops regardless of the outcome.
    pub fn ensure_teams_loaded(&mut self) -> Result<(), ClientError> {
        if self.teams_loaded || !self.teams.is_empty() {
            self.teams_loaded = true;
            return Ok(());
        }
        self.load_teams()
    }

    /// Fetches the team list from the spool.
    pub fn load_teams(&mut self) -> Result<(), ClientError> {
        self.fetching = true;
        self.status = Some("loading teams".to_string());
        self.loads_issued += 1;
        let result = self.spool.list_teams();
        self.fetching = false;
        self.teams_loaded = true;
        match result {
            Ok(teams) => {
                self.teams = teams;
                self.status = None;
                Ok(())
            }
            Err(e) => {
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Submits a war order to the spool.
    ///
    /// Refuses while a prior submission is pending; at most one may be
    /// outstanding.
    pub fn submit_order(&mut self, order: &WarOrder) -> Result<(), ClientError> {
        if self.pending {
            return Err(ClientError::SubmissionPending);
        }
        self.pending = true;
        self.fetching = true;
        self.status = Some("submitting war order".to_string());
        let result = self.spool.append_order(order);
        self.pending = false;
        self.fetching = false;
        match result {
            Ok(()) => {
                self.status = Some("war order submitted".to_string());
                Ok(())
            }
            Err(e) => {
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Creates a team and refreshes the cached list.
    pub fn create_team(&mut self, team: &TeamSummary) -> Result<(), ClientError> {
        self.spool.append_team(team)?;
        self.teams.push(team.clone());
        self.status = Some(format!("team {} created", team.display_name()));
        Ok(())
    }

    /// Number of team loads issued so far.
    #[cfg(test)]
    pub(crate) fn loads_issued(&self) -> usize {
        self.loads_issued
    }

    /// Seeds the team list as if it were already loaded externally.
    #[cfg(test)]
    pub(crate) fn seed_teams(&mut self, teams: Vec<TeamSummary>) {
        self.teams = teams;
    }

    /// Forces the pending flag, simulating an in-flight submission.
    #[cfg(test)]
    pub(crate) fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }
}
