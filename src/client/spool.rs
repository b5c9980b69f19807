use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::ClientError;
use crate::model::{TeamSummary, WarOrder};
use crate::wire::encode_order;

/// Stored user profile; currently only the contact pre-fill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub contact: Option<String>,
}

/// JSONL-backed spool directory for outbound orders and cached team data.
///
/// - `orders.jsonl` — one submitted order per line, append-only.
/// - `teams.jsonl` — one team per line.
/// - `profile.json` — the stored user profile.
pub struct OrderSpool {
    base_path: PathBuf,
}

impl OrderSpool {
    /// Creates a spool under the XDG data directory.
    ///
    /// The directory (`~/.local/share/warcall/`) is created if it does not
    /// already exist.
    pub fn new() -> Result<Self, ClientError> {
        let data_dir = dirs::data_dir().ok_or(ClientError::NoDataDir)?;
        let base_path = data_dir.join("warcall");
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Creates a spool rooted at the given path.
    #[cfg(test)]
    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn orders_path(&self) -> PathBuf {
        self.base_path.join("orders.jsonl")
    }

    fn teams_path(&self) -> PathBuf {
        self.base_path.join("teams.jsonl")
    }

    fn profile_path(&self) -> PathBuf {
        self.base_path.join("profile.json")
    }

    /// Appends a submitted order as a single encoded line.
    pub fn append_order(&self, order: &WarOrder) -> Result<(), ClientError> {
        let frame = encode_order(order)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.orders_path())?;
        file.write_all(&frame)?;
        Ok(())
    }

    /// Reads back all submitted orders, oldest first.
    pub fn list_orders(&self) -> Result<Vec<WarOrder>, ClientError> {
        read_jsonl(self.orders_path())
    }

    /// Reads the team list; an absent file means no teams.
    pub fn list_teams(&self) -> Result<Vec<TeamSummary>, ClientError> {
        read_jsonl(self.teams_path())
    }

    /// Appends a team to the team list.
    pub fn append_team(&self, team: &TeamSummary) -> Result<(), ClientError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.teams_path())?;
        serde_json::to_writer(&mut file, team)?;
        writeln!(file)?;
        Ok(())
    }

    /// Loads the stored profile; an absent file yields the default.
    pub fn load_profile(&self) -> Result<Profile, ClientError> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(Profile::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Stores the profile, replacing any previous one.
    pub fn save_profile(&self, profile: &Profile) -> Result<(), ClientError> {
        let file = fs::File::create(self.profile_path())?;
        serde_json::to_writer(file, profile)?;
        Ok(())
    }
}

/// Reads one record per line from a JSONL file; an absent file is empty.
fn read_jsonl<T: for<'de> Deserialize<'de>>(path: PathBuf) -> Result<Vec<T>, ClientError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .map(|line| {
            let line = line?;
            serde_json::from_str(&line).map_err(ClientError::Json)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;

    fn make_spool() -> (tempfile::TempDir, OrderSpool) {
        let dir = tempdir().unwrap();
        let spool = OrderSpool::with_path(dir.path()).unwrap();
        (dir, spool)
    }

    fn make_order(title: &str) -> WarOrder {
        WarOrder::new(
            "T1".to_string(),
            "wechat:abc123".to_string(),
            title.to_string(),
            "Let's battle".to_string(),
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        )
        .unwrap()
    }

    // --- orders ---

    #[test]
    fn empty_spool_lists_no_orders() {
        let (_dir, spool) = make_spool();
        assert_eq!(spool.list_orders().unwrap(), vec![]);
    }

    #[test]
    fn append_and_list_orders() {
        let (_dir, spool) = make_spool();
        spool.append_order(&make_order("First Match")).unwrap();
        spool.append_order(&make_order("Second Match")).unwrap();

        let orders = spool.list_orders().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].title, "First Match");
        assert_eq!(orders[1].title, "Second Match");
    }

    #[test]
    fn orders_file_is_line_oriented() {
        let (dir, spool) = make_spool();
        spool.append_order(&make_order("First Match")).unwrap();

        let contents = fs::read_to_string(dir.path().join("orders.jsonl")).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn corrupt_order_line_is_an_error() {
        let (dir, spool) = make_spool();
        fs::write(dir.path().join("orders.jsonl"), "not json\n").unwrap();
        assert!(matches!(
            spool.list_orders(),
            Err(ClientError::Json(_))
        ));
    }

    // --- teams ---

    #[test]
    fn missing_teams_file_means_no_teams() {
        let (_dir, spool) = make_spool();
        assert_eq!(spool.list_teams().unwrap(), vec![]);
    }

    #[test]
    fn append_and_list_teams() {
        let (_dir, spool) = make_spool();
        spool
            .append_team(&TeamSummary::named("T1", "Night Owls"))
            .unwrap();
        spool
            .append_team(&TeamSummary::named("T2", "Dawn Patrol"))
            .unwrap();

        let teams = spool.list_teams().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].display_name(), "Night Owls");
        assert_eq!(teams[1].display_name(), "Dawn Patrol");
    }

    // --- profile ---

    #[test]
    fn missing_profile_is_default() {
        let (_dir, spool) = make_spool();
        assert_eq!(spool.load_profile().unwrap(), Profile::default());
    }

    #[test]
    fn profile_round_trip() {
        let (_dir, spool) = make_spool();
        let profile = Profile {
            contact: Some("wechat:abc123".to_string()),
        };
        spool.save_profile(&profile).unwrap();
        assert_eq!(spool.load_profile().unwrap(), profile);
    }
}
