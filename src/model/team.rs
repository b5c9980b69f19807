use serde::{Deserialize, Serialize};

/// A team the user owns, as listed by the team service.
///
/// Names come in up to four variants; any subset may be present. The record
/// is read-only from the order screen's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: String,
    #[serde(default)]
    pub english_full_name: Option<String>,
    #[serde(default)]
    pub chinese_full_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub chinese_name: Option<String>,
}

impl TeamSummary {
    /// Creates a team with only the full English name set.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            english_full_name: Some(name.into()),
            chinese_full_name: None,
            english_name: None,
            chinese_name: None,
        }
    }

    /// The best available display name.
    ///
    /// Preference order: full English, full Chinese, short English, short
    /// Chinese, then the id.
    pub fn display_name(&self) -> &str {
        self.english_full_name
            .as_deref()
            .or(self.chinese_full_name.as_deref())
            .or(self.english_name.as_deref())
            .or(self.chinese_name.as_deref())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sets_full_english_name() {
        let team = TeamSummary::named("T1", "Night Owls");
        assert_eq!(team.id, "T1");
        assert_eq!(team.display_name(), "Night Owls");
    }

    #[test]
    fn display_name_prefers_full_english() {
        let team = TeamSummary {
            id: "T1".to_string(),
            english_full_name: Some("Night Owls Gaming Club".to_string()),
            chinese_full_name: Some("夜枭电竞俱乐部".to_string()),
            english_name: Some("Owls".to_string()),
            chinese_name: Some("夜枭".to_string()),
        };
        assert_eq!(team.display_name(), "Night Owls Gaming Club");
    }

    #[test]
    fn display_name_falls_through_variants() {
        let mut team = TeamSummary {
            id: "T1".to_string(),
            english_full_name: None,
            chinese_full_name: Some("夜枭电竞俱乐部".to_string()),
            english_name: Some("Owls".to_string()),
            chinese_name: Some("夜枭".to_string()),
        };
        assert_eq!(team.display_name(), "夜枭电竞俱乐部");

        team.chinese_full_name = None;
        assert_eq!(team.display_name(), "Owls");

        team.english_name = None;
        assert_eq!(team.display_name(), "夜枭");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let team = TeamSummary {
            id: "T1".to_string(),
            english_full_name: None,
            chinese_full_name: None,
            english_name: None,
            chinese_name: None,
        };
        assert_eq!(team.display_name(), "T1");
    }

    #[test]
    fn deserializes_with_missing_variants() {
        let team: TeamSummary = serde_json::from_str(r#"{"id":"T9"}"#).unwrap();
        assert_eq!(team.id, "T9");
        assert_eq!(team.display_name(), "T9");
    }
}
