use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// The rule-engine-validated fields of a war order draft.
///
/// Team selection is deliberately absent: it is a submission precondition
/// checked by the order screen, not a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Title,
    Description,
    Contact,
    EndDate,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Contact => "contact",
            Self::EndDate => "end date",
        };
        write!(f, "{name}")
    }
}

/// A declarative per-field constraint with its user-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Whether the field must be present and non-blank.
    pub required: bool,
    /// Inclusive bounds on the trimmed character count, for text fields.
    pub length: Option<(usize, usize)>,
    /// Message surfaced when any part of the rule fails.
    pub message: &'static str,
}

/// Returns the fixed rule for a field. Rules never change at runtime.
pub const fn rule(field: OrderField) -> FieldRule {
    match field {
        OrderField::Title => FieldRule {
            required: true,
            length: Some((2, 25)),
            message: "title: 2-25 characters",
        },
        // The guidance string says 200; the enforced cap has always been 400.
        OrderField::Description => FieldRule {
            required: true,
            length: Some((2, 400)),
            message: "description: 2-200 characters",
        },
        OrderField::Contact => FieldRule {
            required: true,
            length: Some((2, 25)),
            message: "contact: 2-25 characters",
        },
        OrderField::EndDate => FieldRule {
            required: true,
            length: None,
            message: "an end date is required",
        },
    }
}

/// A field failed its rule; displays as the rule's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", rule(*.0).message)]
pub struct RuleViolation(pub OrderField);

/// A snapshot of the editable fields taken at submit time.
#[derive(Debug, Clone, Copy)]
pub struct OrderDraft<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub contact: &'a str,
    pub end_date: Option<NaiveDate>,
}

/// Validates a single text field against its rule.
///
/// Length bounds apply to the trimmed character count, so surrounding
/// whitespace never satisfies a minimum.
pub fn validate_text(field: OrderField, value: &str) -> Result<(), RuleViolation> {
    let rule = rule(field);
    let len = value.trim().chars().count();
    if rule.required && len == 0 {
        return Err(RuleViolation(field));
    }
    if let Some((min, max)) = rule.length
        && (len < min || len > max)
    {
        return Err(RuleViolation(field));
    }
    Ok(())
}

/// Validates every rule-engine field of a draft.
///
/// All fields are checked; the error lists each failing field exactly once,
/// in declaration order. Fields missing from the list passed. Team selection
/// is not validated here.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), Vec<RuleViolation>> {
    let mut violations = Vec::new();

    let text_fields = [
        (OrderField::Title, draft.title),
        (OrderField::Description, draft.description),
        (OrderField::Contact, draft.contact),
    ];
    for (field, value) in text_fields {
        if let Err(violation) = validate_text(field, value) {
            violations.push(violation);
        }
    }
    if draft.end_date.is_none() {
        violations.push(RuleViolation(OrderField::EndDate));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn full_draft<'a>(title: &'a str, description: &'a str, contact: &'a str) -> OrderDraft<'a> {
        OrderDraft {
            title,
            description,
            contact,
            end_date: Some(NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()),
        }
    }

    // --- validate_text boundaries ---

    #[test]
    fn title_length_one_rejected() {
        assert_eq!(
            validate_text(OrderField::Title, "a"),
            Err(RuleViolation(OrderField::Title))
        );
    }

    #[test]
    fn title_length_two_accepted() {
        assert_eq!(validate_text(OrderField::Title, "ab"), Ok(()));
    }

    #[test]
    fn title_length_twenty_five_accepted() {
        assert_eq!(validate_text(OrderField::Title, &"x".repeat(25)), Ok(()));
    }

    #[test]
    fn title_length_twenty_six_rejected() {
        assert_eq!(
            validate_text(OrderField::Title, &"x".repeat(26)),
            Err(RuleViolation(OrderField::Title))
        );
    }

    #[test]
    fn contact_shares_title_bounds() {
        assert_eq!(
            validate_text(OrderField::Contact, "a"),
            Err(RuleViolation(OrderField::Contact))
        );
        assert_eq!(validate_text(OrderField::Contact, "ab"), Ok(()));
        assert_eq!(validate_text(OrderField::Contact, &"x".repeat(25)), Ok(()));
        assert_eq!(
            validate_text(OrderField::Contact, &"x".repeat(26)),
            Err(RuleViolation(OrderField::Contact))
        );
    }

    #[test]
    fn description_caps_at_four_hundred() {
        assert_eq!(
            validate_text(OrderField::Description, "a"),
            Err(RuleViolation(OrderField::Description))
        );
        assert_eq!(validate_text(OrderField::Description, "ab"), Ok(()));
        assert_eq!(
            validate_text(OrderField::Description, &"x".repeat(400)),
            Ok(())
        );
        assert_eq!(
            validate_text(OrderField::Description, &"x".repeat(401)),
            Err(RuleViolation(OrderField::Description))
        );
    }

    #[test]
    fn empty_required_field_rejected() {
        assert_eq!(
            validate_text(OrderField::Title, ""),
            Err(RuleViolation(OrderField::Title))
        );
    }

    #[test]
    fn whitespace_does_not_satisfy_minimum() {
        assert_eq!(
            validate_text(OrderField::Title, "  a  "),
            Err(RuleViolation(OrderField::Title))
        );
        assert_eq!(validate_text(OrderField::Title, "  ab  "), Ok(()));
    }

    #[test]
    fn multibyte_characters_count_once() {
        // Two CJK characters meet a minimum of two.
        assert_eq!(validate_text(OrderField::Contact, "微信"), Ok(()));
    }

    #[quickcheck]
    fn title_valid_iff_trimmed_length_in_bounds(n: usize) -> bool {
        let n = n % 60;
        let value = "x".repeat(n);
        let ok = validate_text(OrderField::Title, &value).is_ok();
        ok == (2..=25).contains(&n)
    }

    // --- validate_draft ---

    #[test]
    fn valid_draft_passes() {
        assert_eq!(
            validate_draft(&full_draft("Weekend Match", "Let's battle", "wechat:abc123")),
            Ok(())
        );
    }

    #[test]
    fn all_failing_fields_reported() {
        let result = validate_draft(&OrderDraft {
            title: "",
            description: "x",
            contact: "",
            end_date: None,
        });
        assert_eq!(
            result,
            Err(vec![
                RuleViolation(OrderField::Title),
                RuleViolation(OrderField::Description),
                RuleViolation(OrderField::Contact),
                RuleViolation(OrderField::EndDate),
            ])
        );
    }

    #[test]
    fn only_failing_fields_reported() {
        let result = validate_draft(&full_draft("Weekend Match", "x", "wechat:abc123"));
        assert_eq!(result, Err(vec![RuleViolation(OrderField::Description)]));
    }

    #[test]
    fn missing_end_date_reported() {
        let result = validate_draft(&OrderDraft {
            title: "Weekend Match",
            description: "Let's battle",
            contact: "wechat:abc123",
            end_date: None,
        });
        assert_eq!(result, Err(vec![RuleViolation(OrderField::EndDate)]));
    }

    // --- messages ---

    #[test]
    fn violation_displays_rule_message() {
        assert_eq!(
            RuleViolation(OrderField::Title).to_string(),
            "title: 2-25 characters"
        );
        assert_eq!(
            RuleViolation(OrderField::Contact).to_string(),
            "contact: 2-25 characters"
        );
        assert_eq!(
            RuleViolation(OrderField::EndDate).to_string(),
            "an end date is required"
        );
    }

    #[test]
    fn description_message_understates_enforced_cap() {
        // The enforced bound is 400 even though the copy reads 200.
        assert_eq!(rule(OrderField::Description).length, Some((2, 400)));
        assert_eq!(
            RuleViolation(OrderField::Description).to_string(),
            "description: 2-200 characters"
        );
    }

    #[test]
    fn rules_mark_every_field_required() {
        for field in [
            OrderField::Title,
            OrderField::Description,
            OrderField::Contact,
            OrderField::EndDate,
        ] {
            assert!(rule(field).required, "{field} should be required");
        }
    }
}
