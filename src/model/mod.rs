mod order;
mod team;
mod validation;

pub use order::{WarOrder, default_end_date};
pub use team::TeamSummary;
pub use validation::{
    FieldRule, OrderDraft, OrderField, RuleViolation, rule, validate_draft, validate_text,
};
