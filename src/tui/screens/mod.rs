//! Screen state and rendering, one module per screen.

pub mod help;
pub mod order_create;
pub mod team_create;

pub use help::{HelpState, draw_help};
pub use order_create::{
    NOTICE_FORMAT_ERROR, NOTICE_SELECT_TEAM, BlockReason, OrderCreateState, SubmitState,
    draw_order_create,
};
pub use team_create::{TeamCreateState, draw_team_create};
