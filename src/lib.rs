//! # Camboard Core
//!
//! Grouping, sorting and mutation engine behind a single-page kanban board.
//!
//! The board fetches tickets and users once, derives its columns from a flat
//! ticket collection and two view selectors (group-by and sort-by), and keeps
//! that view consistent as tickets are added, moved between columns and
//! renamed. Rendering, icons and gesture transport are left to the embedding
//! UI; this crate only hands out opaque markers and plain view structs.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod presenter;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use config::BoardConfig;
pub use controller::{BoardController, DisplayMenu, LoadState, MenuClick};
pub use domain::{
    grouping::{Column, GroupBy, GroupTarget, PriorityBinding, ViewState},
    sorting::SortBy,
    ticket::{Priority, Status, Ticket, TicketId, User},
    vocabulary::Icon,
};
pub use error::{BoardError, Result};
pub use presenter::{CardPresenter, CardView, DragPayload, TitleUpdate};
pub use source::{BoardPayload, HttpSource, StaticSource, TicketSource};
pub use view::{BoardView, CardRegistry, ColumnView};
