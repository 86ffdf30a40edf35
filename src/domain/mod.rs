pub mod grouping;
pub mod mutation;
pub mod sorting;
pub mod ticket;
pub mod vocabulary;

pub use grouping::{
    derive_columns, resolve_group, Column, GroupBy, GroupTarget, PriorityBinding, ViewState,
};
pub use mutation::TicketIdGenerator;
pub use sorting::{sort_tickets, SortBy};
pub use ticket::{Priority, Status, Ticket, TicketId, User};
pub use vocabulary::{Icon, PriorityLevel, PRIORITY_LEVELS};
