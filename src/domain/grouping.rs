//! Derives the column layout from a flat ticket collection.
//!
//! Columns are recomputed from scratch on every call. Each column filters
//! into a fresh vector before sorting, so the master collection's order is
//! never disturbed by a derivation.

use crate::domain::sorting::{sort_tickets, SortBy};
use crate::domain::ticket::{Priority, Status, Ticket, User};
use crate::domain::vocabulary::{status_icon, Icon, PRIORITY_LEVELS};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What tickets are bucketed by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

impl FromStr for GroupBy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupBy::Status),
            "user" => Ok(GroupBy::User),
            "priority" => Ok(GroupBy::Priority),
            _ => Err(BoardError::InvalidGroupBy(s.to_string())),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::User => write!(f, "user"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// How a priority column decides which code it holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBinding {
    /// Column at list position `i` holds tickets with code `i`
    #[default]
    Position,
    /// Column holds tickets whose code equals the entry's declared level
    Declared,
}

impl PriorityBinding {
    fn code_for(self, position: usize) -> Priority {
        match self {
            // PRIORITY_LEVELS has five entries, so the position always fits
            Self::Position => Priority::new(position as u8),
            Self::Declared => PRIORITY_LEVELS[position].priority_level,
        }
    }
}

/// The two display selectors. Neither touches ticket data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub group_by: GroupBy,
    pub sort_by: SortBy,
}

/// The ticket field a column corresponds to, and the value it holds there
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupTarget {
    Status(Status),
    User(String),
    Priority(Priority),
}

impl GroupTarget {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            Self::Status(status) => &ticket.status == status,
            Self::User(user_id) => ticket.user_id.as_deref() == Some(user_id.as_str()),
            Self::Priority(priority) => ticket.priority == *priority,
        }
    }

    /// Writes this column's value into the matching field of `ticket`
    pub fn assign(&self, ticket: &mut Ticket) {
        match self {
            Self::Status(status) => ticket.status = status.clone(),
            Self::User(user_id) => ticket.user_id = Some(user_id.clone()),
            Self::Priority(priority) => ticket.priority = *priority,
        }
    }
}

/// A derived, filtered, sorted view of tickets sharing a group key
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub group_key: String,
    pub icon: Option<Icon>,
    pub target: GroupTarget,
    pub tickets: Vec<Ticket>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

struct GroupSlot {
    key: String,
    icon: Option<Icon>,
    target: GroupTarget,
}

fn group_slots(group_by: GroupBy, users: &[User], binding: PriorityBinding) -> Vec<GroupSlot> {
    match group_by {
        GroupBy::Status => Status::FIXED
            .into_iter()
            .map(|status| GroupSlot {
                key: status.label().to_string(),
                icon: status_icon(&status),
                target: GroupTarget::Status(status),
            })
            .collect(),
        GroupBy::User => users
            .iter()
            .map(|user| GroupSlot {
                key: user.name.clone(),
                icon: None,
                target: GroupTarget::User(user.id.clone()),
            })
            .collect(),
        GroupBy::Priority => PRIORITY_LEVELS
            .iter()
            .enumerate()
            .map(|(position, level)| GroupSlot {
                key: level.name.to_string(),
                icon: Some(level.icon),
                target: GroupTarget::Priority(binding.code_for(position)),
            })
            .collect(),
    }
}

/// Derives one column per group, in group order, each sorted by `view.sort_by`.
///
/// Status and priority views always yield five columns; the user view
/// yields one per user. Empty columns are kept. Tickets whose value
/// matches no group do not appear anywhere.
pub fn derive_columns(
    tickets: &[Ticket],
    users: &[User],
    view: ViewState,
    binding: PriorityBinding,
) -> Vec<Column> {
    let columns: Vec<Column> = group_slots(view.group_by, users, binding)
        .into_iter()
        .map(|slot| {
            let mut matching: Vec<Ticket> = tickets
                .iter()
                .filter(|ticket| slot.target.matches(ticket))
                .cloned()
                .collect();
            sort_tickets(&mut matching, view.sort_by);
            Column {
                group_key: slot.key,
                icon: slot.icon,
                target: slot.target,
                tickets: matching,
            }
        })
        .collect();

    tracing::trace!(
        group_by = %view.group_by,
        sort_by = %view.sort_by,
        columns = columns.len(),
        "derived board columns"
    );
    columns
}

/// Resolves a column's group key under the given grouping.
///
/// User names resolve to the first user carrying that name.
pub fn resolve_group(
    group_by: GroupBy,
    key: &str,
    users: &[User],
    binding: PriorityBinding,
) -> Option<GroupTarget> {
    group_slots(group_by, users, binding)
        .into_iter()
        .find(|slot| slot.key == key)
        .map(|slot| slot.target)
}
