use crate::domain::ticket::Ticket;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering applied to the tickets inside each column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Highest numeric priority first
    #[default]
    Priority,
    /// Ascending by title
    Title,
}

impl FromStr for SortBy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortBy::Priority),
            "title" => Ok(SortBy::Title),
            _ => Err(BoardError::InvalidSortBy(s.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
        }
    }
}

/// Sorts a column's tickets in place.
///
/// The sort is stable: tickets that compare equal keep the relative order
/// they had in the master collection.
///
/// # Examples
/// ```
/// use camboard_core::domain::sorting::{sort_tickets, SortBy};
/// use camboard_core::domain::ticket::{Priority, Ticket, TicketId};
///
/// let mut tickets = vec![
///     Ticket::new(TicketId::new("CAM", 1), "A".to_string()).with_priority(Priority::LOW),
///     Ticket::new(TicketId::new("CAM", 2), "B".to_string()).with_priority(Priority::URGENT),
/// ];
///
/// sort_tickets(&mut tickets, SortBy::Priority);
/// assert_eq!(tickets[0].id.as_str(), "CAM-2");
/// ```
pub fn sort_tickets(tickets: &mut [Ticket], sort_by: SortBy) {
    match sort_by {
        SortBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortBy::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Collation-style title comparison.
///
/// Titles compare in three passes. Base letters first, ignoring accents and
/// case, so "Éclair" sorts with the e's. Then accents, unaccented first.
/// Then case, lowercase first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| compare_case(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
