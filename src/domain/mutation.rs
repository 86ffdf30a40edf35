//! Collection mutations as pure functions.
//!
//! Each function takes the current collection and returns the next one.
//! On error the caller keeps its old collection, so no mutation is ever
//! observed half-applied.

use crate::domain::grouping::GroupTarget;
use crate::domain::ticket::{Priority, Status, Ticket, TicketId};
use crate::error::{BoardError, Result};

/// Hands out ticket ids from a counter that only moves forward.
///
/// Once the counter passes `u32::MAX` the generator is exhausted and hands
/// out nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdGenerator {
    prefix: String,
    next: Option<u32>,
}

impl TicketIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Some(1),
        }
    }

    /// Starts past every id already in `tickets`: past the collection
    /// length and past the highest `<prefix>-<N>` suffix.
    pub fn seeded_from(prefix: impl Into<String>, tickets: &[Ticket]) -> Self {
        let mut generator = Self::new(prefix);
        generator.observe(tickets);
        generator
    }

    /// Moves the counter past `tickets` without ever moving it back
    pub fn observe(&mut self, tickets: &[Ticket]) {
        let highest = tickets
            .iter()
            .filter_map(|t| t.id.sequence_number(&self.prefix))
            .max()
            .unwrap_or(0);
        let floor = u32::try_from(tickets.len()).unwrap_or(u32::MAX).max(highest);
        self.next = match (self.next, floor.checked_add(1)) {
            (Some(next), Some(candidate)) => Some(next.max(candidate)),
            _ => None,
        };
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// The id the next call to `next_id` returns
    pub fn peek(&self) -> Option<TicketId> {
        self.next.map(|n| TicketId::new(&self.prefix, n))
    }

    /// Generates the next ticket ID, or `None` once the counter is used up
    pub fn next_id(&mut self) -> Option<TicketId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TicketId::new(&self.prefix, current))
    }
}

/// Builds the placeholder ticket a column's add button creates.
///
/// The status is the column's own when grouping by status, otherwise Todo.
/// The ticket is unassigned, has no priority and is the only kind of ticket
/// that can be renamed.
pub fn placeholder_ticket(
    id: TicketId,
    target: &GroupTarget,
    title: &str,
    tag: &str,
) -> Ticket {
    let status = match target {
        GroupTarget::Status(status) => status.clone(),
        _ => Status::Todo,
    };
    let mut ticket = Ticket::new(id, title.to_string())
        .with_status(status)
        .with_priority(Priority::NONE)
        .with_tag(tag);
    ticket.is_editable = true;
    ticket
}

/// Appends `ticket`, refusing an id that is already present
pub fn add_ticket(tickets: &[Ticket], ticket: Ticket) -> Result<Vec<Ticket>> {
    if tickets.iter().any(|t| t.id == ticket.id) {
        return Err(BoardError::DuplicateTicketId(ticket.id.to_string()));
    }
    let mut next = tickets.to_vec();
    next.push(ticket);
    Ok(next)
}

/// Moves a ticket into a column by writing the column's field only
pub fn move_ticket(
    tickets: &[Ticket],
    ticket_id: &str,
    target: &GroupTarget,
) -> Result<Vec<Ticket>> {
    let mut next = tickets.to_vec();
    let ticket = find_mut(&mut next, ticket_id)?;
    target.assign(ticket);
    Ok(next)
}

/// Renames an editable ticket. Empty or unchanged titles are accepted.
pub fn rename_ticket(tickets: &[Ticket], ticket_id: &str, title: &str) -> Result<Vec<Ticket>> {
    let mut next = tickets.to_vec();
    let ticket = find_mut(&mut next, ticket_id)?;
    if !ticket.is_editable {
        return Err(BoardError::NotEditable(ticket_id.to_string()));
    }
    ticket.set_title(title.to_string());
    Ok(next)
}

fn find_mut<'a>(tickets: &'a mut [Ticket], ticket_id: &str) -> Result<&'a mut Ticket> {
    tickets
        .iter_mut()
        .find(|t| t.id.as_str() == ticket_id)
        .ok_or_else(|| BoardError::TicketNotFound(ticket_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(n: u32) -> Ticket {
        Ticket::new(TicketId::new("CAM", n), format!("Ticket {}", n))
    }

    #[test]
    fn test_generator_counts_up() {
        let mut generator = TicketIdGenerator::new("CAM");
        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-1");
        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-2");
        assert_eq!(generator.peek().unwrap().as_str(), "CAM-3");
    }

    #[test]
    fn test_generator_seeds_past_existing_ids() {
        let tickets = vec![fetched(1), fetched(11), fetched(4)];
        let mut generator = TicketIdGenerator::seeded_from("CAM", &tickets);
        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-12");
    }

    #[test]
    fn test_generator_exhausted_by_largest_fetched_id() {
        let tickets = vec![fetched(u32::MAX)];
        let mut generator = TicketIdGenerator::seeded_from("CAM", &tickets);

        assert!(generator.is_exhausted());
        assert_eq!(generator.peek(), None);
        assert_eq!(generator.next_id(), None);
    }

    #[test]
    fn test_generator_hands_out_last_id_then_stops() {
        let tickets = vec![fetched(u32::MAX - 1)];
        let mut generator = TicketIdGenerator::seeded_from("CAM", &tickets);

        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-4294967295");
        assert!(generator.is_exhausted());
        assert_eq!(generator.next_id(), None);

        generator.observe(&[fetched(1)]);
        assert!(generator.is_exhausted());
    }

    #[test]
    fn test_generator_seeds_past_length_with_foreign_ids() {
        let tickets = vec![
            Ticket::new(TicketId::new("OPS", 90), "a".to_string()),
            Ticket::new(TicketId::new("OPS", 91), "b".to_string()),
        ];
        let mut generator = TicketIdGenerator::seeded_from("CAM", &tickets);
        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-3");
    }

    #[test]
    fn test_generator_never_moves_back() {
        let mut generator = TicketIdGenerator::new("CAM");
        for _ in 0..5 {
            generator.next_id();
        }
        generator.observe(&[fetched(2)]);
        assert_eq!(generator.next_id().unwrap().as_str(), "CAM-6");
    }

    #[test]
    fn test_placeholder_ticket_in_status_column() {
        let ticket = placeholder_ticket(
            TicketId::new("CAM", 1),
            &GroupTarget::Status(Status::InProgress),
            "New Task",
            "General",
        );
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.title, "New Task");
        assert_eq!(ticket.tag, ["General"]);
        assert_eq!(ticket.priority, Priority::NONE);
        assert!(ticket.user_id.is_none());
        assert!(ticket.is_editable);
    }

    #[test]
    fn test_placeholder_ticket_outside_status_view_defaults_to_todo() {
        let ticket = placeholder_ticket(
            TicketId::new("CAM", 1),
            &GroupTarget::User("usr-1".to_string()),
            "New Task",
            "General",
        );
        assert_eq!(ticket.status, Status::Todo);
        assert!(ticket.user_id.is_none());
    }

    #[test]
    fn test_add_ticket_appends() {
        let tickets = vec![fetched(1)];
        let next = add_ticket(&tickets, fetched(2)).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].id.as_str(), "CAM-2");
    }

    #[test]
    fn test_add_ticket_rejects_duplicate_id() {
        let tickets = vec![fetched(1)];
        let result = add_ticket(&tickets, fetched(1));
        assert!(matches!(result, Err(BoardError::DuplicateTicketId(_))));
    }

    #[test]
    fn test_move_ticket_writes_target_field_only() {
        let tickets = vec![fetched(1).with_status(Status::Todo).with_user("usr-1")];

        let next = move_ticket(&tickets, "CAM-1", &GroupTarget::Priority(Priority::HIGH)).unwrap();
        assert_eq!(next[0].priority, Priority::HIGH);
        assert_eq!(next[0].status, Status::Todo);
        assert_eq!(next[0].user_id.as_deref(), Some("usr-1"));

        let next = move_ticket(&next, "CAM-1", &GroupTarget::User("usr-2".to_string())).unwrap();
        assert_eq!(next[0].user_id.as_deref(), Some("usr-2"));
        assert_eq!(next[0].status, Status::Todo);

        let next = move_ticket(&next, "CAM-1", &GroupTarget::Status(Status::Done)).unwrap();
        assert_eq!(next[0].status, Status::Done);
    }

    #[test]
    fn test_move_unknown_ticket() {
        let tickets = vec![fetched(1)];
        let result = move_ticket(&tickets, "CAM-9", &GroupTarget::Status(Status::Done));
        assert!(matches!(result, Err(BoardError::TicketNotFound(_))));
    }

    #[test]
    fn test_rename_requires_editable() {
        let tickets = vec![fetched(1)];
        let result = rename_ticket(&tickets, "CAM-1", "Renamed");
        assert!(matches!(result, Err(BoardError::NotEditable(_))));
    }

    #[test]
    fn test_rename_editable_ticket() {
        let placeholder = placeholder_ticket(
            TicketId::new("CAM", 2),
            &GroupTarget::Status(Status::Todo),
            "New Task",
            "General",
        );
        let tickets = vec![fetched(1), placeholder];

        let next = rename_ticket(&tickets, "CAM-2", "Renamed").unwrap();
        assert_eq!(next[1].title, "Renamed");
        assert!(next[1].is_editable);

        let next = rename_ticket(&next, "CAM-2", "").unwrap();
        assert_eq!(next[1].title, "");
    }
}
