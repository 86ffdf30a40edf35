//! Card presenter: one ticket as an interactive unit.
//!
//! A presenter holds only local edit state. It never touches the ticket
//! collection; a confirmed rename comes back as a [`TitleUpdate`] for the
//! board controller to apply.

use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::vocabulary::{priority_marker, Icon};

/// What a drag carries from card to column: the ticket id and nothing else
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPayload {
    ticket_id: TicketId,
}

impl DragPayload {
    /// Transfer key the id travels under
    pub const KEY: &'static str = "ticketId";

    pub fn new(ticket_id: TicketId) -> Self {
        Self { ticket_id }
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }
}

/// A confirmed rename, reported upward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleUpdate {
    pub ticket_id: TicketId,
    pub title: String,
}

/// Title line of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTitle {
    Text(String),
    /// Text input holding the draft
    Draft(String),
}

/// Buttons shown next to the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControls {
    None,
    /// The "Edit" affordance
    Edit,
    /// The "Y" / "N" pair while editing
    ConfirmCancel,
}

/// Everything a renderer needs to draw one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: TicketId,
    pub title: CardTitle,
    pub controls: CardControls,
    pub priority_marker: Option<Icon>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPresenter {
    ticket_id: TicketId,
    editing: bool,
    draft: String,
}

impl CardPresenter {
    pub fn new(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id.clone(),
            editing: false,
            draft: ticket.title.clone(),
        }
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Enters edit mode if the ticket allows renaming
    pub fn begin_edit(&mut self, ticket: &Ticket) -> bool {
        if !ticket.is_editable {
            return false;
        }
        if !self.editing {
            self.draft = ticket.title.clone();
            self.editing = true;
        }
        true
    }

    /// Replaces the draft while editing
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.editing {
            self.draft = text.into();
        }
    }

    /// Leaves edit mode and reports the draft as the new title
    pub fn confirm_edit(&mut self) -> Option<TitleUpdate> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        Some(TitleUpdate {
            ticket_id: self.ticket_id.clone(),
            title: self.draft.clone(),
        })
    }

    /// Leaves edit mode and resets the draft to the current title
    pub fn cancel_edit(&mut self, ticket: &Ticket) {
        self.draft = ticket.title.clone();
        self.editing = false;
    }

    pub fn drag_start(&self) -> DragPayload {
        DragPayload::new(self.ticket_id.clone())
    }

    pub fn view(&self, ticket: &Ticket) -> CardView {
        let (title, controls) = if self.editing {
            (CardTitle::Draft(self.draft.clone()), CardControls::ConfirmCancel)
        } else if ticket.is_editable {
            (CardTitle::Text(ticket.title.clone()), CardControls::Edit)
        } else {
            (CardTitle::Text(ticket.title.clone()), CardControls::None)
        };

        CardView {
            id: ticket.id.clone(),
            title,
            controls,
            priority_marker: priority_marker(ticket.priority),
            tag: ticket.first_tag().map(str::to_string),
        }
    }
}
