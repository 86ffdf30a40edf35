//! Rendering step: turns derived columns into card views.

use crate::controller::BoardController;
use crate::domain::grouping::ViewState;
use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::vocabulary::Icon;
use crate::presenter::{CardPresenter, CardView, DragPayload};
use std::collections::HashMap;

/// Placeholder text for a column with no cards
pub const EMPTY_COLUMN_TEXT: &str = "No tickets";

/// One card presenter per ticket id, kept across re-derivations so edit
/// state survives a re-render.
#[derive(Debug, Default)]
pub struct CardRegistry {
    presenters: HashMap<TicketId, CardPresenter>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ticket_id: &str) -> Option<&CardPresenter> {
        self.presenters.get(ticket_id)
    }

    fn presenter(&mut self, ticket: &Ticket) -> &mut CardPresenter {
        self.presenters
            .entry(ticket.id.clone())
            .or_insert_with(|| CardPresenter::new(ticket))
    }

    /// Drops presenters whose ticket is no longer on the board
    pub fn retain(&mut self, tickets: &[Ticket]) {
        self.presenters
            .retain(|id, _| tickets.iter().any(|t| &t.id == id));
    }

    pub fn begin_edit(&mut self, board: &BoardController, ticket_id: &str) -> bool {
        match board.ticket(ticket_id) {
            Some(ticket) => self.presenter(ticket).begin_edit(ticket),
            None => false,
        }
    }

    pub fn edit_draft(&mut self, board: &BoardController, ticket_id: &str, text: &str) {
        if let Some(ticket) = board.ticket(ticket_id) {
            self.presenter(ticket).set_draft(text);
        }
    }

    /// Confirms the edit and hands the new title to the board
    pub fn confirm_edit(&mut self, board: &mut BoardController, ticket_id: &str) -> bool {
        let Some(ticket) = board.ticket(ticket_id) else {
            return false;
        };
        let update = self.presenter(ticket).confirm_edit();
        match update {
            Some(update) => board.rename_ticket(update.ticket_id.as_str(), &update.title),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self, board: &BoardController, ticket_id: &str) {
        if let Some(ticket) = board.ticket(ticket_id) {
            self.presenter(ticket).cancel_edit(ticket);
        }
    }

    pub fn drag_start(&mut self, board: &BoardController, ticket_id: &str) -> Option<DragPayload> {
        board
            .ticket(ticket_id)
            .map(|ticket| self.presenter(ticket).drag_start())
    }

    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub group_key: String,
    pub icon: Option<Icon>,
    pub count: usize,
    /// No cards; the column shows [`EMPTY_COLUMN_TEXT`] instead
    pub empty: bool,
    pub cards: Vec<CardView>,
}

impl ColumnView {
    /// Text shown in place of the card list, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        self.empty.then_some(EMPTY_COLUMN_TEXT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub view: ViewState,
    pub menu_open: bool,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Derives the columns from the board's committed state and renders
    /// one card per ticket.
    pub fn render(board: &BoardController, registry: &mut CardRegistry) -> Self {
        registry.retain(board.tickets());

        let columns = board
            .columns()
            .into_iter()
            .map(|column| ColumnView {
                count: column.len(),
                empty: column.is_empty(),
                cards: column
                    .tickets
                    .iter()
                    .map(|ticket| registry.presenter(ticket).view(ticket))
                    .collect(),
                group_key: column.group_key,
                icon: column.icon,
            })
            .collect();

        Self {
            view: board.view(),
            menu_open: board.display_menu().is_open(),
            columns,
        }
    }

    pub fn column(&self, group_key: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.group_key == group_key)
    }
}
