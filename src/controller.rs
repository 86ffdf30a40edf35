//! The board controller: owns the ticket collection and the view selectors.
//!
//! All intents are handled synchronously. Every mutation builds the next
//! collection first and swaps it in only on success; failures are logged and
//! leave the board as it was.

use crate::config::BoardConfig;
use crate::domain::grouping::{
    derive_columns, resolve_group, Column, GroupBy, GroupTarget, ViewState,
};
use crate::domain::mutation::{self, TicketIdGenerator};
use crate::domain::sorting::SortBy;
use crate::domain::ticket::{Ticket, TicketId, User};
use crate::error::{BoardError, Result};
use crate::presenter::DragPayload;
use crate::source::{BoardPayload, TicketSource};
use chrono::{DateTime, Utc};

/// Progress of the one-time startup fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded { at: DateTime<Utc> },
    Failed { reason: String },
}

/// Where a click on the display options landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    /// The "Display" button itself
    Button,
    /// Anywhere inside the opened panel, selectors included
    Panel,
}

/// Open/closed state of the display options menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMenu {
    open: bool,
}

impl DisplayMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Clicks inside the panel stay inside the panel
    pub fn click(&mut self, click: MenuClick) {
        if click == MenuClick::Button {
            self.toggle();
        }
    }
}

pub struct BoardController {
    config: BoardConfig,
    tickets: Vec<Ticket>,
    users: Vec<User>,
    view: ViewState,
    menu: DisplayMenu,
    ids: TicketIdGenerator,
    load_state: LoadState,
}

impl BoardController {
    pub fn new(config: BoardConfig) -> Self {
        let ids = TicketIdGenerator::new(config.id_prefix.clone());
        Self {
            config,
            tickets: Vec::new(),
            users: Vec::new(),
            view: ViewState::default(),
            menu: DisplayMenu::default(),
            ids,
            load_state: LoadState::Pending,
        }
    }

    /// Runs the startup fetch. Only the first call has any effect.
    pub async fn initialize(&mut self, source: &dyn TicketSource) {
        if self.load_state != LoadState::Pending {
            tracing::debug!("board already initialized, skipping fetch");
            return;
        }
        let result = source.fetch().await;
        self.apply_fetch(result);
    }

    /// Commits the outcome of the startup fetch.
    ///
    /// Failure is not fatal: it is logged and the board stays empty.
    pub fn apply_fetch(&mut self, result: Result<BoardPayload>) {
        if self.load_state != LoadState::Pending {
            tracing::debug!("ignoring fetch result, board already initialized");
            return;
        }

        match result {
            Ok(payload) => {
                tracing::info!(
                    tickets = payload.tickets.len(),
                    users = payload.users.len(),
                    "board loaded"
                );
                self.tickets = payload.tickets;
                self.users = payload.users;
                self.ids.observe(&self.tickets);
                self.load_state = LoadState::Loaded { at: Utc::now() };
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching the tickets");
                self.load_state = LoadState::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }

    /// Derives the column layout from the committed collection
    pub fn columns(&self) -> Vec<Column> {
        derive_columns(
            &self.tickets,
            &self.users,
            self.view,
            self.config.priority_binding,
        )
    }

    /// Adds a placeholder ticket from a column's add button.
    ///
    /// Returns the new ticket's id, or `None` when the key names no column
    /// in the current grouping or no ticket id is left to hand out.
    pub fn add_ticket(&mut self, group_key: &str) -> Option<TicketId> {
        let target = match self.resolve(group_key) {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!(error = %e, "add ignored");
                return None;
            }
        };

        let Some(id) = self.ids.next_id() else {
            tracing::warn!(prefix = self.ids.prefix(), "add ignored, ticket ids exhausted");
            return None;
        };
        let ticket = mutation::placeholder_ticket(
            id.clone(),
            &target,
            &self.config.placeholder_title,
            &self.config.placeholder_tag,
        );
        match mutation::add_ticket(&self.tickets, ticket) {
            Ok(next) => {
                self.tickets = next;
                tracing::debug!(ticket_id = %id, group_key, "ticket added");
                Some(id)
            }
            Err(e) => {
                tracing::debug!(error = %e, "add ignored");
                None
            }
        }
    }

    /// Handles a card dropped on a column.
    ///
    /// The drop writes the field the current grouping is based on. Unknown
    /// tickets and unknown columns are ignored. Returns whether anything
    /// changed.
    pub fn move_ticket(&mut self, ticket_id: &str, group_key: &str) -> bool {
        let target = match self.resolve(group_key) {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!(error = %e, "drop ignored");
                return false;
            }
        };

        match mutation::move_ticket(&self.tickets, ticket_id, &target) {
            Ok(next) => {
                self.tickets = next;
                tracing::debug!(ticket_id, group_key, "ticket moved");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "drop ignored");
                false
            }
        }
    }

    /// Drop handler for a column: moves the dragged card into it
    pub fn handle_drop(&mut self, payload: &DragPayload, group_key: &str) -> bool {
        self.move_ticket(payload.ticket_id().as_str(), group_key)
    }

    /// Applies a confirmed inline rename
    pub fn rename_ticket(&mut self, ticket_id: &str, title: &str) -> bool {
        match mutation::rename_ticket(&self.tickets, ticket_id, title) {
            Ok(next) => {
                self.tickets = next;
                tracing::debug!(ticket_id, "ticket renamed");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "rename ignored");
                false
            }
        }
    }

    pub fn set_group_by(&mut self, group_by: GroupBy) {
        self.view.group_by = group_by;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.view.sort_by = sort_by;
    }

    pub fn toggle_display_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn click_display_menu(&mut self, click: MenuClick) {
        self.menu.click(click);
    }

    pub fn display_menu(&self) -> DisplayMenu {
        self.menu
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id.as_str() == ticket_id)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn resolve(&self, group_key: &str) -> Result<GroupTarget> {
        resolve_group(
            self.view.group_by,
            group_key,
            &self.users,
            self.config.priority_binding,
        )
        .ok_or_else(|| BoardError::UnknownGroup {
            group_by: self.view.group_by.to_string(),
            key: group_key.to_string(),
        })
    }
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
