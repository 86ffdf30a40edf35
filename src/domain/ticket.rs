use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};

/// Unique identifier for a ticket (e.g., CAM-1, CAM-2, CAM-100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Creates a new TicketId from a prefix and a sequence number
    pub fn new(prefix: &str, number: u32) -> Self {
        Self(format!("{}-{}", prefix, number))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric suffix when the id carries the given prefix
    pub fn sequence_number(&self, prefix: &str) -> Option<u32> {
        let (head, tail) = self.0.rsplit_once('-')?;
        if head != prefix {
            return None;
        }
        tail.parse().ok()
    }
}

impl FromStr for TicketId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('-') {
            Some((prefix, number))
                if !prefix.is_empty()
                    && prefix.chars().all(|c| c.is_ascii_alphanumeric())
                    && number.parse::<u32>().is_ok() =>
            {
                Ok(Self(s.to_string()))
            }
            _ => Err(crate::error::BoardError::InvalidTicketId(s.to_string())),
        }
    }
}

impl Borrow<str> for TicketId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow status of a ticket.
///
/// The wire format is the display label. Labels outside the fixed
/// vocabulary are kept verbatim in `Other` so they survive a round trip,
/// but no status column ever matches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Backlog,
    Todo,
    InProgress,
    Done,
    Cancelled,
    Other(String),
}

impl Status {
    /// The fixed status columns, in board order
    pub const FIXED: [Status; 5] = [
        Status::Backlog,
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Cancelled,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
            Self::Other(label) => label,
        }
    }

    /// Parses one of the fixed labels; anything else is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::FIXED.into_iter().find(|s| s.label() == label)
    }

    pub fn is_fixed(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Status {
    fn from(label: String) -> Self {
        Self::from_label(&label).unwrap_or(Self::Other(label))
    }
}

impl From<&str> for Status {
    fn from(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| Self::Other(label.to_string()))
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(label) => label,
            fixed => fixed.label().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric priority code: 0 none, 1 low, 2 medium, 3 high, 4 urgent
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const NONE: Priority = Priority(0);
    pub const LOW: Priority = Priority(1);
    pub const MEDIUM: Priority = Priority(2);
    pub const HIGH: Priority = Priority(3);
    pub const URGENT: Priority = Priority(4);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board ticket as delivered by the remote source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Only tickets created on this board may be renamed
    #[serde(skip)]
    pub is_editable: bool,
}

impl Ticket {
    /// Creates a new, non-editable ticket in the Todo column with no priority
    pub fn new(id: TicketId, title: String) -> Self {
        Self {
            id,
            title,
            tag: Vec::new(),
            user_id: None,
            status: Status::Todo,
            priority: Priority::NONE,
            is_editable: false,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// The only tag a card displays
    pub fn first_tag(&self) -> Option<&str> {
        self.tag.first().map(String::as_str)
    }
}

/// Read-only reference data used for user grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
