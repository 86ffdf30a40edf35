//! Fixed reference vocabularies consumed by the grouping engine.

use crate::domain::ticket::{Priority, Status};
use serde::{Deserialize, Serialize};

/// Presentation marker. The engine only passes these through; what they
/// look like is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Backlog,
    Todo,
    InProgress,
    Done,
    Cancelled,
    NoPriority,
    LowPriority,
    MediumPriority,
    HighPriority,
    UrgentPriority,
    /// Column header variant of the urgent marker
    UrgentColor,
}

/// One entry of the priority column list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityLevel {
    /// Code this entry claims to represent
    pub priority_level: Priority,
    pub name: &'static str,
    pub icon: Icon,
}

/// Priority columns in board order. This is not numeric order, and the
/// declared levels (0, 4, 2, 3, 1) differ from list positions (0..=4).
pub const PRIORITY_LEVELS: [PriorityLevel; 5] = [
    PriorityLevel {
        priority_level: Priority::NONE,
        name: "No priority",
        icon: Icon::NoPriority,
    },
    PriorityLevel {
        priority_level: Priority::URGENT,
        name: "Urgent",
        icon: Icon::UrgentColor,
    },
    PriorityLevel {
        priority_level: Priority::MEDIUM,
        name: "Medium",
        icon: Icon::MediumPriority,
    },
    PriorityLevel {
        priority_level: Priority::HIGH,
        name: "High",
        icon: Icon::HighPriority,
    },
    PriorityLevel {
        priority_level: Priority::LOW,
        name: "Low",
        icon: Icon::LowPriority,
    },
];

/// Header icon for a status column
pub fn status_icon(status: &Status) -> Option<Icon> {
    match status {
        Status::Backlog => Some(Icon::Backlog),
        Status::Todo => Some(Icon::Todo),
        Status::InProgress => Some(Icon::InProgress),
        Status::Done => Some(Icon::Done),
        Status::Cancelled => Some(Icon::Cancelled),
        Status::Other(_) => None,
    }
}

/// Card marker keyed by numeric priority code
pub fn priority_marker(priority: Priority) -> Option<Icon> {
    match priority.code() {
        0 => Some(Icon::NoPriority),
        1 => Some(Icon::LowPriority),
        2 => Some(Icon::MediumPriority),
        3 => Some(Icon::HighPriority),
        4 => Some(Icon::UrgentPriority),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_levels_order() {
        let names: Vec<&str> = PRIORITY_LEVELS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["No priority", "Urgent", "Medium", "High", "Low"]);

        let declared: Vec<u8> = PRIORITY_LEVELS
            .iter()
            .map(|p| p.priority_level.code())
            .collect();
        assert_eq!(declared, [0, 4, 2, 3, 1]);
    }

    #[test]
    fn test_priority_marker() {
        assert_eq!(priority_marker(Priority::NONE), Some(Icon::NoPriority));
        assert_eq!(priority_marker(Priority::URGENT), Some(Icon::UrgentPriority));
        assert_eq!(priority_marker(Priority::new(9)), None);
    }

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(&Status::Done), Some(Icon::Done));
        assert_eq!(status_icon(&Status::Other("Paused".to_string())), None);
    }
}
