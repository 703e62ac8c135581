use std::fmt;

/// The three renderings of the current wall-clock time the menu offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampKind {
    Date,
    Time,
    DateTime,
}

/// Everything a tray menu selection can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    Copy(StampKind),
    Quit,
}

impl TrayAction {
    /// Get the stable menu-item identifier for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            TrayAction::Copy(StampKind::Date) => "copy-date",
            TrayAction::Copy(StampKind::Time) => "copy-time",
            TrayAction::Copy(StampKind::DateTime) => "copy-datetime",
            TrayAction::Quit => "quit",
        }
    }

    /// Human-readable menu label for this action
    pub fn label(&self) -> &'static str {
        match self {
            TrayAction::Copy(StampKind::Date) => "Copy Date",
            TrayAction::Copy(StampKind::Time) => "Copy Time",
            TrayAction::Copy(StampKind::DateTime) => "Copy Date and Time",
            TrayAction::Quit => "Exit",
        }
    }

    /// Resolve a menu-item identifier back to its action
    pub fn from_id(id: &str) -> Option<TrayAction> {
        match id {
            "copy-date" => Some(TrayAction::Copy(StampKind::Date)),
            "copy-time" => Some(TrayAction::Copy(StampKind::Time)),
            "copy-datetime" => Some(TrayAction::Copy(StampKind::DateTime)),
            "quit" => Some(TrayAction::Quit),
            _ => None,
        }
    }

    /// List all actions, in menu order
    pub fn all() -> &'static [TrayAction] {
        &[
            TrayAction::Copy(StampKind::Date),
            TrayAction::Copy(StampKind::Time),
            TrayAction::Copy(StampKind::DateTime),
            TrayAction::Quit,
        ]
    }
}

impl fmt::Display for TrayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for action in TrayAction::all() {
            assert_eq!(TrayAction::from_id(action.as_str()), Some(*action));
            assert_eq!(action.to_string(), action.as_str());
        }
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: Vec<_> = TrayAction::all().iter().map(|a| a.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert_eq!(TrayAction::from_id("copy-epoch"), None);
        assert_eq!(TrayAction::from_id(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TrayAction::Copy(StampKind::Date).label(), "Copy Date");
        assert_eq!(TrayAction::Copy(StampKind::Time).label(), "Copy Time");
        assert_eq!(
            TrayAction::Copy(StampKind::DateTime).label(),
            "Copy Date and Time"
        );
        assert_eq!(TrayAction::Quit.label(), "Exit");
    }
}
