/// An expected label and its color (six hex digits, no `#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: &'static str,
    pub color: &'static str,
}

const fn label(name: &'static str, color: &'static str) -> LabelSpec {
    LabelSpec { name, color }
}

/// Labels every repository must carry, with their colors.
pub const STANDARD_LABELS: [LabelSpec; 12] = [
    label("bug", "b60205"),
    label("security", "b60205"),
    label("documentation", "0e8a16"),
    label("fix", "0e8a16"),
    label("new-feature", "0e8a16"),
    label("P1", "ffa32c"),
    label("P2", "ffa32c"),
    label("P3", "ffa32c"),
    label("P5", "ffa32c"),
    label("proposal", "1d76db"),
    label("question", "1d76db"),
    label("support-request", "1d76db"),
];

/// Columns every tracking project must have, in creation order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Backlog", "In Progress", "Blocked", "Completed"];

/// Column names seen on older boards, paired with their canonical name.
pub const LEGACY_COLUMNS: [(&str, &str); 1] = [("Complete", "Completed")];

/// Milestone title used by `init` when none is given.
pub const DEFAULT_MILESTONE: &str = "Version 1.0";

pub fn canonical_column(name: &str) -> Option<&'static str> {
    LEGACY_COLUMNS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, canonical)| *canonical)
}
