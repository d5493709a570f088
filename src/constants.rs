//! Global constants for the entity list screen.

/// Maximum total visible row count for which every non-empty category
/// section starts expanded on the first build. Above this, everything
/// starts collapsed.
pub const EXPAND_THRESHOLD: usize = 20;
