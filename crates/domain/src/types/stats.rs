//! Dashboard statistics
//!
//! Derived from the full ticket set on every load; never persisted.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Summary counts shown above the staff dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TicketStats {
    /// Number of tickets visible to the caller
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total: usize,

    /// Tickets in `new` or `in_progress`
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub open: usize,

    /// Resolved tickets created on the current UTC day
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub resolved_today: usize,
}
