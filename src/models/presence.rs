//! Member presence summary model.
//!
//! This module defines the [`MemberPresence`] struct produced by the
//! presence-day calculator for each member of a room.

use serde::{Deserialize, Serialize};

/// Day counts for one member over a query range.
///
/// `present_days` is floored at zero so a member can never show negative
/// presence, and `total_days` is the inclusive day count of the query range
/// (the same for every member of the same query).
///
/// # Example
///
/// ```
/// use split_engine::models::MemberPresence;
///
/// let presence = MemberPresence {
///     member_id: "member_001".to_string(),
///     total_days: 10,
///     absent_days: 2,
///     present_days: 8,
/// };
/// assert_eq!(presence.present_days, presence.total_days - presence.absent_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPresence {
    /// The member these counts belong to.
    pub member_id: String,
    /// Inclusive day count of the query range.
    pub total_days: i64,
    /// Days within the range covered by at least one absence interval.
    pub absent_days: i64,
    /// `max(0, total_days - absent_days)`.
    pub present_days: i64,
}
