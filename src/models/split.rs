//! Split request and result models.
//!
//! This module defines the [`SplitStrategy`] enum selecting how weights are
//! derived, and the [`SplitResult`] / [`SplitShare`] types describing the
//! per-participant monetary breakdown the engine produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AbsenceInterval;

/// Identifies which weighting scheme produced a split.
///
/// # Example
///
/// ```
/// use split_engine::models::SplitType;
///
/// let split_type = SplitType::PresenceDays;
/// assert_eq!(serde_json::to_string(&split_type).unwrap(), "\"presence_days\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Every participant carries weight 1.
    Equal,
    /// Caller-supplied per-participant amounts.
    Custom,
    /// Caller-supplied per-participant percentage points.
    Percentage,
    /// Weights derived from calendar presence days.
    PresenceDays,
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitType::Equal => write!(f, "equal"),
            SplitType::Custom => write!(f, "custom"),
            SplitType::Percentage => write!(f, "percentage"),
            SplitType::PresenceDays => write!(f, "presence_days"),
        }
    }
}

/// A participant paired with an explicit weight.
///
/// The weight's dimension depends on the strategy: a raw currency amount for
/// custom splits, percentage points for percentage splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantWeight {
    /// The participant the weight belongs to.
    pub participant_id: String,
    /// The participant's relative share before normalization.
    pub weight: Decimal,
}

/// Selects the weighting scheme and carries the data it needs.
///
/// One variant per split type with exhaustive matching in the orchestrator,
/// so an unsupported split type cannot be expressed and a presence-day split
/// cannot be constructed without its calendar context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Equal shares across the listed participants.
    Equal {
        /// The participants, in output order.
        participants: Vec<String>,
    },
    /// Caller-supplied per-participant amounts, rescaled toward the total
    /// when they drift off target.
    Custom {
        /// The participants and their amounts, in output order.
        entries: Vec<ParticipantWeight>,
    },
    /// Caller-supplied per-participant percentage points, rescaled toward
    /// 100 when they drift off target.
    Percentage {
        /// The participants and their percentages, in output order.
        entries: Vec<ParticipantWeight>,
    },
    /// Shares weighted by each member's presence days within a date range.
    PresenceDays {
        /// The room members, in output order.
        members: Vec<String>,
        /// Approved absence intervals for the room.
        absences: Vec<AbsenceInterval>,
        /// The first day of the billing range (inclusive).
        range_start: NaiveDate,
        /// The last day of the billing range (inclusive).
        range_end: NaiveDate,
    },
}

impl SplitStrategy {
    /// Returns the [`SplitType`] tag for this strategy.
    pub fn split_type(&self) -> SplitType {
        match self {
            SplitStrategy::Equal { .. } => SplitType::Equal,
            SplitStrategy::Custom { .. } => SplitType::Custom,
            SplitStrategy::Percentage { .. } => SplitType::Percentage,
            SplitStrategy::PresenceDays { .. } => SplitType::PresenceDays,
        }
    }

    /// Returns the number of participants the strategy will produce shares for.
    pub fn participant_count(&self) -> usize {
        match self {
            SplitStrategy::Equal { participants } => participants.len(),
            SplitStrategy::Custom { entries } | SplitStrategy::Percentage { entries } => {
                entries.len()
            }
            SplitStrategy::PresenceDays { members, .. } => members.len(),
        }
    }
}

/// One participant's share of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitShare {
    /// The participant the share belongs to.
    pub participant_id: String,
    /// The weight the share was derived from (after any rescaling).
    pub weight: Decimal,
    /// The allocated amount, rounded to currency precision.
    pub amount: Decimal,
}

/// The per-participant monetary breakdown of a split.
///
/// Invariant: `shares` is parallel to the participant order of the request,
/// and the share amounts sum exactly to `total_amount` (to currency
/// precision) whenever `weight_total` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// The weighting scheme that produced this split.
    pub split_type: SplitType,
    /// The total amount that was divided.
    pub total_amount: Decimal,
    /// The ordered per-participant shares.
    pub shares: Vec<SplitShare>,
    /// The sum of all weights handed to the allocator.
    pub weight_total: Decimal,
    /// The rounding drift reconciled into a single share (zero when the
    /// independently rounded shares already summed to the total).
    pub remainder: Decimal,
    /// The participant the remainder was attached to, if any.
    pub adjusted_participant: Option<String>,
    /// Whether caller-supplied weights were rescaled to repair input drift.
    pub rescale_applied: bool,
}

impl SplitResult {
    /// Returns the sum of all share amounts.
    pub fn allocated_total(&self) -> Decimal {
        self.shares.iter().map(|s| s.amount).sum()
    }
}
