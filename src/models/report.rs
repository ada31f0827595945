//! Report models for the Split Allocation Engine.
//!
//! This module contains the API-level envelopes returned to callers: the
//! [`SplitReport`] wrapping a split result with identifiers and an audit
//! trace, and the [`PresenceReport`] wrapping presence-day summaries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MemberPresence, SplitResult};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// split computation (weight derivation, rescaling, allocation, remainder
/// adjustment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during computation.
///
/// Warnings indicate conditions that don't prevent computation but are worth
/// surfacing, such as silently repaired input drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a split computation.
///
/// Records every decision made during the computation for transparency,
/// so that a ledger reviewer can reconstruct how each share was derived.
///
/// # Example
///
/// ```
/// use split_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of computation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during computation.
    pub warnings: Vec<AuditWarning>,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a split computation as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The split breakdown.
    #[serde(flatten)]
    pub result: SplitResult,
    /// Complete audit trace of computation decisions.
    pub audit_trace: AuditTrace,
}

/// The result of a presence-day query as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceReport {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The first day of the query range (inclusive).
    pub range_start: NaiveDate,
    /// The last day of the query range (inclusive).
    pub range_end: NaiveDate,
    /// Inclusive day count of the query range.
    pub total_days: i64,
    /// Per-member presence summaries, in request order.
    pub members: Vec<MemberPresence>,
}

impl SplitReport {
    /// Returns the sum of all share amounts in the report.
    pub fn allocated_total(&self) -> Decimal {
        self.result.allocated_total()
    }
}
