//! Absence interval model.
//!
//! This module defines the [`AbsenceInterval`] struct representing an
//! approved leave record: a closed date range during which a member is
//! excused from presence-based cost responsibility.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A closed, inclusive date range during which a member is absent.
///
/// Multiple intervals may exist for the same member and may overlap each
/// other; the presence calculator merges overlaps before counting days.
///
/// # Example
///
/// ```
/// use split_engine::models::AbsenceInterval;
/// use chrono::NaiveDate;
///
/// let absence = AbsenceInterval {
///     member_id: "member_001".to_string(),
///     start: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
/// };
/// assert!(absence.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceInterval {
    /// The member this absence belongs to.
    pub member_id: String,
    /// The first day of the absence (inclusive).
    pub start: NaiveDate,
    /// The last day of the absence (inclusive).
    pub end: NaiveDate,
}

impl AbsenceInterval {
    /// Checks the `start <= end` invariant.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the interval is well-formed, or
    /// [`EngineError::InvalidAbsenceInterval`] otherwise.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start > self.end {
            return Err(EngineError::InvalidAbsenceInterval {
                member_id: self.member_id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns true if this interval intersects the given closed range.
    pub fn intersects(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        self.start <= range_end && self.end >= range_start
    }

    /// Clips this interval to the given closed range.
    ///
    /// # Returns
    ///
    /// The overlapping `(start, end)` pair, or `None` if the interval does
    /// not intersect the range.
    pub fn clip(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let overlap_start = self.start.max(range_start);
        let overlap_end = self.end.min(range_end);
        if overlap_start <= overlap_end {
            Some((overlap_start, overlap_end))
        } else {
            None
        }
    }
}
