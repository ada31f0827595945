//! Request types for the Split Allocation Engine API.
//!
//! This module defines the JSON request structures for the `/split` and
//! `/presence` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AbsenceInterval, ParticipantWeight, SplitStrategy};

/// Request body for the `/split` endpoint.
///
/// Contains the total amount to divide and the weighting scheme to divide
/// it under, tagged by split type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// The total amount to divide.
    pub total_amount: Decimal,
    /// The weighting scheme and its data.
    pub split: SplitSpecRequest,
}

/// The weighting scheme of a split request, tagged by `type`.
///
/// An unknown `type` value or a `presence_days` request missing its
/// calendar context fails deserialization and surfaces as a 400 before any
/// engine code runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SplitSpecRequest {
    /// Equal shares across the listed participants.
    Equal {
        /// The participants, in output order.
        participants: Vec<String>,
    },
    /// Caller-supplied per-participant amounts.
    Custom {
        /// The participants and their amounts, in output order.
        entries: Vec<WeightEntryRequest>,
    },
    /// Caller-supplied per-participant percentage points.
    Percentage {
        /// The participants and their percentages, in output order.
        entries: Vec<WeightEntryRequest>,
    },
    /// Shares weighted by presence days within a date range.
    PresenceDays {
        /// The room members, in output order.
        members: Vec<String>,
        /// Approved absence intervals for the room.
        #[serde(default)]
        absences: Vec<AbsenceIntervalRequest>,
        /// The first day of the billing range (inclusive).
        range_start: NaiveDate,
        /// The last day of the billing range (inclusive).
        range_end: NaiveDate,
    },
}

/// One participant/weight pair in a split request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntryRequest {
    /// The participant the weight belongs to.
    pub participant_id: String,
    /// The supplied amount or percentage points.
    pub weight: Decimal,
}

/// One absence interval in a split or presence request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceIntervalRequest {
    /// The member this absence belongs to.
    pub member_id: String,
    /// The first day of the absence (inclusive).
    pub start: NaiveDate,
    /// The last day of the absence (inclusive).
    pub end: NaiveDate,
}

/// Request body for the `/presence` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceRequest {
    /// The room members, in output order.
    pub members: Vec<String>,
    /// Approved absence intervals for the room.
    #[serde(default)]
    pub absences: Vec<AbsenceIntervalRequest>,
    /// The first day of the query range (inclusive).
    pub range_start: NaiveDate,
    /// The last day of the query range (inclusive).
    pub range_end: NaiveDate,
}

impl From<WeightEntryRequest> for ParticipantWeight {
    fn from(req: WeightEntryRequest) -> Self {
        ParticipantWeight {
            participant_id: req.participant_id,
            weight: req.weight,
        }
    }
}

impl From<AbsenceIntervalRequest> for AbsenceInterval {
    fn from(req: AbsenceIntervalRequest) -> Self {
        AbsenceInterval {
            member_id: req.member_id,
            start: req.start,
            end: req.end,
        }
    }
}

impl From<SplitSpecRequest> for SplitStrategy {
    fn from(req: SplitSpecRequest) -> Self {
        match req {
            SplitSpecRequest::Equal { participants } => SplitStrategy::Equal { participants },
            SplitSpecRequest::Custom { entries } => SplitStrategy::Custom {
                entries: entries.into_iter().map(Into::into).collect(),
            },
            SplitSpecRequest::Percentage { entries } => SplitStrategy::Percentage {
                entries: entries.into_iter().map(Into::into).collect(),
            },
            SplitSpecRequest::PresenceDays {
                members,
                absences,
                range_start,
                range_end,
            } => SplitStrategy::PresenceDays {
                members,
                absences: absences.into_iter().map(Into::into).collect(),
                range_start,
                range_end,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SplitType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_equal_split_request() {
        let json = r#"{
            "total_amount": "10.00",
            "split": {
                "type": "equal",
                "participants": ["a", "b", "c"]
            }
        }"#;

        let request: SplitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.total_amount, dec("10.00"));
        match request.split {
            SplitSpecRequest::Equal { participants } => {
                assert_eq!(participants, vec!["a", "b", "c"]);
            }
            other => panic!("Expected equal split, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_custom_split_request() {
        let json = r#"{
            "total_amount": "50.00",
            "split": {
                "type": "custom",
                "entries": [
                    {"participant_id": "a", "weight": "20"},
                    {"participant_id": "b", "weight": "20"}
                ]
            }
        }"#;

        let request: SplitRequest = serde_json::from_str(json).unwrap();
        match request.split {
            SplitSpecRequest::Custom { entries } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].participant_id, "a");
                assert_eq!(entries[0].weight, dec("20"));
            }
            other => panic!("Expected custom split, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_presence_days_split_request() {
        let json = r#"{
            "total_amount": "80.00",
            "split": {
                "type": "presence_days",
                "members": ["x", "y"],
                "absences": [
                    {"member_id": "x", "start": "2024-01-03", "end": "2024-01-04"}
                ],
                "range_start": "2024-01-01",
                "range_end": "2024-01-10"
            }
        }"#;

        let request: SplitRequest = serde_json::from_str(json).unwrap();
        let strategy: SplitStrategy = request.split.into();
        assert_eq!(strategy.split_type(), SplitType::PresenceDays);
        assert_eq!(strategy.participant_count(), 2);
    }

    #[test]
    fn test_presence_days_absences_default_to_empty() {
        let json = r#"{
            "total_amount": "80.00",
            "split": {
                "type": "presence_days",
                "members": ["x"],
                "range_start": "2024-01-01",
                "range_end": "2024-01-10"
            }
        }"#;

        let request: SplitRequest = serde_json::from_str(json).unwrap();
        match request.split {
            SplitSpecRequest::PresenceDays { absences, .. } => assert!(absences.is_empty()),
            other => panic!("Expected presence_days split, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_split_type_fails_deserialization() {
        let json = r#"{
            "total_amount": "10.00",
            "split": {
                "type": "by_mood",
                "participants": ["a"]
            }
        }"#;

        let result: Result<SplitRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_presence_days_without_range_fails_deserialization() {
        let json = r#"{
            "total_amount": "10.00",
            "split": {
                "type": "presence_days",
                "members": ["x"]
            }
        }"#;

        let result: Result<SplitRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_presence_request() {
        let json = r#"{
            "members": ["x", "y"],
            "absences": [],
            "range_start": "2024-01-01",
            "range_end": "2024-01-31"
        }"#;

        let request: PresenceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.members.len(), 2);
        assert!(request.absences.is_empty());
    }
}
