//! Split orchestration.
//!
//! The single entry point that selects a weighting strategy, derives the
//! weight list, and runs the remainder-safe allocator to produce the final
//! per-participant breakdown, recording every decision as an audit step.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SplitConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AbsenceInterval, AuditStep, AuditWarning, ParticipantWeight, SplitResult, SplitShare,
    SplitStrategy, SplitType,
};

use super::allocator::allocate;
use super::money::ratio;
use super::presence::calculate_presence_days;
use super::weights::{RescaleOutcome, equal_weights, presence_weights, rescale_weights};

/// The result of computing a split, including the audit record.
#[derive(Debug, Clone)]
pub struct ComputedSplit {
    /// The per-participant breakdown.
    pub result: SplitResult,
    /// The audit steps recording this computation, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised during the computation (input rescaled, degenerate
    /// allocation).
    pub warnings: Vec<AuditWarning>,
}

/// Computes a split using the strategy's weighting scheme.
///
/// Dispatches on the [`SplitStrategy`] variant; every split type is handled
/// exhaustively. Input validation (negative total, empty participants,
/// negative weights, reversed date ranges) runs before any allocation math.
///
/// # Example
///
/// ```
/// use split_engine::allocation::compute_split;
/// use split_engine::config::SplitConfig;
/// use split_engine::models::SplitStrategy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let strategy = SplitStrategy::Equal {
///     participants: vec!["a".to_string(), "b".to_string(), "c".to_string()],
/// };
/// let total = Decimal::from_str("10.00").unwrap();
/// let computed = compute_split(total, &strategy, &SplitConfig::default()).unwrap();
///
/// assert_eq!(computed.result.allocated_total(), total);
/// ```
pub fn compute_split(
    total_amount: Decimal,
    strategy: &SplitStrategy,
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    match strategy {
        SplitStrategy::Equal { participants } => {
            compute_equal_split(total_amount, participants, config)
        }
        SplitStrategy::Custom { entries } => compute_custom_split(total_amount, entries, config),
        SplitStrategy::Percentage { entries } => {
            compute_percentage_split(total_amount, entries, config)
        }
        SplitStrategy::PresenceDays {
            members,
            absences,
            range_start,
            range_end,
        } => compute_presence_day_split(
            total_amount,
            members,
            absences,
            *range_start,
            *range_end,
            config,
        ),
    }
}

/// Splits a total into equal shares, one per participant.
pub fn compute_equal_split(
    total_amount: Decimal,
    participants: &[String],
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    validate_total(total_amount)?;
    if participants.is_empty() {
        return Err(EngineError::EmptyParticipants);
    }

    let weights = equal_weights(participants.len());
    let derivation = AuditStep {
        step_number: 1,
        rule_id: "equal_weights".to_string(),
        rule_name: "Equal Weight Assignment".to_string(),
        input: serde_json::json!({ "participants": participants.len() }),
        output: serde_json::json!({ "weights": decimal_strings(&weights) }),
        reasoning: format!(
            "Assigned weight 1 to each of {} participants",
            participants.len()
        ),
    };

    finish_split(
        SplitType::Equal,
        total_amount,
        participants.to_vec(),
        weights,
        None,
        vec![derivation],
        config,
    )
}

/// Splits a total according to caller-supplied per-participant amounts.
///
/// If the supplied amounts do not sum to the total within the configured
/// tolerance, every amount is rescaled by `total / supplied_sum` before
/// allocation, repairing client-side rounding drift in the input.
pub fn compute_custom_split(
    total_amount: Decimal,
    entries: &[ParticipantWeight],
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    explicit_split(
        SplitType::Custom,
        total_amount,
        entries,
        total_amount,
        "custom_amounts",
        "Custom Amount Weights",
        config,
    )
}

/// Splits a total according to caller-supplied percentage points.
///
/// Percentages off 100 beyond the configured tolerance are rescaled toward
/// 100 before allocation; the allocator's proportional division then carries
/// the percentage-to-amount conversion.
pub fn compute_percentage_split(
    total_amount: Decimal,
    entries: &[ParticipantWeight],
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    explicit_split(
        SplitType::Percentage,
        total_amount,
        entries,
        Decimal::ONE_HUNDRED,
        "percentage_points",
        "Percentage Point Weights",
        config,
    )
}

/// Splits a total in proportion to each member's presence days in a range.
///
/// Members absent for the whole range carry zero weight and receive a zero
/// share; if every member was absent the whole time, the defined outcome is
/// an all-zero split, not an error.
pub fn compute_presence_day_split(
    total_amount: Decimal,
    members: &[String],
    absences: &[AbsenceInterval],
    range_start: NaiveDate,
    range_end: NaiveDate,
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    validate_total(total_amount)?;
    if members.is_empty() {
        return Err(EngineError::EmptyParticipants);
    }

    let presences = calculate_presence_days(members, absences, range_start, range_end)?;
    let weights = presence_weights(&presences);

    let per_member: Vec<serde_json::Value> = presences
        .iter()
        .map(|p| {
            serde_json::json!({
                "member_id": p.member_id,
                "absent_days": p.absent_days,
                "present_days": p.present_days,
            })
        })
        .collect();
    let derivation = AuditStep {
        step_number: 1,
        rule_id: "presence_day_weights".to_string(),
        rule_name: "Presence Day Weight Derivation".to_string(),
        input: serde_json::json!({
            "range_start": range_start.to_string(),
            "range_end": range_end.to_string(),
            "members": members.len(),
            "absence_records": absences.len(),
        }),
        output: serde_json::json!({ "presence": per_member }),
        reasoning: format!(
            "Weighted {} members by presence days over {} total days",
            members.len(),
            presences.first().map(|p| p.total_days).unwrap_or(0)
        ),
    };

    finish_split(
        SplitType::PresenceDays,
        total_amount,
        members.to_vec(),
        weights,
        None,
        vec![derivation],
        config,
    )
}

/// Shared path for the two explicit-weight strategies.
fn explicit_split(
    split_type: SplitType,
    total_amount: Decimal,
    entries: &[ParticipantWeight],
    target: Decimal,
    rule_id: &str,
    rule_name: &str,
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    validate_total(total_amount)?;
    if entries.is_empty() {
        return Err(EngineError::EmptyParticipants);
    }
    for entry in entries {
        if entry.weight < Decimal::ZERO {
            return Err(EngineError::NegativeWeight {
                participant_id: entry.participant_id.clone(),
                weight: entry.weight,
            });
        }
    }

    let participants: Vec<String> = entries.iter().map(|e| e.participant_id.clone()).collect();
    let supplied: Vec<Decimal> = entries.iter().map(|e| e.weight).collect();

    let entry_values: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "participant_id": e.participant_id,
                "weight": e.weight.normalize().to_string(),
            })
        })
        .collect();
    let derivation = AuditStep {
        step_number: 1,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({ "entries": entry_values }),
        output: serde_json::json!({ "weights": decimal_strings(&supplied) }),
        reasoning: format!(
            "Took caller-supplied weights for {} participants",
            entries.len()
        ),
    };

    let rescale = rescale_weights(&supplied, target, config.rescale_tolerance);
    let weights = rescale.weights.clone();

    finish_split(
        split_type,
        total_amount,
        participants,
        weights,
        Some((rescale, target)),
        vec![derivation],
        config,
    )
}

/// Runs the allocator and assembles the result and audit record.
fn finish_split(
    split_type: SplitType,
    total_amount: Decimal,
    participants: Vec<String>,
    weights: Vec<Decimal>,
    rescale: Option<(RescaleOutcome, Decimal)>,
    mut audit_steps: Vec<AuditStep>,
    config: &SplitConfig,
) -> EngineResult<ComputedSplit> {
    let mut warnings = Vec::new();
    let mut step_number = audit_steps.len() as u32;

    let rescale_applied = match &rescale {
        Some((outcome, target)) if outcome.rescaled => {
            let factor = ratio(*target, outcome.input_sum);
            step_number += 1;
            audit_steps.push(AuditStep {
                step_number,
                rule_id: "input_rescale".to_string(),
                rule_name: "Input Weight Rescaling".to_string(),
                input: serde_json::json!({
                    "input_sum": outcome.input_sum.normalize().to_string(),
                    "target": target.normalize().to_string(),
                    "tolerance": config.rescale_tolerance.normalize().to_string(),
                }),
                output: serde_json::json!({
                    "factor": factor.normalize().to_string(),
                    "weights": decimal_strings(&weights),
                }),
                reasoning: format!(
                    "Supplied weights summed to {}, expected {}; rescaled every weight by {}",
                    outcome.input_sum.normalize(),
                    target.normalize(),
                    factor.normalize()
                ),
            });
            warnings.push(AuditWarning {
                code: "INPUT_RESCALED".to_string(),
                message: format!(
                    "Supplied weights summed to {} instead of {}; rescaled to match",
                    outcome.input_sum.normalize(),
                    target.normalize()
                ),
                severity: "low".to_string(),
            });
            true
        }
        _ => false,
    };

    let allocation = allocate(total_amount, &weights, config.currency_scale);
    let weight_total: Decimal = weights.iter().copied().sum();
    let unit = ratio(total_amount, weight_total);

    step_number += 1;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "proportional_allocation".to_string(),
        rule_name: "Proportional Allocation".to_string(),
        input: serde_json::json!({
            "total_amount": total_amount.normalize().to_string(),
            "weight_total": weight_total.normalize().to_string(),
            "unit": unit.normalize().to_string(),
        }),
        output: serde_json::json!({ "amounts": decimal_strings(&allocation.amounts) }),
        reasoning: format!(
            "Divided {} across weight total {} and rounded each share to {} places",
            total_amount.normalize(),
            weight_total.normalize(),
            config.currency_scale
        ),
    });

    if weight_total <= Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "DEGENERATE_ALLOCATION".to_string(),
            message: "Total weight is zero; every share is zero".to_string(),
            severity: "medium".to_string(),
        });
    }

    let adjusted_participant = allocation.adjusted_index.map(|index| {
        let participant_id = participants[index].clone();
        step_number += 1;
        audit_steps.push(AuditStep {
            step_number,
            rule_id: "remainder_adjustment".to_string(),
            rule_name: "Remainder Adjustment".to_string(),
            input: serde_json::json!({
                "remainder": allocation.remainder.normalize().to_string(),
                "participant_id": participant_id,
            }),
            output: serde_json::json!({
                "adjusted_amount": allocation.amounts[index].normalize().to_string(),
            }),
            reasoning: format!(
                "Added rounding remainder of {} to the first non-zero share ({})",
                allocation.remainder.normalize(),
                participant_id
            ),
        });
        participant_id
    });

    let shares = participants
        .into_iter()
        .zip(weights.iter().copied())
        .zip(allocation.amounts.iter().copied())
        .map(|((participant_id, weight), amount)| SplitShare {
            participant_id,
            weight,
            amount,
        })
        .collect();

    Ok(ComputedSplit {
        result: SplitResult {
            split_type,
            total_amount,
            shares,
            weight_total,
            remainder: allocation.remainder,
            adjusted_participant,
            rescale_applied,
        },
        audit_steps,
        warnings,
    })
}

fn validate_total(total_amount: Decimal) -> EngineResult<()> {
    if total_amount < Decimal::ZERO {
        return Err(EngineError::InvalidTotalAmount {
            amount: total_amount,
        });
    }
    Ok(())
}

fn decimal_strings(values: &[Decimal]) -> Vec<String> {
    values.iter().map(|v| v.normalize().to_string()).collect()
}
