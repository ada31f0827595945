//! Weighting strategies feeding the remainder-safe allocator.
//!
//! Three ways to produce the weight list the allocator consumes: equal
//! (weight 1 per participant), explicit (caller-supplied amounts or
//! percentages, rescaled when they drift off target), and presence-day
//! (weights from calendar attendance). Each strategy produces weights in
//! the same order as the participant list; participants are never reordered
//! or dropped.

use rust_decimal::Decimal;

use crate::models::MemberPresence;

/// Weight 1 for every participant.
///
/// Used when no explicit distribution is supplied.
pub fn equal_weights(count: usize) -> Vec<Decimal> {
    vec![Decimal::ONE; count]
}

/// The outcome of normalizing caller-supplied weights toward a target sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescaleOutcome {
    /// The weights handed to the allocator (rescaled when drift exceeded
    /// the tolerance, otherwise the input unchanged).
    pub weights: Vec<Decimal>,
    /// Whether rescaling was applied.
    pub rescaled: bool,
    /// The sum of the weights as supplied by the caller.
    pub input_sum: Decimal,
}

/// Rescales explicit weights so they sum to the expected target.
///
/// Client-side rounding often leaves supplied amounts or percentages a cent
/// or two off their target (the total amount for custom splits, 100 for
/// percentage splits). When the drift exceeds `tolerance`, every weight is
/// multiplied by `target / input_sum`, repairing the input itself. This is
/// distinct from the allocator's remainder step, which repairs *output*
/// drift after rounding.
///
/// A zero input sum cannot be rescaled and is passed through unchanged; the
/// allocator then yields its defined all-zero result.
///
/// # Example
///
/// ```
/// use split_engine::allocation::rescale_weights;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let outcome = rescale_weights(&[dec("20"), dec("20")], dec("50.00"), dec("0.01"));
///
/// assert!(outcome.rescaled);
/// assert_eq!(outcome.weights, vec![dec("25.00"), dec("25.00")]);
/// ```
pub fn rescale_weights(weights: &[Decimal], target: Decimal, tolerance: Decimal) -> RescaleOutcome {
    let input_sum: Decimal = weights.iter().copied().sum();

    if (input_sum - target).abs() <= tolerance || input_sum.is_zero() {
        return RescaleOutcome {
            weights: weights.to_vec(),
            rescaled: false,
            input_sum,
        };
    }

    let factor = target / input_sum;
    RescaleOutcome {
        weights: weights.iter().map(|w| w * factor).collect(),
        rescaled: true,
        input_sum,
    }
}

/// Weights from calendar attendance: one weight per member, equal to the
/// member's presence-day count, in member order.
///
/// Members with zero present days receive zero weight and therefore a zero
/// allocation by construction.
pub fn presence_weights(presences: &[MemberPresence]) -> Vec<Decimal> {
    presences
        .iter()
        .map(|p| Decimal::from(p.present_days))
        .collect()
}
