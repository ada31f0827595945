//! Remainder-safe proportional allocation.
//!
//! Rounding every share of a split independently is unavoidable (currency
//! has finite precision), but the sum of independently rounded shares can
//! differ from the total by one or more minimal units. Silently losing or
//! gaining money during a split is unacceptable in a shared-ledger system,
//! so the accumulated drift is reconciled deterministically into a single
//! share instead of being left to accumulate as missing money.

use rust_decimal::Decimal;

use super::money::round_to;

/// The outcome of a remainder-safe allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    /// Per-weight amounts, rounded to the requested scale. Parallel to the
    /// input weights; sums exactly to the requested total whenever the
    /// weight sum is positive.
    pub amounts: Vec<Decimal>,
    /// The rounding drift that was reconciled into one amount (zero when the
    /// independently rounded amounts already summed to the total).
    pub remainder: Decimal,
    /// The index the remainder was added to, if an adjustment ran.
    pub adjusted_index: Option<usize>,
}

impl AllocationResult {
    fn zeros(len: usize) -> Self {
        Self {
            amounts: vec![Decimal::ZERO; len],
            remainder: Decimal::ZERO,
            adjusted_index: None,
        }
    }

    /// Returns the sum of all allocated amounts.
    pub fn allocated_total(&self) -> Decimal {
        self.amounts.iter().copied().sum()
    }
}

/// Divides `total` across `weights` so the rounded parts sum exactly to the whole.
///
/// Each amount is `total * weight / weight_sum`, rounded half-up to `scale`
/// fractional digits. The drift between the rounded sum and the true total
/// is then added to the first non-zero amount, keeping the adjustment
/// visually attached to a participant who already carries a share. If every
/// amount rounded to zero but the drift is non-zero, the adjustment falls
/// back to the first positive-weight entry so no money is lost.
///
/// This function never fails: a non-positive weight sum (including an empty
/// weight list) yields an all-zero result of the same length, since callers
/// may legitimately hit that case (e.g., a presence-day split over a range
/// where every member was absent the whole time).
///
/// # Arguments
///
/// * `total` - The amount to divide
/// * `weights` - Non-negative relative shares, one per participant
/// * `scale` - Fractional digits to round each amount to
///
/// # Example
///
/// ```
/// use split_engine::allocation::allocate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = Decimal::from_str("10.00").unwrap();
/// let one = Decimal::ONE;
/// let result = allocate(total, &[one, one, one], 2);
///
/// assert_eq!(result.amounts.len(), 3);
/// assert_eq!(result.allocated_total(), total);
/// assert_eq!(result.amounts[0], Decimal::from_str("3.34").unwrap());
/// ```
pub fn allocate(total: Decimal, weights: &[Decimal], scale: u32) -> AllocationResult {
    let weight_sum: Decimal = weights.iter().copied().sum();
    if weight_sum <= Decimal::ZERO {
        return AllocationResult::zeros(weights.len());
    }

    // Full-precision unit price; rounding happens per share only.
    let unit = total / weight_sum;

    let mut amounts: Vec<Decimal> = weights.iter().map(|w| round_to(unit * w, scale)).collect();

    let allocated: Decimal = amounts.iter().copied().sum();
    let remainder = total - allocated;
    if remainder.is_zero() {
        return AllocationResult {
            amounts,
            remainder,
            adjusted_index: None,
        };
    }

    let target = amounts
        .iter()
        .position(|a| !a.is_zero())
        .or_else(|| weights.iter().position(|w| *w > Decimal::ZERO));

    if let Some(index) = target {
        amounts[index] += remainder;
        AllocationResult {
            amounts,
            remainder,
            adjusted_index: Some(index),
        }
    } else {
        AllocationResult {
            amounts,
            remainder,
            adjusted_index: None,
        }
    }
}
