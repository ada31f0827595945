//! Allocation logic for the Split Allocation Engine.
//!
//! This module contains the computation core: decimal money helpers, the
//! remainder-safe allocator that makes rounded shares sum exactly to their
//! total, the weighting strategies (equal, explicit, presence-day), the
//! presence-day calculator over calendar absence intervals, and the split
//! orchestrator that ties them together.

mod allocator;
mod money;
mod presence;
mod split;
mod weights;

pub use allocator::{AllocationResult, allocate};
pub use money::{
    CURRENCY_SCALE, ceil_to, floor_to, format_currency, percentage, ratio, round_currency,
    round_to,
};
pub use presence::{calculate_presence_days, days_between_inclusive};
pub use split::{
    ComputedSplit, compute_custom_split, compute_equal_split, compute_percentage_split,
    compute_presence_day_split, compute_split,
};
pub use weights::{RescaleOutcome, equal_weights, presence_weights, rescale_weights};
