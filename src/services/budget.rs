//! Daily/total budget derivation.
//!
//! The two directions are deliberately asymmetric at the call sites: when the
//! trip dates change, the daily budget is the stable anchor and the total is
//! recomputed from it with the new day count; when the total-budget control
//! moves, the total is the anchor and the daily budget is recomputed. A zero
//! or unknown duration is treated as a single day so neither direction ever
//! divides or multiplies by zero. Totals saturate at `u32::MAX`; both inputs
//! arrive straight from the API, so the product can exceed 32 bits.

pub struct BudgetMath;

impl BudgetMath {
    pub fn total_from_daily(daily: u32, days: i64) -> u32 {
        let total = daily as u64 * days.max(1) as u64;
        total.min(u32::MAX as u64) as u32
    }

    pub fn daily_from_total(total: u32, days: i64) -> u32 {
        let days = days.max(1) as f64;
        (total as f64 / days).round() as u32
    }
}
