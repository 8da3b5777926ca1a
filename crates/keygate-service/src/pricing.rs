//! Grant schedule: payment amount in, entitlement duration out.

use keygate_chain::transfer::{MINOR_UNITS_PER_USDT, TokenAmount};

/// Entitlement tiers in minor units, evaluated highest-threshold-first.
const GRANT_TIERS: [(u128, u32); 4] = [
    (50 * MINOR_UNITS_PER_USDT, 365),
    (20 * MINOR_UNITS_PER_USDT, 180),
    (10 * MINOR_UNITS_PER_USDT, 90),
    (5 * MINOR_UNITS_PER_USDT, 30),
];

/// Minimum accepted payment in display units.
pub const MINIMUM_USDT: u32 = 5;

/// Days of entitlement granted by a payment, or `None` when the amount
/// is below the minimum. Pure and total over all amounts.
pub fn grant_days(amount: TokenAmount) -> Option<u32> {
    let minor = amount.minor_units();
    GRANT_TIERS
        .iter()
        .find(|(threshold, _)| minor >= *threshold)
        .map(|(_, days)| *days)
}
