//! Stay pricing.

use serde::{Deserialize, Serialize};

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_entity::listing::DateRange;

/// Service fee as a percentage of the nightly total.
pub const SERVICE_FEE_PERCENT: u64 = 12;

/// Flat cleaning fee added to every stay.
pub const CLEANING_FEE: u64 = 50;

/// Itemised price of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub nights: u64,
    /// `price × nights`.
    pub base: u64,
    /// `base × 12%`, rounded half up.
    pub service_fee: u64,
    pub cleaning_fee: u64,
    pub total: u64,
}

/// Highest nightly price a listing may ask.
pub const MAX_NIGHTLY_PRICE: u64 = 1_000_000;

/// Prices a stay at `price_per_night`. Fails with a validation error when
/// the total does not fit in a `u64`.
pub fn quote(price_per_night: u64, stay: &DateRange) -> AppResult<PriceBreakdown> {
    let nights = stay.nights();
    let too_expensive = || AppError::validation("Total price is too large");

    let base = price_per_night.checked_mul(nights).ok_or_else(too_expensive)?;
    let service_fee = base
        .checked_mul(SERVICE_FEE_PERCENT)
        .and_then(|fee| fee.checked_add(50))
        .map(|fee| fee / 100)
        .ok_or_else(too_expensive)?;
    let total = base
        .checked_add(service_fee)
        .and_then(|sum| sum.checked_add(CLEANING_FEE))
        .ok_or_else(too_expensive)?;

    Ok(PriceBreakdown {
        nights,
        base,
        service_fee,
        cleaning_fee: CLEANING_FEE,
        total,
    })
}
