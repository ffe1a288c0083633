use homefax_core::reference::{
    BASE_PREMIUM_SHARE, ENDORSEMENT_PREMIUM_SHARE, OLD_ROOF_FACTOR, OLD_ROOF_SURCHARGE_AGE,
    PERCENTAGE_DEDUCTIBLE_FACTOR, PREMIUM_ANCHORS, SECURITY_DISCOUNT_SHARE,
    SECURITY_SYSTEM_FACTOR,
};
use homefax_core::{Deductible, PremiumBreakdown, StateCode, round_cents};

/// Base annual rate for a dwelling limit: linear between the anchors and
/// clamped to the end values outside them.
pub fn interpolate_base_rate(dwelling: u64) -> f64 {
    let [(x0, y0), (x1, y1)] = PREMIUM_ANCHORS;
    let x = dwelling as f64;
    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Rated annual premium in cents precision.
pub fn rated_premium(
    dwelling: u64,
    deductible: &Deductible,
    has_security_system: bool,
    roof_age: i32,
) -> f64 {
    let mut premium = interpolate_base_rate(dwelling);
    if deductible.is_percentage() {
        premium *= PERCENTAGE_DEDUCTIBLE_FACTOR;
    }
    if has_security_system {
        premium *= SECURITY_SYSTEM_FACTOR;
    }
    if roof_age > OLD_ROOF_SURCHARGE_AGE {
        premium *= OLD_ROOF_FACTOR;
    }
    round_cents(premium)
}

/// Split an annual premium into billed components and apply state tax and fee.
///
/// Each component is rounded to cents before it feeds the next one, so the
/// subtotal and total identities hold exactly at cent precision.
pub fn premium_breakdown(
    annual_premium: f64,
    has_security_system: bool,
    state: StateCode,
) -> PremiumBreakdown {
    let rates = state.rates();
    let base_premium = round_cents(annual_premium * BASE_PREMIUM_SHARE);
    let endorsement_premium = round_cents(annual_premium * ENDORSEMENT_PREMIUM_SHARE);
    let discount = if has_security_system {
        round_cents(annual_premium * SECURITY_DISCOUNT_SHARE)
    } else {
        0.0
    };
    let subtotal = round_cents(base_premium + endorsement_premium - discount);
    let state_tax = round_cents(subtotal * rates.tax_rate);
    let state_fee = rates.filing_fee;
    let total = round_cents(subtotal + state_tax + state_fee);

    PremiumBreakdown {
        annual_premium,
        base_premium,
        endorsement_premium,
        discount,
        subtotal,
        state_tax_rate: rates.tax_rate,
        state_tax,
        state_fee,
        total,
        monthly_option: round_cents(total / 12.0),
    }
}
