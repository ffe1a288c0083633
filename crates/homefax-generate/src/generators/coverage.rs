use rand::Rng;

use homefax_core::Coverages;
use homefax_core::reference::{
    DWELLING_LIMITS, LIABILITY_LIMITS, LOSS_OF_USE_RATIOS, MEDICAL_PAYMENT_LIMITS,
    OTHER_STRUCTURES_RATIO, PERSONAL_PROPERTY_RATIOS,
};

use super::pick;

/// Draw Section I and II limits. Each choice is independent; B, C and D
/// are fixed fractions of A truncated to whole dollars.
pub fn pick_coverages(rng: &mut impl Rng) -> Coverages {
    let dwelling = *pick(&DWELLING_LIMITS, rng);
    let personal_property_ratio = *pick(&PERSONAL_PROPERTY_RATIOS, rng);
    let loss_of_use_ratio = *pick(&LOSS_OF_USE_RATIOS, rng);
    let personal_liability = *pick(&LIABILITY_LIMITS, rng);
    let medical_payments = *pick(&MEDICAL_PAYMENT_LIMITS, rng);

    Coverages {
        dwelling,
        other_structures: fraction_of(dwelling, OTHER_STRUCTURES_RATIO),
        personal_property: fraction_of(dwelling, personal_property_ratio),
        loss_of_use: fraction_of(dwelling, loss_of_use_ratio),
        personal_liability,
        medical_payments,
    }
}

/// `limit × ratio`, truncated. Ratios are whole percents, so the product is
/// computed in integer basis points to avoid binary rounding below the exact value.
fn fraction_of(limit: u64, ratio: f64) -> u64 {
    let basis_points = (ratio * 10_000.0).round() as u64;
    limit * basis_points / 10_000
}
