use rand::Rng;

use homefax_core::reference::{
    FLAT_DEDUCTIBLES_NEWER_ROOF, FLAT_DEDUCTIBLES_OLDER_ROOF, OLDER_ROOF_AGE,
    WIND_HAIL_PERCENTAGE_PROBABILITY, WIND_HAIL_PERCENTAGES,
};
use homefax_core::{Deductible, StateCode};

use super::pick;

/// Choose the deductible structure for a policy.
///
/// Wind/hail states get a percentage-of-dwelling deductible 60% of the time.
/// Otherwise the flat amount comes from a set that drops the lowest option
/// once the roof is 15 years or older.
pub fn pick_deductible(rng: &mut impl Rng, state: StateCode, roof_age: i32) -> Deductible {
    if state.has_wind_hail_deductible() && rng.random_bool(WIND_HAIL_PERCENTAGE_PROBABILITY) {
        return Deductible::WindHailPercentage {
            percentage: *pick(&WIND_HAIL_PERCENTAGES, rng),
        };
    }

    let amounts: &[u64] = if roof_age < OLDER_ROOF_AGE {
        &FLAT_DEDUCTIBLES_NEWER_ROOF
    } else {
        &FLAT_DEDUCTIBLES_OLDER_ROOF
    };
    Deductible::Flat {
        amount: *pick(amounts, rng),
    }
}
