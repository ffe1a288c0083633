use rand::Rng;

use homefax_core::reference::{
    BUNDLE_PROBABILITY, CLAIM_FREE_PROBABILITY, CONSTRUCTION_TYPES, FIRE_STATION_MILES_RANGE,
    NEW_ROOF_AGE, OCCUPANCY_TYPES, ROOF_TYPES, SQUARE_FEET_RANGE, YEAR_BUILT_RANGE,
};
use homefax_core::{Property, PropertyDiscounts, StateCode, round_tenths};

use super::{pick, random_street_address};

/// Draw the residence premises for a policy in `state`.
pub fn generate_property(rng: &mut impl Rng, state: StateCode, as_of_year: i32) -> Property {
    let city = *pick(state.cities(), rng);
    let street = random_street_address(rng);
    let zip = *pick(state.zips(), rng);
    let year_built = rng.random_range(YEAR_BUILT_RANGE.0..=YEAR_BUILT_RANGE.1);
    let roof_type = *pick(&ROOF_TYPES, rng);
    let construction_type = *pick(&CONSTRUCTION_TYPES, rng);
    let square_feet = rng.random_range(SQUARE_FEET_RANGE.0..=SQUARE_FEET_RANGE.1);
    let stories = if rng.random_bool(0.5) { 1 } else { 2 };
    let has_security_system = rng.random_bool(0.5);
    let distance =
        round_tenths(rng.random_range(FIRE_STATION_MILES_RANGE.0..=FIRE_STATION_MILES_RANGE.1));
    let occupancy_type = *pick(&OCCUPANCY_TYPES, rng);
    let protection_class = rng.random_range(1..=10);

    let discounts = PropertyDiscounts {
        alarm: has_security_system,
        new_roof: as_of_year - year_built <= NEW_ROOF_AGE,
        claim_free: rng.random_bool(CLAIM_FREE_PROBABILITY),
        bundle: rng.random_bool(BUNDLE_PROBABILITY),
    };

    Property {
        street,
        city: city.to_string(),
        state,
        zip: zip.to_string(),
        occupancy_type: occupancy_type.to_string(),
        construction_type: construction_type.to_string(),
        roof_type: roof_type.to_string(),
        year_built,
        square_feet,
        stories,
        has_security_system,
        distance_to_fire_station_miles: distance,
        protection_class,
        discounts,
    }
}
