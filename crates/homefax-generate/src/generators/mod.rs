//! Field-level generators. Each takes the random source explicitly.

use chrono::NaiveDate;
use rand::Rng;

use homefax_core::reference::STREETS;

pub mod coverage;
pub mod deductible;
pub mod endorsements;
pub mod holder;
pub mod policy;
pub mod premium;
pub mod property;

pub use coverage::pick_coverages;
pub use deductible::pick_deductible;
pub use endorsements::{EndorsementSelection, choose_endorsements, endorsement};
pub use holder::generate_policyholder;
pub use policy::{GeneratedPolicy, generate_policy, policy_id};
pub use premium::{interpolate_base_rate, premium_breakdown, rated_premium};
pub use property::generate_property;

/// Uniformly pick one entry of a non-empty static table.
pub fn pick<'a, T>(values: &'a [T], rng: &mut impl Rng) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

/// Phone number in `(NXX) NXX-XXXX` form.
pub fn random_phone(rng: &mut impl Rng) -> String {
    let area = rng.random_range(200..=999);
    let exchange = rng.random_range(200..=999);
    let line = rng.random_range(1000..=9999);
    format!("({area}) {exchange}-{line}")
}

/// House number plus a street name, e.g. `4821 Cedar Ln`.
pub fn random_street_address(rng: &mut impl Rng) -> String {
    let number = rng.random_range(100..=9999);
    format!("{number} {}", pick(&STREETS, rng))
}

/// Uniform date in `[start, end]`.
pub fn random_date_between(rng: &mut impl Rng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    let offset = rng.random_range(0..=span);
    start + chrono::Duration::days(offset)
}
