use chrono::NaiveDate;
use rand::Rng;

use homefax_core::reference::{FIRST_NAMES, LAST_NAMES, all_cities, all_zips};
use homefax_core::{MailingAddress, Policyholder, StateCode};

use super::{pick, random_date_between, random_phone, random_street_address};

/// Create policyholder number `index` (1-based), e.g. `H0007`.
///
/// Mailing city, state and zip are drawn independently from the combined
/// tables, so they need not agree with each other.
pub fn generate_policyholder(rng: &mut impl Rng, index: u32) -> Policyholder {
    let first_name = *pick(&FIRST_NAMES, rng);
    let last_name = *pick(&LAST_NAMES, rng);
    let date_of_birth = random_date_between(rng, earliest_birth_date(), latest_birth_date());
    let email = format!(
        "{}.{}{index}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    let phone = random_phone(rng);
    let street = random_street_address(rng);
    let city = *pick(&all_cities(), rng);
    let state = *pick(&StateCode::ALL, rng);
    let zip = *pick(&all_zips(), rng);

    Policyholder {
        holder_id: format!("H{index:04}"),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        email,
        phone,
        mailing_address: MailingAddress {
            street,
            city: city.to_string(),
            state,
            zip: zip.to_string(),
        },
    }
}

fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1955, 1, 1).unwrap_or_default()
}

fn latest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 12, 31).unwrap_or_default()
}
