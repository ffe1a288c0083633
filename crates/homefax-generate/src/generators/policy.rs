use chrono::{Months, NaiveDate};
use rand::Rng;

use homefax_core::reference::{
    AGENT_NAMES, CARRIERS, EFFECTIVE_YEARS, LICENSE_PREFIXES, MORTGAGEE_CITIES,
    MORTGAGEE_NAMES, MORTGAGEE_PROBABILITY,
};
use homefax_core::{Agent, COVERAGE_FORM, Error, Mortgagee, Policy, PolicyStatus, StateCode};

use super::{
    choose_endorsements, generate_property, pick, pick_coverages, pick_deductible,
    premium_breakdown, random_phone, rated_premium,
};

/// A generated policy plus the facts the run report tallies.
#[derive(Debug, Clone)]
pub struct GeneratedPolicy {
    pub policy: Policy,
    pub forced_ordinance_or_law: bool,
}

/// `P{state}{index:03}`, e.g. `PTX001`.
pub fn policy_id(state: StateCode, index: u32) -> String {
    format!("P{}{index:03}", state.code())
}

/// Build policy number `index` (1-based) for `state`, owned by `holder_id`.
pub fn generate_policy(
    rng: &mut impl Rng,
    state: StateCode,
    index: u32,
    holder_id: &str,
    as_of_year: i32,
) -> Result<GeneratedPolicy, Error> {
    let property = generate_property(rng, state, as_of_year);
    let roof_age = property.roof_age(as_of_year);
    let coverages = pick_coverages(rng);
    let deductible = pick_deductible(rng, state, roof_age);
    let selection = choose_endorsements(rng, state, property.year_built)?;
    let effective_date = random_effective_date(rng)?;
    let expiration_date = effective_date
        .checked_add_months(Months::new(12))
        .ok_or_else(|| Error::Other(format!("no expiration for {effective_date}")))?;
    let mortgagee = rng
        .random_bool(MORTGAGEE_PROBABILITY)
        .then(|| random_mortgagee(rng));
    let carrier = *pick(&CARRIERS, rng);
    let agent = random_agent(rng, carrier);
    let status = *pick(&[PolicyStatus::Active, PolicyStatus::PendingRenewal], rng);

    let annual = rated_premium(
        coverages.dwelling,
        &deductible,
        property.has_security_system,
        roof_age,
    );
    let premium = premium_breakdown(annual, property.has_security_system, state);

    Ok(GeneratedPolicy {
        policy: Policy {
            policy_id: policy_id(state, index),
            holder_id: holder_id.to_string(),
            state,
            carrier: carrier.to_string(),
            effective_date,
            expiration_date,
            coverage_form: COVERAGE_FORM.to_string(),
            property,
            coverages,
            deductible,
            endorsements: selection.endorsements,
            premium,
            mortgagee,
            agent,
            status,
        },
        forced_ordinance_or_law: selection.forced_ordinance_or_law,
    })
}

fn random_effective_date(rng: &mut impl Rng) -> Result<NaiveDate, Error> {
    let year = *pick(&EFFECTIVE_YEARS, rng);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Other(format!("invalid effective date {year}-{month}-{day}")))
}

fn random_mortgagee(rng: &mut impl Rng) -> Mortgagee {
    let name = *pick(&MORTGAGEE_NAMES, rng);
    let loan_number = rng.random_range(1_000_000_000u64..=9_999_999_999).to_string();
    let number = rng.random_range(100..=9999);
    let city = *pick(&MORTGAGEE_CITIES, rng);
    Mortgagee {
        name: name.to_string(),
        loan_number,
        address: format!("{number} Finance Center Dr, {city}"),
    }
}

fn random_agent(rng: &mut impl Rng, carrier: &str) -> Agent {
    let name = *pick(&AGENT_NAMES, rng);
    let license = format!(
        "{}{}",
        pick(&LICENSE_PREFIXES, rng),
        rng.random_range(100_000..=999_999)
    );
    let phone = random_phone(rng);
    let domain: String = carrier
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '&')
        .collect();
    Agent {
        name: name.to_string(),
        license,
        phone,
        email: format!("{}@{domain}insurance.com", name.to_lowercase().replace(' ', ".")),
    }
}
