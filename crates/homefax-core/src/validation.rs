use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::model::{Dataset, Policy};
use crate::reference::{ORDINANCE_OR_LAW_CUTOFF_YEAR, WIND_HAIL_PERCENTAGES};
use crate::types::Deductible;

/// Cent tolerance for premium identities after rounding.
const CENT_TOLERANCE: f64 = 0.005 + 1e-9;

/// Validate internal consistency of a generated policy.
///
/// This checks:
/// - Coverage B is exactly 10% of Coverage A (truncated)
/// - percentage deductibles are in the allowed set and only on wind/hail states
/// - pre-1990 properties carry an ordinance-or-law endorsement
/// - premium subtotal and total identities
/// - the policy period is non-empty
pub fn validate_policy(policy: &Policy) -> Result<()> {
    let id = &policy.policy_id;
    let coverages = &policy.coverages;

    if coverages.other_structures != coverages.dwelling / 10 {
        return Err(Error::InvalidRecord(format!(
            "{id}: other structures {} is not 10% of dwelling {}",
            coverages.other_structures, coverages.dwelling
        )));
    }

    if let Deductible::WindHailPercentage { percentage } = policy.deductible {
        if !policy.state.has_wind_hail_deductible() {
            return Err(Error::InvalidRecord(format!(
                "{id}: percentage deductible assigned in {}",
                policy.state
            )));
        }
        if !WIND_HAIL_PERCENTAGES.contains(&percentage) {
            return Err(Error::InvalidRecord(format!(
                "{id}: unsupported wind/hail percentage {percentage}"
            )));
        }
    }

    if policy.property.year_built < ORDINANCE_OR_LAW_CUTOFF_YEAR
        && !policy
            .endorsements
            .iter()
            .any(|endorsement| endorsement.is_ordinance_or_law())
    {
        return Err(Error::InvalidRecord(format!(
            "{id}: built {} without ordinance or law coverage",
            policy.property.year_built
        )));
    }

    let premium = &policy.premium;
    let subtotal = premium.base_premium + premium.endorsement_premium - premium.discount;
    if (premium.subtotal - subtotal).abs() > CENT_TOLERANCE {
        return Err(Error::InvalidRecord(format!(
            "{id}: subtotal {} != base + endorsement - discount ({subtotal:.2})",
            premium.subtotal
        )));
    }
    let total = premium.subtotal + premium.state_tax + premium.state_fee;
    if (premium.total - total).abs() > CENT_TOLERANCE {
        return Err(Error::InvalidRecord(format!(
            "{id}: total {} != subtotal + tax + fee ({total:.2})",
            premium.total
        )));
    }

    if policy.expiration_date <= policy.effective_date {
        return Err(Error::InvalidRecord(format!(
            "{id}: expiration {} is not after effective {}",
            policy.expiration_date, policy.effective_date
        )));
    }

    Ok(())
}

/// Validate every policy plus cross-record references of a dataset.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let mut holder_ids = BTreeSet::new();
    for holder in &dataset.policyholders {
        if !holder_ids.insert(holder.holder_id.as_str()) {
            return Err(Error::InvalidRecord(format!(
                "duplicate policyholder id: {}",
                holder.holder_id
            )));
        }
    }

    let mut policy_ids = BTreeSet::new();
    for policy in &dataset.policies {
        if !policy_ids.insert(policy.policy_id.as_str()) {
            return Err(Error::InvalidRecord(format!(
                "duplicate policy id: {}",
                policy.policy_id
            )));
        }
        if !holder_ids.contains(policy.holder_id.as_str()) {
            return Err(Error::InvalidRecord(format!(
                "{}: unknown policyholder {}",
                policy.policy_id, policy.holder_id
            )));
        }
        validate_policy(policy)?;
    }

    Ok(())
}
