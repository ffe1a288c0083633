use rand::Rng;
use rand::seq::IndexedRandom;

use homefax_core::reference::{
    ORDINANCE_OR_LAW_CUTOFF_YEAR, ORDINANCE_OR_LAW_VARIANTS, endorsement_spec,
};
use homefax_core::{Endorsement, Error, StateCode};

/// Endorsements picked for one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EndorsementSelection {
    pub endorsements: Vec<Endorsement>,
    /// True when an Ordinance or Law endorsement had to be appended because
    /// the dwelling predates 1990 and the sample carried none.
    pub forced_ordinance_or_law: bool,
}

/// Resolve a catalog name into a policy endorsement.
pub fn endorsement(name: &str) -> Result<Endorsement, Error> {
    let spec = endorsement_spec(name)
        .ok_or_else(|| Error::Other(format!("endorsement {name} missing from catalog")))?;
    Ok(Endorsement {
        name: spec.name.to_string(),
        form_number: spec.form_number.to_string(),
        limit: spec.limit,
    })
}

/// Sample two or three distinct endorsements from the state pool.
///
/// Pre-1990 dwellings always end up with an Ordinance or Law endorsement: if
/// the sample has none, the 10% or 25% variant is appended at random.
pub fn choose_endorsements(
    rng: &mut impl Rng,
    state: StateCode,
    year_built: i32,
) -> Result<EndorsementSelection, Error> {
    let pool = state.endorsement_pool();
    let count = rng.random_range(2..=3).min(pool.len());

    let mut endorsements = pool
        .choose_multiple(rng, count)
        .map(|name| endorsement(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut forced_ordinance_or_law = false;
    if year_built < ORDINANCE_OR_LAW_CUTOFF_YEAR
        && !endorsements.iter().any(Endorsement::is_ordinance_or_law)
    {
        let variant = *ORDINANCE_OR_LAW_VARIANTS
            .choose(rng)
            .ok_or_else(|| Error::Other("no Ordinance or Law variants".to_string()))?;
        endorsements.push(endorsement(variant)?);
        forced_ordinance_or_law = true;
    }

    Ok(EndorsementSelection {
        endorsements,
        forced_ordinance_or_law,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn old_homes_always_carry_ordinance_or_law() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for state in StateCode::ALL {
            for _ in 0..50 {
                let selection = choose_endorsements(&mut rng, state, 1972).expect("selection");
                assert!(
                    selection
                        .endorsements
                        .iter()
                        .any(Endorsement::is_ordinance_or_law)
                );
            }
        }
    }

    #[test]
    fn forced_ordinance_or_law_uses_both_variants() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut forced = Vec::new();
        for _ in 0..400 {
            let selection = choose_endorsements(&mut rng, StateCode::Tx, 1960).expect("selection");
            if selection.forced_ordinance_or_law {
                forced.push(selection.endorsements.last().expect("appended").name.clone());
            }
        }
        for variant in ORDINANCE_OR_LAW_VARIANTS {
            assert!(
                forced.iter().any(|name| name == variant),
                "{variant} never appended for TX"
            );
        }
    }

    #[test]
    fn samples_are_distinct_and_from_the_state_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let selection = choose_endorsements(&mut rng, StateCode::Ca, 2010).expect("selection");
            assert!(!selection.forced_ordinance_or_law);
            let names: Vec<&str> = selection
                .endorsements
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            assert!((2..=3).contains(&names.len()));
            for name in &names {
                assert!(StateCode::Ca.endorsement_pool().contains(name));
                assert_eq!(names.iter().filter(|other| *other == name).count(), 1);
            }
        }
    }

    #[test]
    fn catalog_limits_are_carried() {
        let water = endorsement("Water Backup").expect("known");
        assert_eq!(water.form_number, "HO 04 95");
        assert_eq!(water.limit, Some(10_000));
        assert!(endorsement("Flood").is_err());
    }
}
