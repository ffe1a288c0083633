use chrono::NaiveDate;

use homefax_core::{
    Agent, Coverages, Dataset, Deductible, Endorsement, Error, MailingAddress, Policy,
    PolicyStatus, Policyholder, PremiumBreakdown, Property, PropertyDiscounts, StateCode,
    validate_dataset, validate_policy,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn holder_fixture() -> Policyholder {
    Policyholder {
        holder_id: "H0001".to_string(),
        first_name: "Alex".to_string(),
        last_name: "Bennett".to_string(),
        date_of_birth: date(1980, 5, 17),
        email: "alex.bennett1@example.com".to_string(),
        phone: "(615) 555-0134".to_string(),
        mailing_address: MailingAddress {
            street: "120 Oak Ave".to_string(),
            city: "Nashville".to_string(),
            state: StateCode::Tn,
            zip: "37211".to_string(),
        },
    }
}

fn policy_fixture() -> Policy {
    Policy {
        policy_id: "PTX001".to_string(),
        holder_id: "H0001".to_string(),
        state: StateCode::Tx,
        carrier: "Centurion Mutual".to_string(),
        effective_date: date(2024, 3, 14),
        expiration_date: date(2025, 3, 14),
        coverage_form: "HO-3".to_string(),
        property: Property {
            street: "742 Elm St".to_string(),
            city: "Austin".to_string(),
            state: StateCode::Tx,
            zip: "78701".to_string(),
            occupancy_type: "Owner-Occupied".to_string(),
            construction_type: "Brick".to_string(),
            roof_type: "Metal".to_string(),
            year_built: 2001,
            square_feet: 2150,
            stories: 2,
            has_security_system: true,
            distance_to_fire_station_miles: 2.4,
            protection_class: 3,
            discounts: PropertyDiscounts {
                alarm: true,
                new_roof: false,
                claim_free: true,
                bundle: false,
            },
        },
        coverages: Coverages {
            dwelling: 350_000,
            other_structures: 35_000,
            personal_property: 210_000,
            loss_of_use: 87_500,
            personal_liability: 300_000,
            medical_payments: 5_000,
        },
        deductible: Deductible::WindHailPercentage { percentage: 0.02 },
        endorsements: vec![Endorsement {
            name: "Water Backup".to_string(),
            form_number: "HO 04 95".to_string(),
            limit: Some(10_000),
        }],
        premium: PremiumBreakdown {
            annual_premium: 1000.0,
            base_premium: 850.0,
            endorsement_premium: 80.0,
            discount: 30.0,
            subtotal: 900.0,
            state_tax_rate: 0.036,
            state_tax: 32.4,
            state_fee: 7.5,
            total: 939.9,
            monthly_option: 78.33,
        },
        mortgagee: None,
        agent: Agent {
            name: "Sarah Johnson".to_string(),
            license: "AG123456".to_string(),
            phone: "(512) 555-0188".to_string(),
            email: "sarah.johnson@centurionmutualinsurance.com".to_string(),
        },
        status: PolicyStatus::Active,
    }
}

#[test]
fn accepts_consistent_policy() {
    assert!(validate_policy(&policy_fixture()).is_ok());
}

#[test]
fn rejects_other_structures_off_ratio() {
    let mut policy = policy_fixture();
    policy.coverages.other_structures = 40_000;
    assert!(matches!(
        validate_policy(&policy),
        Err(Error::InvalidRecord(_))
    ));
}

#[test]
fn rejects_percentage_deductible_outside_texas() {
    let mut policy = policy_fixture();
    policy.state = StateCode::Ca;
    let err = validate_policy(&policy).expect_err("percentage deductible in CA");
    assert!(err.to_string().contains("percentage deductible"));
}

#[test]
fn rejects_unsupported_percentage() {
    let mut policy = policy_fixture();
    policy.deductible = Deductible::WindHailPercentage { percentage: 0.05 };
    assert!(validate_policy(&policy).is_err());
}

#[test]
fn rejects_old_property_without_ordinance_or_law() {
    let mut policy = policy_fixture();
    policy.property.year_built = 1972;
    assert!(validate_policy(&policy).is_err());

    policy.endorsements.push(Endorsement {
        name: "Ordinance or Law 25%".to_string(),
        form_number: "HO 04 77".to_string(),
        limit: None,
    });
    assert!(validate_policy(&policy).is_ok());
}

#[test]
fn rejects_broken_premium_identities() {
    let mut policy = policy_fixture();
    policy.premium.subtotal = 905.0;
    assert!(validate_policy(&policy).is_err());

    let mut policy = policy_fixture();
    policy.premium.total = 950.0;
    assert!(validate_policy(&policy).is_err());
}

#[test]
fn rejects_empty_policy_period() {
    let mut policy = policy_fixture();
    policy.expiration_date = policy.effective_date;
    assert!(validate_policy(&policy).is_err());
}

#[test]
fn dataset_requires_known_holders() {
    let dataset = Dataset {
        seed: 21,
        policyholders: vec![holder_fixture()],
        policies: vec![policy_fixture()],
    };
    assert!(validate_dataset(&dataset).is_ok());

    let mut orphan = dataset.clone();
    orphan.policies[0].holder_id = "H0999".to_string();
    let err = validate_dataset(&orphan).expect_err("unknown holder");
    assert!(err.to_string().contains("H0999"));
}

#[test]
fn dataset_rejects_duplicate_policy_ids() {
    let dataset = Dataset {
        seed: 21,
        policyholders: vec![holder_fixture()],
        policies: vec![policy_fixture(), policy_fixture()],
    };
    assert!(validate_dataset(&dataset).is_err());
}

#[test]
fn state_codes_parse_case_insensitively() {
    assert_eq!("tx".parse::<StateCode>().ok(), Some(StateCode::Tx));
    assert!(matches!(
        "NY".parse::<StateCode>(),
        Err(Error::UnknownState(code)) if code == "NY"
    ));
}
