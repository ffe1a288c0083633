//! Static reference tables the generator samples from.
//!
//! Per-state tables are keyed by [`StateCode`], so every lookup is total.

use crate::types::StateCode;

pub const CARRIERS: [&str; 3] = [
    "Summit Home & Casualty",
    "Centurion Mutual",
    "Liberty Lakes Insurance",
];

pub const STREETS: [&str; 10] = [
    "Maple St",
    "Oak Ave",
    "Pine Rd",
    "Cedar Ln",
    "Birch Dr",
    "Willow Way",
    "Elm St",
    "Spruce Ct",
    "Hickory Blvd",
    "Walnut Pl",
];

pub const ROOF_TYPES: [&str; 5] = ["Asphalt", "Metal", "Tile", "Slate", "Wood"];

pub const CONSTRUCTION_TYPES: [&str; 5] = ["Frame", "Brick", "Stucco", "Concrete", "Modular"];

pub const OCCUPANCY_TYPES: [&str; 3] = ["Owner-Occupied", "Tenant-Occupied", "Seasonal"];

pub const FIRST_NAMES: [&str; 20] = [
    "Alex", "Taylor", "Jordan", "Casey", "Riley", "Morgan", "Avery", "Parker", "Jamie", "Drew",
    "Sam", "Cameron", "Reese", "Quinn", "Logan", "Rowan", "Elliot", "Sawyer", "Hayden", "Blake",
];

pub const LAST_NAMES: [&str; 20] = [
    "Bennett", "Cooper", "Diaz", "Evans", "Foster", "Garcia", "Hughes", "Iverson", "Johnson",
    "Kim", "Lopez", "Miller", "Nguyen", "Ortiz", "Patel", "Robinson", "Smith", "Turner", "Ueda",
    "Vasquez",
];

pub const MORTGAGEE_NAMES: [&str; 3] = [
    "First National Mortgage",
    "AmeriHome Lending",
    "United Bank Home Loans",
];

pub const MORTGAGEE_CITIES: [&str; 3] = [
    "Dallas, TX 75201",
    "Charlotte, NC 28202",
    "Phoenix, AZ 85034",
];

pub const AGENT_NAMES: [&str; 5] = [
    "Sarah Johnson",
    "Michael Chen",
    "Lisa Rodriguez",
    "David Kim",
    "Jennifer Adams",
];

pub const LICENSE_PREFIXES: [&str; 3] = ["AG", "IN", "LI"];

/// Coverage A tiers in dollars.
pub const DWELLING_LIMITS: [u64; 7] = [
    150_000, 250_000, 350_000, 500_000, 750_000, 1_000_000, 1_200_000,
];

/// Coverage C as a fraction of Coverage A.
pub const PERSONAL_PROPERTY_RATIOS: [f64; 3] = [0.5, 0.6, 0.7];

/// Coverage D as a fraction of Coverage A.
pub const LOSS_OF_USE_RATIOS: [f64; 3] = [0.2, 0.25, 0.3];

pub const LIABILITY_LIMITS: [u64; 3] = [100_000, 300_000, 500_000];

pub const MEDICAL_PAYMENT_LIMITS: [u64; 3] = [1_000, 5_000, 10_000];

/// Coverage B as a fraction of Coverage A.
pub const OTHER_STRUCTURES_RATIO: f64 = 0.10;

pub const WIND_HAIL_PERCENTAGES: [f64; 3] = [0.01, 0.02, 0.03];

/// Probability that a wind/hail state policy carries a percentage deductible.
pub const WIND_HAIL_PERCENTAGE_PROBABILITY: f64 = 0.6;

pub const FLAT_DEDUCTIBLES_NEWER_ROOF: [u64; 4] = [500, 1_000, 1_500, 2_500];

pub const FLAT_DEDUCTIBLES_OLDER_ROOF: [u64; 3] = [1_000, 1_500, 2_500];

/// Roofs at least this old lose access to the lowest flat deductible.
pub const OLDER_ROOF_AGE: i32 = 15;

/// Properties built before this year must carry ordinance-or-law coverage.
pub const ORDINANCE_OR_LAW_CUTOFF_YEAR: i32 = 1990;

pub const ORDINANCE_OR_LAW_VARIANTS: [&str; 2] = ["Ordinance or Law 10%", "Ordinance or Law 25%"];

/// Lower and upper (dwelling limit, premium) anchors for base-rate interpolation.
pub const PREMIUM_ANCHORS: [(f64, f64); 2] = [(150_000.0, 700.0), (1_200_000.0, 3_800.0)];

pub const PERCENTAGE_DEDUCTIBLE_FACTOR: f64 = 0.9;
pub const SECURITY_SYSTEM_FACTOR: f64 = 0.95;
pub const OLD_ROOF_FACTOR: f64 = 1.1;
/// Roof age above which the old-roof surcharge applies.
pub const OLD_ROOF_SURCHARGE_AGE: i32 = 25;
/// Roof age at or below which the new-roof discount flag is set.
pub const NEW_ROOF_AGE: i32 = 10;

pub const BASE_PREMIUM_SHARE: f64 = 0.85;
pub const ENDORSEMENT_PREMIUM_SHARE: f64 = 0.08;
pub const SECURITY_DISCOUNT_SHARE: f64 = 0.03;

pub const MORTGAGEE_PROBABILITY: f64 = 0.7;
pub const CLAIM_FREE_PROBABILITY: f64 = 0.6;
pub const BUNDLE_PROBABILITY: f64 = 0.3;

pub const YEAR_BUILT_RANGE: (i32, i32) = (1950, 2023);
pub const SQUARE_FEET_RANGE: (u32, u32) = (900, 4_000);
pub const FIRE_STATION_MILES_RANGE: (f64, f64) = (0.1, 8.0);
pub const EFFECTIVE_YEARS: [i32; 2] = [2024, 2025];

/// Premium tax rate and flat filing fee charged by a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRates {
    pub tax_rate: f64,
    pub filing_fee: f64,
}

/// Catalog entry for an endorsement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndorsementSpec {
    pub name: &'static str,
    /// Form number without edition, e.g. `HO 04 95`.
    pub form_number: &'static str,
    /// Per-occurrence or aggregate limit in dollars when the form carries one.
    pub limit: Option<u64>,
}

/// Edition date suffix printed in the forms schedule.
pub const FORM_EDITION: &str = "05 11";

pub const ENDORSEMENTS: [EndorsementSpec; 8] = [
    EndorsementSpec {
        name: "Water Backup",
        form_number: "HO 04 95",
        limit: Some(10_000),
    },
    EndorsementSpec {
        name: "Service Line",
        form_number: "HO 04 97",
        limit: Some(10_000),
    },
    EndorsementSpec {
        name: "Ordinance or Law 10%",
        form_number: "HO 04 77",
        limit: None,
    },
    EndorsementSpec {
        name: "Ordinance or Law 25%",
        form_number: "HO 04 77",
        limit: None,
    },
    EndorsementSpec {
        name: "ID Theft",
        form_number: "HO 04 53",
        limit: Some(25_000),
    },
    EndorsementSpec {
        name: "Equipment Breakdown",
        form_number: "HO 04 12",
        limit: Some(50_000),
    },
    EndorsementSpec {
        name: "Roof ACV",
        form_number: "HO 04 08",
        limit: None,
    },
    EndorsementSpec {
        name: "Animal Liability Sublimit",
        form_number: "HO 04 24",
        limit: Some(25_000),
    },
];

/// Look up an endorsement by its exact name.
pub fn endorsement_spec(name: &str) -> Option<&'static EndorsementSpec> {
    ENDORSEMENTS.iter().find(|spec| spec.name == name)
}

impl StateCode {
    pub fn cities(self) -> &'static [&'static str] {
        match self {
            StateCode::Tn => &[
                "Nashville",
                "Knoxville",
                "Chattanooga",
                "Memphis",
                "Franklin",
                "Murfreesboro",
            ],
            StateCode::Tx => &["Austin", "Dallas", "Houston", "San Antonio", "Plano", "Frisco"],
            StateCode::Ca => &[
                "Los Angeles",
                "San Diego",
                "San Jose",
                "Sacramento",
                "Irvine",
                "Fresno",
            ],
        }
    }

    pub fn zips(self) -> &'static [&'static str] {
        match self {
            StateCode::Tn => &["37211", "37209", "37064", "37902", "38117", "37408"],
            StateCode::Tx => &["78701", "75201", "77002", "78205", "75024", "75034"],
            StateCode::Ca => &["90012", "92101", "95113", "95814", "92618", "93721"],
        }
    }

    /// Endorsements a policy in this state may carry.
    pub fn endorsement_pool(self) -> &'static [&'static str] {
        match self {
            StateCode::Tn => &[
                "Water Backup",
                "Service Line",
                "Ordinance or Law 10%",
                "ID Theft",
                "Equipment Breakdown",
            ],
            StateCode::Tx => &[
                "Water Backup",
                "Service Line",
                "Ordinance or Law 10%",
                "Roof ACV",
                "Animal Liability Sublimit",
            ],
            StateCode::Ca => &[
                "Water Backup",
                "Ordinance or Law 25%",
                "ID Theft",
                "Equipment Breakdown",
            ],
        }
    }

    pub fn rates(self) -> StateRates {
        match self {
            StateCode::Ca => StateRates {
                tax_rate: 0.0275,
                filing_fee: 2.25,
            },
            StateCode::Tx => StateRates {
                tax_rate: 0.036,
                filing_fee: 7.50,
            },
            StateCode::Tn => StateRates {
                tax_rate: 0.0435,
                filing_fee: 5.00,
            },
        }
    }

    /// Whether this state's policies may carry a percentage wind/hail deductible.
    pub fn has_wind_hail_deductible(self) -> bool {
        matches!(self, StateCode::Tx)
    }
}

/// Every city across all states, in state order.
pub fn all_cities() -> Vec<&'static str> {
    StateCode::ALL
        .iter()
        .flat_map(|state| state.cities().iter().copied())
        .collect()
}

/// Every zip code across all states, in state order.
pub fn all_zips() -> Vec<&'static str> {
    StateCode::ALL
        .iter()
        .flat_map(|state| state.zips().iter().copied())
        .collect()
}
