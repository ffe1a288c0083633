use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{Coverages, Deductible, Endorsement, PremiumBreakdown, StateCode};

/// Mailing address of a policyholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MailingAddress {
    pub street: String,
    pub city: String,
    pub state: StateCode,
    pub zip: String,
}

/// A synthetic individual. Shared by every policy that references `holder_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Policyholder {
    pub holder_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub mailing_address: MailingAddress,
}

impl Policyholder {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Discount eligibility flags recorded on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyDiscounts {
    pub alarm: bool,
    pub new_roof: bool,
    pub claim_free: bool,
    pub bundle: bool,
}

/// Insured residence premises; embedded in its policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Property {
    pub street: String,
    pub city: String,
    pub state: StateCode,
    pub zip: String,
    pub occupancy_type: String,
    pub construction_type: String,
    pub roof_type: String,
    pub year_built: i32,
    pub square_feet: u32,
    pub stories: u8,
    pub has_security_system: bool,
    pub distance_to_fire_station_miles: f64,
    pub protection_class: u8,
    pub discounts: PropertyDiscounts,
}

impl Property {
    /// Single-line address, e.g. `120 Oak Ave, Austin, TX 78701`.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip
        )
    }

    /// Age of the roof relative to `as_of_year`; the dwelling year is used as a proxy.
    pub fn roof_age(&self, as_of_year: i32) -> i32 {
        as_of_year - self.year_built
    }
}

/// Lender holding an interest in the dwelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Mortgagee {
    pub name: String,
    pub loan_number: String,
    pub address: String,
}

/// Producing agent printed on the declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Agent {
    pub name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PolicyStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Pending Renewal")]
    PendingRenewal,
}

impl PolicyStatus {
    pub fn label(self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::PendingRenewal => "Pending Renewal",
        }
    }
}

/// A generated homeowners policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Policy {
    pub policy_id: String,
    pub holder_id: String,
    pub state: StateCode,
    pub carrier: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub coverage_form: String,
    pub property: Property,
    pub coverages: Coverages,
    pub deductible: Deductible,
    pub endorsements: Vec<Endorsement>,
    pub premium: PremiumBreakdown,
    pub mortgagee: Option<Mortgagee>,
    pub agent: Agent,
    pub status: PolicyStatus,
}

impl Policy {
    pub fn endorsement_names(&self) -> Vec<&str> {
        self.endorsements
            .iter()
            .map(|endorsement| endorsement.name.as_str())
            .collect()
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dataset {
    pub seed: u64,
    pub policyholders: Vec<Policyholder>,
    pub policies: Vec<Policy>,
}

impl Dataset {
    pub fn holder(&self, holder_id: &str) -> Option<&Policyholder> {
        self.policyholders
            .iter()
            .find(|holder| holder.holder_id == holder_id)
    }

    pub fn policies_for_state(&self, state: StateCode) -> impl Iterator<Item = &Policy> {
        self.policies
            .iter()
            .filter(move |policy| policy.state == state)
    }

    /// States in the order they first appear among the policies.
    pub fn states(&self) -> Vec<StateCode> {
        let mut states = Vec::new();
        for policy in &self.policies {
            if !states.contains(&policy.state) {
                states.push(policy.state);
            }
        }
        states
    }
}
