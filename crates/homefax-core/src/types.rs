use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// States covered by the reference tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum StateCode {
    #[serde(rename = "TN")]
    Tn,
    #[serde(rename = "TX")]
    Tx,
    #[serde(rename = "CA")]
    Ca,
}

impl StateCode {
    /// All states in generation order.
    pub const ALL: [StateCode; 3] = [StateCode::Tn, StateCode::Tx, StateCode::Ca];

    /// Two-letter postal code.
    pub fn code(self) -> &'static str {
        match self {
            StateCode::Tn => "TN",
            StateCode::Tx => "TX",
            StateCode::Ca => "CA",
        }
    }

    /// Full state name.
    pub fn name(self) -> &'static str {
        match self {
            StateCode::Tn => "Tennessee",
            StateCode::Tx => "Texas",
            StateCode::Ca => "California",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StateCode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TN" => Ok(StateCode::Tn),
            "TX" => Ok(StateCode::Tx),
            "CA" => Ok(StateCode::Ca),
            _ => Err(Error::UnknownState(value.to_string())),
        }
    }
}

/// Section I and Section II limits, in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Coverages {
    /// Coverage A.
    pub dwelling: u64,
    /// Coverage B.
    pub other_structures: u64,
    /// Coverage C.
    pub personal_property: u64,
    /// Coverage D.
    pub loss_of_use: u64,
    /// Coverage E.
    pub personal_liability: u64,
    /// Coverage F.
    pub medical_payments: u64,
}

/// Deductible structure of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Deductible {
    /// Flat dollar amount for all perils.
    Flat { amount: u64 },
    /// Wind/hail deductible expressed as a fraction of Coverage A.
    #[serde(rename = "percentage")]
    WindHailPercentage { percentage: f64 },
}

impl Deductible {
    /// Manifest label for the deductible type.
    pub fn kind(&self) -> &'static str {
        match self {
            Deductible::Flat { .. } => "flat",
            Deductible::WindHailPercentage { .. } => "percent_wind_hail",
        }
    }

    /// Manifest value: dollars for flat, fraction for percentage.
    pub fn value(&self) -> f64 {
        match self {
            Deductible::Flat { amount } => *amount as f64,
            Deductible::WindHailPercentage { percentage } => *percentage,
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Deductible::WindHailPercentage { .. })
    }
}

/// Rider attached to a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Endorsement {
    pub name: String,
    pub form_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl Endorsement {
    pub fn is_ordinance_or_law(&self) -> bool {
        self.name.contains("Ordinance or Law")
    }
}

/// Annual premium split into its billed components, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PremiumBreakdown {
    /// Rated annual premium before taxes and fees.
    pub annual_premium: f64,
    pub base_premium: f64,
    pub endorsement_premium: f64,
    /// Security-system discount, stored as a positive amount.
    pub discount: f64,
    pub subtotal: f64,
    pub state_tax_rate: f64,
    pub state_tax: f64,
    pub state_fee: f64,
    pub total: f64,
    pub monthly_option: f64,
}

/// Round a dollar amount to cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
