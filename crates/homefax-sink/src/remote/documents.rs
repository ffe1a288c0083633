//! Nested JSON documents inserted into the `policyholders` and `policies`
//! tables.

use chrono::NaiveDate;
use serde::Serialize;

use homefax_core::{
    Agent, Deductible, Endorsement, MailingAddress, Mortgagee, Policy, Policyholder,
    PropertyDiscounts, StateCode,
};

const GENERATOR_VERSION: &str = "2.1";
const DATA_SOURCE: &str = "generated_sample";

#[derive(Debug, Clone, Serialize)]
pub struct PolicyholderDocument<'a> {
    pub holder_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: NaiveDate,
    pub email: &'a str,
    pub phone: &'a str,
    pub mailing_address: &'a MailingAddress,
}

impl<'a> PolicyholderDocument<'a> {
    pub fn new(holder: &'a Policyholder) -> Self {
        Self {
            holder_id: &holder.holder_id,
            first_name: &holder.first_name,
            last_name: &holder.last_name,
            date_of_birth: holder.date_of_birth,
            email: &holder.email,
            phone: &holder.phone,
            mailing_address: &holder.mailing_address,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyPeriod {
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub term_months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyAddress<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: StateCode,
    pub zip: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetails<'a> {
    pub year_built: i32,
    pub square_feet: u32,
    pub stories: u8,
    pub construction_type: &'a str,
    pub roof_type: &'a str,
    pub occupancy_type: &'a str,
    pub has_security_system: bool,
    pub distance_to_fire_station_miles: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertySection<'a> {
    pub address: PropertyAddress<'a>,
    pub details: PropertyDetails<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoverageLimit {
    pub limit: u64,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageSection {
    pub dwelling: CoverageLimit,
    pub other_structures: CoverageLimit,
    pub personal_property: CoverageLimit,
    pub loss_of_use: CoverageLimit,
    pub personal_liability: CoverageLimit,
    pub medical_payments: CoverageLimit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeductibleSection {
    Flat { amount: u64 },
    Percentage { percentage: f64, of: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct PremiumLines {
    pub base_premium: f64,
    pub endorsement_premium: f64,
    /// Negative when a discount applies.
    pub discounts: f64,
    pub subtotal: f64,
    pub state_tax: f64,
    pub state_fee: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PremiumSection {
    pub annual_total: f64,
    pub breakdown: PremiumLines,
    pub payment_plan: &'static str,
    pub monthly_option: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub filename: String,
    pub storage_path: String,
    pub pages: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSpecific {
    Texas {
        windstorm_deductible: &'static str,
        consumer_rights_notice: bool,
        appraisal_clause: bool,
    },
    California {
        wildfire_notice: bool,
        earthquake_exclusion: bool,
        fair_plan_eligible: bool,
    },
    Tennessee {
        replacement_cost_settlement: bool,
        cancellation_provisions: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationMetadata {
    pub script_version: &'static str,
    pub generated_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawData {
    pub original_format: &'static str,
    pub discounts: PropertyDiscounts,
    pub generation_metadata: GenerationMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestionMetadata {
    pub batch_id: String,
    pub processing_time: Option<f64>,
    pub validation_status: &'static str,
}

/// Row inserted into `policies`; `policyholder_id` is the id the backend
/// assigned to the holder row.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDocument<'a> {
    pub policy_number: &'a str,
    pub carrier: &'a str,
    pub policy_type: &'static str,
    pub status: String,
    pub data_source: &'static str,
    pub policyholder_id: &'a str,
    pub policy_period: PolicyPeriod,
    pub property: PropertySection<'a>,
    pub coverages: CoverageSection,
    pub deductibles: DeductibleSection,
    pub endorsements: &'a [Endorsement],
    pub premium: PremiumSection,
    pub mortgagees: Vec<&'a Mortgagee>,
    pub agent: &'a Agent,
    pub documents: Vec<DocumentEntry>,
    pub state_specific: StateSpecific,
    pub raw_data: RawData,
    pub ingestion_metadata: IngestionMetadata,
}

impl<'a> PolicyDocument<'a> {
    pub fn new(
        policy: &'a Policy,
        policyholder_id: &'a str,
        documents: Vec<DocumentEntry>,
        generated_on: NaiveDate,
    ) -> Self {
        let property = &policy.property;
        let coverages = &policy.coverages;
        let premium = &policy.premium;
        let limit = |limit, code| CoverageLimit { limit, code };

        Self {
            policy_number: &policy.policy_id,
            carrier: &policy.carrier,
            policy_type: "homeowners",
            status: policy.status.label().to_lowercase(),
            data_source: DATA_SOURCE,
            policyholder_id,
            policy_period: PolicyPeriod {
                effective_date: policy.effective_date,
                expiration_date: policy.expiration_date,
                term_months: 12,
            },
            property: PropertySection {
                address: PropertyAddress {
                    street: &property.street,
                    city: &property.city,
                    state: property.state,
                    zip: &property.zip,
                },
                details: PropertyDetails {
                    year_built: property.year_built,
                    square_feet: property.square_feet,
                    stories: property.stories,
                    construction_type: &property.construction_type,
                    roof_type: &property.roof_type,
                    occupancy_type: &property.occupancy_type,
                    has_security_system: property.has_security_system,
                    distance_to_fire_station_miles: property.distance_to_fire_station_miles,
                },
            },
            coverages: CoverageSection {
                dwelling: limit(coverages.dwelling, "A"),
                other_structures: limit(coverages.other_structures, "B"),
                personal_property: limit(coverages.personal_property, "C"),
                loss_of_use: limit(coverages.loss_of_use, "D"),
                personal_liability: limit(coverages.personal_liability, "E"),
                medical_payments: limit(coverages.medical_payments, "F"),
            },
            deductibles: match policy.deductible {
                Deductible::Flat { amount } => DeductibleSection::Flat { amount },
                Deductible::WindHailPercentage { percentage } => DeductibleSection::Percentage {
                    percentage,
                    of: "dwelling",
                },
            },
            endorsements: &policy.endorsements,
            premium: PremiumSection {
                annual_total: premium.total,
                breakdown: PremiumLines {
                    base_premium: premium.base_premium,
                    endorsement_premium: premium.endorsement_premium,
                    discounts: if premium.discount > 0.0 {
                        -premium.discount
                    } else {
                        0.0
                    },
                    subtotal: premium.subtotal,
                    state_tax: premium.state_tax,
                    state_fee: premium.state_fee,
                },
                payment_plan: "annual",
                monthly_option: premium.monthly_option,
            },
            mortgagees: policy.mortgagee.iter().collect(),
            agent: &policy.agent,
            documents,
            state_specific: state_specific(policy),
            raw_data: RawData {
                original_format: DATA_SOURCE,
                discounts: property.discounts,
                generation_metadata: GenerationMetadata {
                    script_version: GENERATOR_VERSION,
                    generated_at: generated_on,
                },
            },
            ingestion_metadata: IngestionMetadata {
                batch_id: format!("batch_{generated_on}"),
                processing_time: None,
                validation_status: "passed",
            },
        }
    }
}

fn state_specific(policy: &Policy) -> StateSpecific {
    match policy.state {
        StateCode::Tx => StateSpecific::Texas {
            windstorm_deductible: if policy.deductible.is_percentage() {
                "percentage"
            } else {
                "flat"
            },
            consumer_rights_notice: true,
            appraisal_clause: true,
        },
        StateCode::Ca => StateSpecific::California {
            wildfire_notice: true,
            earthquake_exclusion: true,
            fair_plan_eligible: true,
        },
        StateCode::Tn => StateSpecific::Tennessee {
            replacement_cost_settlement: true,
            cancellation_provisions: true,
        },
    }
}
