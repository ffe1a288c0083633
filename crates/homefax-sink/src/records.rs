//! Flat row shapes for the CSV and JSON manifests.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use homefax_core::{Dataset, Policy, Policyholder};
use homefax_render::DocumentSet;

use crate::errors::SinkError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyholderRow {
    pub holder_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub mailing_address: String,
    pub mailing_city: String,
    pub mailing_state: String,
    pub mailing_zip: String,
}

impl From<&Policyholder> for PolicyholderRow {
    fn from(holder: &Policyholder) -> Self {
        let mailing = &holder.mailing_address;
        Self {
            holder_id: holder.holder_id.clone(),
            first_name: holder.first_name.clone(),
            last_name: holder.last_name.clone(),
            date_of_birth: holder.date_of_birth,
            email: holder.email.clone(),
            phone: holder.phone.clone(),
            mailing_address: mailing.street.clone(),
            mailing_city: mailing.city.clone(),
            mailing_state: mailing.state.code().to_string(),
            mailing_zip: mailing.zip.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRow {
    pub policy_id: String,
    pub holder_id: String,
    pub state_code: String,
    pub state: String,
    pub carrier: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub coverage_form: String,
    pub annual_premium: f64,
    pub deductible_type: String,
    pub deductible_value: f64,
    pub has_mortgagee: bool,
    pub mortgagee_name: String,
    pub mortgagee_loan_no: String,
    pub status: String,
}

impl From<&Policy> for PolicyRow {
    fn from(policy: &Policy) -> Self {
        Self {
            policy_id: policy.policy_id.clone(),
            holder_id: policy.holder_id.clone(),
            state_code: policy.state.code().to_string(),
            state: policy.state.name().to_string(),
            carrier: policy.carrier.clone(),
            effective_date: policy.effective_date,
            expiration_date: policy.expiration_date,
            coverage_form: policy.coverage_form.clone(),
            annual_premium: policy.premium.annual_premium,
            deductible_type: policy.deductible.kind().to_string(),
            deductible_value: policy.deductible.value(),
            has_mortgagee: policy.mortgagee.is_some(),
            mortgagee_name: policy
                .mortgagee
                .as_ref()
                .map(|mortgagee| mortgagee.name.clone())
                .unwrap_or_default(),
            mortgagee_loan_no: policy
                .mortgagee
                .as_ref()
                .map(|mortgagee| mortgagee.loan_number.clone())
                .unwrap_or_default(),
            status: policy.status.label().to_string(),
        }
    }
}

/// One manifest entry: the policy row plus limits, property summary and the
/// document files that belong to the policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ManifestRow {
    pub policy_id: String,
    pub holder_id: String,
    pub state_code: String,
    pub state: String,
    pub carrier: String,
    pub effective_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub coverage_form: String,
    pub annual_premium: f64,
    pub deductible_type: String,
    pub deductible_value: f64,
    pub has_mortgagee: bool,
    pub mortgagee_name: String,
    pub mortgagee_loan_no: String,
    pub status: String,
    pub coverage_a: u64,
    pub coverage_b: u64,
    pub coverage_c: u64,
    pub coverage_d: u64,
    pub liability_limit: u64,
    pub med_pay_limit: u64,
    /// Endorsement names joined with `"; "`.
    pub endorsements: String,
    pub property_address: String,
    pub year_built: i32,
    pub roof_type: String,
    pub construction_type: String,
    pub square_feet: u32,
    pub stories: u8,
    /// Archive path of the declaration, e.g. `pdf/Doe_Jane_HOME_PTX001.pdf`.
    pub declaration_file: String,
    pub booklet_file: String,
}

impl ManifestRow {
    fn new(policy: &Policy, declaration_file: String, booklet_file: String) -> Self {
        let row = PolicyRow::from(policy);
        let coverages = &policy.coverages;
        let property = &policy.property;
        Self {
            policy_id: row.policy_id,
            holder_id: row.holder_id,
            state_code: row.state_code,
            state: row.state,
            carrier: row.carrier,
            effective_date: row.effective_date,
            expiration_date: row.expiration_date,
            coverage_form: row.coverage_form,
            annual_premium: row.annual_premium,
            deductible_type: row.deductible_type,
            deductible_value: row.deductible_value,
            has_mortgagee: row.has_mortgagee,
            mortgagee_name: row.mortgagee_name,
            mortgagee_loan_no: row.mortgagee_loan_no,
            status: row.status,
            coverage_a: coverages.dwelling,
            coverage_b: coverages.other_structures,
            coverage_c: coverages.personal_property,
            coverage_d: coverages.loss_of_use,
            liability_limit: coverages.personal_liability,
            med_pay_limit: coverages.medical_payments,
            endorsements: policy.endorsement_names().join("; "),
            property_address: property.full_address(),
            year_built: property.year_built,
            roof_type: property.roof_type.clone(),
            construction_type: property.construction_type.clone(),
            square_feet: property.square_feet,
            stories: property.stories,
            declaration_file,
            booklet_file,
        }
    }
}

pub fn policyholder_rows(dataset: &Dataset) -> Vec<PolicyholderRow> {
    dataset.policyholders.iter().map(PolicyholderRow::from).collect()
}

pub fn policy_rows(dataset: &Dataset) -> Vec<PolicyRow> {
    dataset.policies.iter().map(PolicyRow::from).collect()
}

/// Manifest rows in policy order. Every policy needs a rendered declaration
/// and a booklet for its state.
pub fn manifest_rows(
    dataset: &Dataset,
    documents: &DocumentSet,
) -> Result<Vec<ManifestRow>, SinkError> {
    dataset
        .policies
        .iter()
        .map(|policy| {
            let declaration = documents
                .declaration(&policy.policy_id)
                .ok_or_else(|| SinkError::MissingDocument(format!("declaration {}", policy.policy_id)))?;
            let booklet = documents
                .booklet(policy.state)
                .ok_or_else(|| SinkError::MissingDocument(format!("booklet {}", policy.state)))?;
            Ok(ManifestRow::new(
                policy,
                pdf_arcname(&declaration.filename),
                pdf_arcname(&booklet.filename),
            ))
        })
        .collect()
}

/// Archive path of a rendered PDF.
pub fn pdf_arcname(filename: &str) -> String {
    format!("pdf/{filename}")
}
