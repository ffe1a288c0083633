//! Per-policy declarations: declarations page, premium and forms schedule,
//! endorsement details.

use tracing::debug;

use homefax_core::reference::FORM_EDITION;
use homefax_core::{Deductible, Policy, Policyholder};

use crate::document::{DocumentKind, RenderedDocument};
use crate::endorsement_text::endorsement_section_lines;
use crate::format::{currency, money, percent, thousands};
use crate::layout::{Layout, Section};
use crate::pdf::PdfDocumentBuilder;

const LABEL_WIDTH: usize = 51;

const BASE_FORMS: [(&str, &str); 4] = [
    ("HO 00 03", "Special Form (HO-3)"),
    ("HO 04 90", "Personal Property Replacement Cost"),
    ("HO 04 10", "Scheduled Personal Property"),
    ("HO 04 91", "Additional Living Expense"),
];

const SPECIAL_LIMITS: [&str; 8] = [
    "$200    Money, bank notes, bullion, coins, medals",
    "$1,500  Securities, accounts, deeds, manuscripts, records",
    "$1,500  Watercraft, trailers, furnishings, equipment",
    "$1,500  Theft of jewelry, watches, furs, precious stones",
    "$2,500  Theft of firearms and related equipment",
    "$2,500  Theft of silverware, goldware, platinumware",
    "$2,500  Business property on residence premises",
    "$500    Business property away from residence premises",
];

/// `{Last}_{First}_HOME_{POLICY}.pdf` with spaces removed.
pub fn declaration_filename(policy: &Policy, holder: &Policyholder) -> String {
    format!(
        "{}_{}_HOME_{}.pdf",
        holder.last_name, holder.first_name, policy.policy_id
    )
    .replace(' ', "")
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<width$}{value}", width = LABEL_WIDTH)
}

fn amount_row(label: &str, amount: f64) -> String {
    format!("{label:<width$}{:>11}", money(amount), width = LABEL_WIDTH)
}

fn deductible_text(deductible: &Deductible) -> String {
    match deductible {
        Deductible::Flat { amount } => currency(*amount),
        Deductible::WindHailPercentage { percentage } => {
            format!("{} of Coverage A (Wind/Hail)", percent(*percentage, 0))
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn declarations_page(policy: &Policy, holder: &Policyholder) -> Vec<String> {
    let property = &policy.property;
    let coverages = &policy.coverages;
    let mailing = &holder.mailing_address;
    vec![
        format!("Policy Number: {}", policy.policy_id),
        format!("Carrier: {}", policy.carrier),
        format!("State: {}", policy.state.name()),
        format!(
            "Policy Period: {} to {}",
            policy.effective_date, policy.expiration_date
        ),
        format!("Coverage Form: {} Special Form", policy.coverage_form),
        format!("Status: {}", policy.status.label()),
        String::new(),
        "NAMED INSURED".into(),
        holder.full_name(),
        format!("Date of Birth: {}", holder.date_of_birth),
        format!("Phone: {}", holder.phone),
        format!("Email: {}", holder.email),
        String::new(),
        "MAILING ADDRESS".into(),
        mailing.street.clone(),
        format!("{}, {} {}", mailing.city, mailing.state, mailing.zip),
        String::new(),
        "RESIDENCE PREMISES".into(),
        property.street.clone(),
        format!("{}, {} {}", property.city, property.state, property.zip),
        String::new(),
        "SECTION I - PROPERTY COVERAGES AND LIMITS".into(),
        row("Coverage A - Dwelling", currency(coverages.dwelling)),
        row("Coverage B - Other Structures", currency(coverages.other_structures)),
        row("Coverage C - Personal Property", currency(coverages.personal_property)),
        row("Coverage D - Loss of Use", currency(coverages.loss_of_use)),
        String::new(),
        "SECTION II - LIABILITY COVERAGES AND LIMITS".into(),
        row(
            "Coverage E - Personal Liability (Each Occurrence)",
            currency(coverages.personal_liability),
        ),
        row(
            "Coverage F - Medical Payments (Each Person)",
            currency(coverages.medical_payments),
        ),
        String::new(),
        "DEDUCTIBLES".into(),
        format!("All Perils Deductible: {}", deductible_text(&policy.deductible)),
        String::new(),
        "PROPERTY INFORMATION".into(),
        format!(
            "Year Built: {}    Square Feet: {}    Stories: {}",
            property.year_built,
            thousands(property.square_feet as u64),
            property.stories
        ),
        format!(
            "Construction Type: {}    Roof Type: {}",
            property.construction_type, property.roof_type
        ),
        format!("Occupancy: {}", property.occupancy_type),
        format!(
            "Protection Class: {}    Fire Station Distance: {:.1} mi",
            property.protection_class, property.distance_to_fire_station_miles
        ),
        format!("Security System: {}", yes_no(property.has_security_system)),
        String::new(),
        format!("ANNUAL PREMIUM: {}", money(policy.premium.annual_premium)),
    ]
}

fn premium_and_forms_page(policy: &Policy) -> Vec<String> {
    let premium = &policy.premium;
    let rule = format!("{}{}", " ".repeat(LABEL_WIDTH), "-".repeat(11));

    let mut lines = vec![
        "PREMIUM BREAKDOWN".to_string(),
        String::new(),
        amount_row("Base Coverage Premium", premium.base_premium),
        amount_row("Endorsement Premium", premium.endorsement_premium),
    ];
    if premium.discount > 0.0 {
        lines.push(amount_row("Security System Discount", -premium.discount));
    }
    lines.extend([
        rule.clone(),
        amount_row("Subtotal", premium.subtotal),
        amount_row(
            &format!("State Premium Tax ({})", percent(premium.state_tax_rate, 3)),
            premium.state_tax,
        ),
        amount_row("State Filing Fee", premium.state_fee),
        rule,
        amount_row("TOTAL ANNUAL PREMIUM", premium.total),
        String::new(),
        format!(
            "Monthly Payment Option: {} per month",
            money(premium.monthly_option)
        ),
        String::new(),
        String::new(),
        "FORMS AND ENDORSEMENTS SCHEDULE".into(),
        String::new(),
        "The following forms and endorsements are made part of this policy:".into(),
        String::new(),
    ]);
    lines.extend(
        BASE_FORMS
            .iter()
            .map(|(form, title)| format!("{form} {FORM_EDITION}    {title}")),
    );
    lines.extend(policy.endorsements.iter().map(|endorsement| {
        format!(
            "{} {FORM_EDITION}    {}",
            endorsement.form_number, endorsement.name
        )
    }));

    lines.extend([
        String::new(),
        "SPECIAL LIMITS OF LIABILITY".into(),
        "The following special limits apply to personal property:".into(),
        String::new(),
    ]);
    lines.extend(SPECIAL_LIMITS.iter().map(|line| line.to_string()));
    lines.push(String::new());

    if let Some(mortgagee) = &policy.mortgagee {
        lines.extend([
            "MORTGAGEE INFORMATION".into(),
            format!("Name: {}", mortgagee.name),
            format!("Loan Number: {}", mortgagee.loan_number),
            format!("Address: {}", mortgagee.address),
            String::new(),
        ]);
    }

    let agent = &policy.agent;
    lines.extend([
        "AGENT INFORMATION".into(),
        format!("Agent: {}", agent.name),
        format!("License: {}", agent.license),
        format!("Phone: {}", agent.phone),
        format!("Email: {}", agent.email),
    ]);
    lines
}

/// Sections of a declaration document. The endorsement section is left out
/// when the policy carries no endorsements.
pub fn declaration_sections(policy: &Policy, holder: &Policyholder) -> Vec<Section> {
    let carrier = &policy.carrier;
    let mut sections = vec![
        Section::new(
            format!("{carrier} | Homeowners Policy Declarations"),
            declarations_page(policy, holder),
        ),
        Section::new(
            format!("{carrier} | Premium Breakdown & Forms Schedule"),
            premium_and_forms_page(policy),
        ),
    ];
    let details = endorsement_section_lines(&policy.endorsements);
    if !details.is_empty() {
        sections.push(Section::new(
            format!("{carrier} | Endorsement Details"),
            details,
        ));
    }
    sections
}

pub fn render_declaration(
    policy: &Policy,
    holder: &Policyholder,
    layout: &Layout,
) -> RenderedDocument {
    let mut builder = PdfDocumentBuilder::new(*layout);
    builder.title(&format!("Declarations {}", policy.policy_id));
    for section in declaration_sections(policy, holder) {
        builder.section(&section.title, &section.lines);
    }
    let rendered = builder.finish();
    debug!(
        policy_id = %policy.policy_id,
        pages = rendered.pages,
        "declaration rendered"
    );

    RenderedDocument {
        kind: DocumentKind::Declaration {
            policy_id: policy.policy_id.clone(),
            state: policy.state,
        },
        filename: declaration_filename(policy, holder),
        bytes: rendered.bytes,
        pages: rendered.pages,
    }
}
