use homefax_core::Endorsement;

use crate::format::currency;

/// Detail wording for one endorsement, headed by its form number.
pub fn endorsement_details(endorsement: &Endorsement) -> Vec<String> {
    let form = endorsement.form_number.as_str();
    let limit = endorsement.limit.map(currency).unwrap_or_default();
    let name = endorsement.name.as_str();

    let mut lines: Vec<String> = if name.starts_with("Water Backup") {
        vec![
            format!("{form} - WATER BACKUP AND SUMP DISCHARGE OR OVERFLOW"),
            "Coverage Extension for Water Backup and Sump Discharge or Overflow".into(),
            String::new(),
            "We insure direct physical loss to property covered under Section I caused".into(),
            "by water that backs up through sewers or drains, or that overflows or is".into(),
            "discharged from a sump pump, subject to the following:".into(),
            String::new(),
            format!("1. Our limit for all loss in any one occurrence is {limit}."),
            "2. We do not cover loss to the pipes, equipment or drains themselves when".into(),
            "   located below the ground surface on the residence premises.".into(),
            "3. This coverage is additional insurance.".into(),
        ]
    } else if name.starts_with("Service Line") {
        vec![
            format!("{form} - SERVICE LINE COVERAGE"),
            "Coverage for Service Lines".into(),
            String::new(),
            "We insure direct physical loss to service lines on the residence premises".into(),
            "caused by:".into(),
            "• Freezing • Accidental damage from the weight of equipment".into(),
            "• Collapse of land or improved property • Vandalism or malicious mischief".into(),
            String::new(),
            "Service line means underground pipes, lines, cables and wires supplying the".into(),
            "dwelling with water, gas, steam, electric, telephone, cable television or".into(),
            "internet service.".into(),
            String::new(),
            format!("The most we will pay for any one loss to all service lines is {limit}."),
            "This coverage is additional insurance.".into(),
        ]
    } else if name.starts_with("Ordinance or Law") {
        let share = if name.contains("25%") { "25%" } else { "10%" };
        vec![
            format!("{form} - ORDINANCE OR LAW COVERAGE ({share})"),
            format!("Additional Coverage for Ordinance or Law - {share} of Coverage A"),
            String::new(),
            "We will pay the increased costs you incur because an ordinance or law is".into(),
            "enforced while damaged parts of a covered building are repaired or rebuilt,".into(),
            "subject to the following:".into(),
            String::new(),
            format!("1. The most we will pay is {share} of the Coverage A limit shown in the"),
            "   Declarations.".into(),
            "2. We do not pay the increased cost until the property is actually repaired".into(),
            "   or replaced, at the same or another premises.".into(),
            "3. The building must sustain covered damage and the ordinance or law must be".into(),
            "   in force at the time of loss.".into(),
        ]
    } else if name.starts_with("ID Theft") {
        vec![
            format!("{form} - IDENTITY FRAUD EXPENSE COVERAGE"),
            "Coverage for Identity Fraud Expenses".into(),
            String::new(),
            format!("We reimburse an insured for identity fraud expenses up to {limit} in the"),
            "aggregate for all identity fraud events during the policy period.".into(),
            String::new(),
            "Identity fraud expenses means:".into(),
            "• Re-filing applications for loans, grants or other credit".into(),
            "• Notarizing affidavits or similar documents and long distance calls".into(),
            "• Up to $500 for lost wages due to time off work".into(),
            "• Reasonable fees for up to 4 credit reports per year".into(),
            String::new(),
            "Expenses for legal actions brought by or against an insured are not covered.".into(),
        ]
    } else if name.starts_with("Equipment Breakdown") {
        vec![
            format!("{form} - EQUIPMENT BREAKDOWN COVERAGE"),
            "Additional Coverage for Equipment Breakdown".into(),
            String::new(),
            "We pay for direct physical loss to covered property caused by an accident".into(),
            format!("to covered equipment, up to {limit} for any one accident."),
            String::new(),
            "Covered equipment means equipment that generates, transmits or uses energy,".into(),
            "including pressure or vacuum equipment, located on the residence premises".into(),
            "and used mainly for residential purposes.".into(),
            String::new(),
            "We also pay up to $500 for spoilage of food in a refrigerator or freezer on".into(),
            "the residence premises caused by a power interruption that results from an".into(),
            "accident to covered equipment.".into(),
        ]
    } else if name.starts_with("Roof ACV") {
        vec![
            format!("{form} - ROOF SURFACE COVERAGE - ACTUAL CASH VALUE"),
            "Actual Cash Value Loss Settlement for Roof Surfaces".into(),
            String::new(),
            "Loss to roof surfaces is settled at actual cash value. Roof surfaces means".into(),
            "the roof covering and underlayment, gutters, downspouts, roof sheathing and".into(),
            "the framework directly supporting them.".into(),
            String::new(),
            "This change does not apply to roof surfaces damaged by fire, lightning,".into(),
            "explosion, windstorm, hail, aircraft, vehicles, vandalism, malicious".into(),
            "mischief, theft or volcanic eruption.".into(),
        ]
    } else if name.starts_with("Animal Liability") {
        vec![
            format!("{form} - ANIMAL LIABILITY EXCLUSION WITH LIMITED COVERAGE"),
            "Limited Coverage for Animal Liability".into(),
            String::new(),
            "Coverage E and Coverage F do not apply to bodily injury or property damage".into(),
            "arising out of the ownership, care, use or entrustment of any animal.".into(),
            String::new(),
            "Exception: injury to others or damage to their property caused by animals".into(),
            format!("other than dogs remains covered up to {limit} per occurrence."),
        ]
    } else {
        vec![format!("{form} - {}", name.to_uppercase())]
    };
    lines.push(String::new());
    lines
}

/// Detail wording for every endorsement on a policy, in policy order.
pub fn endorsement_section_lines(endorsements: &[Endorsement]) -> Vec<String> {
    endorsements.iter().flat_map(endorsement_details).collect()
}
