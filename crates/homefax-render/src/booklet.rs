//! State policy booklets: HO-3 policy language plus state provisions.

use tracing::debug;

use homefax_core::StateCode;

use crate::layout::Layout;
use crate::pdf::PdfDocumentBuilder;
use crate::document::{DocumentKind, RenderedDocument};

const CONTENTS: &[&str] = &[
    "TABLE OF CONTENTS",
    "AGREEMENT ................................................................ 3",
    "DEFINITIONS ............................................................. 3",
    "SECTION I - PROPERTY COVERAGES ........................................... 5",
    "SECTION I - PERILS INSURED AGAINST ....................................... 9",
    "SECTION I - EXCLUSIONS .................................................. 11",
    "SECTION II - LIABILITY COVERAGES ........................................ 17",
    "STATE SPECIFIC PROVISIONS ............................................... 25",
    "",
    "AGREEMENT",
    "We will provide the insurance described in this policy in return for the premium",
    "and compliance with all applicable provisions of this policy.",
    "",
    "DEFINITIONS",
    "'You' and 'your' refer to the 'named insured' shown in the Declarations and the",
    "spouse if a resident of the same household. 'We', 'us' and 'our' refer to the",
    "Company providing this insurance.",
    "",
    "'Bodily injury' means bodily harm, sickness or disease, including death.",
    "'Business' means a trade, profession or occupation engaged in on a full-time,",
    "part-time or occasional basis for money or other compensation.",
    "'Dwelling' means the one family dwelling where you reside, structures attached",
    "to the dwelling, and materials and supplies used to construct, alter or repair.",
    "'Occurrence' means an accident, including continuous or repeated exposure to",
    "substantially the same general harmful conditions, which results in bodily",
    "injury or property damage during the policy period.",
    "'Property damage' means physical injury to, destruction of, or loss of use of",
    "tangible property.",
    "'Residence premises' means the one family dwelling, other structures, and grounds",
    "or that part of any other building where you reside.",
];

const PROPERTY_COVERAGES: &[&str] = &[
    "",
    "SECTION I - PROPERTY COVERAGES",
    "",
    "Coverage A - Dwelling",
    "We cover the dwelling on the residence premises, including structures attached",
    "to the dwelling and materials and supplies used to construct, alter or repair",
    "the dwelling or other structures on the residence premises.",
    "",
    "Coverage B - Other Structures",
    "We cover other structures on the residence premises set apart from the dwelling",
    "by clear space. The limit will not be more than 10% of Coverage A. We do not",
    "cover structures used for business or rented to others unless used solely as",
    "a private garage.",
    "",
    "Coverage C - Personal Property",
    "We cover personal property owned or used by an insured anywhere in the world.",
    "Our limit for personal property usually located at another residence is 10%",
    "of Coverage C or $1,000, whichever is greater.",
    "",
    "Special Limits of Liability:",
    "• $200 on money, bank notes, coins, gold, silver, platinum",
    "• $1,500 on securities, deeds, evidences of debt, manuscripts, records",
    "• $1,500 on watercraft including trailers, furnishings, equipment",
    "• $1,500 for theft of jewelry, watches, furs, precious stones",
    "• $2,500 for theft of firearms and related equipment",
    "• $2,500 for theft of silverware, goldware, platinumware",
    "• $2,500 on business property on residence premises",
    "• $500 on business property away from residence premises",
    "",
    "Property Not Covered: Articles separately insured, animals, birds, fish,",
    "motor vehicles.",
    "",
    "Coverage D - Loss of Use",
    "If a covered loss makes the residence premises not fit to live in, we cover:",
    "1. Additional Living Expense - necessary increase in living expenses to",
    "   maintain your normal standard of living.",
    "2. Fair Rental Value - fair rental value of premises rented to others less",
    "   expenses that do not continue while not fit to live in.",
];

const PERILS_AND_EXCLUSIONS: &[&str] = &[
    "",
    "SECTION I - PERILS INSURED AGAINST",
    "",
    "Coverage A and B - We insure against risks of direct physical loss except:",
    "• Earth movement, even if caused by human forces",
    "• Flood, surface water, waves, tidal waves, overflow of water bodies",
    "• Water damage from sewers, drains, or below surface ground water",
    "• Power failure occurring off the residence premises",
    "• Neglect to use reasonable means to save and preserve property",
    "• War, civil war, insurrection, rebellion, warlike acts",
    "• Nuclear hazard",
    "• Intentional loss by an insured",
    "• Governmental action, destruction or seizure by authority",
    "• Weather conditions contributing to loss",
    "",
    "Coverage C - We insure against the following perils:",
    "• Fire or Lightning",
    "• Windstorm or Hail (items inside building only if roof or wall damaged)",
    "• Explosion",
    "• Riot or Civil Commotion",
    "• Aircraft (including self-propelled missiles and spacecraft)",
    "• Vehicles",
    "• Smoke",
    "• Vandalism or Malicious Mischief",
    "• Theft",
    "• Falling Objects",
    "• Weight of Ice, Snow or Sleet",
    "• Accidental Discharge of Water or Steam",
    "• Sudden and Accidental Tearing Apart, Cracking, Burning or Bulging",
    "• Freezing",
    "• Sudden and Accidental Damage from Artificially Generated Electrical Current",
    "• Volcanic Eruption",
];

const LIABILITY_COVERAGES: &[&str] = &[
    "",
    "SECTION II - LIABILITY COVERAGES",
    "",
    "Coverage E - Personal Liability",
    "If a claim is made or suit brought against an insured for damages because of",
    "bodily injury or property damage caused by an occurrence to which this coverage",
    "applies, we will:",
    "1. Pay up to our limit of liability for damages for which an insured is",
    "   legally liable. Damages include prejudgment interest awarded against an insured.",
    "2. Provide a defense at our expense by counsel of our choice, even if the suit",
    "   is groundless, false or fraudulent. We may investigate and settle any claim",
    "   or suit that we decide can be settled.",
    "",
    "Coverage F - Medical Payments to Others",
    "We will pay necessary medical expenses incurred or medically ascertained within",
    "three years from the date of an accident causing bodily injury. Medical expenses",
    "means reasonable charges for medical, surgical, x-ray, dental, ambulance,",
    "hospital, professional nursing, prosthetic devices and funeral services.",
    "",
    "This coverage applies to a person on the residence premises with permission",
    "of an insured or to a person off the residence premises if the bodily injury",
    "arises out of a condition on the residence premises or is caused by the",
    "activities of an insured, a residence employee, or an animal owned by an insured.",
    "",
    "SECTION II - EXCLUSIONS",
    "",
    "Coverage E and F do not apply to bodily injury or property damage:",
    "• Expected or intended by an insured",
    "• Arising out of business pursuits of an insured",
    "• Arising out of professional services",
    "• Arising out of premises owned, rented or controlled by an insured other",
    "  than an insured location",
    "• Arising out of ownership, maintenance, occupancy, operation, use, loading",
    "  or unloading of motor vehicles, aircraft, hovercraft, or watercraft",
    "• Caused directly or indirectly by war, civil war, insurrection, rebellion",
    "• Arising out of the transmission of a communicable disease by an insured",
    "• Arising out of sexual molestation, corporal punishment or physical or",
    "  mental abuse",
    "• Arising out of the use, sale, manufacture, delivery, transfer or possession",
    "  of a controlled substance",
];

const CALIFORNIA_PROVISIONS: &[&str] = &[
    "",
    "CALIFORNIA SPECIFIC PROVISIONS",
    "",
    "CALIFORNIA CONSUMER NOTICE",
    "This policy provides certain coverage for personal property of others while",
    "on the part of the residence premises occupied by an insured. However, this",
    "is not a substitute for insurance which should be carried by the owners of",
    "such property.",
    "",
    "WILDFIRE RISK NOTICE",
    "California residents should be aware that wildfire is a significant risk in",
    "many areas of the state. This policy covers direct physical loss from fire,",
    "including wildfire, subject to your deductible and policy terms.",
    "",
    "EARTHQUAKE COVERAGE",
    "This policy does not cover earthquakes. Earthquake coverage is available",
    "through the California Earthquake Authority or by separate endorsement.",
    "",
    "FAIR PLAN ELIGIBILITY",
    "If you are unable to obtain insurance through the voluntary market, you may",
    "be eligible for coverage through the California FAIR Plan.",
    "",
    "CLAIMS SETTLEMENT",
    "In case of loss, you must give immediate notice to the company or its agent.",
    "You must also protect the property from further damage and make reasonable",
    "and necessary repairs to protect the property.",
];

const TEXAS_PROVISIONS: &[&str] = &[
    "",
    "TEXAS SPECIFIC PROVISIONS",
    "",
    "TEXAS WINDSTORM AND HAIL DEDUCTIBLE",
    "In accordance with Texas Insurance Code, if your policy includes a percentage",
    "deductible for windstorm and hail losses, such deductible applies separately",
    "to each loss and is calculated as a percentage of Coverage A - Dwelling.",
    "",
    "TEXAS CONSUMER BILL OF RIGHTS",
    "As a Texas insurance consumer, you have certain rights under the Texas",
    "Insurance Code. For more information about your rights, contact the Texas",
    "Department of Insurance at 1-800-252-3439 or www.tdi.texas.gov.",
    "",
    "PAYMENT OF CLAIMS",
    "Texas law requires payment of claims within specific time frames. We will",
    "acknowledge receipt of your claim within 15 days and begin investigation",
    "promptly. We will notify you in writing if we need additional time.",
    "",
    "APPRAISAL PROCESS",
    "If you and we fail to agree on the amount of loss, either may demand an",
    "appraisal of the loss. Each party will select a competent and impartial",
    "appraiser. The two appraisers will select an umpire.",
];

const TENNESSEE_PROVISIONS: &[&str] = &[
    "",
    "TENNESSEE SPECIFIC PROVISIONS",
    "",
    "TENNESSEE LOSS SETTLEMENT",
    "In accordance with Tennessee law, losses under this policy will be settled",
    "on the basis of replacement cost without deduction for depreciation, subject",
    "to specific conditions regarding repair or replacement completion.",
    "",
    "TENNESSEE CANCELLATION PROVISIONS",
    "This policy may be cancelled by us only for the reasons stated in Tennessee",
    "Code Annotated § 56-7-2502. We will give you at least 30 days advance",
    "written notice of cancellation, except for non-payment of premium.",
    "",
    "TENNESSEE CLAIM PROCEDURES",
    "Tennessee law provides certain protections regarding the handling of insurance",
    "claims. You have the right to select your own contractor for repairs and to",
    "receive claim payments in a timely manner.",
];

fn state_provisions(state: StateCode) -> &'static [&'static str] {
    match state {
        StateCode::Ca => CALIFORNIA_PROVISIONS,
        StateCode::Tx => TEXAS_PROVISIONS,
        StateCode::Tn => TENNESSEE_PROVISIONS,
    }
}

pub fn booklet_title(state: StateCode) -> String {
    format!("Homeowners Policy Booklet | {}", state.name())
}

pub fn booklet_filename(state: StateCode) -> String {
    format!("Booklet_{}.pdf", state.code())
}

/// Full booklet text for `state`.
pub fn booklet_lines(state: StateCode) -> Vec<String> {
    let mut lines = vec![format!("HOMEOWNERS POLICY HO-3 | {}", state.name()), String::new()];
    for block in [
        CONTENTS,
        PROPERTY_COVERAGES,
        PERILS_AND_EXCLUSIONS,
        LIABILITY_COVERAGES,
        state_provisions(state),
    ] {
        lines.extend(block.iter().map(|line| line.to_string()));
    }
    lines
}

pub fn render_booklet(state: StateCode, layout: &Layout) -> RenderedDocument {
    let title = booklet_title(state);
    let mut builder = PdfDocumentBuilder::new(*layout);
    builder.title(&title);
    builder.section(&title, &booklet_lines(state));
    let rendered = builder.finish();
    debug!(state = %state, pages = rendered.pages, "booklet rendered");

    RenderedDocument {
        kind: DocumentKind::Booklet { state },
        filename: booklet_filename(state),
        bytes: rendered.bytes,
        pages: rendered.pages,
    }
}
