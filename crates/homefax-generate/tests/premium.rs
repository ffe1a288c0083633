use homefax_core::{Deductible, StateCode};
use homefax_generate::generators::{interpolate_base_rate, premium_breakdown, rated_premium};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 0.01
}

#[test]
fn base_rate_is_clamped_at_the_anchors() {
    assert!(close(interpolate_base_rate(100_000), 700.0));
    assert!(close(interpolate_base_rate(150_000), 700.0));
    assert!(close(interpolate_base_rate(1_200_000), 3_800.0));
    assert!(close(interpolate_base_rate(2_000_000), 3_800.0));
}

#[test]
fn base_rate_is_linear_between_anchors() {
    assert!(close(interpolate_base_rate(500_000), 1_733.33));
    assert!(close(interpolate_base_rate(675_000), 2_250.0));
}

#[test]
fn rating_factors_multiply() {
    let flat = Deductible::Flat { amount: 1_000 };
    assert!(close(rated_premium(150_000, &flat, false, 5), 700.0));

    let percentage = Deductible::WindHailPercentage { percentage: 0.02 };
    let rated = rated_premium(1_200_000, &percentage, true, 30);
    assert!(close(rated, 3_573.90), "rated {rated}");
}

#[test]
fn roof_surcharge_starts_after_twenty_five_years() {
    let flat = Deductible::Flat { amount: 1_000 };
    assert!(close(rated_premium(150_000, &flat, false, 25), 700.0));
    assert!(close(rated_premium(150_000, &flat, false, 26), 770.0));
}

#[test]
fn texas_breakdown_with_security_discount() {
    let breakdown = premium_breakdown(1_000.0, true, StateCode::Tx);
    assert!(close(breakdown.base_premium, 850.0));
    assert!(close(breakdown.endorsement_premium, 80.0));
    assert!(close(breakdown.discount, 30.0));
    assert!(close(breakdown.subtotal, 900.0));
    assert!(close(breakdown.state_tax, 32.4));
    assert!(close(breakdown.state_fee, 7.5));
    assert!(close(breakdown.total, 939.9));
    assert!((breakdown.monthly_option - breakdown.total / 12.0).abs() < 0.01);
}

#[test]
fn breakdown_without_security_has_no_discount() {
    let breakdown = premium_breakdown(2_000.0, false, StateCode::Tn);
    assert_eq!(breakdown.discount, 0.0);
    assert!(close(breakdown.subtotal, 1_860.0));
    assert!(close(breakdown.state_tax, 80.91));
    assert!(close(breakdown.total, 1_945.91));
}
