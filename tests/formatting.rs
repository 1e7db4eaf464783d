use rivalry_monitor::{format_compact, format_percent, format_regional, growth_indicator};

#[test]
fn regional_uses_crore_lakh_and_thousand_suffixes() {
    assert_eq!(format_regional(15_000_000.0), "1.5Cr");
    assert_eq!(format_regional(250_000.0), "2.5L");
    assert_eq!(format_regional(4_500.0), "4.5K");
    assert_eq!(format_regional(10_000_000.0), "1.0Cr");
    assert_eq!(format_regional(99_999.0), "100.0K");
}

#[test]
fn compact_uses_million_and_thousand_suffixes() {
    assert_eq!(format_compact(2_500_000.0), "2.5M");
    assert_eq!(format_compact(15_000_000.0), "15.0M");
    assert_eq!(format_compact(1_000.0), "1.0K");
    assert_eq!(format_compact(250_000.0), "250.0K");
}

#[test]
fn small_integers_render_unchanged() {
    for n in [0u32, 1, 42, 500, 999] {
        assert_eq!(format_regional(f64::from(n)), n.to_string());
        assert_eq!(format_compact(f64::from(n)), n.to_string());
    }
    assert_eq!(format_regional(12.5), "12.5");
}

#[test]
fn missing_and_non_finite_values_render_zero() {
    assert_eq!(format_regional(None), "0");
    assert_eq!(format_compact(None), "0");
    assert_eq!(format_regional(f64::NAN), "0");
    assert_eq!(format_compact(f64::INFINITY), "0");
    assert_eq!(format_regional(Some(1_250.0)), "1.3K");
}

#[test]
fn percent_keeps_one_decimal() {
    assert_eq!(format_percent(12.34), "12.3%");
    assert_eq!(format_percent(50.0), "50.0%");
}

#[test]
fn growth_indicator_reports_direction() {
    let up = growth_indicator(112.5, 100.0).expect("baseline is non-zero");
    assert_eq!(up.value, "12.5");
    assert!(up.is_positive);
    assert_eq!(up.arrow, '↑');

    let down = growth_indicator(80.0, 100.0).expect("baseline is non-zero");
    assert_eq!(down.value, "20.0");
    assert!(!down.is_positive);
    assert_eq!(down.arrow, '↓');

    assert!(growth_indicator(10.0, 0.0).is_none());
    assert!(growth_indicator(10.0, f64::NAN).is_none());
}

#[test]
fn huge_values_below_the_thresholds_keep_their_magnitude() {
    assert_eq!(format_regional(-1e20), "-100000000000000000000");
    assert_eq!(format_compact(-12_345_678.0), "-12345678");
    assert_eq!(format_regional(-0.0), "0");
}
