use fuel_subsidy_core::engine::calculator::{calculate, calculate_str, FuelCalculator};
use fuel_subsidy_core::engine::validation::quantity_from_f64;
use fuel_subsidy_core::TariffConfig;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn approx(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected ~{expected}, got {actual}"
    );
}

fn ron95() -> TariffConfig {
    TariffConfig {
        current_flat_price: dec!(2.05),
        new_subsidized_price: dec!(1.99),
        subsidy_limit_litres: dec!(300),
        above_limit_price: dec!(2.60),
        market_price: dec!(2.60),
    }
}

// ===========================================================================
// Reference drivers
// ===========================================================================

#[test]
fn test_commuter_spending_300_saves_under_tiered_scheme() {
    let r = calculate(Some(dec!(50)), Some(dec!(300)), &ron95()).unwrap();

    approx(r.monthly_litres, dec!(146.34), dec!(0.01));
    assert!(!r.exceeds_limit);
    approx(r.new_cost, dec!(291.22), dec!(0.01));
    approx(r.savings_new_vs_current, dec!(8.78), dec!(0.01));
    assert_eq!(r.subsidized_litres, r.monthly_litres);
    assert_eq!(r.unsubsidized_litres, Decimal::ZERO);

    // Market baseline: 146.34 * 2.60 = 380.49
    approx(r.no_subsidy_cost, dec!(380.49), dec!(0.01));
    approx(r.savings_current_vs_market, dec!(80.49), dec!(0.01));
    approx(r.savings_new_vs_market, dec!(89.27), dec!(0.01));
}

#[test]
fn test_heavy_driver_spending_700_pays_more() {
    let r = calculate(Some(dec!(50)), Some(dec!(700)), &ron95()).unwrap();

    approx(r.monthly_litres, dec!(341.46), dec!(0.01));
    assert!(r.exceeds_limit);
    assert_eq!(r.subsidized_litres, dec!(300));
    approx(r.unsubsidized_litres, dec!(41.46), dec!(0.01));
    // 300 * 1.99 + 41.46 * 2.60
    approx(r.new_cost, dec!(704.80), dec!(0.01));
    approx(r.savings_new_vs_current, dec!(-4.80), dec!(0.01));
}

#[test]
fn test_refuel_count_for_50_litre_tank() {
    let r = calculate(Some(dec!(50)), Some(dec!(300)), &ron95()).unwrap();
    // ceil(146.34 / 50)
    assert_eq!(r.refuel_count, 3);
}

#[test]
fn test_annual_projection_is_monthly_times_twelve() {
    let r = calculate(Some(dec!(50)), Some(dec!(300)), &ron95()).unwrap();
    assert_eq!(r.annual.savings_new_vs_current, r.savings_new_vs_current * dec!(12));
    assert_eq!(r.annual.savings_current_vs_market, r.savings_current_vs_market * dec!(12));
    assert_eq!(r.annual.savings_new_vs_market, r.savings_new_vs_market * dec!(12));
}

// ===========================================================================
// Tier boundary
// ===========================================================================

#[test]
fn test_spend_landing_exactly_on_limit_stays_subsidized() {
    // 615 / 2.05 = 300 L exactly
    let r = calculate(Some(dec!(50)), Some(dec!(615)), &ron95()).unwrap();
    assert_eq!(r.monthly_litres, dec!(300));
    assert!(!r.exceeds_limit);
    assert_eq!(r.unsubsidized_litres, Decimal::ZERO);
    assert_eq!(r.subsidized_litres, dec!(300));
    assert_eq!(r.new_cost, dec!(597));
}

#[test]
fn test_one_cent_past_limit_spend_crosses_tier() {
    let r = calculate(Some(dec!(50)), Some(dec!(615.01)), &ron95()).unwrap();
    assert!(r.exceeds_limit);
    assert_eq!(r.subsidized_litres, dec!(300));
    assert!(r.unsubsidized_litres > Decimal::ZERO);
}

#[test]
fn test_tiers_always_sum_to_total() {
    let tariff = ron95();
    for spend in [1, 50, 299, 300, 614, 615, 616, 700, 1_500, 25_000] {
        let r = calculate(Some(dec!(40)), Some(Decimal::from(spend)), &tariff).unwrap();
        approx(
            r.subsidized_litres + r.unsubsidized_litres,
            r.monthly_litres,
            dec!(0.0000001),
        );
    }
}

// ===========================================================================
// Monotonicity and idempotence
// ===========================================================================

#[test]
fn test_costs_never_decrease_with_spend() {
    let tariff = ron95();
    let mut previous = calculate(Some(dec!(50)), Some(dec!(10)), &tariff).unwrap();
    let mut spend = dec!(10);
    while spend <= dec!(2000) {
        let r = calculate(Some(dec!(50)), Some(spend), &tariff).unwrap();
        assert!(r.monthly_litres >= previous.monthly_litres);
        assert!(r.new_cost >= previous.new_cost);
        assert!(r.no_subsidy_cost >= previous.no_subsidy_cost);
        previous = r;
        spend += dec!(17.5);
    }
}

#[test]
fn test_identical_inputs_identical_results() {
    let tariff = ron95();
    let first = calculate(Some(dec!(45)), Some(dec!(812.34)), &tariff);
    let second = calculate(Some(dec!(45)), Some(dec!(812.34)), &tariff);
    assert_eq!(first, second);
}

// ===========================================================================
// Absent results
// ===========================================================================

#[test]
fn test_zero_spend_is_absent() {
    assert!(calculate(Some(dec!(50)), Some(Decimal::ZERO), &ron95()).is_none());
}

#[test]
fn test_non_positive_inputs_absent_for_any_tariff() {
    let regimes = [
        ron95(),
        TariffConfig {
            current_flat_price: dec!(1.50),
            new_subsidized_price: dec!(1.20),
            subsidy_limit_litres: dec!(100),
            above_limit_price: dec!(3.10),
            market_price: dec!(3.00),
        },
    ];
    for tariff in &regimes {
        assert!(calculate(Some(dec!(0)), Some(dec!(300)), tariff).is_none());
        assert!(calculate(Some(dec!(-1)), Some(dec!(300)), tariff).is_none());
        assert!(calculate(Some(dec!(50)), Some(dec!(-300)), tariff).is_none());
        assert!(calculate(None, None, tariff).is_none());
    }
}

#[test]
fn test_unparsable_text_matches_non_positive() {
    let tariff = ron95();
    assert_eq!(calculate_str("", "300", &tariff), None);
    assert_eq!(calculate_str("50", "", &tariff), None);
    assert_eq!(calculate_str("fifty", "300", &tariff), None);
    assert_eq!(calculate_str("50", "0", &tariff), None);
}

#[test]
fn test_nan_from_float_entry_is_absent() {
    let r = calculate(quantity_from_f64(50.0), quantity_from_f64(f64::NAN), &ron95());
    assert!(r.is_none());
}

// ===========================================================================
// Alternative tariff regimes
// ===========================================================================

#[test]
fn test_above_limit_price_independent_of_market_price() {
    let tariff = TariffConfig {
        above_limit_price: dec!(2.40),
        market_price: dec!(2.90),
        ..ron95()
    };
    // 820 / 2.05 = 400 L
    let r = calculate(Some(dec!(50)), Some(dec!(820)), &tariff).unwrap();
    assert_eq!(r.monthly_litres, dec!(400));
    // 300 * 1.99 + 100 * 2.40
    assert_eq!(r.new_cost, dec!(837));
    // 400 * 2.90
    assert_eq!(r.no_subsidy_cost, dec!(1160));
}

#[test]
fn test_calculator_reuses_validated_tariff() {
    let calc = FuelCalculator::new(ron95()).unwrap();
    assert_eq!(calc.tariff(), &ron95());
    assert_eq!(
        calc.calculate_str("50", "300"),
        calculate(Some(dec!(50)), Some(dec!(300)), &ron95())
    );
}

#[test]
fn test_result_serialises_decimals_as_strings() {
    let r = calculate(Some(dec!(50)), Some(dec!(205)), &ron95()).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    let litres: Decimal = json["monthly_litres"].as_str().unwrap().parse().unwrap();
    assert_eq!(litres, dec!(100));
    assert_eq!(json["refuel_count"], 2);
    assert_eq!(json["exceeds_limit"], false);
    assert!(json["annual"]["savings_new_vs_current"].is_string());
}
