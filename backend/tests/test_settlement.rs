//! Settlement Aggregation Tests
//!
//! Aggregation of priced trips into a payable settlement and the integrity
//! checks run before hand-off.

use chrono::NaiveDate;
use freight_settlement_core_rs::{
    compute_trip_cost, schedule_period, DayCost, EngineConfig, Fortnight, PlanDay, Settlement,
    SettlementError, SettlementLine, TripCostCalculator, WeeklyCostPlan,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper: single-day plan priced at 215_000 per Monday trip
fn monday_plan() -> WeeklyCostPlan {
    WeeklyCostPlan::new(50_000).with_day(
        DayCost::new(PlanDay::Monday)
            .with_distance(250.0)
            .with_fuel(120_000)
            .with_extras(15_000)
            .with_overnight(60_000),
    )
}

/// Helper: two vehicles, three Monday trips in the first March 2024 fortnight
fn sample_lines() -> Vec<SettlementLine> {
    let cost = compute_trip_cost(Some(&monday_plan()), 1, false);
    vec![
        SettlementLine::new("TRK-001", date(2024, 3, 4), cost.clone()),
        SettlementLine::new("TRK-002", date(2024, 3, 4), cost.clone()),
        SettlementLine::new("TRK-001", date(2024, 3, 11), cost),
    ]
}

fn sample_settlement() -> Settlement {
    Settlement::from_lines(
        Fortnight::containing(date(2024, 3, 1)),
        sample_lines(),
        &EngineConfig::default(),
    )
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_component_totals() {
    let s = sample_settlement();

    assert_eq!(s.trip_count, 3);
    assert_eq!(s.fuel, 360_000);
    assert_eq!(s.tolls, 150_000);
    assert_eq!(s.extras, 45_000);
    assert_eq!(s.overnight, 90_000);
    assert_eq!(s.overnight_nights, 3);
    assert_eq!(s.distance_km, 750.0);
}

#[test]
fn test_gross_deduction_net() {
    let s = sample_settlement();

    assert_eq!(s.gross, 645_000);
    assert_eq!(s.deduction, 6_450); // 1%
    assert_eq!(s.net, 638_550);
}

#[test]
fn test_deduction_follows_configured_rate() {
    let config = EngineConfig {
        retention_rate_bps: 350,
        ..EngineConfig::default()
    };
    let s = Settlement::from_lines(Fortnight::containing(date(2024, 3, 1)), sample_lines(), &config);

    // 645_000 * 3.5% = 22_575
    assert_eq!(s.deduction, 22_575);
    assert_eq!(s.net, 622_425);
}

#[test]
fn test_empty_settlement() {
    let s = Settlement::from_lines(
        Fortnight::containing(date(2024, 3, 1)),
        Vec::new(),
        &EngineConfig::default(),
    );
    assert_eq!(s.trip_count, 0);
    assert_eq!(s.gross, 0);
    assert_eq!(s.deduction, 0);
    assert_eq!(s.net, 0);
}

#[test]
fn test_vehicle_totals_in_first_appearance_order() {
    let totals = sample_settlement().vehicle_totals();

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].vehicle_id, "TRK-001");
    assert_eq!(totals[0].trip_count, 2);
    assert_eq!(totals[0].gross, 430_000);
    assert_eq!(totals[1].vehicle_id, "TRK-002");
    assert_eq!(totals[1].gross, 215_000);
}

#[test]
fn test_cost_breakdown_feeds_distribution_chart() {
    let breakdown = sample_settlement().cost_breakdown();
    assert_eq!(breakdown.base_freight, 0);
    assert_eq!(breakdown.extra_freight, 45_000);
    assert_eq!(breakdown.deductions, 6_450);
    assert_eq!(breakdown.total, 645_000);

    let shares = breakdown.percentages();
    assert_eq!(shares.fuel, 56); // 55.81
    assert_eq!(shares.tolls, 23); // 23.26
    assert_eq!(shares.overnight, 14); // 13.95
    assert_eq!(shares.extra_freight, 7); // 6.98
    assert_eq!(shares.deductions, 1);
}

#[test]
fn test_settlement_from_scheduled_period() {
    let calculator = TripCostCalculator::default();
    let period = Fortnight::containing(date(2024, 3, 1));
    let trips = schedule_period(&calculator, &monday_plan(), &period).unwrap();

    let lines = trips
        .into_iter()
        .map(|t| SettlementLine::new("TRK-001", t.date, t.cost))
        .collect();
    let s = Settlement::from_lines(period, lines, calculator.config());

    // Mondays 4 and 11
    assert_eq!(s.trip_count, 2);
    assert_eq!(s.gross, 430_000);
}

// ============================================================================
// Integrity Checks
// ============================================================================

#[test]
fn test_aggregated_settlement_is_valid() {
    assert_eq!(sample_settlement().validate(&EngineConfig::default()), Ok(()));
}

#[test]
fn test_empty_settlement_is_valid() {
    let s = Settlement::from_lines(
        Fortnight::containing(date(2024, 3, 1)),
        Vec::new(),
        &EngineConfig::default(),
    );
    assert!(s.validate(&EngineConfig::default()).is_ok());
}

#[test]
fn test_validation_is_repeatable() {
    let config = EngineConfig::default();
    let s = sample_settlement();
    assert_eq!(s.validate(&config), s.validate(&config));
    assert_eq!(s, sample_settlement());
}

#[test]
fn test_tampered_gross_fails_validation() {
    let mut s = sample_settlement();
    s.gross += 1;

    assert_eq!(
        s.validate(&EngineConfig::default()),
        Err(SettlementError::GrossMismatch {
            gross: 645_001,
            line_total: 645_000,
        })
    );
}

#[test]
fn test_tampered_net_fails_validation() {
    let mut s = sample_settlement();
    s.net -= 100;

    assert!(matches!(
        s.validate(&EngineConfig::default()),
        Err(SettlementError::NetMismatch { .. })
    ));
}

#[test]
fn test_trip_count_mismatch_fails_validation() {
    let mut s = sample_settlement();
    s.trip_count = 10;

    assert_eq!(
        s.validate(&EngineConfig::default()),
        Err(SettlementError::TripCountMismatch {
            trip_count: 10,
            lines: 3,
        })
    );
}

#[test]
fn test_line_outside_period_fails_validation() {
    let cost = compute_trip_cost(Some(&monday_plan()), 1, false);
    let lines = vec![SettlementLine::new("TRK-001", date(2024, 3, 18), cost)];
    let s = Settlement::from_lines(
        Fortnight::containing(date(2024, 3, 1)),
        lines,
        &EngineConfig::default(),
    );

    assert_eq!(
        s.validate(&EngineConfig::default()),
        Err(SettlementError::LineOutsidePeriod {
            vehicle_id: "TRK-001".to_string(),
            date: date(2024, 3, 18),
            start: date(2024, 3, 1),
            end: date(2024, 3, 15),
        })
    );
}

#[test]
fn test_validation_under_different_rate_than_computed_fails() {
    // Computed at 1%, checked against 2%
    let config = EngineConfig {
        retention_rate_bps: 200,
        ..EngineConfig::default()
    };

    assert_eq!(
        sample_settlement().validate(&config),
        Err(SettlementError::DeductionMismatch {
            deduction: 6_450,
            expected: 12_900,
        })
    );
}

#[test]
fn test_settlement_at_custom_rate_validates_under_that_rate() {
    let config = EngineConfig {
        retention_rate_bps: 200,
        ..EngineConfig::default()
    };
    let s = Settlement::from_lines(Fortnight::containing(date(2024, 3, 1)), sample_lines(), &config);

    assert!(s.validate(&config).is_ok());
    assert!(s.validate(&EngineConfig::default()).is_err());
}
