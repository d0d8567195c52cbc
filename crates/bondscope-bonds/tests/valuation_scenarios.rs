//! End-to-end valuation scenarios through [`ValuationEngine`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use bondscope_bonds::prelude::*;
use bondscope_core::types::{Date, Frequency};
use bondscope_traits::{parse_observation_value, BenchmarkSource, SeriesId, SourceType, TraitError};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Serves raw published values, the way a remote series would.
struct PublishedSeries {
    values: HashMap<(String, Date), &'static str>,
    lookups: Mutex<Vec<Date>>,
}

impl PublishedSeries {
    fn new(values: &[(&str, Date, &'static str)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(s, d, v)| ((s.to_string(), *d), *v))
                .collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    fn lookups(&self) -> Vec<Date> {
        self.lookups.lock().unwrap().clone()
    }
}

impl BenchmarkSource for PublishedSeries {
    fn source_type(&self) -> SourceType {
        SourceType::Snapshot
    }

    fn get_rate(&self, series: &SeriesId, date: Date) -> Result<Option<Decimal>, TraitError> {
        self.lookups.lock().unwrap().push(date);
        match self.values.get(&(series.to_string(), date)) {
            Some(raw) => parse_observation_value(raw),
            None => Ok(None),
        }
    }
}

fn scenario_yield_known() -> BondTerms {
    BondTerms::builder()
        .face_value(1000.0)
        .coupon_rate(0.07)
        .frequency(Frequency::Annual)
        .settlement(date(2020, 1, 1))
        .maturity(date(2035, 12, 31))
        .build()
        .unwrap()
}

fn scenario_price_known() -> BondTerms {
    BondTerms::builder()
        .face_value(1000.0)
        .coupon_rate(0.08)
        .frequency(Frequency::SemiAnnual)
        .settlement(date(2020, 1, 1))
        .maturity(date(2026, 1, 1))
        .build()
        .unwrap()
}

#[test]
fn test_yield_known_scenario() {
    let record = ValuationEngine::without_benchmark()
        .value(scenario_yield_known(), Quote::Yield(0.09))
        .unwrap();

    assert!(record.price() < 1000.0);
    assert_relative_eq!(record.price(), 838.786_231, epsilon = 1e-5);
    assert_relative_eq!(record.macaulay_duration(), 9.238_110, epsilon = 1e-5);
    assert_relative_eq!(record.modified_duration(), 8.475_330, epsilon = 1e-5);
    assert_relative_eq!(record.convexity(), 102.940_263, epsilon = 1e-4);
    assert_eq!(record.tenor(), Tenor::TenYear);
    assert_eq!(record.tenor().to_string(), "10 Year");
}

#[test]
fn test_price_known_scenario() {
    let record = ValuationEngine::without_benchmark()
        .value(scenario_price_known(), Quote::Price(911.37))
        .unwrap();

    assert!(record.yield_to_maturity() > 0.08);
    assert_relative_eq!(record.yield_to_maturity(), 0.099_998_75, epsilon = 1e-6);
    assert_relative_eq!(record.price(), 911.37);
    assert!(record.resolution().converged());
    assert!(matches!(
        record.resolution(),
        Resolution::YieldFromPrice { iterations, converged: true } if iterations > 1
    ));
    assert_relative_eq!(record.macaulay_duration(), 4.817_787, epsilon = 1e-5);
    assert_relative_eq!(record.convexity(), 26.262_533, epsilon = 1e-4);
    assert_eq!(record.tenor(), Tenor::FiveYear);
}

#[test]
fn test_zero_coupon_scenario() {
    let terms = BondTerms::builder()
        .face_value(1000.0)
        .coupon_rate(0.0)
        .frequency(Frequency::SemiAnnual)
        .settlement(date(2020, 1, 1))
        .maturity(date(2030, 1, 1))
        .build()
        .unwrap();

    let record = ValuationEngine::without_benchmark()
        .value(terms, Quote::Price(600.0))
        .unwrap();

    assert!(record.resolution().converged());
    assert_relative_eq!(record.macaulay_duration(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(record.yield_to_maturity(), 0.051_739_84, epsilon = 1e-5);
}

#[test]
fn test_benchmark_found_after_weekend() {
    // 2024-03-03 is a Sunday; the series has a gap marker on Saturday
    let source = Arc::new(PublishedSeries::new(&[
        ("DGS5", date(2024, 3, 2), "."),
        ("DGS5", date(2024, 3, 1), "4.25"),
    ]));
    let terms = BondTerms::builder()
        .face_value(1000.0)
        .coupon_rate(0.05)
        .frequency(Frequency::SemiAnnual)
        .settlement(date(2024, 3, 3))
        .maturity(date(2029, 3, 3))
        .build()
        .unwrap();

    let record = ValuationEngine::new(source.clone())
        .value(terms, Quote::Yield(0.055))
        .unwrap();

    assert_eq!(record.tenor(), Tenor::FiveYear);
    assert_relative_eq!(record.benchmark_yield().unwrap(), 0.0425, epsilon = 1e-12);
    assert_relative_eq!(record.spread_bps().unwrap(), 125.0, epsilon = 1e-6);
    assert_eq!(
        record.benchmark().unwrap().observation_date,
        date(2024, 3, 1)
    );
    assert_eq!(
        source.lookups(),
        vec![date(2024, 3, 3), date(2024, 3, 2), date(2024, 3, 1)]
    );
}

#[test]
fn test_benchmark_absent_is_not_an_error() {
    let source = Arc::new(PublishedSeries::new(&[]));
    let record = ValuationEngine::new(source.clone())
        .value(scenario_yield_known(), Quote::Yield(0.09))
        .unwrap();

    assert!(record.benchmark_yield().is_none());
    assert!(record.spread().is_none());
    assert_eq!(source.lookups().len(), 7);
}

#[test]
fn test_settlement_on_maturity() {
    let terms = BondTerms::builder()
        .face_value(1000.0)
        .coupon_rate(0.05)
        .frequency(Frequency::Annual)
        .settlement(date(2030, 1, 1))
        .maturity(date(2030, 1, 1))
        .build()
        .unwrap();

    let engine = ValuationEngine::without_benchmark();

    let record = engine.value(terms, Quote::Yield(0.05)).unwrap();
    assert_relative_eq!(record.price(), 1000.0);
    assert_relative_eq!(record.macaulay_duration(), 0.0);
    assert_eq!(record.tenor(), Tenor::OneMonth);

    // no periods left to solve over
    assert!(matches!(
        engine.value(terms, Quote::Price(1000.0)),
        Err(BondError::NumericallyUndefined { .. })
    ));
}

#[test]
fn test_curve_from_record() {
    let record = ValuationEngine::without_benchmark()
        .value(scenario_yield_known(), Quote::Yield(0.09))
        .unwrap();
    let curve = PriceYieldCurve::sample(&record);

    assert_eq!(curve.points().len(), 201);
    assert_relative_eq!(curve.points()[0].yield_value, 0.045, epsilon = 1e-12);
    assert_relative_eq!(curve.points()[200].yield_value, 0.135, epsilon = 1e-12);
}
