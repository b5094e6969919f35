//! Unit tests for the forecast facade
//!
//! Exercise the public surface without touching the filesystem.

use forecast_facade::{
    calendar, export, ForecastConfig, ForecastError, ForecastPoint, ForecastRequest,
    ForecastSeries, IndicatorCatalog, IndicatorKey, DEFAULT_MAX_HORIZON,
};

use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_catalog_order_and_default() {
    let keys: Vec<_> = IndicatorCatalog::all().map(|i| i.key.to_string()).collect();
    assert_eq!(keys.first().map(String::as_str), Some("LFPR_Total"));
    assert_eq!(keys.last().map(String::as_str), Some("UER_Female"));
    assert_eq!(IndicatorCatalog::default_key(), IndicatorKey::LfprTotal);
}

#[test]
fn test_catalog_rejects_unknown_key() {
    assert_eq!(
        IndicatorCatalog::parse("GDP_Total"),
        Err(ForecastError::UnknownIndicator("GDP_Total".to_string()))
    );
}

#[test]
fn test_key_round_trips_through_string() {
    for key in IndicatorKey::ALL {
        assert_eq!(IndicatorCatalog::parse(key.as_str()), Ok(key));
    }
}

// ============================================================================
// Request / Series Tests
// ============================================================================

#[test]
fn test_request_validation() {
    assert!(ForecastRequest::new(IndicatorKey::UrTotal, 1)
        .validate(DEFAULT_MAX_HORIZON)
        .is_ok());
    assert!(ForecastRequest::new(IndicatorKey::UrTotal, DEFAULT_MAX_HORIZON)
        .validate(DEFAULT_MAX_HORIZON)
        .is_ok());
    assert_eq!(
        ForecastRequest::new(IndicatorKey::UrTotal, DEFAULT_MAX_HORIZON + 1)
            .validate(DEFAULT_MAX_HORIZON),
        Err(ForecastError::InvalidHorizon {
            horizon: DEFAULT_MAX_HORIZON + 1,
            max: DEFAULT_MAX_HORIZON
        })
    );
}

#[test]
fn test_series_from_calendar() {
    let start = calendar::next_month_start(ymd(2026, 2, 14)).unwrap();
    let points = calendar::month_starts(start, 3)
        .unwrap()
        .into_iter()
        .zip([5.0, 6.0, 7.0])
        .map(|(period, value)| ForecastPoint::new(period, value))
        .collect();

    let series = ForecastSeries::new(IndicatorKey::ErTotal, points).unwrap();
    assert_eq!(series.start(), ymd(2026, 3, 1));
    assert_eq!(series.summary().mean, 6.0);
    assert_eq!(
        export::to_csv_string(&series).unwrap(),
        "Period,Value\n2026-03-01,5.0\n2026-04-01,6.0\n2026-05-01,7.0\n"
    );
}

#[test]
fn test_series_json_shape() {
    let series = ForecastSeries::new(
        IndicatorKey::UrFemale,
        vec![ForecastPoint::new(ymd(2027, 1, 1), 3.5)],
    )
    .unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["indicator"], "UR_Female");
    assert_eq!(json["points"][0]["period"], "2027-01-01");
    assert_eq!(json["points"][0]["value"], 3.5);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_default_config() {
    let config = ForecastConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.max_horizon, DEFAULT_MAX_HORIZON);
}
