//! Integration tests for the forecast stack
//!
//! Artifacts are written to temporary directories and served through the
//! file store, cache and engine.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use forecast_facade::{
    ForecastConfig, ForecastEngine, ForecastError, IndicatorKey, ModelStore,
};
use forecast_facade::FixedClock;
use model_core::{
    Arima, DoubleExponentialSmoothing, ModelArtifact, Predictor, SimpleExponentialSmoothing,
};

fn engine_for(dir: &Path) -> ForecastEngine {
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    ForecastConfig::builder()
        .model_dir(dir)
        .build()
        .build_engine_with_clock(Arc::new(FixedClock(today)))
}

fn write_artifact(dir: &Path, key: IndicatorKey, artifact: ModelArtifact) {
    let store = ForecastConfig::builder().model_dir(dir).build().model_store();
    fs::write(store.path_for(key), artifact.to_json().unwrap()).unwrap();
}

fn trend(n: usize) -> Vec<f64> {
    (0..n).map(|i| 60.0 + i as f64 * 0.1).collect()
}

#[test]
fn test_arima_artifact_forecast() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = Arima::new(1, 1, 0).unwrap();
    model.fit(&trend(48)).unwrap();
    write_artifact(dir.path(), IndicatorKey::LfprTotal, model.into());

    let engine = engine_for(dir.path());
    let series = engine.forecast(IndicatorKey::LfprTotal, 12).unwrap();

    assert_eq!(series.len(), 12);
    assert_eq!(series.start(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
    assert_eq!(
        series.points()[11].period,
        NaiveDate::from_ymd_opt(2027, 10, 1).unwrap()
    );
    assert!(series.values().all(f64::is_finite));
}

#[test]
fn test_index_based_artifact_forecasts_beyond_training_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
    model.fit(&[4.0, 4.0, 4.0, 4.0]).unwrap();
    write_artifact(dir.path(), IndicatorKey::UrTotal, model.into());

    let series = engine_for(dir.path())
        .forecast(IndicatorKey::UrTotal, 3)
        .unwrap();
    assert_eq!(series.values().collect::<Vec<_>>(), vec![4.0, 4.0, 4.0]);
}

#[test]
fn test_holt_artifact_follows_trend() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = DoubleExponentialSmoothing::new(0.8, 0.5).unwrap();
    model.fit(&trend(36)).unwrap();
    write_artifact(dir.path(), IndicatorKey::ErMale, model.into());

    let values: Vec<_> = engine_for(dir.path())
        .forecast(IndicatorKey::ErMale, 6)
        .unwrap()
        .values()
        .collect();
    assert!(values.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_unfitted_artifact_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let model = SimpleExponentialSmoothing::new(0.5).unwrap();
    write_artifact(dir.path(), IndicatorKey::UerTotal, model.into());

    assert_eq!(
        engine_for(dir.path()).forecast(IndicatorKey::UerTotal, 3),
        Err(ForecastError::UnsupportedModelShape {
            key: IndicatorKey::UerTotal,
            kind: "simple_exponential_smoothing".to_string()
        })
    );
}

#[test]
fn test_missing_then_present_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_for(dir.path());

    let err = engine.forecast(IndicatorKey::UrMale, 3).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::ArtifactNotFound {
            key: IndicatorKey::UrMale,
            ..
        }
    ));
    assert!(!engine.cache().is_cached(IndicatorKey::UrMale));

    let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
    model.fit(&trend(12)).unwrap();
    write_artifact(dir.path(), IndicatorKey::UrMale, model.into());

    assert!(engine.forecast(IndicatorKey::UrMale, 3).is_ok());
    assert_eq!(engine.cache().load_count(), 1);
}

#[test]
fn test_corrupt_then_repaired_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_for(dir.path());
    let path = engine.cache().locate(IndicatorKey::ErFemale);
    fs::write(&path, "{\"kind\": \"arima\", \"p\": ").unwrap();

    assert!(matches!(
        engine.forecast(IndicatorKey::ErFemale, 2),
        Err(ForecastError::ArtifactCorrupt { .. })
    ));

    let mut model = Arima::new(1, 0, 0).unwrap();
    model.fit(&trend(24)).unwrap();
    fs::write(&path, ModelArtifact::from(model).to_json().unwrap()).unwrap();

    assert_eq!(engine.forecast(IndicatorKey::ErFemale, 2).unwrap().len(), 2);
}

#[test]
fn test_unknown_kind_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_for(dir.path());
    fs::write(
        engine.cache().locate(IndicatorKey::LfprMale),
        r#"{"kind": "prophet"}"#,
    )
    .unwrap();

    assert!(matches!(
        engine.forecast(IndicatorKey::LfprMale, 2),
        Err(ForecastError::ArtifactCorrupt { .. })
    ));
}

#[test]
fn test_inconsistent_arima_artifact_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_for(dir.path());
    fs::write(
        engine.cache().locate(IndicatorKey::UrTotal),
        r#"{"kind": "arima", "p": 2, "d": 1, "q": 0,
            "ar_coeffs": [], "ma_coeffs": [], "constant": 0.0,
            "original_data": [], "differenced_data": [], "residuals": [],
            "fitted": true}"#,
    )
    .unwrap();

    match engine.forecast(IndicatorKey::UrTotal, 3) {
        Err(ForecastError::ArtifactCorrupt { key, reason, .. }) => {
            assert_eq!(key, IndicatorKey::UrTotal);
            assert!(reason.contains("ar_coeffs"), "{}", reason);
        }
        other => panic!("expected a corrupt artifact, got {:?}", other),
    }
}

#[test]
fn test_repeated_forecasts_load_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
    model.fit(&trend(12)).unwrap();
    write_artifact(dir.path(), IndicatorKey::UrTotal, model.into());

    let engine = engine_for(dir.path());
    let first = engine.forecast(IndicatorKey::UrTotal, 6).unwrap();
    fs::remove_file(engine.cache().locate(IndicatorKey::UrTotal)).unwrap();
    let second = engine.forecast(IndicatorKey::UrTotal, 6).unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.cache().load_count(), 1);
}

#[test]
fn test_forecast_with_confidence_for_arima() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<f64> = (0..40).map(|i| 5.0 + ((i * 7) % 5) as f64 * 0.1).collect();
    let mut model = Arima::new(1, 0, 0).unwrap();
    model.fit(&data).unwrap();
    write_artifact(dir.path(), IndicatorKey::UrFemale, model.into());

    let band = engine_for(dir.path())
        .forecast_with_confidence(IndicatorKey::UrFemale, 4)
        .unwrap();
    assert_eq!(band.series.len(), 4);
    for ((lo, hi), value) in band.lower.iter().zip(&band.upper).zip(band.series.values()) {
        assert!(*lo <= value && value <= *hi);
    }
}

#[test]
fn test_store_locates_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = ForecastConfig::builder()
        .model_dir(dir.path())
        .artifact_prefix("ses_model")
        .build()
        .model_store();
    assert_eq!(
        store.locate(IndicatorKey::UerFemale),
        dir.path().join("ses_model_UER_Female.json").display().to_string()
    );
}
