//! Artifact export/import tests
//!
//! Fits each model family, writes it to disk and serves it back through the
//! capability contract.

use std::fs::File;
use std::io::BufReader;

use model_core::prelude::*;

fn monthly_rate() -> Vec<f64> {
    (0..36)
        .map(|i| {
            let t = i as f64;
            5.5 - 0.02 * t + 0.3 * (t * std::f64::consts::PI / 6.0).sin()
        })
        .collect()
}

#[test]
fn exported_arima_serves_same_forecast() {
    let mut model = Arima::new(2, 1, 1).unwrap();
    model.fit(&monthly_rate()).unwrap();
    let expected = model.get_forecast(12).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sarimax_model_UR_Total.json");
    ModelArtifact::from(model)
        .to_writer(File::create(&path).unwrap())
        .unwrap();

    let artifact = ModelArtifact::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(ModelShape::probe(&artifact), Some(ModelShape::Confidence));

    let served = artifact
        .as_confidence_forecaster()
        .unwrap()
        .get_forecast(12)
        .unwrap();
    assert_eq!(served.forecast.len(), 12);
    for (a, b) in served.forecast.iter().zip(expected.forecast.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn exported_holt_serves_index_range() {
    let data = monthly_rate();
    let mut model = DoubleExponentialSmoothing::new(0.4, 0.2).unwrap();
    model.fit(&data).unwrap();
    let expected = model.predict(6).unwrap();

    let json = ModelArtifact::from(model).to_json().unwrap();
    let artifact = ModelArtifact::from_json_slice(json.as_bytes()).unwrap();
    assert_eq!(ModelShape::probe(&artifact), Some(ModelShape::IndexBased));

    let predictor = artifact.as_index_predictor().unwrap();
    let start = predictor.training_len().unwrap_or(0);
    assert_eq!(start, data.len());

    let served = predictor.predict_range(start, start + 5).unwrap();
    assert_eq!(served.len(), 6);
    for (a, b) in served.iter().zip(expected.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn exported_ses_serves_flat_forecast() {
    let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
    model.fit(&monthly_rate()).unwrap();
    let level = model.level();

    let json = ModelArtifact::from(model).to_json().unwrap();
    let artifact = ModelArtifact::from_json_slice(json.as_bytes()).unwrap();
    let predictor = artifact.as_index_predictor().unwrap();
    let served = predictor.predict_range(36, 38).unwrap();
    assert!(served.iter().all(|v| (v - level).abs() < 1e-12));
}
