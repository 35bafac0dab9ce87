//! End-to-end mock survey: seasonal gaps, then sparse random cadence.

use approx::assert_abs_diff_eq;
use lumen_lightcurve::{LightCurve, LightCurveError, SeasonConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ten years of nightly photometry with a slow sinusoid and constant errors.
fn mock_curve() -> LightCurve {
    let time: Vec<f64> = (0..3653).map(|d| 50_000.0 + d as f64).collect();
    let flux: Vec<f64> = time.iter().map(|&t| 18.0 + 0.3 * (t / 200.0).sin()).collect();
    let err = vec![0.02; time.len()];
    LightCurve::new(time, flux, Some(err)).unwrap()
}

#[test]
fn seasonal_then_random() {
    let lc = mock_curve();
    let seasonal = lc.with_seasonal_gaps(&SeasonConfig::default()).unwrap();
    // About 180 of every 365.25 nights survive.
    assert!(
        (1750..=1850).contains(&seasonal.len()),
        "kept {} observations",
        seasonal.len()
    );

    let mut rng = StdRng::seed_from_u64(7);
    let sparse = seasonal.downsample_by_count(200, &mut rng).unwrap();
    assert_eq!(sparse.len(), 200);

    for w in sparse.time().windows(2) {
        assert!(w[0] < w[1]);
    }
    for (&t, &f) in sparse.time().iter().zip(sparse.flux()) {
        assert_abs_diff_eq!(f, 18.0 + 0.3 * (t / 200.0).sin(), epsilon = 1e-12);
    }
    assert_eq!(sparse.flux_err().map(<[f64]>::len), Some(200));
}

#[test]
fn seeded_runs_are_reproducible() {
    let lc = mock_curve();
    let a = lc
        .downsample_by_count(500, &mut StdRng::seed_from_u64(1))
        .unwrap();
    let b = lc
        .downsample_by_count(500, &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn resample_onto_survey_cadence() {
    let lc = mock_curve();
    // Three-day cadence, shifted by a third of a night.
    let grid: Vec<f64> = (0..1000).map(|k| 50_000.0 + 3.0 * k as f64 + 0.33).collect();
    let out = lc.downsample_to_times(&grid).unwrap();
    assert_eq!(out.len(), grid.len());
    for (&t_out, &t_sel) in grid.iter().zip(out.time()) {
        assert_abs_diff_eq!(t_sel, t_out - 0.33, epsilon = 1e-9);
    }
}

#[test]
fn too_many_observations_requested() {
    let lc = mock_curve();
    let seasonal = lc.with_seasonal_gaps(&SeasonConfig::default()).unwrap();
    let result = seasonal.downsample_by_count(lc.len(), &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(LightCurveError::Downsample(_))));
}

#[test]
fn inverted_season_empties_curve() {
    let config = SeasonConfig::new()
        .with_season_start(200.0)
        .with_season_end(100.0);
    let out = mock_curve().with_seasonal_gaps(&config).unwrap();
    assert!(out.is_empty());
    assert!(out.flux_err().is_some_and(<[f64]>::is_empty));
}
