//! Seasonal-gap mask construction.

use tracing::debug;

use crate::config::SeasonConfig;
use crate::doy::DayOfYear;
use crate::error::SeasonError;

/// Folds each timestamp onto the year, anchoring `t[0]` at day `lc_start`.
///
/// Element `i` is `(t[i] - t[0] + lc_start) mod 365.25`.
///
/// # Errors
///
/// Returns [`SeasonError::EmptyTimes`] if `t` is empty.
pub fn season_days(t: &[f64], lc_start: f64) -> Result<Vec<DayOfYear>, SeasonError> {
    let &origin = t.first().ok_or(SeasonError::EmptyTimes)?;
    Ok(t.iter()
        .map(|&ti| DayOfYear::from_elapsed(ti - origin + lc_start))
        .collect())
}

/// Marks the observations that fall inside the annual observing season.
///
/// The first timestamp is taken as the light curve's own origin and placed
/// on day `config.lc_start()`. An observation is kept iff its day-of-year is
/// strictly between `season_start` and `season_end`. Timestamps need not be
/// sorted; earlier-than-origin observations wrap into the previous year.
///
/// # Errors
///
/// Returns [`SeasonError::EmptyTimes`] if `t` is empty.
///
/// # Example
///
/// ```
/// use lumen_season::{SeasonConfig, season_mask};
///
/// // Start the light curve mid-season.
/// let config = SeasonConfig::new().with_lc_start(200.0);
/// let mask = season_mask(&[0.0, 50.0, 100.0, 300.0], &config).unwrap();
/// assert_eq!(mask, vec![true, true, false, true]);
/// ```
#[tracing::instrument(skip(t), fields(len = t.len()))]
pub fn season_mask(t: &[f64], config: &SeasonConfig) -> Result<Vec<bool>, SeasonError> {
    let mask: Vec<bool> = season_days(t, config.lc_start())?
        .into_iter()
        .map(|day| config.contains(day))
        .collect();
    debug!(
        in_season = mask.iter().filter(|&&m| m).count(),
        "season mask built"
    );
    Ok(mask)
}
