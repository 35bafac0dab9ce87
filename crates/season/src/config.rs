//! Observing-season window parameters.

use crate::doy::DayOfYear;

/// Observing-season parameters, all in days within the year.
///
/// Values are conceptually in `[0, 365.25)` but are not validated.
/// A window with `season_start >= season_end` is empty and masks out
/// every observation.
///
/// # Example
///
/// ```
/// use lumen_season::SeasonConfig;
///
/// let config = SeasonConfig::new()
///     .with_lc_start(30.0)
///     .with_season_start(60.0)
///     .with_season_end(300.0);
///
/// assert_eq!(config.season_length(), 240.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonConfig {
    /// Day of the year on which the first observation falls.
    lc_start: f64,
    /// Exclusive lower bound of the observable window.
    season_start: f64,
    /// Exclusive upper bound of the observable window.
    season_end: f64,
}

impl SeasonConfig {
    /// Creates a configuration with the default window.
    ///
    /// Defaults: `lc_start = 0`, `season_start = 90`, `season_end = 270`.
    pub fn new() -> Self {
        Self {
            lc_start: 0.0,
            season_start: 90.0,
            season_end: 270.0,
        }
    }

    /// Sets the day of the year on which the light curve starts.
    pub fn with_lc_start(mut self, lc_start: f64) -> Self {
        self.lc_start = lc_start;
        self
    }

    /// Sets the first (excluded) day of the observing season.
    pub fn with_season_start(mut self, season_start: f64) -> Self {
        self.season_start = season_start;
        self
    }

    /// Sets the last (excluded) day of the observing season.
    pub fn with_season_end(mut self, season_end: f64) -> Self {
        self.season_end = season_end;
        self
    }

    /// Returns the starting day of the light curve.
    pub fn lc_start(&self) -> f64 {
        self.lc_start
    }

    /// Returns the season start day.
    pub fn season_start(&self) -> f64 {
        self.season_start
    }

    /// Returns the season end day.
    pub fn season_end(&self) -> f64 {
        self.season_end
    }

    /// Length of the observable window in days, zero for an inverted window.
    pub fn season_length(&self) -> f64 {
        (self.season_end - self.season_start).max(0.0)
    }

    /// Returns `true` if `day` lies strictly inside the season.
    pub fn contains(&self, day: DayOfYear) -> bool {
        let d = day.get();
        self.season_start < d && d < self.season_end
    }
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self::new()
    }
}
