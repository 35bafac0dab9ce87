//! Paired time/flux/error columns with downsampling operations.

use lumen_downsample::{apply_mask, nearest_indices, random_count_mask, take_indices};
use lumen_season::{SeasonConfig, season_mask};
use rand::Rng;
use tracing::debug;

use crate::error::LightCurveError;

/// A light curve: flux measurements (and optional errors) at observation times.
///
/// All columns have the same length. Every operation returns a new curve and
/// leaves `self` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
    flux_err: Option<Vec<f64>>,
}

impl LightCurve {
    /// Builds a light curve from its columns.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::LengthMismatch`] if `flux` or `flux_err`
    /// differ in length from `time`.
    pub fn new(
        time: Vec<f64>,
        flux: Vec<f64>,
        flux_err: Option<Vec<f64>>,
    ) -> Result<Self, LightCurveError> {
        let n = time.len();
        if flux.len() != n {
            return Err(LightCurveError::LengthMismatch {
                field: "flux",
                expected: n,
                got: flux.len(),
            });
        }
        if let Some(err) = &flux_err
            && err.len() != n
        {
            return Err(LightCurveError::LengthMismatch {
                field: "flux_err",
                expected: n,
                got: err.len(),
            });
        }
        Ok(Self {
            time,
            flux,
            flux_err,
        })
    }

    /// Observation timestamps.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Flux measurements.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Flux uncertainties, if present.
    pub fn flux_err(&self) -> Option<&[f64]> {
        self.flux_err.as_deref()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the curve has no observations.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Keeps the rows whose mask entry is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::Downsample`] if the mask length differs from [`len`](Self::len).
    pub fn select(&self, mask: &[bool]) -> Result<Self, LightCurveError> {
        Ok(Self {
            time: apply_mask(&self.time, mask)?,
            flux: apply_mask(&self.flux, mask)?,
            flux_err: self
                .flux_err
                .as_deref()
                .map(|e| apply_mask(e, mask))
                .transpose()?,
        })
    }

    /// Gathers the rows at `indices`, in that order. Indices may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::Downsample`] if an index is out of bounds.
    pub fn take(&self, indices: &[usize]) -> Result<Self, LightCurveError> {
        Ok(Self {
            time: take_indices(&self.time, indices)?,
            flux: take_indices(&self.flux, indices)?,
            flux_err: self
                .flux_err
                .as_deref()
                .map(|e| take_indices(e, indices))
                .transpose()?,
        })
    }

    /// Keeps `n_obs` observations chosen uniformly at random, in time order.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::Downsample`] if `n_obs > self.len()`.
    pub fn downsample_by_count(
        &self,
        n_obs: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, LightCurveError> {
        let mask = random_count_mask(&self.time, n_obs, rng)?;
        self.select(&mask)
    }

    /// Resamples onto `t_out`, taking the nearest observation for each target time.
    ///
    /// The result keeps the original timestamps of the chosen observations,
    /// one row per element of `t_out`.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::Downsample`] if the curve is empty.
    pub fn downsample_to_times(&self, t_out: &[f64]) -> Result<Self, LightCurveError> {
        let indices = nearest_indices(&self.time, t_out)?;
        self.take(&indices)
    }

    /// Drops the observations that fall outside the annual observing season.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::Season`] if the curve is empty.
    pub fn with_seasonal_gaps(&self, config: &SeasonConfig) -> Result<Self, LightCurveError> {
        let mask = season_mask(&self.time, config)?;
        let out = self.select(&mask)?;
        debug!(
            before = self.len(),
            after = out.len(),
            "seasonal gaps applied"
        );
        Ok(out)
    }
}
