//! Light-curve container for the lumen downsampling utilities.
//!
//! [`LightCurve`] keeps time, flux and optional flux-error columns aligned
//! while the masks and index arrays from `lumen-downsample` and
//! `lumen-season` are applied to it.
//!
//! # Quick start
//!
//! ```
//! use lumen_lightcurve::{LightCurve, SeasonConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let time: Vec<f64> = (0..730).map(f64::from).collect();
//! let flux: Vec<f64> = time.iter().map(|t| (t / 30.0).sin()).collect();
//! let lc = LightCurve::new(time, flux, None)?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sparse = lc
//!     .with_seasonal_gaps(&SeasonConfig::default())?
//!     .downsample_by_count(100, &mut rng)?;
//! assert_eq!(sparse.len(), 100);
//! # Ok::<(), lumen_lightcurve::LightCurveError>(())
//! ```

mod error;
mod light_curve;

pub use error::LightCurveError;
pub use light_curve::LightCurve;
pub use lumen_season::SeasonConfig;
