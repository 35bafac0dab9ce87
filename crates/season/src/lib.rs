//! # lumen-season
//!
//! Seasonal-gap masks for light curves observed from the ground.
//!
//! An object is only observable for part of each year. Given observation
//! timestamps in days, [`season_mask`] keeps the observations whose
//! day-of-year lies strictly inside `(season_start, season_end)`.
//!
//! ## Architecture
//!
//! ```text
//! t (days) ──▶ t - t[0] + lc_start ──▶ DayOfYear (mod 365.25) ──▶ SeasonConfig::contains ──▶ mask
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lumen_season::{SeasonConfig, season_mask};
//!
//! let t = [0.0, 91.0, 269.0, 271.0];
//! let mask = season_mask(&t, &SeasonConfig::default()).unwrap();
//! assert_eq!(mask, vec![false, true, true, false]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Fractional day-of-year newtype and year length |
//! | `config` | Season window parameters |
//! | `mask` | Mask construction |
//! | `error` | Error types |

mod config;
mod doy;
mod error;
mod mask;

pub use config::SeasonConfig;
pub use doy::{DAYS_PER_YEAR, DayOfYear};
pub use error::SeasonError;
pub use mask::{season_days, season_mask};
