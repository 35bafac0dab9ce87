//! Fractional day-of-year on a 365.25-day year.

/// Length of the year used for season folding, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Day within the year, `0.0 <= day < 365.25` for finite input.
///
/// Unlike a calendar date this carries no month structure; it is the
/// elapsed time folded onto a single year.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayOfYear(f64);

impl DayOfYear {
    /// Folds a number of elapsed days onto the year.
    ///
    /// Uses floored modulo, so negative input wraps into `[0, 365.25)`:
    /// `-10.0` becomes `355.25`. Non-finite input gives NaN.
    pub fn from_elapsed(days: f64) -> Self {
        let day = days.rem_euclid(DAYS_PER_YEAR);
        // rem_euclid can round up to the divisor for tiny negative input.
        if day >= DAYS_PER_YEAR {
            Self(0.0)
        } else {
            Self(day)
        }
    }

    /// Returns the day-of-year value.
    pub fn get(self) -> f64 {
        self.0
    }
}
