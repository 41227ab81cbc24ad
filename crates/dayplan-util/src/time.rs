//! The time-of-day value type
//!
//! `Time` wraps a signed count of seconds since midnight. There is no upper
//! bound: values at or above 86400 are valid and represent multi-day
//! durations. Hours, minutes, and seconds are always derived from the total;
//! no independent component fields exist.
//!
//! Every mutating operator saturates at a floor of zero. Negative totals are
//! reachable only through raw construction (`from_seconds`, or `from_hms`
//! with negative components), never through an operator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Seconds in one day
pub const DAY_SECONDS: i64 = 24 * 3600;

/// Result of applying a scalar operator to a `Time`.
///
/// Division by a zero scalar is deliberately a no-op rather than an error,
/// but the no-op is distinguishable so callers (and tests) can report it
/// instead of guessing from an unchanged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ScalarOutcome {
    /// The operand was mutated
    Applied,
    /// Zero divisor: the operand was left untouched
    IgnoredZeroDivisor,
}

impl ScalarOutcome {
    pub fn was_applied(self) -> bool {
        self == ScalarOutcome::Applied
    }
}

/// A time of day (or duration) stored as seconds since midnight
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Time {
    total_seconds: i64,
}

impl Time {
    /// Build from an (hours, minutes, seconds) triple.
    ///
    /// No validation: callers are expected to range-check components first.
    /// Out-of-range values (minutes = 75, negative fields) fold silently
    /// into the total.
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            total_seconds: hours * 3600 + minutes * 60 + seconds,
        }
    }

    /// Build from a raw second count
    pub fn from_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    /// Overwrite from an (hours, minutes, seconds) triple, unconditionally
    pub fn set(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.total_seconds = hours * 3600 + minutes * 60 + seconds;
    }

    /// Hours component, derived by truncating division
    pub fn hours(&self) -> i64 {
        self.total_seconds / 3600
    }

    /// Minutes component in [0, 60) for non-negative totals
    pub fn minutes(&self) -> i64 {
        (self.total_seconds % 3600) / 60
    }

    /// Seconds component in [0, 60) for non-negative totals
    pub fn seconds(&self) -> i64 {
        self.total_seconds % 60
    }

    /// Raw second count
    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Advance by one second and return the updated value
    pub fn increment(&mut self) -> Time {
        self.total_seconds += 1;
        self.clamp_floor();
        *self
    }

    /// Advance by one second, returning a snapshot of the prior state
    pub fn post_increment(&mut self) -> Time {
        let snapshot = *self;
        self.increment();
        snapshot
    }

    /// Step back one second (floor at zero) and return the updated value
    pub fn decrement(&mut self) -> Time {
        self.total_seconds -= 1;
        self.clamp_floor();
        *self
    }

    /// Step back one second (floor at zero), returning a snapshot of the
    /// prior state
    pub fn post_decrement(&mut self) -> Time {
        let snapshot = *self;
        self.decrement();
        snapshot
    }

    /// Multiply the total by a scalar, truncating toward zero.
    ///
    /// A negative product saturates at zero like every other mutation.
    pub fn mul_scalar_assign(&mut self, scalar: f64) -> ScalarOutcome {
        self.total_seconds = (self.total_seconds as f64 * scalar) as i64;
        self.clamp_floor();
        ScalarOutcome::Applied
    }

    /// Divide the total by a scalar, truncating toward zero.
    ///
    /// A zero divisor leaves the value untouched and reports
    /// [`ScalarOutcome::IgnoredZeroDivisor`].
    pub fn div_scalar_assign(&mut self, scalar: f64) -> ScalarOutcome {
        if scalar == 0.0 {
            return ScalarOutcome::IgnoredZeroDivisor;
        }
        self.total_seconds = (self.total_seconds as f64 / scalar) as i64;
        self.clamp_floor();
        ScalarOutcome::Applied
    }

    /// Render the value for removal/teardown logging.
    ///
    /// Replaces implicit drop-time logging: callers invoke this at the
    /// scope boundary they care about.
    pub fn describe(&self) -> String {
        format!("{} ({}s)", self, self.total_seconds)
    }

    fn clamp_floor(&mut self) {
        if self.total_seconds < 0 {
            self.total_seconds = 0;
        }
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        self.total_seconds += rhs.total_seconds;
        self.clamp_floor();
    }
}

impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) {
        self.total_seconds -= rhs.total_seconds;
        self.clamp_floor();
    }
}

impl MulAssign<f64> for Time {
    fn mul_assign(&mut self, rhs: f64) {
        let _ = self.mul_scalar_assign(rhs);
    }
}

impl DivAssign<f64> for Time {
    fn div_assign(&mut self, rhs: f64) {
        let _ = self.div_scalar_assign(rhs);
    }
}

impl Add for Time {
    type Output = Time;

    fn add(mut self, rhs: Time) -> Time {
        self += rhs;
        self
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(mut self, rhs: Time) -> Time {
        self -= rhs;
        self
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(mut self, rhs: f64) -> Time {
        self *= rhs;
        self
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(mut self, rhs: f64) -> Time {
        self /= rhs;
        self
    }
}

impl fmt::Display for Time {
    /// `H:MM:SS`: hours unpadded and uncapped (25 hours renders as
    /// `25:00:00`), minutes and seconds zero-padded. Negative totals render
    /// sign-prefixed with components taken from the magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.total_seconds < 0 { "-" } else { "" };
        let magnitude = self.total_seconds.unsigned_abs();
        write!(
            f,
            "{}{}:{:02}:{:02}",
            sign,
            magnitude / 3600,
            (magnitude % 3600) / 60,
            magnitude % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_round_trip() {
        let t = Time::from_hms(13, 45, 59);
        assert_eq!(t.hours(), 13);
        assert_eq!(t.minutes(), 45);
        assert_eq!(t.seconds(), 59);
        assert_eq!(t.total_seconds(), 13 * 3600 + 45 * 60 + 59);
    }

    #[test]
    fn out_of_range_components_fold() {
        // minutes = 75 folds into the total without complaint
        assert_eq!(Time::from_hms(0, 75, 0), Time::from_hms(1, 15, 0));
        assert_eq!(Time::from_hms(2, -30, 0), Time::from_hms(1, 30, 0));
    }

    #[test]
    fn no_upper_bound() {
        let t = Time::from_hms(25, 0, 0);
        assert_eq!(t.hours(), 25);
        assert_eq!(t.total_seconds(), 90_000);
    }

    #[test]
    fn set_overwrites() {
        let mut t = Time::from_hms(1, 2, 3);
        t.set(4, 5, 6);
        assert_eq!(t, Time::from_hms(4, 5, 6));
    }

    #[test]
    fn increment_returns_updated_value() {
        let mut t = Time::from_hms(0, 0, 59);
        let returned = t.increment();
        assert_eq!(returned, Time::from_hms(0, 1, 0));
        assert_eq!(t, returned);
    }

    #[test]
    fn post_increment_returns_prior_state() {
        let mut t = Time::from_hms(0, 0, 10);
        let before = t.post_increment();
        assert_eq!(before.total_seconds(), 10);
        assert_eq!(t.total_seconds(), 11);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut t = Time::default();
        let returned = t.decrement();
        assert_eq!(returned.total_seconds(), 0);
        assert_eq!(t.total_seconds(), 0);

        let before = t.post_decrement();
        assert_eq!(before.total_seconds(), 0);
        assert_eq!(t.total_seconds(), 0);
    }

    #[test]
    fn post_decrement_returns_prior_state() {
        let mut t = Time::from_hms(0, 1, 0);
        let before = t.post_decrement();
        assert_eq!(before, Time::from_hms(0, 1, 0));
        assert_eq!(t, Time::from_hms(0, 0, 59));
    }

    #[test]
    fn add_assign_accumulates() {
        let mut t = Time::from_hms(23, 30, 0);
        t += Time::from_hms(1, 0, 0);
        // No 24-hour wrap: totals keep growing
        assert_eq!(t, Time::from_hms(24, 30, 0));
    }

    #[test]
    fn sub_assign_clamps_at_zero() {
        let mut t = Time::from_hms(0, 10, 0);
        t -= Time::from_hms(1, 0, 0);
        assert_eq!(t.total_seconds(), 0);
    }

    #[test]
    fn sub_then_add_recovers_iff_no_clamp() {
        let a = Time::from_hms(2, 0, 0);
        let b = Time::from_hms(1, 0, 0);
        assert_eq!((a - b) + b, a);

        // a < b: the subtraction clamped, so the original is lost
        let small = Time::from_hms(0, 30, 0);
        assert_ne!((small - b) + b, small);
        assert_eq!((small - b) + b, b);
    }

    #[test]
    fn mul_truncates_toward_zero() {
        let t = Time::from_seconds(10);
        assert_eq!((t * 1.5).total_seconds(), 15);
        assert_eq!((t * 0.33).total_seconds(), 3);
    }

    #[test]
    fn negative_scalar_saturates_at_zero() {
        // One clamping policy for every mutating operator
        let mut t = Time::from_hms(1, 0, 0);
        let outcome = t.mul_scalar_assign(-2.0);
        assert!(outcome.was_applied());
        assert_eq!(t.total_seconds(), 0);

        let mut u = Time::from_hms(1, 0, 0);
        let outcome = u.div_scalar_assign(-4.0);
        assert!(outcome.was_applied());
        assert_eq!(u.total_seconds(), 0);
    }

    #[test]
    fn div_by_zero_is_distinguishable_noop() {
        let mut t = Time::from_hms(3, 15, 0);
        let outcome = t.div_scalar_assign(0.0);
        assert_eq!(outcome, ScalarOutcome::IgnoredZeroDivisor);
        assert_eq!(t, Time::from_hms(3, 15, 0));

        // The operator form swallows the outcome but still leaves the
        // dividend untouched
        t /= 0.0;
        assert_eq!(t, Time::from_hms(3, 15, 0));
    }

    #[test]
    fn mul_div_round_trip_within_one_second() {
        let t = Time::from_hms(1, 0, 0);
        let back = (t * 1.5) / 1.5;
        let drift = (back.total_seconds() - t.total_seconds()).abs();
        assert!(drift <= 1, "drift was {drift}");
    }

    #[test]
    fn binary_ops_leave_operands_unchanged() {
        let a = Time::from_hms(1, 0, 0);
        let b = Time::from_hms(0, 30, 0);
        let _ = a + b;
        let _ = a - b;
        let _ = a * 2.0;
        let _ = a / 2.0;
        assert_eq!(a, Time::from_hms(1, 0, 0));
        assert_eq!(b, Time::from_hms(0, 30, 0));
    }

    #[test]
    fn comparisons_follow_total_order() {
        assert!(Time::from_hms(1, 0, 0) > Time::from_hms(0, 59, 59));
        assert!(Time::from_hms(0, 0, 9) < Time::from_hms(0, 0, 10));
        assert!(Time::from_hms(0, 0, 10) <= Time::from_hms(0, 0, 10));
        assert!(Time::from_hms(0, 0, 10) >= Time::from_hms(0, 0, 10));
        assert_eq!(Time::from_hms(0, 0, 10), Time::from_hms(0, 0, 10));
        assert_ne!(Time::from_hms(0, 0, 10), Time::from_hms(0, 0, 11));
    }

    #[test]
    fn display_format() {
        assert_eq!(Time::default().to_string(), "0:00:00");
        assert_eq!(Time::from_hms(9, 5, 3).to_string(), "9:05:03");
        assert_eq!(Time::from_hms(25, 0, 0).to_string(), "25:00:00");
    }

    #[test]
    fn display_negative_total() {
        // Reachable only through raw construction; rendered sign-prefixed
        assert_eq!(Time::from_seconds(-3661).to_string(), "-1:01:01");
        assert_eq!(Time::from_seconds(-1).to_string(), "-0:00:01");
    }

    #[test]
    fn describe_includes_raw_total() {
        let t = Time::from_hms(5, 0, 0);
        assert_eq!(t.describe(), "5:00:00 (18000s)");
    }

    #[test]
    fn serde_round_trip() {
        let t = Time::from_hms(12, 34, 56);
        let json = serde_json::to_string(&t).unwrap();
        let back: Time = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
