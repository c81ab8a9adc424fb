//! Signed nanosecond duration and its canonical string form.

use std::fmt;
use std::str::FromStr;

use crate::error::{TypesError, TypesResult};
use crate::parse::duration::{DurationParseError, parse_duration};

/// A span of time as a signed 64-bit count of nanoseconds.
///
/// The canonical rendering uses the largest units first with a fractional
/// seconds part, e.g. `1h2m3s`, `1.5s`, `300ms`, `1µs`, `0s`. Rendering and
/// parsing round-trip exactly for every representable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDuration(i64);

impl TimeDuration {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    pub const NANOSECOND: Self = Self(1);
    pub const MICROSECOND: Self = Self(1_000);
    pub const MILLISECOND: Self = Self(1_000_000);
    pub const SECOND: Self = Self(1_000_000_000);
    pub const MINUTE: Self = Self(60 * Self::SECOND.0);
    pub const HOUR: Self = Self(60 * Self::MINUTE.0);

    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Saturates at [`TimeDuration::MIN`] / [`TimeDuration::MAX`].
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(Self::MICROSECOND.0))
    }

    /// Saturates at [`TimeDuration::MIN`] / [`TimeDuration::MAX`].
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(Self::MILLISECOND.0))
    }

    /// Saturates at [`TimeDuration::MIN`] / [`TimeDuration::MAX`].
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(Self::SECOND.0))
    }

    /// Saturates at [`TimeDuration::MIN`] / [`TimeDuration::MAX`].
    #[must_use]
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(Self::MINUTE.0))
    }

    /// Saturates at [`TimeDuration::MIN`] / [`TimeDuration::MAX`].
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(Self::HOUR.0))
    }

    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Largest output is "-2562047h47m16.854775808s".
        let mut buf = [0u8; 32];
        let mut w = buf.len();
        let mut u = self.0.unsigned_abs();

        if u < Self::SECOND.0.unsigned_abs() {
            // Sub-second values use a smaller unit so the digits stay short.
            let prec;
            w -= 1;
            buf[w] = b's';
            w -= 1;
            if u == 0 {
                buf[w] = b'0';
                return write_ascii(f, &buf[w..]);
            } else if u < Self::MICROSECOND.0.unsigned_abs() {
                prec = 0;
                buf[w] = b'n';
            } else if u < Self::MILLISECOND.0.unsigned_abs() {
                prec = 3;
                w -= 1;
                buf[w..w + 2].copy_from_slice("µ".as_bytes());
            } else {
                prec = 6;
                buf[w] = b'm';
            }
            (w, u) = fmt_frac(&mut buf[..w], u, prec);
            w = fmt_int(&mut buf[..w], u);
        } else {
            w -= 1;
            buf[w] = b's';
            (w, u) = fmt_frac(&mut buf[..w], u, 9);
            w = fmt_int(&mut buf[..w], u % 60);
            u /= 60;
            if u > 0 {
                w -= 1;
                buf[w] = b'm';
                w = fmt_int(&mut buf[..w], u % 60);
                u /= 60;
                if u > 0 {
                    w -= 1;
                    buf[w] = b'h';
                    w = fmt_int(&mut buf[..w], u);
                }
            }
        }

        if self.0 < 0 {
            w -= 1;
            buf[w] = b'-';
        }
        write_ascii(f, &buf[w..])
    }
}

fn write_ascii(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    match std::str::from_utf8(bytes) {
        Ok(s) => f.write_str(s),
        Err(_) => Err(fmt::Error),
    }
}

/// Writes the low `prec` digits of `v` as a fraction into the tail of `buf`,
/// dropping trailing zeros and the point itself when nothing remains.
/// Returns the new start index and `v` with those digits removed.
fn fmt_frac(buf: &mut [u8], mut v: u64, prec: usize) -> (usize, u64) {
    let mut w = buf.len();
    let mut print = false;
    for _ in 0..prec {
        let digit = v % 10;
        print = print || digit != 0;
        if print {
            w -= 1;
            buf[w] = ascii_digit(digit);
        }
        v /= 10;
    }
    if print {
        w -= 1;
        buf[w] = b'.';
    }
    (w, v)
}

/// Writes `v` in decimal into the tail of `buf`, returning the start index.
fn fmt_int(buf: &mut [u8], mut v: u64) -> usize {
    let mut w = buf.len();
    if v == 0 {
        w -= 1;
        buf[w] = b'0';
    } else {
        while v > 0 {
            w -= 1;
            buf[w] = ascii_digit(v % 10);
            v /= 10;
        }
    }
    w
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "callers only pass values below ten"
)]
const fn ascii_digit(digit: u64) -> u8 {
    b'0' + digit as u8
}

impl FromStr for TimeDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

impl TryFrom<std::time::Duration> for TimeDuration {
    type Error = TypesError;

    fn try_from(value: std::time::Duration) -> TypesResult<Self> {
        i64::try_from(value.as_nanos())
            .map(Self)
            .map_err(|_overflow| TypesError::DurationOutOfRange(format!("{value:?}")))
    }
}

impl TryFrom<TimeDuration> for std::time::Duration {
    type Error = TypesError;

    fn try_from(value: TimeDuration) -> TypesResult<Self> {
        u64::try_from(value.0)
            .map(Self::from_nanos)
            .map_err(|_negative| TypesError::DurationOutOfRange(value.to_string()))
    }
}

impl From<TimeDuration> for chrono::TimeDelta {
    fn from(value: TimeDuration) -> Self {
        Self::nanoseconds(value.0)
    }
}

impl TryFrom<chrono::TimeDelta> for TimeDuration {
    type Error = TypesError;

    fn try_from(value: chrono::TimeDelta) -> TypesResult<Self> {
        value
            .num_nanoseconds()
            .map(Self)
            .ok_or_else(|| TypesError::DurationOutOfRange(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero() {
        assert_eq!(TimeDuration::ZERO.to_string(), "0s");
    }

    #[test]
    fn display_sub_second_units() {
        assert_eq!(TimeDuration::from_nanos(1).to_string(), "1ns");
        assert_eq!(TimeDuration::from_nanos(1_100).to_string(), "1.1µs");
        assert_eq!(TimeDuration::from_micros(1).to_string(), "1µs");
        assert_eq!(TimeDuration::from_millis(300).to_string(), "300ms");
        assert_eq!(TimeDuration::from_nanos(2_200_000).to_string(), "2.2ms");
    }

    #[test]
    fn display_hours_minutes_seconds() {
        assert_eq!(TimeDuration::from_secs(3723).to_string(), "1h2m3s");
        assert_eq!(TimeDuration::HOUR.to_string(), "1h0m0s");
        assert_eq!(TimeDuration::from_millis(1_500).to_string(), "1.5s");
        assert_eq!(TimeDuration::from_mins(-90).to_string(), "-1h30m0s");
        assert_eq!(TimeDuration::from_secs(12_363).to_string(), "3h26m3s");
    }

    #[test]
    fn display_extremes() {
        assert_eq!(TimeDuration::MAX.to_string(), "2562047h47m16.854775807s");
        assert_eq!(TimeDuration::MIN.to_string(), "-2562047h47m16.854775808s");
    }

    #[test]
    fn constructors_saturate() {
        assert_eq!(TimeDuration::from_hours(i64::MAX), TimeDuration::MAX);
        assert_eq!(TimeDuration::from_secs(i64::MIN), TimeDuration::MIN);
    }

    #[test]
    fn std_duration_conversion() {
        let native = std::time::Duration::from_millis(2_500);
        let duration = TimeDuration::try_from(native).unwrap();
        assert_eq!(duration, TimeDuration::from_millis(2_500));
        assert_eq!(std::time::Duration::try_from(duration).unwrap(), native);

        assert!(std::time::Duration::try_from(TimeDuration::from_secs(-1)).is_err());
        assert!(TimeDuration::try_from(std::time::Duration::MAX).is_err());
    }

    #[test]
    fn chrono_conversion() {
        let delta = chrono::TimeDelta::from(TimeDuration::from_secs(-5));
        assert_eq!(delta, chrono::TimeDelta::seconds(-5));
        assert_eq!(
            TimeDuration::try_from(delta).unwrap(),
            TimeDuration::from_secs(-5)
        );
        assert!(TimeDuration::try_from(chrono::TimeDelta::MAX).is_err());
    }
}
