//! Human-readable durations
//!
//! Renders a [`Duration`] as `1h2m3.4s`, `2m0s`, `250ms`, `1.5µs` or `0s`.
//! Fractional digits are trimmed of trailing zeros.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Format a duration with the largest units first
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }

    // Sub-second values use a single unit
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return fixed(nanos, NANOS_PER_MICRO, 3, "µs");
    }
    if nanos < NANOS_PER_SEC {
        return fixed(nanos, NANOS_PER_MILLI, 6, "ms");
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    out.push_str(&fixed(seconds, NANOS_PER_SEC, 9, "s"));
    out
}

/// `value / unit` with up to `digits` fractional digits, then `suffix`
fn fixed(value: u128, unit: u128, digits: usize, suffix: &str) -> String {
    let whole = value / unit;
    let frac = value % unit;

    if frac == 0 {
        return format!("{}{}", whole, suffix);
    }

    let frac = format!("{:0width$}", frac, width = digits);
    format!("{}.{}{}", whole, frac.trim_end_matches('0'), suffix)
}
