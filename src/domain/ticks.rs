// Axis tick planning: reporting period to major/minor gridline spacing

pub const MILLIS_PER_SEC: i64 = 1_000;

const DAY_MS: i64 = 86_400 * MILLIS_PER_SEC;
const SIX_HOURS_MS: i64 = 6 * 3_600 * MILLIS_PER_SEC;
const HOUR_MS: i64 = 3_600 * MILLIS_PER_SEC;
const QUARTER_HOUR_MS: i64 = 15 * 60 * MILLIS_PER_SEC;
const MINUTE_MS: i64 = 60 * MILLIS_PER_SEC;

/// Major tick used when a period is too short to produce one (100 seconds).
const FALLBACK_MAJOR_MS: i64 = 100 * MILLIS_PER_SEC;

/// Major and minor gridline spacing on the time axis, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlan {
    pub major_ms: i64,
    pub minor_ms: i64,
}

/// Derives tick spacing for a reporting period.
///
/// Overrides are taken verbatim when both are present and non-zero, already
/// in milliseconds. Otherwise a fifth of the period is rounded to a round
/// clock boundary: day-scale spacing rounds down to whole days so the grid
/// stays coarse, hour-scale spacing rounds up to six-hour or one-hour
/// multiples, minute-scale spacing rounds up to quarter hours, and
/// sub-minute spacing is kept as computed. The minor tick is always a
/// quarter of the major.
pub fn plan_ticks(
    period_secs: i64,
    major_override_ms: Option<i64>,
    minor_override_ms: Option<i64>,
) -> TickPlan {
    if let (Some(major_ms), Some(minor_ms)) = (major_override_ms, minor_override_ms) {
        if major_ms != 0 && minor_ms != 0 {
            return TickPlan { major_ms, minor_ms };
        }
    }

    let raw_ms = period_secs.max(0).saturating_mul(MILLIS_PER_SEC) / 5;

    let mut major_ms = if raw_ms >= DAY_MS {
        raw_ms / DAY_MS * DAY_MS
    } else if raw_ms >= SIX_HOURS_MS {
        ceil_div(raw_ms, SIX_HOURS_MS) * SIX_HOURS_MS
    } else if raw_ms >= HOUR_MS {
        ceil_div(raw_ms, HOUR_MS) * HOUR_MS
    } else if raw_ms >= MINUTE_MS {
        ceil_div(raw_ms, QUARTER_HOUR_MS) * QUARTER_HOUR_MS
    } else {
        raw_ms
    };

    if major_ms == 0 {
        major_ms = FALLBACK_MAJOR_MS;
    }

    TickPlan {
        major_ms,
        minor_ms: major_ms / 4,
    }
}

/// Ceiling division for a positive divisor, rounding toward positive
/// infinity for negative dividends as well.
pub(crate) fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}
