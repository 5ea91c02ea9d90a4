// Report time window: tick-aligned end plus derived axis marks

use chrono::DateTime;

use crate::domain::ticks::{MILLIS_PER_SEC, TickPlan, ceil_div};

/// Upper bound on gridline marks per axis, so a degenerate tick override
/// cannot produce an unbounded mark list.
const MAX_AXIS_MARKS: usize = 512;

/// Resolved reporting window. `start` and `end` are epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
    pub ticks: TickPlan,
}

impl TimeWindow {
    /// Computes the window for a period ending now, or at an explicit
    /// override.
    ///
    /// Without an override the end is rounded up to the next whole major
    /// tick in local-clock terms: shift by the UTC offset, ceil to a tick
    /// multiple, shift back. Gridlines anchored at the end then land on
    /// round local times.
    pub fn resolve(
        period_secs: i64,
        ticks: TickPlan,
        end_override: Option<i64>,
        now_secs: i64,
        utc_offset_secs: i64,
    ) -> Self {
        let end = match end_override {
            Some(end) => end,
            None => {
                let tick_secs = (ticks.major_ms / MILLIS_PER_SEC).max(1);
                let shifted = now_secs + utc_offset_secs;
                ceil_div(shifted, tick_secs) * tick_secs - utc_offset_secs
            }
        };
        Self {
            start: end - period_secs,
            end,
            ticks,
        }
    }

    pub fn start_ms(&self) -> i64 {
        self.start.saturating_mul(MILLIS_PER_SEC)
    }

    pub fn end_ms(&self) -> i64 {
        self.end.saturating_mul(MILLIS_PER_SEC)
    }

    /// Millisecond span of the window, equal to the period for any sane
    /// request.
    pub fn span_ms(&self) -> i64 {
        (self.end_ms() - self.start_ms()).max(1)
    }

    /// Major gridline timestamps, stepped back from the aligned end so the
    /// end boundary always sits on a gridline. Ascending.
    pub fn major_marks(&self) -> Vec<i64> {
        self.marks_every(self.ticks.major_ms)
    }

    /// Minor gridline timestamps. Ascending.
    pub fn minor_marks(&self) -> Vec<i64> {
        self.marks_every(self.ticks.minor_ms)
    }

    fn marks_every(&self, step_ms: i64) -> Vec<i64> {
        if step_ms <= 0 {
            return Vec::new();
        }
        let mut marks = Vec::new();
        let mut mark = self.end_ms();
        while mark >= self.start_ms() && marks.len() < MAX_AXIS_MARKS {
            marks.push(mark);
            mark -= step_ms;
        }
        marks.reverse();
        marks
    }
}

/// Header label for the report end time, rendered in the viewer's zone.
pub fn end_label(end_secs: i64, utc_offset_secs: i64) -> String {
    format_shifted(end_secs, utc_offset_secs, "%Y-%m-%d %H:%M")
}

/// Gridline caption: clock time normally, a date once ticks reach a day.
pub fn axis_label(mark_ms: i64, utc_offset_secs: i64, major_ms: i64) -> String {
    let pattern = if major_ms >= 86_400 * MILLIS_PER_SEC {
        "%m-%d"
    } else {
        "%H:%M"
    };
    format_shifted(mark_ms / MILLIS_PER_SEC, utc_offset_secs, pattern)
}

fn format_shifted(epoch_secs: i64, utc_offset_secs: i64, pattern: &str) -> String {
    DateTime::from_timestamp(epoch_secs + utc_offset_secs, 0)
        .map(|moment| moment.format(pattern).to_string())
        .unwrap_or_default()
}
