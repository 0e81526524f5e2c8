// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quiet-hours window evaluation shared by the three notification handlers
//! (spec §4.3.8 through §4.3.10).

/// A `HH:MM` wall-clock time of day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Parse `HH:MM`. Malformed input falls back to midnight, matching the
    /// "never guess intent" posture: an unparsable window should suppress
    /// nothing rather than suppress everything.
    pub fn parse(raw: &str) -> Self {
        let Some((hours, minutes)) = raw.split_once(':') else { return Self(0) };
        let (Ok(hours), Ok(minutes)) = (hours.parse::<u32>(), minutes.parse::<u32>()) else {
            return Self(0);
        };
        Self(hours * 60 + minutes)
    }

    pub fn from_minutes_since_midnight(minutes: u32) -> Self {
        Self(minutes % (24 * 60))
    }
}

/// Derive the UTC time-of-day for `epoch_ms` (as reported by the injected
/// [`hk_core::Clock`]). `HookInput` carries no UTC-offset field, so a quiet
/// window configured in the host's local wall-clock time is compared against
/// UTC here; on a host east or west of UTC, the window the user sees in
/// `config.json` does not land on the wall-clock hours they typed until a
/// local offset is threaded through from somewhere upstream. See the
/// "Quiet-hours local time" entry in DESIGN.md.
pub fn time_of_day_from_epoch_ms(epoch_ms: u64) -> TimeOfDay {
    let seconds_of_day = (epoch_ms / 1000) % 86_400;
    TimeOfDay::from_minutes_since_midnight((seconds_of_day / 60) as u32)
}

/// True iff `now` falls in `[start, end)`, crossing midnight when
/// `end <= start` (spec §8: `end > start` ⇒ `[start, end)`; otherwise
/// `[start, 24:00) ∪ [00:00, end)`, which spans the whole day when the two
/// bounds are equal).
pub fn is_quiet(enabled: bool, start: TimeOfDay, end: TimeOfDay, now: TimeOfDay) -> bool {
    if !enabled {
        return false;
    }
    if end > start {
        now >= start && now < end
    } else {
        now >= start || now < end
    }
}

#[cfg(test)]
#[path = "quiet_hours_tests.rs"]
mod tests;
