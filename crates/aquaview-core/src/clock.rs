// ── Header clock derivations ──
//
// Pure functions behind the greeting/clock display. The ticking itself is
// a `ticker` with a time-producing callback, owned by the view, so the
// clock shares the poller's teardown contract.

use chrono::{DateTime, Local, Timelike};

/// Time-of-day salutation. The three ranges partition the 24-hour day:
/// [5,12) morning, [12,17) afternoon, everything else evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Classify an hour-of-day (0-23).
    pub fn from_hour(hour: u32) -> Self {
        if (5..12).contains(&hour) {
            Self::Morning
        } else if (12..17).contains(&hour) {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    pub fn from_time(now: DateTime<Local>) -> Self {
        Self::from_hour(now.hour())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Good Morning",
            Self::Afternoon => "Good Afternoon",
            Self::Evening => "Good Evening",
        }
    }
}

/// Clock display, e.g. `14:03:27`.
pub fn formatted_time(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Date display, e.g. `Thursday, August 6, 2026`.
pub fn formatted_date(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_partitions_the_day() {
        // Every hour maps to exactly one greeting; counting proves there
        // is no gap, matching on the enum proves no overlap.
        let mut morning = 0;
        let mut afternoon = 0;
        let mut evening = 0;
        for hour in 0..24 {
            match Greeting::from_hour(hour) {
                Greeting::Morning => morning += 1,
                Greeting::Afternoon => afternoon += 1,
                Greeting::Evening => evening += 1,
            }
        }
        assert_eq!(morning, 7); // 5..12
        assert_eq!(afternoon, 5); // 12..17
        assert_eq!(evening, 12); // 17..24 and 0..5
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(Greeting::from_hour(4), Greeting::Evening);
        assert_eq!(Greeting::from_hour(5), Greeting::Morning);
        assert_eq!(Greeting::from_hour(11), Greeting::Morning);
        assert_eq!(Greeting::from_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(16), Greeting::Afternoon);
        assert_eq!(Greeting::from_hour(17), Greeting::Evening);
        assert_eq!(Greeting::from_hour(23), Greeting::Evening);
        assert_eq!(Greeting::from_hour(0), Greeting::Evening);
    }

    #[test]
    fn greeting_labels() {
        assert_eq!(Greeting::Morning.label(), "Good Morning");
        assert_eq!(Greeting::Afternoon.label(), "Good Afternoon");
        assert_eq!(Greeting::Evening.label(), "Good Evening");
    }
}
