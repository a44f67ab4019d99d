use crate::Chips;
use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Duration;

/// A blind increase to `amount`, due `at` after the game started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAlert {
    pub at: Duration,
    pub amount: Chips,
}

impl ScheduledAlert {
    pub fn new(at: Duration, amount: Chips) -> Self {
        Self { at, amount }
    }
}

impl Display for ScheduledAlert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} chips at {}", self.amount, clock(self.at))
    }
}

/// Compound clock rendering: `0s`, `45s`, `10m0s`, `1h40m0s`.
/// Sub-second remainders are kept as a trimmed decimal on the seconds field.
pub fn clock(duration: Duration) -> String {
    let total = duration.as_secs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    let s = match duration.subsec_nanos() {
        0 => format!("{}s", s),
        n => format!("{}.{}s", s, format!("{:09}", n).trim_end_matches('0')),
    };
    match (h, m) {
        (0, 0) => s,
        (0, m) => format!("{}m{}", m, s),
        (h, m) => format!("{}h{}m{}", h, m, s),
    }
}
