use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for attempt timestamps and certificate dates.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    /// Pinned instant, for reproducible dates in tests.
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Calendar date of `now()` in UTC.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// 2023-11-14T22:13:20Z as a unix timestamp.
const FIXED_UNIX_SECS: i64 = 1_700_000_000;

/// The instant `fixed_clock` is pinned to.
///
/// # Panics
///
/// Never in practice; the constant is a valid timestamp.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_UNIX_SECS, 0).expect("constant timestamp is in range")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::Fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_fixed_date() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = Clock::system();
        assert!(clock.now() > fixed_now());
    }
}
