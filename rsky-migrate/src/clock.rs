use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Source of wall-clock time for anything shown on the page.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn year(&self) -> i32 {
        self.now().year()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    // The visitor's calendar, not UTC.
    fn year(&self) -> i32 {
        Local::now().year()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midday on the first of January of `year`, `None` if out of range.
    pub fn in_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 1, 1, 12, 0, 0)
            .single()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock handle shared through the component tree.
#[derive(Clone)]
pub struct SharedClock(Rc<dyn Clock>);

impl SharedClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Rc::new(clock))
    }

    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::system()
    }
}

impl PartialEq for SharedClock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedClock").field(&self.0.now()).finish()
    }
}
