//! Shared test helpers for in-memory engine integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use triage::tasks::{adapters::memory::InMemoryTaskStore, services::LifecycleEngine};

/// Engine under test, wired to the in-memory store and a frozen clock.
pub type TestEngine = LifecycleEngine<InMemoryTaskStore, FixedClock>;

/// Clock frozen to midday UTC on the wrapped date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let midday = self.0.and_hms_opt(12, 0, 0).unwrap_or_default();
        Utc.from_utc_datetime(&midday)
    }
}

/// Builds a calendar date, falling back to the epoch on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Provides a fresh shared store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

/// Creates an engine over `store` with the clock frozen to `today`.
///
/// Does not run startup maintenance; restart tests trigger it
/// explicitly.
pub fn engine_at(store: &Arc<InMemoryTaskStore>, today: NaiveDate) -> TestEngine {
    LifecycleEngine::new(Arc::clone(store), Arc::new(FixedClock(today)))
}
