//! Shared world state for the task lifecycle scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use triage::tasks::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::{LifecycleEngine, LifecycleResult},
};

/// Engine type exercised by the scenarios.
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

/// Mutable state threaded through the lifecycle steps.
pub struct LifecycleWorld {
    /// Store backing the engine, kept for direct seeding.
    pub store: Arc<InMemoryTaskStore>,
    /// Engine under test, sharing the store above.
    pub engine: TestEngine,
    /// The frozen working day.
    pub today: NaiveDate,
    /// Task the scenario acts on.
    pub subject: Option<Task>,
    /// Bystander task observed for reprioritisation.
    pub neighbour: Option<Task>,
    /// Outcome of the most recent lifecycle operation.
    pub last_result: Option<LifecycleResult<Task>>,
}

impl LifecycleWorld {
    /// Creates a world with an empty store and the clock frozen mid-quarter.
    #[must_use]
    pub fn new() -> Self {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap_or_default();
        let store = Arc::new(InMemoryTaskStore::new());
        let engine = LifecycleEngine::new(Arc::clone(&store), Arc::new(FixedClock(today)));

        Self {
            store,
            engine,
            today,
            subject: None,
            neighbour: None,
            last_result: None,
        }
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a fresh scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation from synchronous step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
