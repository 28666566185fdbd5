pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use config::SchedulerConfig;
pub use database::{InMemoryStore, SqliteStore, StateStore};
pub use error::{Result, SchedulerError, StoreError};
pub use models::{Difficulty, FactDescriptor, Quality, ReviewItem, SchedulerState};
pub use scheduler::Scheduler;
