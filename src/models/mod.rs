pub mod due;
pub mod item_store;
pub mod review_item;
pub mod scheduler_state;
pub mod sm2;
pub mod streak;

pub use item_store::ReviewItemStore;
pub use review_item::{Difficulty, FactDescriptor, Quality, ReviewItem};
pub use scheduler_state::SchedulerState;
pub use sm2::Schedule;
pub use streak::Streak;
