pub mod clock;
pub mod task_store;

pub use clock::{FixedClock, IClock, SystemClock};
pub use task_store::ITaskStore;
