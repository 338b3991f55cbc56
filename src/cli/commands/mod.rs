pub mod factorial;
pub mod queue_session;

pub use factorial::execute_factorial;
pub use queue_session::execute_queue_session;
