mod state;
mod utilization;

pub use state::MemoryState;
pub use utilization::Utilization;
