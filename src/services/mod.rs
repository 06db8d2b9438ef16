pub mod events;

pub use events::{partition_messages, record_events};
