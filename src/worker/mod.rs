//! Background worker for catalog loading.
//!
//! - `messages`: request/response protocol types
//! - `handler`: worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::LorekeeperWorker;
pub use messages::{WorkerMessage, WorkerResponse};
