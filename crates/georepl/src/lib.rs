pub mod bus;
pub mod client;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod repl;
pub mod store;
pub mod types;

pub use crate::bus::{Bus, ReplEvent};
pub use crate::client::{BackendClient, BoundingBox, QuerySource};
pub use crate::error::{ClientError, ClientResult};
pub use crate::repl::Repl;
pub use crate::store::ViewStore;
pub use crate::types::{QueryOutcome, ResultTable};
