//! Structured outbound IRC commands and their wire rendering.

mod serialize;
mod types;
pub(crate) mod util;

pub use types::Command;
