//! Guest-visible IPC vocabulary for HLE service endpoints.
//!
//! This crate holds the small set of types every service shares:
//! * [`ResultCode`]: the 32-bit result word written back to the guest
//! * [`ErrorModule`]: module numbers used to build result codes
//! * [`HleRequestContext`]: one in-flight request as seen by a service

#![warn(missing_docs)]

pub mod context;
pub mod result;

pub use context::HleRequestContext;
pub use result::{ErrorModule, RESULT_UNKNOWN_COMMAND_ID, ResultCode};
