//! Command registry and service framework for HLE IPC endpoints.
//!
//! Every emulated service exposes a table of command ids. Most rows start
//! life without a handler, so the registry treats "known but unimplemented"
//! as an ordinary, typed outcome:
//! - [`RegistryBuilder`]: validates a table once, under a [`DuplicatePolicy`]
//! - [`CommandRegistry`]: immutable id lookup and dispatch
//! - [`ServiceFramework`]: maps registry outcomes onto guest [`ResultCode`]s
//!
//! [`ResultCode`]: hle_ipc::ResultCode

pub mod framework;
pub mod registry;

pub use framework::{HandlerFn, ServiceFramework, ServiceHandler, ServiceOptions};
pub use registry::{
	BuildError, Collision, CommandRegistry, DispatchError, DuplicatePolicy, FunctionInfo,
	InsertAction, RegistryBuilder, Resolution,
};
