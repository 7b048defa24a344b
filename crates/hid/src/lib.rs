//! HID service endpoints.
//!
//! Only the debug endpoint (`hid:dbg`) lives here so far. Its command table
//! mirrors the console service one row per command; rows without a handler
//! are answered through the framework's unimplemented path.

pub mod debug_server;
pub mod resource_manager;

pub use debug_server::{HID_DEBUG_FUNCTIONS, HidDebugServer, SERVICE_NAME};
pub use resource_manager::{HidSharedMemory, ResourceManager, SHARED_MEMORY_SIZE};
