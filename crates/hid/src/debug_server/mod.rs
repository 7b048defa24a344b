//! The `hid:dbg` endpoint.

mod functions;

use std::sync::Arc;

use hle_ipc::{HleRequestContext, ResultCode};
use hle_service::{
	BuildError, DuplicatePolicy, ServiceFramework, ServiceHandler, ServiceOptions,
};

pub use functions::HID_DEBUG_FUNCTIONS;

use crate::ResourceManager;


/// Port name of the HID debug endpoint.
pub const SERVICE_NAME: &str = "hid:dbg";

/// HID debug service.
///
/// Exposes the console's debug and factory commands. None are implemented
/// yet; every call is reported and refused by the framework.
pub struct HidDebugServer {
	framework: ServiceFramework<HidDebugServer>,
	resource_manager: Arc<ResourceManager>,
}

impl HidDebugServer {
	/// Builds the endpoint around a shared resource manager.
	///
	/// The manager is not initialized here; see
	/// [`resource_manager`](Self::resource_manager).
	pub fn new(
		resource_manager: Arc<ResourceManager>,
		options: ServiceOptions,
	) -> Result<Self, BuildError> {
		Ok(Self {
			framework: ServiceFramework::new(SERVICE_NAME, HID_DEBUG_FUNCTIONS, options)?,
			resource_manager,
		})
	}

	/// Options this endpoint uses when none are configured.
	pub fn default_options() -> ServiceOptions {
		ServiceOptions {
			auto_stub: false,
			duplicate_policy: DuplicatePolicy::Ambiguous,
		}
	}

	/// Initializes the shared resource manager and returns it.
	///
	/// Every call re-runs [`ResourceManager::initialize`], which allocates
	/// only once, so all callers observe the same backing state.
	pub fn resource_manager(&self) -> Arc<ResourceManager> {
		self.resource_manager.initialize();
		Arc::clone(&self.resource_manager)
	}

	/// Returns the framework holding the command table.
	#[inline]
	pub fn framework(&self) -> &ServiceFramework<HidDebugServer> {
		&self.framework
	}
}

impl ServiceHandler for HidDebugServer {
	fn service_name(&self) -> &str {
		SERVICE_NAME
	}

	fn handle_request(&self, ctx: &mut HleRequestContext) -> ResultCode {
		self.framework.invoke_request(self, ctx)
	}
}
