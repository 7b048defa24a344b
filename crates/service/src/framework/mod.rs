//! Service framework binding a command table to one IPC endpoint.

use hle_ipc::{HleRequestContext, RESULT_UNKNOWN_COMMAND_ID, ResultCode};

use crate::registry::{
	BuildError, CommandRegistry, DispatchError, DuplicatePolicy, FunctionInfo, RegistryBuilder,
};


/// Command handler signature for a service of type `S`.
pub type HandlerFn<S> = fn(&S, &mut HleRequestContext) -> Result<(), ResultCode>;

/// Number of command buffer words echoed when reporting an unimplemented call.
const REPORTED_WORDS: usize = 8;

/// Per-endpoint behaviour switches.
///
/// The [`Default`] value is the strict one: [`DuplicatePolicy::Reject`], no
/// auto-stub. Endpoints whose tables carry known id conflicts choose their
/// own policy (see `HidDebugServer::default_options`), and configuration
/// files override both fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
	/// Answer unknown and unimplemented commands with success instead of an error.
	pub auto_stub: bool,
	/// How rows sharing a command id are treated when the table is built.
	pub duplicate_policy: DuplicatePolicy,
}

/// An endpoint that can answer IPC requests.
pub trait ServiceHandler: Send + Sync {
	/// Returns the port name the endpoint is registered under.
	fn service_name(&self) -> &str;

	/// Handles one request and returns the result written to `ctx`.
	fn handle_request(&self, ctx: &mut HleRequestContext) -> ResultCode;
}

/// Named endpoint plus its validated command table.
pub struct ServiceFramework<S> {
	name: &'static str,
	registry: CommandRegistry<HandlerFn<S>>,
	options: ServiceOptions,
}

impl<S> ServiceFramework<S> {
	/// Builds the framework for `name` from a static function table.
	pub fn new(
		name: &'static str,
		functions: &[FunctionInfo<HandlerFn<S>>],
		options: ServiceOptions,
	) -> Result<Self, BuildError> {
		let registry = RegistryBuilder::new(name)
			.duplicate_policy(options.duplicate_policy)
			.extend(functions.iter().copied())
			.build()?;

		tracing::debug!(
			service = name,
			commands = registry.len(),
			collisions = registry.collisions().len(),
			"registered handlers"
		);

		Ok(Self {
			name,
			registry,
			options,
		})
	}

	/// Returns the service port name.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the command table.
	#[inline]
	pub fn registry(&self) -> &CommandRegistry<HandlerFn<S>> {
		&self.registry
	}

	/// Returns the options the framework was built with.
	#[inline]
	pub fn options(&self) -> ServiceOptions {
		self.options
	}

	/// Dispatches `ctx` to its handler and records the result in `ctx`.
	///
	/// Never panics on unknown or unimplemented commands: they are reported
	/// and answered with [`RESULT_UNKNOWN_COMMAND_ID`], or with success when
	/// auto-stubbing is enabled.
	pub fn invoke_request(&self, service: &S, ctx: &mut HleRequestContext) -> ResultCode {
		let outcome = self
			.registry
			.dispatch(ctx.command(), &mut *ctx, |handler, ctx| handler(service, ctx));

		let result = match outcome {
			Ok(()) => ResultCode::SUCCESS,
			Err(DispatchError::Handler(code)) => code,
			Err(err) => self.report_unimplemented(ctx, &err),
		};
		ctx.set_result(result);
		result
	}

	fn report_unimplemented(
		&self,
		ctx: &HleRequestContext,
		err: &DispatchError<ResultCode>,
	) -> ResultCode {
		let function = match err {
			DispatchError::UnimplementedCommand { name, .. } => (*name).to_string(),
			DispatchError::Ambiguous { names, .. } => names.join(" | "),
			_ => ctx.command().to_string(),
		};

		tracing::error!(
			service = self.name,
			id = ctx.command(),
			reason = %err,
			"unknown / unimplemented function '{function}': port='{}' cmd_buf={{{}}}",
			self.name,
			format_command_buffer(ctx.command_buffer())
		);

		if self.options.auto_stub {
			tracing::warn!(service = self.name, id = ctx.command(), "using auto stub fallback");
			ResultCode::SUCCESS
		} else {
			RESULT_UNKNOWN_COMMAND_ID
		}
	}
}

fn format_command_buffer(words: &[u32]) -> String {
	words
		.iter()
		.take(REPORTED_WORDS)
		.enumerate()
		.map(|(idx, word)| format!("[{idx}]=0x{word:X}"))
		.collect::<Vec<_>>()
		.join(", ")
}
