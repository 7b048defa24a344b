//! Subcommand implementations. Each returns `Ok(true)` on a clean result.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use hle_hid::{HidDebugServer, ResourceManager, SERVICE_NAME};
use hle_ipc::HleRequestContext;
use hle_service::{CommandRegistry, FunctionInfo, InsertAction, ServiceHandler, ServiceOptions};

fn build_server(options: ServiceOptions) -> Result<HidDebugServer> {
	HidDebugServer::new(Arc::new(ResourceManager::new()), options)
		.with_context(|| format!("building {SERVICE_NAME} command table"))
}

fn status<H>(registry: &CommandRegistry<H>, info: &FunctionInfo<H>) -> &'static str {
	if registry.is_ambiguous(info.id) {
		"ambiguous"
	} else if info.is_implemented() {
		"implemented"
	} else {
		"unimplemented"
	}
}

/// Prints every row of the table.
pub fn list(options: ServiceOptions, out: &mut impl Write) -> Result<bool> {
	let server = build_server(options)?;
	let registry = server.framework().registry();

	writeln!(out, "{:>5}  {:<40}  status", "id", "name")?;
	for info in registry.entries() {
		writeln!(out, "{:>5}  {:<40}  {}", info.id, info.name, status(registry, info))?;
	}
	Ok(true)
}

/// Prints collisions; fails on build errors or ambiguous ids.
pub fn check(options: ServiceOptions, out: &mut impl Write) -> Result<bool> {
	let server = match HidDebugServer::new(Arc::new(ResourceManager::new()), options) {
		Ok(server) => server,
		Err(err) => {
			writeln!(out, "{SERVICE_NAME}: {err}")?;
			return Ok(false);
		}
	};
	let registry = server.framework().registry();

	for collision in registry.collisions() {
		writeln!(out, "collision {collision}")?;
	}
	let ambiguous = registry
		.collisions()
		.iter()
		.filter(|c| c.action == InsertAction::MarkedAmbiguous)
		.count();
	writeln!(
		out,
		"{SERVICE_NAME}: {} commands, {} collisions, {ambiguous} ambiguous (policy {})",
		registry.len(),
		registry.collisions().len(),
		options.duplicate_policy
	)?;
	Ok(ambiguous == 0)
}

/// Dispatches one request and prints its result code.
pub fn call(
	options: ServiceOptions,
	id: u32,
	words: Vec<u32>,
	out: &mut impl Write,
) -> Result<bool> {
	let server = build_server(options)?;
	let mut ctx = HleRequestContext::new(id, words);
	let result = server.handle_request(&mut ctx);

	writeln!(out, "{} #{id}: {result} ({:#010x})", server.service_name(), result.raw())?;
	Ok(result.is_success())
}
