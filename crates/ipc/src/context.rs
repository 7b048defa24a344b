//! Request context handed to service endpoints.

use crate::ResultCode;

/// One in-flight IPC request.
///
/// The command buffer is carried as raw words. Services that decode
/// arguments do so themselves; the framework only reads the command id and
/// writes the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HleRequestContext {
	command: u32,
	command_buffer: Vec<u32>,
	result: Option<ResultCode>,
}

impl HleRequestContext {
	/// Creates a context for `command` carrying the raw buffer `words`.
	pub fn new(command: u32, words: impl Into<Vec<u32>>) -> Self {
		Self {
			command,
			command_buffer: words.into(),
			result: None,
		}
	}

	/// Returns the command id being invoked.
	#[inline]
	pub fn command(&self) -> u32 {
		self.command
	}

	/// Returns the raw command buffer words.
	#[inline]
	pub fn command_buffer(&self) -> &[u32] {
		&self.command_buffer
	}

	/// Records the result word for the response.
	pub fn set_result(&mut self, result: ResultCode) {
		self.result = Some(result);
	}

	/// Returns the recorded result, if a response has been written.
	#[inline]
	pub fn result(&self) -> Option<ResultCode> {
		self.result
	}
}
