//! Horizon-style result codes.

use std::fmt;

const MODULE_BITS: u32 = 9;
const DESCRIPTION_BITS: u32 = 13;
const MODULE_MASK: u32 = (1 << MODULE_BITS) - 1;
const DESCRIPTION_MASK: u32 = (1 << DESCRIPTION_BITS) - 1;

/// Module a result code originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorModule {
	/// Shared, module-less results.
	Common = 0,
	/// Kernel (svc) results.
	Kernel = 1,
	/// Filesystem service results.
	Fs = 2,
	/// Service framework (CMIF) results.
	Sf = 10,
	/// HIPC transport results.
	Hipc = 11,
	/// HID service results.
	Hid = 202,
}

impl ErrorModule {
	/// Returns the raw module number.
	#[inline]
	pub const fn raw(self) -> u32 {
		self as u32
	}
}

/// A 32-bit result word: module in bits 0..9, description in bits 9..22.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResultCode(u32);

impl ResultCode {
	/// The all-zero success result.
	pub const SUCCESS: ResultCode = ResultCode(0);

	/// Builds a result code from a module and description.
	pub const fn new(module: ErrorModule, description: u32) -> Self {
		Self((module.raw() & MODULE_MASK) | ((description & DESCRIPTION_MASK) << MODULE_BITS))
	}

	/// Wraps a raw result word as received from the guest.
	#[inline]
	pub const fn from_raw(raw: u32) -> Self {
		Self(raw)
	}

	/// Returns the raw result word.
	#[inline]
	pub const fn raw(self) -> u32 {
		self.0
	}

	/// Returns the module number.
	#[inline]
	pub const fn module(self) -> u32 {
		self.0 & MODULE_MASK
	}

	/// Returns the description number.
	#[inline]
	pub const fn description(self) -> u32 {
		(self.0 >> MODULE_BITS) & DESCRIPTION_MASK
	}

	/// Returns true for [`ResultCode::SUCCESS`].
	#[inline]
	pub const fn is_success(self) -> bool {
		self.0 == 0
	}

	/// Returns true for any non-success code.
	#[inline]
	pub const fn is_error(self) -> bool {
		!self.is_success()
	}
}

/// The service framework does not know the requested command id.
pub const RESULT_UNKNOWN_COMMAND_ID: ResultCode = ResultCode::new(ErrorModule::Sf, 221);

impl fmt::Display for ResultCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:04}", 2000 + self.module(), self.description())
	}
}

impl fmt::Debug for ResultCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ResultCode({:#010x} = {self})", self.0)
	}
}

impl std::error::Error for ResultCode {}
