//! Opcode-keyed command registry.
//!
//! A registry is built once from a table of [`FunctionInfo`] rows and is
//! read-only afterwards, so lookups need no locking:
//!
//! ```rust,ignore
//! let registry = RegistryBuilder::new("hid:dbg")
//!     .duplicate_policy(DuplicatePolicy::Ambiguous)
//!     .extend(HID_DEBUG_FUNCTIONS.iter().copied())
//!     .build()?;
//!
//! match registry.dispatch(id, ctx, |handler, ctx| handler(service, ctx)) {
//!     Ok(()) => {}
//!     Err(DispatchError::UnimplementedCommand { name, .. }) => { /* report */ }
//!     Err(err) => { /* unknown, ambiguous, or handler failure */ }
//! }
//! ```

mod build;
mod collision;
mod error;

use rustc_hash::FxHashMap;

pub use build::RegistryBuilder;
pub use collision::{Collision, DuplicatePolicy, InsertAction};
pub use error::{BuildError, DispatchError};

#[cfg(test)]
mod tests;

/// One row of a command table.
///
/// `name` is diagnostic only and never used for lookup. A row without a
/// handler documents a command the real service exposes but the emulator
/// does not implement yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo<H> {
	/// Command id, unique within one registry.
	pub id: u32,
	/// Human-readable command name.
	pub name: &'static str,
	/// Implementation, if any.
	pub handler: Option<H>,
}

impl<H> FunctionInfo<H> {
	/// Creates an implemented row.
	pub const fn new(id: u32, name: &'static str, handler: H) -> Self {
		Self {
			id,
			name,
			handler: Some(handler),
		}
	}

	/// Creates a known-but-unimplemented row.
	pub const fn unimplemented(id: u32, name: &'static str) -> Self {
		Self {
			id,
			name,
			handler: None,
		}
	}

	/// Returns true if the row carries a handler.
	#[inline]
	pub fn is_implemented(&self) -> bool {
		self.handler.is_some()
	}
}

/// Where an id points inside [`CommandRegistry::entries`].
#[derive(Debug, Clone)]
pub(crate) enum Slot {
	Single(usize),
	Ambiguous(Vec<usize>),
}

impl Slot {
	pub(crate) fn indices(&self) -> &[usize] {
		match self {
			Slot::Single(idx) => std::slice::from_ref(idx),
			Slot::Ambiguous(indices) => indices,
		}
	}

	pub(crate) fn push(&mut self, idx: usize) {
		match self {
			Slot::Single(first) => *self = Slot::Ambiguous(vec![*first, idx]),
			Slot::Ambiguous(indices) => indices.push(idx),
		}
	}
}

/// Result of resolving an id without invoking anything.
#[derive(Debug)]
pub enum Resolution<'a, H> {
	/// No row exists for the id.
	Unknown,
	/// Exactly one row exists and it has no handler.
	Unimplemented(&'a FunctionInfo<H>),
	/// Several rows share the id.
	Ambiguous(Vec<&'a FunctionInfo<H>>),
	/// Exactly one row exists and it has a handler.
	Ready {
		info: &'a FunctionInfo<H>,
		handler: &'a H,
	},
}

/// Immutable id to [`FunctionInfo`] mapping built by [`RegistryBuilder`].
#[derive(Debug, Clone)]
pub struct CommandRegistry<H> {
	pub(crate) label: &'static str,
	pub(crate) entries: Vec<FunctionInfo<H>>,
	pub(crate) by_id: FxHashMap<u32, Slot>,
	pub(crate) collisions: Vec<Collision>,
}

impl<H> CommandRegistry<H> {
	/// Returns the label used in diagnostics (usually the service name).
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns all rows in construction order.
	#[inline]
	pub fn entries(&self) -> &[FunctionInfo<H>] {
		&self.entries
	}

	/// Returns the number of rows kept.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the registry holds no rows.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the collisions recorded while building.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Returns the row for `id` when it resolves to exactly one row.
	pub fn get(&self, id: u32) -> Option<&FunctionInfo<H>> {
		match self.by_id.get(&id)? {
			Slot::Single(idx) => Some(&self.entries[*idx]),
			Slot::Ambiguous(_) => None,
		}
	}

	/// Returns true if several rows share `id`.
	pub fn is_ambiguous(&self, id: u32) -> bool {
		matches!(self.by_id.get(&id), Some(Slot::Ambiguous(_)))
	}

	/// Resolves `id` to its row without invoking the handler.
	pub fn resolve(&self, id: u32) -> Resolution<'_, H> {
		match self.by_id.get(&id) {
			None => Resolution::Unknown,
			Some(Slot::Ambiguous(indices)) => {
				Resolution::Ambiguous(indices.iter().map(|&idx| &self.entries[idx]).collect())
			}
			Some(Slot::Single(idx)) => {
				let info = &self.entries[*idx];
				match &info.handler {
					Some(handler) => Resolution::Ready { info, handler },
					None => Resolution::Unimplemented(info),
				}
			}
		}
	}

	/// Dispatches `id`, invoking its handler with `ctx` through `invoke`.
	///
	/// The handler runs at most once. Its result or failure is returned
	/// unchanged; every other outcome is a registry-side [`DispatchError`].
	pub fn dispatch<C, R, E>(
		&self,
		id: u32,
		ctx: C,
		invoke: impl FnOnce(&H, C) -> Result<R, E>,
	) -> Result<R, DispatchError<E>> {
		match self.resolve(id) {
			Resolution::Ready { info, handler } => {
				tracing::trace!(registry = self.label, id, name = info.name, "dispatch");
				invoke(handler, ctx).map_err(DispatchError::Handler)
			}
			Resolution::Unimplemented(info) => Err(DispatchError::UnimplementedCommand {
				id,
				name: info.name,
			}),
			Resolution::Ambiguous(infos) => Err(DispatchError::Ambiguous {
				id,
				names: infos.iter().map(|info| info.name).collect(),
			}),
			Resolution::Unknown => Err(DispatchError::UnknownCommand { id }),
		}
	}
}
