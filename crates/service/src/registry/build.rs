use rustc_hash::FxHashMap;

use super::collision::{Collision, DuplicatePolicy, InsertAction};
use super::error::BuildError;
use super::{CommandRegistry, FunctionInfo, Slot};

/// Builder for constructing a [`CommandRegistry`].
///
/// Collects rows in table order, validates ids against the
/// [`DuplicatePolicy`], and produces the final immutable registry.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new("hid:dbg")
///     .extend(HID_DEBUG_FUNCTIONS.iter().copied())
///     .build()?;
/// ```
pub struct RegistryBuilder<H> {
	label: &'static str,
	rows: Vec<FunctionInfo<H>>,
	policy: DuplicatePolicy,
}

impl<H> RegistryBuilder<H> {
	/// Creates a new builder with the given label for diagnostics.
	///
	/// The policy defaults to [`DuplicatePolicy::Reject`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			rows: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Sets the duplicate id handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single row to the builder.
	pub fn push(mut self, info: FunctionInfo<H>) -> Self {
		self.rows.push(info);
		self
	}

	/// Adds multiple rows to the builder.
	pub fn extend<I: IntoIterator<Item = FunctionInfo<H>>>(mut self, rows: I) -> Self {
		self.rows.extend(rows);
		self
	}

	/// Builds the registry, validating ids according to policy.
	///
	/// An unimplemented row repeating the id and name of a kept
	/// unimplemented row is dropped. Any other repeat, including one that
	/// adds or swaps a handler, goes through the policy.
	pub fn build(self) -> Result<CommandRegistry<H>, BuildError> {
		let mut entries: Vec<FunctionInfo<H>> = Vec::with_capacity(self.rows.len());
		let mut by_id: FxHashMap<u32, Slot> = FxHashMap::default();
		let mut collisions = Vec::new();

		for row in self.rows {
			let (id, name) = (row.id, row.name);
			let Some(slot) = by_id.get_mut(&id) else {
				by_id.insert(id, Slot::Single(entries.len()));
				entries.push(row);
				continue;
			};

			let redundant = row.handler.is_none()
				&& slot
					.indices()
					.iter()
					.any(|&idx| entries[idx].name == name && entries[idx].handler.is_none());
			if redundant {
				continue;
			}

			let first = slot.indices()[0];
			let existing = entries[first].name;
			let action = match self.policy {
				DuplicatePolicy::Reject => {
					return Err(BuildError::DuplicateCommand {
						registry: self.label,
						id,
						existing,
						new: name,
					});
				}
				DuplicatePolicy::FirstWins => InsertAction::KeptExisting,
				DuplicatePolicy::LastWins => {
					entries[first] = row;
					InsertAction::ReplacedExisting
				}
				DuplicatePolicy::Ambiguous => {
					slot.push(entries.len());
					entries.push(row);
					InsertAction::MarkedAmbiguous
				}
			};

			tracing::warn!(
				registry = self.label,
				id,
				existing,
				new = name,
				?action,
				"command id collision"
			);
			collisions.push(Collision {
				registry: self.label,
				id,
				existing,
				new: name,
				action,
			});
		}

		Ok(CommandRegistry {
			label: self.label,
			entries,
			by_id,
			collisions,
		})
	}
}
