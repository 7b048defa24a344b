use serde::{Deserialize, Serialize};

/// Policy for rows that share a command id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
	/// Fail the build with [`BuildError::DuplicateCommand`].
	///
	/// [`BuildError::DuplicateCommand`]: super::BuildError::DuplicateCommand
	#[default]
	Reject,
	/// Keep every row and report the id as ambiguous on dispatch.
	Ambiguous,
	/// Keep the first row seen for an id.
	FirstWins,
	/// Overwrite with the last row seen for an id.
	LastWins,
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DuplicatePolicy::Reject => write!(f, "reject"),
			DuplicatePolicy::Ambiguous => write!(f, "ambiguous"),
			DuplicatePolicy::FirstWins => write!(f, "first_wins"),
			DuplicatePolicy::LastWins => write!(f, "last_wins"),
		}
	}
}

/// What the builder did with a row whose id was already taken.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Kept the existing row; the new one was dropped.
	KeptExisting,
	/// Replaced the existing row with the new one.
	ReplacedExisting,
	/// Kept both rows and marked the id ambiguous.
	MarkedAmbiguous,
}

/// Records a non-fatal id collision resolved by policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// The registry label where this collision occurred.
	pub registry: &'static str,
	/// The contested command id.
	pub id: u32,
	/// Name of the row that already held the id.
	pub existing: &'static str,
	/// Name of the row trying to claim the id.
	pub new: &'static str,
	/// What action was taken.
	pub action: InsertAction,
}

impl std::fmt::Display for Collision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}: id={} existing={:?} new={:?} action={:?}",
			self.registry, self.id, self.existing, self.new, self.action
		)
	}
}
