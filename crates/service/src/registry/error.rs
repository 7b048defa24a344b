use thiserror::Error;

/// Fatal table defects found while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
	/// Two rows claim the same command id under [`DuplicatePolicy::Reject`].
	///
	/// [`DuplicatePolicy::Reject`]: super::DuplicatePolicy::Reject
	#[error("duplicate command id in {registry}: id={id} existing={existing:?} new={new:?}")]
	DuplicateCommand {
		registry: &'static str,
		id: u32,
		existing: &'static str,
		new: &'static str,
	},
}

/// Outcome of a dispatch that did not produce a handler result.
///
/// The first three variants are expected, reportable states of a partially
/// implemented service. Only [`DispatchError::Handler`] originates in a
/// handler, and it is passed through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError<E> {
	/// No row exists for the id.
	#[error("unknown command: id={id}")]
	UnknownCommand { id: u32 },
	/// A row exists but carries no handler.
	#[error("unimplemented command: id={id} name={name}")]
	UnimplementedCommand { id: u32, name: &'static str },
	/// Several rows share the id and none was chosen at build time.
	#[error("ambiguous command: id={id} candidates={names:?}")]
	Ambiguous { id: u32, names: Vec<&'static str> },
	/// The handler ran and reported failure.
	#[error("handler failed: {0}")]
	Handler(E),
}

impl<E> DispatchError<E> {
	/// Returns true when the registry, not the handler, refused the call.
	pub fn is_not_supported(&self) -> bool {
		!matches!(self, DispatchError::Handler(_))
	}

	/// Returns the command id for registry-side outcomes.
	pub fn command_id(&self) -> Option<u32> {
		match self {
			DispatchError::UnknownCommand { id }
			| DispatchError::UnimplementedCommand { id, .. }
			| DispatchError::Ambiguous { id, .. } => Some(*id),
			DispatchError::Handler(_) => None,
		}
	}
}
