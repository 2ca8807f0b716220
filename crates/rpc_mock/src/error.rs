//! Error taxonomy for stand-in calls.

/// Failure observed when executing or enqueueing a call.
///
/// The structural variants ([`AlreadyExecuted`](Self::AlreadyExecuted) and
/// [`Canceled`](Self::Canceled)) are kept apart from [`Failed`](Self::Failed),
/// which carries the stored error exactly as it was handed to the factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError<E> {
	/// The call was already executed or enqueued once.
	#[error("already executed")]
	AlreadyExecuted,
	/// The call was canceled before it was executed.
	#[error("canceled")]
	Canceled,
	/// The stored failure of the call.
	#[error("{0}")]
	Failed(E),
}

impl<E> CallError<E> {
	/// Returns true for [`CallError::Canceled`].
	pub fn is_canceled(&self) -> bool {
		matches!(self, Self::Canceled)
	}

	/// Returns true for [`CallError::AlreadyExecuted`].
	pub fn is_already_executed(&self) -> bool {
		matches!(self, Self::AlreadyExecuted)
	}

	/// Returns the stored failure, if this is one.
	pub fn failure(&self) -> Option<&E> {
		match self {
			Self::Failed(err) => Some(err),
			_ => None,
		}
	}

	/// Consumes the error, returning the stored failure if this is one.
	pub fn into_failure(self) -> Option<E> {
		match self {
			Self::Failed(err) => Some(err),
			_ => None,
		}
	}
}

/// Returned by [`Call::enqueue`](crate::Call::enqueue) on a call that was already used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("already executed")]
pub struct AlreadyExecuted;

impl<E> From<AlreadyExecuted> for CallError<E> {
	fn from(_: AlreadyExecuted) -> Self {
		Self::AlreadyExecuted
	}
}
