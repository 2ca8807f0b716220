//! The pending-call capability set shared by every stand-in call.

use std::fmt;

use crate::error::{AlreadyExecuted, CallError};
use crate::message::{Request, Response};
use crate::origin::Origin;

/// Boxed, type-erased call.
pub type BoxCall<T, E> = Box<dyn Call<T, E>>;

/// A call that is executed or enqueued at most once.
///
/// Implementations only touch in-memory state. Nothing here blocks on I/O and
/// [`enqueue`](Call::enqueue) delivers on the calling thread.
pub trait Call<T, E>: Send + Sync {
	/// Executes the call, returning its response.
	///
	/// # Errors
	///
	/// * [`CallError::AlreadyExecuted`] if this call was already executed or enqueued.
	/// * [`CallError::Canceled`] if the call was canceled before executing.
	/// * [`CallError::Failed`] with the stored failure.
	fn execute(&self) -> Result<Response<T>, CallError<E>>;

	/// Executes the call, delivering the outcome to exactly one handler of `callback`.
	///
	/// Cancellation and stored failures go to [`Callback::on_failure`].
	///
	/// # Errors
	///
	/// Returns [`AlreadyExecuted`] without touching `callback` if this call was
	/// already executed or enqueued.
	fn enqueue(&self, callback: Box<dyn Callback<T, E> + '_>) -> Result<(), AlreadyExecuted>;

	/// Marks the call canceled. Idempotent.
	fn cancel(&self);

	/// Returns true once the call was executed or enqueued.
	fn is_executed(&self) -> bool;

	/// Returns true once the call was canceled.
	fn is_canceled(&self) -> bool;

	/// Returns a new, unexecuted call producing the same outcome.
	fn clone_call(&self) -> BoxCall<T, E>;

	/// Returns the request this call stands in for.
	fn request(&self) -> Request;

	/// Returns the factory that produced this call.
	fn origin(&self) -> &Origin;

	/// Erases the call type, e.g. to return it from a deferred supplier.
	fn boxed(self) -> BoxCall<T, E>
	where
		Self: Sized + 'static,
	{
		Box::new(self)
	}
}

/// Receiver of an enqueued call's outcome.
///
/// Both handlers consume the callback, so at most one of them runs.
pub trait Callback<T, E> {
	/// Invoked with the response of a successful call.
	fn on_response(self: Box<Self>, call: &dyn Call<T, E>, response: Response<T>);

	/// Invoked when the call was canceled or failed.
	fn on_failure(self: Box<Self>, call: &dyn Call<T, E>, error: CallError<E>);
}

/// [`Callback`] built from a pair of closures. See [`callback`].
pub struct FnCallback<S, F> {
	on_response: S,
	on_failure: F,
}

impl<S, F> fmt::Debug for FnCallback<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnCallback").finish_non_exhaustive()
	}
}

impl<T, E, S, F> Callback<T, E> for FnCallback<S, F>
where
	S: FnOnce(Response<T>),
	F: FnOnce(CallError<E>),
{
	fn on_response(self: Box<Self>, _call: &dyn Call<T, E>, response: Response<T>) {
		(self.on_response)(response);
	}

	fn on_failure(self: Box<Self>, _call: &dyn Call<T, E>, error: CallError<E>) {
		(self.on_failure)(error);
	}
}

/// Builds a boxed [`Callback`] from an `on_response` and an `on_failure` closure.
pub fn callback<'a, T, E, S, F>(on_response: S, on_failure: F) -> Box<dyn Callback<T, E> + 'a>
where
	S: FnOnce(Response<T>) + 'a,
	F: FnOnce(CallError<E>) + 'a,
{
	Box::new(FnCallback { on_response, on_failure })
}
