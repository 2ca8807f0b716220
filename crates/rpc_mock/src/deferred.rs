//! Calls that build their delegate lazily.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::call::{BoxCall, Call, Callback};
use crate::error::{AlreadyExecuted, CallError};
use crate::immediate::ImmediateCall;
use crate::message::{Request, Response};
use crate::origin::{Origin, OriginKind};

type Supplier<T, E> = dyn Fn() -> Result<BoxCall<T, E>, E> + Send + Sync;

/// Call whose delegate is produced by a supplier on first use.
///
/// The first operation of any kind (including [`Call::cancel`] and the state
/// observers) invokes the supplier exactly once; concurrent first callers wait
/// for that resolution and share its delegate. A supplier error becomes a
/// failed delegate, surfaced through [`Call::execute`] and
/// [`Callback::on_failure`].
///
/// Cloning does not share the delegate: a clone runs the supplier again.
///
/// The supplier runs while the delegate lock is held, and that lock is not
/// reentrant: a supplier that reaches back into the same call (for example
/// through a shared `Arc`) deadlocks. A panicking supplier leaves the call
/// unresolved and the next operation runs the supplier again.
pub struct DeferredCall<T, E> {
	supplier: Arc<Supplier<T, E>>,
	origin: Arc<Origin>,
	placeholder: Arc<Request>,
	delegate: Mutex<Option<Arc<dyn Call<T, E>>>>,
}

impl<T, E> DeferredCall<T, E> {
	/// Creates an unresolved call around `supplier`.
	///
	/// `placeholder` is reported by [`Call::request`] if the supplier fails.
	pub fn new<F>(origin: Origin, placeholder: Arc<Request>, supplier: F) -> Self
	where
		F: Fn() -> Result<BoxCall<T, E>, E> + Send + Sync + 'static,
	{
		Self {
			supplier: Arc::new(supplier),
			origin: Arc::new(origin),
			placeholder,
			delegate: Mutex::new(None),
		}
	}

	/// Returns true once the supplier has produced a delegate.
	pub fn is_resolved(&self) -> bool {
		self.delegate.lock().is_some()
	}
}

impl<T, E> DeferredCall<T, E>
where
	T: Clone + Send + Sync + 'static,
	E: Clone + fmt::Debug + Send + Sync + 'static,
{
	// The lock is released before the caller forwards to the delegate.
	fn delegate(&self) -> Arc<dyn Call<T, E>> {
		let mut slot = self.delegate.lock();
		if let Some(delegate) = slot.as_ref() {
			return Arc::clone(delegate);
		}

		let delegate: Arc<dyn Call<T, E>> = match (self.supplier)() {
			Ok(call) => {
				tracing::trace!(origin = %self.origin, delegate = %call.origin(), "call.deferred.resolve");
				Arc::from(call)
			}
			Err(error) => {
				tracing::debug!(origin = %self.origin, ?error, "Deferred call supplier failed");
				let origin = Origin::with_arg(OriginKind::Failure, &error);
				Arc::new(ImmediateCall::<T, E>::failure(origin, Arc::clone(&self.placeholder), error))
			}
		};
		*slot = Some(Arc::clone(&delegate));
		delegate
	}
}

impl<T, E> Call<T, E> for DeferredCall<T, E>
where
	T: Clone + Send + Sync + 'static,
	E: Clone + fmt::Debug + Send + Sync + 'static,
{
	fn execute(&self) -> Result<Response<T>, CallError<E>> {
		self.delegate().execute()
	}

	fn enqueue(&self, callback: Box<dyn Callback<T, E> + '_>) -> Result<(), AlreadyExecuted> {
		self.delegate().enqueue(callback)
	}

	fn cancel(&self) {
		self.delegate().cancel();
	}

	fn is_executed(&self) -> bool {
		self.delegate().is_executed()
	}

	fn is_canceled(&self) -> bool {
		self.delegate().is_canceled()
	}

	fn clone_call(&self) -> BoxCall<T, E> {
		Box::new(self.clone())
	}

	fn request(&self) -> Request {
		self.delegate().request()
	}

	fn origin(&self) -> &Origin {
		&self.origin
	}
}

impl<T, E> Clone for DeferredCall<T, E> {
	/// Returns an unresolved call sharing the supplier.
	fn clone(&self) -> Self {
		Self {
			supplier: Arc::clone(&self.supplier),
			origin: Arc::clone(&self.origin),
			placeholder: Arc::clone(&self.placeholder),
			delegate: Mutex::new(None),
		}
	}
}

impl<T, E> fmt::Debug for DeferredCall<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DeferredCall")
			.field("origin", &self.origin)
			.field("resolved", &self.delegate.try_lock().map(|slot| slot.is_some()))
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
