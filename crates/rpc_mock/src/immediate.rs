//! Calls that deliver a precomputed outcome.

use std::fmt;
use std::sync::Arc;

use crate::call::{BoxCall, Call, Callback};
use crate::error::{AlreadyExecuted, CallError};
use crate::message::{Request, Response};
use crate::origin::Origin;
use crate::state::{CallState, Claim};

#[derive(Debug)]
enum Outcome<T, E> {
	Success(Response<T>),
	Failure(E),
}

/// What a claimed execution delivers.
enum Delivery<T, E> {
	Response(Response<T>),
	Failure(CallError<E>),
}

/// Single-use call delivering a precomputed response or failure.
///
/// Clones share the outcome and origin but start with fresh execution and
/// cancellation state.
pub struct ImmediateCall<T, E> {
	outcome: Arc<Outcome<T, E>>,
	origin: Arc<Origin>,
	placeholder: Arc<Request>,
	state: CallState,
}

impl<T, E> ImmediateCall<T, E> {
	/// Creates a call from exactly one of `response` and `error`.
	///
	/// `placeholder` is reported by [`Call::request`] when there is no response,
	/// e.g. the request of an error response that became the failure.
	///
	/// # Panics
	///
	/// Panics if both or neither of `response` and `error` are set.
	pub fn new(origin: Origin, placeholder: Arc<Request>, response: Option<Response<T>>, error: Option<E>) -> Self {
		let outcome = match (response, error) {
			(Some(response), None) => Outcome::Success(response),
			(None, Some(error)) => Outcome::Failure(error),
			_ => panic!("only one of response or error can be set"),
		};
		Self {
			outcome: Arc::new(outcome),
			origin: Arc::new(origin),
			placeholder,
			state: CallState::new(),
		}
	}

	/// Creates a call delivering `response`.
	pub fn success(origin: Origin, placeholder: Arc<Request>, response: Response<T>) -> Self {
		Self::new(origin, placeholder, Some(response), None)
	}

	/// Creates a call failing with `error`.
	pub fn failure(origin: Origin, placeholder: Arc<Request>, error: E) -> Self {
		Self::new(origin, placeholder, None, Some(error))
	}
}

impl<T: Clone, E: Clone> ImmediateCall<T, E> {
	fn claim(&self) -> Option<Delivery<T, E>> {
		let claim = self.state.claim();
		tracing::trace!(origin = %self.origin, ?claim, "call.claim");
		match claim {
			Claim::AlreadyExecuted => None,
			Claim::Canceled => Some(Delivery::Failure(CallError::Canceled)),
			Claim::Run => Some(match &*self.outcome {
				Outcome::Success(response) => Delivery::Response(response.clone()),
				Outcome::Failure(error) => Delivery::Failure(CallError::Failed(error.clone())),
			}),
		}
	}
}

impl<T, E> Call<T, E> for ImmediateCall<T, E>
where
	T: Clone + Send + Sync + 'static,
	E: Clone + Send + Sync + 'static,
{
	fn execute(&self) -> Result<Response<T>, CallError<E>> {
		match self.claim() {
			None => Err(CallError::AlreadyExecuted),
			Some(Delivery::Response(response)) => Ok(response),
			Some(Delivery::Failure(error)) => Err(error),
		}
	}

	fn enqueue(&self, callback: Box<dyn Callback<T, E> + '_>) -> Result<(), AlreadyExecuted> {
		match self.claim().ok_or(AlreadyExecuted)? {
			Delivery::Response(response) => callback.on_response(self, response),
			Delivery::Failure(error) => callback.on_failure(self, error),
		}
		Ok(())
	}

	fn cancel(&self) {
		tracing::trace!(origin = %self.origin, executed = self.state.is_executed(), "call.cancel");
		self.state.cancel();
	}

	fn is_executed(&self) -> bool {
		self.state.is_executed()
	}

	fn is_canceled(&self) -> bool {
		self.state.is_canceled()
	}

	fn clone_call(&self) -> BoxCall<T, E> {
		Box::new(self.clone())
	}

	fn request(&self) -> Request {
		match &*self.outcome {
			Outcome::Success(response) => response.raw().request.clone(),
			Outcome::Failure(_) => (*self.placeholder).clone(),
		}
	}

	fn origin(&self) -> &Origin {
		&self.origin
	}
}

impl<T, E> Clone for ImmediateCall<T, E> {
	/// Returns an unexecuted, uncanceled call with the same outcome.
	fn clone(&self) -> Self {
		Self {
			outcome: Arc::clone(&self.outcome),
			origin: Arc::clone(&self.origin),
			placeholder: Arc::clone(&self.placeholder),
			state: CallState::new(),
		}
	}
}

impl<T, E> fmt::Debug for ImmediateCall<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImmediateCall")
			.field("origin", &self.origin)
			.field("success", &matches!(*self.outcome, Outcome::Success(_)))
			.field("executed", &self.state.is_executed())
			.field("canceled", &self.state.is_canceled())
			.finish_non_exhaustive()
	}
}
