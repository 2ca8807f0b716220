//! Factories for stand-in calls.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::call::BoxCall;
use crate::config::MockConfig;
use crate::deferred::DeferredCall;
use crate::immediate::ImmediateCall;
use crate::message::{HttpError, RawResponse, Request, Response};
use crate::origin::{Origin, OriginKind};

static DEFAULT: LazyLock<Calls> = LazyLock::new(Calls::default);

/// Call factory sharing one placeholder request across the calls it builds.
#[derive(Debug, Clone)]
pub struct Calls {
	placeholder: Arc<Request>,
}

impl Default for Calls {
	fn default() -> Self {
		Self::new(&MockConfig::default())
	}
}

impl Calls {
	/// Creates a factory from `config`.
	pub fn new(config: &MockConfig) -> Self {
		Self {
			placeholder: Arc::new(config.placeholder()),
		}
	}

	/// Returns the request reported by calls without a response.
	pub fn placeholder(&self) -> &Request {
		&self.placeholder
	}

	/// Creates a call returning a `200 OK` response with `value` as its body,
	/// answering this factory's placeholder request.
	pub fn response<T, E>(&self, value: T) -> ImmediateCall<T, E>
	where
		T: fmt::Debug,
	{
		let origin = Origin::with_arg(OriginKind::ResponseValue, &value);
		let raw = RawResponse::new(200, "OK", (*self.placeholder).clone());
		ImmediateCall::success(origin, Arc::clone(&self.placeholder), Response::success_with_raw(value, raw))
	}

	/// Creates a call from a full response.
	///
	/// A success response is returned by the call as-is; an error response
	/// makes the call fail with the corresponding [`HttpError`]. Either way
	/// [`Call::request`](crate::Call::request) reports the response's request.
	pub fn response_from<T, E>(&self, response: Response<T>) -> ImmediateCall<T, E>
	where
		T: fmt::Debug,
		E: From<HttpError>,
	{
		let origin = Origin::with_arg(OriginKind::Response, &response);
		match response.into_result() {
			Ok(response) => ImmediateCall::success(origin, Arc::clone(&self.placeholder), response),
			Err(error) => {
				let request = Arc::new(error.request.clone());
				ImmediateCall::failure(origin, request, E::from(error))
			}
		}
	}

	/// Creates a call failing with `error`.
	pub fn failure<T, E>(&self, error: E) -> ImmediateCall<T, E>
	where
		E: fmt::Debug,
	{
		let origin = Origin::with_arg(OriginKind::Failure, &error);
		ImmediateCall::failure(origin, Arc::clone(&self.placeholder), error)
	}

	/// Creates a call that invokes `supplier` once on first use, and once more
	/// for each clone.
	pub fn defer<T, E, F>(&self, supplier: F) -> DeferredCall<T, E>
	where
		F: Fn() -> Result<BoxCall<T, E>, E> + Send + Sync + 'static,
	{
		let origin = Origin::new(OriginKind::Defer, vec!["<supplier>".to_owned()]);
		DeferredCall::new(origin, Arc::clone(&self.placeholder), supplier)
	}
}

/// Creates a call returning a `200 OK` response with `value` as its body.
pub fn response<T: fmt::Debug, E>(value: T) -> ImmediateCall<T, E> {
	DEFAULT.response(value)
}

/// Creates a call from a full response. See [`Calls::response_from`].
pub fn response_from<T: fmt::Debug, E: From<HttpError>>(response: Response<T>) -> ImmediateCall<T, E> {
	DEFAULT.response_from(response)
}

/// Creates a call failing with `error`.
pub fn failure<T, E: fmt::Debug>(error: E) -> ImmediateCall<T, E> {
	DEFAULT.failure(error)
}

/// Creates a lazily resolved call. See [`Calls::defer`].
pub fn defer<T, E, F>(supplier: F) -> DeferredCall<T, E>
where
	F: Fn() -> Result<BoxCall<T, E>, E> + Send + Sync + 'static,
{
	DEFAULT.defer(supplier)
}
