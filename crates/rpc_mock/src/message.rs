//! Request and response values carried by stand-in calls.

use std::fmt;
use std::sync::LazyLock;

use url::Url;

static PLACEHOLDER: LazyLock<Request> =
	LazyLock::new(|| Request::get(Url::parse("http://localhost/").expect("placeholder url is valid")));

/// Opaque request descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
	method: String,
	url: Url,
}

impl Request {
	/// Creates a request descriptor.
	pub fn new(method: impl Into<String>, url: Url) -> Self {
		Self { method: method.into(), url }
	}

	/// Creates a `GET` request descriptor.
	pub fn get(url: Url) -> Self {
		Self::new("GET", url)
	}

	/// The default descriptor, `GET http://localhost/`.
	pub fn placeholder() -> Self {
		PLACEHOLDER.clone()
	}

	/// Returns the request method.
	pub fn method(&self) -> &str {
		&self.method
	}

	/// Returns the request URL.
	pub fn url(&self) -> &Url {
		&self.url
	}
}

impl fmt::Display for Request {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.method, self.url)
	}
}

/// Raw response metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	/// Status code.
	pub status: u16,
	/// Status message.
	pub message: String,
	/// The request that produced this response.
	pub request: Request,
}

impl RawResponse {
	/// Creates raw metadata for `request`.
	pub fn new(status: u16, message: impl Into<String>, request: Request) -> Self {
		Self {
			status,
			message: message.into(),
			request,
		}
	}

	/// Returns true if the status is in `200..300`.
	pub fn is_successful(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body<T> {
	Success(T),
	Error(String),
}

/// A response tagged as either success (with a body) or error (with an error body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
	raw: RawResponse,
	body: Body<T>,
}

impl<T> Response<T> {
	/// Creates a `200 OK` response for the placeholder request.
	pub fn success(body: T) -> Self {
		Self::success_with_raw(body, RawResponse::new(200, "OK", Request::placeholder()))
	}

	/// Creates a successful response from raw metadata.
	///
	/// # Panics
	///
	/// Panics if `raw` is not successful.
	pub fn success_with_raw(body: T, raw: RawResponse) -> Self {
		assert!(raw.is_successful(), "raw response must be successful, got {}", raw.status);
		Self {
			raw,
			body: Body::Success(body),
		}
	}

	/// Creates an error response for the placeholder request.
	///
	/// # Panics
	///
	/// Panics if `status < 400`.
	pub fn error(status: u16, error_body: impl Into<String>) -> Self {
		assert!(status >= 400, "error status must be >= 400, got {status}");
		Self::error_with_raw(error_body, RawResponse::new(status, "Response.error()", Request::placeholder()))
	}

	/// Creates an error response from raw metadata.
	///
	/// # Panics
	///
	/// Panics if `raw` is successful.
	pub fn error_with_raw(error_body: impl Into<String>, raw: RawResponse) -> Self {
		assert!(!raw.is_successful(), "raw response must not be successful, got {}", raw.status);
		Self {
			raw,
			body: Body::Error(error_body.into()),
		}
	}

	/// Returns the status code.
	pub fn status(&self) -> u16 {
		self.raw.status
	}

	/// Returns the status message.
	pub fn message(&self) -> &str {
		&self.raw.message
	}

	/// Returns the raw response metadata.
	pub fn raw(&self) -> &RawResponse {
		&self.raw
	}

	/// Returns true if this is a success response.
	pub fn is_successful(&self) -> bool {
		matches!(self.body, Body::Success(_))
	}

	/// Returns the success body.
	pub fn body(&self) -> Option<&T> {
		match &self.body {
			Body::Success(body) => Some(body),
			Body::Error(_) => None,
		}
	}

	/// Consumes the response, returning the success body.
	pub fn into_body(self) -> Option<T> {
		match self.body {
			Body::Success(body) => Some(body),
			Body::Error(_) => None,
		}
	}

	/// Returns the error body of an error response.
	pub fn error_body(&self) -> Option<&str> {
		match &self.body {
			Body::Success(_) => None,
			Body::Error(body) => Some(body),
		}
	}

	/// Splits on the response tag.
	pub fn into_result(self) -> Result<Self, HttpError> {
		match self.body {
			Body::Success(_) => Ok(self),
			Body::Error(body) => Err(HttpError {
				status: self.raw.status,
				message: self.raw.message,
				body,
				request: self.raw.request,
			}),
		}
	}
}

/// Failure built from an error-tagged [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP {status} {message}")]
pub struct HttpError {
	/// Status code.
	pub status: u16,
	/// Status message.
	pub message: String,
	/// Error body.
	pub body: String,
	/// The request that produced the response.
	pub request: Request,
}

#[cfg(test)]
mod tests;
