//! Deterministic stand-in calls for RPC clients.
//!
//! Code written against the generic [`Call`] interface can be exercised without
//! any transport: every call produced here resolves from in-memory state.
//! * [`ImmediateCall`]: single-use delivery of a precomputed response or error.
//! * [`DeferredCall`]: lazily builds its delegate call on first use and replays it.
//! * [`Calls`] and the free factory functions: construction entry points.
//!
//! Every call object is executed or enqueued at most once. [`Call::clone_call`]
//! yields an independent instance that may be used again.
//!
//! ```
//! use xeno_rpc_mock::{Call, CallError, calls};
//!
//! let call = calls::response::<_, String>(42);
//! assert_eq!(call.execute().unwrap().into_body(), Some(42));
//! assert!(matches!(call.execute(), Err(CallError::AlreadyExecuted)));
//! ```

#![warn(missing_docs)]

pub mod call;
pub mod calls;
pub mod config;
pub mod deferred;
pub mod error;
pub mod immediate;
pub mod message;
pub mod origin;
mod state;

pub use call::{BoxCall, Call, Callback, FnCallback, callback};
pub use calls::{Calls, defer, failure, response, response_from};
pub use config::{ConfigError, MockConfig};
pub use deferred::DeferredCall;
pub use error::{AlreadyExecuted, CallError};
pub use immediate::ImmediateCall;
pub use message::{HttpError, RawResponse, Request, Response};
pub use origin::{Origin, OriginKind};

/// A convenient type alias for `Result` with `E` = [`CallError`].
pub type Result<T, E> = std::result::Result<T, CallError<E>>;
