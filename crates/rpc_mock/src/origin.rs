//! Origin descriptors naming the factory that produced a call.

use std::fmt;

/// Factory entry point that produced a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
	/// Built lazily from a supplier.
	Defer,
	/// Built from a success value.
	ResponseValue,
	/// Built from a full response.
	Response,
	/// Built from a failure.
	Failure,
}

impl OriginKind {
	/// Returns the factory name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Defer => "defer",
			Self::ResponseValue | Self::Response => "response",
			Self::Failure => "failure",
		}
	}
}

/// Introspection metadata attached to a call: the factory and its arguments.
///
/// Only exposed for inspection; call behavior never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
	kind: OriginKind,
	args: Vec<String>,
}

impl Origin {
	/// Creates an origin from pre-rendered arguments.
	pub fn new(kind: OriginKind, args: Vec<String>) -> Self {
		Self { kind, args }
	}

	/// Creates an origin rendering a single argument with [`fmt::Debug`].
	pub fn with_arg(kind: OriginKind, arg: &dyn fmt::Debug) -> Self {
		Self::new(kind, vec![format!("{arg:?}")])
	}

	/// Returns the producing factory.
	pub fn kind(&self) -> OriginKind {
		self.kind
	}

	/// Returns the rendered factory arguments.
	pub fn args(&self) -> &[String] {
		&self.args
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", self.kind.as_str(), self.args.join(", "))
	}
}
