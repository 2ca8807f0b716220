use std::sync::atomic::{AtomicBool, Ordering};

/// Result of trying to claim the single execution of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim {
	/// This caller owns the execution and must deliver the stored outcome.
	Run,
	/// This caller owns the execution, but the call was canceled first.
	Canceled,
	/// Another caller already owns the execution.
	AlreadyExecuted,
}

/// One-shot execution and cancellation flags of a single call instance.
///
/// The execution claim is taken before the cancel flag is sampled, so a
/// cancel racing with execution is honored only if it is visible when the
/// claim succeeds.
#[derive(Debug, Default)]
pub(crate) struct CallState {
	executed: AtomicBool,
	canceled: AtomicBool,
}

impl CallState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn claim(&self) -> Claim {
		if self.executed.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
			return Claim::AlreadyExecuted;
		}
		if self.canceled.load(Ordering::Acquire) {
			Claim::Canceled
		} else {
			Claim::Run
		}
	}

	pub fn cancel(&self) {
		self.canceled.store(true, Ordering::Release);
	}

	pub fn is_executed(&self) -> bool {
		self.executed.load(Ordering::Acquire)
	}

	pub fn is_canceled(&self) -> bool {
		self.canceled.load(Ordering::Acquire)
	}
}
