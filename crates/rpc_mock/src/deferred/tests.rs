use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Barrier, Mutex as StdMutex};

use super::*;
use crate::call::callback;

type TestCall = DeferredCall<u32, String>;

fn placeholder() -> Arc<Request> {
	Arc::new(Request::placeholder())
}

fn counting(counter: &Arc<AtomicUsize>) -> TestCall {
	let counter = Arc::clone(counter);
	DeferredCall::new(Origin::new(OriginKind::Defer, vec![]), placeholder(), move || {
		let n = counter.fetch_add(1, Ordering::SeqCst) as u32 + 1;
		let origin = Origin::with_arg(OriginKind::ResponseValue, &n);
		Ok(ImmediateCall::success(origin, Arc::new(Request::placeholder()), Response::success(n)).boxed())
	})
}

fn failing(counter: &Arc<AtomicUsize>) -> TestCall {
	let counter = Arc::clone(counter);
	DeferredCall::new(Origin::new(OriginKind::Defer, vec![]), placeholder(), move || {
		counter.fetch_add(1, Ordering::SeqCst);
		Err("supplier failed".to_owned())
	})
}

#[test]
fn resolves_once_per_instance() {
	let counter = Arc::new(AtomicUsize::new(0));
	let call = counting(&counter);
	assert!(!call.is_resolved());
	assert_eq!(call.execute().unwrap().into_body(), Some(1));
	assert!(call.is_resolved());
	assert_eq!(call.execute().unwrap_err(), CallError::AlreadyExecuted);
	assert!(call.is_executed());
	assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn clone_resolves_again() {
	let counter = Arc::new(AtomicUsize::new(0));
	let call = counting(&counter);
	call.execute().unwrap();

	let clone = call.clone_call();
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	assert!(!clone.is_executed());
	assert_eq!(counter.load(Ordering::SeqCst), 2);
	assert_eq!(clone.execute().unwrap().into_body(), Some(2));
	assert_eq!(clone.origin(), call.origin());
}

#[test]
fn observers_and_cancel_trigger_resolution() {
	let counter = Arc::new(AtomicUsize::new(0));
	let call = counting(&counter);
	call.cancel();
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	assert!(call.is_canceled());
	assert_eq!(call.execute().unwrap_err(), CallError::Canceled);

	let other = counting(&counter);
	assert_eq!(other.request(), Request::placeholder());
	assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn supplier_error_becomes_failure() {
	let counter = Arc::new(AtomicUsize::new(0));
	let call = failing(&counter);
	assert_eq!(call.execute().unwrap_err(), CallError::Failed("supplier failed".to_owned()));
	assert_eq!(call.execute().unwrap_err(), CallError::AlreadyExecuted);
	assert_eq!(call.request(), Request::placeholder());
	assert_eq!(counter.load(Ordering::SeqCst), 1);

	let seen = StdMutex::new(None);
	call.clone()
		.enqueue(callback(
			|_: Response<u32>| panic!("unexpected response"),
			|err: CallError<String>| *seen.lock().unwrap() = Some(err),
		))
		.unwrap();
	assert_eq!(seen.into_inner().unwrap(), Some(CallError::Failed("supplier failed".to_owned())));
	assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_first_access_resolves_once() {
	const CALLERS: usize = 8;
	let counter = Arc::new(AtomicUsize::new(0));
	let call = failing(&counter);
	let barrier = Barrier::new(CALLERS);

	let results: Vec<_> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..CALLERS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					call.execute()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert_eq!(counter.load(Ordering::SeqCst), 1);
	let failed = results.iter().filter(|r| matches!(r, Err(CallError::Failed(_)))).count();
	let used = results.iter().filter(|r| matches!(r, Err(CallError::AlreadyExecuted))).count();
	assert_eq!((failed, used), (1, CALLERS - 1));
}

#[test]
fn callback_may_reenter_deferred_call() {
	let counter = Arc::new(AtomicUsize::new(0));
	let call = counting(&counter);
	let executed = StdMutex::new(None);
	call.enqueue(callback(
		|_: Response<u32>| *executed.lock().unwrap() = Some(call.is_executed()),
		|_: CallError<String>| {},
	))
	.unwrap();
	assert_eq!(executed.into_inner().unwrap(), Some(true));
}

#[test]
fn panicking_supplier_leaves_call_unresolved() {
	let attempts = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&attempts);
	let call: TestCall = DeferredCall::new(Origin::new(OriginKind::Defer, vec![]), placeholder(), move || {
		if seen.fetch_add(1, Ordering::SeqCst) == 0 {
			panic!("first attempt");
		}
		Ok(ImmediateCall::success(Origin::new(OriginKind::ResponseValue, vec![]), Arc::new(Request::placeholder()), Response::success(5)).boxed())
	});

	let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| call.execute()));
	assert!(first.is_err());
	assert!(!call.is_resolved());
	assert_eq!(call.execute().unwrap().into_body(), Some(5));
	assert_eq!(attempts.load(Ordering::SeqCst), 2);
}
