use rstest::rstest;

use super::*;

#[test]
fn success_uses_placeholder_request() {
	let resp = Response::success("body");
	assert_eq!(resp.status(), 200);
	assert_eq!(resp.message(), "OK");
	assert!(resp.is_successful());
	assert_eq!(resp.body(), Some(&"body"));
	assert_eq!(resp.error_body(), None);
	assert_eq!(resp.raw().request, Request::placeholder());
	assert_eq!(resp.raw().request.to_string(), "GET http://localhost/");
}

#[test]
fn error_response_splits_into_http_error() {
	let resp: Response<()> = Response::error(404, "missing");
	assert!(!resp.is_successful());
	assert_eq!(resp.body(), None);
	assert_eq!(resp.error_body(), Some("missing"));

	let err = resp.into_result().unwrap_err();
	assert_eq!(err.status, 404);
	assert_eq!(err.body, "missing");
	assert_eq!(err.to_string(), "HTTP 404 Response.error()");
}

#[test]
fn success_with_raw_keeps_request() {
	let req = Request::new("POST", Url::parse("https://example.com/items").unwrap());
	let resp = Response::success_with_raw(7, RawResponse::new(201, "Created", req.clone()));
	assert_eq!(resp.raw().request, req);
	assert_eq!(resp.into_result().unwrap().into_body(), Some(7));
}

#[rstest]
#[case(100)]
#[case(200)]
#[case(399)]
#[should_panic(expected = "error status must be >= 400")]
fn error_rejects_non_error_status(#[case] status: u16) {
	let _ = Response::<()>::error(status, "");
}

#[test]
#[should_panic(expected = "raw response must be successful")]
fn success_rejects_error_raw() {
	let _ = Response::success_with_raw((), RawResponse::new(500, "boom", Request::placeholder()));
}
