#[cfg(feature = "http-bind")]
#[test]
fn http_bind_resolve_request() {
    use bind_pattern::http_bind::Request;
    use bind_pattern::{PatternPair, Polarity};

    let pair = PatternPair::from_bind("get /users/{id}/?/edit");
    assert_eq!(pair.source(), "GET/users/{id}/?/edit");

    let req = Request::get("/users/42/draft/edit?x=1").body(()).unwrap();
    assert_eq!(pair.resolve_request(&req).polarity(), Polarity::Match);

    let req = Request::post("/users/42/edit").body(()).unwrap();
    assert_eq!(pair.resolve_request(&req).polarity(), Polarity::NoMatch);

    let any = PatternPair::from_bind("/health");
    let req = Request::head("/health").body(()).unwrap();
    assert_eq!(any.resolve_request(&req).polarity(), Polarity::Match);
}

#[cfg(feature = "http-bind")]
#[test]
fn http_bind_errors() {
    use bind_pattern::{Pattern, PatternPair, Polarity};

    assert!(PatternPair::try_from_bind("GET").is_err());
    assert!(Pattern::try_from_bind("GET /a b", Polarity::Match).is_err());

    let err = PatternPair::try_from_bind("G{T /a").unwrap_err();
    assert_eq!(err.to_string(), "invalid http method: bind = \"G{T /a\"");
}

#[cfg(feature = "http-bind")]
#[test]
#[should_panic(expected = "bind url is missing a path")]
fn http_bind_panics_on_bad_bind() {
    bind_pattern::PatternPair::from_bind("GET");
}
