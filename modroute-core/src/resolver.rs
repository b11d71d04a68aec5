// Request → Route resolution for use inside a serving framework

use crate::parser::{ParseOptions, RouteParser};
use crate::request::PathSource;
use crate::request_path::RequestPath;
use crate::route::{RawRoute, Route, RouteName};
use crate::Result;
use tracing::debug;

/// Resolves incoming requests to routes with a fixed set of parse options.
///
/// Unlike [`Route::new`], the resolver reports every outcome as a `tracing`
/// event under the `modroute::resolver` target. Rejections are returned to
/// the caller unchanged; presenting them is up to the caller.
///
/// [`RouteResolver::resolve`] always ends in the strict checks, so the options
/// only matter for the names returned by [`RouteResolver::resolve_raw`].
///
/// # Examples
///
/// ```
/// use modroute_core::{HttpRequest, RouteResolver};
///
/// let resolver = RouteResolver::default();
/// let request = HttpRequest::new("GET", "/blog/show?id=3");
///
/// let route = resolver.resolve(&request).unwrap();
/// assert_eq!(route.path_name(), "/blog/show");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteResolver {
    parser: RouteParser,
}

impl RouteResolver {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            parser: RouteParser::new(options),
        }
    }

    pub fn parser(&self) -> &RouteParser {
        &self.parser
    }

    /// Resolve the path of a request-like value
    pub fn resolve<R: PathSource + ?Sized>(&self, request: &R) -> Result<Route> {
        self.resolve_path(RequestPath::from_request(request))
    }

    /// Resolve a path string, segment list or [`RequestPath`]
    pub fn resolve_path<'a>(&self, input: impl Into<RequestPath<'a>>) -> Result<Route> {
        let input = input.into();
        let outcome = self
            .parser
            .parse_request_path(&input)
            .and_then(RawRoute::into_route);
        log_outcome(&input, &outcome);
        outcome
    }

    /// Resolve to the names exactly as the parse options leave them
    pub fn resolve_raw<R: PathSource + ?Sized>(&self, request: &R) -> Result<RawRoute> {
        self.resolve_raw_path(RequestPath::from_request(request))
    }

    pub fn resolve_raw_path<'a>(&self, input: impl Into<RequestPath<'a>>) -> Result<RawRoute> {
        let input = input.into();
        let outcome = self.parser.parse_request_path(&input);
        log_outcome(&input, &outcome);
        outcome
    }
}

fn log_outcome<T: RouteName>(input: &RequestPath<'_>, outcome: &Result<T>) {
    match outcome {
        Ok(route) => debug!(
            target: "modroute::resolver",
            module = %route.module_name(),
            action = %route.action_name(),
            "Resolved route"
        ),
        Err(err) => debug!(
            target: "modroute::resolver",
            input = ?input,
            kind = %err.kind(),
            name = %err.name(),
            "Rejected route: {}",
            err
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpRequest;
    use crate::NameKind;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_resolve_request() {
        let resolver = RouteResolver::default();
        let request = HttpRequest::new("POST", "/module/action/hoge?key=value");

        let route = resolver.resolve(&request).unwrap();
        assert_eq!(route.path(), ("module", "action"));
    }

    #[test]
    fn test_resolve_http_crate_request() {
        let resolver = RouteResolver::default();
        let request = http::Request::builder().uri("/Shop/Cart").body(()).unwrap();

        let route = resolver.resolve(&request).unwrap();
        assert_eq!(route.path_name(), "/shop/cart");
    }

    #[test]
    fn test_resolve_rejection_passes_through() {
        let resolver = RouteResolver::default();

        let err = resolver.resolve_path("/module/アクション").unwrap_err();
        assert_eq!(err.kind(), NameKind::Action);
        assert_eq!(err.to_string(), "Invalid for the action name 'アクション'.");
    }

    #[test]
    fn test_resolver_uses_options() {
        let resolver = RouteResolver::new(ParseOptions::lenient());
        assert_eq!(resolver.parser().options(), ParseOptions::lenient());

        let raw = resolver.resolve_raw_path(["Mixed", "Case"]).unwrap();
        assert_eq!(raw.path_name(), "/Mixed/Case");

        let request = HttpRequest::new("GET", "/my mod/x");
        assert_eq!(resolver.resolve_raw(&request).unwrap().module_name(), "my mod");
    }

    #[test]
    fn test_lenient_resolve_returns_strict_route() {
        let resolver = RouteResolver::new(ParseOptions::lenient());

        let route = resolver.resolve_path(["Mixed", "Case"]).unwrap();
        assert_eq!(route.path_name(), "/mixed/case");

        let err = resolver.resolve_path(vec!["my mod", "x"]).unwrap_err();
        assert_eq!(err.kind(), NameKind::Module);
    }

    #[test]
    fn test_resolve_emits_debug_events() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let resolver = RouteResolver::default();
            assert!(resolver.resolve_path("/Blog/Show").is_ok());
            assert!(resolver.resolve_path("/blog/1st").is_err());
        });

        let output = logs.contents();
        assert!(output.contains("modroute::resolver"), "{}", output);
        assert!(output.contains("Resolved route"), "{}", output);
        assert!(output.contains("module=blog"), "{}", output);
        assert!(output.contains("action=show"), "{}", output);
        assert!(output.contains("Rejected route: Invalid for the action name '1st'."), "{}", output);
        assert!(output.contains("kind=action"), "{}", output);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
