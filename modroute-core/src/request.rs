// Request types and the path capability the parser reads from

/// Anything that can hand over the path of an incoming request.
///
/// This is the only thing route parsing needs from a request. The returned
/// text may still carry a `?query` suffix; it is discarded during parsing.
pub trait PathSource {
    fn request_path(&self) -> &str;
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn request_path(&self) -> &str {
        (**self).request_path()
    }
}

impl<B> PathSource for http::Request<B> {
    fn request_path(&self) -> &str {
        self.uri().path()
    }
}

impl PathSource for http::Uri {
    fn request_path(&self) -> &str {
        self.path()
    }
}

/// Minimal HTTP request wrapper
///
/// `path` is the raw request target, so it may include a query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl PathSource for HttpRequest {
    fn request_path(&self) -> &str {
        &self.path
    }
}
