// modroute - module/action routing for Rust
//
// Turns a request path such as `/blog/show?id=3` into a validated
// `(module, action)` pair that a dispatcher can map onto its handlers.

// Re-export core functionality
pub use modroute_core::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use modroute_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        HttpRequest,
        NameKind,
        ParseOptions,
        PathSource,
        RawRoute,
        RequestPath,
        Route,
        RouteName,
        RouteParseError,
        RouteParser,
        RouteResolver,
    };

    #[cfg(feature = "config")]
    pub use crate::modroute_config::RouterConfig;
}
