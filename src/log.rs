//! Logging shim for registry events.
//!
//! With the `tracing` feature on, `debug!` and `warn!` are the `tracing`
//! macros. Without it they swallow their arguments and compile to nothing,
//! so the shape queries carry no logging cost by default.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        let name = "polygon-0$1";
        super::debug!(%name, count = 1, "cache hit");
        super::warn!(error = %"bad points", "rejected custom polygon");
    }
}
