//! Console call macros.
//!
//! Every argument is converted to a JSON value and passed positionally,
//! the way a console method receives its arguments.
//!
//! # Examples
//!
//! ```
//! use console_proxy::prelude::*;
//! use console_proxy::{info, log};
//!
//! let capture = CaptureSink::new();
//! let console = LeveledSink::with_sink(capture.clone(), LogLevel::Info);
//!
//! // Plain message
//! log!(console, "Server started");
//!
//! // Several arguments of any serializable type
//! let port = 8080;
//! info!(console, "listening on", port);
//!
//! assert_eq!(capture.messages(), vec!["Server started", "listening on 8080"]);
//! ```

/// Call any console method with positional arguments.
///
/// # Examples
///
/// ```
/// # use console_proxy::prelude::*;
/// # let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log);
/// use console_proxy::console;
/// console!(console, ConsoleMethod::Count, "requests");
/// console!(console, ConsoleMethod::Table, vec![1, 2, 3]);
/// console!(console, ConsoleMethod::GroupEnd);
/// ```
#[macro_export]
macro_rules! console {
    ($sink:expr, $method:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::core::Sink as _;
        $sink.call($method, &[$($crate::core::value::to_arg(&$arg)),*])
    }};
}

/// Call `trace` on a sink.
///
/// # Examples
///
/// ```
/// # use console_proxy::prelude::*;
/// # let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Trace);
/// use console_proxy::trace;
/// trace!(console, "entering calculate()");
/// ```
#[macro_export]
macro_rules! trace {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Trace $(, $arg)*)
    };
}

/// Call `debug` on a sink.
#[macro_export]
macro_rules! debug {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Debug $(, $arg)*)
    };
}

/// Call `info` on a sink.
#[macro_export]
macro_rules! info {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Info $(, $arg)*)
    };
}

/// Call `log` on a sink.
///
/// # Examples
///
/// ```
/// # use console_proxy::prelude::*;
/// # let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log);
/// use console_proxy::log;
/// log!(console, "items processed:", 100);
/// ```
#[macro_export]
macro_rules! log {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Log $(, $arg)*)
    };
}

/// Call `warn` on a sink.
#[macro_export]
macro_rules! warn {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Warn $(, $arg)*)
    };
}

/// Call `error` on a sink.
///
/// # Examples
///
/// ```
/// # use console_proxy::prelude::*;
/// # let console = LeveledSink::with_sink(CaptureSink::new(), LogLevel::Error);
/// use console_proxy::error;
/// error!(console, "request failed with status", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console!($sink, $crate::ConsoleMethod::Error $(, $arg)*)
    };
}
