//! # Console Proxy
//!
//! A development-time logging facility built around a leveled console proxy.
//!
//! ## Features
//!
//! - **Leveled Proxy**: [`LeveledSink`] wraps any console-like [`Sink`] and
//!   switches its methods on or off according to a [`LogLevel`]
//! - **Instrumentation**: [`Instrumentor`] wraps constructors, methods,
//!   accessors and property declarations so each use is logged
//! - **Thread Safe**: level and sink changes swap a whole dispatch table at once
//! - **Easy to Use**: drop-in console surface plus `log!`-style macros
//!
//! ```
//! use console_proxy::prelude::*;
//! use std::sync::Arc;
//!
//! let capture = CaptureSink::new();
//! let sink: Arc<dyn Sink> = Arc::new(capture.clone());
//! let console = logger(Some(sink), Some(LogLevel::Info));
//!
//! console.debug(&["not shown".into()]);
//! console.info(&["shown".into()]);
//! assert_eq!(capture.messages(), vec!["shown"]);
//! ```

pub mod core;
pub mod instrument;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global, logger, set_global, ArgList, Args, ConsoleMethod, DispatchMetrics, LevelPolicy,
        LeveledSink, LeveledSinkBuilder, LogLevel, LoggerError, MethodSet, Result, Sink,
    };
    pub use crate::instrument::{
        instrument, AccessorWrapper, ClassWrapper, Declaration, Decorated, DecorationKind,
        Descriptor, Instrumentor, MethodWrapper, PropertyDeclaration,
    };
    pub use crate::sinks::{CaptureSink, CapturedCall, ConsoleSink};
}

pub use crate::core::{
    global, logger, set_global, ArgList, Args, ConsoleMethod, DispatchMetrics, DynError,
    LevelPolicy, LeveledSink, LeveledSinkBuilder, LogLevel, LoggerError, MethodSet, Result, Sink,
};
pub use instrument::{
    instrument, AccessorWrapper, ClassWrapper, Declaration, Decorated, DecorationKind,
    Descriptor, Instrumentor, MethodWrapper, PropertyDeclaration,
};
pub use sinks::{CaptureSink, CapturedCall, ConsoleSink};
