//! Core proxy types and traits

pub mod error;
pub mod leveled;
pub mod log_level;
pub mod method;
pub mod metrics;
pub mod policy;
pub mod sink;
pub mod value;

pub use error::{DynError, LoggerError, Result};
pub use leveled::{global, logger, set_global, LeveledSink, LeveledSinkBuilder};
pub use log_level::LogLevel;
pub use method::{ConsoleMethod, MethodSet};
pub use metrics::DispatchMetrics;
pub use policy::LevelPolicy;
pub use sink::Sink;
pub use value::{ArgList, Args};
