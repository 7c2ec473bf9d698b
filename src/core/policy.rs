//! Severity-to-suppression policy

use super::log_level::LogLevel;
use super::method::{ConsoleMethod, MethodSet};

/// Maps a [`LogLevel`] to the console methods that are switched off at it.
///
/// `Error` suppresses exactly what `Warn` does: `warn` stays live at the
/// error threshold.
pub struct LevelPolicy;

impl LevelPolicy {
    /// Methods that must be replaced with a no-op at `level`.
    pub fn suppressed(level: LogLevel) -> MethodSet {
        use ConsoleMethod::*;
        match level {
            LogLevel::Trace => MethodSet::empty(),
            LogLevel::Debug => MethodSet::from_slice(&[Trace]),
            LogLevel::Info => MethodSet::from_slice(&[Trace, Debug]),
            LogLevel::Log => MethodSet::from_slice(&[Trace, Debug, Info]),
            LogLevel::Warn | LogLevel::Error => MethodSet::from_slice(&[Trace, Debug, Info, Log]),
            LogLevel::None => MethodSet::all(),
        }
    }

    /// Methods left active at `level` out of what the sink `available` offers.
    pub fn active(level: LogLevel, available: MethodSet) -> MethodSet {
        available.difference(Self::suppressed(level))
    }

    #[inline]
    pub fn is_suppressed(level: LogLevel, method: ConsoleMethod) -> bool {
        Self::suppressed(level).contains(method)
    }
}
