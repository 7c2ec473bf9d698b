//! Leveled console proxy
//!
//! [`LeveledSink`] wraps any [`Sink`] and exposes the full console surface.
//! Each recognized method either forwards straight to the wrapped sink or is
//! a no-op, depending on the current [`LogLevel`]. The dispatch table is kept
//! as one immutable snapshot that is rebuilt from scratch and swapped in
//! whenever the level or the sink changes, so callers never observe a
//! half-applied configuration.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    method::{ConsoleMethod, MethodSet},
    metrics::DispatchMetrics,
    policy::LevelPolicy,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Immutable dispatch state: which sink, at which level, with which methods live.
struct Snapshot {
    sink: Arc<dyn Sink>,
    level: LogLevel,
    available: MethodSet,
    active: MethodSet,
}

impl Snapshot {
    fn build(sink: Arc<dyn Sink>, level: LogLevel) -> Self {
        let available = sink.methods();
        Self {
            active: LevelPolicy::active(level, available),
            available,
            sink,
            level,
        }
    }
}

pub struct LeveledSink {
    state: RwLock<Arc<Snapshot>>,
    metrics: Arc<DispatchMetrics>,
}

macro_rules! console_methods {
    ($($(#[$meta:meta])* $fn_name:ident => $method:ident),+ $(,)?) => {
        impl LeveledSink {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $fn_name(&self, args: &[Value]) {
                    self.call(ConsoleMethod::$method, args)
                }
            )+
        }
    };
}

impl LeveledSink {
    /// Proxy for the standard console at the default level (`Log`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink::new(), LogLevel::default())
    }

    #[must_use]
    pub fn with_sink<S: Sink + 'static>(sink: S, level: LogLevel) -> Self {
        Self::from_shared(Arc::new(sink), level)
    }

    /// Proxy a sink that is shared with other owners.
    #[must_use]
    pub fn from_shared(sink: Arc<dyn Sink>, level: LogLevel) -> Self {
        let metrics = Arc::new(DispatchMetrics::new());
        metrics.record_rebuild();
        Self {
            state: RwLock::new(Arc::new(Snapshot::build(sink, level))),
            metrics,
        }
    }

    #[must_use]
    pub fn builder() -> LeveledSinkBuilder {
        LeveledSinkBuilder::new()
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.read())
    }

    /// Rebuild the whole dispatch table and swap it in one write.
    fn rebuild(&self, sink: Option<Arc<dyn Sink>>, level: Option<LogLevel>) {
        let mut state = self.state.write();
        let sink = sink.unwrap_or_else(|| Arc::clone(&state.sink));
        let level = level.unwrap_or(state.level);
        *state = Arc::new(Snapshot::build(sink, level));
        self.metrics.record_rebuild();
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.rebuild(None, Some(level));
    }

    /// Set the level from its name, rejecting unknown names.
    pub fn set_level_str(&self, level: &str) -> Result<()> {
        let level: LogLevel = level.parse()?;
        self.set_level(level);
        Ok(())
    }

    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.state.read().sink)
    }

    pub fn set_sink<S: Sink + 'static>(&self, sink: S) {
        self.set_shared_sink(Arc::new(sink));
    }

    pub fn set_shared_sink(&self, sink: Arc<dyn Sink>) {
        self.rebuild(Some(sink), None);
    }

    /// Methods currently forwarding to the sink.
    pub fn active_methods(&self) -> MethodSet {
        self.state.read().active
    }

    #[inline]
    pub fn is_active(&self, method: ConsoleMethod) -> bool {
        self.state.read().active.contains(method)
    }

    /// Invoke a console method. Inactive methods do nothing.
    ///
    /// The state lock is released before the sink runs, so a sink may call
    /// back into this proxy.
    pub fn call(&self, method: ConsoleMethod, args: &[Value]) {
        let snapshot = self.snapshot();
        if snapshot.active.contains(method) {
            self.metrics.record_forwarded();
            snapshot.sink.call(method, args);
        } else {
            self.metrics.record_suppressed();
        }
    }

    /// Emit one message through the method that corresponds to `level`.
    ///
    /// `LogLevel::None` has no method, so nothing is emitted.
    pub fn emit(&self, level: LogLevel, message: impl Into<String>) {
        if let Some(method) = level.method() {
            self.call(method, &[Value::String(message.into())]);
        }
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }
}

console_methods! {
    /// `console.assert`: the first argument is the condition
    assert => Assert,
    clear => Clear,
    count => Count,
    debug => Debug,
    dir => Dir,
    dirxml => Dirxml,
    error => Error,
    exception => Exception,
    group => Group,
    group_collapsed => GroupCollapsed,
    group_end => GroupEnd,
    info => Info,
    log => Log,
    profile => Profile,
    profile_end => ProfileEnd,
    select => Select,
    table => Table,
    time => Time,
    time_end => TimeEnd,
    trace => Trace,
    warn => Warn,
    ms_is_independently_composed => MsIsIndependentlyComposed,
}

impl Default for LeveledSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LeveledSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("LeveledSink")
            .field("sink", &snapshot.sink.name())
            .field("level", &snapshot.level)
            .field("active", &snapshot.active)
            .finish()
    }
}

/// A leveled sink can stand in anywhere a plain sink is expected.
impl Sink for LeveledSink {
    fn call(&self, method: ConsoleMethod, args: &[Value]) {
        LeveledSink::call(self, method, args)
    }

    fn methods(&self) -> MethodSet {
        self.state.read().available
    }

    fn name(&self) -> &str {
        "leveled"
    }
}

/// Builder for [`LeveledSink`]
///
/// # Example
///
/// ```
/// use console_proxy::{LeveledSink, LogLevel, CaptureSink};
///
/// let capture = CaptureSink::new();
/// let console = LeveledSink::builder()
///     .level(LogLevel::Warn)
///     .sink(capture.clone())
///     .build();
///
/// console.log(&["hidden".into()]);
/// console.warn(&["shown".into()]);
/// assert_eq!(capture.messages(), vec!["shown"]);
/// ```
pub struct LeveledSinkBuilder {
    level: LogLevel,
    sink: Option<Arc<dyn Sink>>,
}

impl LeveledSinkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: LogLevel::default(),
            sink: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the level from its name.
    pub fn level_str(self, level: &str) -> Result<Self> {
        Ok(self.level(level.parse()?))
    }

    #[must_use]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> LeveledSink {
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(ConsoleSink::new()) as Arc<dyn Sink>);
        LeveledSink::from_shared(sink, self.level)
    }
}

impl Default for LeveledSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a console proxy, falling back to the standard console and `Log`.
pub fn logger(sink: Option<Arc<dyn Sink>>, level: Option<LogLevel>) -> LeveledSink {
    let builder = LeveledSink::builder().level(level.unwrap_or_default());
    match sink {
        Some(sink) => builder.shared_sink(sink).build(),
        None => builder.build(),
    }
}

static GLOBAL: OnceLock<Arc<LeveledSink>> = OnceLock::new();

/// The process-wide proxy used by instrumentation wrappers by default.
///
/// Created on first use over the standard console at `LogLevel::Log`.
pub fn global() -> Arc<LeveledSink> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(LeveledSink::new())))
}

/// Install the process-wide proxy. Fails once it has been initialized.
pub fn set_global(sink: LeveledSink) -> Result<()> {
    GLOBAL
        .set(Arc::new(sink))
        .map_err(|_| LoggerError::config("global sink", "already initialized"))
}
