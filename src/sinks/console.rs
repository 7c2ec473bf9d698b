//! Standard console sink implementation

use crate::core::value::{is_truthy, plain_text, render_args};
use crate::core::{ConsoleMethod, MethodSet, Result, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

const DEFAULT_LABEL: &str = "default";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

struct ConsoleState {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    indent: usize,
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
}

/// The platform console: stdout for regular output, stderr for warnings and errors.
///
/// Keeps the per-label state a console needs (`count` counters, `time`
/// timers and `group` indentation). `profile`, `profileEnd`, `select` and
/// `msIsIndependentlyComposed` are not implemented, so a proxy never
/// activates them for this sink.
pub struct ConsoleSink {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    timestamps: bool,
    state: Mutex<ConsoleState>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamps: false,
            state: Mutex::new(ConsoleState {
                out: Box::new(io::stdout()),
                err: Box::new(io::stderr()),
                indent: 0,
                counters: HashMap::new(),
                timers: HashMap::new(),
            }),
        }
    }

    /// Prefix every line with the local wall-clock time
    ///
    /// # Examples
    ///
    /// ```
    /// use console_proxy::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_timestamps(true);
    /// ```
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Redirect output away from stdout/stderr
    #[must_use]
    pub fn with_writers(
        self,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        {
            let mut state = self.state.lock();
            state.out = Box::new(out);
            state.err = Box::new(err);
        }
        self
    }

    fn implemented() -> MethodSet {
        let mut set = MethodSet::all();
        for method in [
            ConsoleMethod::Profile,
            ConsoleMethod::ProfileEnd,
            ConsoleMethod::Select,
            ConsoleMethod::MsIsIndependentlyComposed,
        ] {
            set.remove(method);
        }
        set
    }

    fn label(args: &[Value]) -> String {
        args.first()
            .map(plain_text)
            .unwrap_or_else(|| DEFAULT_LABEL.to_string())
    }

    fn pretty(args: &[Value]) -> String {
        match args.first() {
            Some(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| plain_text(value))
            }
            None => String::new(),
        }
    }

    #[cfg(feature = "console")]
    fn paint(&self, method: ConsoleMethod, text: String) -> String {
        use colored::Color::*;
        if !self.use_colors {
            return text;
        }
        let color = match method {
            ConsoleMethod::Trace => BrightBlack,
            ConsoleMethod::Debug => Blue,
            ConsoleMethod::Info => Green,
            ConsoleMethod::Warn => Yellow,
            ConsoleMethod::Error | ConsoleMethod::Exception | ConsoleMethod::Assert => Red,
            _ => return text,
        };
        text.color(color).to_string()
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _method: ConsoleMethod, text: String) -> String {
        text
    }

    fn write_line(
        &self,
        state: &mut ConsoleState,
        stream: Stream,
        method: ConsoleMethod,
        text: &str,
    ) -> Result<()> {
        let pad = "  ".repeat(state.indent);
        let stamp = if self.timestamps {
            format!("[{}] ", chrono::Local::now().format("%H:%M:%S%.3f"))
        } else {
            String::new()
        };
        let body = text
            .lines()
            .map(|line| format!("{}{}{}", stamp, pad, line))
            .collect::<Vec<_>>()
            .join("\n");
        let body = if body.is_empty() {
            format!("{}{}", stamp, pad)
        } else {
            body
        };
        let output = self.paint(method, body);
        let writer = match stream {
            Stream::Out => &mut state.out,
            Stream::Err => &mut state.err,
        };
        writeln!(writer, "{}", output)?;
        Ok(())
    }

    fn dispatch(
        &self,
        state: &mut ConsoleState,
        method: ConsoleMethod,
        args: &[Value],
    ) -> Result<()> {
        use ConsoleMethod::*;
        match method {
            Log | Info | Debug => self.write_line(state, Stream::Out, method, &render_args(args)),
            Warn | Error | Exception => {
                self.write_line(state, Stream::Err, method, &render_args(args))
            }
            Trace => {
                let text = format!("Trace: {}", render_args(args));
                self.write_line(state, Stream::Err, method, text.trim_end())
            }
            Assert => {
                let passed = args.first().map(is_truthy).unwrap_or(false);
                if passed {
                    return Ok(());
                }
                let rest = args.get(1..).map(render_args).unwrap_or_default();
                let text = if rest.is_empty() {
                    "Assertion failed".to_string()
                } else {
                    format!("Assertion failed: {}", rest)
                };
                self.write_line(state, Stream::Err, method, &text)
            }
            Count => {
                let label = Self::label(args);
                let count = state.counters.entry(label.clone()).or_insert(0);
                *count += 1;
                let text = format!("{}: {}", label, count);
                self.write_line(state, Stream::Out, method, &text)
            }
            Group | GroupCollapsed => {
                if !args.is_empty() {
                    self.write_line(state, Stream::Out, method, &render_args(args))?;
                }
                state.indent += 1;
                Ok(())
            }
            GroupEnd => {
                state.indent = state.indent.saturating_sub(1);
                Ok(())
            }
            Time => {
                let label = Self::label(args);
                if state.timers.contains_key(&label) {
                    let text = format!("Timer '{}' already exists", label);
                    return self.write_line(state, Stream::Err, Warn, &text);
                }
                state.timers.insert(label, Instant::now());
                Ok(())
            }
            TimeEnd => {
                let label = Self::label(args);
                match state.timers.remove(&label) {
                    Some(started) => {
                        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
                        let text = format!("{}: {:.3}ms", label, elapsed);
                        self.write_line(state, Stream::Out, method, &text)
                    }
                    None => {
                        let text = format!("Timer '{}' does not exist", label);
                        self.write_line(state, Stream::Err, Warn, &text)
                    }
                }
            }
            Clear => {
                state.indent = 0;
                write!(state.out, "{}", CLEAR_SCREEN)?;
                Ok(())
            }
            Dir | Dirxml | Table => self.write_line(state, Stream::Out, method, &Self::pretty(args)),
            Profile | ProfileEnd | Select | MsIsIndependentlyComposed => Ok(()),
        }
    }

    /// Flush both stdout and stderr writers
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.out.flush()?;
        state.err.flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn call(&self, method: ConsoleMethod, args: &[Value]) {
        let mut state = self.state.lock();
        if let Err(e) = self.dispatch(&mut state, method, args) {
            eprintln!("[LOGGER ERROR] Console sink failed on {}: {}", method, e);
        }
    }

    fn methods(&self) -> MethodSet {
        Self::implemented()
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    fn sink() -> (ConsoleSink, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let sink = ConsoleSink::with_colors(false).with_writers(out.clone(), err.clone());
        (sink, out, err)
    }

    #[test]
    fn test_streams() {
        let (sink, out, err) = sink();
        sink.call(ConsoleMethod::Log, &[json!("hello"), json!(42)]);
        sink.call(ConsoleMethod::Error, &[json!("boom")]);

        assert_eq!(out.text(), "hello 42\n");
        assert_eq!(err.text(), "boom\n");
    }

    #[test]
    fn test_assert_only_prints_on_failure() {
        let (sink, _out, err) = sink();
        sink.call(ConsoleMethod::Assert, &[json!(true), json!("fine")]);
        sink.call(ConsoleMethod::Assert, &[json!(0), json!("x was"), json!(0)]);

        assert_eq!(err.text(), "Assertion failed: x was 0\n");
    }

    #[test]
    fn test_count_per_label() {
        let (sink, out, _err) = sink();
        sink.call(ConsoleMethod::Count, &[]);
        sink.call(ConsoleMethod::Count, &[json!("hits")]);
        sink.call(ConsoleMethod::Count, &[]);

        assert_eq!(out.text(), "default: 1\nhits: 1\ndefault: 2\n");
    }

    #[test]
    fn test_group_indentation() {
        let (sink, out, _err) = sink();
        sink.call(ConsoleMethod::Group, &[json!("outer")]);
        sink.call(ConsoleMethod::Log, &[json!("inside")]);
        sink.call(ConsoleMethod::GroupEnd, &[]);
        sink.call(ConsoleMethod::GroupEnd, &[]);
        sink.call(ConsoleMethod::Log, &[json!("after")]);

        assert_eq!(out.text(), "outer\n  inside\nafter\n");
    }

    #[test]
    fn test_timers() {
        let (sink, out, err) = sink();
        sink.call(ConsoleMethod::Time, &[json!("load")]);
        sink.call(ConsoleMethod::TimeEnd, &[json!("load")]);
        sink.call(ConsoleMethod::TimeEnd, &[json!("load")]);

        assert!(out.text().starts_with("load: "));
        assert!(out.text().trim_end().ends_with("ms"));
        assert_eq!(err.text(), "Timer 'load' does not exist\n");
    }

    #[test]
    fn test_unimplemented_methods_are_not_advertised() {
        let (sink, _out, _err) = sink();
        let methods = sink.methods();
        assert!(!methods.contains(ConsoleMethod::Profile));
        assert!(!methods.contains(ConsoleMethod::Select));
        assert!(methods.contains(ConsoleMethod::Table));
        assert_eq!(methods.len(), ConsoleMethod::ALL.len() - 4);
    }

    #[test]
    fn test_dir_prints_pretty_json() {
        let (sink, out, _err) = sink();
        sink.call(ConsoleMethod::Dir, &[json!({"a": 1})]);
        assert_eq!(out.text(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let out = SharedBuffer::default();
        let sink = ConsoleSink::with_colors(false).with_writers(out.clone(), BrokenPipe);

        let mut state = sink.state.lock();
        let err = sink
            .dispatch(&mut state, ConsoleMethod::Error, &[json!("boom")])
            .unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(sink.dispatch(&mut state, ConsoleMethod::Log, &[json!("ok")]).is_ok());
        drop(state);

        // reported, not propagated
        sink.call(ConsoleMethod::Warn, &[json!("lost")]);
        assert_eq!(out.text(), "ok\n");
        assert!(matches!(sink.flush(), Err(LoggerError::IoError(_))));
    }
}
