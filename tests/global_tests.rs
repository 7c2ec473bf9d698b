//! Tests for the process-wide proxy
//!
//! Kept in their own test binary: the global can be installed only once
//! per process.

use console_proxy::prelude::*;

#[test]
fn test_instrumentation_uses_installed_global() {
    let capture = CaptureSink::new();

    // wrappers created before installation resolve the global lazily
    let log = instrument(LogLevel::Log);
    let add = log.method("add", |(a, b): (i32, i32)| a + b);

    set_global(LeveledSink::with_sink(capture.clone(), LogLevel::Log)).unwrap();
    let err = set_global(LeveledSink::with_sink(CaptureSink::new(), LogLevel::Log)).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    assert_eq!(add.call((2, 3)), 5);
    assert_eq!(capture.messages(), vec!["@Log{method} add(2,3) => 5"]);

    // reconfiguring the global affects every wrapper
    global().set_level(LogLevel::Warn);
    add.call((1, 1));
    assert_eq!(capture.len(), 1);

    global().set_level(LogLevel::Log);
    Instrumentor::default().property("Point", "x");
    assert_eq!(capture.len(), 2);
}
