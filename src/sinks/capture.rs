//! In-memory sink that records every call it receives

use crate::core::value::render_args;
use crate::core::{ConsoleMethod, MethodSet, Sink};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// One call that reached a [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturedCall {
    pub method: ConsoleMethod,
    pub args: Vec<Value>,
}

impl CapturedCall {
    /// Arguments rendered the way a console would print them.
    pub fn message(&self) -> String {
        render_args(&self.args)
    }
}

/// A sink that keeps every call in memory.
///
/// Clones share the same record, so a test can hand one clone to a proxy
/// and inspect another.
#[derive(Clone)]
pub struct CaptureSink {
    methods: MethodSet,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

impl CaptureSink {
    /// A sink implementing every recognized method.
    pub fn new() -> Self {
        Self::with_methods(MethodSet::all())
    }

    /// A sink implementing only `methods`.
    pub fn with_methods(methods: MethodSet) -> Self {
        Self {
            methods,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.calls.lock().iter().map(CapturedCall::message).collect()
    }

    /// Messages received through one particular method.
    pub fn messages_for(&self, method: ConsoleMethod) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.method == method)
            .map(CapturedCall::message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for CaptureSink {
    fn call(&self, method: ConsoleMethod, args: &[Value]) {
        self.calls.lock().push(CapturedCall {
            method,
            args: args.to_vec(),
        });
    }

    fn methods(&self) -> MethodSet {
        self.methods
    }

    fn name(&self) -> &str {
        "capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_record() {
        let sink = CaptureSink::new();
        let handle = sink.clone();

        sink.call(ConsoleMethod::Info, &[json!("a"), json!(1)]);
        sink.call(ConsoleMethod::Warn, &[json!("b")]);

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.messages(), vec!["a 1", "b"]);
        assert_eq!(handle.messages_for(ConsoleMethod::Warn), vec!["b"]);

        handle.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_restricted_methods() {
        let sink = CaptureSink::with_methods(MethodSet::from_slice(&[ConsoleMethod::Log]));
        assert!(sink.methods().contains(ConsoleMethod::Log));
        assert!(!sink.methods().contains(ConsoleMethod::Table));
    }
}
