//! Property declaration logging

use super::Emitter;

/// Record of a declared data property. Declaring logs once; there is nothing
/// to intercept afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    owner: String,
    name: String,
}

impl PropertyDeclaration {
    pub(crate) fn declare(owner: String, name: String, emitter: &Emitter) -> Self {
        emitter.emit(format!(
            "@Log{{property}} declared property {} for class {}",
            name, owner
        ));
        Self { owner, name }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{LeveledSink, LogLevel};
    use crate::instrument::Instrumentor;
    use crate::sinks::CaptureSink;
    use std::sync::Arc;

    #[test]
    fn test_declaration_logs_once() {
        let capture = CaptureSink::new();
        let console = Arc::new(LeveledSink::with_sink(capture.clone(), LogLevel::Log));
        let log = Instrumentor::with_sink(LogLevel::Warn, console);

        let declared = log.property("Point", "x");
        let copy = declared.clone();

        assert_eq!(copy.owner(), "Point");
        assert_eq!(copy.name(), "x");
        assert_eq!(
            capture.messages(),
            vec!["@Log{property} declared property x for class Point"]
        );
    }
}
