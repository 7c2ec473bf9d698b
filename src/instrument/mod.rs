//! Call-site instrumentation
//!
//! An [`Instrumentor`] produces wrappers that log through a
//! [`LeveledSink`] and then hand control to the wrapped code:
//!
//! - [`ClassWrapper`] logs every construction,
//! - [`MethodWrapper`] logs arguments and return value of every call,
//! - [`AccessorWrapper`] logs every get and set,
//! - [`PropertyDeclaration`] logs once, when the property is declared.
//!
//! Pick the wrapper kind explicitly with [`Instrumentor::class`],
//! [`Instrumentor::method`], [`Instrumentor::accessor`] or
//! [`Instrumentor::property`]. [`Instrumentor::decorate`] accepts a
//! type-erased [`Declaration`] and picks the kind from its shape.
//!
//! # Example
//!
//! ```
//! use console_proxy::{CaptureSink, Instrumentor, LeveledSink, LogLevel};
//! use std::sync::Arc;
//!
//! let capture = CaptureSink::new();
//! let console = Arc::new(LeveledSink::with_sink(capture.clone(), LogLevel::Trace));
//! let log = Instrumentor::with_sink(LogLevel::Log, console);
//!
//! let add = log.method("add", |(a, b): (i32, i32)| a + b);
//! assert_eq!(add.call((2, 3)), 5);
//! assert_eq!(capture.messages(), vec!["@Log{method} add(2,3) => 5"]);
//! ```

pub mod accessor;
pub mod class;
pub mod method;
pub mod property;

pub use accessor::AccessorWrapper;
pub use class::ClassWrapper;
pub use method::MethodWrapper;
pub use property::PropertyDeclaration;

use crate::core::{global, ArgList, DynError, LeveledSink, LogLevel};
use serde_json::Value;
use std::sync::Arc;

/// Where a wrapper sends its line, and at which level.
#[derive(Clone)]
pub(crate) struct Emitter {
    level: LogLevel,
    sink: Option<Arc<LeveledSink>>,
}

impl Emitter {
    /// Without an explicit sink the process-wide one is resolved on every
    /// emission, so it may be installed after the wrappers are created.
    pub(crate) fn emit(&self, message: String) {
        match &self.sink {
            Some(sink) => sink.emit(self.level, message),
            None => global().emit(self.level, message),
        }
    }
}

/// Factory for instrumentation wrappers at a fixed level.
#[derive(Clone)]
pub struct Instrumentor {
    emitter: Emitter,
}

impl Instrumentor {
    /// Wrappers that log through the process-wide sink.
    pub fn new(level: LogLevel) -> Self {
        Self {
            emitter: Emitter { level, sink: None },
        }
    }

    /// Wrappers that log through `sink` instead of the process-wide one.
    pub fn with_sink(level: LogLevel, sink: Arc<LeveledSink>) -> Self {
        Self {
            emitter: Emitter {
                level,
                sink: Some(sink),
            },
        }
    }

    pub fn level(&self) -> LogLevel {
        self.emitter.level
    }

    /// Wrap a constructor. `constructor` receives the argument tuple.
    pub fn class<F>(&self, name: impl Into<String>, constructor: F) -> ClassWrapper<F> {
        ClassWrapper::new(name.into(), self.emitter.clone(), constructor)
    }

    /// Wrap a constructor, naming the class after the type it builds.
    pub fn class_of<T, A, F>(&self, constructor: F) -> ClassWrapper<F>
    where
        F: Fn(A) -> T,
    {
        self.class(short_type_name::<T>(), constructor)
    }

    /// Wrap a method or free function.
    pub fn method<F>(&self, name: impl Into<String>, func: F) -> MethodWrapper<F> {
        MethodWrapper::new(name.into(), self.emitter.clone(), func)
    }

    /// Wrap a getter/setter pair.
    pub fn accessor<G, S>(
        &self,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> AccessorWrapper<G, S> {
        AccessorWrapper::new(name.into(), self.emitter.clone(), getter, setter)
    }

    /// Declare a plain data property. Logs immediately, exactly once.
    pub fn property(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> PropertyDeclaration {
        PropertyDeclaration::declare(owner.into(), name.into(), &self.emitter)
    }

    /// Pick the wrapper kind from the shape of `declaration`.
    ///
    /// - a class declaration becomes a [`ClassWrapper`],
    /// - a member without descriptor becomes a [`PropertyDeclaration`],
    /// - a member whose descriptor has a `value` becomes a [`MethodWrapper`],
    /// - a member whose descriptor has both `get` and `set` becomes an
    ///   [`AccessorWrapper`].
    ///
    /// Anything else is left alone and nothing is logged.
    pub fn decorate<T>(&self, declaration: Declaration<T>) -> Decorated<T> {
        match declaration {
            Declaration::Class { name, constructor } => {
                Decorated::Class(self.class(name, constructor))
            }
            Declaration::Member {
                owner,
                key,
                descriptor: None,
            } => Decorated::Property(self.property(owner, key)),
            Declaration::Member {
                key,
                descriptor: Some(descriptor),
                ..
            } => match descriptor {
                Descriptor {
                    value: Some(value), ..
                } => Decorated::Method(self.method(key, value)),
                Descriptor {
                    get: Some(get),
                    set: Some(set),
                    ..
                } => Decorated::Accessor(self.accessor(key, get, set)),
                _ => Decorated::Ignored,
            },
            Declaration::Other => Decorated::Ignored,
        }
    }
}

impl Default for Instrumentor {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

/// Instrumentation factory over the process-wide sink.
pub fn instrument(level: LogLevel) -> Instrumentor {
    Instrumentor::new(level)
}

pub type DynConstructor<T> = Box<dyn Fn(ArgList) -> Result<T, DynError> + Send + Sync>;
pub type DynMethod<T> = Box<dyn Fn(&mut T, ArgList) -> Result<Value, DynError> + Send + Sync>;
pub type DynGetter<T> = Box<dyn Fn(&T) -> Result<Value, DynError> + Send + Sync>;
pub type DynSetter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), DynError> + Send + Sync>;

/// Member behavior handed to [`Instrumentor::decorate`].
pub struct Descriptor<T> {
    pub value: Option<DynMethod<T>>,
    pub get: Option<DynGetter<T>>,
    pub set: Option<DynSetter<T>>,
}

impl<T> Descriptor<T> {
    pub fn empty() -> Self {
        Self {
            value: None,
            get: None,
            set: None,
        }
    }

    pub fn method<F>(func: F) -> Self
    where
        F: Fn(&mut T, ArgList) -> Result<Value, DynError> + Send + Sync + 'static,
    {
        Self {
            value: Some(Box::new(func)),
            ..Self::empty()
        }
    }

    pub fn accessor<G, S>(get: G, set: S) -> Self
    where
        G: Fn(&T) -> Result<Value, DynError> + Send + Sync + 'static,
        S: Fn(&mut T, Value) -> Result<(), DynError> + Send + Sync + 'static,
    {
        Self {
            value: None,
            get: Some(Box::new(get)),
            set: Some(Box::new(set)),
        }
    }
}

/// A declaration site, as seen by [`Instrumentor::decorate`].
pub enum Declaration<T> {
    /// A class, identified by its constructor
    Class {
        name: String,
        constructor: DynConstructor<T>,
    },
    /// A member of `owner`; `descriptor` is absent for plain data properties
    Member {
        owner: String,
        key: String,
        descriptor: Option<Descriptor<T>>,
    },
    /// Any other declaration site
    Other,
}

impl<T> Declaration<T> {
    pub fn class<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(ArgList) -> Result<T, DynError> + Send + Sync + 'static,
    {
        Declaration::Class {
            name: name.into(),
            constructor: Box::new(constructor),
        }
    }

    pub fn member(
        owner: impl Into<String>,
        key: impl Into<String>,
        descriptor: Option<Descriptor<T>>,
    ) -> Self {
        Declaration::Member {
            owner: owner.into(),
            key: key.into(),
            descriptor,
        }
    }
}

/// Wrapper kind chosen by [`Instrumentor::decorate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    Class,
    Method,
    Accessor,
    Property,
}

pub enum Decorated<T> {
    Class(ClassWrapper<DynConstructor<T>>),
    Method(MethodWrapper<DynMethod<T>>),
    Accessor(AccessorWrapper<DynGetter<T>, DynSetter<T>>),
    Property(PropertyDeclaration),
    Ignored,
}

impl<T> Decorated<T> {
    pub fn kind(&self) -> Option<DecorationKind> {
        match self {
            Decorated::Class(_) => Some(DecorationKind::Class),
            Decorated::Method(_) => Some(DecorationKind::Method),
            Decorated::Accessor(_) => Some(DecorationKind::Accessor),
            Decorated::Property(_) => Some(DecorationKind::Property),
            Decorated::Ignored => None,
        }
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::CaptureSink;
    use serde_json::json;

    struct Counter {
        hits: i64,
    }

    fn setup(level: LogLevel) -> (Instrumentor, CaptureSink) {
        let capture = CaptureSink::new();
        let console = Arc::new(LeveledSink::with_sink(capture.clone(), LogLevel::Trace));
        (Instrumentor::with_sink(level, console), capture)
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Counter>(), "Counter");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }

    #[test]
    fn test_decorate_class() {
        let (log, capture) = setup(LogLevel::Log);
        let decorated = log.decorate(Declaration::class("Counter", |args: ArgList| {
            Ok(Counter {
                hits: args.first().and_then(Value::as_i64).unwrap_or(0),
            })
        }));
        assert_eq!(decorated.kind(), Some(DecorationKind::Class));

        if let Decorated::Class(class) = decorated {
            let counter = class.try_construct(ArgList::from(vec![json!(4)])).unwrap();
            assert_eq!(counter.hits, 4);
        }
        assert_eq!(
            capture.messages(),
            vec!["@Log{Class}: Creating instance of: Counter"]
        );
    }

    #[test]
    fn test_decorate_property() {
        let (log, capture) = setup(LogLevel::Info);
        let decorated = log.decorate(Declaration::<Counter>::member("Counter", "hits", None));

        assert_eq!(decorated.kind(), Some(DecorationKind::Property));
        assert_eq!(
            capture.messages_for(crate::core::ConsoleMethod::Info),
            vec!["@Log{property} declared property hits for class Counter"]
        );
    }

    #[test]
    fn test_decorate_method() {
        let (log, capture) = setup(LogLevel::Log);
        let descriptor = Descriptor::method(|counter: &mut Counter, args: ArgList| {
            counter.hits += args.first().and_then(Value::as_i64).unwrap_or(1);
            Ok(json!(counter.hits))
        });
        let decorated = log.decorate(Declaration::member("Counter", "bump", Some(descriptor)));
        assert_eq!(decorated.kind(), Some(DecorationKind::Method));

        let mut counter = Counter { hits: 1 };
        if let Decorated::Method(bump) = decorated {
            let result = bump
                .try_call_on(&mut counter, ArgList::from(vec![json!(2)]))
                .unwrap();
            assert_eq!(result, json!(3));
        }
        assert_eq!(counter.hits, 3);
        assert_eq!(capture.messages(), vec!["@Log{method} bump(2) => 3"]);
    }

    #[test]
    fn test_decorate_accessor() {
        let (log, capture) = setup(LogLevel::Log);
        let descriptor = Descriptor::accessor(
            |counter: &Counter| Ok(json!(counter.hits)),
            |counter: &mut Counter, value: Value| {
                counter.hits = value.as_i64().ok_or("hits must be an integer")?;
                Ok(())
            },
        );
        let decorated = log.decorate(Declaration::member("Counter", "hits", Some(descriptor)));
        assert_eq!(decorated.kind(), Some(DecorationKind::Accessor));

        let mut counter = Counter { hits: 0 };
        if let Decorated::Accessor(hits) = decorated {
            hits.set(&mut counter, json!(7)).unwrap();
            assert_eq!(hits.try_get(&counter).unwrap(), json!(7));
        }
        assert_eq!(
            capture.messages(),
            vec!["@Log{set}: Set hits => 7", "@Log{get}: Get hits => 7"]
        );
    }

    #[test]
    fn test_unrecognized_shapes_are_ignored() {
        let (log, capture) = setup(LogLevel::Log);

        let mut getter_only = Descriptor::accessor(
            |counter: &Counter| Ok(json!(counter.hits)),
            |_: &mut Counter, _: Value| Ok(()),
        );
        getter_only.set = None;
        let decorated = log.decorate(Declaration::member("Counter", "hits", Some(getter_only)));
        assert!(decorated.kind().is_none());

        let decorated = log.decorate(Declaration::<Counter>::member(
            "Counter",
            "hits",
            Some(Descriptor::empty()),
        ));
        assert!(decorated.kind().is_none());

        let decorated = log.decorate(Declaration::<Counter>::Other);
        assert!(decorated.kind().is_none());

        assert!(capture.is_empty());
    }

    #[test]
    fn test_level_none_never_emits() {
        let (log, capture) = setup(LogLevel::None);
        let double = log.method("double", |(x,): (i32,)| x * 2);
        assert_eq!(double.call((21,)), 42);
        log.property("Counter", "hits");
        assert!(capture.is_empty());
    }
}
