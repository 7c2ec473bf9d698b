//! Sink trait for console output destinations

use super::method::{ConsoleMethod, MethodSet};
use serde_json::Value;
use std::sync::Arc;

/// A host console: anything that implements some of the [`ConsoleMethod`]s.
///
/// `methods` advertises the capability set. The proxy only ever calls
/// methods contained in it.
pub trait Sink: Send + Sync {
    fn call(&self, method: ConsoleMethod, args: &[Value]);

    fn methods(&self) -> MethodSet {
        MethodSet::all()
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn call(&self, method: ConsoleMethod, args: &[Value]) {
        (**self).call(method, args)
    }

    fn methods(&self) -> MethodSet {
        (**self).methods()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn call(&self, method: ConsoleMethod, args: &[Value]) {
        (**self).call(method, args)
    }

    fn methods(&self) -> MethodSet {
        (**self).methods()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
