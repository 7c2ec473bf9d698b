//! Getter/setter logging

use super::Emitter;
use crate::core::value::display_text;
use serde::Serialize;

/// Wraps a getter/setter pair.
///
/// A get is logged after the getter returns; a set is logged before the
/// setter runs. Values render as plain text (strings unquoted).
pub struct AccessorWrapper<G, S> {
    name: String,
    emitter: Emitter,
    getter: G,
    setter: S,
}

impl<G, S> AccessorWrapper<G, S> {
    pub(crate) fn new(name: String, emitter: Emitter, getter: G, setter: S) -> Self {
        Self {
            name,
            emitter,
            getter,
            setter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn report_get<V: Serialize + ?Sized>(&self, value: &V) {
        self.emitter.emit(format!(
            "@Log{{get}}: Get {} => {}",
            self.name,
            display_text(value)
        ));
    }

    pub fn get<T, V>(&self, this: T) -> V
    where
        G: Fn(T) -> V,
        V: Serialize,
    {
        let value = (self.getter)(this);
        self.report_get(&value);
        value
    }

    /// Like [`get`](Self::get) for getters that can fail. Failures are
    /// returned as-is and not logged.
    pub fn try_get<T, V, E>(&self, this: T) -> Result<V, E>
    where
        G: Fn(T) -> Result<V, E>,
        V: Serialize,
    {
        let value = (self.getter)(this)?;
        self.report_get(&value);
        Ok(value)
    }

    /// Log the new value, then run the setter and return what it returns.
    pub fn set<T, V, R>(&self, this: T, value: V) -> R
    where
        S: Fn(T, V) -> R,
        V: Serialize,
    {
        self.emitter.emit(format!(
            "@Log{{set}}: Set {} => {}",
            self.name,
            display_text(&value)
        ));
        (self.setter)(this, value)
    }
}
