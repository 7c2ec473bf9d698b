//! Invocation logging

use super::Emitter;
use crate::core::value::{json_text, Args, UNDEFINED};
use serde::Serialize;

/// Wraps a function and logs `name(args) => result` after each call returns.
///
/// Arguments are passed as a tuple and rendered as comma separated JSON, so
/// `add.call((2, 3))` logs `add(2,3) => 5`. A non-tuple value is a single
/// argument (see [`Args`]). A unit result logs as `undefined`. Arguments are rendered before
/// the call, the result after it. Nothing is logged for a call that panics
/// or, with the `try_*` variants, returns an error.
pub struct MethodWrapper<F> {
    name: String,
    emitter: Emitter,
    func: F,
}

impl<F> MethodWrapper<F> {
    pub(crate) fn new(name: String, emitter: Emitter, func: F) -> Self {
        Self {
            name,
            emitter,
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn report<R: Serialize>(&self, args: &str, result: &R) {
        self.emitter.emit(format!(
            "@Log{{method}} {}({}) => {}",
            self.name,
            args,
            result_text(result)
        ));
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        A: Args,
        R: Serialize,
    {
        let rendered = args.render();
        let result = (self.func)(args);
        self.report(&rendered, &result);
        result
    }

    /// Call with a receiver, e.g. `&mut self` of the instance the method belongs to.
    pub fn call_on<S, A, R>(&self, this: S, args: A) -> R
    where
        F: Fn(S, A) -> R,
        A: Args,
        R: Serialize,
    {
        let rendered = args.render();
        let result = (self.func)(this, args);
        self.report(&rendered, &result);
        result
    }

    pub fn try_call<A, R, E>(&self, args: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: Args,
        R: Serialize,
    {
        let rendered = args.render();
        let result = (self.func)(args)?;
        self.report(&rendered, &result);
        Ok(result)
    }

    pub fn try_call_on<S, A, R, E>(&self, this: S, args: A) -> Result<R, E>
    where
        F: Fn(S, A) -> Result<R, E>,
        A: Args,
        R: Serialize,
    {
        let rendered = args.render();
        let result = (self.func)(this, args)?;
        self.report(&rendered, &result);
        Ok(result)
    }
}

/// JSON text of a return value; zero-sized values that serialize to `null`
/// (unit and unit structs) have no value to show.
fn result_text<R: Serialize>(result: &R) -> String {
    let text = json_text(result);
    if std::mem::size_of::<R>() == 0 && text == "null" {
        UNDEFINED.to_string()
    } else {
        text
    }
}
