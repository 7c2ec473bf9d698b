//! Construction logging

use super::Emitter;

/// Wraps a constructor and logs every instantiation before it happens.
///
/// The value returned is whatever the constructor returns, untouched.
pub struct ClassWrapper<F> {
    name: String,
    emitter: Emitter,
    constructor: F,
}

impl<F> ClassWrapper<F> {
    pub(crate) fn new(name: String, emitter: Emitter, constructor: F) -> Self {
        Self {
            name,
            emitter,
            constructor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn announce(&self) {
        self.emitter
            .emit(format!("@Log{{Class}}: Creating instance of: {}", self.name));
    }

    pub fn construct<A, T>(&self, args: A) -> T
    where
        F: Fn(A) -> T,
    {
        self.announce();
        (self.constructor)(args)
    }

    /// Like [`construct`](Self::construct) for constructors that can fail.
    /// The error is returned as-is.
    pub fn try_construct<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
    {
        self.announce();
        (self.constructor)(args)
    }
}
