//! Conversions between Rust values and console arguments

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

/// Text used for a value that has no JSON form.
pub const UNDEFINED: &str = "undefined";

/// Convert anything serializable into a console argument.
///
/// Values serde cannot represent become the string `undefined`, the same
/// text [`json_text`] and [`display_text`] produce for them.
pub fn to_arg<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(UNDEFINED.to_string()))
}

/// JSON text of a value, or `undefined` when it cannot be serialized.
pub fn json_text<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| UNDEFINED.to_string())
}

/// An argument list handed to an instrumented call.
///
/// Tuples are lists of arguments: `(2, 3)` renders as `2,3`, `("a",)` as
/// `"a"` and `()` as nothing. Any other value is a single argument and
/// renders as one JSON text, so `vec![1, 2]` gives `[1,2]` and `None`
/// gives `null`. Wrap a custom type in a 1-tuple to pass it alone.
pub trait Args {
    /// Comma separated JSON text of every argument.
    fn render(&self) -> String;
}

macro_rules! tuple_args {
    ($($name:ident),*) => {
        impl<$($name: Serialize),*> Args for ($($name,)*) {
            #[allow(non_snake_case)]
            fn render(&self) -> String {
                let ($($name,)*) = self;
                let parts: Vec<String> = vec![$(json_text($name)),*];
                parts.join(",")
            }
        }
    };
}

tuple_args!();
tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, H);

macro_rules! single_args {
    ($($ty:ty),*) => {
        $(
            impl Args for $ty {
                fn render(&self) -> String {
                    json_text(self)
                }
            }
        )*
    };
}

single_args!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, Value
);

impl<T: Serialize> Args for Option<T> {
    fn render(&self) -> String {
        json_text(self)
    }
}

impl<T: Serialize> Args for Vec<T> {
    fn render(&self) -> String {
        json_text(self)
    }
}

impl<T: Serialize> Args for [T] {
    fn render(&self) -> String {
        json_text(self)
    }
}

impl<T: Serialize, const N: usize> Args for [T; N] {
    fn render(&self) -> String {
        json_text(&self[..])
    }
}

impl<K: Serialize, V: Serialize, S> Args for HashMap<K, V, S> {
    fn render(&self) -> String {
        json_text(self)
    }
}

impl<K: Serialize, V: Serialize> Args for BTreeMap<K, V> {
    fn render(&self) -> String {
        json_text(self)
    }
}

impl<T: Args + ?Sized> Args for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Type-erased argument list: every element is one argument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgList(pub Vec<Value>);

impl Deref for ArgList {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for ArgList {
    fn from(values: Vec<Value>) -> Self {
        ArgList(values)
    }
}

impl FromIterator<Value> for ArgList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ArgList(iter.into_iter().collect())
    }
}

impl Args for ArgList {
    fn render(&self) -> String {
        self.0
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Text form of a single value: strings as-is, everything else as JSON.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Plain text of anything serializable.
pub fn display_text<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(v) => plain_text(&v),
        Err(_) => UNDEFINED.to_string(),
    }
}

/// Join console arguments with a single space, the way a console prints them.
pub fn render_args(args: &[Value]) -> String {
    args.iter().map(plain_text).collect::<Vec<_>>().join(" ")
}

/// Truthiness of a console argument.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
