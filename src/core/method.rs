//! Recognized console method names and sets of them

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A diagnostic method a host sink may implement.
///
/// This is the closed set the proxy knows how to gate. A sink is free to
/// implement any subset of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleMethod {
    Assert,
    Clear,
    Count,
    Debug,
    Dir,
    Dirxml,
    Error,
    Exception,
    Group,
    GroupCollapsed,
    GroupEnd,
    Info,
    Log,
    Profile,
    ProfileEnd,
    Select,
    Table,
    Time,
    TimeEnd,
    Trace,
    Warn,
    /// Non-standard name kept for compatibility with older hosts.
    MsIsIndependentlyComposed,
}

impl ConsoleMethod {
    pub const ALL: [ConsoleMethod; 22] = [
        ConsoleMethod::Assert,
        ConsoleMethod::Clear,
        ConsoleMethod::Count,
        ConsoleMethod::Debug,
        ConsoleMethod::Dir,
        ConsoleMethod::Dirxml,
        ConsoleMethod::Error,
        ConsoleMethod::Exception,
        ConsoleMethod::Group,
        ConsoleMethod::GroupCollapsed,
        ConsoleMethod::GroupEnd,
        ConsoleMethod::Info,
        ConsoleMethod::Log,
        ConsoleMethod::Profile,
        ConsoleMethod::ProfileEnd,
        ConsoleMethod::Select,
        ConsoleMethod::Table,
        ConsoleMethod::Time,
        ConsoleMethod::TimeEnd,
        ConsoleMethod::Trace,
        ConsoleMethod::Warn,
        ConsoleMethod::MsIsIndependentlyComposed,
    ];

    /// Canonical (camelCase) name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Assert => "assert",
            ConsoleMethod::Clear => "clear",
            ConsoleMethod::Count => "count",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Dir => "dir",
            ConsoleMethod::Dirxml => "dirxml",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Exception => "exception",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupCollapsed => "groupCollapsed",
            ConsoleMethod::GroupEnd => "groupEnd",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Log => "log",
            ConsoleMethod::Profile => "profile",
            ConsoleMethod::ProfileEnd => "profileEnd",
            ConsoleMethod::Select => "select",
            ConsoleMethod::Table => "table",
            ConsoleMethod::Time => "time",
            ConsoleMethod::TimeEnd => "timeEnd",
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::MsIsIndependentlyComposed => "msIsIndependentlyComposed",
        }
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleMethod {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsoleMethod::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LoggerError::unknown_method(s))
    }
}

/// A set of [`ConsoleMethod`]s, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MethodSet(u32);

impl MethodSet {
    /// The empty set.
    pub const fn empty() -> Self {
        MethodSet(0)
    }

    /// Every recognized method.
    pub fn all() -> Self {
        Self::from_slice(&ConsoleMethod::ALL)
    }

    pub fn from_slice(methods: &[ConsoleMethod]) -> Self {
        methods.iter().copied().collect()
    }

    #[inline]
    pub fn contains(&self, method: ConsoleMethod) -> bool {
        self.0 & method.bit() != 0
    }

    pub fn insert(&mut self, method: ConsoleMethod) {
        self.0 |= method.bit();
    }

    pub fn remove(&mut self, method: ConsoleMethod) {
        self.0 &= !method.bit();
    }

    #[must_use]
    pub fn union(self, other: MethodSet) -> MethodSet {
        MethodSet(self.0 | other.0)
    }

    #[must_use]
    pub fn difference(self, other: MethodSet) -> MethodSet {
        MethodSet(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = ConsoleMethod> + '_ {
        ConsoleMethod::ALL.iter().copied().filter(|m| self.contains(*m))
    }
}

impl FromIterator<ConsoleMethod> for MethodSet {
    fn from_iter<I: IntoIterator<Item = ConsoleMethod>>(iter: I) -> Self {
        let mut set = MethodSet::empty();
        for method in iter {
            set.insert(method);
        }
        set
    }
}
