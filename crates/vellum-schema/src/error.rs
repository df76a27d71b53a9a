use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-keyed error aggregation for the load phase. Every failure found
/// while compiling a document lands here, so a failed load reports all of
/// them rather than the first one hit.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of collected messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Add an error at the root route.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.add_at(String::new(), err);
    }

    /// Add an error under a route such as `view.hosts_tree`.
    pub fn add_at(&mut self, route: impl Into<String>, err: impl fmt::Display) {
        self.errors
            .entry(route.into())
            .or_default()
            .push(err.to_string());
    }

    /// Fold another tree into this one, keeping both sides' messages.
    pub fn merge(&mut self, other: Self) {
        for (route, mut messages) in other.errors {
            self.errors.entry(route).or_default().append(&mut messages);
        }
    }

    /// `(route, message)` pairs in route order, messages in insertion order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().flat_map(|(route, messages)| {
            messages.iter().map(move |m| (route.as_str(), m.as_str()))
        })
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, message) in self.messages() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message onto an [`ErrorTree`] at the root route.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
