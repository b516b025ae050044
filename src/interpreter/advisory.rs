use crate::interpreter::value::Number;

/// A non-fatal notice raised while solving an expression.
///
/// Each kind fires at most once per conversion or evaluation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// Two or more operators appeared in a row.
    ConsecutiveOperators {
        /// Byte offset of the second operator.
        position: usize,
    },
    /// An intermediate result reached the overflow threshold.
    LargeResult {
        /// The first result that reached the threshold.
        value: Number,
    },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsecutiveOperators { .. } => write!(f,
                                                        "Two or more operators in a row. The expression will still be processed, but check that it was entered correctly."),
            Self::LargeResult { .. } => write!(f,
                                               "The computed value is very large. The result may be inaccurate."),
        }
    }
}

/// Receives advisories as they are raised.
///
/// The calculator never displays advisories itself; the caller decides
/// whether to collect, log, or print them.
pub trait AdvisorySink {
    /// Accepts one advisory.
    fn advise(&mut self, advisory: Advisory);
}

impl AdvisorySink for Vec<Advisory> {
    fn advise(&mut self, advisory: Advisory) {
        self.push(advisory);
    }
}

/// Forwards advisories to `tracing` at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn advise(&mut self, advisory: Advisory) {
        match advisory {
            Advisory::ConsecutiveOperators { position } => {
                tracing::warn!(position, "{advisory}");
            },
            Advisory::LargeResult { value } => {
                tracing::warn!(%value, "{advisory}");
            },
        }
    }
}
