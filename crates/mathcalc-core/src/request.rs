//! Compute requests and operation tags.

use serde::{Deserialize, Serialize};

/// Operation tag, as persisted in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Integer power.
    Pow,
    /// Fibonacci number.
    Fib,
    /// Factorial.
    Fact,
}

impl OpKind {
    /// Stable lowercase tag used in audit rows and details strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pow => "pow",
            Self::Fib => "fib",
            Self::Fact => "fact",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One computation request, immutable once constructed.
///
/// Fields are signed so that out-of-domain values (negative exponent or
/// index) survive to the facade, which rejects them with a validation
/// error before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ComputeRequest {
    /// base^exponent.
    Pow {
        /// Integer base (may be negative).
        base: i64,
        /// Non-negative integer exponent.
        exponent: i64,
    },
    /// The n-th Fibonacci number.
    Fib {
        /// Non-negative index.
        n: i64,
    },
    /// n! (factorial).
    Fact {
        /// Non-negative argument.
        n: i64,
    },
}

impl ComputeRequest {
    /// Operation tag for this request.
    #[must_use]
    pub fn op(&self) -> OpKind {
        match self {
            Self::Pow { .. } => OpKind::Pow,
            Self::Fib { .. } => OpKind::Fib,
            Self::Fact { .. } => OpKind::Fact,
        }
    }

    /// Compact JSON encoding of the argument map, suitable for lossless
    /// audit-log storage, e.g. `{"base":2,"exponent":10}`.
    #[must_use]
    pub fn params_json(&self) -> String {
        match *self {
            Self::Pow { base, exponent } => {
                serde_json::json!({ "base": base, "exponent": exponent }).to_string()
            }
            Self::Fib { n } | Self::Fact { n } => serde_json::json!({ "n": n }).to_string(),
        }
    }
}
