//! Smoke checks over the generated bindings, reported as TAP.

use std::fmt::Display;

use super::GirNamespace;

/// Implementation-selection macros that must stay out of the bindings.
pub const SIMD_SYMBOLS: [&str; 9] = [
    "HAS_ARM_NEON",
    "HAS_GCC",
    "HAS_SCALAR",
    "HAS_SSE",
    "SIMD_S",
    "USE_ARM_NEON",
    "USE_GCC",
    "USE_SCALAR",
    "USE_SSE",
];

/// Result of a single assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    /// `None` when the assertion held.
    pub failure: Option<String>,
}

impl CheckOutcome {
    fn from_condition(name: String, holds: bool, failure: impl FnOnce() -> String) -> Self {
        Self {
            name,
            failure: (!holds).then(failure),
        }
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// `Box.empty()` must be reachable from the bindings.
pub fn check_basics(ns: &GirNamespace) -> CheckOutcome {
    CheckOutcome::from_condition(
        "Box.empty is callable".to_string(),
        ns.type_has_callable("Box", "empty"),
        || format!("{}.Box has no callable named 'empty'", ns.name()),
    )
}

/// One outcome per entry of [`SIMD_SYMBOLS`].
pub fn check_simd_not_exposed(ns: &GirNamespace) -> Vec<CheckOutcome> {
    SIMD_SYMBOLS
        .iter()
        .map(|symbol| {
            CheckOutcome::from_condition(
                format!("{symbol} is not exposed"),
                !ns.has_symbol(symbol),
                || format!("{symbol} should not be defined"),
            )
        })
        .collect()
}

pub fn run_checks(ns: &GirNamespace) -> Vec<CheckOutcome> {
    let mut outcomes = vec![check_basics(ns)];
    outcomes.extend(check_simd_not_exposed(ns));
    outcomes
}

/// Outcome of a whole introspection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionReport {
    /// No introspection data was available.
    Skipped(String),
    /// Every check ran, in reporting order.
    Ran(Vec<CheckOutcome>),
}

impl IntrospectionReport {
    pub fn is_success(&self) -> bool {
        match self {
            IntrospectionReport::Skipped(_) => true,
            IntrospectionReport::Ran(outcomes) => outcomes.iter().all(CheckOutcome::passed),
        }
    }

    pub fn failures(&self) -> usize {
        match self {
            IntrospectionReport::Skipped(_) => 0,
            IntrospectionReport::Ran(outcomes) => outcomes.iter().filter(|o| !o.passed()).count(),
        }
    }

    pub fn to_tap(&self) -> String {
        self.to_string()
    }
}

impl Display for IntrospectionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntrospectionReport::Skipped(reason) => writeln!(f, "1..0 # SKIP {reason}"),
            IntrospectionReport::Ran(outcomes) => {
                writeln!(f, "1..{}", outcomes.len())?;
                for (i, outcome) in outcomes.iter().enumerate() {
                    match &outcome.failure {
                        None => writeln!(f, "ok {} - {}", i + 1, outcome.name)?,
                        Some(message) => {
                            writeln!(f, "not ok {} - {}", i + 1, outcome.name)?;
                            writeln!(f, "# {message}")?;
                        },
                    }
                }
                Ok(())
            },
        }
    }
}
