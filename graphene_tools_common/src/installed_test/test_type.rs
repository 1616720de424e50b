use std::fmt::Display;
use std::str::FromStr;

/// How the test runner schedules a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestType {
    /// Runs inside the user session, possibly alongside other tests.
    #[default]
    Session,
    /// Runs inside the user session with no other test running.
    SessionExclusive,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Session => "session",
            TestType::SessionExclusive => "session-exclusive",
        }
    }
}

impl Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" => Ok(TestType::Session),
            "session-exclusive" => Ok(TestType::SessionExclusive),
            _ => Err(format!("Unsupported test type: {s:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(TestType::default().to_string(), "session");
        assert_eq!(
            "session-exclusive".parse::<TestType>(),
            Ok(TestType::SessionExclusive)
        );
        assert!("exclusive".parse::<TestType>().is_err());
    }
}
