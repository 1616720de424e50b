//! Installed-test descriptors.
//!
//! Each installed test ships a small key file telling the desktop test runner
//! how to launch it:
//!
//! ```text
//! [Test]
//! Type=session
//! Exec=/usr/libexec/installed-tests/graphene-1.0/box
//! TestEnvironment=MUTEST_OUTPUT=tap;
//! ```

mod test_type;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use test_type::TestType;

/// Variable and value the mutest-based test binaries use to select TAP output.
pub const DEFAULT_TEST_ENVIRONMENT: (&str, &str) = ("MUTEST_OUTPUT", "tap");

/// Errors produced while building or writing a descriptor.
#[derive(Debug, Error)]
pub enum InstalledTestError {
    /// The descriptor could not be written.
    #[error("Failed to write test descriptor {}: {source}", path.display())]
    Write {
        /// Target file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An environment entry was not `KEY=VALUE`.
    #[error("Invalid environment assignment '{0}'. Expected KEY=VALUE")]
    InvalidEnv(String),
}

/// Contents of one installed-test descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstalledTest {
    pub test_type: TestType,
    /// Test binary to run.
    pub exec: PathBuf,
    /// `TestEnvironment` entries, in output order.
    pub environment: Vec<(String, String)>,
}

impl InstalledTest {
    /// Descriptor for the test binary `testname` installed under `testdir`.
    pub fn new<D: AsRef<Path>, N: AsRef<Path>>(testdir: D, testname: N) -> Self {
        let (key, value) = DEFAULT_TEST_ENVIRONMENT;
        Self {
            test_type: TestType::default(),
            exec: testdir.as_ref().join(testname),
            environment: vec![(key.to_string(), value.to_string())],
        }
    }

    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        self.test_type = test_type;
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.environment.push((key.to_string(), value.to_string()));
        self
    }

    pub fn without_default_env(mut self) -> Self {
        let (key, _) = DEFAULT_TEST_ENVIRONMENT;
        self.environment.retain(|(k, _)| k != key);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the descriptor to `outdir/outfile`, returning the path written.
    ///
    /// `outdir` must already exist.
    pub fn write_to<D: AsRef<Path>, F: AsRef<Path>>(
        &self,
        outdir: D,
        outfile: F,
    ) -> Result<PathBuf, InstalledTestError> {
        let path = outdir.as_ref().join(outfile);
        std::fs::write(&path, self.render()).map_err(|source| InstalledTestError::Write {
            path: path.clone(),
            source,
        })?;

        info!("Wrote installed test descriptor: {}", path.display());
        Ok(path)
    }
}

impl Display for InstalledTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[Test]")?;
        writeln!(f, "Type={}", self.test_type)?;
        writeln!(f, "Exec={}", self.exec.display())?;
        if !self.environment.is_empty() {
            write!(f, "TestEnvironment=")?;
            for (key, value) in &self.environment {
                write!(f, "{key}={value};")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Splits a `KEY=VALUE` assignment at the first `=`.
pub fn parse_env_assignment(assignment: &str) -> Result<(String, String), InstalledTestError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(InstalledTestError::InvalidEnv(assignment.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let test = InstalledTest::new("/usr/libexec/installed-tests/graphene-1.0", "box");
        assert_eq!(
            test.render(),
            "[Test]\n\
             Type=session\n\
             Exec=/usr/libexec/installed-tests/graphene-1.0/box\n\
             TestEnvironment=MUTEST_OUTPUT=tap;\n"
        );
    }

    #[test]
    fn test_extra_env_shares_one_line() {
        let test = InstalledTest::new("/t", "vec3").with_env("G_DEBUG", "fatal-warnings");
        assert!(
            test.render()
                .contains("TestEnvironment=MUTEST_OUTPUT=tap;G_DEBUG=fatal-warnings;\n")
        );
    }

    #[test]
    fn test_no_env_omits_line() {
        let test = InstalledTest::new("/t", "vec3").without_default_env();
        assert!(!test.render().contains("TestEnvironment"));
    }

    #[test]
    fn test_parse_env_assignment() {
        assert_eq!(
            parse_env_assignment("A=b=c").unwrap(),
            ("A".to_string(), "b=c".to_string())
        );
        assert_eq!(
            parse_env_assignment("EMPTY=").unwrap(),
            ("EMPTY".to_string(), String::new())
        );
        assert!(parse_env_assignment("NOVALUE").is_err());
        assert!(parse_env_assignment("=value").is_err());
    }
}
