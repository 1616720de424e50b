use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args as ClapArgs, Parser, Subcommand};
use graphene_tools_common::*;

/// Graphene build tools - binding name filter, installed tests, introspection checks
#[derive(Parser, Debug)]
#[command(name = "graphene-tools")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a C type name read from stdin into its introspection name
    Identfilter(IdentFilterArgs),
    /// Generate an installed-test descriptor
    GenInstalledTest(GenInstalledTestArgs),
    /// Check the generated introspection data, reporting TAP
    Introspection(IntrospectionArgs),
}

#[derive(ClapArgs, Debug)]
pub struct IdentFilterArgs {
    /// Prefix marking the naming family
    #[arg(long, default_value = GRAPHENE_PREFIX, value_parser = NonEmptyStringValueParser::new())]
    pub prefix: String,

    /// Type suffix stripped from eligible names
    #[arg(long, default_value = TYPE_SUFFIX, value_parser = NonEmptyStringValueParser::new())]
    pub suffix: String,
}

impl IdentFilterArgs {
    pub fn to_filter(&self) -> IdentFilter {
        IdentFilter::new()
            .with_prefix(&self.prefix)
            .with_suffix(&self.suffix)
    }
}

#[derive(ClapArgs, Debug)]
pub struct GenInstalledTestArgs {
    /// Installed test directory
    #[arg(long, value_name = "dir")]
    pub testdir: PathBuf,

    /// Installed test name
    #[arg(long, value_name = "name")]
    pub testname: String,

    /// Output file
    #[arg(long, value_name = "file")]
    pub outfile: String,

    /// Output directory
    #[arg(long, value_name = "dir")]
    pub outdir: PathBuf,

    /// Test type recorded in the descriptor
    #[arg(long = "type", value_enum, default_value = "session")]
    pub test_type: TestTypeArg,

    /// Extra test environment entry (format: KEY=VALUE)
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,
}

impl GenInstalledTestArgs {
    /// Convert command-line arguments into a descriptor
    pub fn to_installed_test(&self) -> Result<InstalledTest, InstalledTestError> {
        let mut test = InstalledTest::new(&self.testdir, &self.testname)
            .with_test_type(self.test_type.clone().into());

        for assignment in &self.env {
            let (key, value) = parse_env_assignment(assignment)?;
            test = test.with_env(&key, &value);
        }

        Ok(test)
    }
}

/// Command-line argument wrapper for TestType
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum TestTypeArg {
    /// Run alongside other session tests
    #[value(name = "session")]
    Session,
    /// Run with no other test active
    #[value(name = "session-exclusive")]
    SessionExclusive,
}

impl From<TestTypeArg> for TestType {
    fn from(arg: TestTypeArg) -> Self {
        match arg {
            TestTypeArg::Session => TestType::Session,
            TestTypeArg::SessionExclusive => TestType::SessionExclusive,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct IntrospectionArgs {
    /// Path to the .gir file (searched for when omitted)
    #[arg(long)]
    pub gir: Option<PathBuf>,

    /// Introspection namespace
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Introspection namespace version
    #[arg(long, default_value = DEFAULT_NAMESPACE_VERSION)]
    pub gir_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_installed_test_args() {
        let args = Args::try_parse_from([
            "graphene-tools",
            "gen-installed-test",
            "--testdir",
            "/usr/libexec/installed-tests/graphene-1.0",
            "--testname",
            "box",
            "--outfile",
            "box.test",
            "--outdir",
            "build/tests",
        ])
        .unwrap();

        let Command::GenInstalledTest(gen_args) = args.command else {
            panic!("expected gen-installed-test");
        };
        let test = gen_args.to_installed_test().unwrap();
        assert_eq!(test.test_type, TestType::Session);
        assert_eq!(
            test.exec,
            PathBuf::from("/usr/libexec/installed-tests/graphene-1.0/box")
        );
        assert_eq!(gen_args.outdir, PathBuf::from("build/tests"));
    }

    #[test]
    fn test_missing_required_flag_is_usage_error() {
        let err = Args::try_parse_from([
            "graphene-tools",
            "gen-installed-test",
            "--testdir",
            "/t",
            "--testname",
            "box",
            "--outfile",
            "box.test",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_env_and_type_flags() {
        let args = Args::try_parse_from([
            "graphene-tools",
            "gen-installed-test",
            "--testdir=/t",
            "--testname=vec2",
            "--outfile=vec2.test",
            "--outdir=.",
            "--type=session-exclusive",
            "--env",
            "G_DEBUG=fatal-warnings",
        ])
        .unwrap();

        let Command::GenInstalledTest(gen_args) = args.command else {
            panic!("expected gen-installed-test");
        };
        let rendered = gen_args.to_installed_test().unwrap().render();
        assert!(rendered.contains("Type=session-exclusive\n"));
        assert!(rendered.contains("TestEnvironment=MUTEST_OUTPUT=tap;G_DEBUG=fatal-warnings;\n"));
    }

    #[test]
    fn test_bad_env_assignment() {
        let args = Args::try_parse_from([
            "graphene-tools",
            "gen-installed-test",
            "--testdir=/t",
            "--testname=vec2",
            "--outfile=vec2.test",
            "--outdir=.",
            "--env=G_DEBUG",
        ])
        .unwrap();

        let Command::GenInstalledTest(gen_args) = args.command else {
            panic!("expected gen-installed-test");
        };
        assert!(matches!(
            gen_args.to_installed_test(),
            Err(InstalledTestError::InvalidEnv(_))
        ));
    }

    #[test]
    fn test_identfilter_defaults() {
        let args = Args::try_parse_from(["graphene-tools", "identfilter"]).unwrap();
        let Command::Identfilter(filter_args) = args.command else {
            panic!("expected identfilter");
        };
        assert_eq!(filter_args.to_filter(), IdentFilter::default());
    }

    #[test]
    fn test_identfilter_rejects_empty_markers() {
        for flag in ["--prefix=", "--suffix="] {
            let err = Args::try_parse_from(["graphene-tools", "identfilter", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{flag}");
        }
    }

    #[test]
    fn test_identfilter_custom_family() {
        let args = Args::try_parse_from([
            "graphene-tools",
            "identfilter",
            "--prefix",
            "cairo_",
        ])
        .unwrap();
        let Command::Identfilter(filter_args) = args.command else {
            panic!("expected identfilter");
        };
        let filter = filter_args.to_filter();
        assert_eq!(filter.prefix(), "cairo_");
        assert_eq!(filter.suffix(), "_t");
    }

    #[test]
    fn test_introspection_defaults() {
        let args = Args::try_parse_from(["graphene-tools", "introspection"]).unwrap();
        let Command::Introspection(intro_args) = args.command else {
            panic!("expected introspection");
        };
        assert_eq!(intro_args.gir, None);
        assert_eq!(intro_args.namespace, "Graphene");
        assert_eq!(intro_args.gir_version, "1.0");
    }
}
