//! Command-line interface for the pre-release pruner.
//!
//! Every input can be given as a flag or through the environment variable
//! GitHub Actions sets for the corresponding action input, so the binary runs
//! unchanged as an action step or from a terminal.

use std::{io, process};

use clap::{ArgAction, Parser, builder::FalseyValueParser};
use prerelease_pruner::{
    DEFAULT_API_URL, Error, GitHubHost, MatchMode, PruneConfig, RepositoryRef, prune, report,
    required_input,
    workflow::{Annotation, format_command},
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Delete the pre-releases of a branch and their tags.
#[derive(Debug, Default, Parser,)]
#[command(name = "prerelease-pruner", version, about = "Delete branch pre-releases and their tags")]
struct Cli
{
    /// Token used to authenticate against the GitHub API.
    #[arg(
        long = "github-token",
        env = "INPUT_GITHUB-TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    github_token: Option<String,>,

    /// Branch whose pre-releases are deleted; `refs/heads/` is optional.
    #[arg(long = "branch-name", env = "INPUT_BRANCH-NAME", value_name = "BRANCH")]
    branch_name: Option<String,>,

    /// Require the branch to appear as `-<branch>.` instead of anywhere.
    #[arg(
        long = "strict-match-mode",
        env = "INPUT_STRICT-MATCH-MODE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    strict_match_mode: bool,

    /// Repository to prune in owner/repo form.
    #[arg(long = "repository", env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    repository: Option<String,>,

    /// GitHub REST API root.
    #[arg(long = "api-url", env = "GITHUB_API_URL", value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Emit GitHub Actions workflow commands for warnings and errors.
    #[arg(
        long = "annotations",
        env = "GITHUB_ACTIONS",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    annotations: bool,

    /// Write the run report as JSON to stdout.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Validated inputs: pipeline configuration plus the token for the client.
#[derive(Debug,)]
struct Inputs
{
    config: PruneConfig,
    token:  String,
}

#[tokio::main]
async fn main()
{
    init_tracing();

    let cli = Cli::parse();
    let annotations = cli.annotations;

    if let Err(failure,) = run(cli,).await {
        let message = failure.to_display_string();
        error!("{}", message);
        if annotations {
            println!("{}", format_command(Annotation::Error, &message,));
        }
        process::exit(1,);
    }
}

/// Installs the fmt subscriber on stderr, filtered by `RUST_LOG`.
fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),);

    tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_target(false,)
        .without_time()
        .with_writer(io::stderr,)
        .init();
}

/// Executes one pruning run.
///
/// # Errors
///
/// Returns [`Error`] for invalid inputs, client construction failures, a
/// failed release fetch, or a failed JSON report write. Failed deletions do
/// not produce an error.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let inputs = resolve_inputs(&cli,)?;

    let host = GitHubHost::new(&inputs.token, &cli.api_url, inputs.config.repository.clone(),)
        .map_err(|e| Error::client(e.to_string(),),)?;

    let report = prune(&host, &inputs.config,).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if cli.annotations
        && let Err(write_error,) = report::annotate_warnings(&mut handle, &report.outcomes,)
    {
        warn!("failed to write workflow annotations: {}", write_error);
    }

    if cli.json {
        report::write_report(&mut handle, &report,)?;
    }

    Ok((),)
}

/// Trims and validates the raw inputs.
///
/// # Errors
///
/// Returns [`Error::Config`] naming the first missing or malformed input.
fn resolve_inputs(cli: &Cli,) -> Result<Inputs, Error,>
{
    let token = required_input("github-token", cli.github_token.as_deref(),)?;
    let branch = required_input("branch-name", cli.branch_name.as_deref(),)?;
    let repository: RepositoryRef =
        required_input("repository", cli.repository.as_deref(),)?.parse()?;

    Ok(Inputs {
        config: PruneConfig::new(
            repository,
            branch,
            MatchMode::from_strict_flag(cli.strict_match_mode,),
        ),
        token:  token.to_owned(),
    },)
}

#[cfg(test)]
mod tests
{
    use clap::Parser;
    use prerelease_pruner::{Error, MatchMode};

    use super::{Cli, resolve_inputs};

    fn complete_cli() -> Cli
    {
        Cli {
            github_token: Some(" ghp_token ".to_owned(),),
            branch_name: Some("refs/heads/feature/login".to_owned(),),
            repository: Some("octocat/hello-world".to_owned(),),
            api_url: "https://api.github.com".to_owned(),
            ..Cli::default()
        }
    }

    #[test]
    fn cli_accepts_action_inputs_as_flags()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--github-token",
            "ghp_token",
            "--branch-name",
            "feature/login",
            "--repository",
            "octocat/hello-world",
            "--strict-match-mode",
            "--json",
        ],)
        .expect("failed to parse CLI",);

        assert_eq!(cli.github_token.as_deref(), Some("ghp_token"));
        assert_eq!(cli.branch_name.as_deref(), Some("feature/login"));
        assert_eq!(cli.repository.as_deref(), Some("octocat/hello-world"));
        assert!(cli.strict_match_mode);
        assert!(cli.json);
    }

    #[test]
    fn inputs_are_trimmed_and_validated()
    {
        let inputs = resolve_inputs(&complete_cli(),).expect("inputs should resolve",);

        assert_eq!(inputs.token, "ghp_token");
        assert_eq!(inputs.config.branch, "refs/heads/feature/login");
        assert_eq!(inputs.config.repository.to_string(), "octocat/hello-world");
        assert_eq!(inputs.config.mode, MatchMode::Loose);
    }

    #[test]
    fn strict_flag_selects_strict_mode()
    {
        let cli = Cli {
            strict_match_mode: true,
            ..complete_cli()
        };
        let inputs = resolve_inputs(&cli,).expect("inputs should resolve",);
        assert_eq!(inputs.config.mode, MatchMode::Strict);
    }

    #[test]
    fn missing_token_is_a_config_error()
    {
        let cli = Cli {
            github_token: None,
            ..complete_cli()
        };
        let error = resolve_inputs(&cli,).expect_err("token is required",);

        match error {
            Error::Config {
                message,
            } => assert_eq!(message, "input required and not supplied: github-token"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn blank_branch_is_a_config_error()
    {
        let cli = Cli {
            branch_name: Some("   ".to_owned(),),
            ..complete_cli()
        };
        let error = resolve_inputs(&cli,).expect_err("branch is required",);
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn malformed_repository_is_a_config_error()
    {
        let cli = Cli {
            repository: Some("hello-world".to_owned(),),
            ..complete_cli()
        };
        let error = resolve_inputs(&cli,).expect_err("repository must be owner/repo",);
        assert!(matches!(error, Error::Config { .. }));
    }
}
