use clap::CommandFactory;
use gh_activity::cli::Cli;
use gh_activity::config::{Config, InitResult};
use gh_activity::app::run_with;
use gh_activity::utils::GitHubClient;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so the rendered feed on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gh_activity=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gh_activity=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Handle configuration flags
    if cli.init {
        match Config::init()? {
            InitResult::Created(path) => println!("Created config at {}", path.display()),
            InitResult::AlreadyExists(path) => {
                println!("Config already exists at {}", path.display())
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if cli.print {
        config.print()?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.check {
        config.check()?;
        println!("\u{2713} Configuration valid");
        return Ok(ExitCode::SUCCESS);
    }

    let Some(username) = cli.username.as_deref() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // Apply CLI overrides
    if cli.no_details {
        config.display.show_details = false;
    }
    if cli.color {
        config.display.color = true;
    }

    let client = GitHubClient::new(&config.api);
    let outcome = run_with(
        &client,
        username,
        &cli,
        &config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(outcome.exit_code())
}
