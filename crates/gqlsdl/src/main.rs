mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            print!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprint!("{stderr}")
        }
        result.exit_code
    } else if let Err(err) = cli.run_default().await {
        eprintln!("{} {err:#}", output_utils::RED_X);
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim() {
        "DEBUG" | "debug" => Some(tracing::Level::DEBUG),
        "INFO" | "info" => Some(tracing::Level::INFO),
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{}`",
                        value.trim(),
                    ));
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
