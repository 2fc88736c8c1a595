use clap::CommandFactory;
use crate::commands;

/// Inspect and validate schema definition files.
///
/// `gqlsdl tokens FILE` prints the scanner's token stream;
/// `gqlsdl validate PATHS..` parses, resolves, and assembles a schema.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlsdl", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at debug level (overrides `LOG_LEVEL`).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, print usage listing `tokens` and `validate`.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
