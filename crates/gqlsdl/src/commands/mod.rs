pub(crate) mod tokens;
pub(crate) mod validate;

use crate::Cli;
use crate::CommandResult;
pub(crate) use tokens::TokensCmd;
pub(crate) use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlsdl")]
pub(crate) enum CommandEnum {
    /// Print the scanner's token stream for a schema file.
    Tokens(Box<TokensCmd>),

    /// Parse, resolve, and assemble one or more schema files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Tokens(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
