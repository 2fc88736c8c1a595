use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the schema file whose tokens should be printed.",
        name="FILE",
    )]
    pub(crate) file: PathBuf,
}

/// True when the dump stopped on a lexical error instead of end of input.
pub(crate) fn ends_in_error(dump: &str) -> bool {
    dump.lines()
        .last()
        .and_then(|line| line.split(": ").nth(1))
        .is_some_and(|category| category == "error")
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))
        {
            Ok(source) => source,
            Err(err) => return CommandResult::error(err),
        };

        let dump = gqlsdl_parser::dump_tokens(&source);
        log::debug!("dumped {} token(s) from {:?}", dump.lines().count(), self.file);
        if ends_in_error(&dump) {
            CommandResult::stderr(format_args!("{dump}"))
        } else {
            CommandResult::stdout(format_args!("{dump}"))
        }
    }
}
