use crate::Cli;
use crate::CommandResult;

/// A `gqlsdl` subcommand (`tokens`, `validate`). Implementors expose `run`
/// as an inherent method through `#[inherent::inherent]`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// Runs the subcommand to completion. Failures are reported through
    /// the returned [`CommandResult`], never by panicking.
    async fn run(self, cli: Cli) -> CommandResult;
}
