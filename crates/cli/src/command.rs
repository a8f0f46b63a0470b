//! Command trait for hookpin CLI
//!
//! Every subcommand implements [`Command`], which gives a uniform way to run
//! it against a [`RuntimeContext`] and makes commands easy to call from tests.

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all hookpin commands
///
/// Commands can specify their return type via the `Output` associated type.
/// Output is printed by the command itself; the returned value is what tests
/// and callers inspect.
///
/// # Example
///
/// ```rust,ignore
/// use crate::command::Command;
/// use crate::common::RuntimeContext;
/// use crate::error::Result;
/// use clap::Args;
///
/// #[derive(Debug, Args)]
/// pub struct MyCommand {
///     #[arg(short, long)]
///     pub some_flag: bool,
/// }
///
/// impl Command for MyCommand {
///     type Output = ();
///
///     fn execute(&self, context: &RuntimeContext) -> Result<()> {
///         let path = context.manifest_path()?;
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute. Error messages
    /// should be descriptive enough for the user to understand what went wrong.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
