/// Command module for the `riordino` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input bytes and parsed arguments and returns `Ok(())` on
/// success or a [`crate::error::CliError`] on failure.
pub mod compute;
pub mod inspect;
