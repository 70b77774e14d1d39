//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through configuring
//! habsync for first-time use, primarily the remote service credentials.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive configuration wizard, or removes the stored
/// configuration file when `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Handle deletion mode - exit early after cleanup
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    // Run interactive configuration wizard
    // This will prompt the user to select and configure the remote service
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
