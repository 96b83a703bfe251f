//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `messages`: extract `/*#NAME ...*/` state messages into one XML file
//! - `settings`: extract attributed setting comments into per-category XML files
//! - `init`: write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

const MESSAGES_ABOUT: &str = "\
State Message Parser

Searches the source tree for comments formatted as /*# followed by a state
name (no spaces). All text following the first whitespace after the state
name is the description.

    /*#STATE_NAME ...description...*/

A multiline version has its left margin cleaned off, so descriptions can sit
at the natural indentation level of the code:

    /*#STATE_NAME ...description...
     * ...more description...
     */

The names and descriptions are written to an XML message database the
dashboard uses to explain the state names it receives.

Requires two arguments: the folder to search within, followed by the
destination filename for the XML message database.";

const SETTINGS_ABOUT: &str = "\
Setting Description Parser

Searches the source tree for comments starting with a setting tag followed by
xml-style attributes. Any further lines have their left gutter stripped and
become the description of the setting.

    /*AIRSETTING index=\"0\" name=\"Gain\" min=\"0.0\" max=\"1.0\" def=\"0.003\"
     * Full length setting
     * description over multiple lines
     */

Each setting tag is written to its own XML database (airSettings.xml and
groundSettings.xml by default) for the dashboard's setting configuration
screen.

Requires two arguments: the folder to search within, followed by the
destination directory for the XML setting databases.";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Arguments {
    /// Long help for the command named by the first non-flag argument, or
    /// for the whole program when there is none.
    pub fn usage_for(raw_args: &[String]) -> String {
        let mut cmd = Self::command();
        cmd.build();

        let name = raw_args
            .iter()
            .skip(1)
            .find(|arg| !arg.starts_with('-'))
            .cloned();
        if let Some(sub) = name.as_deref().and_then(|n| cmd.find_subcommand_mut(n)) {
            return sub.render_long_help().to_string();
        }
        cmd.render_long_help().to_string()
    }
}

#[derive(Debug, Args)]
pub struct MessagesArgs {
    /// Folder to search within
    pub source_dir: PathBuf,
    /// Destination filename for the XML message database
    pub dest_file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Folder to search within
    pub source_dir: PathBuf,
    /// Destination directory for the XML setting databases
    pub dest_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract /*#NAME ...*/ state messages into an XML message database
    #[command(long_about = MESSAGES_ABOUT)]
    Messages(MessagesArgs),
    /// Extract tagged setting descriptions into XML setting databases
    #[command(long_about = SETTINGS_ABOUT)]
    Settings(SettingsArgs),
    /// Initialize a new .tagdbrc.json configuration file
    Init,
}
