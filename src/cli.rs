//! Command line definitions.
//!
//! Lives in the library so the man page generator can reuse it.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::input::Selection;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("MATHPAD_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MATHPAD_BUILD_DATE"),
    ")"
);

/// Insert text at the cursor of a text field
#[derive(Debug, Parser)]
#[command(name = "mathpad", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert text into a value at a cursor position and print the result
    ///
    /// Without --selection the value has no cursor and the text is appended.
    Insert {
        /// Text to insert
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Current value of the field
        #[arg(long, default_value = "")]
        value: String,

        /// Cursor or selection as START or START:END (char offsets)
        #[arg(long, short)]
        selection: Option<Selection>,

        /// Treat the field as read-only (the insertion is rejected)
        #[arg(long)]
        read_only: bool,

        /// Print only the new value instead of JSON
        #[arg(long)]
        plain: bool,
    },

    /// Open the interactive pad: an input field with a keypad
    ///
    /// Enter prints the final value; Esc exits without output.
    Pad {
        /// Initial value of the input field
        #[arg(long, default_value = "")]
        value: String,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
