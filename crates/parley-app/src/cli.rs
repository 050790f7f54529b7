use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parley", version, about = "Native side of the parley chat shell")]
pub struct Cli {
    /// Profile to load from the config directory
    #[arg(long, default_value = "main", global = true)]
    pub profile: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Speak JSON lines with the host over stdin/stdout (default)
    Serve,
    /// Inspect or edit the custom spellcheck dictionary
    Dictionary {
        #[command(subcommand)]
        action: DictionaryAction,
    },
    /// Manage config profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
pub enum DictionaryAction {
    /// Print learned and ignored words for a locale
    List { locale: Option<String> },
    Learn { word: String, locale: Option<String> },
    Unlearn { word: String, locale: Option<String> },
    Ignore { word: String, locale: Option<String> },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    List,
    /// Create a profile cloned from main
    Add { name: String },
}
