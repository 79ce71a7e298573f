use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

#[derive(Parser, Debug)]
#[command(
    name = "gallery-placeholders",
    version,
    about = "Placeholder images for a static photo gallery"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Site directory holding index.html"
    )]
    pub dir: PathBuf,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = Locale::En,
        help = "Language of placeholder labels and page text"
    )]
    pub lang: Locale,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL printed in the closing guidance"
    )]
    pub base_url: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Generate the placeholder page, patch index.html, print next steps (default).
    Run,
    /// Write photo_placeholders.html only.
    Generate,
    /// Replace photo references in index.html with inline placeholders only.
    Patch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}
