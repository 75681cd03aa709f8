use clap::Parser;
use std::path::PathBuf;

/// Read a choose-your-own-adventure story in the browser or the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "cyoa", version, about)]
pub struct Config {
    /// Port of the web application
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Arc the story starts at
    #[arg(long, default_value = "intro")]
    pub intro: String,

    /// Read the story in the terminal instead of serving it over HTTP
    #[arg(long)]
    pub cl: bool,

    /// Story file to load
    #[arg(long, default_value = "gopher.json")]
    pub story: PathBuf,
}
