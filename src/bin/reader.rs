use anyhow::{Context, Result};
use clap::Parser;
use cyoa::{config::Config, story::load_story, terminal::Reader};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[auto_context::auto_context]
fn read_in_terminal(story: Arc<cyoa::model::StoryGraph>, intro: String) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Reader::new(&story, intro, stdin, stdout).run()?;
    Ok(())
}

#[auto_context::auto_context]
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let story = Arc::new(load_story(&config.story)?);

    if config.cl {
        let intro = config.intro.clone();
        tokio::task::spawn_blocking(move || read_in_terminal(story, intro)).await?
    } else {
        cyoa::api::serve(&config, story).await
    }
}
