use crate::{error::StoryError, model::StoryGraph};
use std::path::Path;

pub fn parse_story(bytes: &[u8]) -> Result<StoryGraph, StoryError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn load_story(path: impl AsRef<Path>) -> Result<StoryGraph, StoryError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| StoryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let story = parse_story(&bytes)?;
    for (from, to) in story.dangling_arcs() {
        tracing::warn!(%from, %to, "option points at a missing arc");
    }
    tracing::info!(path = %path.display(), arcs = story.len(), "story loaded");
    Ok(story)
}
