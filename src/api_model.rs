use std::sync::Arc;

use crate::model::StoryGraph;

#[derive(Debug, Clone)]
pub struct AppState {
    pub story: Arc<StoryGraph>,
    pub intro: String,
}

impl AppState {
    pub fn new(story: Arc<StoryGraph>, intro: impl Into<String>) -> Self {
        Self {
            story,
            intro: intro.into(),
        }
    }
}
