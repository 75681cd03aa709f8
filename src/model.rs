use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoryOption {
    pub text: String,
    pub arc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoryNode {
    pub title: String,
    pub story: Vec<String>,
    pub options: Vec<StoryOption>,
}

/// What a lookup of an unknown arc yields.
pub static BLANK_ARC: StoryNode = StoryNode {
    title: String::new(),
    story: Vec::new(),
    options: Vec::new(),
};

/// Every arc of a story keyed by its identifier. Built once and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(transparent)]
pub struct StoryGraph {
    arcs: HashMap<String, StoryNode>,
}

impl StoryGraph {
    pub fn new(arcs: HashMap<String, StoryNode>) -> Self {
        Self { arcs }
    }

    pub fn get(&self, id: &str) -> Option<&StoryNode> {
        self.arcs.get(id)
    }

    /// Like [`StoryGraph::get`] but falls back to [`BLANK_ARC`].
    pub fn arc(&self, id: &str) -> &StoryNode {
        self.arcs.get(id).unwrap_or(&BLANK_ARC)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.arcs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Options whose target arc does not exist, as `(from, to)` pairs sorted
    /// by source then target.
    pub fn dangling_arcs(&self) -> Vec<(String, String)> {
        let known: HashSet<&str> = self.arcs.keys().map(String::as_str).collect();
        let mut dangling = Vec::new();
        for (from, node) in self.arcs.iter() {
            for option in node.options.iter() {
                if !known.contains(option.arc.as_str()) {
                    dangling.push((from.clone(), option.arc.clone()));
                }
            }
        }
        dangling.sort();
        dangling.dedup();
        dangling
    }
}
