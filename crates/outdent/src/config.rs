use std::collections::HashSet;

use plate_dom::DomTree;
use serde::{Deserialize, Serialize};

use crate::error::CommandResult;

const DEFAULT_BLOCKQUOTE_TAG: &str = "blockquote";

const DEFAULT_BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "audio",
    "blockquote",
    "canvas",
    "dd",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "li",
    "main",
    "nav",
    "noscript",
    "ol",
    "output",
    "p",
    "pre",
    "section",
    "table",
    "tfoot",
    "ul",
    "video",
];

fn default_block_elements() -> Vec<String> {
    DEFAULT_BLOCK_ELEMENTS.iter().map(|s| s.to_string()).collect()
}

fn default_blockquote_tag() -> String {
    DEFAULT_BLOCKQUOTE_TAG.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutdentStrategy {
    #[default]
    PromoteBlocks,
    PromoteEdgeBlocks,
    UnwrapBlockquote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdentConfig {
    #[serde(default)]
    pub strategy: OutdentStrategy,
    #[serde(default = "default_block_elements")]
    pub block_elements: Vec<String>,
    #[serde(default = "default_blockquote_tag")]
    pub blockquote_tag: String,
}

impl Default for OutdentConfig {
    fn default() -> Self {
        Self {
            strategy: OutdentStrategy::default(),
            block_elements: default_block_elements(),
            blockquote_tag: default_blockquote_tag(),
        }
    }
}

impl OutdentConfig {
    pub fn with_strategy(mut self, strategy: OutdentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn from_json_str(s: &str) -> CommandResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> CommandResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn block_set(&self) -> BlockSet {
        BlockSet::new(&self.block_elements, &self.blockquote_tag)
    }
}

#[derive(Debug, Clone)]
pub struct BlockSet {
    blocks: HashSet<String>,
    blockquote: String,
}

impl BlockSet {
    pub fn new<S: AsRef<str>>(block_elements: &[S], blockquote_tag: &str) -> Self {
        Self {
            blocks: block_elements
                .iter()
                .map(|tag| tag.as_ref().to_ascii_lowercase())
                .collect(),
            blockquote: blockquote_tag.to_ascii_lowercase(),
        }
    }

    pub fn is_block<T: DomTree + ?Sized>(&self, tree: &T, node: T::Node) -> bool {
        tree.tag_name(node)
            .is_some_and(|tag| self.blocks.contains(&tag.to_ascii_lowercase()))
    }

    pub fn is_blockquote<T: DomTree + ?Sized>(&self, tree: &T, node: T::Node) -> bool {
        tree.has_tag(node, &self.blockquote)
    }

    pub fn blockquote_tag(&self) -> &str {
        &self.blockquote
    }
}

impl Default for BlockSet {
    fn default() -> Self {
        OutdentConfig::default().block_set()
    }
}
