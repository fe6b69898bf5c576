use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type Attrs = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NodeSnapshot {
    Element(ElementSnapshot),
    Text(TextSnapshot),
}

impl NodeSnapshot {
    pub fn element(tag: impl Into<String>, children: Vec<NodeSnapshot>) -> Self {
        NodeSnapshot::Element(ElementSnapshot {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Attrs::default(),
            children,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        NodeSnapshot::Text(TextSnapshot { text: text.into() })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::element("p", vec![Self::text(text)])
    }

    pub fn blockquote(children: Vec<NodeSnapshot>) -> Self {
        Self::element("blockquote", children)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

impl ElementSnapshot {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::default(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSnapshot {
    pub text: String,
}
