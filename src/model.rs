use serde::{Deserialize, Deserializer, Serialize};

use crate::TransformError;

pub const DEFAULT_TITLE: &str = "Untitled";

/// A recipe as accepted and produced by the transformer.
///
/// Missing or `null` fields fall back to their defaults: the title becomes
/// [`DEFAULT_TITLE`], ingredients an empty list and instructions an empty
/// text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Instructions,
}

/// Recipe instructions, either one block of text or a list of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    Text(String),
    Steps(Vec<String>),
}

impl Default for Instructions {
    fn default() -> Self {
        Instructions::Text(String::new())
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            title: default_title(),
            ingredients: Vec::new(),
            instructions: Instructions::default(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn title_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Instructions,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients,
            instructions,
        }
    }

    /// Parse a recipe from JSON.
    ///
    /// This is the typed boundary of the crate: a payload whose fields have
    /// the wrong shape (for example `ingredients` that is not a list of
    /// strings) is rejected here with [`TransformError::InvalidRecipe`].
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        serde_json::from_str(json).map_err(|e| TransformError::InvalidRecipe(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, TransformError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Instructions {
    /// Instruction entries as a mutable slice. A text block is one entry.
    pub fn entries_mut(&mut self) -> &mut [String] {
        match self {
            Instructions::Text(text) => std::slice::from_mut(text),
            Instructions::Steps(steps) => steps.as_mut_slice(),
        }
    }

    pub fn entries(&self) -> &[String] {
        match self {
            Instructions::Text(text) => std::slice::from_ref(text),
            Instructions::Steps(steps) => steps.as_slice(),
        }
    }

    pub fn is_steps(&self) -> bool {
        matches!(self, Instructions::Steps(_))
    }
}

impl From<&str> for Instructions {
    fn from(text: &str) -> Self {
        Instructions::Text(text.to_string())
    }
}

impl From<String> for Instructions {
    fn from(text: String) -> Self {
        Instructions::Text(text)
    }
}

impl From<Vec<String>> for Instructions {
    fn from(steps: Vec<String>) -> Self {
        Instructions::Steps(steps)
    }
}
