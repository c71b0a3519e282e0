//! Controller configuration
//!
//! Containers declared in data (scene files, themes) describe their layout
//! with a `ControllerConfig`. Every field is optional in the serialized form.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::FlexStyle;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Lay children out in a private node solved by this controller instead
    /// of the node supplied by an enclosing context
    pub use_independent_layout: bool,
    pub style: FlexStyle,
}

impl ControllerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
