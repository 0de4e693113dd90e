//! JSON renderer — the whole model as structured output for tooling.
//!
//! Ignores the emit options: every enumeration, record, field and function
//! is dumped, including the free functions the defs output skips.

use crate::error::Result;
use crate::model::Model;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, model: &Model) -> Result<String> {
        let mut out = serde_json::to_string_pretty(model)?;
        out.push('\n');
        Ok(out)
    }
}
