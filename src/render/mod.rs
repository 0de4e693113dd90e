//! Renderer module — trait-based format dispatch.

pub mod defs;
pub mod json;

use crate::error::{Error, Result};
use crate::model::Model;
use clap::ValueEnum;

/// Trait for rendering a parsed Model into a specific output format.
pub trait Renderer {
    fn render(&self, model: &Model) -> Result<String>;
}

/// Entity kinds the defs renderer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    /// Enumerations and bitfields
    Enums,
    /// Functions declared inside records
    Methods,
}

/// What to emit and how much of it.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub kinds: Vec<EntityKind>,
    /// Emit only functions bound to their record (methods and
    /// constructors); free functions declared in a record are skipped.
    pub bound_only: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            kinds: vec![EntityKind::Enums, EntityKind::Methods],
            bound_only: true,
        }
    }
}

impl EmitOptions {
    pub fn emits(&self, kind: EntityKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: EmitOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "defs" => Ok(Box::new(defs::DefsRenderer::new(options))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
