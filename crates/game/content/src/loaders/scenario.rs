//! Scenario loader.
//!
//! Scenarios are RON documents matching [`Scenario`]. A default arena ships
//! embedded in the crate.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

const BUILTIN_ARENA: &str = include_str!("../../data/arena.ron");

/// Loader for scenario descriptions.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    /// The arena embedded in the crate.
    pub fn builtin() -> LoadResult<Scenario> {
        Self::parse(BUILTIN_ARENA)
    }
}

impl Scenario {
    pub fn from_ron_str(content: &str) -> LoadResult<Self> {
        ScenarioLoader::parse(content)
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        ScenarioLoader::load(path)
    }

    pub fn builtin() -> LoadResult<Self> {
        ScenarioLoader::builtin()
    }
}
