use serde::Deserialize;
use sqltpl::{Arg, Template, TemplateResult};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_SKIP: &str = "@skip";

const SUPPORTED_VERSION: &str = "1";

/// A TOML file of named query templates with their arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryFile {
    pub version: String,

    /// String that stands for the skip marker in `args`.
    #[serde(default = "default_skip")]
    pub skip: String,

    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub name: String,
    pub template: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

fn default_skip() -> String {
    DEFAULT_SKIP.to_string()
}

impl QueryFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("failed to read query file {}: {e}", path.display())
        })?;
        let file = Self::parse(&raw)
            .map_err(|e| anyhow::anyhow!("invalid query file {}: {e:#}", path.display()))?;
        tracing::info!(
            target: "sqltpl.cli",
            path = %path.display(),
            queries = file.queries.len(),
            "loaded query file"
        );
        Ok(file)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: QueryFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version != SUPPORTED_VERSION {
            anyhow::bail!(
                "unsupported version {:?} (expected {SUPPORTED_VERSION:?})",
                self.version
            );
        }
        if self.skip.is_empty() {
            anyhow::bail!("skip token must not be empty");
        }

        let mut seen = HashSet::new();
        for query in &self.queries {
            if query.name.trim().is_empty() {
                anyhow::bail!("query name must not be empty");
            }
            if !seen.insert(query.name.as_str()) {
                anyhow::bail!("duplicate query name: {}", query.name);
            }
        }
        Ok(())
    }

    /// Queries in file order, or only those named in `names` (in that order).
    pub fn select(&self, names: &[String]) -> anyhow::Result<Vec<&QueryConfig>> {
        if names.is_empty() {
            return Ok(self.queries.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.queries
                    .iter()
                    .find(|q| &q.name == name)
                    .ok_or_else(|| anyhow::anyhow!("no query named {name}"))
            })
            .collect()
    }
}

impl QueryConfig {
    pub fn args(&self, skip: &str) -> Vec<Arg> {
        self.args
            .iter()
            .cloned()
            .map(|v| Arg::from_json(v, skip))
            .collect()
    }

    pub fn render(&self, skip: &str) -> TemplateResult<String> {
        Template::parse(self.template.as_str())?.render(&self.args(skip))
    }
}
