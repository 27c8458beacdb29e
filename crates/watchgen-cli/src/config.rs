use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "watchgen.toml";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Contract interfaces to generate queries for
    #[serde(default)]
    pub contracts: Vec<ContractSource>,

    /// Optional object schema, as a JSON definition list
    #[serde(default)]
    pub schema: Option<PathBuf>,

    /// Directory the descriptors are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// A contract interface file and the identifier its queries are grouped
/// under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractSource {
    pub name: String,
    pub path: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contracts: vec![],
            schema: None,
            output: default_output(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration file. Relative paths inside it are resolved
    /// against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;

        let config: Config = contents
            .parse()
            .with_context(|| format!("invalid config `{}`", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Add a contract interface
    pub fn contract(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.contracts.push(ContractSource {
            name: name.into(),
            path: path.into(),
        });
        self
    }

    /// Set the object schema path
    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    fn relative_to(mut self, base: &Path) -> Self {
        for contract in &mut self.contracts {
            contract.path = base.join(&contract.path);
        }

        if let Some(schema) = &mut self.schema {
            *schema = base.join(&*schema);
        }

        self.output = base.join(&self.output);
        self
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;

        let mut names = HashSet::new();
        for contract in &config.contracts {
            if !names.insert(contract.name.as_str()) {
                anyhow::bail!("contract `{}` is listed more than once", contract.name);
            }
        }

        Ok(config)
    }
}
