use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use watchgen_core::{query::Flags, Emit, Entity, Query};

/// Writes descriptors as pretty-printed JSON: one file per entity under
/// `entities/`, and a single `queries.json`.
#[derive(Debug)]
pub struct JsonEmitter {
    dir: PathBuf,

    /// Files written so far, in order
    written: Vec<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueriesFile<'a> {
    flags: Flags,
    queries: &'a [Query],
}

impl JsonEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: vec![],
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, path: PathBuf, value: &impl Serialize) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }

        let mut contents = serde_json::to_string_pretty(value)?;
        contents.push('\n');

        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write `{}`", path.display()))?;

        tracing::debug!(path = %path.display(), "wrote descriptor");
        self.written.push(path);
        Ok(())
    }
}

impl Emit for JsonEmitter {
    fn emit_entity(&mut self, entity: &Entity) -> watchgen_core::Result<()> {
        let path = entity_path(&self.dir, &entity.class_name);
        Ok(self.write(path, entity)?)
    }

    fn emit_queries(&mut self, queries: &[Query], flags: Flags) -> watchgen_core::Result<()> {
        let path = self.dir.join("queries.json");
        Ok(self.write(path, &QueriesFile { flags, queries })?)
    }
}

pub(crate) fn entity_path(dir: &Path, class_name: &str) -> PathBuf {
    dir.join("entities").join(format!("{class_name}.json"))
}
