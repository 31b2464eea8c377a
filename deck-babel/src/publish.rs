//! Serialize a render tree and hand back the artifact, in memory or on disk

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use deck::deck::render::RenderTree;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub tree: &'a RenderTree,
    pub format: &'a str,
    pub output: Option<PathBuf>,
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(tree: &'a RenderTree, format: &'a str) -> Self {
        Self {
            tree,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Write to `<dir>/<name>.<ext>`, where `ext` is the format's preferred extension
    pub fn with_output_dir(
        self,
        dir: impl AsRef<Path>,
        name: &str,
    ) -> Result<Self, FormatError> {
        let path = output_path(&FormatRegistry::with_defaults(), self.format, dir, name)?;
        Ok(self.with_output_path(path))
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds every option, replacing keys already set
    pub fn with_options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options
            .extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// `<dir>/<name>.<ext>` for a registered format
pub fn output_path(
    registry: &FormatRegistry,
    format: &str,
    dir: impl AsRef<Path>,
    name: &str,
) -> Result<PathBuf, FormatError> {
    let extension = registry.extension(format)?;
    Ok(dir.as_ref().join(format!("{name}.{extension}")))
}

pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.tree, spec.format, &spec.options)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    let io_error = |source| FormatError::Io {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&path, text.as_bytes()).map_err(io_error)?;
    info!(path = %path.display(), bytes = text.len(), "wrote artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck::deck::pipeline::compile;
    use deck::deck::testing::sample_deck;
    use tempfile::tempdir;

    fn sample_tree() -> RenderTree {
        compile(&sample_deck()).unwrap().tree
    }

    #[test]
    fn publishes_to_memory_when_no_output_path() {
        let tree = sample_tree();
        let result = publish(PublishSpec::new(&tree, "html")).expect("publish");
        match result.artifact {
            PublishArtifact::InMemory(content) => {
                assert!(content.contains("ACME Corp"));
            }
            PublishArtifact::File(_) => panic!("expected in-memory artifact"),
        }
    }

    #[test]
    fn writes_to_disk_when_output_dir_provided() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let tree = sample_tree();
        let result = publish(
            PublishSpec::new(&tree, "html")
                .with_output_dir(&out, "talk")
                .unwrap(),
        )
        .expect("publish");

        let expected = out.join("talk.html");
        assert_eq!(result.artifact, PublishArtifact::File(expected.clone()));
        let contents = fs::read_to_string(expected).unwrap();
        assert!(contents.contains(r#"<section id="intro""#));
    }

    #[test]
    fn options_reach_the_format() {
        let tree = sample_tree();
        let result = publish(PublishSpec::new(&tree, "html").with_option("title", "Override"))
            .expect("publish");
        let PublishArtifact::InMemory(content) = result.artifact else {
            panic!("expected in-memory artifact");
        };
        assert!(content.contains("<title>Override</title>"));
    }

    #[test]
    fn json_output_uses_json_extension() {
        let registry = FormatRegistry::with_defaults();
        let path = output_path(&registry, "json", "/tmp/out", "deck").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out/deck.json"));
    }

    #[test]
    fn unknown_format_is_reported() {
        let tree = sample_tree();
        let err = publish(PublishSpec::new(&tree, "pdf")).unwrap_err();
        assert!(matches!(err, FormatError::FormatNotFound(name) if name == "pdf"));
    }
}
