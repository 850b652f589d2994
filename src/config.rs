use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::GenError;

pub const CONFIG_FILE_NAME: &str = "blockgen.toml";

/// Rendering options, read from the `[output]` table of `blockgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Name of the synthesized function.
    pub function_name: String,
    /// Spaces per nesting level.
    pub indent_width: usize,
    pub semicolons: bool,
    /// Emit block comments as `//` lines.
    pub comments: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            function_name: "generatedFunction".to_string(),
            indent_width: 4,
            semicolons: true,
            comments: true,
        }
    }
}

impl GeneratorConfig {
    /// Parse config text; `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, GenError> {
        let config: GeneratorConfig = toml::from_str(content).map_err(|e| {
            GenError::config(format!("{CONFIG_FILE_NAME}: invalid syntax: {e}"), path.to_path_buf())
        })?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GenError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::config(format!("{CONFIG_FILE_NAME}: could not read file: {e}"), path.to_path_buf())
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), GenError> {
        if self.output.indent_width == 0 {
            return Err(GenError::config(
                format!("{CONFIG_FILE_NAME}: output.indent_width must be at least 1"),
                path.to_path_buf(),
            ));
        }
        let name = &self.output.function_name;
        let valid_ident = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
        if !valid_ident {
            return Err(GenError::config(
                format!("{CONFIG_FILE_NAME}: output.function_name '{name}' is not a valid identifier"),
                path.to_path_buf(),
            ));
        }
        Ok(())
    }
}

/// Walk from start_dir up to .git or FS root, looking for blockgen.toml.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}
