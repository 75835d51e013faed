use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a subject text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Label used for `path` in output records and warnings.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_owned(),
        }
    }

    /// One source per path, or stdin when no path was given.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths.iter().cloned().map(Self::File).collect()
    }
}

/// A UTF-8 subject text together with the hash of its bytes.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub path: String,
    pub content: String,
    pub input_hash: String,
}

impl TextInput {
    pub fn open(path: &Path) -> Result<Self, String> {
        let bytes = fs::read(path)
            .map_err(|error| format!("failed to read input '{}': {error}", path.display()))?;
        Self::from_bytes(path.display().to_string(), bytes)
    }

    pub fn from_reader(label: &str, reader: &mut dyn Read) -> Result<Self, String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|error| format!("failed to read input '{label}': {error}"))?;
        Self::from_bytes(label.to_owned(), bytes)
    }

    pub fn load(source: &InputSource) -> Result<Self, String> {
        match source {
            InputSource::File(path) => Self::open(path),
            InputSource::Stdin => Self::from_reader("stdin", &mut std::io::stdin().lock()),
        }
    }

    fn from_bytes(path: String, bytes: Vec<u8>) -> Result<Self, String> {
        let input_hash = format!("blake3:{}", blake3::hash(&bytes).to_hex());
        let content = String::from_utf8(bytes)
            .map_err(|error| format!("input '{path}' is not valid UTF-8: {error}"))?;
        Ok(Self {
            path,
            content,
            input_hash,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
