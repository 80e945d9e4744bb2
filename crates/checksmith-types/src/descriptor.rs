use crate::{CATEGORIES, Error, InterpreterKind, Result};
use std::path::{Path, PathBuf};

/// Identity and metadata for one discovered check file. Created at
/// discovery time and immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDescriptor {
    pub path: PathBuf,
    pub group: String,
    pub service: String,
    pub test: String,
    pub interpreter: InterpreterKind,
}

impl CheckDescriptor {
    /// Parse a check file path against the `{group}-{service}-{test}.{ext}`
    /// protocol. Category names may themselves contain hyphens
    /// (platform-integration), so known categories are matched as literal
    /// prefixes before falling back to the first hyphen-delimited token.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidCheckName(path.display().to_string()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::InvalidCheckName(file_name.to_string()))?;
        let interpreter = InterpreterKind::from_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        let stem = &file_name[..file_name.len() - ext.len() - 1];

        let (group, rest) = split_group(stem)
            .ok_or_else(|| Error::InvalidCheckName(file_name.to_string()))?;
        let (service, test) = rest
            .split_once('-')
            .filter(|(service, test)| !service.is_empty() && !test.is_empty())
            .ok_or_else(|| Error::InvalidCheckName(file_name.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            group: group.to_string(),
            service: service.to_string(),
            test: test.to_string(),
            interpreter,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.check_name(), self.interpreter.extension())
    }

    /// Hyphenated name as it appears in the file name.
    pub fn check_name(&self) -> String {
        format!("{}-{}-{}", self.group, self.service, self.test)
    }

    /// Underscored identifier matching what generated checks report.
    pub fn check_id(&self) -> String {
        format!("{}_{}_{}", self.group, self.service, self.test)
    }
}

fn split_group(stem: &str) -> Option<(&str, &str)> {
    for category in CATEGORIES {
        if let Some(rest) = stem.strip_prefix(category)
            && let Some(rest) = rest.strip_prefix('-')
        {
            return Some((category, rest));
        }
    }
    stem.split_once('-').filter(|(group, _)| !group.is_empty())
}
