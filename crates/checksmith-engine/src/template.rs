//! Declarative template registry backing the check generator.
//!
//! Templates are declared in a single JSON document next to the template
//! files. Validation reports every issue across every template in one
//! pass instead of aborting at the first failure, so one broken template
//! never hides another.

use crate::{Error, Result};
use checksmith_types::{InterpreterKind, is_known_category};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Placeholder names every template must declare and contain.
pub const REQUIRED_PLACEHOLDERS: [&str; 6] =
    ["TITLE", "GIVEN", "WHEN", "THEN", "CHECK_ID", "COMMAND_HINT"];

/// One registered check template.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub interpreter: InterpreterKind,
    pub extension: String,
    pub path: PathBuf,
    /// Applicable categories; empty means all.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub placeholders: Vec<String>,
}

impl Template {
    pub fn supports_group(&self, group: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == group)
    }
}

/// A single validation finding, tied to the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIssue {
    pub template_id: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    templates: Vec<Template>,
}

fn default_version() -> u32 {
    1
}

/// The loaded template catalogue. Template paths are resolved relative to
/// the registry document's directory.
#[derive(Debug)]
pub struct TemplateRegistry {
    version: u32,
    base_dir: PathBuf,
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::RegistryNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let document: RegistryDocument = serde_json::from_str(&content)?;
        let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        Ok(Self {
            version: document.version,
            base_dir,
            templates: document.templates,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template_path(&self, template: &Template) -> PathBuf {
        self.base_dir.join(&template.path)
    }

    /// Explicit id wins; otherwise the first registered template for the
    /// interpreter kind is the default.
    pub fn resolve(
        &self,
        template_id: Option<&str>,
        interpreter: InterpreterKind,
    ) -> Result<&Template> {
        if let Some(id) = template_id {
            return self
                .templates
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::TemplateNotFound(format!("id '{}'", id)));
        }

        self.templates
            .iter()
            .find(|t| t.interpreter == interpreter)
            .ok_or_else(|| Error::TemplateNotFound(format!("interpreter '{}'", interpreter)))
    }

    /// Validate every registered template, collecting all issues in one
    /// pass. An empty list means the registry is fully usable.
    pub fn validate(&self) -> Vec<TemplateIssue> {
        let mut issues = Vec::new();

        for template in &self.templates {
            let issue = |reason: String| TemplateIssue {
                template_id: template.id.clone(),
                reason,
            };

            if template.extension != template.interpreter.extension() {
                issues.push(issue(format!(
                    "extension mismatch: interpreter '{}' expects '{}', found '{}'",
                    template.interpreter,
                    template.interpreter.extension(),
                    template.extension
                )));
            }

            let missing_declared: Vec<&str> = REQUIRED_PLACEHOLDERS
                .into_iter()
                .filter(|required| !template.placeholders.iter().any(|p| p == required))
                .collect();
            if !missing_declared.is_empty() {
                issues.push(issue(format!(
                    "registry entry does not declare required placeholders: {}",
                    missing_declared.join(", ")
                )));
            }

            for category in &template.categories {
                if !is_known_category(category) {
                    issues.push(issue(format!("unsupported category '{}'", category)));
                }
            }

            let path = self.template_path(template);
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(_) => {
                    issues.push(issue(format!("template file missing: {}", path.display())));
                    continue;
                }
            };

            for placeholder in REQUIRED_PLACEHOLDERS {
                if !content.contains(&placeholder_token(placeholder)) {
                    issues.push(issue(format!(
                        "template body missing placeholder '{{{{{}}}}}'",
                        placeholder
                    )));
                }
            }

            if !(content.contains("GIVEN") && content.contains("WHEN") && content.contains("THEN"))
            {
                issues.push(issue(
                    "template body does not include GIVEN/WHEN/THEN guidance".to_string(),
                ));
            }
        }

        issues
    }

    /// Read and render a template body, substituting every placeholder.
    /// Rendering is all-or-nothing: a leftover `{{...}}` token is an
    /// error so no partially substituted check is ever written.
    pub fn render(&self, template: &Template, context: &HashMap<&str, String>) -> Result<String> {
        let mut content = std::fs::read_to_string(self.template_path(template))?;

        for (key, value) in context {
            content = content.replace(&placeholder_token(key), value);
        }

        if let Ok(leftover) = Regex::new(r"\{\{[A-Z0-9_]+\}\}")
            && let Some(m) = leftover.find(&content)
        {
            return Err(Error::UnrenderedPlaceholder(m.as_str().to_string()));
        }

        Ok(content)
    }
}

fn placeholder_token(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}
