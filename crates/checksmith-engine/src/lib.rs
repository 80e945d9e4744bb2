mod error;
pub mod infer;
pub mod protocol;
pub mod template;

pub use error::{Error, Result};
pub use infer::{MetadataOverrides, ResolvedMetadata, SectionedDescription};
pub use template::{Template, TemplateIssue, TemplateRegistry};
