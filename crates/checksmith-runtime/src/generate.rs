//! Check scaffolding.
//!
//! Binds resolved metadata to a registered template, renders it, and
//! writes the new check file atomically (tempfile-then-rename in the
//! target directory) so a crash can never leave a half-written check.
//! The generator scaffolds structure only; the placeholder logic inside
//! the rendered file still has to be authored by a human.

use crate::{Error, Result};
use checksmith_engine::{MetadataOverrides, ResolvedMetadata, TemplateRegistry};
use checksmith_types::InterpreterKind;
use checksmith_types::util::title_case;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub description: String,
    pub overrides: MetadataOverrides,
    pub interpreter: InterpreterKind,
    pub template_id: Option<String>,
    pub output_dir: PathBuf,
    pub force: bool,
    pub dry_run: bool,
}

/// Metadata and content of one scaffolded check.
#[derive(Debug, Clone)]
pub struct GeneratedCheck {
    pub path: PathBuf,
    pub template_id: String,
    pub registry_version: u32,
    pub group: String,
    pub service: String,
    pub test: String,
    pub check_id: String,
    pub rendered: String,
    /// False for dry runs, where nothing touches the filesystem.
    pub written: bool,
}

pub fn generate(registry: &TemplateRegistry, request: &GenerationRequest) -> Result<GeneratedCheck> {
    let metadata = ResolvedMetadata::resolve(&request.description, &request.overrides)?;

    let template = registry.resolve(request.template_id.as_deref(), request.interpreter)?;
    if !template.supports_group(&metadata.group) {
        return Err(checksmith_engine::Error::CategoryNotSupported {
            template_id: template.id.clone(),
            group: metadata.group.clone(),
            supported: template.categories.clone(),
        }
        .into());
    }

    let check_id = metadata.check_id();
    let context = HashMap::from([
        (
            "TITLE",
            title_case(&[
                metadata.group.as_str(),
                metadata.service.as_str(),
                metadata.test.as_str(),
            ]),
        ),
        ("GIVEN", metadata.sections.given.clone()),
        ("WHEN", metadata.sections.when.clone()),
        ("THEN", metadata.sections.then.clone()),
        ("CHECK_ID", check_id.clone()),
        ("COMMAND_HINT", template.interpreter.command_hint().to_string()),
    ]);
    let rendered = registry.render(template, &context)?;

    let file_name = format!("{}.{}", metadata.file_stem(), template.extension);
    let path = request.output_dir.join(file_name);

    if path.exists() && !request.force {
        return Err(Error::Collision(path));
    }

    if !request.dry_run {
        write_atomically(&path, &rendered, template.interpreter)?;
    }

    Ok(GeneratedCheck {
        path,
        template_id: template.id.clone(),
        registry_version: registry.version(),
        group: metadata.group,
        service: metadata.service,
        test: metadata.test,
        check_id,
        rendered,
        written: !request.dry_run,
    })
}

fn write_atomically(
    path: &std::path::Path,
    content: &str,
    interpreter: InterpreterKind,
) -> Result<()> {
    let dir = path.parent().unwrap_or(std::path::Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.flush()?;

    #[cfg(unix)]
    if interpreter.needs_executable_bit() {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o755);
        std::fs::set_permissions(staged.path(), permissions)?;
    }
    #[cfg(not(unix))]
    let _ = interpreter;

    staged.persist(path).map_err(|err| Error::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksmith_engine::TemplateRegistry;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE_BODY: &str = "#!/usr/bin/env bash\n\
        # {{TITLE}}\n\
        # GIVEN: {{GIVEN}}\n\
        # WHEN: {{WHEN}}\n\
        # THEN: {{THEN}}\n\
        CHECK_ID=\"{{CHECK_ID}}\"\n\
        echo \"PASS|${CHECK_ID}|placeholder|{{COMMAND_HINT}}\"\n";

    fn registry_in(dir: &TempDir) -> TemplateRegistry {
        let templates_dir = dir.path().join("templates");
        fs::create_dir_all(&templates_dir).unwrap();
        fs::write(templates_dir.join("bash-default.sh.tmpl"), TEMPLATE_BODY).unwrap();
        let registry_path = templates_dir.join("registry.json");
        fs::write(
            &registry_path,
            r#"{"version": 3, "templates": [{
                "id": "bash-default", "label": "Bash default", "interpreter": "bash",
                "extension": "sh", "path": "bash-default.sh.tmpl", "categories": [],
                "placeholders": ["TITLE", "GIVEN", "WHEN", "THEN", "CHECK_ID", "COMMAND_HINT"]}]}"#,
        )
        .unwrap();
        TemplateRegistry::load(&registry_path).unwrap()
    }

    fn request(dir: &TempDir) -> GenerationRequest {
        GenerationRequest {
            description: "security check for redis authentication validation \
                GIVEN a redis instance WHEN pinged without auth THEN the connection is rejected"
                .to_string(),
            overrides: MetadataOverrides::default(),
            interpreter: InterpreterKind::PosixShell,
            template_id: None,
            output_dir: dir.path().join("checks"),
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_generate_writes_rendered_check() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);

        let generated = generate(&registry, &request(&dir)).unwrap();
        assert_eq!(generated.check_id, "security_redis_authentication");
        assert_eq!(generated.registry_version, 3);
        assert!(generated.written);

        let content = fs::read_to_string(&generated.path).unwrap();
        assert!(content.contains("# Security Redis Authentication"));
        assert!(content.contains("CHECK_ID=\"security_redis_authentication\""));
        assert!(!content.contains("{{"));
        assert!(
            generated
                .path
                .file_name()
                .is_some_and(|n| n == "security-redis-authentication.sh")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_generated_shell_check_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        let generated = generate(&registry, &request(&dir)).unwrap();

        let mode = fs::metadata(&generated.path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "expected executable bit, mode {mode:o}");
    }

    #[test]
    fn test_second_generation_collides_without_force() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        let request = request(&dir);

        let first = generate(&registry, &request).unwrap();
        let original = fs::read_to_string(&first.path).unwrap();

        let err = generate(&registry, &request).unwrap_err();
        assert!(matches!(err, Error::Collision(_)));
        // Failed attempt must not touch the existing file
        assert_eq!(fs::read_to_string(&first.path).unwrap(), original);

        let forced = GenerationRequest { force: true, ..request };
        assert!(generate(&registry, &forced).is_ok());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        let request = GenerationRequest { dry_run: true, ..request(&dir) };

        let generated = generate(&registry, &request).unwrap();
        assert!(!generated.written);
        assert!(!generated.path.exists());
        assert!(generated.rendered.contains("Security Redis Authentication"));
    }

    #[test]
    fn test_inference_failure_names_fields() {
        let dir = TempDir::new().unwrap();
        let registry = registry_in(&dir);
        let request = GenerationRequest {
            description: "GIVEN something WHEN it runs THEN it works".to_string(),
            ..request(&dir)
        };

        let err = generate(&registry, &request).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("group"));
        assert!(!dir.path().join("checks").exists());
    }
}
