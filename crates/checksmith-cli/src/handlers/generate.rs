use anyhow::Result;
use checksmith_engine::{MetadataOverrides, TemplateRegistry};
use checksmith_runtime::{Config, GenerationRequest, generate};
use checksmith_types::InterpreterKind;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub struct GenerateArgs {
    pub description: String,
    pub group: Option<String>,
    pub service: Option<String>,
    pub test: Option<String>,
    pub interpreter: InterpreterKind,
    pub template_id: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
    pub json: bool,
}

pub fn handle(config: &Config, args: GenerateArgs) -> Result<i32> {
    let registry = TemplateRegistry::load(&config.registry_path)?;

    let request = GenerationRequest {
        description: args.description,
        overrides: MetadataOverrides {
            group: args.group,
            service: args.service,
            test: args.test,
        },
        interpreter: args.interpreter,
        template_id: args.template_id,
        output_dir: args.output_dir.unwrap_or_else(|| config.checks_dir.clone()),
        force: args.force,
        dry_run: args.dry_run,
    };

    let generated = generate(&registry, &request)?;

    if args.dry_run {
        print!("{}", generated.rendered);
        return Ok(0);
    }

    if args.json {
        let metadata = serde_json::json!({
            "registry_version": generated.registry_version,
            "template_id": generated.template_id,
            "group": generated.group,
            "service": generated.service,
            "test": generated.test,
            "check_id": generated.check_id,
            "file": generated.path,
        });
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(0);
    }

    let color = std::io::stdout().is_terminal();
    let path = generated.path.display().to_string();
    let path = if color { path.green().to_string() } else { path };
    println!("Generated check: {}", path);
    println!("  Template : {}", generated.template_id);
    println!("  Group    : {}", generated.group);
    println!("  Service  : {}", generated.service);
    println!("  Test     : {}", generated.test);
    let reminder = "Update the placeholder logic before running the orchestrator.";
    if color {
        println!("  Reminder : {}", reminder.yellow());
    } else {
        println!("  Reminder : {}", reminder);
    }

    Ok(0)
}
