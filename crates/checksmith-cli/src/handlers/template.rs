use anyhow::Result;
use checksmith_engine::TemplateRegistry;
use checksmith_runtime::Config;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn list(config: &Config) -> Result<i32> {
    let registry = TemplateRegistry::load(&config.registry_path)?;

    println!("Template registry version: {}", registry.version());
    for template in registry.templates() {
        let categories = if template.categories.is_empty() {
            "(all)".to_string()
        } else {
            template.categories.join(", ")
        };

        println!();
        println!("ID: {}", template.id);
        println!("  Label       : {}", template.label);
        if !template.description.is_empty() {
            println!("  Description : {}", template.description);
        }
        println!(
            "  Interpreter : {} (.{})",
            template.interpreter, template.extension
        );
        println!("  Path        : {}", registry.template_path(template).display());
        println!("  Categories  : {}", categories);
        println!("  Placeholders: {}", template.placeholders.join(", "));
    }

    Ok(0)
}

pub fn validate(config: &Config) -> Result<i32> {
    let color = std::io::stdout().is_terminal();
    let registry = TemplateRegistry::load(&config.registry_path)?;
    let issues = registry.validate();

    for template in registry.templates() {
        let findings: Vec<_> = issues
            .iter()
            .filter(|issue| issue.template_id == template.id)
            .collect();

        if findings.is_empty() {
            if color {
                println!("Template {}: {}", template.id, "OK".green());
            } else {
                println!("Template {}: OK", template.id);
            }
        } else {
            if color {
                println!("Template {} issues:", template.id.bold());
            } else {
                println!("Template {} issues:", template.id);
            }
            for finding in findings {
                if color {
                    println!("  {} {}", "-".red(), finding.reason);
                } else {
                    println!("  - {}", finding.reason);
                }
            }
        }
    }

    if issues.is_empty() {
        println!("All templates validated successfully.");
        Ok(0)
    } else {
        Ok(1)
    }
}
