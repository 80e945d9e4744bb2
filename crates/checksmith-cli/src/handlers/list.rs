use anyhow::Result;
use checksmith_runtime::{Config, discover};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Print the execution plan without running anything. Colors are dropped
/// when stdout is not a terminal, matching the run report.
pub fn handle(config: &Config) -> Result<i32> {
    let color = std::io::stdout().is_terminal();
    let plan = discover(&config.checks_dir)?;

    println!(
        "Discovered {} checks under {}",
        plan.total_checks(),
        config.checks_dir.display()
    );

    for category in &plan.categories {
        println!();
        let title = if color {
            category.name.bold().to_string()
        } else {
            category.name.clone()
        };

        if category.checks.is_empty() {
            println!("{} (no checks)", title);
            continue;
        }

        println!("{} ({} checks)", title, category.checks.len());
        for check in &category.checks {
            let path = check.path.display().to_string();
            let path = if color { path.bright_black().to_string() } else { path };
            println!("  {}  [{}]  {}", check.check_name(), check.interpreter, path);
        }
    }

    Ok(0)
}
