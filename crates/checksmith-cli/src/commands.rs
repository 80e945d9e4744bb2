use super::args::{Cli, Commands, TemplateCommand};
use super::handlers;
use anyhow::Result;
use checksmith_runtime::{Config, ConfigOverrides};

/// Dispatch the parsed CLI to its handler. Returns the process exit code;
/// hard errors propagate and are printed by main.
pub fn run(cli: Cli) -> Result<i32> {
    let overrides = ConfigOverrides {
        checks_dir: cli.checks_dir,
        registry_path: cli.registry,
        timeout_secs: cli.timeout,
    };
    let config = Config::resolve(cli.config.as_deref(), &overrides)?;

    match cli.command.unwrap_or(Commands::Run { category: None }) {
        Commands::Run { category } => handlers::run::handle(&config, category.as_deref()),

        Commands::List => handlers::list::handle(&config),

        Commands::Template { command } => match command {
            TemplateCommand::List => handlers::template::list(&config),
            TemplateCommand::Validate => handlers::template::validate(&config),
        },

        Commands::Generate {
            description,
            group,
            service,
            test,
            interpreter,
            template_id,
            output_dir,
            force,
            dry_run,
            json,
        } => handlers::generate::handle(
            &config,
            handlers::generate::GenerateArgs {
                description,
                group,
                service,
                test,
                interpreter,
                template_id,
                output_dir,
                force,
                dry_run,
                json,
            },
        ),
    }
}
