use checksmith_types::InterpreterKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checksmith")]
#[command(about = "Discover, run, and scaffold environment verification checks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to checksmith.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Directory to discover checks in")]
    pub checks_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Per-check timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Path to the template registry document")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run discovered checks and report results (the default)")]
    Run {
        #[arg(long, help = "Only run checks in this category")]
        category: Option<String>,
    },

    #[command(about = "List discovered checks grouped by category, without executing")]
    List,

    #[command(about = "Inspect and validate check templates")]
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },

    #[command(about = "Generate a new check from a natural-language description")]
    Generate {
        #[arg(
            long,
            short = 'd',
            help = "Free-text description, ideally containing GIVEN/WHEN/THEN sections"
        )]
        description: String,

        #[arg(long, help = "Override the inferred group (must be a known category)")]
        group: Option<String>,

        #[arg(long, help = "Override the inferred service name")]
        service: Option<String>,

        #[arg(long, help = "Override the inferred test name")]
        test: Option<String>,

        #[arg(
            long,
            default_value = "bash",
            value_parser = parse_interpreter,
            help = "Interpreter used to pick a default template (bash, powershell, cmd)"
        )]
        interpreter: InterpreterKind,

        #[arg(long, help = "Explicit template identifier to use")]
        template_id: Option<String>,

        #[arg(long, help = "Directory where the check is created (defaults to the checks dir)")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing check with the same name")]
        force: bool,

        #[arg(long, help = "Print the rendered check without writing it")]
        dry_run: bool,

        #[arg(long, help = "Emit generation metadata as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateCommand {
    #[command(about = "List registered templates")]
    List,

    #[command(about = "Validate template integrity, reporting every issue")]
    Validate,
}

fn parse_interpreter(value: &str) -> Result<InterpreterKind, String> {
    value.parse()
}
