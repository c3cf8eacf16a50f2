use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod config;
mod file_walker;
mod rewrite;

use rewrite::{Pipeline, RewriteArgs};

#[derive(Parser)]
#[command(name = "relocale")]
#[command(about = "Rewrite a static site from one service locale to another", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebrand page copy, contact details and structured data
    #[command(alias = "c")]
    Content(RewriteArgs),

    /// Fix navigation menus, dead links, zip codes and location heroes
    #[command(alias = "n")]
    Navigation(RewriteArgs),

    /// Set service and location page metadata, then sweep up leftovers
    #[command(alias = "f")]
    Finalize(RewriteArgs),

    /// Run every pass in order
    All(RewriteArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Content(args) => rewrite::execute(Pipeline::Content, args),
        Commands::Navigation(args) => rewrite::execute(Pipeline::Navigation, args),
        Commands::Finalize(args) => rewrite::execute(Pipeline::Finalize, args),
        Commands::All(args) => rewrite::execute(Pipeline::All, args),
    }
}
