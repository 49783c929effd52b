use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfgstore::cli::{self, Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cfgstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        cli::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dir = cli::commands::resolve_dir(cli.base_dir)?;

    match cli.command {
        Commands::Init => cli::commands::init(&dir),
        Commands::Create { name, no_default } => cli::commands::create(&dir, &name, no_default),
        Commands::Show { name, format } => cli::commands::show(&dir, &name, format),
        Commands::Get { name, key } => cli::commands::get(&dir, &name, &key),
        Commands::Set { name, key, value } => cli::commands::set(&dir, &name, &key, &value),
        Commands::Unset { name, key } => cli::commands::unset(&dir, &name, &key),
        Commands::List => cli::commands::list(&dir),
        Commands::Defaults => cli::commands::defaults(),
        Commands::Reset { name, force } => cli::commands::reset(&dir, &name, force),
        Commands::Path { name } => cli::commands::path(&dir, &name),
    }
}
