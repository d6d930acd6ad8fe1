//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to the core
//! services. All CLI code uses CliContext for dependency access; no
//! direct storage access outside of bootstrap.

use clap::Parser;

use wardrobe_cli::{bootstrap, handlers, Cli, CliConfig, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Bootstrap the CLI context (composition root)
    let config = match cli.data_dir {
        Some(dir) => CliConfig {
            data_dir: dir.into(),
        },
        None => CliConfig::with_defaults()?,
    };
    let ctx = bootstrap(config).await?;

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        wardrobe_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::List => {
            handlers::list::execute(&ctx).await?;
        }
        Commands::Add {
            name,
            kind,
            color,
            image_url,
            brand,
            description,
            price,
            source_url,
        } => {
            let args = handlers::add::AddArgs {
                name,
                kind,
                color,
                image_url,
                brand,
                description,
                price,
                source_url,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::Remove { id } => {
            handlers::remove::execute(&ctx, &id).await?;
        }
        Commands::Update {
            id,
            name,
            kind,
            color,
            image_url,
            brand,
            price,
        } => {
            let args = handlers::update::UpdateArgs {
                id,
                name,
                kind,
                color,
                image_url,
                brand,
                price,
            };
            handlers::update::execute(&ctx, args).await?;
        }
        Commands::Filter {
            kind,
            color,
            brand,
            min_price,
            max_price,
        } => {
            handlers::filter::execute(&ctx, kind, color, brand, min_price, max_price).await?;
        }
        Commands::Select { command } => {
            handlers::select::execute(&ctx, command).await?;
        }
        Commands::Outfit { command } => {
            handlers::outfit::execute(&ctx, command).await?;
        }
        Commands::Generate {
            base_image,
            output,
            token,
        } => {
            handlers::generate::execute(&ctx, &base_image, &output, token.as_deref()).await?;
        }
        Commands::Token { command } => {
            handlers::token::execute(&ctx, command).await?;
        }
    }

    Ok(())
}
