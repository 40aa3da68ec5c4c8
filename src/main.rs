use clap::Parser;

use cerberus::cli::{account, check, dashboard, output, status, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login(args) => account::login(args.config).await,
        Commands::Register(args) => account::register(args.config).await,
        Commands::Logout(args) => account::logout(args.config).await,
        Commands::Dashboard(args) => dashboard::show(args.config, args.tab).await,
        Commands::Status(args) => status::show(args.config).await,
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => check::config(args.config),
            CheckCommand::Health(args) => check::health(args.config).await,
        },
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
