use clap::Parser;
use foreman::cli::{
    assign, build_client, cost, create, handle_completions, handle_config_init, load_config, reset,
    table, tickets, triage, workers, Cli, Commands, ConfigCommands,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => foreman::cli::serve::run_serve(args).await,
        Commands::Tickets(args) => {
            run_view(args.config.clone(), |client| async move {
                tickets::handle_tickets(&args, &client).await
            })
            .await
        }
        Commands::Triage(args) => {
            run_view(args.config.clone(), |client| async move {
                triage::handle_triage(&args, &client).await
            })
            .await
        }
        Commands::Cost(args) => {
            run_view(args.config.clone(), |client| async move {
                cost::handle_cost(&args, &client).await
            })
            .await
        }
        Commands::Workers(args) => {
            run_view(args.config.clone(), |client| async move {
                workers::handle_workers(&args, &client).await
            })
            .await
        }
        Commands::Assign(args) => {
            run_view(args.config.clone(), |client| async move {
                assign::handle_assign(&args, &client).await
            })
            .await
        }
        Commands::Table(args) => {
            run_view(args.config.clone(), |client| async move {
                table::handle_table(&args, &client).await
            })
            .await
        }
        Commands::Create(args) => {
            run_view(args.config.clone(), |client| async move {
                create::handle_create(&args, &client).await
            })
            .await
        }
        Commands::Reset(args) => {
            run_view(args.config.clone(), |client| async move {
                reset::handle_reset(&args, &client).await
            })
            .await
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Run a one-shot view command: load config, build the upstream client,
/// print whatever the handler returns.
async fn run_view<F, Fut>(config_path: PathBuf, run: F) -> anyhow::Result<()>
where
    F: FnOnce(foreman::client::WorkforceClient) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<String>>,
{
    let config = load_config(&config_path);
    let client = build_client(&config)?;
    let output = run(client).await?;
    println!("{}", output);
    Ok(())
}
