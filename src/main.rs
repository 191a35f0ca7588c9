use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clients_db::config;
use clients_db::db::{self, Database};
use clients_db::demo::{print_search_results, run_demo};
use clients_db::models::{ClientFilter, ClientPatch, NewClient};

#[derive(Parser)]
#[command(version, about = "Manage clients and their phone numbers in PostgreSQL")]
struct Cli {
    /// Database URL; defaults to DATABASE_URL from the environment or .env
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scripted walkthrough (default)
    Demo,
    /// Drop and recreate the clients and phones tables
    Init,
    /// Add a client with optional phone numbers
    AddClient {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "phone")]
        phones: Vec<String>,
    },
    /// Add a phone number to an existing client
    AddPhone { client_id: i32, phone: String },
    /// Change client fields and optionally replace its phone numbers
    ChangeClient {
        client_id: i32,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replace all phone numbers with these
        #[arg(long = "phone", conflicts_with = "clear_phones")]
        phones: Vec<String>,
        /// Remove every phone number of the client
        #[arg(long)]
        clear_phones: bool,
    },
    /// Remove a phone number from a client
    DeletePhone { client_id: i32, phone: String },
    /// Delete a client together with its phone numbers
    DeleteClient { client_id: i32 },
    /// Search clients; name and email accept ILIKE wildcards
    Find(FindArgs),
}

#[derive(Args)]
struct FindArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::init(cli.database_url)?;

    // Initialize database connection
    let db = db::init(&config)
        .await
        .context("failed to connect to the database")?;
    info!("database connection established");

    let result = run(&db, cli.command.unwrap_or(Command::Demo)).await;
    db.close().await;
    result
}

async fn run(db: &Database, command: Command) -> Result<()> {
    match command {
        Command::Demo => {
            run_demo(db).await.context("demo aborted")?;
        }
        Command::Init => {
            db.create_db().await?;
            println!("Database schema created.");
        }
        Command::AddClient {
            first_name,
            last_name,
            email,
            phones,
        } => {
            let client = NewClient {
                first_name,
                last_name,
                email,
                phones,
            };
            let client_id = db.add_client(&client).await?;
            println!("Client added with ID {client_id}");
        }
        Command::AddPhone { client_id, phone } => {
            db.add_phone(client_id, &phone)
                .await
                .with_context(|| format!("failed to add phone to client {client_id}"))?;
            println!("Phone {phone} added to client with ID {client_id}");
        }
        Command::ChangeClient {
            client_id,
            first_name,
            last_name,
            email,
            phones,
            clear_phones,
        } => {
            let phones = if clear_phones {
                Some(Vec::new())
            } else if phones.is_empty() {
                None
            } else {
                Some(phones)
            };
            let patch = ClientPatch {
                first_name,
                last_name,
                email,
                phones,
            };
            db.change_client(client_id, &patch).await?;
            println!("Client with ID {client_id} updated.");
        }
        Command::DeletePhone { client_id, phone } => {
            let deleted = db.delete_phone(client_id, &phone).await?;
            if deleted == 0 {
                println!("Phone {phone} not found for client with ID {client_id}.");
            } else {
                println!("Phone {phone} removed from client with ID {client_id}.");
            }
        }
        Command::DeleteClient { client_id } => {
            if db.delete_client(client_id).await? == 0 {
                println!("Client with ID {client_id} not found.");
            } else {
                println!("Client with ID {client_id} deleted.");
            }
        }
        Command::Find(args) => {
            let filter = ClientFilter {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                phone: args.phone,
            };
            let rows = db.find_client(&filter).await?;
            print_search_results(&rows);
        }
    }

    Ok(())
}
