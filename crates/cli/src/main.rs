//! CLI entry point for BossBoard.
//!
//! Talks to the same REST API as the web dashboard.

mod render;
mod table;

use anyhow::{Context, Result};
use api_client::{BossBoardClient, ClientConfig, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use web_types::{DepartmentForm, TopUpForm, WorkerForm, fallback};

/// bossboard: payroll and treasury dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "bossboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the API, including the /api prefix
    #[arg(long, global = true, env = "BOSSBOARD_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Log every request
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show treasury, revenue, payroll and profit
    Dashboard,

    /// List or create departments
    Departments {
        #[command(subcommand)]
        command: DepartmentCommands,
    },

    /// List, add or toggle workers
    Workers {
        #[command(subcommand)]
        command: WorkerCommands,
    },

    /// Treasury balance, history and top-ups
    Treasury {
        #[command(subcommand)]
        command: TreasuryCommands,
    },

    /// Show payroll analytics
    Analytics,
}

#[derive(Subcommand, Debug)]
enum DepartmentCommands {
    /// List all departments
    List,
    /// Create a department
    Create {
        /// Department name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum WorkerCommands {
    /// List all workers
    List,
    /// Add a worker
    Add {
        #[arg(long)]
        name: String,

        /// Department ID (must be active)
        #[arg(long)]
        department: u32,

        /// Payout wallet, 0x followed by 40 hex characters
        #[arg(long)]
        wallet: String,

        /// Monthly salary in USDC
        #[arg(long)]
        salary: String,
    },
    /// Activate an inactive worker or deactivate an active one
    Toggle {
        /// Worker ID
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
enum TreasuryCommands {
    /// Show the current balance
    Balance,
    /// List treasury transactions
    History,
    /// Start a deposit, then re-read the balance once it has had time to settle
    TopUp {
        /// Amount in USDC
        amount: String,
    },
}

/// Turn a client failure into the message the user should see, keeping
/// the underlying error as its cause.
trait UserContext<T> {
    fn user_context(self, fallback: &str) -> Result<T>;
}

impl<T> UserContext<T> for api_client::Result<T> {
    fn user_context(self, fallback: &str) -> Result<T> {
        self.map_err(|e| {
            let message = e.user_message(fallback);
            anyhow::Error::new(e).context(message)
        })
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to encode JSON output")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(api_url = %cli.api_url, "starting");

    let client = BossBoardClient::new(ClientConfig::new(cli.api_url.clone()));

    match cli.command {
        Commands::Dashboard => show_dashboard(&client, cli.json).await?,
        Commands::Departments { command } => match command {
            DepartmentCommands::List => list_departments(&client, cli.json).await?,
            DepartmentCommands::Create { name } => {
                create_department(&client, name, cli.json).await?
            }
        },
        Commands::Workers { command } => match command {
            WorkerCommands::List => list_workers(&client, cli.json).await?,
            WorkerCommands::Add {
                name,
                department,
                wallet,
                salary,
            } => {
                let form = WorkerForm {
                    name,
                    department_id: department,
                    wallet,
                    salary,
                };
                add_worker(&client, &form, cli.json).await?
            }
            WorkerCommands::Toggle { id } => toggle_worker(&client, id, cli.json).await?,
        },
        Commands::Treasury { command } => match command {
            TreasuryCommands::Balance => show_balance(&client, cli.json).await?,
            TreasuryCommands::History => show_history(&client, cli.json).await?,
            TreasuryCommands::TopUp { amount } => top_up(&client, amount, cli.json).await?,
        },
        Commands::Analytics => show_analytics(&client, cli.json).await?,
    }

    Ok(())
}

async fn show_dashboard(client: &BossBoardClient, json: bool) -> Result<()> {
    let stats = client
        .dashboard_stats()
        .await
        .user_context(fallback::LOAD_DASHBOARD)?;

    if json {
        return print_json(&stats);
    }
    print!("{}", render::dashboard(&stats));
    Ok(())
}

async fn list_departments(client: &BossBoardClient, json: bool) -> Result<()> {
    let departments = client
        .departments()
        .await
        .user_context(fallback::LOAD_DEPARTMENTS)?;

    if json {
        return print_json(&departments);
    }
    print!("{}", render::departments(&departments));
    Ok(())
}

async fn create_department(client: &BossBoardClient, name: String, json: bool) -> Result<()> {
    let body = DepartmentForm { name }.validate()?;
    let created = client
        .create_department(&body)
        .await
        .user_context(fallback::CREATE_DEPARTMENT)?;

    if json {
        return print_json(&created);
    }
    println!("Created department {} (ID {})", created.name, created.id);
    Ok(())
}

async fn list_workers(client: &BossBoardClient, json: bool) -> Result<()> {
    let view = client
        .workers_view()
        .await
        .user_context(fallback::LOAD_WORKERS)?;

    if json {
        return print_json(&view.workers);
    }
    print!("{}", render::workers(&view));
    Ok(())
}

async fn add_worker(client: &BossBoardClient, form: &WorkerForm, json: bool) -> Result<()> {
    let body = form.validate()?;
    let created = client
        .create_worker(&body)
        .await
        .user_context(fallback::ADD_WORKER)?;

    if json {
        return print_json(&created);
    }
    println!(
        "Added worker {} (ID {}) at {} per month",
        created.name,
        created.id,
        created.salary_display()
    );
    Ok(())
}

async fn toggle_worker(client: &BossBoardClient, worker_id: u32, json: bool) -> Result<()> {
    let view = client
        .workers_view()
        .await
        .user_context(fallback::LOAD_WORKERS)?;
    let worker = view
        .find_worker(worker_id)
        .with_context(|| format!("Worker not found: {worker_id}"))?;

    client
        .toggle_worker(worker)
        .await
        .user_context(fallback::UPDATE_WORKER_STATUS)?;

    // Show what the server now reports rather than assuming the flip.
    let view = client
        .workers_view()
        .await
        .user_context(fallback::LOAD_WORKERS)?;
    let updated = view
        .find_worker(worker_id)
        .with_context(|| format!("Worker not found: {worker_id}"))?;

    if json {
        return print_json(updated);
    }
    println!("Worker {} is now {}", updated.name, updated.status_label());
    Ok(())
}

async fn show_balance(client: &BossBoardClient, json: bool) -> Result<()> {
    let balance = client
        .treasury_balance()
        .await
        .user_context(fallback::LOAD_TREASURY)?;

    if json {
        return print_json(&balance);
    }
    println!("Current balance: {}", balance.balance_formatted);
    Ok(())
}

async fn show_history(client: &BossBoardClient, json: bool) -> Result<()> {
    let transactions = client
        .treasury_transactions()
        .await
        .user_context(fallback::LOAD_TREASURY)?;

    if json {
        return print_json(&transactions);
    }
    print!("{}", render::transactions(&transactions));
    Ok(())
}

async fn top_up(client: &BossBoardClient, amount: String, json: bool) -> Result<()> {
    let request = TopUpForm { amount }.validate()?;
    if !json {
        eprintln!("Submitting top-up; the balance is re-read once the deposit has had time to settle...");
    }

    let (response, view) = client
        .top_up_then_refresh(request.amount, tokio::time::sleep)
        .await
        .user_context(fallback::TOP_UP)?;

    if json {
        return print_json(&serde_json::json!({
            "topUp": response,
            "balance": view.balance,
            "transactions": view.transactions,
        }));
    }
    println!("{}", response.display_message());
    println!("Current balance: {}", view.balance.balance_formatted);
    Ok(())
}

async fn show_analytics(client: &BossBoardClient, json: bool) -> Result<()> {
    let data = client
        .analytics()
        .await
        .user_context(fallback::LOAD_ANALYTICS)?;

    if json {
        return print_json(&data);
    }
    print!("{}", render::analytics(&data));
    Ok(())
}
