//! Order Desk CLI - Customer order management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of orders
//! od-cli customers list
//!
//! # Search by name, sorted by date
//! od-cli customers list --search asha --sort date
//!
//! # Create, update and delete an order
//! od-cli customers create --id 7 --product Phone --name Asha \
//!     --date 2024-03-01 --amount 499 --payment "Bank Transfer"
//! od-cli customers update 7 --status Delivered
//! od-cli customers delete 7
//!
//! # Seed orders from a YAML file
//! od-cli seed customers.yaml
//! ```
//!
//! # Commands
//!
//! - `customers` - List, create, update and delete orders
//! - `seed` - Create orders from a YAML file, skipping existing ids

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use order_desk_core::{OrderStatus, PaymentMode, ProductName};
use order_desk_dashboard::SortColumn;
use rust_decimal::Decimal;

mod commands;

use commands::CliError;
use commands::customers::{CustomerChanges, ListOptions, NewCustomer};

#[derive(Parser)]
#[command(name = "od-cli")]
#[command(author, version, about = "Order Desk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customer orders
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Create customer orders from a YAML file
    Seed {
        /// Path to the YAML file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Show one page of orders
    List {
        /// Tracking id (numeric) or customer name to search for
        #[arg(short, long)]
        search: Option<String>,

        /// Sort column (`id`, `product`, `customer`, `date`)
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (5, 10 or 25 in the dashboard)
        #[arg(long, default_value_t = 5)]
        page_size: usize,
    },
    /// Create an order
    Create {
        /// Tracking id
        #[arg(long)]
        id: String,

        /// Product name
        #[arg(long)]
        product: String,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Order date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Amount
        #[arg(long)]
        amount: String,

        /// Payment mode (`Bank Transfer`, `Cash on Delivery`)
        #[arg(long)]
        payment: String,

        /// Status (`Process`, `Delivered`, `Canceled`)
        #[arg(long)]
        status: Option<String>,
    },
    /// Change fields of an existing order
    Update {
        /// Tracking id of the order to change
        id: String,

        /// Replace the tracking id
        #[arg(long)]
        new_id: Option<String>,

        #[arg(long)]
        product: Option<ProductName>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        amount: Option<Decimal>,

        #[arg(long)]
        payment: Option<PaymentMode>,

        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Delete an order
    Delete {
        /// Tracking id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = commands::api_client()?;

    match cli.command {
        Commands::Customers { action } => match action {
            CustomerAction::List {
                search,
                sort,
                desc,
                page,
                page_size,
            } => {
                let options = ListOptions {
                    search,
                    sort,
                    descending: desc,
                    page,
                    page_size,
                };
                commands::customers::list(api, options).await?;
            }
            CustomerAction::Create {
                id,
                product,
                name,
                date,
                amount,
                payment,
                status,
            } => {
                let customer = NewCustomer {
                    id,
                    product,
                    name,
                    date,
                    amount,
                    payment,
                    status,
                };
                commands::customers::create(api, customer).await?;
            }
            CustomerAction::Update {
                id,
                new_id,
                product,
                name,
                date,
                amount,
                payment,
                status,
            } => {
                let changes = CustomerChanges {
                    new_id,
                    product,
                    name,
                    date,
                    amount,
                    payment,
                    status,
                };
                commands::customers::update(api, &id, changes).await?;
            }
            CustomerAction::Delete { id } => {
                commands::customers::delete(api, &id).await?;
            }
        },
        Commands::Seed { file } => {
            commands::seed::customers(api, &file).await?;
        }
    }
    Ok(())
}
