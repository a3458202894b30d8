//! Panda Pantry CLI - drive the storefront flows from a terminal.
//!
//! One process run is one "tab": the store lives in a JSON file (see
//! `PANDA_STORE_FILE`), so state persists between runs and two concurrent
//! invocations against the same file behave like two tabs sharing one
//! browser profile.
//!
//! # Usage
//!
//! ```bash
//! # Register, then log in
//! panda-cli register -f "Ana Reyes" -u anar -e ana@example.com \
//!     -p secret1 -b 1990-05-14
//! panda-cli login ana@example.com secret1
//!
//! # Cart and session
//! panda-cli cart add 3 "Salmon kibble 2kg" 12990
//! panda-cli cart show
//! panda-cli session
//! panda-cli logout
//!
//! # Track an order against the remote bucket
//! panda-cli track PP-1042
//!
//! # Admin panel
//! panda-cli admin login admin admin
//! panda-cli admin status PP-1042 shipped
//! panda-cli persons list
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "panda-cli")]
#[command(author, version, about = "Panda Pantry CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a user (overwrites any previously registered record)
    Register {
        /// Full display name
        #[arg(short, long)]
        full_name: String,

        /// Login handle
        #[arg(short, long)]
        username: String,

        /// Email address (the login identifier)
        #[arg(short, long)]
        email: String,

        /// Password (stored as-is; this storefront keeps it in plaintext)
        #[arg(short, long)]
        password: String,

        /// Password confirmation (defaults to the password)
        #[arg(short, long)]
        confirm_password: Option<String>,

        /// Birth date, `YYYY-MM-DD` (age must be 13 to 100)
        #[arg(short, long)]
        birth_date: String,

        /// Street address (optional)
        #[arg(short, long)]
        address: Option<String>,
    },
    /// Log in with an email (or the admin shortcut) and password
    Login {
        /// Email address, or the admin alias
        identifier: String,
        /// Password
        password: String,
    },
    /// Log out (the registered record is kept)
    Logout,
    /// Show the current session state
    Session,
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Track an order by tracking number against the remote bucket
    Track {
        /// Tracking number
        number: String,
    },
    /// Admin panel operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Remote person directory operations
    Persons {
        #[command(subcommand)]
        action: PersonsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product (merges on product id)
    Add {
        /// Product id
        id: i64,
        /// Product name
        name: String,
        /// Unit price
        price: String,
    },
    /// Show the cart contents and count
    Show,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Log in as admin
    Login {
        /// Admin username
        username: String,
        /// Admin password
        password: String,
    },
    /// Update an order's status in the local purchase collection
    Status {
        /// Tracking number
        number: String,
        /// New status
        status: String,
    },
    /// Register a user into the admin directory (`usuarios`)
    Register {
        /// Full display name
        #[arg(short, long)]
        full_name: String,

        /// Login handle
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Birth date, `YYYY-MM-DD`
        #[arg(short, long)]
        birth_date: String,

        /// Role (`customer` or `admin`)
        #[arg(short, long, default_value = "customer")]
        role: String,
    },
    /// Drop the admin session
    Logout,
}

#[derive(Subcommand)]
enum PersonsAction {
    /// List the remote person directory
    List,
    /// Append a person and overwrite the remote document
    Add {
        /// Display name
        name: String,
        /// Contact email (optional)
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Register {
            full_name,
            username,
            email,
            password,
            confirm_password,
            birth_date,
            address,
        } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            commands::account::register(
                &full_name,
                &username,
                &email,
                &password,
                &confirm,
                &birth_date,
                address.as_deref(),
            )?;
        }
        Commands::Login {
            identifier,
            password,
        } => commands::account::login(&identifier, &password)?,
        Commands::Logout => commands::account::logout()?,
        Commands::Session => commands::account::session()?,
        Commands::Cart { action } => match action {
            CartAction::Add { id, name, price } => commands::cart::add(id, &name, &price)?,
            CartAction::Show => commands::cart::show()?,
        },
        Commands::Track { number } => commands::track::track(&number).await?,
        Commands::Admin { action } => match action {
            AdminAction::Login { username, password } => {
                commands::admin::login(&username, &password)?;
            }
            AdminAction::Status { number, status } => {
                commands::admin::update_status(&number, &status)?;
            }
            AdminAction::Register {
                full_name,
                username,
                email,
                password,
                birth_date,
                role,
            } => {
                commands::admin::register(
                    &full_name,
                    &username,
                    &email,
                    &password,
                    &birth_date,
                    &role,
                )?;
            }
            AdminAction::Logout => commands::admin::logout()?,
        },
        Commands::Persons { action } => match action {
            PersonsAction::List => commands::persons::list().await?,
            PersonsAction::Add { name, email } => {
                commands::persons::add(&name, email.as_deref()).await?;
            }
        },
    }
    Ok(())
}
