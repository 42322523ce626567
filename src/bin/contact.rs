//! Command-line contact form for contact-relay.
//!
//! Prompts for the form fields (or takes them as flags), submits them to a
//! running server, and offers to resend with the same input on failure.
//!
//! # Usage
//!
//! ```bash
//! # Interactive
//! cargo run --bin contact
//!
//! # Non-interactive
//! cargo run --bin contact -- --url https://example.com \
//!     --name "Alice" --email alice@example.com --message "Hello!" --yes
//!
//! # Check that the endpoint is reachable
//! cargo run --bin contact -- probe
//! ```

use contact_relay::client::{ContactClient, ContactForm, SUCCESS_MESSAGE};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use url::Url;

/// Send a message through a contact-relay server.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the site
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Honeypot field name expected by the server
    #[arg(long, default_value = "website")]
    honeypot_field: String,

    /// Your name
    #[arg(short, long)]
    name: Option<String>,

    /// Your email address (replies go here)
    #[arg(short, long)]
    email: Option<String>,

    /// Message text
    #[arg(short, long)]
    message: Option<String>,

    /// Send without confirmation and do not offer to retry
    #[arg(short = 'y', long)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Call GET /api/send-email and print the response
    Probe,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base = Url::parse(&cli.url).with_context(|| format!("Invalid --url '{}'", cli.url))?;
    let client = ContactClient::new(&base, cli.honeypot_field.clone())?;

    match cli.command {
        Some(Commands::Probe) => probe(&client).await,
        None => send(&client, &cli).await,
    }
}

/// Prints the probe response of the endpoint.
async fn probe(client: &ContactClient) -> Result<()> {
    println!("{} {}", "GET".bright_blue().bold(), client.endpoint());

    let body = reqwest::get(client.endpoint().clone())
        .await
        .context("Endpoint unreachable")?
        .text()
        .await?;

    println!("{}", body.bright_black());
    Ok(())
}

/// Collects the fields, submits, and loops on failure until the user gives up.
///
/// # Flow
///
/// 1. Prompt for missing fields (flags pre-fill them)
/// 2. Confirm (unless `--yes`)
/// 3. Submit once
/// 4. Success: print acknowledgment, form is cleared
/// 5. Failure: print the server's message and offer to edit and resend
async fn send(client: &ContactClient, cli: &Cli) -> Result<()> {
    println!("{}", "✉️  Contact".bright_blue().bold());
    println!();

    let mut form = ContactForm::new(
        cli.name.clone().unwrap_or_default(),
        cli.email.clone().unwrap_or_default(),
        cli.message.clone().unwrap_or_default(),
    );

    let interactive = !cli.yes;
    let mut first_attempt = true;

    loop {
        if interactive || form.name.trim().is_empty() {
            form.name = prompt("Name", &form.name)?;
        }
        if interactive || form.email.trim().is_empty() {
            form.email = prompt("Email", &form.email)?;
        }
        if interactive || form.message.trim().is_empty() {
            form.message = prompt("Message", &form.message)?;
        }

        if interactive && first_attempt {
            println!();
            println!("  From:    {} <{}>", form.name.cyan(), form.email.cyan());
            println!("  Message: {}", form.message.bright_black());
            println!();

            let confirmed = Confirm::new()
                .with_prompt("Send this message?")
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }
        first_attempt = false;

        match client.submit_and_reset(&mut form).await {
            Ok(_) => {
                println!();
                println!("{}", format!("✅ {SUCCESS_MESSAGE}").green().bold());
                println!();
                return Ok(());
            }
            Err(e) => {
                println!();
                println!("{}", format!("⚠️  {}", e.user_message()).yellow());
                println!();

                if !interactive {
                    anyhow::bail!(e);
                }

                let retry = Confirm::new()
                    .with_prompt("Edit and try again?")
                    .default(true)
                    .interact()?;

                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

/// Prompts for one field, pre-filled with its current value.
fn prompt(label: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current)
        .interact_text()?;

    Ok(value)
}
