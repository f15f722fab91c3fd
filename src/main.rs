use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vendor_hours::{
    api::BackendClient,
    config::AppConfig,
    consolidate::consolidate,
    context::AppContext,
    export::write_schedule_csv,
    timings::WeeklyTimings,
    validation::{validate_email, validate_name, validate_phone, validate_timings},
};

#[derive(Parser, Debug)]
#[command(name = "vendor-hours")]
#[command(about = "Admin tooling for vendor opening hours")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the consolidated weekly schedule from a timings JSON file
    Show {
        /// Path to a weekly timings JSON file
        file: PathBuf,
        /// Fill blank times on open days with the configured defaults
        #[arg(long)]
        fill_defaults: bool,
    },
    /// Validate a vendor record JSON file
    Check {
        /// Path to a vendor record JSON file
        file: PathBuf,
    },
    /// Fetch a vendor from the backend and print its schedule
    Fetch {
        /// Vendor id
        #[arg(long)]
        vendor: String,
    },
    /// Validate a timings file and push it to the backend
    Push {
        /// Vendor id
        #[arg(long)]
        vendor: String,
        /// Path to a weekly timings JSON file
        file: PathBuf,
    },
    /// Export a consolidated schedule as CSV
    Export {
        /// Path to a weekly timings JSON file
        file: PathBuf,
        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
    /// Store a backend session token
    Login {
        #[arg(long)]
        token: String,
    },
    /// Clear the stored session token
    Logout,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .parse_lossy("vendor_hours=debug");

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    match args.command {
        Command::Show {
            file,
            fill_defaults,
        } => show(&config, &file, fill_defaults),
        Command::Check { file } => check(&file),
        Command::Fetch { vendor } => {
            let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            rt.block_on(fetch(&config, &vendor))
        }
        Command::Push { vendor, file } => {
            let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            rt.block_on(push(&config, &vendor, &file))
        }
        Command::Export { file, out } => export(&file, &out),
        Command::Login { token } => login(&config, token),
        Command::Logout => logout(),
    }
}

fn read_timings(path: &Path) -> Result<WeeklyTimings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read timings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse timings file {}", path.display()))
}

fn print_schedule(timings: &WeeklyTimings) {
    let groups = consolidate(timings);
    if groups.is_empty() {
        println!("Hours not set");
        return;
    }
    for group in groups {
        println!("{}", group.display_line());
    }
}

fn show(config: &AppConfig, file: &Path, fill_defaults: bool) -> Result<()> {
    let mut timings = read_timings(file)?;

    if fill_defaults {
        timings.fill_blank_open_days(&config.hours);
        tracing::debug!(
            "Filled blank open days with defaults {}-{}",
            config.hours.default_open,
            config.hours.default_close
        );
    }

    for error in validate_timings(&timings) {
        tracing::warn!("{}", error);
    }

    print_schedule(&timings);
    Ok(())
}

fn check(file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read vendor file {}", file.display()))?;
    let record: vendor_hours::VendorRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse vendor file {}", file.display()))?;

    let mut errors = Vec::new();
    if let Err(e) = validate_name(&record.name) {
        errors.push(e);
    }
    if !record.email.is_empty() {
        if let Err(e) = validate_email(&record.email) {
            errors.push(e);
        }
    }
    if !record.phone.is_empty() {
        if let Err(e) = validate_phone(&record.phone) {
            errors.push(e);
        }
    }
    errors.extend(validate_timings(&record.timings));

    if errors.is_empty() {
        println!("{}: OK", record.name);
        return Ok(());
    }

    for error in &errors {
        eprintln!("error: {error}");
    }
    anyhow::bail!("{} validation error(s) in {}", errors.len(), file.display())
}

async fn fetch(config: &AppConfig, vendor_id: &str) -> Result<()> {
    let context = AppContext::load_default().context("Failed to load application context")?;
    let client = BackendClient::new(
        config.backend.api_url.clone(),
        &config.network,
        context.auth_token.clone(),
    )?;

    tracing::info!("Fetching vendor {}", vendor_id);
    let record = client.fetch_vendor(vendor_id).await?;

    println!("{} ({})", record.name, record.id);
    if !record.email.is_empty() {
        println!("Email: {}", record.email);
    }
    if !record.phone.is_empty() {
        println!("Phone: {}", record.phone);
    }
    if let Some(amount) = record.min_order_amount {
        println!("Minimum order: {}", context.currency.format(amount));
    }
    print_schedule(&record.timings);
    Ok(())
}

async fn push(config: &AppConfig, vendor_id: &str, file: &Path) -> Result<()> {
    let timings = read_timings(file)?;

    let errors = validate_timings(&timings);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("error: {error}");
        }
        anyhow::bail!("Refusing to push invalid timings ({} error(s))", errors.len());
    }

    let context = AppContext::load_default().context("Failed to load application context")?;
    let client = BackendClient::new(
        config.backend.api_url.clone(),
        &config.network,
        context.auth_token.clone(),
    )?;

    client.update_timings(vendor_id, &timings).await?;
    tracing::info!("Updated timings for vendor {}", vendor_id);
    Ok(())
}

fn export(file: &Path, out: &Path) -> Result<()> {
    let timings = read_timings(file)?;
    let groups = consolidate(&timings);

    let writer = fs::File::create(out)
        .with_context(|| format!("Failed to create output file {}", out.display()))?;
    write_schedule_csv(&groups, writer)?;

    tracing::info!("Wrote {} schedule group(s) to {}", groups.len(), out.display());
    Ok(())
}

fn login(config: &AppConfig, token: String) -> Result<()> {
    let path = AppContext::default_path();
    let fresh = !path.exists();
    let mut context = AppContext::load(&path).context("Failed to load application context")?;
    if fresh {
        // Seed the currency preference from config on first login only;
        // afterwards the stored context owns it.
        context.currency = vendor_hours::CurrencySettings::from_config(&config.currency);
    }
    context.auth_token = Some(token);
    context.save(&path).context("Failed to save application context")?;
    tracing::info!("Session token stored");
    Ok(())
}

fn logout() -> Result<()> {
    let mut context = AppContext::load_default().context("Failed to load application context")?;
    context.clear_token();
    context.save_default().context("Failed to save application context")?;
    tracing::info!("Session token cleared");
    Ok(())
}
