//! CLI tool for checking card numbers before they are sent to the payment API.
//!
//! # Usage
//!
//! ```bash
//! # Luhn check and brand
//! cardcheck check 4242424242424242
//!
//! # Brand only (works on partial numbers)
//! cardcheck classify 6011
//!
//! # Sandbox test numbers
//! cardcheck generate --brand amex --count 3
//!
//! # Expiry
//! cardcheck expiry 5 2030
//! ```

use std::process::ExitCode;

use card_check::expiry::ExpiryDate;
use card_check::{classify, generate, mask, CardBrand, CardNumber};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Card number checksum and brand checks")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Luhn check and classify the brand
    Check {
        /// Card number (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Classify the brand from the leading digits
    Classify {
        /// Card number or prefix
        card_number: String,
    },

    /// Mask a card number for display
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Generate test card numbers (for sandbox use only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Check whether a card has expired
    Expiry {
        /// Expiry month (1-12)
        month: u32,

        /// Expiry year (YY or YYYY)
        year: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
    Jcb,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::MasterCard,
            BrandArg::Amex => CardBrand::AmericanExpress,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::DinersClub => CardBrand::DinersClub,
            BrandArg::Jcb => CardBrand::Jcb,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "card_check=debug,info" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Mask { card_number } => cmd_mask(&card_number),
        Commands::Generate { brand, count } => cmd_generate(brand.into(), count),
        Commands::Expiry { month, year } => cmd_expiry(month, year),
    }
}

fn cmd_check(card_number: &str, output: OutputFormat) -> ExitCode {
    let result = CardNumber::parse(card_number);

    match (output, &result) {
        (OutputFormat::Text, Ok(card)) => {
            println!("Valid: yes");
            println!("Brand: {}", card.brand());
            println!("Masked: {}", card.masked());
        }
        (OutputFormat::Text, Err(e)) => {
            println!("Valid: no");
            println!("Error: {}", e);
        }
        (OutputFormat::Json, Ok(card)) => {
            let body = json!({
                "valid": true,
                "brand": card.brand(),
                "last_four": card.last_four(),
                "masked": card.masked(),
            });
            println!("{}", body);
        }
        (OutputFormat::Json, Err(e)) => {
            let body = json!({
                "valid": false,
                "error": e.to_string(),
            });
            println!("{}", body);
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_classify(card_number: &str) -> ExitCode {
    match classify::matching_rule(card_number) {
        Some(rule) => {
            println!("Brand: {}", rule.brand);
            println!("Matched Prefix: {}", rule.prefix);
        }
        None => println!("Brand: {}", CardBrand::Unknown),
    }
    ExitCode::SUCCESS
}

fn cmd_mask(card_number: &str) -> ExitCode {
    if mask::last_four_from_string(card_number).is_empty() {
        eprintln!("Error: card number too short");
        return ExitCode::FAILURE;
    }
    println!("{}", mask::mask_string(card_number));
    ExitCode::SUCCESS
}

fn cmd_generate(brand: CardBrand, count: usize) -> ExitCode {
    for number in generate::generate_cards(brand, count) {
        println!("{}", number);
    }
    ExitCode::SUCCESS
}

fn cmd_expiry(month: u32, year: u32) -> ExitCode {
    match ExpiryDate::new(month, year) {
        Ok(expiry) if expiry.is_expired() => {
            println!("Expiry: {}", expiry);
            println!("Status: Expired");
            ExitCode::FAILURE
        }
        Ok(expiry) => {
            println!("Expiry: {}", expiry);
            println!("Months Until Expiry: {}", expiry.months_until_expiry());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
