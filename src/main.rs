//! payqr CLI entrypoint

use clap::Parser;
use payqr::issuer::IMAGE_SUBDIR;
use payqr::{PaymentCodeIssuer, PayqrConfig, Result, logging};
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "payqr",
    version,
    about = "Issue QR payment codes into a static image tree"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to payqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the base directory prefix placed before static/img/ (takes precedence over config file)
    #[arg(long, value_name = "PREFIX")]
    base_dir: Option<String>,

    /// Number of payment codes to issue
    #[arg(long, default_value_t = 1, value_name = "N")]
    count: u32,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Also print the copy-and-paste token for each issued code
    #[arg(long)]
    show_token: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PayqrConfig::load(cli.config.as_deref())?;

    if let Some(ref base_dir) = cli.base_dir {
        config.output.base_dir = Some(base_dir.clone());
    }

    logging::init(&config.logging)?;

    let encoder = config.encoder()?;
    let base_dir = config.base_dir();
    let issuer = PaymentCodeIssuer::new().with_encoder(encoder);

    info!(count = cli.count, base_dir, "Issuing payment codes");

    let mut results = Vec::with_capacity(cli.count as usize);
    for _ in 0..cli.count {
        results.push(issuer.create_payment(base_dir).await?);
    }

    if cli.json {
        let entries: Vec<Value> = results
            .iter()
            .map(|payment| {
                let mut entry = json!({
                    "bank_payment_id": payment.bank_payment_id,
                    "qr_code_path": payment.qr_code_path,
                });
                if cli.show_token {
                    entry["copy_paste_token"] = json!(payment.copy_paste_token());
                }
                entry
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for payment in &results {
            println!("Payment {}", payment.bank_payment_id);
            println!("  Image: {base_dir}{IMAGE_SUBDIR}{}.png", payment.qr_code_path);
            if cli.show_token {
                println!("  Token: {}", payment.copy_paste_token());
            }
        }
    }

    Ok(())
}
