//! Issue a payment code and save its QR image
//!
//! Usage: cargo run --example issue_payment

use payqr::PaymentCodeIssuer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // The issuer never creates directories, so build the tree first
    std::fs::create_dir_all("static/img")?;

    let issuer = PaymentCodeIssuer::new();
    let payment = issuer.create_payment("").await?;

    println!("✓ Payment issued: {}", payment.bank_payment_id);
    println!("  Image: static/img/{}.png", payment.qr_code_path);
    println!("  Token: {}", payment.copy_paste_token());

    Ok(())
}
