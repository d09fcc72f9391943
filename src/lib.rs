//! payqr - QR payment-code issuer
//!
//! This library reserves placeholder payment identifiers and renders each as a
//! scannable QR image written under a caller-supplied directory tree.
//!
//! # Features
//!
//! - **Identifier reservation**: pluggable [`PaymentGateway`] seam, local UUID
//!   generation by default
//! - **QR rendering**: PNG output via a configurable encoder
//! - **Config layering**: TOML/YAML files plus environment overrides
//!
//! # Example
//!
//! ```no_run
//! use payqr::PaymentCodeIssuer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // static/img/ must already exist under the prefix
//!     let issuer = PaymentCodeIssuer::new();
//!     let payment = issuer.create_payment("").await?;
//!
//!     println!("Issued {} -> {}.png", payment.bank_payment_id, payment.qr_code_path);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod issuer;
pub mod logging;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LoggingOptions, OutputOptions, PayqrConfig};
pub use gateway::{LocalGateway, PaymentGateway};
pub use issuer::{PaymentCodeIssuer, PaymentCreationResult};
pub use qr::QrEncoder;
