//! Payment code issuance
//!
//! Issues a placeholder payment: reserves an identifier through the configured
//! [`PaymentGateway`], renders the matching copy-and-paste token as a QR image,
//! and writes the PNG under `static/img/` below the caller's base directory.

use crate::error::Result;
use crate::gateway::{LocalGateway, PaymentGateway};
use crate::qr::QrEncoder;
use serde::{Deserialize, Serialize};

/// Prefix of the copy-and-paste token encoded into every QR image
pub const TOKEN_PREFIX: &str = "hash_payment_";

/// Prefix of the image file name derived from every payment identifier
pub const FILE_PREFIX: &str = "qr_code_payment_";

/// Subdirectory below the base directory where images land. Must exist and be
/// writable; the issuer never creates it.
pub const IMAGE_SUBDIR: &str = "static/img/";

/// Outcome of a single payment issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCreationResult {
    /// Unique payment identifier reserved for this issuance
    pub bank_payment_id: String,
    /// Bare image reference, `qr_code_payment_<id>` with no directory or extension
    pub qr_code_path: String,
}

impl PaymentCreationResult {
    /// The textual token encoded into the QR image, for manual entry.
    pub fn copy_paste_token(&self) -> String {
        format!("{TOKEN_PREFIX}{}", self.bank_payment_id)
    }
}

/// Issues payment codes and persists their QR images
pub struct PaymentCodeIssuer<G = LocalGateway> {
    gateway: G,
    encoder: QrEncoder,
}

impl PaymentCodeIssuer<LocalGateway> {
    /// Create an issuer backed by the default local identifier gateway
    pub fn new() -> Self {
        Self {
            gateway: LocalGateway::new(),
            encoder: QrEncoder::new(),
        }
    }
}

impl Default for PaymentCodeIssuer<LocalGateway> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: PaymentGateway> PaymentCodeIssuer<G> {
    /// Create an issuer backed by a specific gateway
    pub fn with_gateway(gateway: G) -> Self {
        Self {
            gateway,
            encoder: QrEncoder::new(),
        }
    }

    /// Replace the QR encoder used for rendering.
    pub fn with_encoder(mut self, encoder: QrEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Issue one payment code and write its QR image.
    ///
    /// `base_dir` is a raw path prefix, concatenated in front of
    /// `static/img/` as-is; callers supply their own trailing separator. An
    /// empty prefix resolves against the process working directory. Any file
    /// already at the target path is overwritten.
    ///
    /// # Errors
    ///
    /// Fails if the gateway cannot reserve an identifier, the token cannot be
    /// encoded, or the image cannot be written (missing `static/img/` tree,
    /// permissions, disk full). The first failure aborts the issuance; no
    /// partial result is returned.
    pub async fn create_payment(&self, base_dir: &str) -> Result<PaymentCreationResult> {
        let bank_payment_id = self.gateway.reserve_identifier().await?;

        let token = format!("{TOKEN_PREFIX}{bank_payment_id}");
        let image = self.encoder.encode_string(&token)?;

        let file_path = format!("{base_dir}{IMAGE_SUBDIR}{FILE_PREFIX}{bank_payment_id}.png");
        image.save(&file_path)?;

        tracing::debug!(%bank_payment_id, file = %file_path, "Issued payment code");

        Ok(PaymentCreationResult {
            qr_code_path: format!("{FILE_PREFIX}{bank_payment_id}"),
            bank_payment_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FixedGateway(&'static str);

    #[async_trait::async_trait]
    impl PaymentGateway for FixedGateway {
        async fn reserve_identifier(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_result_fields_derive_from_identifier() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("static/img")).unwrap();
        let base = format!("{}/", dir.path().display());

        let issuer = PaymentCodeIssuer::with_gateway(FixedGateway("fixed-id"));
        let result = issuer.create_payment(&base).await.unwrap();

        assert_eq!(result.bank_payment_id, "fixed-id");
        assert_eq!(result.qr_code_path, "qr_code_payment_fixed-id");
        assert_eq!(result.copy_paste_token(), "hash_payment_fixed-id");
    }

    #[tokio::test]
    async fn test_missing_image_tree_fails() {
        let dir = tempfile::tempdir().unwrap();
        let base = format!("{}/", dir.path().display());

        let issuer = PaymentCodeIssuer::new();
        let err = issuer.create_payment(&base).await.unwrap_err();
        assert!(matches!(err, Error::Image(_) | Error::Io(_)));
    }
}
