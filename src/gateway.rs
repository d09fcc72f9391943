//! Payment identifier reservation
//!
//! The issuer never talks to a financial institution directly; it asks a
//! [`PaymentGateway`] for a fresh identifier. The default [`LocalGateway`]
//! generates one locally, standing in for a future bank integration that can
//! be swapped in without touching the issuer's contract.

use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Source of unique payment identifiers
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Reserve a fresh payment identifier.
    ///
    /// Identifiers must be unique per call; uniqueness is probabilistic and
    /// never checked against prior reservations.
    async fn reserve_identifier(&self) -> Result<String>;
}

/// Default gateway generating random v4 UUIDs locally
#[derive(Debug, Clone, Default)]
pub struct LocalGateway;

impl LocalGateway {
    /// Create a new local gateway
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for LocalGateway {
    async fn reserve_identifier(&self) -> Result<String> {
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_gateway_hyphenated_format() {
        let gateway = LocalGateway::new();
        let id = gateway.reserve_identifier().await.unwrap();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_local_gateway_distinct_identifiers() {
        let gateway = LocalGateway::new();
        let first = gateway.reserve_identifier().await.unwrap();
        let second = gateway.reserve_identifier().await.unwrap();
        assert_ne!(first, second);
    }
}
