// Shared trait for quote sources

use crate::oracle::types::{Credentials, QuoteResult};

pub use alpaca_types::{LatestQuote, QuoteEnvelope};

// The one capability the normalizer needs: fetch the latest quote envelope
// for the given credentials and endpoint. Tests substitute a fake source.
#[async_trait::async_trait]
pub trait QuoteSource {
    async fn fetch(&self, credentials: &Credentials, endpoint: &str) -> QuoteResult<QuoteEnvelope>;
}

// Make the Alpaca adapter visible
pub mod alpaca;
pub mod alpaca_types;
