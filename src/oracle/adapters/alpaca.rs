// Alpaca market-data adapter: one GET with the two APCA credential headers.

use super::{QuoteEnvelope, QuoteSource};
use crate::oracle::types::{Credentials, QuoteError, QuoteResult};
use tracing::debug;

pub const KEY_ID_HEADER: &str = "APCA-API-KEY-ID";
pub const KEY_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

pub struct AlpacaQuoteSource {
    client: reqwest::Client,
}

impl AlpacaQuoteSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    // Endpoint for the latest quote of `symbol` under `base_url`
    // (e.g. "https://data.alpaca.markets").
    pub fn quote_endpoint(base_url: &str, symbol: &str) -> String {
        format!(
            "{}/v2/stocks/{}/quotes/latest",
            base_url.trim_end_matches('/'),
            symbol
        )
    }
}

impl Default for AlpacaQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl QuoteSource for AlpacaQuoteSource {
    async fn fetch(&self, credentials: &Credentials, endpoint: &str) -> QuoteResult<QuoteEnvelope> {
        let response = self
            .client
            .get(endpoint)
            .header(KEY_ID_HEADER, &credentials.key_id)
            .header(KEY_SECRET_HEADER, &credentials.key_secret)
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, endpoint, "quote request answered");

        if !status.is_success() {
            // Surface whatever detail the venue put in the body.
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteError::Transport(format!("{}: {}", status, body)));
        }

        response
            .json::<QuoteEnvelope>()
            .await
            .map_err(|_| QuoteError::Data("malformed response".to_string()))
    }
}
