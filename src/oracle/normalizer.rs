// Turn a fetched quote envelope into an 8-decimal fixed-point price.

use crate::oracle::adapters::{QuoteEnvelope, QuoteSource};
use crate::oracle::types::{Credentials, EncodedPrice, Quote, QuoteError, QuoteResult};
use tracing::info;

// Oracle feeds carry 8 fixed decimals.
pub const PRICE_SCALE: f64 = 1e8;

// Single invocation: validate credentials, fetch once through `source`,
// select a price and encode it. No retry, no caching.
pub async fn normalize<S: QuoteSource + ?Sized>(
    source: &S,
    credentials: &Credentials,
    endpoint: &str,
) -> QuoteResult<EncodedPrice> {
    if !credentials.is_complete() {
        return Err(QuoteError::Config("missing credentials".to_string()));
    }

    let envelope = source.fetch(credentials, endpoint).await?;
    let quote = validate_envelope(envelope)?;
    let price = select_price(&quote)?;

    info!(price, "selected latest quote price");
    metrics::counter!("qfeed_quotes_normalized").increment(1);

    Ok(encode_price(price))
}

// An error message in the envelope counts as a transport-level failure,
// checked before the structure of the quote itself.
fn validate_envelope(envelope: QuoteEnvelope) -> QuoteResult<Quote> {
    if let Some(message) = envelope.message {
        return Err(QuoteError::Transport(message));
    }
    match envelope.quote {
        Some(q) => Ok(Quote { ask: q.ap, bid: q.bp }),
        None => Err(QuoteError::Data("malformed response".to_string())),
    }
}

// Ask price first, bid price as fallback; zero means "no quote on this side".
fn select_price(quote: &Quote) -> QuoteResult<f64> {
    let price = if quote.ask == 0.0 { quote.bid } else { quote.ask };
    if price == 0.0 {
        return Err(QuoteError::Data("no valid price".to_string()));
    }
    Ok(price)
}

fn encode_price(price: f64) -> EncodedPrice {
    EncodedPrice((price * PRICE_SCALE).round() as u64)
}
