// Source: https://data.alpaca.markets/v2/stocks/{symbol}/quotes/latest

// Response body wrapper. A `message` field carries an upstream error even
// when the venue answers 2xx, so it is kept alongside the quote.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct QuoteEnvelope {
    #[serde(default)]
    pub quote: Option<LatestQuote>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct LatestQuote {
    pub ap: f64, // ask price, e.g. 345.12
    pub bp: f64, // bid price, e.g. 345.08
    // we ignore the other fields (sizes, exchange codes, timestamp) for now
}
