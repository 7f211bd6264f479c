use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("config error: {0}")]
    Config(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("data error: {0}")]
    Data(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;

// API key pair as handed over by the secret-provisioning side.
// Both fields must be non-empty before any request goes out.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }
}

// Latest bid/ask snapshot as reported by the venue. Either side may
// legitimately be zero when no quote is currently available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub ask: f64,
    pub bid: f64,
}

// Price scaled by 1e8 (8 fixed decimals), the width oracle feeds expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedPrice(pub u64);

impl EncodedPrice {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EncodedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
