// Oracle feed module entrypoint
pub mod adapters;   // venue-specific quote sources (e.g. Alpaca)
pub mod normalizer; // picks a usable price and encodes it fixed-point
pub mod types;      // credentials, errors, encoded price
