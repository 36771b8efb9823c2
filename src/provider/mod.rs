// Quote provider: seam trait plus the Alpha Vantage client.

pub mod alpha_vantage;
pub mod traits;

pub use alpha_vantage::{extract_closes, AlphaVantageClient};
pub use traits::QuoteProvider;
