mod config;
pub mod formatting;
pub mod retry;

pub use config::Config;
pub use formatting::{format_portfolio, format_sui, format_usd, UNAVAILABLE_MESSAGE};
pub use retry::{retry_with_backoff, RetryConfig};
