pub mod provider;
pub mod types;

pub use provider::WalletProvider;
pub use types::{Portfolio, PricePoint};
