pub mod memory;
pub mod redis_store;
pub mod tiered;

pub use memory::{CacheStats, TtlCache};
pub use redis_store::RedisStore;
pub use tiered::{DurableStore, TieredCache};
