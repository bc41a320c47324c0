pub mod cache;
pub mod http;
pub mod quote;

pub use cache::{BestEffortCache, QuoteCache};
pub use quote::{Quote, QuoteFetcher};
