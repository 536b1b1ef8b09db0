mod request;

pub use request::{RequestFetcher, DEFAULT_TIMEOUT};
