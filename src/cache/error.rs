use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Error connecting to cache: {0}")]
    Connect(String),

    #[error("Error running cache command: {0}")]
    Command(#[from] redis::RedisError),
}
