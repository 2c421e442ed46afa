/// Fatal errors raised while building a lookup client
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Dictionary backend unavailable: {0}")]
    Unavailable(String),

    #[error("Cache capacity must be greater than zero")]
    InvalidCapacity,
}
