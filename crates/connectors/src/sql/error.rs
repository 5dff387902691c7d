use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),
}
