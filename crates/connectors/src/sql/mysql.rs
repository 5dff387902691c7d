use crate::sql::{destination::SqlDestination, error::DbError};
use async_trait::async_trait;
use mysql_async::{Opts, Pool, prelude::Queryable};
use tracing::debug;

/// MySQL write endpoint backed by a connection pool.
#[derive(Clone)]
pub struct MySqlDestination {
    pool: Pool,
}

impl MySqlDestination {
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let opts = Opts::from_url(url).map_err(|err| DbError::InvalidUrl(err.to_string()))?;
        let pool = Pool::new(opts);

        // Fail at startup on an unreachable server, not at first write.
        let conn = pool.get_conn().await?;
        drop(conn);

        Ok(MySqlDestination { pool })
    }

    pub async fn disconnect(self) -> Result<(), DbError> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl SqlDestination for MySqlDestination {
    async fn execute(&self, sql: &str) -> Result<u64, DbError> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(sql).await?;
        let affected = conn.affected_rows();
        debug!(affected, "statement executed");
        Ok(affected)
    }
}
