use sqlx::{
    pool::PoolConnection, sqlite::SqlitePoolOptions, Sqlite, SqliteConnection, SqlitePool,
};
use std::ops::{Deref, DerefMut};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: SqlitePool,
}

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, sqlx::Error> {
    // An in-memory database lives only as long as its connection, so idle
    // connections must never be reaped.
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
        .map_err(|err| {
            tracing::error!("Error connecting to database {}: {}", database_url, err);
            err
        })?;

    Ok(DatabaseConnection { pool })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })
}

/// A unit of work scoped to a single request.
///
/// Every read and write goes through the session's own connection inside one
/// transaction and becomes durable only on [`Session::commit`]. A session
/// dropped without being committed (early return, `?`, panic) is rolled back
/// before its connection goes back to the pool.
pub struct Session {
    // `None` only once `commit` or `drop` has taken the connection.
    conn: Option<PoolConnection<Sqlite>>,
}

impl Session {
    /// Opens a deferred transaction, for requests that only read.
    pub async fn begin(db_conn: &DatabaseConnection) -> Result<Self, sqlx::Error> {
        Self::begin_with(db_conn, "BEGIN").await
    }

    /// Opens a transaction holding the write lock from the start.
    ///
    /// A deferred transaction that reads and then writes must upgrade its
    /// lock, and SQLite fails that upgrade with `SQLITE_BUSY` instead of
    /// waiting whenever another session is doing the same. Taking the lock in
    /// `BEGIN IMMEDIATE` lets concurrent writers queue on `busy_timeout`.
    pub async fn begin_write(db_conn: &DatabaseConnection) -> Result<Self, sqlx::Error> {
        Self::begin_with(db_conn, "BEGIN IMMEDIATE").await
    }

    async fn begin_with(
        db_conn: &DatabaseConnection,
        statement: &'static str,
    ) -> Result<Self, sqlx::Error> {
        let mut conn = db_conn.pool.acquire().await.map_err(|err| {
            tracing::error!("Failed to acquire a database connection: {}", err);
            err
        })?;

        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                tracing::error!("Failed to start database transaction: {}", err);
                err
            })?;

        Ok(Self { conn: Some(conn) })
    }

    pub async fn commit(mut self) -> Result<(), sqlx::Error> {
        let Some(mut conn) = self.conn.take() else {
            return Ok(());
        };

        match sqlx::query("COMMIT").execute(&mut *conn).await {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!("Failed to commit database transaction: {}", err);
                // Hand the connection back so `drop` rolls it back.
                self.conn = Some(conn);
                Err(err)
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let Some(mut conn) = self.conn.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
                        tracing::error!("Failed to roll back database transaction: {}", err);
                        // Never return a connection with a transaction still open.
                        let _ = conn.close().await;
                    }
                });
            }
            Err(_) => drop(conn.detach()),
        }
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        match self.conn {
            Some(ref conn) => conn,
            None => unreachable!("session used after it was closed"),
        }
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.conn {
            Some(ref mut conn) => conn,
            None => unreachable!("session used after it was closed"),
        }
    }
}
