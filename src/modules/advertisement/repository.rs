use crate::utils::error::HttpError;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqliteExecutor;

#[derive(Serialize, sqlx::FromRow, Clone, Debug, PartialEq)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_time: NaiveDateTime,
}

pub struct CreateAdvertisementPayload {
    pub title: String,
    pub description: String,
    pub owner: String,
}

pub struct UpdateAdvertisementPayload {
    pub title: String,
    pub description: String,
    pub owner: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

impl From<Error> for HttpError {
    fn from(_: Error) -> Self {
        HttpError::internal()
    }
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateAdvertisementPayload,
) -> Result<Advertisement, Error> {
    sqlx::query_as::<_, Advertisement>(
        "
        INSERT INTO advertisements
        (title, description, owner)
        VALUES (?, ?, ?)
        RETURNING *
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.owner)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an advertisement: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Advertisement>, Error> {
    sqlx::query_as::<_, Advertisement>("SELECT * FROM advertisements WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching advertisement with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

/// Overwrites the mutable columns. `id` and `creation_time` are never touched.
pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateAdvertisementPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE advertisements SET
            title = ?,
            description = ?,
            owner = ?
        WHERE
            id = ?
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.owner)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update an advertisement by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM advertisements WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an advertisement by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::database::{self, Session};

    async fn setup() -> database::DatabaseConnection {
        let db_conn = database::connect("sqlite::memory:", 1).await.unwrap();
        database::migrate(&db_conn).await.unwrap();
        db_conn
    }

    fn bike() -> CreateAdvertisementPayload {
        CreateAdvertisementPayload {
            title: "Bike".to_string(),
            description: "Red bike".to_string(),
            owner: "alice".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_creation_time() {
        let db_conn = setup().await;

        let mut session = Session::begin(&db_conn).await.unwrap();
        let first = create(&mut *session, bike()).await.unwrap();
        let second = create(&mut *session, bike()).await.unwrap();
        session.commit().await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.title, "Bike");
    }

    #[tokio::test]
    async fn uncommitted_session_is_rolled_back() {
        let db_conn = setup().await;

        {
            let mut session = Session::begin(&db_conn).await.unwrap();
            create(&mut *session, bike()).await.unwrap();
        }

        let found = find_by_id(&db_conn.pool, 1).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn uncommitted_write_session_is_rolled_back() {
        let db_conn = setup().await;
        let created = create(&db_conn.pool, bike()).await.unwrap();

        {
            let mut session = Session::begin_write(&db_conn).await.unwrap();
            delete_by_id(&mut *session, created.id).await.unwrap();
            assert!(find_by_id(&mut *session, created.id).await.unwrap().is_none());
        }

        let mut session = Session::begin_write(&db_conn).await.unwrap();
        let found = find_by_id(&mut *session, created.id).await.unwrap();
        session.commit().await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn update_keeps_id_and_creation_time() {
        let db_conn = setup().await;
        let created = create(&db_conn.pool, bike()).await.unwrap();

        update_by_id(
            &db_conn.pool,
            created.id,
            UpdateAdvertisementPayload {
                title: "Bike v2".to_string(),
                description: "Blue bike".to_string(),
                owner: "bob".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = find_by_id(&db_conn.pool, created.id).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.creation_time, created.creation_time);
        assert_eq!(updated.title, "Bike v2");
        assert_eq!(updated.description, "Blue bike");
        assert_eq!(updated.owner, "bob");
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let db_conn = setup().await;
        let created = create(&db_conn.pool, bike()).await.unwrap();

        delete_by_id(&db_conn.pool, created.id).await.unwrap();
        assert!(find_by_id(&db_conn.pool, created.id).await.unwrap().is_none());

        let next = create(&db_conn.pool, bike()).await.unwrap();
        assert_eq!(next.id, created.id + 1);
    }

    #[tokio::test]
    async fn store_rejects_out_of_range_title() {
        let db_conn = setup().await;

        let result = create(
            &db_conn.pool,
            CreateAdvertisementPayload {
                title: String::new(),
                description: "d".to_string(),
                owner: "o".to_string(),
            },
        )
        .await;

        assert!(result.is_err());
    }
}
