mod embedded;

use embedded::migrations;

use tokio_postgres::{Client, NoTls, Row};

use crate::{
    dto::PageRequest,
    models::{Author, Notice, Role},
};

const NOTICE_COLUMNS: &str = "n.id, n.title, n.contents, a.email AS author_email, n.created_time, n.updated_time";

pub struct Repository {
    client: Client,
}

fn notice_from_row(row: &Row) -> Notice {
    Notice {
        id: row.get("id"),
        title: row.get("title"),
        contents: row.get("contents"),
        author_email: row.get("author_email"),
        created_time: row.get("created_time"),
        updated_time: row.get("updated_time"),
    }
}

impl Repository {
    pub async fn new(database_dsn: String) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(&database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    pub async fn find_author_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Author>, tokio_postgres::Error> {
        let row = self
            .client
            .query_opt(
                "SELECT id, email, name, role FROM authors WHERE email = $1",
                &[&email],
            )
            .await?;

        Ok(row.map(|row| Author {
            id: row.get("id"),
            email: row.get("email"),
            name: row.get("name"),
            role: Role::from_db(row.get("role")),
        }))
    }

    pub async fn create_notice(
        &self,
        author_id: i64,
        title: String,
        contents: String,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notices (title, contents, author_id) VALUES ($1, $2, $3) RETURNING id",
                &[&title, &contents, &author_id],
            )
            .await?;

        Ok(row.get("id"))
    }

    pub async fn get_notice(&self, id: i64) -> Result<Option<Notice>, tokio_postgres::Error> {
        let query = format!(
            "SELECT {NOTICE_COLUMNS} FROM notices n JOIN authors a ON a.id = n.author_id WHERE n.id = $1"
        );

        let row = self.client.query_opt(query.as_str(), &[&id]).await?;

        Ok(row.as_ref().map(notice_from_row))
    }

    pub async fn list_notices(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<Notice>, tokio_postgres::Error> {
        // Sort column and direction come from closed enums, never from raw input
        let order = request.direction.as_sql();
        let query = format!(
            "SELECT {NOTICE_COLUMNS} FROM notices n JOIN authors a ON a.id = n.author_id \
             ORDER BY {} {order}, n.id {order} LIMIT $1 OFFSET $2",
            request.sort.column(),
        );

        let rows = self
            .client
            .query(query.as_str(), &[&request.limit(), &request.offset()])
            .await?;

        Ok(rows.iter().map(notice_from_row).collect())
    }

    pub async fn count_notices(&self) -> Result<i64, tokio_postgres::Error> {
        let row = self
            .client
            .query_one("SELECT COUNT(*) AS total FROM notices", &[])
            .await?;

        Ok(row.get("total"))
    }

    pub async fn update_notice(
        &self,
        id: i64,
        title: String,
        contents: String,
    ) -> Result<bool, tokio_postgres::Error> {
        let rows = self
            .client
            .execute(
                "UPDATE notices SET title = $1, contents = $2, updated_time = now() WHERE id = $3",
                &[&title, &contents, &id],
            )
            .await?;

        Ok(rows == 1)
    }

    pub async fn delete_notice(&self, id: i64) -> Result<bool, tokio_postgres::Error> {
        let rows = self
            .client
            .execute("DELETE FROM notices WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
