use sqlx::{Postgres, QueryBuilder};
use tracing::{debug, info};

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Client, ClientField, ClientPatch, NewClient};

impl Database {
    /// Insert a client and its phones in one transaction, returning the new client ID.
    pub async fn add_client(&self, client: &NewClient) -> Result<i32> {
        let mut tx = self.pool.begin().await?;

        let client_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clients (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(client.first_name.as_deref())
        .bind(client.last_name.as_deref())
        .bind(client.email.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        for phone in &client.phones {
            sqlx::query("INSERT INTO phones (client_id, phone) VALUES ($1, $2)")
                .bind(client_id)
                .bind(phone)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(client_id, phones = client.phones.len(), "client added");
        Ok(client_id)
    }

    pub async fn get_client(&self, client_id: i32) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, first_name, last_name, email FROM clients WHERE id = $1",
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Apply `patch` to an existing client.
    ///
    /// Fails with [`Error::ClientNotFound`] without writing anything if the
    /// client does not exist. Field updates and phone replacement share one
    /// transaction.
    pub async fn change_client(&self, client_id: i32, patch: &ClientPatch) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i32>("SELECT id FROM clients WHERE id = $1 FOR UPDATE")
            .bind(client_id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !exists {
            return Err(Error::ClientNotFound(client_id));
        }

        let assignments = patch.assignments();
        if !assignments.is_empty() {
            let mut query = update_query(client_id, &assignments);
            query.build().execute(&mut *tx).await?;
        }

        if let Some(phones) = &patch.phones {
            sqlx::query("DELETE FROM phones WHERE client_id = $1")
                .bind(client_id)
                .execute(&mut *tx)
                .await?;

            for phone in phones {
                sqlx::query("INSERT INTO phones (client_id, phone) VALUES ($1, $2)")
                    .bind(client_id)
                    .bind(phone)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        info!(
            client_id,
            fields = assignments.len(),
            phones_replaced = patch.phones.is_some(),
            "client updated"
        );
        Ok(())
    }

    /// Delete a client; its phones go with it. Returns the number of clients removed.
    pub async fn delete_client(&self, client_id: i32) -> Result<u64> {
        let deleted = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            debug!(client_id, "no client to delete");
        } else {
            info!(client_id, "client deleted");
        }
        Ok(deleted)
    }
}

/// `UPDATE clients SET <col> = $n, ... WHERE id = $m` over the enumerated columns.
fn update_query<'a>(
    client_id: i32,
    assignments: &[(ClientField, &'a str)],
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE clients SET ");
    {
        let mut set = builder.separated(", ");
        for (field, value) in assignments {
            set.push(field.column());
            set.push_unseparated(" = ");
            set.push_bind_unseparated(*value);
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(client_id);
    builder
}
