use tracing::{debug, info};

use super::Database;
use crate::error::Result;
use crate::models::Phone;

impl Database {
    /// Attach a phone number to a client, returning the new phone ID.
    ///
    /// The client is not looked up first; a missing client surfaces as
    /// [`crate::Error::UnknownClient`] from the foreign key.
    pub async fn add_phone(&self, client_id: i32, phone: &str) -> Result<i32> {
        let phone_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO phones (client_id, phone) VALUES ($1, $2) RETURNING id",
        )
        .bind(client_id)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        info!(client_id, phone, "phone added");
        Ok(phone_id)
    }

    /// Remove every matching number from a client. Returns the number of rows removed.
    pub async fn delete_phone(&self, client_id: i32, phone: &str) -> Result<u64> {
        let deleted = sqlx::query("DELETE FROM phones WHERE client_id = $1 AND phone = $2")
            .bind(client_id)
            .bind(phone)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            debug!(client_id, phone, "no matching phone to delete");
        } else {
            info!(client_id, phone, deleted, "phone deleted");
        }
        Ok(deleted)
    }

    pub async fn get_phones(&self, client_id: i32) -> Result<Vec<Phone>> {
        let phones = sqlx::query_as::<_, Phone>(
            "SELECT id, client_id, phone FROM phones WHERE client_id = $1 ORDER BY id ASC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(phones)
    }
}
