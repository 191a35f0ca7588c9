use sqlx::{Postgres, QueryBuilder};
use tracing::debug;

use super::{Database, non_empty};
use crate::error::Result;
use crate::models::{ClientFilter, ClientSearchRow};

impl Database {
    /// Search clients joined with their phones.
    ///
    /// Returns one row per client/phone pair; an empty vector means nothing matched.
    pub async fn find_client(&self, filter: &ClientFilter) -> Result<Vec<ClientSearchRow>> {
        let mut query = search_query(filter);
        let rows = query
            .build_query_as::<ClientSearchRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(matches = rows.len(), "client search finished");
        Ok(rows)
    }
}

fn search_query(filter: &ClientFilter) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT c.id, c.first_name, c.last_name, c.email, p.phone \
         FROM clients c \
         LEFT JOIN phones p ON c.id = p.client_id \
         WHERE TRUE",
    );

    let patterns = [
        ("c.first_name", &filter.first_name),
        ("c.last_name", &filter.last_name),
        ("c.email", &filter.email),
    ];
    for (column, value) in patterns {
        if let Some(pattern) = non_empty(value) {
            builder.push(format!(" AND {column} ILIKE "));
            builder.push_bind(pattern);
        }
    }

    if let Some(phone) = non_empty(&filter.phone) {
        builder.push(" AND p.phone = ");
        builder.push_bind(phone);
    }

    builder.push(" ORDER BY c.id, p.id");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT c.id, c.first_name, c.last_name, c.email, p.phone \
                        FROM clients c LEFT JOIN phones p ON c.id = p.client_id WHERE TRUE";

    #[test]
    fn no_criteria_selects_everything() {
        let filter = ClientFilter::default();
        let query = search_query(&filter);

        assert_eq!(query.sql(), format!("{BASE} ORDER BY c.id, p.id"));
    }

    #[test]
    fn text_criteria_use_ilike_and_phone_is_exact() {
        let filter = ClientFilter {
            first_name: Some("iv%".to_string()),
            last_name: None,
            email: Some("%@example.com".to_string()),
            phone: Some("+79001112233".to_string()),
        };
        let query = search_query(&filter);

        assert_eq!(
            query.sql(),
            format!(
                "{BASE} AND c.first_name ILIKE $1 AND c.email ILIKE $2 \
                 AND p.phone = $3 ORDER BY c.id, p.id"
            )
        );
    }

    #[test]
    fn empty_strings_are_ignored() {
        let filter = ClientFilter {
            last_name: Some(String::new()),
            ..ClientFilter::by_email("a@b.com")
        };
        let query = search_query(&filter);

        assert_eq!(
            query.sql(),
            format!("{BASE} AND c.email ILIKE $1 ORDER BY c.id, p.id")
        );
    }
}
