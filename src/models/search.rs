use std::fmt;

/// Search criteria for `find_client`.
///
/// Name and email criteria are matched with `ILIKE`, so `%` and `_` act as
/// wildcards. The phone criterion is an exact match.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientFilter {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// One client/phone pair from a search. Clients without phones yield a single
/// row with `phone: None`.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientSearchRow {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl fmt::Display for ClientSearchRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "ID: {}, First name: {}, Last name: {}, Email: {}, Phone: {}",
            self.id,
            show(&self.first_name),
            show(&self.last_name),
            show(&self.email),
            show(&self.phone),
        )
    }
}
