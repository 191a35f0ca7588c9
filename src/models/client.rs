#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// A client to insert together with its initial phone numbers.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Vec<String>,
}

impl NewClient {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(email.to_string()),
            phones: Vec::new(),
        }
    }

    pub fn with_phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones = phones.into_iter().map(Into::into).collect();
        self
    }
}

/// Client columns that may be changed after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    FirstName,
    LastName,
    Email,
}

impl ClientField {
    pub fn column(self) -> &'static str {
        match self {
            ClientField::FirstName => "first_name",
            ClientField::LastName => "last_name",
            ClientField::Email => "email",
        }
    }
}

/// Sparse update of a client.
///
/// `None` and empty strings leave a field untouched. `phones: Some(_)` replaces
/// the whole phone set, so `Some(vec![])` removes every phone.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

impl ClientPatch {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones = Some(phones.into_iter().map(Into::into).collect());
        self
    }

    /// Field assignments to apply, in column order.
    pub fn assignments(&self) -> Vec<(ClientField, &str)> {
        [
            (ClientField::FirstName, &self.first_name),
            (ClientField::LastName, &self.last_name),
            (ClientField::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((field, v)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty() && self.phones.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_skip_missing_and_empty_fields() {
        let patch = ClientPatch::default().first_name("").email("new@example.com");

        assert_eq!(
            patch.assignments(),
            vec![(ClientField::Email, "new@example.com")]
        );
    }

    #[test]
    fn empty_phone_list_still_counts_as_a_change() {
        let patch = ClientPatch::default().phones(Vec::<String>::new());

        assert!(patch.assignments().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(ClientPatch::default().is_empty());
    }

    #[test]
    fn new_client_collects_phones() {
        let client = NewClient::new("A", "B", "a@b.com").with_phones(["+1", "+2"]);
        assert_eq!(client.phones, vec!["+1".to_string(), "+2".to_string()]);
        assert_eq!(client.email.as_deref(), Some("a@b.com"));
    }
}
