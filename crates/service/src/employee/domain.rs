use serde::{Deserialize, Serialize};

/// Employee record (business view).
///
/// `id` is `None` until the store assigns one and is left out of the JSON form while absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
}

impl Employee {
    /// Unsaved employee without an id.
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            second_name: second_name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<models::employee::Model> for Employee {
    fn from(m: models::employee::Model) -> Self {
        Self {
            id: Some(m.id),
            first_name: m.first_name,
            second_name: m.second_name,
            email: m.email,
        }
    }
}
