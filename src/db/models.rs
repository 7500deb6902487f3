use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// What a client is allowed to see of a user: everything but the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// A project record. Only `id` is owned by the server; every other field is
/// whatever the client sent (usually `code` and `name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Project {
    pub fn new(id: String, mut fields: Map<String, Value>) -> Self {
        // The flattened map must never carry a second "id" key.
        fields.remove("id");
        Self { id, fields }
    }

    pub fn code(&self) -> Option<&str> {
        self.fields.get("code").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_user_drops_password() {
        let user = User {
            id: "7".to_string(),
            email: "a@b".to_string(),
            password: "secret".to_string(),
            name: "A".to_string(),
        };
        let value = serde_json::to_value(PublicUser::from(&user)).unwrap();
        assert_eq!(value, json!({ "id": "7", "email": "a@b", "name": "A" }));
    }

    #[test]
    fn test_project_serializes_flat() {
        let fields = json!({ "id": "99", "code": "X", "name": "Y", "tags": ["a"] });
        let Value::Object(fields) = fields else { unreachable!() };

        let project = Project::new("3".to_string(), fields);
        assert_eq!(project.code(), Some("X"));
        assert_eq!(project.name(), Some("Y"));
        assert_eq!(
            serde_json::to_value(&project).unwrap(),
            json!({ "id": "3", "code": "X", "name": "Y", "tags": ["a"] })
        );
    }
}
