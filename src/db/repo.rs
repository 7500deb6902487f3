use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::db::models::{Project, User};

/// Users known at startup. Never mutated afterwards.
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(vec![User {
            id: "1".to_string(),
            email: "test@local".to_string(),
            password: "1234".to_string(),
            name: "Demo User".to_string(),
        }])
    }

    /// First user whose email and password both match exactly (case-sensitive).
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }
}

/// Append-only project list.
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }

    pub fn seeded() -> Self {
        let mut fields = Map::new();
        fields.insert("code".to_string(), Value::from("PRJ1"));
        fields.insert("name".to_string(), Value::from("Demo Project"));
        Self::new(vec![Project::new("1".to_string(), fields)])
    }

    pub async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Stores a new project with id `len + 1`, ignoring any client `id`.
    ///
    /// The length read and the push happen under one write guard, so two
    /// concurrent creates can never be handed the same id.
    pub async fn create(&self, fields: Map<String, Value>) -> Project {
        let mut projects = self.projects.write().await;
        let project = Project::new((projects.len() + 1).to_string(), fields);
        projects.push(project.clone());
        project
    }
}
