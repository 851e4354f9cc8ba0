use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn from_db(value: &str) -> Self {
        if value.eq_ignore_ascii_case("ADMIN") {
            Self::Admin
        } else {
            Self::User
        }
    }
}

pub struct Author {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Notice row joined with its author's email.
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub author_email: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}
