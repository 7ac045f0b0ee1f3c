use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Admin,
    Employee,
    Owner,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Owner => "owner",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Student, Role::Admin, Role::Employee, Role::Owner]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .into_iter()
            .find(|role| role.code() == s)
            .ok_or_else(|| format!("Unknown role: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub title: String,
    pub icon: String,
}

impl NavItem {
    pub fn new(href: &str, title: &str, icon: &str) -> Self {
        Self {
            href: href.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
        }
    }
}
