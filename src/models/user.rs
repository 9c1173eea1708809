use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pharmacy::Pharmacy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Branch,
    #[serde(alias = "HQ")]
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub email: String,
    #[serde(default)]
    pub point: i64,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdminDepartment {
    #[serde(rename = "운영팀")]
    Operations,
    #[serde(rename = "총무팀")]
    GeneralAffairs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub admin_id: i64,
    pub user_id: i64,
    pub admin_name: String,
    pub department: AdminDepartment,
}

/// Profile attached to a signed-in user: a branch pharmacy or an HQ admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Profile {
    Pharmacy(Pharmacy),
    Admin(Admin),
}

impl Profile {
    pub fn display_name(&self) -> &str {
        match self {
            Profile::Pharmacy(p) => &p.pharmacy_name,
            Profile::Admin(a) => &a.admin_name,
        }
    }
}
