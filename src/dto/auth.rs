use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AdminDepartment, Profile, User};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, alias = "token", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub user: User,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub pharmacy_name: String,
    pub biz_reg_no: String,
    pub representative_name: String,
    pub postcode: String,
    pub address: String,
    pub detail_address: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSignupRequest {
    pub email: String,
    pub password: String,
    pub admin_name: String,
    pub department: AdminDepartment,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Which portal a user signs in to; each has its own login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginArea {
    Branch,
    Hq,
}

impl LoginArea {
    pub fn login_path(self) -> &'static str {
        match self {
            LoginArea::Branch => "/auth/login",
            LoginArea::Hq => "/auth/admin/login",
        }
    }
}
