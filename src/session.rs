//! In-memory auth store for a signed-in portal user.
//!
//! State changes only through [`AuthStore::login`], [`AuthStore::logout`],
//! [`AuthStore::update_user`] and [`AuthStore::update_profile`]. The state can be
//! snapshotted to JSON; where it is kept between runs is up to the caller.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    client::{ApiClient, ClientError},
    dto::auth::{LoginArea, LoginRequest},
    models::{AdminDepartment, PharmacyStatus, Profile, User},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub profile: Option<Profile>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub email: Option<String>,
    pub point: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyPatch {
    pub pharmacy_name: Option<String>,
    pub representative_name: Option<String>,
    pub postcode: Option<String>,
    pub address: Option<String>,
    pub detail_address: Option<String>,
    pub contact: Option<String>,
    pub status: Option<PharmacyStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPatch {
    pub admin_name: Option<String>,
    pub department: Option<AdminDepartment>,
}

#[derive(Debug, Clone)]
pub enum ProfilePatch {
    Pharmacy(PharmacyPatch),
    Admin(AdminPatch),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("profile update does not match the signed-in profile")]
    ProfileMismatch,

    #[error("session snapshot is unreadable: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct AuthStore {
    state: RwLock<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(snapshot: &str) -> Result<Self, SessionError> {
        let state: AuthState = serde_json::from_str(snapshot)?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    pub fn snapshot(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(&*self.read())?)
    }

    pub fn state(&self) -> AuthState {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }

    /// `base` with the stored access token attached, or without any token when signed out.
    pub fn client(&self, base: &ApiClient) -> ApiClient {
        match &self.read().access_token {
            Some(token) => base.with_token(token.clone()),
            None => base.without_token(),
        }
    }

    /// Signs in through the branch or HQ login endpoint. A failed attempt
    /// leaves the current state untouched.
    pub async fn login(
        &self,
        client: &ApiClient,
        area: LoginArea,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = client.login(area, &request).await.inspect_err(|err| {
            warn!(error = %err, ?area, "login failed");
        })?;

        info!(user_id = response.user.user_id, ?area, "signed in");
        let mut state = self.write();
        *state = AuthState {
            is_authenticated: true,
            user: Some(response.user),
            profile: response.profile,
            access_token: response.access_token,
        };
        Ok(())
    }

    /// Signs out. Local state is cleared even when the backend call fails;
    /// that failure is still reported.
    pub async fn logout(&self, client: &ApiClient) -> Result<(), ClientError> {
        let result = self.client(client).logout().await;
        if let Err(err) = &result {
            warn!(error = %err, "logout request failed, clearing session anyway");
        }
        *self.write() = AuthState::default();
        result
    }

    /// Merges `patch` into the signed-in user. Returns false when nobody is signed in.
    pub fn update_user(&self, patch: UserPatch) -> bool {
        let mut state = self.write();
        let Some(user) = state.user.as_mut() else {
            return false;
        };
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(point) = patch.point {
            user.point = point;
        }
        true
    }

    /// Merges `patch` into the signed-in profile. Returns false when there is
    /// no profile; a patch for the other kind of profile is an error.
    pub fn update_profile(&self, patch: ProfilePatch) -> Result<bool, SessionError> {
        let mut state = self.write();
        let Some(profile) = state.profile.as_mut() else {
            return Ok(false);
        };
        match (profile, patch) {
            (Profile::Pharmacy(pharmacy), ProfilePatch::Pharmacy(patch)) => {
                if let Some(v) = patch.pharmacy_name {
                    pharmacy.pharmacy_name = v;
                }
                if let Some(v) = patch.representative_name {
                    pharmacy.representative_name = v;
                }
                if let Some(v) = patch.postcode {
                    pharmacy.postcode = v;
                }
                if let Some(v) = patch.address {
                    pharmacy.address = v;
                }
                if let Some(v) = patch.detail_address {
                    pharmacy.detail_address = v;
                }
                if let Some(v) = patch.contact {
                    pharmacy.contact = v;
                }
                if let Some(v) = patch.status {
                    pharmacy.status = v;
                }
            }
            (Profile::Admin(admin), ProfilePatch::Admin(patch)) => {
                if let Some(v) = patch.admin_name {
                    admin.admin_name = v;
                }
                if let Some(v) = patch.department {
                    admin.department = v;
                }
            }
            _ => return Err(SessionError::ProfileMismatch),
        }
        Ok(true)
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
