use super::{ApiClient, ClientError};
use crate::{
    dto::auth::{
        AdminSignupRequest, LoginArea, LoginRequest, LoginResponse, PasswordChangeRequest,
        SignupRequest,
    },
    models::Pharmacy,
};

impl ApiClient {
    pub async fn login(
        &self,
        area: LoginArea,
        request: &LoginRequest,
    ) -> Result<LoginResponse, ClientError> {
        self.data(self.post(area.login_path(), request)).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.ack(self.post("/auth/logout", &serde_json::json!({}))).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ClientError> {
        self.ack(self.post("/auth/signup", request)).await
    }

    pub async fn admin_signup(&self, request: &AdminSignupRequest) -> Result<(), ClientError> {
        self.ack(self.post("/auth/admin/signup", request)).await
    }

    pub async fn change_password(&self, request: &PasswordChangeRequest) -> Result<(), ClientError> {
        self.ack(self.put("/auth/password", request)).await
    }

    pub async fn update_pharmacy(&self, pharmacy: &Pharmacy) -> Result<(), ClientError> {
        self.ack(self.put(&format!("/auth/update/{}", pharmacy.pharmacy_id), pharmacy))
            .await
    }
}
