use super::{ApiClient, ClientError, Paged};
use crate::{
    dto::announcements::{AnnouncementQuery, AnnouncementRequest},
    models::Announcement,
};

impl ApiClient {
    pub async fn announcements(
        &self,
        query: &AnnouncementQuery,
    ) -> Result<Paged<Announcement>, ClientError> {
        self.page(self.get("/announcements").query(query)).await
    }

    pub async fn announcement(&self, announcement_id: i64) -> Result<Announcement, ClientError> {
        self.data(self.get(&format!("/announcements/{announcement_id}")))
            .await
    }

    pub async fn create_announcement(
        &self,
        request: &AnnouncementRequest,
    ) -> Result<Announcement, ClientError> {
        if request.title.trim().is_empty() {
            return Err(ClientError::Invalid("제목을 입력해 주세요.".into()));
        }
        self.data(self.post("/announcements", request)).await
    }

    pub async fn update_announcement(
        &self,
        announcement_id: i64,
        request: &AnnouncementRequest,
    ) -> Result<Announcement, ClientError> {
        self.data(self.put(&format!("/announcements/{announcement_id}"), request))
            .await
    }

    pub async fn delete_announcement(&self, announcement_id: i64) -> Result<(), ClientError> {
        self.ack(self.delete(&format!("/announcements/{announcement_id}")))
            .await
    }
}
