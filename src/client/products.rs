use super::{ApiClient, ClientError, Paged};
use crate::{
    dto::products::{ProductQuery, ProductRequest},
    models::Product,
};

impl ApiClient {
    pub async fn products(&self, query: &ProductQuery) -> Result<Paged<Product>, ClientError> {
        self.page(self.get("/products/filter").query(query)).await
    }

    pub async fn product(&self, product_id: i64) -> Result<Product, ClientError> {
        self.data(self.get(&format!("/products/{product_id}"))).await
    }

    pub async fn create_product(&self, request: &ProductRequest) -> Result<Product, ClientError> {
        request.validate()?;
        self.data(self.post("/products", request)).await
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        request: &ProductRequest,
    ) -> Result<Product, ClientError> {
        request.validate()?;
        self.data(self.put(&format!("/products/{product_id}"), request))
            .await
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<(), ClientError> {
        self.ack(self.delete(&format!("/products/{product_id}"))).await
    }
}
