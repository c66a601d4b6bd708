use crate::domain::model::{
    CartSyncRequest, CartSyncResponse, CheckoutResponse, Course, OrderRequest,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn courses_url(&self) -> String;
    fn cart_url(&self) -> String;
    fn checkout_url(&self) -> String;
    fn request_timeout(&self) -> Duration;
    fn sync_cart(&self) -> bool;
}

/// Backend operations the cart view-model depends on.
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>>;
    async fn save_cart_item(&self, item: &CartSyncRequest) -> Result<CartSyncResponse>;
    async fn submit_checkout(&self, order: &OrderRequest) -> Result<CheckoutResponse>;
}
