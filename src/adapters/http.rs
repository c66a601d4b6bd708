use crate::domain::model::{
    CartSyncRequest, CartSyncResponse, CheckoutResponse, Course, OrderRequest,
};
use crate::domain::ports::{ConfigProvider, CourseApi};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `CourseApi` backed by the course backend's JSON endpoints.
pub struct HttpCourseApi {
    client: Client,
    courses_url: String,
    cart_url: String,
    checkout_url: String,
}

impl HttpCourseApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            courses_url: config.courses_url(),
            cart_url: config.cart_url(),
            checkout_url: config.checkout_url(),
        })
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        tracing::debug!("Fetching courses from: {}", self.courses_url);
        let response = self.client.get(&self.courses_url).send().await?;
        tracing::debug!("Courses response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CartError::StatusError {
                status: response.status().as_u16(),
                context: "Failed to fetch courses".to_string(),
            });
        }

        let courses: Vec<Course> = response.json().await?;
        tracing::debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }

    async fn save_cart_item(&self, item: &CartSyncRequest) -> Result<CartSyncResponse> {
        tracing::debug!("Saving cart item {} to: {}", item.course_id, self.cart_url);
        let response = self.client.post(&self.cart_url).json(item).send().await?;

        if !response.status().is_success() {
            return Err(CartError::StatusError {
                status: response.status().as_u16(),
                context: "Failed to save item to cart".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    async fn submit_checkout(&self, order: &OrderRequest) -> Result<CheckoutResponse> {
        tracing::debug!(
            "Submitting order with {} items to: {}",
            order.cart.len(),
            self.checkout_url
        );
        let response = self
            .client
            .post(&self.checkout_url)
            .json(order)
            .send()
            .await?;
        tracing::debug!("Checkout response status: {}", response.status());

        // The backend reports rejected orders in the body, whatever the status.
        let body = response.bytes().await?;
        let parsed: CheckoutResponse = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}
