use crate::core::{cart, catalog, checkout};
use crate::domain::model::{
    CartItem, CartSyncRequest, CheckoutForm, Course, Page, SortKey, SortOrder,
};
use crate::domain::ports::CourseApi;
use crate::utils::error::CartError;

/// Client-side state of the course shop: catalog cache, cart, view settings
/// and checkout form.
///
/// Every failure ends up in [`error`](Self::error) as a user-facing string;
/// no operation here returns an error or panics on backend trouble.
pub struct CartViewModel<A: CourseApi> {
    api: A,
    sync_cart: bool,
    courses: Vec<Course>,
    cart: Vec<CartItem>,
    search_query: String,
    loading: bool,
    error: Option<String>,
    sort_key: SortKey,
    sort_order: SortOrder,
    checkout_form: CheckoutForm,
    success_message: Option<String>,
    current_page: Page,
}

impl<A: CourseApi> CartViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            sync_cart: false,
            courses: Vec::new(),
            cart: Vec::new(),
            search_query: String::new(),
            // nothing has been fetched yet
            loading: true,
            error: None,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            checkout_form: CheckoutForm::default(),
            success_message: None,
            current_page: Page::default(),
        }
    }

    /// Mirror each reservation to the backend's cart endpoint.
    pub fn with_cart_sync(mut self, enabled: bool) -> Self {
        self.sync_cart = enabled;
        self
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn sort_courses(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn toggle_page(&mut self) {
        self.current_page = self.current_page.toggled();
    }

    pub fn checkout_form(&self) -> &CheckoutForm {
        &self.checkout_form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.checkout_form.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.checkout_form.phone = phone.into();
    }

    pub fn is_name_valid(&self) -> bool {
        checkout::is_name_valid(&self.checkout_form.name)
    }

    pub fn is_phone_valid(&self) -> bool {
        checkout::is_phone_valid(&self.checkout_form.phone)
    }

    pub fn can_checkout(&self) -> bool {
        checkout::can_checkout(&self.checkout_form, &self.cart)
    }

    /// Current catalog view after search and sort.
    pub fn filtered_courses(&self) -> Vec<Course> {
        catalog::filtered_courses(
            &self.courses,
            &self.search_query,
            self.sort_key,
            self.sort_order,
        )
    }

    /// Loads the catalog. On failure the previous catalog is kept.
    pub async fn fetch_courses(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let fetched = self.api.fetch_courses().await;
        self.loading = false;

        match fetched {
            Ok(courses) => {
                tracing::info!("Loaded {} courses", courses.len());
                self.courses = courses;
                true
            }
            Err(e) => {
                tracing::warn!("Course fetch failed: {}", e);
                self.error = Some(format!("Error retrieving courses: {}", e));
                false
            }
        }
    }

    /// Reserves one seat. Full or unknown courses are ignored.
    ///
    /// With cart sync on, a failed save is reported in `error` but the local
    /// reservation stands.
    pub async fn add_to_cart(&mut self, course_id: &str) -> bool {
        let Some(item) = cart::add_to_cart(&mut self.courses, &mut self.cart, course_id) else {
            tracing::debug!("Course {} unavailable, cart unchanged", course_id);
            return false;
        };
        tracing::info!(
            "Reserved a seat on {} ({} left)",
            item.id(),
            item.course().spaces_available
        );

        if self.sync_cart {
            let request = CartSyncRequest::from(item.course());
            match self.api.save_cart_item(&request).await {
                Ok(saved) => {
                    tracing::info!("Item saved to cart with ID: {:?}", saved.cart_item_id);
                }
                Err(e) => {
                    tracing::warn!("Error saving to cart: {}", e);
                    self.error = Some(format!("Error saving to cart: {}", e));
                }
            }
        }
        true
    }

    pub fn remove_from_cart(&mut self, course_id: &str) -> bool {
        let removed = cart::remove_from_cart(&mut self.courses, &mut self.cart, course_id);
        if removed {
            tracing::info!("Released a seat on {}", course_id);
        }
        removed
    }

    /// Submits the cart with the form's contact details.
    ///
    /// An empty `error` in the response counts as no error. On success the
    /// cart and form are cleared; an earlier `error` is left in place. Any
    /// failure leaves cart and form as they were so the user can resubmit.
    pub async fn checkout(&mut self) -> bool {
        let order = match checkout::build_order(&self.checkout_form, &self.cart) {
            Ok(order) => order,
            Err(e) => {
                self.error = Some(e.to_string());
                return false;
            }
        };

        let outcome = match self.api.submit_checkout(&order).await {
            Ok(response) => match response.error.filter(|e| !e.is_empty()) {
                Some(message) => Err(CartError::CheckoutError { message }),
                None => Ok(response.message.unwrap_or_default()),
            },
            Err(e) => Err(CartError::CheckoutError {
                message: format!("Error during checkout: {}", e),
            }),
        };

        match outcome {
            Ok(message) => {
                tracing::info!("Checkout accepted for {} items", order.cart.len());
                self.success_message = Some(message);
                self.cart.clear();
                self.checkout_form = CheckoutForm::default();
                true
            }
            Err(e) => {
                tracing::warn!("Checkout failed: {}", e);
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
