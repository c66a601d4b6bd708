pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod view_model;

pub use crate::domain::model::{CartItem, CheckoutForm, Course, Page, SortKey, SortOrder};
pub use crate::domain::ports::{ConfigProvider, CourseApi};
pub use crate::utils::error::Result;
