use crate::domain::model::{CartItem, CheckoutForm, OrderRequest};
use crate::utils::error::{CartError, Result};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub const INVALID_CHECKOUT_MESSAGE: &str = "Please enter valid information.";

/// Letters and whitespace only, at least one character.
pub fn is_name_valid(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// ASCII digits only, at least one.
pub fn is_phone_valid(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn can_checkout(form: &CheckoutForm, cart: &[CartItem]) -> bool {
    is_name_valid(&form.name) && is_phone_valid(&form.phone) && !cart.is_empty()
}

/// Builds the order body, or a validation error when submission is blocked.
pub fn build_order(form: &CheckoutForm, cart: &[CartItem]) -> Result<OrderRequest> {
    if !can_checkout(form, cart) {
        return Err(CartError::ValidationError {
            message: INVALID_CHECKOUT_MESSAGE.to_string(),
        });
    }

    Ok(OrderRequest {
        name: form.name.clone(),
        phone: form.phone.clone(),
        cart: cart.to_vec(),
    })
}
