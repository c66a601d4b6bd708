use course_cart::{ApiConfig, CartViewModel, HttpCourseApi, SortKey};
use httpmock::prelude::*;
use serde_json::json;

fn view_model_for(server: &MockServer, sync_cart: bool) -> CartViewModel<HttpCourseApi> {
    let config = ApiConfig {
        base_url: server.base_url(),
        sync_cart,
        ..ApiConfig::default()
    };
    let api = HttpCourseApi::new(&config).unwrap();
    CartViewModel::new(api).with_cart_sync(sync_cart)
}

fn mock_catalog(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/api/courses");
        then.status(200).json_body(json!([
            {"_id": "math", "title": "Math", "location": "Hendon", "price": 100, "image": "m.png", "spacesAvailable": 2},
            {"_id": "art", "title": "Art", "location": "Colindale", "price": 80, "image": "a.png", "spacesAvailable": 0},
            {"_id": "music", "title": "Music", "location": "Brent Cross", "price": 90, "image": "u.png", "spacesAvailable": 1}
        ]));
    })
}

#[tokio::test]
async fn test_browse_reserve_and_checkout() {
    let server = MockServer::start();
    let catalog_mock = mock_catalog(&server);
    let checkout_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/checkout")
            .body_contains("\"name\":\"John Doe\"")
            .body_contains("\"_id\":\"math\"");
        then.status(200).json_body(json!({"message": "OK"}));
    });

    let mut vm = view_model_for(&server, false);
    assert!(vm.fetch_courses().await);
    catalog_mock.assert();
    assert!(!vm.loading());

    vm.sort_courses(SortKey::Price);
    let prices: Vec<f64> = vm.filtered_courses().iter().map(|c| c.price).collect();
    assert_eq!(prices, vec![80.0, 90.0, 100.0]);

    // full course is ignored
    assert!(!vm.add_to_cart("art").await);
    assert!(vm.add_to_cart("math").await);
    assert_eq!(vm.cart_count(), 1);

    vm.set_name("John Doe");
    vm.set_phone("5551234");
    assert!(vm.checkout().await);

    checkout_mock.assert();
    assert_eq!(vm.success_message(), Some("OK"));
    assert_eq!(vm.cart_count(), 0);
    assert_eq!(vm.checkout_form().name, "");
    assert_eq!(vm.checkout_form().phone, "");
}

#[tokio::test]
async fn test_blocked_checkout_never_hits_server() {
    let server = MockServer::start();
    mock_catalog(&server);
    let checkout_mock = server.mock(|when, then| {
        when.method(POST).path("/checkout");
        then.status(200).json_body(json!({"message": "OK"}));
    });

    let mut vm = view_model_for(&server, false);
    vm.fetch_courses().await;

    vm.set_name("John Doe");
    vm.set_phone("5551234");
    assert!(!vm.checkout().await, "empty cart must block checkout");

    vm.add_to_cart("music").await;
    vm.set_name("John3");
    assert!(!vm.checkout().await);
    assert_eq!(vm.error(), Some("Please enter valid information."));

    checkout_mock.assert_hits(0);
    assert_eq!(vm.cart_count(), 1);
}

#[tokio::test]
async fn test_cart_sync_posts_each_reservation() {
    let server = MockServer::start();
    mock_catalog(&server);
    let cart_mock = server.mock(|when, then| {
        when.method(POST).path("/api/cart").body_contains("\"courseId\":\"math\"");
        then.status(201).json_body(json!({"cartItemId": "line-1"}));
    });

    let mut vm = view_model_for(&server, true);
    vm.fetch_courses().await;
    vm.add_to_cart("math").await;
    vm.add_to_cart("math").await;
    // no seats left, nothing posted
    vm.add_to_cart("math").await;

    cart_mock.assert_hits(2);
    assert_eq!(vm.error(), None);
    assert_eq!(vm.courses()[0].spaces_available, 0);
}

#[tokio::test]
async fn test_cart_sync_failure_is_non_blocking() {
    let server = MockServer::start();
    mock_catalog(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/cart");
        then.status(503);
    });

    let mut vm = view_model_for(&server, true);
    vm.fetch_courses().await;
    assert!(vm.add_to_cart("music").await);

    assert_eq!(vm.cart_count(), 1);
    assert_eq!(
        vm.error(),
        Some("Error saving to cart: Failed to save item to cart")
    );
}

#[tokio::test]
async fn test_unreachable_backend_surfaces_fetch_error() {
    let config = ApiConfig {
        // nothing listens on the discard port
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        ..ApiConfig::default()
    };
    let mut vm = CartViewModel::new(HttpCourseApi::new(&config).unwrap());

    assert!(!vm.fetch_courses().await);
    assert!(!vm.loading());
    assert!(vm.courses().is_empty());
    assert!(vm
        .error()
        .unwrap()
        .starts_with("Error retrieving courses: HTTP request failed"));
}

#[tokio::test]
async fn test_blank_error_in_checkout_reply_is_success() {
    let server = MockServer::start();
    mock_catalog(&server);
    let checkout_mock = server.mock(|when, then| {
        when.method(POST).path("/checkout");
        then.status(200).json_body(json!({"error": "", "message": "OK"}));
    });

    let mut vm = view_model_for(&server, false);
    vm.fetch_courses().await;
    vm.add_to_cart("math").await;
    vm.set_name("John Doe");
    vm.set_phone("5551234");

    assert!(vm.checkout().await);
    checkout_mock.assert();
    assert_eq!(vm.success_message(), Some("OK"));
    assert_eq!(vm.error(), None);
    assert_eq!(vm.cart_count(), 0);
    assert_eq!(vm.checkout_form().name, "");
}
