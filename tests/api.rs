//! End-to-end API tests covering the public catalog, lead capture, and the
//! session-guarded admin panel.

mod test_utils;

use axum::http::StatusCode;
use serde_json::json;
use test_utils::{login, request, spawn_app};

#[tokio::test]
async fn category_lifecycle_with_delete_protection() {
    let app = spawn_app().await;
    let token = login(&app).await;

    // Create a category; it lists with product count 0
    let (status, created) = request(
        &app,
        "POST",
        "/admin/categories",
        Some(&token),
        Some(json!({ "name": "Shrimp Feed", "display_order": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = created["id"].as_i64().unwrap();
    assert_eq!(created["product_count"], 0);

    let (_, listed) = request(&app, "GET", "/admin/categories", Some(&token), None).await;
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_i64() == Some(category_id))
        .unwrap();
    assert_eq!(entry["product_count"], 0);

    // Link a product; the count follows
    let (status, product) = request(
        &app,
        "POST",
        "/admin/products",
        Some(&token),
        Some(json!({ "name": "Shrimp Crumble", "category_id": category_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = product["id"].as_i64().unwrap();

    let (_, listed) = request(&app, "GET", "/admin/categories", Some(&token), None).await;
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_i64() == Some(category_id))
        .unwrap();
    assert_eq!(entry["product_count"], 1);

    // Deleting the category is refused while the product is linked
    let uri = format!("/admin/categories/{}", category_id);
    let (status, body) = request(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("1 product(s)"));

    // Delete the product, then the category deletion succeeds
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/admin/products/{}", product_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = request(&app, "GET", "/admin/categories", Some(&token), None).await;
    assert!(
        listed
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["id"].as_i64() != Some(category_id))
    );
}

#[tokio::test]
async fn admin_mutations_without_session_leave_store_unchanged() {
    let app = spawn_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/admin/categories",
        None,
        Some(json!({ "name": "Ghost Category" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    // An expired or garbage token is rejected the same way
    let (status, _) = request(
        &app,
        "POST",
        "/admin/categories",
        Some("not-a-real-token"),
        Some(json!({ "name": "Ghost Category" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Nothing was written
    let (_, categories) = request(&app, "GET", "/categories", None, None).await;
    assert!(categories.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn public_listings_expose_only_active_products() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let (_, category) = request(
        &app,
        "POST",
        "/admin/categories",
        Some(&token),
        Some(json!({ "name": "Floating Feed", "display_order": 1 })),
    )
    .await;
    let category_id = category["id"].as_i64().unwrap();

    for (name, active) in [("Visible", true), ("Hidden", false)] {
        let (status, _) = request(
            &app,
            "POST",
            "/admin/products",
            Some(&token),
            Some(json!({
                "name": name,
                "category_id": category_id,
                "is_active": active,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, public) = request(&app, "GET", "/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let products = public.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Visible");
    assert_eq!(products[0]["category"]["name"], "Floating Feed");
    // No internal timestamps in the public view
    assert!(products[0].get("created_at").is_none());

    let (_, admin_view) = request(&app, "GET", "/admin/products", Some(&token), None).await;
    assert_eq!(admin_view.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn pincode_registry_and_public_check() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let (status, created) = request(
        &app,
        "POST",
        "/admin/pincodes",
        Some(&token),
        Some(json!({ "code": "700001", "area": "Kolkata" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let pincode_id = created["id"].as_i64().unwrap();

    // Duplicate codes conflict
    let (status, _) = request(
        &app,
        "POST",
        "/admin/pincodes",
        Some(&token),
        Some(json!({ "code": "700001" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Malformed codes are rejected
    let (status, _) = request(
        &app,
        "POST",
        "/admin/pincodes",
        Some(&token),
        Some(json!({ "code": "70001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Public check: available with area for the active record
    let (status, check) = request(&app, "GET", "/check-pincode?code=700001", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["available"], true);
    assert_eq!(check["area"], "Kolkata");

    let (_, check) = request(&app, "GET", "/check-pincode?code=700002", None, None).await;
    assert_eq!(check["available"], false);

    // Deactivation turns the check off
    let (status, _) = request(
        &app,
        "PUT",
        &format!("/admin/pincodes/{}", pincode_id),
        Some(&token),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, check) = request(&app, "GET", "/check-pincode?code=700001", None, None).await;
    assert_eq!(check["available"], false);
}

#[tokio::test]
async fn inquiry_submission_and_order_management() {
    let app = spawn_app().await;
    let token = login(&app).await;

    // Empty catalog refuses the lead
    let lead = json!({
        "customer_name": "Ravi Das",
        "phone": "9876543210",
        "district": "Hooghly",
        "state": "West Bengal",
        "pincode": "712103",
        "address": "Village road",
        "product_name": "grower",
    });
    let (status, _) = request(&app, "POST", "/inquire", None, Some(lead.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Seed one product
    let (_, category) = request(
        &app,
        "POST",
        "/admin/categories",
        Some(&token),
        Some(json!({ "name": "Floating Feed" })),
    )
    .await;
    let (_, _) = request(
        &app,
        "POST",
        "/admin/products",
        Some(&token),
        Some(json!({ "name": "Grower 2mm", "category_id": category["id"] })),
    )
    .await;

    // Now the lead lands, with a positive correlation id
    let (status, submitted) = request(&app, "POST", "/inquire", None, Some(lead)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submitted["success"], true);
    let order_id = submitted["id"].as_i64().unwrap();
    assert!(order_id > 0);

    // Missing required field is a 400
    let (status, body) = request(
        &app,
        "POST",
        "/inquire",
        None,
        Some(json!({
            "customer_name": "Ravi Das",
            "phone": "",
            "district": "Hooghly",
            "state": "West Bengal",
            "pincode": "712103",
            "address": "Village road",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("phone"));

    // Admin sees the lead with its product and category
    let (_, orders) = request(&app, "GET", "/admin/orders", Some(&token), None).await;
    let order = &orders.as_array().unwrap()[0];
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["quantity"], "Not specified");
    assert_eq!(order["product"]["name"], "Grower 2mm");
    assert_eq!(order["product"]["category"], "Floating Feed");

    // Status outside the enum is rejected
    let uri = format!("/admin/orders/{}", order_id);
    let (status, _) = request(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "status": "INVALID" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A valid status persists and shows up in the next list
    let (status, _) = request(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "status": "COMPLETED" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, orders) = request(&app, "GET", "/admin/orders", Some(&token), None).await;
    assert_eq!(orders.as_array().unwrap()[0]["status"], "COMPLETED");

    // Permanent deletion
    let (status, _) = request(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, orders) = request(&app, "GET", "/admin/orders", Some(&token), None).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dealer_application_flow() {
    let app = spawn_app().await;
    let token = login(&app).await;

    // Required fields enforced
    let (status, body) = request(
        &app,
        "POST",
        "/dealer",
        None,
        Some(json!({ "name": "Santanu Paul", "phone": "9830012345" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("details"));

    let (status, submitted) = request(
        &app,
        "POST",
        "/dealer",
        None,
        Some(json!({
            "name": "Santanu Paul",
            "phone": "9830012345",
            "business": "Paul Agro Traders",
            "details": "Interested in a district dealership",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let dealer_id = submitted["id"].as_i64().unwrap();

    // Order-only status values must not cross over
    let uri = format!("/admin/dealers/{}", dealer_id);
    let (status, _) = request(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "status": "CONTACTED" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = request(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "status": "REVIEWING" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "REVIEWING");

    let (_, dealers) = request(&app, "GET", "/admin/dealers", Some(&token), None).await;
    assert_eq!(dealers.as_array().unwrap()[0]["status"], "REVIEWING");
}

#[tokio::test]
async fn stats_reflect_store_contents() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let (_, before) = request(&app, "GET", "/admin/stats", Some(&token), None).await;
    assert_eq!(before["products"], 0);
    assert_eq!(before["pending_orders"], 0);

    let (_, category) = request(
        &app,
        "POST",
        "/admin/categories",
        Some(&token),
        Some(json!({ "name": "Floating Feed" })),
    )
    .await;
    request(
        &app,
        "POST",
        "/admin/products",
        Some(&token),
        Some(json!({ "name": "Grower 2mm", "category_id": category["id"] })),
    )
    .await;
    request(
        &app,
        "POST",
        "/inquire",
        None,
        Some(json!({
            "customer_name": "Ravi Das",
            "phone": "9876543210",
            "district": "Hooghly",
            "state": "West Bengal",
            "pincode": "712103",
            "address": "Village road",
        })),
    )
    .await;

    let (_, after) = request(&app, "GET", "/admin/stats", Some(&token), None).await;
    assert_eq!(after["products"], 1);
    assert_eq!(after["orders"], 1);
    assert_eq!(after["pending_orders"], 1);
    assert_eq!(after["pincodes"], 0);
    assert_eq!(after["dealers"], 0);
}

#[tokio::test]
async fn validation_failures_use_the_error_field() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/admin/categories",
        Some(&token),
        Some(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
    assert_eq!(body["code"], "VALIDATION_FAILED");
}
