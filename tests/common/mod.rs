//! Helpers for integration tests.
#![allow(dead_code, unused_macros)]

use studio_booking::domain::category::NewCategory;
use studio_booking::domain::class::NewClass;
use studio_booking::domain::location::NewLocation;
use studio_booking::domain::types::{
    CategoryId, CategoryName, ClassTitle, LocationId, LocationName, PriceCents, SpotCount,
    Username,
};
use studio_booking::repository::MemoryRepository;
use studio_booking::seed::seed_sample_data;
use studio_booking::services::auth::ensure_admin_account;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Repository holding the demo catalogue and the admin account.
pub fn seeded_repo() -> MemoryRepository {
    let repo = MemoryRepository::new();
    ensure_admin_account(Username::new(ADMIN_USERNAME).unwrap(), ADMIN_PASSWORD, &repo)
        .expect("admin account");
    seed_sample_data(&repo).expect("sample data");
    repo
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).unwrap(),
        color: "#3B82F6".to_string(),
        text_color: "#1E40AF".to_string(),
        bg_color: "#DBEAFE".to_string(),
    }
}

pub fn new_location(name: &str) -> NewLocation {
    NewLocation {
        name: LocationName::new(name).unwrap(),
        address: Some("123 Main St".to_string()),
    }
}

pub fn new_class(
    title: &str,
    category_id: CategoryId,
    location_id: LocationId,
    total: i32,
    available: i32,
) -> NewClass {
    NewClass {
        title: ClassTitle::new(title).unwrap(),
        description: format!("{title} for everyone"),
        price: PriceCents::new(6500).unwrap(),
        price_unit: "per person".to_string(),
        total_spots: SpotCount::new(total).unwrap(),
        available_spots: SpotCount::new(available).unwrap(),
        image_url: String::new(),
        date: "Wed, June 15".to_string(),
        time: "6:00 PM - 8:00 PM".to_string(),
        category_id,
        location_id,
    }
}

/// Build the full application around `repo` with the session stack.
macro_rules! test_app {
    ($repo:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_identity::IdentityMiddleware::default())
                .wrap(studio_booking::routes::auth::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(actix_web::web::Data::new($repo.clone()))
                .configure(studio_booking::routes::configure),
        )
        .await
    };
}

/// Log in and return the session cookie.
macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "username": $username, "password": $password }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK, "login failed");
        resp.response()
            .cookies()
            .find(|c| c.name() == studio_booking::routes::auth::SESSION_COOKIE)
            .map(|c| c.into_owned())
            .expect("session cookie")
    }};
}

/// Register a regular user and return the session cookie.
macro_rules! register {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/register")
            .set_json(serde_json::json!({ "username": $username, "password": $password }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::CREATED,
            "registration failed"
        );
        resp.response()
            .cookies()
            .find(|c| c.name() == studio_booking::routes::auth::SESSION_COOKIE)
            .map(|c| c.into_owned())
            .expect("session cookie")
    }};
}
