// booking-client/tests/fetch_integration.rs
// Integration tests against a local axum server

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use booking_client::{AppContext, ClientConfig, ClientError, DiningTableStatus};
use serde_json::{Value, json};

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route(
            "/api/restaurants",
            get(|| async {
                Json(json!([
                    {"id": 1, "name": "Le Bistro", "address": "1 Main St", "phoneNumber": "0102030405"},
                    {"id": 2, "name": "Chez Paul", "address": "2 Oak Ave", "phoneNumber": null}
                ]))
            }),
        )
        .route(
            "/api/customers",
            get(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": "Une ressource avec ces données existe déjà"})),
                )
            }),
        )
        .route(
            "/api/tables/restaurant/{id}",
            get(|Path(id): Path<i64>| async move {
                let restaurant = json!({"id": id, "name": "Chez Paul", "address": "2 Oak Ave"});
                Json::<Value>(json!([
                    {"id": 20, "capacity": 6, "status": "AVAILABLE", "restaurant": restaurant},
                    {"id": 21, "capacity": 8, "status": "MAINTENANCE", "restaurant": restaurant}
                ]))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn context(addr: SocketAddr) -> AppContext<booking_client::NetworkHttpClient> {
    let config = ClientConfig::new(format!("http://{}", addr))
        .with_timeout(5)
        .with_search_debounce(Duration::from_millis(20));
    AppContext::new(config).unwrap()
}

#[tokio::test]
async fn test_load_restaurants_over_http() {
    let ctx = context(serve().await);

    ctx.restaurant_service().load_restaurants().await.unwrap();

    let query = ctx.restaurant_query();
    assert!(!query.is_loading());
    assert!(query.get_error().is_none());
    let restaurants = query.get_all();
    assert_eq!(restaurants.len(), 2);
    assert_eq!(restaurants[0].phone_number.as_deref(), Some("0102030405"));
    assert_eq!(restaurants[1].name, "Chez Paul");
}

#[tokio::test]
async fn test_error_body_is_surfaced() {
    let ctx = context(serve().await);

    ctx.customer_service().load_customers().await.unwrap();

    let error = ctx.customer_query().get_error().expect("fetch should fail");
    match &*error {
        ClientError::Conflict(message) => {
            assert_eq!(message, "Une ressource avec ces données existe déjà")
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!ctx.customer_query().is_loading());
}

#[tokio::test]
async fn test_unreachable_server_records_http_error() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let ctx = context(addr);

    ctx.restaurant_service().load_restaurants().await.unwrap();

    let error = ctx.restaurant_query().get_error().unwrap();
    assert!(matches!(*error, ClientError::Http(_)));
}

#[tokio::test]
async fn test_detail_view_loads_tables() {
    let ctx = context(serve().await);
    ctx.restaurant_service().load_restaurants().await.unwrap();

    let detail = ctx.restaurant_detail(2);
    let mut count = detail.select_table_count();
    tokio::time::timeout(Duration::from_secs(5), async {
        while count.next().await != Some(2) {}
    })
    .await
    .unwrap();

    let tables = ctx.dining_table_query().get_all();
    assert!(tables.iter().all(|t| t.restaurant_id == 2));
    assert_eq!(tables[1].status, DiningTableStatus::Maintenance);

    let list = ctx.dining_table_list(detail.restaurant_id());
    list.list().on_search("8");
    tokio::time::timeout(Duration::from_secs(5), async {
        let mut rx = list.list().subscribe();
        while rx.borrow_and_update().term != "8" {
            rx.changed().await.unwrap();
        }
    })
    .await
    .unwrap();
    let visible = list.list().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 21);
    assert_eq!(list.restaurant_of(&visible[0]).map(|r| r.id), Some(2));
}
