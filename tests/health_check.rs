mod common;

#[tokio::test]
async fn health_check_works() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app.get("/health_check").await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn check_db_connection_reports_connected() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app.get("/check-db-connection").await;

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "connected");
}
