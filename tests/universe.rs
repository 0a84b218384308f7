mod common;

use serde_json::{json, Value};

// test me: cargo t --test universe -- --nocapture --show-output
#[tokio::test]
async fn laniakea_round_trip() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app.post("/initiate-universe", Value::Null).await;
    assert!(response.status().is_success());
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"success": true})
    );

    let response = app
        .post(
            "/insert-universe",
            json!({"name": "Laniakea", "age": 13.8e9, "rate": 67.8}),
        )
        .await;
    assert!(response.status().is_success());

    assert_eq!(app.data("/get-universe").await, json!([["Laniakea"]]));
    assert_eq!(
        app.data("/universe").await,
        json!([["Laniakea", 13.8e9, 67.8]])
    );

    let response = app.get("/count-universe").await;
    assert!(response.status().is_success());
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"success": true, "count": 1})
    );
}

#[tokio::test]
async fn initiate_twice_succeeds() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    app.initiate_all().await;
    app.initiate_all().await;

    assert_eq!(app.data("/universe").await, json!([]));
}

#[tokio::test]
async fn initiate_clears_existing_rows() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    app.initiate_all().await;
    app.post("/insert-universe", json!({"name": "Laniakea"}))
        .await;

    let response = app.post("/initiate-universe", Value::Null).await;
    assert!(response.status().is_success());
    assert_eq!(app.data("/universe").await, json!([]));
}

#[tokio::test]
async fn duplicate_universe_is_rejected() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.initiate_all().await;

    let body = json!({"name": "Laniakea", "age": "13.8e9", "rate": "67.8"});
    assert!(app.post("/insert-universe", body.clone()).await.status().is_success());

    let response = app.post("/insert-universe", body).await;
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.json::<Value>().await.unwrap()["success"], json!(false));
}

#[tokio::test]
async fn insert_without_table_fails() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .post("/insert-universe", json!({"name": "Laniakea"}))
        .await;
    assert_eq!(response.status().as_u16(), 500);

    // A failed fetch is an error, not an empty listing.
    assert_eq!(app.get("/universe").await.status().as_u16(), 500);
}

#[tokio::test]
async fn invalid_name_is_a_bad_request() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.initiate_all().await;

    let response = app
        .post("/insert-universe", json!({"name": "", "age": 1}))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post("/insert-universe", json!({"name": "Virgo", "age": "old"}))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn count_tracks_inserts_and_deletes() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.initiate_all().await;

    for name in ["Laniakea", "Perseus-Pisces", "Shapley", "Hercules"] {
        let response = app.post("/insert-universe", json!({"name": name})).await;
        assert!(response.status().is_success());
    }
    for name in ["Shapley", "Hercules"] {
        let response = app.delete("/delete-universe", json!({"name": name})).await;
        assert!(response.status().is_success());
    }

    let count: Value = app.get("/count-universe").await.json().await.unwrap();
    assert_eq!(count, json!({"success": true, "count": 2}));

    let response = app
        .delete("/delete-universe", json!({"name": "Shapley"}))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn projection_returns_requested_columns() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.initiate_all().await;
    app.post(
        "/insert-universe",
        json!({"name": "Laniakea", "age": 13.8e9, "rate": 67.8}),
    )
    .await;

    let response = app
        .post(
            "/project-universe",
            json!({"columns": ["EXPANSIONARYRATE", "UNIVERSALNAME"]}),
        )
        .await;
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"], json!([[67.8, "Laniakea"]]));

    let response = app
        .post("/project-universe", json!({"columns": ["MASS"]}))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post("/project-universe", json!({"columns": []}))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
