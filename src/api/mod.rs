// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_auth,
    models::{CreateSensorRequest, LoginRequest, Sensor, UpdateSensorRequest},
    state::AppState,
};

pub mod greeting;
pub mod login;
pub mod sensors;

pub fn router(state: AppState) -> Router {
    // The ordered chain for sensor routes is fixed here: token gate, then
    // handler. Greeting and login stay outside the gate.
    let protected = Router::new()
        .route(
            "/sensores",
            get(sensors::list_sensors).post(sensors::create_sensor),
        )
        .route(
            "/sensores/{id}",
            get(sensors::get_sensor)
                .put(sensors::update_sensor)
                .delete(sensors::delete_sensor),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(greeting::greeting))
        .route("/login", post(login::login))
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Mi SmartHome API", version = "v1"),
    paths(
        greeting::greeting,
        login::login,
        sensors::list_sensors,
        sensors::get_sensor,
        sensors::create_sensor,
        sensors::update_sensor,
        sensors::delete_sensor
    ),
    components(schemas(Sensor, CreateSensorRequest, UpdateSensorRequest, LoginRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Greeting", description = "Unauthenticated greeting"),
        (name = "Auth", description = "Credential login issuing bearer tokens"),
        (name = "Sensors", description = "Sensor record management")
    )
)]
struct ApiDoc;

/// Registers the bearer scheme referenced by the sensor operations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthKeys, Claims};
    use crate::store::Store;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const TEST_KEY: &[u8] = b"test-signing-key";

    fn test_state() -> AppState {
        let store = Store::open_in_memory().expect("in-memory store");
        store.upsert_user("ana", "hunter2").expect("seed user");
        AppState::new(store, AuthKeys::from_secret(TEST_KEY))
    }

    fn request(
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login_token(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(serde_json::json!({"username": "ana", "password": "hunter2"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        response_json(response)
            .await
            .as_str()
            .expect("token is a JSON string")
            .to_string()
    }

    /// Token signed with the right key but already expired.
    fn expired_token() -> String {
        let claims = Claims {
            exp: Utc::now().timestamp() - 3600,
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_KEY),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn root_greeting_is_anonymous() {
        let app = router(test_state());

        let response = app
            .oneshot(request("GET", "/", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Bienevenido a la API");
    }

    #[tokio::test]
    async fn login_unknown_user_returns_404() {
        let app = router(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(serde_json::json!({"username": "nadie", "password": "x"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response_json(response).await["error"], "nadie");
    }

    #[tokio::test]
    async fn login_wrong_password_returns_401() {
        let app = router(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(serde_json::json!({"username": "ana", "password": "nope"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sensor_routes_reject_missing_token() {
        let app = router(test_state());

        for (method, uri) in [
            ("GET", "/sensores"),
            ("POST", "/sensores"),
            ("GET", "/sensores/1"),
            ("PUT", "/sensores/1"),
            ("DELETE", "/sensores/1"),
        ] {
            let body = matches!(method, "POST" | "PUT")
                .then(|| serde_json::json!({"name": "x", "value": 0.0}));
            let response = app
                .clone()
                .oneshot(request(method, uri, None, body))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{method} {uri} must require a token"
            );
        }
    }

    #[tokio::test]
    async fn expired_token_is_rejected_on_every_sensor_route() {
        let app = router(test_state());
        let token = expired_token();

        for (method, uri) in [
            ("GET", "/sensores"),
            ("POST", "/sensores"),
            ("GET", "/sensores/1"),
            ("PUT", "/sensores/1"),
            ("DELETE", "/sensores/1"),
        ] {
            let body = matches!(method, "POST" | "PUT")
                .then(|| serde_json::json!({"name": "x", "value": 0.0}));
            let response = app
                .clone()
                .oneshot(request(method, uri, Some(&token), body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let body = response_json(response).await;
            assert_eq!(body["error_code"], "token_expired", "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn login_then_full_crud_round_trip() {
        let app = router(test_state());
        let token = login_token(&app).await;

        // Create
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/sensores",
                Some(&token),
                Some(serde_json::json!({"name": "temp1", "value": 21.5})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .expect("Location header")
            .to_str()
            .unwrap()
            .to_string();
        let created = response_json(response).await;
        let id = created["id"].as_i64().expect("integer id");
        assert_eq!(location, format!("/sensores/{id}"));
        assert_eq!(created["name"], "temp1");
        assert_eq!(created["value"], 21.5);
        assert!(created["recordedAt"].is_string());

        // Read back: identical record
        let response = app
            .clone()
            .oneshot(request("GET", &location, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, created);

        // Update name and value only
        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &location,
                Some(&token),
                Some(serde_json::json!({"name": "temp2", "value": 22.0})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request("GET", &location, Some(&token), None))
            .await
            .unwrap();
        let updated = response_json(response).await;
        assert_eq!(updated["name"], "temp2");
        assert_eq!(updated["value"], 22.0);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["recordedAt"], created["recordedAt"]);

        // List contains exactly the one record
        let response = app
            .clone()
            .oneshot(request("GET", "/sensores", Some(&token), None))
            .await
            .unwrap();
        let listed = response_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        // Delete, then delete again
        let response = app
            .clone()
            .oneshot(request("DELETE", &location, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request("DELETE", &location, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(request("GET", &location, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id_and_date() {
        let app = router(test_state());
        let token = login_token(&app).await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/sensores",
                Some(&token),
                Some(serde_json::json!({
                    "id": 999,
                    "name": "temp1",
                    "value": 21.5,
                    "recordedAt": "2020-01-01T00:00:00Z"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = response_json(response).await;
        assert_eq!(created["id"], 1);
        let recorded_at: chrono::DateTime<Utc> = created["recordedAt"]
            .as_str()
            .unwrap()
            .parse()
            .expect("RFC 3339 timestamp");
        assert!(Utc::now() - recorded_at < chrono::Duration::minutes(1));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = router(test_state());

        let response = app
            .oneshot(request("GET", "/api-doc/openapi.json", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = response_json(response).await;
        assert_eq!(doc["info"]["title"], "Mi SmartHome API");
        assert_eq!(doc["info"]["version"], "v1");
        assert!(doc["paths"]["/sensores"].is_object());
        assert!(doc["paths"]["/sensores/{id}"].is_object());
        assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
