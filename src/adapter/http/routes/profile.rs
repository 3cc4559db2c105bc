use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::profile::{ProfileRequest, ProfileResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::profile::{CreateProfileDTO, GetProfileDTO, UpdateProfileDTO};
use crate::application::interactors::profile::{
    CreateProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
};

#[utoipa::path(
    post,
    path = "/users/{user_id}/profile",
    tag = "Profiles",
    params(("user_id" = i32, Path, description = "Owner of the new profile")),
    request_body(
        content = ProfileRequest,
        example = json!(
            {
                "first_name": "Ana",
                "last_name": "Lee",
                "phone_number": "555-1111"
            }
        )
    ),
    responses(
        (
            status = 201,
            description = "Profile created",
            body = ProfileResponse,
            example = json!(
                {
                    "id": 1,
                    "user_id": 7,
                    "first_name": "Ana",
                    "last_name": "Lee",
                    "phone_number": "555-1111"
                }
            )
        ),
        (
            status = 400,
            description = "Invalid user id or request body",
            body = ErrorResponse,
            example = json!({ "error": "Invalid id `abc`: invalid digit found in string" })
        ),
        (
            status = 409,
            description = "The user already has a profile",
            body = ErrorResponse,
            example = json!({ "error": "Profile already exists" })
        ),
        (
            status = 422,
            description = "The user does not exist",
            body = ErrorResponse,
            example = json!({ "error": "User does not exist" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "error": "Internal Server Error" })
        )
    )
)]
pub async fn create_profile(
    interactor: CreateProfileInteractor,
    Path(user_id): Path<String>,
    ValidJson(payload): ValidJson<ProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateProfileDTO {
        user_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone_number: payload.phone_number,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/profiles/{user_id}",
    tag = "Profiles",
    params(("user_id" = i32, Path, description = "Owner of the profile")),
    responses(
        (status = 200, description = "Profile of the user", body = ProfileResponse),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (
            status = 404,
            description = "The user has no profile",
            body = ErrorResponse,
            example = json!({ "error": "Profile not found" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    interactor: GetProfileInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(GetProfileDTO { user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/profiles/{user_id}",
    tag = "Profiles",
    params(("user_id" = i32, Path, description = "Owner of the profile")),
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Invalid user id or request body", body = ErrorResponse),
        (
            status = 404,
            description = "The user has no profile",
            body = ErrorResponse,
            example = json!({ "error": "Profile not found" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    interactor: UpdateProfileInteractor,
    Path(user_id): Path<String>,
    ValidJson(payload): ValidJson<ProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateProfileDTO {
        user_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone_number: payload.phone_number,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::Router;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::application::app_error::AppError;
    use crate::infra::app::create_app;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::{init_test_app_state, lazy_test_app_state};
    use crate::tests::helpers::{count_profiles, delete_user, insert_user, missing_user_id};

    fn app_for(state: AppState) -> Router {
        create_app(state.config.as_ref(), state.clone())
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ana() -> Value {
        json!({
            "first_name": "Ana",
            "last_name": "Lee",
            "phone_number": "555-1111"
        })
    }

    // === request rejection, no database round-trip ===

    // Tests that a non-integer user id is rejected before touching storage
    // Verifies:
    // - POST, GET and PUT all return 400 BAD_REQUEST
    #[rstest]
    #[case("POST", "/users/abc/profile")]
    #[case("GET", "/profiles/abc")]
    #[case("PUT", "/profiles/abc")]
    #[tokio::test]
    async fn test_invalid_user_id(lazy_test_app_state: AppState, #[case] method: &str, #[case] uri: &str) {
        let app = app_for(lazy_test_app_state);

        let req = if method == "GET" {
            get_request(uri)
        } else {
            json_request(method, uri, &ana())
        };
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Tests that an invalid phone number fails validation
    // Verifies:
    // - Endpoint returns 400 BAD_REQUEST with an error message
    #[rstest]
    #[case("POST", "/users/7/profile")]
    #[case("PUT", "/profiles/7")]
    #[tokio::test]
    async fn test_invalid_phone_number(lazy_test_app_state: AppState, #[case] method: &str, #[case] uri: &str) {
        let app = app_for(lazy_test_app_state);
        let body = json!({ "first_name": "Ana", "phone_number": "not a phone" });

        let response = app.oneshot(json_request(method, uri, &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].as_str().is_some());
    }

    // Tests that a body which is not JSON is rejected by the extractor
    // Verifies:
    // - Malformed JSON returns 400 BAD_REQUEST
    // - Missing content type returns 415 UNSUPPORTED_MEDIA_TYPE
    #[rstest]
    #[tokio::test]
    async fn test_malformed_body(lazy_test_app_state: AppState) {
        let app = app_for(lazy_test_app_state);

        let malformed = Request::builder()
            .method("POST")
            .uri("/users/7/profile")
            .header("content-type", "application/json")
            .body(Body::from("{\"first_name\": "))
            .unwrap();
        let status = app.clone().oneshot(malformed).await.unwrap().status();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let no_content_type = Request::builder()
            .method("PUT")
            .uri("/profiles/7")
            .body(Body::from(serde_json::to_vec(&ana()).unwrap()))
            .unwrap();
        let status = app.oneshot(no_content_type).await.unwrap().status();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    // Tests that a body of the wrong shape is told apart from a missing user
    // Verifies:
    // - A field with the wrong JSON type returns 400 BAD_REQUEST
    // - That status differs from the one used for AppError::UserNotFound
    #[rstest]
    #[case("POST", "/users/7/profile")]
    #[case("PUT", "/profiles/7")]
    #[tokio::test]
    async fn test_wrong_field_type_is_not_user_not_found(
        lazy_test_app_state: AppState,
        #[case] method: &str,
        #[case] uri: &str,
    ) {
        let app = app_for(lazy_test_app_state);
        let body = json!({ "first_name": 5 });

        let status = app.oneshot(json_request(method, uri, &body)).await.unwrap().status();
        let user_missing = AppError::UserNotFound.into_response().status();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_ne!(status, user_missing);
    }

    // Tests that no delete operation is exposed
    // Verifies:
    // - DELETE /profiles/{user_id} returns 405 METHOD_NOT_ALLOWED
    #[rstest]
    #[tokio::test]
    async fn test_delete_not_exposed(lazy_test_app_state: AppState) {
        let app = app_for(lazy_test_app_state);
        let req = Request::builder()
            .method("DELETE")
            .uri("/profiles/7")
            .body(Body::empty())
            .unwrap();

        assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    // === create_profile ===

    // Tests the full create-then-read flow for an existing user
    // Verifies:
    // - POST returns 201 CREATED with a generated id and the submitted fields
    // - GET /profiles/{user_id} returns the same record
    // - Exactly one row is stored for the user
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_create_profile_success(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = insert_user(&state.pool).await;

        let response = app
            .clone()
            .oneshot(json_request("POST", &format!("/users/{}/profile", user_id), &ana()))
            .await
            .unwrap();
        let status = response.status();
        let created = read_json(response).await;

        let fetched = read_json(
            app.oneshot(get_request(&format!("/profiles/{}", user_id)))
                .await
                .unwrap(),
        )
        .await;
        let stored = count_profiles(&state.pool, user_id).await;

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_i64().is_some());
        assert_eq!(created["user_id"], user_id);
        assert_eq!(created["first_name"], "Ana");
        assert_eq!(created["last_name"], "Lee");
        assert_eq!(created["phone_number"], "555-1111");
        assert_eq!(fetched, created);
        assert_eq!(stored, 1);
    }

    // Tests that creating for a user that does not exist stores nothing
    // Verifies:
    // - Endpoint returns 422 UNPROCESSABLE_ENTITY
    // - No profile row exists for that user id
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_create_profile_unknown_user(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = missing_user_id(&state.pool).await;

        let status = app
            .oneshot(json_request("POST", &format!("/users/{}/profile", user_id), &ana()))
            .await
            .unwrap()
            .status();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(count_profiles(&state.pool, user_id).await, 0);
    }

    // Tests that a user can only own one profile
    // Verifies:
    // - The second POST for the same user returns 409 CONFLICT
    // - Two creates yield two distinct outcomes, never two rows
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_create_profile_twice_conflicts(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = insert_user(&state.pool).await;
        let uri = format!("/users/{}/profile", user_id);

        let first = app.clone().oneshot(json_request("POST", &uri, &ana())).await.unwrap().status();
        let second = app.oneshot(json_request("POST", &uri, &ana())).await.unwrap().status();
        let stored = count_profiles(&state.pool, user_id).await;

        delete_user(&state.pool, user_id).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CONFLICT);
        assert_eq!(stored, 1);
    }

    // === get_profile ===

    // Tests reading a profile for a user who has none
    // Verifies:
    // - Endpoint returns 404 NOT_FOUND rather than an empty success
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_profile_not_found(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = insert_user(&state.pool).await;

        let response = app.oneshot(get_request(&format!("/profiles/{}", user_id))).await.unwrap();
        let status = response.status();
        let body = read_json(response).await;

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Profile not found");
    }

    // === update_profile ===

    // Tests updating an existing profile
    // Verifies:
    // - Endpoint returns 200 OK with the new contact fields
    // - id and user_id are identical before and after
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_update_profile_success(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = insert_user(&state.pool).await;

        let created = read_json(
            app.clone()
                .oneshot(json_request("POST", &format!("/users/{}/profile", user_id), &ana()))
                .await
                .unwrap(),
        )
        .await;

        let body = json!({ "first_name": "Bea", "last_name": "Kim", "phone_number": "+1 555 2222" });
        let response = app
            .clone()
            .oneshot(json_request("PUT", &format!("/profiles/{}", user_id), &body))
            .await
            .unwrap();
        let status = response.status();
        let updated = read_json(response).await;

        let fetched = read_json(
            app.oneshot(get_request(&format!("/profiles/{}", user_id)))
                .await
                .unwrap(),
        )
        .await;

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["user_id"], created["user_id"]);
        assert_eq!(updated["first_name"], "Bea");
        assert_eq!(updated["last_name"], "Kim");
        assert_eq!(updated["phone_number"], "+1 555 2222");
        assert_eq!(fetched, updated);
    }

    // Tests updating when the user has no profile
    // Verifies:
    // - Endpoint returns 404 NOT_FOUND
    // - No profile gets created as a side effect
    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_update_profile_not_found(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = app_for(state.clone());
        let user_id = insert_user(&state.pool).await;

        let status = app
            .oneshot(json_request("PUT", &format!("/profiles/{}", user_id), &ana()))
            .await
            .unwrap()
            .status();
        let stored = count_profiles(&state.pool, user_id).await;

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(stored, 0);
    }
}
