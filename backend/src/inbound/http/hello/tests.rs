//! Tests for the greeting handler.

use super::*;
use crate::domain::ports::{MockUserFactory, UserFactory};
use crate::domain::{User, UserFactoryService};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_app(
    users: Arc<dyn UserFactory>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(users)))
        .service(hello_world)
}

async fn call(
    users: Arc<dyn UserFactory>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(users)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn get_returns_static_greeting() {
    let (status, body) = call(
        Arc::new(UserFactoryService),
        actix_test::TestRequest::get().uri("/"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello World" }));
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/").set_json(json!({ "email": "x@y.z" })))]
#[case(actix_test::TestRequest::post().uri("/").set_payload("not json at all"))]
#[case(
    actix_test::TestRequest::get()
        .uri("/?name=ignored")
        .insert_header(("x-custom", "ignored"))
)]
#[case(actix_test::TestRequest::post().uri("/"))]
#[actix_web::test]
async fn request_content_never_changes_the_response(#[case] request: actix_test::TestRequest) {
    let (status, body) = call(Arc::new(UserFactoryService), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": GREETING }));
}

#[actix_web::test]
async fn handler_builds_the_sample_user_once_through_the_port() {
    let mut users = MockUserFactory::new();
    users
        .expect_create_user()
        .withf(|descriptor: &UserDescriptor| *descriptor == sample_descriptor())
        .times(1)
        .returning(User::from);

    let (status, body) = call(Arc::new(users), actix_test::TestRequest::get().uri("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], GREETING);
}

#[actix_web::test]
async fn response_does_not_depend_on_the_built_user() {
    let mut users = MockUserFactory::new();
    users
        .expect_create_user()
        .times(1)
        .returning(|_| User::from(UserDescriptor::default()));

    let (_, body) = call(Arc::new(users), actix_test::TestRequest::get().uri("/")).await;
    assert_eq!(body, json!({ "message": GREETING }));
}

#[rstest]
fn sample_descriptor_matches_the_published_fixture() {
    let descriptor = sample_descriptor();
    assert_eq!(descriptor.email, "cintiafumi@gmail.com");
    assert_eq!(descriptor.password.expose(), "123456");
    let titles: Vec<&str> = descriptor.techs.iter().map(TechEntry::title).collect();
    assert_eq!(titles, ["Node.js", "ReactJS", "React Native", "Javascript"]);
    assert_eq!(descriptor.techs.last().and_then(TechEntry::experience), Some(100));
}
