//! End-to-end scenarios for the member sign-up API.
//!
//! The app is assembled from the public library pieces the server uses and
//! driven in-process through `actix_web::test`.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use signup::Trace;
use signup::domain::TRACE_ID_HEADER;
use signup::inbound::http;
use signup::inbound::http::state::HttpState;
use signup::outbound::memory::InMemoryMemberRegistry;

const CAPACITY_MESSAGE: &str = "signup closed: member limit (10) reached";

#[fixture]
fn state() -> HttpState {
    HttpState::new(Arc::new(InMemoryMemberRegistry::new()))
}

fn signup_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(http::configure)
}

async fn read_json(response: ServiceResponse) -> Value {
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

fn sign_up_request(prefix: &str, payload: &Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("{prefix}/sign-up"))
        .set_json(payload)
}

fn check_request(prefix: &str, encoded_name: &str) -> test::TestRequest {
    test::TestRequest::get().uri(&format!("{prefix}/check?name={encoded_name}"))
}

#[rstest]
#[case("")]
#[case("/api")]
#[actix_web::test]
async fn full_sign_up_scenario(state: HttpState, #[case] prefix: &str) {
    let app = test::init_service(signup_app(state)).await;

    for (payload, expected) in [
        (json!({ "name": "", "age": 26 }), "name must be at least 2 characters"),
        (json!({ "name": "    ", "age": 26 }), "name must not be blank"),
        (json!({ "name": "momo", "age": 17 }), "age must be at least 18"),
    ] {
        let response = test::call_service(&app, sign_up_request(prefix, &payload).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await, json!({ "msg": expected }));
    }

    for i in 0..10 {
        let payload = json!({ "name": format!("member {i}"), "age": 18 });
        let response = test::call_service(&app, sign_up_request(prefix, &payload).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await, payload);
    }

    let response = test::call_service(
        &app,
        sign_up_request(prefix, &json!({ "name": "momo", "age": 26 })).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({ "msg": CAPACITY_MESSAGE }));

    for i in 0..10 {
        let response = test::call_service(&app, check_request(prefix, &format!("member%20{i}")).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await, json!({ "msg": "name already taken" }));
    }

    for (encoded, expected) in [
        ("", "name must be at least 2 characters"),
        ("%20%20", "name must not be blank"),
    ] {
        let response = test::call_service(&app, check_request(prefix, encoded).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await, json!({ "msg": expected }));
    }

    let response = test::call_service(&app, check_request(prefix, "momo").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "msg": "name available" }));
}

#[rstest]
#[actix_web::test]
async fn eleventh_sign_up_fails_even_with_a_fresh_name(state: HttpState) {
    let app = test::init_service(signup_app(state)).await;
    for i in 0..10 {
        let payload = json!({ "name": format!("member {i}"), "age": 18 });
        let response = test::call_service(&app, sign_up_request("", &payload).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    for payload in [
        json!({ "name": "brand new", "age": 40 }),
        json!({ "name": "member 0", "age": 18 }),
    ] {
        let response = test::call_service(&app, sign_up_request("", &payload).to_request()).await;
        assert_eq!(read_json(response).await, json!({ "msg": CAPACITY_MESSAGE }));
    }
}

#[rstest]
#[actix_web::test]
async fn members_are_listed_in_sign_up_order(state: HttpState) {
    let app = test::init_service(signup_app(state)).await;
    let added = [
        json!({ "name": "zed", "age": 30 }),
        json!({ "name": "amy", "age": 19 }),
        json!({ "name": "kim", "age": 18 }),
    ];
    for payload in &added {
        let response = test::call_service(&app, sign_up_request("", payload).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Checks must not disturb the listing.
    for name in ["zed", "nobody"] {
        test::call_service(&app, check_request("", name).to_request()).await;
    }

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/members").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, Value::Array(added.to_vec()));
}

#[rstest]
#[actix_web::test]
async fn prefixed_and_bare_routes_share_one_registry(state: HttpState) {
    let app = test::init_service(signup_app(state)).await;
    let response = test::call_service(
        &app,
        sign_up_request("/api", &json!({ "name": "momo", "age": 26 })).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = test::call_service(&app, check_request("", "momo").to_request()).await;
    assert_eq!(read_json(response).await, json!({ "msg": "name already taken" }));
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id(state: HttpState) {
    let app = test::init_service(signup_app(state)).await;

    let ok = test::call_service(&app, test::TestRequest::get().uri("/members").to_request()).await;
    assert!(ok.headers().contains_key(TRACE_ID_HEADER));

    let rejected = test::call_service(&app, check_request("", "x").to_request()).await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert!(rejected.headers().contains_key(TRACE_ID_HEADER));
}

#[rstest]
#[actix_web::test]
async fn registry_limit_follows_configuration() {
    let state = HttpState::new(Arc::new(InMemoryMemberRegistry::with_capacity(2)));
    let app = test::init_service(signup_app(state)).await;
    for name in ["first", "second"] {
        let response =
            test::call_service(&app, sign_up_request("", &json!({ "name": name, "age": 30 })).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response =
        test::call_service(&app, sign_up_request("", &json!({ "name": "third", "age": 30 })).to_request()).await;
    assert_eq!(
        read_json(response).await,
        json!({ "msg": "signup closed: member limit (2) reached" })
    );
}
