//! Member sign-up API handlers.
//!
//! ```text
//! POST /sign-up {"name":"momo","age":26}
//! GET /members
//! GET /check?name=momo
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use super::ApiResult;
use super::envelope::Envelope;
use super::error::{json_payload_error, query_payload_error};
use super::schemas::MemberSchema;
use super::state::HttpState;
use crate::domain::{Member, MemberName, MemberValidationFailure};

/// Message returned when a queried name is free.
pub const NAME_AVAILABLE_MESSAGE: &str = "name available";

/// Sign-up request body for `POST /sign-up`.
///
/// Both fields are optional at the wire level so a missing field surfaces as
/// a validation message instead of a parse failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SignUpRequest {
    /// Requested member name.
    #[schema(example = "momo")]
    pub name: Option<String>,
    /// Age in years.
    #[schema(example = 26)]
    pub age: Option<i32>,
}

impl TryFrom<SignUpRequest> for Member {
    type Error = MemberValidationFailure;

    fn try_from(value: SignUpRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.age)
    }
}

/// Query parameters for `GET /check`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckNameQuery {
    /// Name to look up; validated with the sign-up name rules.
    pub name: String,
}

/// Register a member.
#[utoipa::path(
    post,
    path = "/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Member registered", body = MemberSchema),
        (status = 400, description = "Validation failed or member limit reached", body = Envelope)
    ),
    tags = ["members"],
    operation_id = "signUp"
)]
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpRequest>,
) -> ApiResult<HttpResponse> {
    let member = Member::try_from(payload.into_inner())?;
    state.registry.add(&member)?;
    info!(name = %member.name(), age = member.age().years(), "member signed up");
    Ok(HttpResponse::Created().json(member))
}

/// List registered members in sign-up order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use signup::inbound::http::members::list_members;
///
/// let app = App::new().service(list_members);
/// ```
#[utoipa::path(
    get,
    path = "/members",
    responses(
        (status = 200, description = "Registered members", body = [MemberSchema])
    ),
    tags = ["members"],
    operation_id = "listMembers"
)]
#[get("/members")]
pub async fn list_members(state: web::Data<HttpState>) -> web::Json<Vec<Member>> {
    web::Json(state.registry.list())
}

/// Report whether a name is still free.
#[utoipa::path(
    get,
    path = "/check",
    params(CheckNameQuery),
    responses(
        (status = 200, description = "Name is available", body = Envelope),
        (status = 400, description = "Invalid name or name already taken", body = Envelope)
    ),
    tags = ["members"],
    operation_id = "checkName"
)]
#[get("/check")]
pub async fn check_name(
    state: web::Data<HttpState>,
    query: web::Query<CheckNameQuery>,
) -> ApiResult<web::Json<Envelope>> {
    let name = MemberName::new(query.into_inner().name)?;
    state.registry.check_availability(&name)?;
    Ok(web::Json(Envelope::new(NAME_AVAILABLE_MESSAGE)))
}

/// Register the member endpoints and their extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use signup::inbound::http::members;
///
/// let app = App::new().configure(members::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(query_payload_error))
        .service(sign_up)
        .service(list_members)
        .service(check_name);
}
