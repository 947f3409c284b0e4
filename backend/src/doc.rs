//! OpenAPI documentation for the REST API.
//!
//! The generated document backs Swagger UI in debug builds and is printed by
//! the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::members::SignUpRequest;
use crate::inbound::http::schemas::MemberSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Member sign-up API",
        description = "Register members, list them, and check name availability."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::members::sign_up,
        crate::inbound::http::members::list_members,
        crate::inbound::http::members::check_name,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(MemberSchema, Envelope, SignUpRequest)),
    tags(
        (name = "members", description = "Member registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Member", "name")]
    #[case("Member", "age")]
    #[case("Envelope", "msg")]
    fn schemas_expose_wire_fields(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }

    #[rstest]
    #[case("/sign-up")]
    #[case("/members")]
    #[case("/check")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
