//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives; these wrappers mirror their
//! serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Member`].
#[derive(ToSchema)]
#[schema(as = Member)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MemberSchema {
    /// Non-blank name of at least two characters.
    #[schema(example = "momo")]
    name: String,
    /// Age in years, at least 18.
    #[schema(example = 26, minimum = 18)]
    age: i32,
}
