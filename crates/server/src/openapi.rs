use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    /// Assigned by the store; omit on create, required on update.
    pub id: Option<i64>,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc {
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub message: String,
    /// `uri=<request path>`
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::list,
        crate::routes::employees::get_by_id,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
