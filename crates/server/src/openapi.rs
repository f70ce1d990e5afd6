use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct UserInputDoc { pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub email: String }

/// `tier` is one of `regular`, `loyal`, `vip`, `new`.
#[derive(ToSchema)]
pub struct QuoteRequestDoc { pub price: f64, pub tier: String }

#[derive(ToSchema)]
pub struct QuoteResponseDoc { pub tier: String, pub price: f64, pub final_price: f64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::pricing::quote,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserInputDoc,
            UserDoc,
            QuoteRequestDoc,
            QuoteResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "pricing")
    )
)]
pub struct ApiDoc;
