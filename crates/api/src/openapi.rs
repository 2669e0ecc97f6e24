use utoipa::OpenApi;

use crate::handlers::admin;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ALX Travel App API",
        version = "v1",
        description = "API for the ALX Travel App project.",
        terms_of_service = "https://www.google.com/policies/terms/",
        contact(email = "contact@alxtravelapp.local"),
        license(name = "BSD License")
    ),
    paths(
        admin::admin_index,
        admin::admin_status,
    ),
    components(schemas(admin::AdminStatusResponse)),
    tags(
        (name = "admin", description = "Administrative endpoints")
    )
)]
pub struct ApiDoc;
