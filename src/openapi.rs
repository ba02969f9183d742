use utoipa::OpenApi;

use crate::errors::{Bag, Error, Link, Source, StatusClass};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JSON API Errors",
        version = "0.1.0",
        description = "Error objects and error collections following the JSON API v1.0 error format. Status and code members are carried as strings.",
    ),
    components(
        schemas(
            Bag,
            Error,
            Link,
            Source,
            StatusClass,
        )
    )
)]
pub struct ErrorsDoc;
