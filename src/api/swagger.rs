use actix_web::web;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gestión de Usuarios API",
        version = "1.0.0",
        description = "API para gestión de usuarios.\n\nCRUD en memoria sobre usuarios (id, name, email) y un contador de ejecuciones. Los datos se pierden al reiniciar el proceso."
    ),
    paths(
        // Usuarios
        crate::api::users::register,
        crate::api::users::list,
        crate::api::users::get_by_id,
        crate::api::users::update,
        crate::api::users::delete,
        crate::api::users::count_executions,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::UserListResponse,
            crate::models::MessageResponse,
            crate::models::CounterResponse,
            crate::models::ErrorResponse,
        )
    ),
    tags(
        (name = "Usuarios", description = "API para gestión de usuarios"),
    )
)]
pub struct ApiDoc;

/// Documento OpenAPI com o servidor local apontando para a porta configurada
pub fn openapi_for_port(port: u16) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.servers = Some(vec![Server::new(format!("http://localhost:{}", port))]);
    openapi
}

/// Swagger UI em /api-docs/ e o JSON em /api-docs/openapi.json
pub fn docs_service(port: u16) -> SwaggerUi {
    SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", openapi_for_port(port))
}

/// Registra a documentação; /api-docs sem barra redireciona para a UI
pub fn configure_docs(port: u16) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(web::redirect("/api-docs", "/api-docs/"))
            .service(docs_service(port));
    }
}
