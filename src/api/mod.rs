pub mod swagger;
pub mod users;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use crate::utils::AppError;

/// Corpo inválido vira 400 com o mesmo envelope JSON dos outros erros
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("⚠️ Invalid JSON body on {}: {}", req.path(), err);
    AppError::Validation("El cuerpo de la solicitud no es un JSON válido.".to_string()).into()
}

/// Registra todas as rotas da API (usado pelo servidor e pelos testes)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Usuários: CRUD em memória + contador de execuções
        .service(
            web::scope("/api/usuarios")
                .route("/registrar", web::post().to(users::register))
                .route("/obtener", web::get().to(users::list))
                .route("/obtenerPorID/{id}", web::get().to(users::get_by_id))
                .route("/actualizar/{id}", web::put().to(users::update))
                .route("/eliminar/{id}", web::delete().to(users::delete))
                .route("/contador", web::get().to(users::count_executions))
        );
}
