use actix_web::{web, HttpResponse};
use crate::{
    database::UserStore,
    models::{
        CounterResponse, ErrorResponse, MessageResponse, UserListResponse, UserPayload,
        UserResponse,
    },
    services::user_service,
    utils::AppError,
};

/// Registra o resultado de uma operação que falhou: 4xx como warn, 500 como error
fn log_failure(operation: &str, err: &AppError) {
    match err {
        AppError::Internal(detail) => log::error!("❌ {} failed: {}", operation, detail),
        other => log::warn!("⚠️ {} rejected: {}", operation, other),
    }
}

/// POST /api/usuarios/registrar - Registra um novo usuário
#[utoipa::path(
    post,
    path = "/api/usuarios/registrar",
    tag = "Usuarios",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Usuario registrado con éxito.", body = UserResponse),
        (status = 400, description = "Error de validación o correo duplicado.", body = ErrorResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn register(
    store: web::Data<UserStore>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /usuarios/registrar - {}", payload.email);

    let user = user_service::register_user(&store, &payload)
        .inspect_err(|e| log_failure("register", e))?;

    log::info!("✅ User registered: {}", user.id);
    Ok(HttpResponse::Created().json(UserResponse {
        message: "Usuario registrado con éxito.".to_string(),
        data: user,
    }))
}

/// GET /api/usuarios/obtener - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/usuarios/obtener",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Lista de usuarios obtenida con éxito.", body = UserListResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn list(store: web::Data<UserStore>) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(&store).inspect_err(|e| log_failure("list", e))?;

    log::info!("📋 Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(UserListResponse {
        message: "Se han obtenido los usuarios con éxito.".to_string(),
        data: users,
    }))
}

/// GET /api/usuarios/obtenerPorID/{id} - Busca usuário por id
#[utoipa::path(
    get,
    path = "/api/usuarios/obtenerPorID/{id}",
    tag = "Usuarios",
    params(
        ("id" = u64, Path, description = "ID del usuario a obtener.")
    ),
    responses(
        (status = 200, description = "Usuario obtenido con éxito.", body = UserResponse),
        (status = 404, description = "Usuario no encontrado.", body = ErrorResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn get_by_id(
    store: web::Data<UserStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::get_user(&store, &id).inspect_err(|e| log_failure("get", e))?;

    Ok(HttpResponse::Ok().json(UserResponse {
        message: "Usuario obtenido con éxito.".to_string(),
        data: user,
    }))
}

/// PUT /api/usuarios/actualizar/{id} - Substitui nome e email
#[utoipa::path(
    put,
    path = "/api/usuarios/actualizar/{id}",
    tag = "Usuarios",
    params(
        ("id" = u64, Path, description = "ID del usuario a actualizar.")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Usuario actualizado con éxito.", body = UserResponse),
        (status = 400, description = "Error de validación o correo duplicado.", body = ErrorResponse),
        (status = 404, description = "Usuario no encontrado.", body = ErrorResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn update(
    store: web::Data<UserStore>,
    id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /usuarios/actualizar/{}", id);

    let user = user_service::update_user(&store, &id, &payload)
        .inspect_err(|e| log_failure("update", e))?;

    log::info!("✅ User updated: {}", user.id);
    Ok(HttpResponse::Ok().json(UserResponse {
        message: "Usuario actualizado con éxito.".to_string(),
        data: user,
    }))
}

/// DELETE /api/usuarios/eliminar/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/api/usuarios/eliminar/{id}",
    tag = "Usuarios",
    params(
        ("id" = u64, Path, description = "ID del usuario a eliminar.")
    ),
    responses(
        (status = 200, description = "Usuario eliminado con éxito.", body = MessageResponse),
        (status = 404, description = "Usuario no encontrado.", body = ErrorResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn delete(
    store: web::Data<UserStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️ DELETE /usuarios/eliminar/{}", id);

    user_service::delete_user(&store, &id).inspect_err(|e| log_failure("delete", e))?;

    log::info!("✅ User deleted: {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Usuario eliminado con éxito.".to_string(),
    }))
}

/// GET /api/usuarios/contador - Conta execuções deste endpoint
#[utoipa::path(
    get,
    path = "/api/usuarios/contador",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Se ha obtenido la cantidad total de ejecuciones.", body = CounterResponse),
        (status = 500, description = "Error del servidor.", body = ErrorResponse)
    )
)]
pub async fn count_executions(store: web::Data<UserStore>) -> HttpResponse {
    let counted = user_service::count_execution(&store);

    HttpResponse::Ok().json(CounterResponse {
        message: format!("Se ha ejecutado: {}", counted),
        success: true,
        data: counted,
    })
}
