use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Usuário registrado (mantido apenas em memória)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identificador atribuído pelo store, nunca reutilizado
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Ana")]
    pub name: String,
    /// Único entre os usuários atuais (comparação exata)
    #[schema(example = "ana@x.com")]
    pub email: String,
}

/// Corpo aceito por registrar e actualizar.
///
/// Campos ausentes viram string vazia e são rejeitados na validação,
/// assim o cliente recebe a mensagem padrão em vez de um erro do extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ana@x.com")]
    pub email: String,
}

#[cfg(test)]
impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Response com um único usuário
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "Usuario obtenido con éxito.")]
    pub message: String,
    pub data: User,
}

/// Response com a lista completa, em ordem de inserção
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    #[schema(example = "Se han obtenido los usuarios con éxito.")]
    pub message: String,
    pub data: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Usuario eliminado con éxito.")]
    pub message: String,
}

/// Response do contador de execuções
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CounterResponse {
    #[schema(example = "Se ha ejecutado: 5")]
    pub message: String,
    #[schema(example = true)]
    pub success: bool,
    /// Total de execuções contadas até agora
    #[schema(example = 5)]
    pub data: u64,
}

/// Envelope de erro devolvido por todos os handlers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Usuario no encontrado.")]
    pub message: String,
    /// Detalhe bruto, só presente em erros internos (500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
