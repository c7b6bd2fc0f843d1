use crate::database::{StoreError, UserStore};
use crate::models::{User, UserPayload};
use crate::utils::AppError;

/// Nome e email obrigatórios; só espaços conta como vazio
fn validate(payload: &UserPayload) -> Result<(), AppError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(AppError::missing_fields());
    }
    Ok(())
}

/// Ids de path inválidos (não numéricos, zero) nunca casam com um usuário
pub fn parse_user_id(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::user_not_found()),
    }
}

pub fn register_user(store: &UserStore, payload: &UserPayload) -> Result<User, AppError> {
    validate(payload)?;
    Ok(store.create(&payload.name, &payload.email)?)
}

pub fn list_users(store: &UserStore) -> Result<Vec<User>, AppError> {
    Ok(store.list()?)
}

pub fn get_user(store: &UserStore, raw_id: &str) -> Result<User, AppError> {
    let id = parse_user_id(raw_id)?;
    Ok(store.get_by_id(id)?)
}

/// Substituição completa de nome e email (não é merge parcial)
pub fn update_user(
    store: &UserStore,
    raw_id: &str,
    payload: &UserPayload,
) -> Result<User, AppError> {
    let id = parse_user_id(raw_id)?;

    // Usuário inexistente responde 404 antes de qualquer validação do corpo
    store.get_by_id(id)?;
    validate(payload)?;

    store
        .update(id, &payload.name, &payload.email)
        .map_err(|e| match e {
            StoreError::DuplicateEmail(_) => AppError::DuplicateEmail(
                "El correo ya está registrado por otro usuario.".to_string(),
            ),
            other => other.into(),
        })
}

pub fn delete_user(store: &UserStore, raw_id: &str) -> Result<(), AppError> {
    let id = parse_user_id(raw_id)?;
    Ok(store.delete(id)?)
}

pub fn count_execution(store: &UserStore) -> u64 {
    store.increment_executions()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_ana() -> UserStore {
        let store = UserStore::new();
        register_user(&store, &UserPayload::new("Ana", "ana@x.com")).unwrap();
        store
    }

    #[test]
    fn test_register_requires_both_fields() {
        let store = UserStore::new();
        for payload in [
            UserPayload::new("", "ana@x.com"),
            UserPayload::new("Ana", ""),
            UserPayload::new("   ", "ana@x.com"),
        ] {
            assert_eq!(register_user(&store, &payload), Err(AppError::missing_fields()));
        }
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("12"), Ok(12));
        assert_eq!(parse_user_id("0"), Err(AppError::user_not_found()));
        assert_eq!(parse_user_id("abc"), Err(AppError::user_not_found()));
        assert_eq!(parse_user_id("-1"), Err(AppError::user_not_found()));
    }

    #[test]
    fn test_update_duplicate_uses_other_user_message() {
        let store = store_with_ana();
        register_user(&store, &UserPayload::new("Bea", "bea@x.com")).unwrap();

        let err = update_user(&store, "2", &UserPayload::new("Bea", "ana@x.com")).unwrap_err();
        assert_eq!(
            err,
            AppError::DuplicateEmail("El correo ya está registrado por otro usuario.".into())
        );
    }

    #[test]
    fn test_update_keeps_own_email() {
        let store = store_with_ana();
        let user = update_user(&store, "1", &UserPayload::new("Ana Maria", "ana@x.com")).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana Maria");
    }

    #[test]
    fn test_update_unknown_user_is_not_found_even_with_empty_body() {
        let store = store_with_ana();
        let err = update_user(&store, "5", &UserPayload::default()).unwrap_err();
        assert_eq!(err, AppError::user_not_found());
    }

    #[test]
    fn test_update_rejects_empty_fields() {
        let store = store_with_ana();
        let err = update_user(&store, "1", &UserPayload::new("Ana", "")).unwrap_err();
        assert_eq!(err, AppError::missing_fields());
        assert_eq!(get_user(&store, "1").unwrap().email, "ana@x.com");
    }

    #[test]
    fn test_counter_ignores_other_operations() {
        let store = UserStore::new();
        assert_eq!(count_execution(&store), 1);
        register_user(&store, &UserPayload::new("Ana", "ana@x.com")).unwrap();
        list_users(&store).unwrap();
        assert_eq!(count_execution(&store), 2);
    }
}
