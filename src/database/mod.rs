use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::models::User;

/// Falhas possíveis ao consultar ou alterar o store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(u64),
    #[error("email {0} already registered")]
    DuplicateEmail(String),
    #[error("user store lock poisoned")]
    Poisoned,
}

struct StoreState {
    users: Vec<User>,
    next_id: u64,
}

/// Store em memória dos usuários.
///
/// Construído uma vez no startup e compartilhado via `web::Data`; cada teste
/// cria o seu. A checagem de email e a mutação acontecem sob o mesmo write
/// lock, então dois registros simultâneos com o mesmo email não passam juntos.
pub struct UserStore {
    state: RwLock<StoreState>,
    executions: AtomicU64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            state: RwLock::new(StoreState {
                users: Vec::new(),
                next_id: 1,
            }),
            executions: AtomicU64::new(0),
        }
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::Poisoned)
    }

    /// Registra um novo usuário com o próximo id do contador
    pub fn create(&self, name: &str, email: &str) -> Result<User, StoreError> {
        let mut state = self.write()?;

        if state.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: state.next_id,
            name: name.to_string(),
            email: email.to_string(),
        };
        state.next_id += 1;
        state.users.push(user.clone());

        Ok(user)
    }

    /// Todos os usuários em ordem de inserção
    pub fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.users.clone())
    }

    pub fn get_by_id(&self, id: u64) -> Result<User, StoreError> {
        self.read()?
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Substitui nome e email do usuário, mantendo id e posição.
    ///
    /// NotFound tem precedência sobre DuplicateEmail; o próprio usuário pode
    /// manter o email atual.
    pub fn update(&self, id: u64, name: &str, email: &str) -> Result<User, StoreError> {
        let mut state = self.write()?;

        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if state.users.iter().any(|u| u.email == email && u.id != id) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };
        state.users[index] = user.clone();

        Ok(user)
    }

    /// Remove o usuário sem reordenar os demais
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut state = self.write()?;

        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;
        state.users.remove(index);

        Ok(())
    }

    /// Incrementa o contador de execuções e devolve o novo total
    pub fn increment_executions(&self) -> u64 {
        self.executions.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
impl UserStore {
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.users.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
