use sea_orm::DatabaseConnection;

use crate::server::{
    data::usuario::UsuarioRepository,
    error::AppError,
    model::{
        page::Page,
        usuario::{SaveUsuarioParam, Usuario},
    },
    util::{normalize, pagination::PageRequest},
};

const NOT_FOUND: &str = "Usuário não encontrado";

/// bcrypt work factor; tests use the minimum to stay fast.
const HASH_COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

/// Hashes a plain text password for storage.
///
/// bcrypt is CPU bound, so the work runs on the blocking thread pool instead of
/// stalling an async worker.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;

    Ok(hash)
}

pub struct UsuarioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Usuario>, AppError> {
        let (usuarios, total) = UsuarioRepository::new(self.db)
            .get_paginated(request)
            .await?;

        Ok(Page::new(usuarios, request, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Usuario, AppError> {
        UsuarioRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Creates a usuario, storing a bcrypt hash of the password
    pub async fn create(&self, param: SaveUsuarioParam) -> Result<Usuario, AppError> {
        let (username, password) = self.validate(param, None).await?;
        let password = password
            .ok_or_else(|| AppError::Validation("A senha é obrigatória".to_string()))?;

        let senha_hash = hash_password(password).await?;
        let usuario = UsuarioRepository::new(self.db)
            .create(username, senha_hash)
            .await?;

        tracing::info!(id = usuario.id, username = %usuario.username, "Created usuario");

        Ok(usuario)
    }

    /// Updates a usuario; the stored hash is kept when no password is given
    pub async fn update(&self, id: i64, param: SaveUsuarioParam) -> Result<Usuario, AppError> {
        let repo = UsuarioRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let (username, password) = self.validate(param, Some(id)).await?;
        let senha_hash = match password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        Ok(repo.update(id, username, senha_hash).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = UsuarioRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Normalizes the username and checks it is free
    ///
    /// A blank password is reported before uniqueness is checked. The returned password
    /// is `None` only when none was supplied.
    async fn validate(
        &self,
        param: SaveUsuarioParam,
        current_id: Option<i64>,
    ) -> Result<(String, Option<String>), AppError> {
        let username = normalize::required(&param.username)
            .ok_or_else(|| AppError::Validation("O username é obrigatório".to_string()))?;

        let password = match param.password {
            Some(password) if password.trim().is_empty() => {
                return Err(AppError::Validation("A senha é obrigatória".to_string()));
            }
            password => password,
        };

        if UsuarioRepository::new(self.db)
            .username_taken(&username, current_id)
            .await?
        {
            return Err(AppError::Validation(format!(
                "Já existe um usuário com o username {}",
                username
            )));
        }

        Ok((username, password))
    }
}
