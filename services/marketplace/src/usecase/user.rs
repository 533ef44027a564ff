use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{ObjectStorage, UserRepository};
use crate::domain::types::{Role, Session, User};
use crate::domain::validation::{
    AssetKind, FileUpload, NAME_MAX_CHARS, ValidationError, object_name_in, required_text,
};
use crate::error::MarketplaceError;
use crate::usecase::publish::remove_orphan;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub role: Role,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, MarketplaceError> {
        let name = required_text("name", input.name.as_deref(), NAME_MAX_CHARS)?;
        if self.repo.find_by_id(input.user_id).await?.is_some() {
            return Err(MarketplaceError::UserAlreadyExists);
        }
        let user = User {
            id: input.user_id,
            name,
            role: input.role,
            avatar_url: None,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "profile registered");
        Ok(user)
    }
}

// ── UpdateAvatar ─────────────────────────────────────────────────────────────

pub struct UpdateAvatarUseCase<R: UserRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
    pub bucket: String,
}

impl<R: UserRepository, S: ObjectStorage> UpdateAvatarUseCase<R, S> {
    /// Replaces the caller's avatar and returns the new public URL.
    pub async fn execute(
        &self,
        session: &Session,
        file: Option<FileUpload>,
    ) -> Result<String, MarketplaceError> {
        let file = file.ok_or(ValidationError::Missing { field: "file" })?;
        AssetKind::Avatar.check("file", &file)?;

        let name = AssetKind::Avatar.object_name(session.user_id(), Utc::now(), &file);
        self.storage
            .upload(&self.bucket, &name, &file.content_type, file.bytes)
            .await?;
        let url = self.storage.public_url(&self.bucket, &name);

        if let Err(e) = self.repo.update_avatar(session.user_id(), Some(&url)).await {
            remove_orphan(&self.storage, &self.bucket, &name).await;
            return Err(e);
        }

        // The profile no longer references the previous object.
        if let Some(old) = session
            .user
            .avatar_url
            .as_deref()
            .and_then(|u| object_name_in(u, &self.bucket))
            .filter(|old| *old != name)
        {
            if let Err(e) = self.storage.remove(&self.bucket, &[old.to_owned()]).await {
                tracing::warn!(
                    bucket = %self.bucket,
                    object = old,
                    error = %e,
                    "failed to remove previous avatar"
                );
            }
        }
        Ok(url)
    }
}
