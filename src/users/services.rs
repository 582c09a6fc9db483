use tracing::info;

use crate::{
    auth::{
        repo::UserRepo,
        repo_types::{User, UserPatch},
        services::{email_conflict, normalize_email},
    },
    error::AppError,
    users::dto::EditUserRequest,
};

/// Apply a partial profile update to `user_id`.
pub async fn edit_user(
    users: &dyn UserRepo,
    user_id: i64,
    req: EditUserRequest,
) -> Result<User, AppError> {
    let email = req.email.as_deref().map(normalize_email).transpose()?;
    let patch = UserPatch {
        email,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    let user = users
        .update(user_id, patch)
        .await
        .map_err(email_conflict)?
        // the guard resolved this user moments ago
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))?;

    info!(user_id, "profile updated");
    Ok(user)
}
