use uuid::Uuid;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::Role,
};

/// The single authorization decision: is `role` one of `allowed`?
/// An empty allow-list means any authenticated role.
pub fn is_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.is_empty() || allowed.contains(&role)
}

pub fn require_any(claims: &Claims, allowed: &[Role]) -> AppResult<()> {
    if is_allowed(claims.role, allowed) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Role {} is not permitted for this action",
            claims.role
        )))
    }
}

pub fn require_role(claims: &Claims, role: Role) -> AppResult<()> {
    require_any(claims, &[role])
}

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    require_any(claims, &[Role::Admin])
}

/// Students may touch their own records; admins may touch anyone's.
pub fn require_owner_or_admin(claims: &Claims, resource_owner: Uuid) -> AppResult<()> {
    if claims.role == Role::Admin || claims.sub == resource_owner {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only access your own resources".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::User;

    fn claims_for(role: Role) -> Claims {
        let user = User::new("Test", "test@example.com", "salt$hash", role);
        Claims::new(&user, 1)
    }

    #[test]
    fn test_is_allowed_membership() {
        assert!(is_allowed(Role::Admin, &[Role::Instructor, Role::Admin]));
        assert!(!is_allowed(Role::Student, &[Role::Instructor, Role::Admin]));
    }

    #[test]
    fn test_empty_allow_list_admits_any_role() {
        assert!(is_allowed(Role::Student, &[]));
        assert!(is_allowed(Role::Admin, &[]));
    }

    #[test]
    fn test_require_any_rejects_with_forbidden() {
        let claims = claims_for(Role::Student);
        let result = require_any(&claims, &[Role::Instructor]);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&claims_for(Role::Admin)).is_ok());
        assert!(require_admin(&claims_for(Role::Instructor)).is_err());
    }

    #[test]
    fn test_require_owner_or_admin() {
        let claims = claims_for(Role::Student);
        assert!(require_owner_or_admin(&claims, claims.sub).is_ok());
        assert!(require_owner_or_admin(&claims, Uuid::new_v4()).is_err());

        let admin = claims_for(Role::Admin);
        assert!(require_owner_or_admin(&admin, Uuid::new_v4()).is_ok());
    }
}
