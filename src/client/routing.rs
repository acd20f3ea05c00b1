use std::sync::Mutex;

use crate::{auth::is_allowed, models::domain::Role};

/// Outcome of a navigation attempt, decided before anything renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Render,
    /// The requested path rides along so login can return the user there.
    RedirectToLogin { from: String },
    RedirectToForbidden,
}

enum RouteRule {
    Public,
    Allowed(&'static [Role]),
}

/// Prefix-based route table. Anything not listed is reachable only via the
/// forbidden page, never as a blank screen.
fn rule_for(path: &str) -> Option<RouteRule> {
    match path {
        "/" | "/login" | "/register" | "/403" => Some(RouteRule::Public),
        p if p.starts_with("/student") => Some(RouteRule::Allowed(&[Role::Student])),
        p if p.starts_with("/instructor") => Some(RouteRule::Allowed(&[Role::Instructor])),
        p if p.starts_with("/admin") => Some(RouteRule::Allowed(&[Role::Admin])),
        _ => None,
    }
}

/// The guard decision. A missing session on a protected route goes to
/// login; a wrong role, or any path outside the table, always goes to the
/// forbidden page. Sending an authenticated user to login would bounce
/// them straight back out and loop.
pub fn decide(path: &str, authenticated: bool, role: Option<Role>) -> RouteAccess {
    match rule_for(path) {
        Some(RouteRule::Public) => RouteAccess::Render,
        Some(RouteRule::Allowed(allowed)) => {
            if !authenticated {
                return RouteAccess::RedirectToLogin {
                    from: path.to_string(),
                };
            }
            match role {
                Some(role) if is_allowed(role, allowed) => RouteAccess::Render,
                _ => RouteAccess::RedirectToForbidden,
            }
        }
        // Unknown paths are dead ends regardless of session state; sending
        // them through login would only bounce back here after signing in.
        None => RouteAccess::RedirectToForbidden,
    }
}

/// Landing page for "/": a pure function of token presence and role.
pub fn root_redirect(token_present: bool, role: Option<Role>) -> &'static str {
    if !token_present {
        return "/login";
    }
    match role {
        Some(Role::Student) => "/student/dashboard",
        Some(Role::Instructor) => "/instructor",
        Some(Role::Admin) => "/admin",
        None => "/login",
    }
}

/// Memoizes `root_redirect` on its inputs so repeated resolution during one
/// navigation settles on a single answer.
#[derive(Default)]
pub struct RootRedirect {
    cached: Mutex<Option<((bool, Option<Role>), &'static str)>>,
}

impl RootRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, token_present: bool, role: Option<Role>) -> &'static str {
        let key = (token_present, role);
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached_key, target)) = *cached {
            if cached_key == key {
                return target;
            }
        }
        let target = root_redirect(token_present, role);
        *cached = Some((key, target));
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenless_navigation_preserves_path() {
        let access = decide("/student/dashboard", false, None);
        assert_eq!(
            access,
            RouteAccess::RedirectToLogin {
                from: "/student/dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_role_goes_to_forbidden_not_login() {
        let access = decide("/instructor", true, Some(Role::Student));
        assert_eq!(access, RouteAccess::RedirectToForbidden);
    }

    #[test]
    fn test_matching_role_renders() {
        assert_eq!(
            decide("/instructor/quizzes", true, Some(Role::Instructor)),
            RouteAccess::Render
        );
        assert_eq!(
            decide("/admin/users", true, Some(Role::Admin)),
            RouteAccess::Render
        );
    }

    #[test]
    fn test_public_routes_render_without_session() {
        assert_eq!(decide("/login", false, None), RouteAccess::Render);
        assert_eq!(decide("/403", false, None), RouteAccess::Render);
    }

    #[test]
    fn test_unknown_path_is_forbidden_when_authenticated() {
        let access = decide("/no-such-page", true, Some(Role::Student));
        assert_eq!(access, RouteAccess::RedirectToForbidden);
    }

    #[test]
    fn test_unknown_path_is_forbidden_without_session() {
        // No login detour for a path that could never render anyway.
        let access = decide("/no-such-page", false, None);
        assert_eq!(access, RouteAccess::RedirectToForbidden);
    }

    #[test]
    fn test_root_redirect_total_mapping() {
        assert_eq!(root_redirect(false, None), "/login");
        assert_eq!(root_redirect(false, Some(Role::Admin)), "/login");
        assert_eq!(root_redirect(true, None), "/login");
        assert_eq!(root_redirect(true, Some(Role::Student)), "/student/dashboard");
        assert_eq!(root_redirect(true, Some(Role::Instructor)), "/instructor");
        assert_eq!(root_redirect(true, Some(Role::Admin)), "/admin");
    }

    #[test]
    fn test_root_redirect_idempotent() {
        for token_present in [false, true] {
            for role in [None, Some(Role::Student), Some(Role::Instructor), Some(Role::Admin)] {
                let first = root_redirect(token_present, role);
                let second = root_redirect(token_present, role);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_forbidden_redirect_leaves_session_intact() {
        use crate::auth::JwtService;
        use crate::client::session::{MemoryStore, Session};
        use crate::config::Config;
        use crate::models::domain::User;
        use crate::models::dto::response::AuthResponse;

        let jwt = JwtService::new(&Config::test_config().jwt_secret, 1);
        let user = User::new("Jane", "jane@example.com", "salt$hash", Role::Student);
        let session = Session::new(MemoryStore::new());
        session.establish(&AuthResponse {
            token: jwt.create_token(&user).unwrap(),
            role: user.role,
            id: user.id,
            email: user.email,
            name: user.name,
        });

        let access = decide("/instructor", session.is_authenticated(), session.role());
        assert_eq!(access, RouteAccess::RedirectToForbidden);
        // The guard only redirects; it never logs the user out.
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Student));
    }

    #[test]
    fn test_memoized_resolver_tracks_input_changes() {
        let resolver = RootRedirect::new();
        assert_eq!(resolver.resolve(true, Some(Role::Student)), "/student/dashboard");
        assert_eq!(resolver.resolve(true, Some(Role::Student)), "/student/dashboard");
        assert_eq!(resolver.resolve(false, None), "/login");
    }
}
