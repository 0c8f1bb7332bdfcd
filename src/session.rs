//! Who is looking at the screen.

use crate::routes::Route;
use crate::store::AppState;

/// True until the backend has answered a login check with at least one role
pub fn user_is_not_logged_in(state: &AppState) -> bool {
    !state.have_received_response_from_login || state.login_response.roles.is_empty()
}

pub fn user_is_admin(state: &AppState) -> bool {
    !user_is_not_logged_in(state) && state.login_response.is_admin()
}

/// Where `/ukelonn/` sends a logged in user
pub fn home_route(state: &AppState) -> Route {
    if user_is_admin(state) {
        Route::Admin
    } else {
        Route::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::LoginResult;

    fn with_response(roles: &[&str]) -> AppState {
        AppState {
            have_received_response_from_login: true,
            login_response: LoginResult {
                username: "jad".to_string(),
                roles: roles.iter().map(|r| r.to_string()).collect(),
                error_message: String::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn nobody_is_logged_in_before_the_backend_answers() {
        let mut state = with_response(&["ukelonnuser"]);
        state.have_received_response_from_login = false;
        assert!(user_is_not_logged_in(&state));
        assert!(user_is_not_logged_in(&AppState::default()));
    }

    #[test]
    fn a_response_without_roles_is_not_a_login() {
        assert!(user_is_not_logged_in(&with_response(&[])));
        assert!(!user_is_not_logged_in(&with_response(&["ukelonnuser"])));
    }

    #[test]
    fn admins_go_to_the_admin_screen() {
        assert_eq!(home_route(&with_response(&["ukelonnuser"])), Route::User);
        assert_eq!(
            home_route(&with_response(&["ukelonnuser", "ukelonnadmin"])),
            Route::Admin
        );
    }
}
