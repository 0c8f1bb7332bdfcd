mod view;

pub use view::{AdminUsers, AdminUsersCreate, AdminUsersModify, AdminUsersPassword};

use crate::environment::types::User;
use crate::store::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct UsersProps {
    /// `(user id, "username (full name)")`
    pub users: Vec<(i32, String)>,
}

impl UsersProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            users: state
                .users
                .iter()
                .map(|user| {
                    let label = format!("{} ({})", user.username, user.full_name());
                    (user.user_id, label)
                })
                .collect(),
        }
    }
}

pub fn find_user(state: &AppState, user_id: Option<i32>) -> Option<User> {
    let user_id = user_id?;
    state.users.iter().find(|user| user.user_id == user_id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::forms;
    use crate::components::test_support::*;
    use crate::store::Action;

    fn state() -> AppState {
        let mut state = logged_in(&["ukelonnadmin"]);
        state.users = [User {
            user_id: 2,
            username: "jad".to_string(),
            email: "jad@example.com".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
        }]
        .into_iter()
        .collect();
        state
    }

    #[test]
    fn users_are_listed_with_their_names() {
        let props = UsersProps::from_state(&state());
        assert_eq!(props.users, vec![(2, "jad (Jane Doe)".to_string())]);
    }

    #[test]
    fn password_change_is_sent_for_the_picked_user() {
        let state = state();
        let jad = find_user(&state, Some(2)).unwrap();
        let change = forms::passwords(jad, "secret", "secret").unwrap();
        let sent = recording(|callbacks| callbacks.send(Action::ChangePasswordRequest(change)));
        assert!(matches!(&sent[..], [Action::ChangePasswordRequest(p)] if p.user.user_id == 2));
        assert!(find_user(&state, None).is_none());
    }
}
