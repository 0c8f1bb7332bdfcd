mod view;

pub use view::Login;

use crate::store::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct LoginProps {
    /// Still waiting for the session check that runs at startup
    pub checking_session: bool,
    pub error: Option<String>,
}

impl LoginProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            checking_session: !state.have_received_response_from_login,
            error: state.error.clone(),
        }
    }
}
