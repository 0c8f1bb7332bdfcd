use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use super::{Action, AppState};

const BUS_CAPACITY: usize = 256;

/// Carries applied actions from the store to the sagas, together with a
/// read-only view of the state they produced.
#[derive(Clone)]
pub struct Bus {
    actions: broadcast::Sender<Action>,
    state: Arc<watch::Sender<AppState>>,
}

impl Default for Bus {
    fn default() -> Self {
        let (actions, _) = broadcast::channel(BUS_CAPACITY);
        let (state, _) = watch::channel(AppState::default());
        Self {
            actions,
            state: Arc::new(state),
        }
    }
}

impl Bus {
    /// The state is replaced before the action goes out, so a saga woken by
    /// the action always sees the state it produced.
    pub fn publish(&self, action: Action, state: &AppState) {
        self.state.send_replace(state.clone());
        // No receivers just means the sagas haven't been forked yet
        let _ = self.actions.send(action);
    }

    pub fn subscribe(&self) -> (broadcast::Receiver<Action>, watch::Receiver<AppState>) {
        (self.actions.subscribe(), self.state.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_the_state_with_the_action() {
        let bus = Bus::default();
        let (mut actions, state) = bus.subscribe();

        let mut next = AppState::default();
        next.have_received_response_from_login = true;
        bus.publish(Action::InitialLoginStateRequest, &next);

        assert_eq!(actions.recv().await.unwrap(), Action::InitialLoginStateRequest);
        assert!(state.borrow().have_received_response_from_login);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = Bus::default();
        bus.publish(Action::ClearError, &AppState::default());
    }
}
