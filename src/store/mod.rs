mod action;
mod bus;
pub mod reducer;
mod state;

pub use action::Action;
pub use bus::Bus;
pub use state::AppState;

use crate::environment::Environment;
use navicula::reducer::Reducer;

pub type ViewStore<'a> = navicula::ViewStore<'a, RootReducer>;

pub struct RootReducer;

impl Reducer for RootReducer {
    type Message = ();

    type DelegateMessage = Action;

    type Action = Action;

    type State = AppState;

    type Environment = Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Startup)
    }
}
