pub mod api;
pub mod types;

mod native;
pub use native::*;

pub use api::UkelonnApi;
