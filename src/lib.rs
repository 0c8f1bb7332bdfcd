#![allow(non_snake_case)]

mod app;
pub mod components;
pub mod environment;
mod helper;
pub mod routes;
pub mod sagas;
pub mod session;
pub mod store;
mod style;
mod widgets;

pub use app::run;

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
