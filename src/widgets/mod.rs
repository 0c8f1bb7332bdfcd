mod stacks;
pub use stacks::*;

mod spinner;
pub use spinner::*;

mod errors;
pub use errors::*;

mod navigation;
pub use navigation::*;

mod table;
pub use table::*;

mod inputs;
pub use inputs::*;
