pub mod command;
pub mod queue;

pub use command::Command;
pub use queue::{InputEvent, InputQueue};
