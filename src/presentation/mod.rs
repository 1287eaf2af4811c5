pub mod console;
pub mod menu;
pub mod services;
pub mod style;

#[cfg(test)]
pub mod testing;

pub use console::{Console, TerminalConsole};
pub use menu::MenuShell;
