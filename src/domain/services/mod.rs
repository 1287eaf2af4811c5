pub mod selection_parser;
pub mod validation;

pub use selection_parser::SelectionParser;
pub use validation::ComputerNameValidator;
