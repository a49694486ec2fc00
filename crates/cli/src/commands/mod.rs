mod inspect;
mod lint;

pub use inspect::inspect_command;
pub use lint::lint_command;
