//! Command-line interface: argument definitions, output helpers, the
//! access gate, and one handler module per subcommand.

pub mod add;
pub mod command;
pub mod edit;
pub mod gate;
pub mod genres;
pub mod list;
pub mod output;
pub mod pick;
pub mod remove;
