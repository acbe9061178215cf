//! Command implementations.

pub mod build;
pub mod check;
pub mod list;
pub mod score;

pub use self::build::execute_build;
pub use self::check::execute_check;
pub use self::list::execute_list;
pub use self::score::execute_score;
