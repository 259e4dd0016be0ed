pub mod spec;
pub mod ui;

pub use spec::*;
pub use ui::*;
