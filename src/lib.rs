pub mod counter;
pub mod frame;
pub mod settings;
pub mod template;
pub mod window;

pub use counter::{Action, Counter};
