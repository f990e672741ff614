pub mod icons;
pub mod summary;

pub use summary::{render_completion, render_error, usage};
