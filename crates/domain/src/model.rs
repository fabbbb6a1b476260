pub mod analysis;
pub mod document;

pub use analysis::{Analysis, Assessment};
pub use document::Document;
