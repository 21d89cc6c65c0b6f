pub mod input;
pub mod parser;
pub mod report;
pub mod scenario;

pub use parser::parse;
pub use parser::types::{ContentItem, ContentKind, Document, Scene};
