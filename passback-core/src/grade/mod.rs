//! Grade submission workflow

mod parse;
mod request;
mod resolve;
mod service;

pub use parse::parse_grade;
pub use request::{GradeRequest, GradeValue};
pub use resolve::resolve_line_item;
pub use service::GradeService;
