pub mod line_parser;
pub mod line_serializer;

pub use line_parser::parse_line;
pub use line_serializer::{serialize_list, serialize_tasks};
