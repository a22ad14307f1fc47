pub mod bits;
mod decoder;
mod detect;
pub mod display;
mod encoder;
mod parser;

pub use decoder::decode;
pub use detect::detect_format;
pub use encoder::{encode, encode_char};
pub use parser::parse_chunks;
