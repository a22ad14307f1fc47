pub mod codec;
pub mod error;
pub mod interchange;
pub mod notify;
pub mod reference;
pub mod render;
pub mod result;
pub mod session;
pub mod types;

pub use codec::{decode, detect_format, encode, parse_chunks};
pub use error::{BinconvError, Result};
pub use notify::{Notice, Notifier, Severity};
pub use render::Render;
pub use result::{BreakdownEntry, ConversionResult, ConversionType, DecodeResult, EncodeResult};
pub use session::{DecodeSession, EncodeSession, Workbench};
pub use types::{Format, FormatMode, InputSource, OutputDest};
