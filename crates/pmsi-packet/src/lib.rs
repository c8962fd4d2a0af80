pub mod pmsi;
pub use pmsi::*;

pub mod tunnel;
pub use tunnel::*;

pub mod flags;
pub use flags::*;

pub mod label;
pub use label::*;

pub mod error;
pub use error::*;

pub mod parser;
pub use parser::*;

pub mod util;
pub use util::u32_u24;
