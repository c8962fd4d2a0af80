pub mod typ;
pub use typ::*;

pub mod emit;
pub use emit::*;

pub mod packet;
pub use packet::*;

pub mod none;
pub use none::*;

pub mod ingress;
pub use ingress::*;

pub mod unknown;
pub use unknown::*;
