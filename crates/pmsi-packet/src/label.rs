// MPLS Label field of the PMSI Tunnel attribute (RFC 6514 section 5):
// 0                   1                   2
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                Label (20 bits)        | Rsvd  |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The reserved bits are zero on send and ignored on receive.
use crate::{PmsiParseError, u32_u24};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Label(u32);

impl Label {
    pub const MAX: u32 = (1 << 20) - 1;

    pub fn new(label: u32) -> Result<Self, PmsiParseError> {
        if label > Self::MAX {
            return Err(PmsiParseError::InvalidLabel { label });
        }
        Ok(Label(label))
    }

    /// Keeps the low 20 bits of `label`.
    pub fn truncate(label: u32) -> Self {
        Label(label & Self::MAX)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Decodes the 24 bit field, discarding the reserved bits.
    pub fn from_u24(field: u32) -> Self {
        Label((field & 0x00FF_FFFF) >> 4)
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        u32_u24(self.0 << 4)
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Label::from_u24(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }
}

impl From<Label> for u32 {
    fn from(label: Label) -> Self {
        label.0
    }
}
