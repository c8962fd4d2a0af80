use bitflags::bitflags;
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PmsiFlags: u8 {
        const LEAF_INFO_REQUIRED = 0x01;
        // Bits not assigned by RFC 6514 are carried verbatim.
        const _ = !0;
    }
}

impl PmsiFlags {
    pub fn is_leaf_info_required(&self) -> bool {
        self.contains(PmsiFlags::LEAF_INFO_REQUIRED)
    }
}

impl From<u8> for PmsiFlags {
    fn from(flags: u8) -> Self {
        PmsiFlags::from_bits_retain(flags)
    }
}

impl From<PmsiFlags> for u8 {
    fn from(flags: PmsiFlags) -> Self {
        flags.bits()
    }
}

impl fmt::Display for PmsiFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v: Vec<String> = Vec::new();
        if self.is_leaf_info_required() {
            v.push("LEAF-INFO-REQUIRED".to_string());
        }
        let rest = self.bits() & !PmsiFlags::LEAF_INFO_REQUIRED.bits();
        if rest != 0 {
            v.push(format!("0x{:02x}", rest));
        }
        write!(f, "{}", v.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_unassigned_bits() {
        let flags = PmsiFlags::from(0x81);
        assert!(flags.is_leaf_info_required());
        assert_eq!(u8::from(flags), 0x81);
        assert_eq!(flags.to_string(), "LEAF-INFO-REQUIRED|0x80");
        assert_eq!(PmsiFlags::from(0).to_string(), "");
    }
}
