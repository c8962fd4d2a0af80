use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

// Tunnel types of RFC 6514 section 5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Display, EnumIter, IntoStaticStr,
)]
#[repr(u8)]
pub enum TunnelType {
    #[strum(serialize = "No tunnel")]
    NoTunnel = 0,
    #[strum(serialize = "RSVP-TE P2MP LSP")]
    RsvpTeP2mpLsp = 1,
    #[strum(serialize = "mLDP P2MP LSP")]
    MldpP2mpLsp = 2,
    #[strum(serialize = "PIM-SSM Tree")]
    PimSsmTree = 3,
    #[strum(serialize = "PIM-SM Tree")]
    PimSmTree = 4,
    #[strum(serialize = "BIDIR-PIM Tree")]
    BidirPimTree = 5,
    #[strum(serialize = "Ingress Replication")]
    IngressReplication = 6,
    #[strum(serialize = "mLDP MP2MP LSP")]
    MldpMp2mpLsp = 7,
}

impl TunnelType {
    pub fn name(code: u8) -> &'static str {
        Self::try_from(code)
            .map(<&'static str>::from)
            .unwrap_or("unknown")
    }

    /// Name with spaces removed and lower cased, as used in the text form.
    pub fn token(code: u8) -> String {
        Self::name(code).replace(' ', "").to_lowercase()
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|typ| Self::token((*typ).into()) == token)
    }
}
