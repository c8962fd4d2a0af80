use std::fmt;
use std::net::Ipv4Addr;

use bytes::BytesMut;
use serde::Serialize;

use super::*;
use crate::{ParseOption, PmsiParseError};

/// Tunnel identifier of a PMSI Tunnel attribute, one case per tunnel type
/// with a decoder and an opaque fallback for every other type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelId {
    NoTunnel(NoTunnel),
    IngressReplication(IngressReplication),
    Unknown(UnknownTunnel),
}

impl TunnelId {
    pub fn parse_tunnel(
        code: u8,
        input: &[u8],
        opt: &ParseOption,
    ) -> Result<TunnelId, PmsiParseError> {
        match TunnelType::try_from(code) {
            Ok(TunnelType::NoTunnel) => Ok(TunnelId::NoTunnel(NoTunnel::parse_tunnel(input, opt)?)),
            Ok(TunnelType::IngressReplication) => Ok(TunnelId::IngressReplication(
                IngressReplication::parse_tunnel(input)?,
            )),
            _ => Ok(TunnelId::Unknown(UnknownTunnel::parse_tunnel(code, input))),
        }
    }

    pub fn validate(&self) -> Result<(), PmsiParseError> {
        match self {
            Self::Unknown(v) => v.validate(),
            _ => Ok(()),
        }
    }

    pub fn ingress_replication(endpoint: Ipv4Addr) -> Self {
        TunnelId::IngressReplication(IngressReplication::new(endpoint))
    }

    pub fn to_bytes(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.len());
        self.emit_payload(&mut buf);
        buf
    }
}

impl Default for TunnelId {
    fn default() -> Self {
        TunnelId::NoTunnel(NoTunnel)
    }
}

impl From<Ipv4Addr> for TunnelId {
    fn from(endpoint: Ipv4Addr) -> Self {
        TunnelId::ingress_replication(endpoint)
    }
}

impl TunnelEmit for TunnelId {
    fn tunnel_type(&self) -> u8 {
        match self {
            Self::NoTunnel(v) => v.tunnel_type(),
            Self::IngressReplication(v) => v.tunnel_type(),
            Self::Unknown(v) => v.tunnel_type(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::NoTunnel(v) => v.len(),
            Self::IngressReplication(v) => v.len(),
            Self::Unknown(v) => v.len(),
        }
    }

    fn emit_payload(&self, buf: &mut BytesMut) {
        match self {
            Self::NoTunnel(v) => v.emit_payload(buf),
            Self::IngressReplication(v) => v.emit_payload(buf),
            Self::Unknown(v) => v.emit_payload(buf),
        }
    }
}

impl fmt::Display for TunnelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTunnel(v) => write!(f, "{}", v),
            Self::IngressReplication(v) => write!(f, "{}", v),
            Self::Unknown(v) => write!(f, "{}", v),
        }
    }
}
