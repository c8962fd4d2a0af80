// PMSI Tunnel attribute (RFC 6514 section 5):
// +---------------------------------+
// |  Flags (1 octet)                |
// +---------------------------------+
// |  Tunnel Type (1 octets)         |
// +---------------------------------+
// |  MPLS Label (3 octets)          |
// +---------------------------------+
// |  Tunnel Identifier (variable)   |
// +---------------------------------+
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use bytes::{BufMut, BytesMut};
use nom::number::complete::be_u24;
use nom_derive::*;
use serde::Serialize;

use crate::{
    EqualityMode, IngressReplication, Label, NoTunnel, ParseOption, PmsiFlags, PmsiParseError,
    TunnelEmit, TunnelId, TunnelType, UnknownTunnel,
};

pub const PMSI_HEADER_LEN: usize = 5;

#[derive(Debug, NomBE)]
struct PmsiHeader {
    flags: u8,
    tunnel_type: u8,
    #[nom(Parse = "be_u24")]
    label: u32,
}

/// Decoded or locally built PMSI Tunnel attribute body.
///
/// The tunnel type is carried by the [`TunnelId`] variant, so the type code on
/// the wire always matches the tunnel identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PmsiTunnel {
    pub flags: u8,
    pub label: u32,
    pub tunnel: TunnelId,
}

impl PmsiTunnel {
    pub fn new(flags: u8, label: u32, tunnel: TunnelId) -> Result<Self, PmsiParseError> {
        let label = Label::new(label)?;
        tunnel.validate()?;
        Ok(Self {
            flags,
            label: label.value(),
            tunnel,
        })
    }

    pub fn tunnel_type(&self) -> u8 {
        self.tunnel.tunnel_type()
    }

    pub fn pmsi_flags(&self) -> PmsiFlags {
        self.flags.into()
    }

    /// Attribute body length, header included.
    pub fn len(&self) -> usize {
        PMSI_HEADER_LEN + self.tunnel.len()
    }

    // The header is part of the body, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn parse_attr(input: &[u8], opt: &ParseOption) -> Result<Self, PmsiParseError> {
        if input.len() < PMSI_HEADER_LEN {
            return Err(PmsiParseError::MalformedAttribute {
                tunnel_type: None,
                expected: PMSI_HEADER_LEN,
                actual: input.len(),
            });
        }
        let (input, header) = PmsiHeader::parse_be(input)?;
        let label = Label::from_u24(header.label);
        let tunnel = TunnelId::parse_tunnel(header.tunnel_type, input, opt)?;
        Ok(Self {
            flags: header.flags,
            label: label.value(),
            tunnel,
        })
    }

    pub fn decode(input: &[u8]) -> Result<Self, PmsiParseError> {
        Self::parse_attr(input, &ParseOption::default())
    }

    /// Emits the attribute body. Label bits above the 20 bit field are
    /// dropped.
    pub fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.flags);
        buf.put_u8(self.tunnel_type());
        buf.put(&Label::truncate(self.label).to_bytes()[..]);
        self.tunnel.emit_payload(buf);
    }

    pub fn emit_checked(&self, buf: &mut BytesMut) -> Result<(), PmsiParseError> {
        Label::new(self.label)?;
        self.tunnel.validate()?;
        self.emit(buf);
        Ok(())
    }

    pub fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.len());
        self.emit(&mut buf);
        buf
    }

    /// Comparison ignoring the tunnel type, kept for peers that relied on it.
    pub fn legacy_eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.flags == other.flags
            && self.tunnel.to_bytes() == other.tunnel.to_bytes()
    }

    pub fn eq_with(&self, other: &Self, mode: EqualityMode) -> bool {
        match mode {
            EqualityMode::Structural => self == other,
            EqualityMode::Legacy => self.legacy_eq(other),
        }
    }
}

impl fmt::Display for PmsiTunnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = if self.flags == 0 {
            "-".to_string()
        } else {
            self.flags.to_string()
        };
        let label = if self.label == 0 {
            "-".to_string()
        } else {
            self.label.to_string()
        };
        write!(
            f,
            "pmsi:{}:{}:{}:{}",
            TunnelType::token(self.tunnel_type()),
            flags,
            label,
            self.tunnel
        )
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>, PmsiParseError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits)
        .map_err(|_| PmsiParseError::InvalidText(format!("invalid tunnel identifier {:?}", s)))
}

fn parse_field<T: FromStr + Default>(s: &str, what: &str) -> Result<T, PmsiParseError> {
    if s == "-" {
        return Ok(T::default());
    }
    s.parse::<T>()
        .map_err(|_| PmsiParseError::InvalidText(format!("invalid {} {:?}", what, s)))
}

impl FromStr for PmsiTunnel {
    type Err = PmsiParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().splitn(5, ':').collect();
        let &[prefix, name, flags, label, tunnel] = fields.as_slice() else {
            return Err(PmsiParseError::InvalidText(format!(
                "expected pmsi:<type>:<flags>:<label>:<tunnel>, got {:?}",
                s
            )));
        };
        if prefix != "pmsi" {
            return Err(PmsiParseError::InvalidText(format!(
                "unexpected prefix {:?}",
                prefix
            )));
        }
        let code: u8 = match name.parse::<u8>() {
            Ok(code) => code,
            Err(_) => TunnelType::from_token(name)
                .ok_or_else(|| {
                    PmsiParseError::InvalidText(format!("unknown tunnel type {:?}", name))
                })?
                .into(),
        };
        let flags: u8 = parse_field(flags, "flags")?;
        let label: u32 = parse_field(label, "label")?;

        let tunnel = match TunnelType::try_from(code) {
            Ok(TunnelType::NoTunnel) => {
                if !tunnel.is_empty() {
                    return Err(PmsiParseError::InvalidText(format!(
                        "no tunnel carries no identifier, got {:?}",
                        tunnel
                    )));
                }
                TunnelId::NoTunnel(NoTunnel)
            }
            Ok(TunnelType::IngressReplication) => {
                let endpoint: Ipv4Addr = tunnel.parse().map_err(|_| {
                    PmsiParseError::InvalidText(format!("invalid endpoint {:?}", tunnel))
                })?;
                TunnelId::IngressReplication(IngressReplication::new(endpoint))
            }
            _ => TunnelId::Unknown(UnknownTunnel::new(code, parse_hex(tunnel)?)),
        };
        PmsiTunnel::new(flags, label, tunnel)
    }
}
