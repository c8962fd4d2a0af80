use std::fmt;
use std::net::Ipv4Addr;

use bytes::{BufMut, BytesMut};
use nom::number::complete::be_u32;
use serde::Serialize;

use super::{TunnelEmit, TunnelType};
use crate::PmsiParseError;

// Tunnel Identifier is the unicast address of the ingress replicating PE.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IngressReplication {
    pub endpoint: Ipv4Addr,
}

impl IngressReplication {
    pub const LEN: usize = 4;

    pub fn new(endpoint: Ipv4Addr) -> Self {
        Self { endpoint }
    }

    pub fn parse_tunnel(input: &[u8]) -> Result<Self, PmsiParseError> {
        if input.len() != Self::LEN {
            return Err(PmsiParseError::malformed(
                TunnelType::IngressReplication.into(),
                Self::LEN,
                input.len(),
            ));
        }
        let (_, endpoint) = be_u32::<_, nom::error::Error<&[u8]>>(input)?;
        Ok(Self::new(endpoint.into()))
    }
}

impl TunnelEmit for IngressReplication {
    fn tunnel_type(&self) -> u8 {
        TunnelType::IngressReplication.into()
    }

    fn len(&self) -> usize {
        Self::LEN
    }

    fn emit_payload(&self, buf: &mut BytesMut) {
        buf.put(&self.endpoint.octets()[..]);
    }
}

impl fmt::Display for IngressReplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let tunnel = IngressReplication::parse_tunnel(&[192, 168, 0, 1]).unwrap();
        assert_eq!(tunnel.endpoint, Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(tunnel.to_string(), "192.168.0.1");

        let mut buf = BytesMut::new();
        tunnel.emit_payload(&mut buf);
        assert_eq!(&buf[..], &[192, 168, 0, 1]);
    }

    #[test]
    fn wrong_length() {
        for len in [0usize, 3, 5, 16] {
            let input = vec![10u8; len];
            assert_eq!(
                IngressReplication::parse_tunnel(&input),
                Err(PmsiParseError::MalformedAttribute {
                    tunnel_type: Some(6),
                    expected: 4,
                    actual: len,
                })
            );
        }
    }
}
