use std::fmt;

use bytes::{BufMut, BytesMut};
use serde::Serialize;
use tracing::trace;

use super::{TunnelEmit, TunnelType};
use crate::PmsiParseError;

// Tunnel identifier of a type without a decoder, kept as received so that it
// is emitted byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnknownTunnel {
    pub code: u8,
    pub data: Vec<u8>,
}

impl UnknownTunnel {
    pub fn new(code: u8, data: Vec<u8>) -> Self {
        Self { code, data }
    }

    pub fn parse_tunnel(code: u8, input: &[u8]) -> Self {
        trace!(
            "{} (type {}): keeping {} byte tunnel identifier opaque",
            TunnelType::name(code),
            code,
            input.len()
        );
        Self::new(code, input.to_vec())
    }

    /// Codes with a decoder must not be carried opaquely, they would not
    /// decode back to the same value.
    pub fn validate(&self) -> Result<(), PmsiParseError> {
        match TunnelType::try_from(self.code) {
            Ok(TunnelType::NoTunnel | TunnelType::IngressReplication) => {
                Err(PmsiParseError::OpaqueTunnelType {
                    tunnel_type: self.code,
                })
            }
            _ => Ok(()),
        }
    }
}

impl TunnelEmit for UnknownTunnel {
    fn tunnel_type(&self) -> u8 {
        self.code
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn emit_payload(&self, buf: &mut BytesMut) {
        buf.put(&self.data[..]);
    }
}

impl fmt::Display for UnknownTunnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return Ok(());
        }
        write!(f, "0x{}", hex::encode_upper(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(UnknownTunnel::new(3, vec![0xab, 0xcd]).to_string(), "0xABCD");
        assert_eq!(UnknownTunnel::new(3, vec![0x0a]).to_string(), "0x0A");
        assert_eq!(UnknownTunnel::new(200, vec![]).to_string(), "");
    }

    #[test]
    fn validate() {
        assert!(UnknownTunnel::new(3, vec![1, 2]).validate().is_ok());
        assert!(UnknownTunnel::new(255, vec![]).validate().is_ok());
        assert_eq!(
            UnknownTunnel::new(6, vec![1, 2, 3]).validate(),
            Err(PmsiParseError::OpaqueTunnelType { tunnel_type: 6 })
        );
        assert_eq!(
            UnknownTunnel::new(0, vec![]).validate(),
            Err(PmsiParseError::OpaqueTunnelType { tunnel_type: 0 })
        );
    }

    #[test]
    fn verbatim() {
        let tunnel = UnknownTunnel::parse_tunnel(1, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(tunnel.tunnel_type(), 1);
        assert_eq!(tunnel.len(), 12);

        let mut buf = BytesMut::new();
        tunnel.emit_payload(&mut buf);
        assert_eq!(&buf[..], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }
}
