use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::{TunnelEmit, TunnelType};
use crate::{ParseOption, PmsiParseError};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NoTunnel;

impl NoTunnel {
    pub fn parse_tunnel(input: &[u8], opt: &ParseOption) -> Result<Self, PmsiParseError> {
        if !input.is_empty() {
            if opt.is_strict_no_tunnel() {
                return Err(PmsiParseError::malformed(
                    TunnelType::NoTunnel.into(),
                    0,
                    input.len(),
                ));
            }
            trace!("No tunnel: discarding {} trailing bytes", input.len());
        }
        Ok(NoTunnel)
    }
}

impl TunnelEmit for NoTunnel {
    fn tunnel_type(&self) -> u8 {
        TunnelType::NoTunnel.into()
    }
}

impl fmt::Display for NoTunnel {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_bytes() {
        let opt = ParseOption::default();
        assert_eq!(NoTunnel::parse_tunnel(&[1, 2, 3], &opt), Ok(NoTunnel));

        let opt = ParseOption::strict();
        assert_eq!(
            NoTunnel::parse_tunnel(&[1, 2, 3], &opt),
            Err(PmsiParseError::MalformedAttribute {
                tunnel_type: Some(0),
                expected: 0,
                actual: 3,
            })
        );
        assert_eq!(NoTunnel::parse_tunnel(&[], &opt), Ok(NoTunnel));
    }
}
