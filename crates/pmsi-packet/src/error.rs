use thiserror::Error;

use crate::TunnelType;

fn tunnel_context(tunnel_type: &Option<u8>) -> String {
    match tunnel_type {
        Some(code) => format!(" ({}, type {})", TunnelType::name(*code), code),
        None => String::new(),
    }
}

fn tunnel_name(code: &u8) -> &'static str {
    TunnelType::name(*code)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PmsiParseError {
    #[error(
        "Malformed PMSI tunnel attribute{}: expected {expected} bytes, got {actual}",
        tunnel_context(.tunnel_type)
    )]
    MalformedAttribute {
        tunnel_type: Option<u8>,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid MPLS label {label}: exceeds 20 bits")]
    InvalidLabel { label: u32 },

    #[error(
        "Tunnel type {tunnel_type} ({}) has a decoder and cannot carry an opaque identifier",
        tunnel_name(.tunnel_type)
    )]
    OpaqueTunnelType { tunnel_type: u8 },

    #[error("Invalid PMSI tunnel text: {0}")]
    InvalidText(String),

    #[error("Nom parsing error: {0}")]
    NomError(String),

    #[error("Incomplete data: need {needed} more bytes")]
    IncompleteData { needed: usize },
}

impl PmsiParseError {
    pub fn malformed(tunnel_type: u8, expected: usize, actual: usize) -> Self {
        PmsiParseError::MalformedAttribute {
            tunnel_type: Some(tunnel_type),
            expected,
            actual,
        }
    }
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for PmsiParseError {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => {
                let needed_bytes = match needed {
                    nom::Needed::Unknown => 0,
                    nom::Needed::Size(size) => size.get(),
                };
                PmsiParseError::IncompleteData {
                    needed: needed_bytes,
                }
            }
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                PmsiParseError::NomError(format!("{:?}: {:?}", e.code, e.input))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_tunnel_type() {
        let err = PmsiParseError::malformed(6, 4, 3);
        assert_eq!(
            err.to_string(),
            "Malformed PMSI tunnel attribute (Ingress Replication, type 6): expected 4 bytes, got 3"
        );
    }

    #[test]
    fn display_header() {
        let err = PmsiParseError::MalformedAttribute {
            tunnel_type: None,
            expected: 5,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Malformed PMSI tunnel attribute: expected 5 bytes, got 2"
        );
    }

    #[test]
    fn display_opaque_type() {
        let err = PmsiParseError::OpaqueTunnelType { tunnel_type: 6 };
        assert_eq!(
            err.to_string(),
            "Tunnel type 6 (Ingress Replication) has a decoder and cannot carry an opaque identifier"
        );
    }

    #[test]
    fn from_incomplete() {
        let err: nom::Err<nom::error::Error<&[u8]>> = nom::Err::Incomplete(nom::Needed::new(4));
        assert_eq!(
            PmsiParseError::from(err),
            PmsiParseError::IncompleteData { needed: 4 }
        );
    }
}
