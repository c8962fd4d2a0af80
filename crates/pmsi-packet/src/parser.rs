#[derive(Default, Debug, Clone)]
pub struct ParseOption {
    // Reject a "No tunnel" attribute that carries a tunnel identifier instead
    // of discarding it.
    pub strict_no_tunnel: bool,
}

impl ParseOption {
    pub fn strict() -> Self {
        Self {
            strict_no_tunnel: true,
        }
    }

    pub fn is_strict_no_tunnel(&self) -> bool {
        self.strict_no_tunnel
    }
}

/// How two PMSI tunnel attributes are compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EqualityMode {
    /// Flags, label, tunnel type and tunnel identifier.
    #[default]
    Structural,
    /// Flags, label and tunnel identifier bytes; the tunnel type is ignored.
    Legacy,
}
