//! NAT classification vocabulary.
//!
//! Only the names live here. No discovery is performed by this crate; the
//! types exist so a prober built on top of the codec can report its
//! findings with them.

/// How a NAT's mapping or filtering depends on the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NatType {
    Independent,
    PortDependent,
    AddressDependent,
    AddressAndPortDependent,
    Undefined,
}

impl NatType {
    pub fn name(&self) -> &'static str {
        match self {
            NatType::Independent => "I",
            NatType::PortDependent => "PD",
            NatType::AddressDependent => "AD",
            NatType::AddressAndPortDependent => "APD",
            NatType::Undefined => "UNDEF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryMode {
    /// mapping and filtering
    Full,
    /// mapping only
    BindingOnly,
}

impl DiscoveryMode {
    pub fn code(&self) -> u8 {
        match self {
            DiscoveryMode::Full => 0,
            DiscoveryMode::BindingOnly => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DiscoveryMode::Full),
            1 => Some(DiscoveryMode::BindingOnly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    Ok,
    HostNotFound,
    /// no reply at all
    UdpBlocked,
    /// some probes got through, some did not
    BindingIncomplete,
}

impl ProbeResult {
    pub fn code(&self) -> i32 {
        match self {
            ProbeResult::Ok => 0,
            ProbeResult::HostNotFound => -1,
            ProbeResult::UdpBlocked => -2,
            ProbeResult::BindingIncomplete => -3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        let v = match code {
            0 => ProbeResult::Ok,
            -1 => ProbeResult::HostNotFound,
            -2 => ProbeResult::UdpBlocked,
            -3 => ProbeResult::BindingIncomplete,
            _ => return None,
        };
        Some(v)
    }
}
