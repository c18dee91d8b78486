use stun_lite::nat::{DiscoveryMode, NatType, ProbeResult};

#[test]
pub fn test_probe_result_codes() {
    let list = [
        ProbeResult::Ok,
        ProbeResult::HostNotFound,
        ProbeResult::UdpBlocked,
        ProbeResult::BindingIncomplete,
    ];
    for v in list {
        assert_eq!(ProbeResult::from_code(v.code()), Some(v));
    }
    assert_eq!(ProbeResult::UdpBlocked.code(), -2);
    assert_eq!(ProbeResult::from_code(1), None);
}

#[test]
pub fn test_nat_type_names() {
    assert_eq!(NatType::Independent.name(), "I");
    assert_eq!(NatType::AddressAndPortDependent.name(), "APD");
}

#[test]
pub fn test_discovery_mode_codes() {
    assert_eq!(DiscoveryMode::Full.code(), 0);
    assert_eq!(DiscoveryMode::BindingOnly.code(), 1);
    for v in [DiscoveryMode::Full, DiscoveryMode::BindingOnly] {
        assert_eq!(DiscoveryMode::from_code(v.code()), Some(v));
    }
    assert_eq!(DiscoveryMode::from_code(2), None);
}
