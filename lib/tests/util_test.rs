use stun_lite::error::Error;
use stun_lite::util;

#[test]
pub fn test_address_to_integer() {
    assert_eq!(util::address_to_integer("192.168.1.1"), Ok(0xC0A8_0101));
    assert_eq!(util::address_to_integer("0.0.0.0"), Ok(0));
    assert_eq!(util::address_to_integer("255.255.255.255"), Ok(u32::MAX));
    assert_eq!(util::address_to_integer("203.0.113.7"), Ok(0xCB00_7107));
}

#[test]
pub fn test_address_round_trip() {
    let list = [
        "0.0.0.0",
        "1.2.3.4",
        "10.20.30.40",
        "127.0.0.1",
        "198.51.100.9",
        "203.0.113.7",
        "255.255.255.255",
    ];

    for s in list {
        let n = util::address_to_integer(s).unwrap();
        assert_eq!(util::integer_to_address(n).unwrap(), s);
    }
}

#[test]
pub fn test_address_to_integer_rejects() {
    let list = [
        "1.2.3",
        "1.2.3.4.5",
        "256.0.0.1",
        "a.b.c.d",
        "",
        "1..2.3",
        "+1.2.3.4",
        "1.2.3.-4",
        " 1.2.3.4",
        "010.001.002.003",
        "1.2.3.04",
        "00.0.0.0",
    ];

    for s in list {
        let ret = util::address_to_integer(s);
        assert!(matches!(ret, Err(Error::Format(_))), "{:?} -> {:?}", s, ret);
    }
}

#[test]
pub fn test_address_zero_component() {
    assert_eq!(util::address_to_integer("10.0.0.1"), Ok(0x0A00_0001));
    assert_eq!(util::address_to_integer("100.200.0.0"), Ok(0x64C8_0000));
}

#[test]
pub fn test_integer_to_address() {
    assert_eq!(util::integer_to_address(0_u32).unwrap(), "0.0.0.0");
    assert_eq!(util::integer_to_address(0x0102_0304_u32).unwrap(), "1.2.3.4");
    assert_eq!(
        util::integer_to_address(u32::MAX).unwrap(),
        "255.255.255.255"
    );
    assert_eq!(
        util::integer_to_address(u32::MAX as u64).unwrap(),
        "255.255.255.255"
    );
}

#[test]
pub fn test_integer_to_address_range() {
    let too_big = u32::MAX as u64 + 1;
    assert_eq!(util::integer_to_address(too_big), Err(Error::Range(too_big)));
}

#[test]
pub fn test_bytes_equal() {
    assert!(util::bytes_equal(&[], &[]));
    assert!(util::bytes_equal(&[1, 2, 3], &[1, 2, 3]));
    assert!(!util::bytes_equal(&[1, 2, 3], &[1, 2]));
    assert!(!util::bytes_equal(&[1, 2, 3], &[1, 2, 4]));
}

#[test]
pub fn test_new_trans_id() {
    let trans_id = util::new_trans_id();
    assert_eq!(trans_id.len(), 16);
    println!("{}", util::print_bytes(&trans_id, " ", 8));
}

#[test]
pub fn test_print_bytes() {
    assert_eq!(util::print_bytes(&[0x00, 0x01, 0xAB], " ", 8), "00 01 AB ");
    assert_eq!(util::print_bytes(&[0x0F, 0xF0], " ", 2), "0F F0\n");
}
