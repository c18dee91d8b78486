use stun_lite::attrs::address_attr::AddressAttr;
use stun_lite::attrs::timestamp::Timestamp;
use stun_lite::attrs::{AttrType, Attribute};
use stun_lite::cursor::Writer;
use stun_lite::error::Error;

#[test]
pub fn test_writer_overrun() {
    let mut w = Writer::new(3);
    assert_eq!(
        w.put_u32(1),
        Err(Error::BufferOverrun {
            need: 4,
            remaining: 3
        })
    );
    assert_eq!(w.remaining(), 3);

    w.put_u16(0xABCD).unwrap();
    w.put_u8(0xEF).unwrap();
    assert_eq!(
        w.put_u8(0),
        Err(Error::BufferOverrun {
            need: 1,
            remaining: 0
        })
    );
    assert_eq!(&w.freeze()[..], &[0xAB, 0xCD, 0xEF]);
}

#[test]
pub fn test_address_attr_short_writer() {
    let attr = Attribute::new(
        AttrType::MappedAddress,
        AddressAttr::new("203.0.113.7", 5000).into(),
    )
    .unwrap();

    let mut w = Writer::new(11);
    assert_eq!(
        attr.pack(&mut w),
        Err(Error::BufferOverrun {
            need: 12,
            remaining: 11
        })
    );
    // nothing was written
    assert_eq!(w.remaining(), 11);
    assert!(w.freeze().iter().all(|v| *v == 0));
}

#[test]
pub fn test_timestamp_short_writer() {
    let attr = Attribute::new(AttrType::Timestamp, Timestamp::new(1, 2).into()).unwrap();

    let mut w = Writer::new(7);
    assert_eq!(
        attr.pack(&mut w),
        Err(Error::BufferOverrun {
            need: 8,
            remaining: 7
        })
    );
    assert_eq!(w.remaining(), 7);
    assert!(w.freeze().iter().all(|v| *v == 0));

    let mut w = Writer::new(8);
    attr.pack(&mut w).unwrap();
    assert_eq!(&w.freeze()[..], &[0x00, 0x32, 0x00, 0x04, 0x00, 0x01, 0x00, 0x02]);
}
