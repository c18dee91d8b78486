pub const TRANS_ID_LEN: usize = 16;
pub const HEADER_LEN: usize = 20;

// type(2) + length(2)
pub const ATTR_HEADER_LEN: usize = 4;

pub const MESSAGE_TYPE_BIND_REQ: u16 = 0x0001;
pub const MESSAGE_TYPE_BIND_RES: u16 = 0x0101;
pub const MESSAGE_TYPE_BIND_ERR_RES: u16 = 0x0111;
pub const MESSAGE_TYPE_SECRET_REQ: u16 = 0x0002;
pub const MESSAGE_TYPE_SECRET_RES: u16 = 0x0102;
pub const MESSAGE_TYPE_SECRET_ERR_RES: u16 = 0x0112;

pub const ATTR_FAMILY_IPV4: u8 = 0x01;

pub const ATTR_MAPPED_ADDRESS: u16 = 0x0001;
pub const ATTR_RESPONSE_ADDRESS: u16 = 0x0002;
pub const ATTR_CHANGE_REQUEST: u16 = 0x0003;
pub const ATTR_SOURCE_ADDRESS: u16 = 0x0004;
pub const ATTR_CHANGED_ADDRESS: u16 = 0x0005;
pub const ATTR_USERNAME: u16 = 0x0006;
pub const ATTR_PASSWORD: u16 = 0x0007;
pub const ATTR_MESSAGE_INTEGRITY: u16 = 0x0008;
pub const ATTR_ERROR_CODE: u16 = 0x0009;
pub const ATTR_UNKNOWN_ATTRIBUTES: u16 = 0x000a;
pub const ATTR_REFLECTED_FROM: u16 = 0x000b;
pub const ATTR_XOR_MAPPED_ADDRESS: u16 = 0x0020;
pub const ATTR_TIMESTAMP: u16 = 0x0032;

// value lengths on the wire
pub const ADDRESS_VALUE_LEN: u16 = 0x0008;
pub const CHANGE_REQUEST_VALUE_LEN: u16 = 0x0004;
pub const TIMESTAMP_VALUE_LEN: u16 = 0x0004;

pub const DEFAULT_PORT: u16 = 3478;
