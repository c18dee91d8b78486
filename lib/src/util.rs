use crate::constants::TRANS_ID_LEN;
use crate::error::{Error, Result};
use bytes::Bytes;
use rand::prelude::*;
use std::fmt::Write as _;

pub fn print_bytes(buf: &[u8], separator: &str, row_width: usize) -> String {
    let mut hex = String::new();
    buf.iter().enumerate().for_each(|(x, y)| {
        let _ = write!(hex, "{:02X}", y);
        if (x + 1) % row_width == 0 {
            hex.push('\n');
        } else {
            hex.push_str(separator);
        }
    });

    hex
}

/// Random 16 byte transaction id.
pub fn new_trans_id() -> Bytes {
    let mut trans_id = [0u8; TRANS_ID_LEN];
    rand::thread_rng().fill_bytes(&mut trans_id);
    Bytes::copy_from_slice(&trans_id)
}

/// `"a.b.c.d"` -> `(a << 24) | (b << 16) | (c << 8) | d`
pub fn address_to_integer(text: &str) -> Result<u32> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(Error::Format(format!(
            "{}: {} components, expected 4",
            text,
            parts.len()
        )));
    }

    let mut value = 0_u32;
    for part in parts {
        // digits only, u8::from_str would also take a leading '+'.
        // no leading zeros, so the text converts back unchanged
        let canonical = part.bytes().all(|c| c.is_ascii_digit())
            && !(part.len() > 1 && part.starts_with('0'));
        let octet = match canonical {
            true => part.parse::<u8>().ok(),
            false => None,
        };
        let octet = match octet {
            Some(v) => v,
            None => {
                return Err(Error::Format(format!("{}: bad component '{}'", text, part)));
            }
        };
        value = value << 8 | octet as u32;
    }

    Ok(value)
}

/// Inverse of [`address_to_integer`].
///
/// Takes anything widening to `u64` so the upper bound stays an explicit
/// check rather than a property of the argument type.
pub fn integer_to_address<T: Into<u64>>(value: T) -> Result<String> {
    let value: u64 = value.into();
    if value > u32::MAX as u64 {
        return Err(Error::Range(value));
    }

    let [a, b, c, d] = (value as u32).to_be_bytes();
    Ok(format!("{}.{}.{}.{}", a, b, c, d))
}

// length first, then element by element
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}
