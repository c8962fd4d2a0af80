/// Lower three octets of `val` in network byte order.
pub fn u32_u24(val: u32) -> [u8; 3] {
    let [_, b1, b2, b3] = val.to_be_bytes();
    [b1, b2, b3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_high_octet() {
        assert_eq!(u32_u24(0x12345678), [0x34, 0x56, 0x78]);
        assert_eq!(u32_u24(0x10), [0x00, 0x00, 0x10]);
    }
}
