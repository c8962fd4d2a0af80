use bytes::BytesMut;

pub trait TunnelEmit {
    fn tunnel_type(&self) -> u8;

    fn len(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn emit_payload(&self, _buf: &mut BytesMut) {}
}
