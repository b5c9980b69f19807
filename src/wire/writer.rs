use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use super::error::WireError;
use crate::model::WarOrder;

/// Frames war orders for the spool: one JSON object per line.
#[derive(Debug, Default)]
pub struct OrderEncoder;

impl Encoder<&WarOrder> for OrderEncoder {
    type Error = WireError;

    fn encode(&mut self, order: &WarOrder, buf: &mut BytesMut) -> Result<(), WireError> {
        let json = serde_json::to_vec(order)?;
        buf.reserve(json.len() + 1);
        buf.put_slice(&json);
        buf.put_u8(b'\n');
        Ok(())
    }
}

/// Encodes a single order into an owned line buffer.
pub fn encode_order(order: &WarOrder) -> Result<BytesMut, WireError> {
    let mut encoder = OrderEncoder;
    let mut buf = BytesMut::new();
    encoder.encode(order, &mut buf)?;
    Ok(buf)
}
