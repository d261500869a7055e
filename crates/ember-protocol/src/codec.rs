//! Wire primitives for the Beta dialect: big-endian fields behind a single
//! packet-id byte, with no frame length. Reads pull straight off the socket;
//! writes accumulate into a buffer so a packet hits the stream in one piece.

use bytes::{BufMut, BytesMut};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown packet ID: 0x{0:02X}")]
    UnknownPacketId(u8),
    #[error("negative string length: {0}")]
    NegativeStringLength(i16),
    #[error("character U+{0:04X} cannot be encoded as a single UCS-2 unit")]
    StringNotEncodable(u32),
    #[error("connection is closed")]
    ConnectionClosed,
    #[error("this connection is already listening")]
    AlreadyListening,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

pub async fn read_bool<R: AsyncRead + Unpin>(reader: &mut R) -> ProtocolResult<bool> {
    Ok(reader.read_u8().await? != 0)
}

/// i16 byte length followed by raw UTF-8 bytes.
pub async fn read_string8<R: AsyncRead + Unpin>(reader: &mut R) -> ProtocolResult<String> {
    let length = reader.read_i16().await?;
    if length < 0 {
        return Err(ProtocolError::NegativeStringLength(length));
    }
    let mut bytes = vec![0u8; length as usize];
    reader.read_exact(&mut bytes).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// i16 code-unit count followed by big-endian UCS-2 units.
pub async fn read_string16<R: AsyncRead + Unpin>(reader: &mut R) -> ProtocolResult<String> {
    let length = reader.read_i16().await?;
    if length < 0 {
        return Err(ProtocolError::NegativeStringLength(length));
    }
    let mut units = Vec::with_capacity(length as usize);
    for _ in 0..length {
        units.push(reader.read_u16().await?);
    }
    Ok(String::from_utf16_lossy(&units))
}

pub fn write_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(value as u8);
}

/// Length counts bytes, not characters.
pub fn write_string8(buf: &mut BytesMut, value: &str) {
    buf.put_i16(value.len() as i16);
    buf.put_slice(value.as_bytes());
}

/// Length counts code points; each is one u16. Characters outside the BMP
/// have no encoding in this dialect, so the string is validated before any
/// byte lands in the buffer.
pub fn write_string16(buf: &mut BytesMut, value: &str) -> ProtocolResult<()> {
    for c in value.chars() {
        if c as u32 > 0xFFFF {
            return Err(ProtocolError::StringNotEncodable(c as u32));
        }
    }
    buf.put_i16(value.chars().count() as i16);
    for c in value.chars() {
        buf.put_u16(c as u16);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn string16_roundtrip_ascii() {
        let mut buf = BytesMut::new();
        write_string16(&mut buf, "Pesk").unwrap();
        assert_eq!(
            buf.to_vec(),
            vec![0x00, 0x04, 0x00, 0x50, 0x00, 0x65, 0x00, 0x73, 0x00, 0x6B]
        );

        let mut reader = &buf[..];
        let result = read_string16(&mut reader).await.unwrap();
        assert_eq!(result, "Pesk");
    }

    #[tokio::test]
    async fn string16_roundtrip_bmp() {
        let original = "čau světe §c";
        let mut buf = BytesMut::new();
        write_string16(&mut buf, original).unwrap();
        let mut reader = &buf[..];
        assert_eq!(read_string16(&mut reader).await.unwrap(), original);
    }

    #[test]
    fn string16_rejects_non_bmp() {
        let mut buf = BytesMut::new();
        let err = write_string16(&mut buf, "ok \u{1F600}").unwrap_err();
        assert!(matches!(err, ProtocolError::StringNotEncodable(0x1F600)));
        // nothing was written
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn string8_roundtrip() {
        let mut buf = BytesMut::new();
        write_string8(&mut buf, "hello");
        assert_eq!(&buf[..2], &[0x00, 0x05]);
        let mut reader = &buf[..];
        assert_eq!(read_string8(&mut reader).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn negative_string_length_is_an_error() {
        let data: &[u8] = &[0xFF, 0xFF];
        let mut reader = data;
        assert!(matches!(
            read_string16(&mut reader).await,
            Err(ProtocolError::NegativeStringLength(-1))
        ));
        let mut reader = data;
        assert!(matches!(
            read_string8(&mut reader).await,
            Err(ProtocolError::NegativeStringLength(-1))
        ));
    }

    #[tokio::test]
    async fn truncated_string_is_an_error() {
        let data: &[u8] = &[0x00, 0x05, 0x00, 0x50];
        let mut reader = data;
        assert!(matches!(
            read_string16(&mut reader).await,
            Err(ProtocolError::Io(_))
        ));
    }

    #[tokio::test]
    async fn bool_is_one_nonzero_byte() {
        let mut buf = BytesMut::new();
        write_bool(&mut buf, true);
        write_bool(&mut buf, false);
        assert_eq!(buf.to_vec(), vec![0x01, 0x00]);
        let mut reader = &buf[..];
        assert!(read_bool(&mut reader).await.unwrap());
        assert!(!read_bool(&mut reader).await.unwrap());
    }

    #[tokio::test]
    async fn primitives_roundtrip_bit_for_bit() {
        let mut buf = BytesMut::new();
        buf.put_i16(-2);
        buf.put_i32(-70000);
        buf.put_i64(i64::MIN);
        buf.put_f32(1.62_f32);
        buf.put_f64(67.240000009536743);

        let mut reader = &buf[..];
        assert_eq!(reader.read_i16().await.unwrap(), -2);
        assert_eq!(reader.read_i32().await.unwrap(), -70000);
        assert_eq!(reader.read_i64().await.unwrap(), i64::MIN);
        assert_eq!(reader.read_f32().await.unwrap().to_bits(), 1.62_f32.to_bits());
        assert_eq!(
            reader.read_f64().await.unwrap().to_bits(),
            67.240000009536743_f64.to_bits()
        );
    }
}
