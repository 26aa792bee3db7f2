//! Big-endian byte stream and the primitive codecs built on it.
//!
//! All integers and floats are big-endian. Strings and byte arrays are
//! length-prefixed with a `u16` count. There is no alignment padding.

use std::io::{self, Read, Write};

use crate::error::CodecError;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width field that can be read from or written to a [`ByteStream`].
///
/// Implemented for the signed and unsigned integers and the two float
/// widths used by the blueprint formats. The trait is sealed.
pub trait Primitive: Copy + Default + sealed::Sealed {
    /// Big-endian byte representation.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Decode from big-endian bytes.
    fn from_be(bytes: Self::Bytes) -> Self;

    /// Encode to big-endian bytes.
    fn to_be(self) -> Self::Bytes;
}

macro_rules! primitive {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                type Bytes = [u8; $width];

                fn from_be(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_be(self) -> Self::Bytes {
                    self.to_be_bytes()
                }
            }
        )*
    };
}

primitive! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

/// Sequential byte source or sink with an offset counter.
///
/// Generic over the inner type so tests can use `&[u8]` and `Vec<u8>`
/// while file helpers use `BufReader<File>` and `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use smade_tag::ByteStream;
///
/// let mut out = ByteStream::new(Vec::new());
/// out.write(0x0102_i16).unwrap();
/// out.write_string("hull").unwrap();
/// let bytes = out.into_inner();
/// assert_eq!(bytes, [0x01, 0x02, 0x00, 0x04, b'h', b'u', b'l', b'l']);
///
/// let mut input = ByteStream::new(bytes.as_slice());
/// assert_eq!(input.read::<i16>().unwrap(), 0x0102);
/// assert_eq!(input.read_string().unwrap(), "hull");
/// ```
pub struct ByteStream<S> {
    inner: S,
    offset: u64,
    depth: usize,
}

impl<S> ByteStream<S> {
    /// Deepest container nesting accepted while decoding.
    pub const MAX_DEPTH: usize = 256;

    /// Wrap a reader or writer, starting at offset zero.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            offset: 0,
            depth: 0,
        }
    }

    /// Number of bytes consumed or produced so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Borrow the underlying reader or writer.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Consume the stream and return the underlying reader or writer.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Enter one container level, failing past [`Self::MAX_DEPTH`].
    pub(crate) fn descend(&mut self) -> Result<(), CodecError> {
        if self.depth >= Self::MAX_DEPTH {
            return Err(CodecError::malformed(format!(
                "containers nested deeper than {} at offset {:#x}",
                Self::MAX_DEPTH,
                self.offset
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave the level entered by `descend`.
    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }
}

impl<R: Read> ByteStream<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CodecError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.offset += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(CodecError::TruncatedInput {
                    offset: self.offset,
                    need: buf.len(),
                })
            }
            Err(e) => Err(CodecError::Io(e)),
        }
    }

    /// Read one fixed-width field.
    pub fn read<T: Primitive>(&mut self) -> Result<T, CodecError> {
        let mut bytes = T::Bytes::default();
        self.fill(bytes.as_mut())?;
        Ok(T::from_be(bytes))
    }

    /// Read a fixed-count tuple of fields with no length prefix.
    pub fn read_array<T: Primitive, const N: usize>(&mut self) -> Result<[T; N], CodecError> {
        let mut out = [T::default(); N];
        for slot in &mut out {
            *slot = self.read()?;
        }
        Ok(out)
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, CodecError> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read a `u16`-prefixed byte array verbatim.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read::<u16>()? as usize;
        self.read_bytes(len)
    }

    /// Read a `u16`-prefixed ASCII string.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let start = self.offset;
        let bytes = self.read_byte_array()?;
        if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(CodecError::EncodingError {
                detail: format!(
                    "non-ASCII byte {:#04x} in string at offset {:#x}",
                    bytes[pos],
                    start + 2 + pos as u64
                ),
            });
        }
        String::from_utf8(bytes).map_err(|e| CodecError::EncodingError {
            detail: e.to_string(),
        })
    }
}

impl<W: Write> ByteStream<W> {
    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.inner.write_all(bytes)?;
        self.offset += bytes.len() as u64;
        Ok(())
    }

    /// Write one fixed-width field.
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<(), CodecError> {
        self.write_bytes(value.to_be().as_ref())
    }

    /// Write a fixed-count tuple of fields with no length prefix.
    pub fn write_array<T: Primitive, const N: usize>(
        &mut self,
        values: &[T; N],
    ) -> Result<(), CodecError> {
        for &value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Write a `u16`-prefixed byte array verbatim.
    pub fn write_byte_array(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let len = u16::try_from(bytes.len()).map_err(|_| {
            CodecError::malformed(format!(
                "{} bytes exceed the u16 length prefix",
                bytes.len()
            ))
        })?;
        self.write(len)?;
        self.write_bytes(bytes)
    }

    /// Write a `u16`-prefixed ASCII string.
    pub fn write_string(&mut self, text: &str) -> Result<(), CodecError> {
        if !text.is_ascii() {
            return Err(CodecError::EncodingError {
                detail: format!("string {text:?} is not ASCII"),
            });
        }
        self.write_byte_array(text.as_bytes())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(f: impl FnOnce(&mut ByteStream<Vec<u8>>) -> Result<(), CodecError>) -> Vec<u8> {
        let mut stream = ByteStream::new(Vec::new());
        f(&mut stream).unwrap();
        stream.into_inner()
    }

    #[test]
    fn reads_signed_bytes_in_order() {
        let bytes = [0x00u8, 0x01, 0x02];
        let mut stream = ByteStream::new(bytes.as_slice());
        let got: [i8; 3] = stream.read_array().unwrap();
        assert_eq!(got, [0, 1, 2]);
        assert_eq!(stream.offset(), 3);
    }

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(encoded(|s| s.write(0x0102_0304_i32)), [1, 2, 3, 4]);
        assert_eq!(encoded(|s| s.write(-2_i16)), [0xFF, 0xFE]);
        assert_eq!(encoded(|s| s.write(1.0_f32)), [0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn short_read_reports_offset_and_need() {
        let bytes = [0u8, 0, 0, 7, 1, 2];
        let mut stream = ByteStream::new(bytes.as_slice());
        assert_eq!(stream.read::<u32>().unwrap(), 7);
        let err = stream.read::<u32>().unwrap_err();
        assert!(matches!(
            err,
            CodecError::TruncatedInput { offset: 4, need: 4 }
        ));
    }

    #[test]
    fn string_with_high_byte_is_rejected() {
        let bytes = [0x00, 0x02, b'o', 0xE9];
        let err = ByteStream::new(bytes.as_slice()).read_string().unwrap_err();
        assert!(matches!(err, CodecError::EncodingError { .. }));
    }

    #[test]
    fn non_ascii_text_is_not_written() {
        let mut stream = ByteStream::new(Vec::new());
        let err = stream.write_string("caf\u{e9}").unwrap_err();
        assert!(matches!(err, CodecError::EncodingError { .. }));
        assert!(stream.into_inner().is_empty());
    }

    #[test]
    fn oversized_byte_array_is_rejected() {
        let big = vec![0u8; u16::MAX as usize + 1];
        let mut stream = ByteStream::new(Vec::new());
        assert!(matches!(
            stream.write_byte_array(&big),
            Err(CodecError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn byte_array_passes_through_verbatim() {
        let bytes = encoded(|s| s.write_byte_array(&[0xFF, 0x80, 0x00]));
        assert_eq!(bytes, [0x00, 0x03, 0xFF, 0x80, 0x00]);
        let got = ByteStream::new(bytes.as_slice()).read_byte_array().unwrap();
        assert_eq!(got, [0xFF, 0x80, 0x00]);
    }

    #[test]
    fn depth_is_bounded_and_restored() {
        let mut stream = ByteStream::new(Vec::<u8>::new());
        for _ in 0..ByteStream::<Vec<u8>>::MAX_DEPTH {
            stream.descend().unwrap();
        }
        assert!(matches!(
            stream.descend(),
            Err(CodecError::MalformedRecord { .. })
        ));
        stream.ascend();
        stream.descend().unwrap();
    }

    proptest! {
        #[test]
        fn roundtrip_i64(v in any::<i64>()) {
            let buf = encoded(|s| s.write(v));
            prop_assert_eq!(ByteStream::new(buf.as_slice()).read::<i64>().unwrap(), v);
        }

        #[test]
        fn roundtrip_f64_bits(bits in any::<u64>()) {
            let buf = encoded(|s| s.write(f64::from_bits(bits)));
            let got = ByteStream::new(buf.as_slice()).read::<f64>().unwrap();
            prop_assert_eq!(got.to_bits(), bits);
        }

        #[test]
        fn roundtrip_ascii_string(text in "[ -~]{0,64}") {
            let buf = encoded(|s| s.write_string(&text));
            prop_assert_eq!(buf.len(), text.len() + 2);
            prop_assert_eq!(ByteStream::new(buf.as_slice()).read_string().unwrap(), text);
        }
    }
}
