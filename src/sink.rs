use super::*;

/// Append-only byte buffer that sections and their entries are written into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sink {
    bytes: Vec<u8>,
}

impl Sink {
    pub fn new() -> Sink {
        Sink {
            bytes: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Sink {
        Sink {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, b: u8) {
        self.bytes.push(b);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn write_uleb(&mut self, value: u64) {
        leb128::write_unsigned(&mut self.bytes, value);
    }

    pub fn write_sleb(&mut self, value: i64) {
        leb128::write_signed(&mut self.bytes, value);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    }

    /// Writes a vector length, which the binary format always encodes as a
    /// `u32`.
    pub fn write_len(&mut self, len: usize) {
        self.write_uleb(len as u64);
    }

    /// Writes `name` as its UTF-8 byte length followed by the bytes.
    pub fn write_name(&mut self, name: &str) {
        self.write_len(name.len());
        self.write_bytes(name.as_bytes());
    }

    /// Runs `body` against a scratch sink, then writes the byte length of
    /// whatever it produced followed by the bytes themselves.
    pub fn write_length_prefixed<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Sink),
    {
        let mut scratch = Sink::new();
        body(&mut scratch);
        self.write_len(scratch.len());
        self.bytes.extend_from_slice(&scratch.bytes);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn floats_are_little_endian() {
        let mut sink = Sink::new();
        sink.write_f32(1.0);
        sink.write_f64(-2.0);
        assert_eq!(
            sink.as_bytes(),
            &[
                0x00, 0x00, 0x80, 0x3f,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0,
            ][..],
        );
    }

    #[test]
    fn names_are_length_prefixed_utf8() {
        let mut sink = Sink::new();
        sink.write_name("h\u{e9}");
        assert_eq!(sink.into_bytes(), vec![0x03, b'h', 0xc3, 0xa9]);
    }

    #[test]
    fn length_prefix_covers_nested_body() {
        let mut sink = Sink::new();
        sink.write_u8(0x0a);
        sink.write_length_prefixed(|w| {
            w.write_uleb(300);
            w.write_sleb(-1);
            w.write_length_prefixed(|w| w.write_bytes(&[1, 2, 3]));
        });
        assert_eq!(
            sink.into_bytes(),
            vec![0x0a, 0x07, 0xac, 0x02, 0x7f, 0x03, 1, 2, 3],
        );
    }

    #[test]
    fn long_bodies_get_multi_byte_prefixes() {
        let mut sink = Sink::new();
        let body = vec![0u8; 200];
        sink.write_length_prefixed(|w| w.write_bytes(&body));
        assert_eq!(&sink.as_bytes()[..2], &[0xc8, 0x01][..]);
        assert_eq!(sink.len(), 202);
    }
}
