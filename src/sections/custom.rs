use super::*;

/// A section appended after the standard ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtraSection {
    /// A custom section, written as id `0`, its name and the bytes.
    Custom {
        name: String,
        bytes: Vec<u8>,
    },
    /// Bytes copied into the module verbatim. These are expected to already
    /// be a complete section (id, size and payload) but nothing checks that.
    Explicit(Vec<u8>),
}

impl Encode for ExtraSection {
    fn encode(&self, w: &mut Sink) {
        match self {
            ExtraSection::Custom { name, bytes } => {
                w.write_u8(SectionId::Custom.into());
                w.write_length_prefixed(|payload| {
                    name.encode(payload);
                    payload.write_bytes(bytes);
                });
            },
            ExtraSection::Explicit(bytes) => w.write_bytes(bytes),
        }
    }
}

const MODULE_SUBSECTION: u8 = 0;
const FUNCTIONS_SUBSECTION: u8 = 1;
const LOCALS_SUBSECTION: u8 = 2;

/// The `name` custom section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSection<'a> {
    pub module: Option<&'a str>,
    pub functions: Vec<(u32, &'a str)>,
    /// Function index and its `(local index, name)` pairs, both in ascending
    /// order.
    pub locals: Vec<(u32, Vec<(u32, &'a str)>)>,
}

fn encode_name_map(names: &[(u32, &str)], w: &mut Sink) {
    w.write_len(names.len());
    for (idx, name) in names {
        idx.encode(w);
        name.encode(w);
    }
}

impl<'a> Section for NameSection<'a> {
    fn id(&self) -> SectionId {
        SectionId::Custom
    }

    fn is_empty(&self) -> bool {
        self.module.is_none() && self.functions.is_empty() && self.locals.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        "name".encode(w);
        if let Some(module) = self.module {
            w.write_u8(MODULE_SUBSECTION);
            w.write_length_prefixed(|sub| module.encode(sub));
        }
        if !self.functions.is_empty() {
            w.write_u8(FUNCTIONS_SUBSECTION);
            w.write_length_prefixed(|sub| encode_name_map(&self.functions, sub));
        }
        if !self.locals.is_empty() {
            w.write_u8(LOCALS_SUBSECTION);
            w.write_length_prefixed(|sub| {
                sub.write_len(self.locals.len());
                for (func_idx, names) in &self.locals {
                    func_idx.encode(sub);
                    encode_name_map(names, sub);
                }
            });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn custom_section_framing() {
        let mut sink = Sink::new();
        ExtraSection::Custom { name: "x".to_owned(), bytes: vec![7, 8] }.encode(&mut sink);
        ExtraSection::Explicit(vec![0x00, 0x01, 0x00]).encode(&mut sink);
        assert_eq!(sink.into_bytes(), vec![0x00, 0x04, 0x01, b'x', 7, 8, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn name_subsections() {
        let names = NameSection {
            module: Some("m"),
            functions: vec![(1, "f")],
            locals: vec![(1, vec![(0, "a")])],
        };
        let mut sink = Sink::new();
        encode_section(&names, &mut sink);
        assert_eq!(
            sink.into_bytes(),
            vec![
                0x00, 0x17,
                0x04, b'n', b'a', b'm', b'e',
                0x00, 0x02, 0x01, b'm',
                0x01, 0x04, 0x01, 0x01, 0x01, b'f',
                0x02, 0x06, 0x01, 0x01, 0x01, 0x00, 0x01, b'a',
            ],
        );
    }
}
