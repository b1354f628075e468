use super::*;

/// Exception tags. Each tag is its attribute (always `0`, "exception")
/// followed by its signature.
#[derive(Clone, Debug, Default)]
pub struct TagSection {
    tags: Vec<TypeIdx>,
}

impl TagSection {
    pub fn push(&mut self, type_idx: TypeIdx) -> u32 {
        self.tags.push(type_idx);
        self.tags.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.tags.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeIdx> + '_ {
        self.tags.iter().cloned()
    }
}

impl Section for TagSection {
    fn id(&self) -> SectionId {
        SectionId::Tag
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        w.write_len(self.tags.len());
        for type_idx in &self.tags {
            w.write_u8(0x00);
            type_idx.encode(w);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_entries() {
        let mut section = TagSection::default();
        assert_eq!(section.push(TypeIdx(2)), 0);
        assert_eq!(section.push(TypeIdx(0)), 1);
        let mut sink = Sink::new();
        encode_section(&section, &mut sink);
        assert_eq!(sink.into_bytes(), vec![0x0d, 0x05, 0x02, 0x00, 0x02, 0x00, 0x00]);
    }
}
