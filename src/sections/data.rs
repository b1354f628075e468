use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum DataMode {
    Active {
        memory: MemIdx,
        offset: Offset,
    },
    Passive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataSegment {
    pub mode: DataMode,
    pub bytes: Vec<u8>,
}

impl DataSegment {
    pub fn is_passive(&self) -> bool {
        self.mode == DataMode::Passive
    }
}

impl Encode for DataSegment {
    fn encode(&self, w: &mut Sink) {
        match &self.mode {
            DataMode::Active { memory: MemIdx(0), offset } => {
                w.write_u8(0x00);
                offset.to_const_expr().encode(w);
            },
            DataMode::Active { memory, offset } => {
                w.write_u8(0x02);
                memory.encode(w);
                offset.to_const_expr().encode(w);
            },
            DataMode::Passive => w.write_u8(0x01),
        }
        w.write_len(self.bytes.len());
        w.write_bytes(&self.bytes);
    }
}

#[derive(Clone, Debug, Default)]
pub struct DataSection {
    segments: Vec<DataSegment>,
}

impl DataSection {
    pub fn push(&mut self, segment: DataSegment) -> u32 {
        self.segments.push(segment);
        self.segments.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.segments.len() as u32
    }

    pub fn has_passive(&self) -> bool {
        self.segments.iter().any(DataSegment::is_passive)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSegment> {
        self.segments.iter()
    }
}

impl Section for DataSection {
    fn id(&self) -> SectionId {
        SectionId::Data
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.segments.encode(w);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataCountSection(pub u32);

impl Section for DataCountSection {
    fn id(&self) -> SectionId {
        SectionId::DataCount
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.0.encode(w);
    }
}
