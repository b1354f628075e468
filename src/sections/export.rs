use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportDesc {
    Func(FuncIdx),
    Table(TableIdx),
    Memory(MemIdx),
    Global(GlobalIdx),
    Tag(TagIdx),
}

impl ExportDesc {
    pub fn new(kind: ExternalKind, index: u32) -> ExportDesc {
        match kind {
            ExternalKind::Func => ExportDesc::Func(FuncIdx(index)),
            ExternalKind::Table => ExportDesc::Table(TableIdx(index)),
            ExternalKind::Memory => ExportDesc::Memory(MemIdx(index)),
            ExternalKind::Global => ExportDesc::Global(GlobalIdx(index)),
            ExternalKind::Tag => ExportDesc::Tag(TagIdx(index)),
        }
    }

    pub fn kind(&self) -> ExternalKind {
        match self {
            ExportDesc::Func(..) => ExternalKind::Func,
            ExportDesc::Table(..) => ExternalKind::Table,
            ExportDesc::Memory(..) => ExternalKind::Memory,
            ExportDesc::Global(..) => ExternalKind::Global,
            ExportDesc::Tag(..) => ExternalKind::Tag,
        }
    }

    pub fn index(&self) -> u32 {
        match *self {
            ExportDesc::Func(FuncIdx(x)) => x,
            ExportDesc::Table(TableIdx(x)) => x,
            ExportDesc::Memory(MemIdx(x)) => x,
            ExportDesc::Global(GlobalIdx(x)) => x,
            ExportDesc::Tag(TagIdx(x)) => x,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub name: String,
    pub desc: ExportDesc,
}

impl Encode for Export {
    fn encode(&self, w: &mut Sink) {
        self.name.encode(w);
        self.desc.kind().encode(w);
        self.desc.index().encode(w);
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExportSection {
    exports: Vec<Export>,
}

impl ExportSection {
    pub fn push(&mut self, export: Export) {
        debug!("exporting {:?} as {:?}", export.desc, export.name);
        self.exports.push(export);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Export> {
        self.exports.iter()
    }
}

impl Section for ExportSection {
    fn id(&self) -> SectionId {
        SectionId::Export
    }

    fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.exports.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn export_of_kind() {
        let desc = ExportDesc::new(ExternalKind::Memory, 1);
        assert_eq!(desc, ExportDesc::Memory(MemIdx(1)));
        let mut sink = Sink::new();
        Export { name: "mem".to_owned(), desc }.encode(&mut sink);
        assert_eq!(sink.into_bytes(), vec![0x03, b'm', b'e', b'm', 0x02, 0x01]);
    }
}
