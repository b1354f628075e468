use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ImportDesc {
    Func(TypeIdx),
    Table(TableType),
    Memory(MemoryType),
    Global(GlobalType),
    Tag(TypeIdx),
}

impl ImportDesc {
    pub fn kind(&self) -> ExternalKind {
        match self {
            ImportDesc::Func(..) => ExternalKind::Func,
            ImportDesc::Table(..) => ExternalKind::Table,
            ImportDesc::Memory(..) => ExternalKind::Memory,
            ImportDesc::Global(..) => ExternalKind::Global,
            ImportDesc::Tag(..) => ExternalKind::Tag,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub module: String,
    pub field: String,
    pub desc: ImportDesc,
}

impl Encode for Import {
    fn encode(&self, w: &mut Sink) {
        self.module.encode(w);
        self.field.encode(w);
        self.desc.kind().encode(w);
        match &self.desc {
            ImportDesc::Func(type_idx) => type_idx.encode(w),
            ImportDesc::Table(table_type) => table_type.encode(w),
            ImportDesc::Memory(mem_type) => mem_type.encode(w),
            ImportDesc::Global(global_type) => global_type.encode(w),
            ImportDesc::Tag(type_idx) => {
                w.write_u8(0x00);
                type_idx.encode(w);
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ImportSection {
    imports: Vec<Import>,
}

impl ImportSection {
    /// Adds an import and returns its index within the index space of its
    /// kind.
    pub fn push(&mut self, import: Import) -> u32 {
        let kind = import.desc.kind();
        let idx = self.count(kind);
        debug!("importing {}.{} as {:?} {}", import.module, import.field, kind, idx);
        self.imports.push(import);
        idx
    }

    pub fn count(&self, kind: ExternalKind) -> u32 {
        self.imports.iter().filter(|import| import.desc.kind() == kind).count() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }
}

impl Section for ImportSection {
    fn id(&self) -> SectionId {
        SectionId::Import
    }

    fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.imports.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn indices_are_per_kind() {
        let mut section = ImportSection::default();
        let func = section.push(Import {
            module: "m".to_owned(),
            field: "f".to_owned(),
            desc: ImportDesc::Func(TypeIdx(0)),
        });
        let global = section.push(Import {
            module: "m".to_owned(),
            field: "g".to_owned(),
            desc: ImportDesc::Global(GlobalType { val_type: ValType::I32, mutable: false }),
        });
        let func2 = section.push(Import {
            module: "m".to_owned(),
            field: "h".to_owned(),
            desc: ImportDesc::Func(TypeIdx(0)),
        });
        assert_eq!((func, global, func2), (0, 0, 1));
        assert_eq!(section.count(ExternalKind::Func), 2);
    }

    #[test]
    fn tag_import_encoding() {
        let mut section = ImportSection::default();
        section.push(Import {
            module: "m".to_owned(),
            field: "e".to_owned(),
            desc: ImportDesc::Tag(TypeIdx(3)),
        });
        let mut sink = Sink::new();
        section.encode_payload(&mut sink);
        assert_eq!(sink.into_bytes(), vec![0x01, 0x01, b'm', 0x01, b'e', 0x04, 0x00, 0x03]);
    }
}
