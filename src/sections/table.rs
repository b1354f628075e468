use super::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub ty: TableType,
    /// Explicit initializer for every slot. Without one the slots start out
    /// null.
    pub init: Option<ConstExpr>,
}

impl Encode for Table {
    fn encode(&self, w: &mut Sink) {
        match &self.init {
            None => self.ty.encode(w),
            Some(init) => {
                w.write_u8(0x40);
                w.write_u8(0x00);
                self.ty.encode(w);
                init.encode(w);
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableSection {
    tables: Vec<Table>,
}

impl TableSection {
    pub fn push(&mut self, table: Table) -> u32 {
        self.tables.push(table);
        self.tables.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.tables.len() as u32
    }

    pub fn first_mut(&mut self) -> Option<&mut Table> {
        self.tables.first_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

impl Section for TableSection {
    fn id(&self) -> SectionId {
        SectionId::Table
    }

    fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.tables.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn table_with_initializer() {
        let table = Table {
            ty: TableType {
                element_type: RefType::non_null(HeapType::Func),
                limits: Limits { min: 1, max: Some(1) },
            },
            init: Some(ConstExpr::RefFunc(FuncIdx(0))),
        };
        let mut sink = Sink::new();
        table.encode(&mut sink);
        assert_eq!(
            sink.into_bytes(),
            vec![0x40, 0x00, 0x64, 0x70, 0x01, 0x01, 0x01, 0xd2, 0x00, 0x0b],
        );
    }

    #[test]
    fn plain_table() {
        let mut section = TableSection::default();
        section.push(Table {
            ty: TableType { element_type: RefType::FUNCREF, limits: Limits { min: 2, max: None } },
            init: None,
        });
        let mut sink = Sink::new();
        section.encode_payload(&mut sink);
        assert_eq!(sink.into_bytes(), vec![0x01, 0x70, 0x00, 0x02]);
    }
}
