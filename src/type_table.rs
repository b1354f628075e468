use super::*;

/// A closed recursion group, `len` types starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RecGroup {
    start: u32,
    len: u32,
}

/// The type section. Types are appended and never renumbered, so an index
/// handed out stays valid for the lifetime of the table.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: Vec<SubType>,
    rec_groups: Vec<RecGroup>,
    open_group: Option<u32>,
}

enum Entry {
    Single(u32),
    Group(RecGroup),
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable::default()
    }

    /// Adds a final function type with no supertype.
    pub fn add_type(&mut self, func_type: FuncType) -> TypeIdx {
        self.add_type_with(func_type, None, true)
    }

    pub fn add_type_with(&mut self, func_type: FuncType, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.push(SubType {
            composite: CompositeType::Func(func_type),
            supertype,
            is_final,
        })
    }

    pub fn add_struct(&mut self, fields: Vec<FieldType>, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.push(SubType {
            composite: CompositeType::Struct(StructType { fields }),
            supertype,
            is_final,
        })
    }

    pub fn add_array(&mut self, element: FieldType, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.push(SubType {
            composite: CompositeType::Array(ArrayType { element }),
            supertype,
            is_final,
        })
    }

    pub fn push(&mut self, sub_type: SubType) -> TypeIdx {
        let idx = TypeIdx(self.types.len() as u32);
        trace!("adding type {}: {:?}", idx.0, sub_type);
        self.types.push(sub_type);
        idx
    }

    /// Types added until the matching `end_rec_group` form one recursion
    /// group.
    pub fn start_rec_group(&mut self) -> Result<(), StructuralError> {
        if self.open_group.is_some() {
            return Err(StructuralError::NestedRecGroup);
        }
        self.open_group = Some(self.types.len() as u32);
        Ok(())
    }

    pub fn end_rec_group(&mut self) -> Result<(), StructuralError> {
        let start = match self.open_group.take() {
            Some(start) => start,
            None => return Err(StructuralError::NoOpenRecGroup),
        };
        let len = self.types.len() as u32 - start;
        self.rec_groups.push(RecGroup { start, len });
        Ok(())
    }

    pub fn len(&self) -> u32 {
        self.types.len() as u32
    }

    pub fn get(&self, idx: TypeIdx) -> Option<&SubType> {
        self.types.get(idx.0 as usize)
    }

    /// The function type at `idx`, if there is one.
    pub fn func_type(&self, idx: TypeIdx) -> Option<&FuncType> {
        match self.get(idx) {
            Some(SubType { composite: CompositeType::Func(func_type), .. }) => Some(func_type),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeIdx, &SubType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, sub_type)| (TypeIdx(i as u32), sub_type))
    }

    /// One past the last type that `idx` may refer to, ie. the end of the
    /// recursion group containing it.
    pub fn visible_from(&self, idx: TypeIdx) -> u32 {
        for group in &self.rec_groups {
            if group.start <= idx.0 && idx.0 < group.start + group.len {
                return group.start + group.len;
            }
        }
        if let Some(start) = self.open_group {
            if start <= idx.0 {
                return self.len();
            }
        }
        idx.0 + 1
    }

    pub fn check_closed(&self) -> Result<(), StructuralError> {
        match self.open_group {
            Some(start) => Err(StructuralError::UnclosedRecGroup { start }),
            None => Ok(()),
        }
    }

    fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::with_capacity(self.types.len());
        let mut next = 0;
        for group in &self.rec_groups {
            while next < group.start {
                entries.push(Entry::Single(next));
                next += 1;
            }
            entries.push(Entry::Group(*group));
            next = group.start + group.len;
        }
        while next < self.len() {
            entries.push(Entry::Single(next));
            next += 1;
        }
        entries
    }
}

impl Section for TypeTable {
    fn id(&self) -> SectionId {
        SectionId::Type
    }

    fn is_empty(&self) -> bool {
        self.types.is_empty() && self.rec_groups.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        let entries = self.entries();
        w.write_len(entries.len());
        for entry in entries {
            match entry {
                Entry::Single(i) => self.types[i as usize].encode(w),
                Entry::Group(RecGroup { start, len }) => {
                    w.write_u8(0x4e);
                    len.encode(w);
                    for sub_type in &self.types[start as usize..(start + len) as usize] {
                        sub_type.encode(w);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn payload(table: &TypeTable) -> Vec<u8> {
        let mut sink = Sink::new();
        table.encode_payload(&mut sink);
        sink.into_bytes()
    }

    #[test]
    fn identical_signatures_get_fresh_indices() {
        let mut table = TypeTable::new();
        assert_eq!(table.add_type(sigs::i_ii()), TypeIdx(0));
        assert_eq!(table.add_type(sigs::i_ii()), TypeIdx(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rec_group_counts_once() {
        let mut table = TypeTable::new();
        table.add_type(sigs::v_v());
        unwrap!(table.start_rec_group());
        let list = table.add_struct(
            vec![FieldType::new(ValType::ref_null(HeapType::Concrete(TypeIdx(2))), true)],
            None,
            true,
        );
        table.add_array(FieldType::new(ValType::ref_null(HeapType::Concrete(list)), false), None, true);
        unwrap!(table.end_rec_group());

        assert_eq!(table.visible_from(TypeIdx(0)), 1);
        assert_eq!(table.visible_from(list), 3);

        assert_eq!(
            payload(&table),
            vec![
                0x02,
                0x60, 0x00, 0x00,
                0x4e, 0x02,
                0x5f, 0x01, 0x63, 0x02, 0x01,
                0x5e, 0x63, 0x01, 0x00,
            ],
        );
    }

    #[test]
    fn empty_rec_group() {
        let mut table = TypeTable::new();
        unwrap!(table.start_rec_group());
        unwrap!(table.end_rec_group());
        assert!(!table.is_empty());
        assert_eq!(payload(&table), vec![0x01, 0x4e, 0x00]);
    }

    #[test]
    fn rec_group_misuse() {
        let mut table = TypeTable::new();
        assert_eq!(table.end_rec_group(), Err(StructuralError::NoOpenRecGroup));
        unwrap!(table.start_rec_group());
        assert_eq!(table.start_rec_group(), Err(StructuralError::NestedRecGroup));
        table.add_type(sigs::v_v());
        assert_eq!(table.check_closed(), Err(StructuralError::UnclosedRecGroup { start: 0 }));
    }

    #[test]
    fn subtypes_use_sub_prefix() {
        let mut table = TypeTable::new();
        let base = table.add_struct(vec![], None, false);
        table.add_struct(vec![FieldType::new(ValType::I32, false)], Some(base), true);
        assert_eq!(
            payload(&table),
            vec![
                0x02,
                0x50, 0x00, 0x5f, 0x00,
                0x4f, 0x01, 0x00, 0x5f, 0x01, 0x7f, 0x00,
            ],
        );
    }
}
