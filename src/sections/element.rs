use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ElementMode {
    Active {
        table: TableIdx,
        offset: Offset,
    },
    Passive,
    Declarative,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElementItems {
    Functions(Vec<FuncIdx>),
    Expressions {
        ty: RefType,
        exprs: Vec<ConstExpr>,
    },
}

impl ElementItems {
    pub fn len(&self) -> usize {
        match self {
            ElementItems::Functions(funcs) => funcs.len(),
            ElementItems::Expressions { exprs, .. } => exprs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_funcref(&self) -> bool {
        match self {
            ElementItems::Functions(..) => true,
            ElementItems::Expressions { ty, .. } => *ty == RefType::FUNCREF,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementSegment {
    pub mode: ElementMode,
    pub items: ElementItems,
}

impl ElementSegment {
    /// The segment flags. Bit 0 is set for passive and declarative segments,
    /// bit 1 for an explicit table index (active) or declarative, bit 2 when
    /// the items are expressions.
    pub fn flags(&self) -> u8 {
        let exprs = match self.items {
            ElementItems::Functions(..) => 0x00,
            ElementItems::Expressions { .. } => 0x04,
        };
        let mode = match &self.mode {
            ElementMode::Active { table: TableIdx(0), .. } if self.items.is_funcref() => 0x00,
            ElementMode::Active { .. } => 0x02,
            ElementMode::Passive => 0x01,
            ElementMode::Declarative => 0x03,
        };
        exprs | mode
    }
}

impl Encode for ElementSegment {
    fn encode(&self, w: &mut Sink) {
        let flags = self.flags();
        w.write_u8(flags);

        if let ElementMode::Active { table, offset } = &self.mode {
            if flags & 0x02 != 0 {
                table.encode(w);
            }
            offset.to_const_expr().encode(w);
        }

        let has_kind = flags & 0x03 != 0;
        match &self.items {
            ElementItems::Functions(funcs) => {
                if has_kind {
                    // elemkind funcref
                    w.write_u8(0x00);
                }
                funcs.encode(w);
            },
            ElementItems::Expressions { ty, exprs } => {
                if has_kind {
                    ty.encode(w);
                }
                exprs.encode(w);
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ElementSection {
    segments: Vec<ElementSegment>,
}

impl ElementSection {
    pub fn push(&mut self, segment: ElementSegment) -> u32 {
        self.segments.push(segment);
        self.segments.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.segments.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementSegment> {
        self.segments.iter()
    }
}

impl Section for ElementSection {
    fn id(&self) -> SectionId {
        SectionId::Element
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.segments.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn encoded(segment: &ElementSegment) -> Vec<u8> {
        let mut sink = Sink::new();
        segment.encode(&mut sink);
        sink.into_bytes()
    }

    #[test]
    fn active_table_zero_short_form() {
        let segment = ElementSegment {
            mode: ElementMode::Active { table: TableIdx(0), offset: Offset::I32(1) },
            items: ElementItems::Functions(vec![FuncIdx(0), FuncIdx(2)]),
        };
        assert_eq!(encoded(&segment), vec![0x00, 0x41, 0x01, 0x0b, 0x02, 0x00, 0x02]);
    }

    #[test]
    fn active_explicit_table() {
        let segment = ElementSegment {
            mode: ElementMode::Active { table: TableIdx(1), offset: Offset::Global(GlobalIdx(0)) },
            items: ElementItems::Functions(vec![FuncIdx(3)]),
        };
        assert_eq!(encoded(&segment), vec![0x02, 0x01, 0x23, 0x00, 0x0b, 0x00, 0x01, 0x03]);
    }

    #[test]
    fn expression_segments() {
        let passive = ElementSegment {
            mode: ElementMode::Passive,
            items: ElementItems::Expressions {
                ty: RefType::FUNCREF,
                exprs: vec![ConstExpr::RefFunc(FuncIdx(1)), ConstExpr::RefNull(HeapType::Func)],
            },
        };
        assert_eq!(
            encoded(&passive),
            vec![0x05, 0x70, 0x02, 0xd2, 0x01, 0x0b, 0xd0, 0x70, 0x0b],
        );

        let externs = ElementSegment {
            mode: ElementMode::Active { table: TableIdx(0), offset: Offset::I32(0) },
            items: ElementItems::Expressions {
                ty: RefType::EXTERNREF,
                exprs: vec![ConstExpr::RefNull(HeapType::Extern)],
            },
        };
        assert_eq!(externs.flags(), 0x06);
        assert_eq!(
            encoded(&externs),
            vec![0x06, 0x00, 0x41, 0x00, 0x0b, 0x6f, 0x01, 0xd0, 0x6f, 0x0b],
        );
    }

    #[test]
    fn declarative_functions() {
        let segment = ElementSegment {
            mode: ElementMode::Declarative,
            items: ElementItems::Functions(vec![FuncIdx(0)]),
        };
        assert_eq!(encoded(&segment), vec![0x03, 0x00, 0x01, 0x00]);
    }
}
