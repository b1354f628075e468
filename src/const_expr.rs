use super::*;

/// An initializer expression, written followed by `end`.
///
/// `Raw` holds hand-assembled bytes (for extended constant expressions or
/// deliberately broken ones) and is written out unchanged, so any indices in
/// it are not checked.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstExpr {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    V128([u8; 16]),
    GlobalGet(GlobalIdx),
    RefNull(HeapType),
    RefFunc(FuncIdx),
    Raw(Vec<u8>),
}

impl ConstExpr {
    /// The zero value of `ty`, or `None` for non-nullable references.
    pub fn default_for(ty: ValType) -> Option<ConstExpr> {
        let expr = match ty {
            ValType::I32 => ConstExpr::I32(0),
            ValType::I64 => ConstExpr::I64(0),
            ValType::F32 => ConstExpr::F32(0.0),
            ValType::F64 => ConstExpr::F64(0.0),
            ValType::V128 => ConstExpr::V128([0; 16]),
            ValType::Ref(RefType { nullable: true, heap_type }) => ConstExpr::RefNull(heap_type),
            ValType::Ref(RefType { nullable: false, .. }) => return None,
        };
        Some(expr)
    }

    /// Writes the instruction without the trailing `end`.
    pub fn encode_instr(&self, w: &mut Sink) {
        match self {
            ConstExpr::I32(x) => {
                w.write_u8(opcodes::I32_CONST);
                w.write_sleb(i64::from(*x));
            },
            ConstExpr::I64(x) => {
                w.write_u8(opcodes::I64_CONST);
                w.write_sleb(*x);
            },
            ConstExpr::F32(x) => {
                w.write_u8(opcodes::F32_CONST);
                w.write_f32(*x);
            },
            ConstExpr::F64(x) => {
                w.write_u8(opcodes::F64_CONST);
                w.write_f64(*x);
            },
            ConstExpr::V128(bytes) => {
                w.write_u8(opcodes::simd::PREFIX);
                w.write_uleb(u64::from(opcodes::simd::V128_CONST));
                w.write_bytes(&bytes[..]);
            },
            ConstExpr::GlobalGet(global_idx) => {
                w.write_u8(opcodes::GLOBAL_GET);
                global_idx.encode(w);
            },
            ConstExpr::RefNull(heap_type) => {
                w.write_u8(opcodes::REF_NULL);
                heap_type.encode(w);
            },
            ConstExpr::RefFunc(func_idx) => {
                w.write_u8(opcodes::REF_FUNC);
                func_idx.encode(w);
            },
            ConstExpr::Raw(bytes) => w.write_bytes(bytes),
        }
    }
}

/// Where an active segment starts. `I32` is the usual constant offset, `Global`
/// reads it from an (imported) global.
#[derive(Clone, Debug, PartialEq)]
pub enum Offset {
    I32(i32),
    Global(GlobalIdx),
    Expr(ConstExpr),
}

impl Offset {
    pub fn to_const_expr(&self) -> ConstExpr {
        match self {
            Offset::I32(x) => ConstExpr::I32(*x),
            Offset::Global(global_idx) => ConstExpr::GlobalGet(*global_idx),
            Offset::Expr(expr) => expr.clone(),
        }
    }
}

impl From<i32> for Offset {
    fn from(offset: i32) -> Offset {
        Offset::I32(offset)
    }
}

impl From<GlobalIdx> for Offset {
    fn from(global_idx: GlobalIdx) -> Offset {
        Offset::Global(global_idx)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn encoded(expr: &ConstExpr) -> Vec<u8> {
        let mut sink = Sink::new();
        expr.encode(&mut sink);
        sink.into_bytes()
    }

    #[test]
    fn defaults() {
        assert_eq!(encoded(&unwrap!(ConstExpr::default_for(ValType::I32))), vec![0x41, 0x00, 0x0b]);
        assert_eq!(
            encoded(&unwrap!(ConstExpr::default_for(ValType::F64))),
            vec![0x44, 0, 0, 0, 0, 0, 0, 0, 0, 0x0b],
        );
        assert_eq!(
            encoded(&unwrap!(ConstExpr::default_for(ValType::EXTERNREF))),
            vec![0xd0, 0x6f, 0x0b],
        );
        assert_eq!(
            encoded(&unwrap!(ConstExpr::default_for(ValType::ref_null(HeapType::Concrete(TypeIdx(2)))))),
            vec![0xd0, 0x02, 0x0b],
        );
        assert_eq!(ConstExpr::default_for(ValType::ref_(HeapType::Func)), None);
    }

    #[test]
    fn v128_zero() {
        let mut expected = vec![0xfd, 0x0c];
        expected.extend_from_slice(&[0; 16]);
        expected.push(0x0b);
        assert_eq!(encoded(&ConstExpr::V128([0; 16])), expected);
    }

    #[test]
    fn negative_offsets_are_signed() {
        assert_eq!(encoded(&Offset::I32(-1).to_const_expr()), vec![0x41, 0x7f, 0x0b]);
        assert_eq!(encoded(&Offset::from(GlobalIdx(1)).to_const_expr()), vec![0x23, 0x01, 0x0b]);
    }
}
