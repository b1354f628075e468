use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuncIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElemIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalIdx(pub u32);

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
    V128,
    Ref(RefType),
}

impl ValType {
    pub const FUNCREF: ValType = ValType::Ref(RefType::FUNCREF);
    pub const EXTERNREF: ValType = ValType::Ref(RefType::EXTERNREF);
    pub const ANYREF: ValType = ValType::Ref(RefType::ANYREF);
    pub const EQREF: ValType = ValType::Ref(RefType::EQREF);
    pub const I31REF: ValType = ValType::Ref(RefType::I31REF);
    pub const STRUCTREF: ValType = ValType::Ref(RefType::STRUCTREF);
    pub const ARRAYREF: ValType = ValType::Ref(RefType::ARRAYREF);
    pub const NULLREF: ValType = ValType::Ref(RefType::NULLREF);
    pub const NULLFUNCREF: ValType = ValType::Ref(RefType::NULLFUNCREF);
    pub const NULLEXTERNREF: ValType = ValType::Ref(RefType::NULLEXTERNREF);
    pub const EXNREF: ValType = ValType::Ref(RefType::EXNREF);
    pub const NULLEXNREF: ValType = ValType::Ref(RefType::NULLEXNREF);

    /// `(ref null ht)`
    pub fn ref_null(heap_type: HeapType) -> ValType {
        ValType::Ref(RefType::nullable(heap_type))
    }

    /// `(ref ht)`
    pub fn ref_(heap_type: HeapType) -> ValType {
        ValType::Ref(RefType::non_null(heap_type))
    }

    pub fn is_defaultable(&self) -> bool {
        match self {
            ValType::Ref(ref_type) => ref_type.nullable,
            _ => true,
        }
    }
}

/// A reference type. Nullable references to abstract heap types have a one
/// byte shorthand encoding, everything else is written out in full.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RefType {
    pub nullable: bool,
    pub heap_type: HeapType,
}

impl RefType {
    pub const FUNCREF: RefType = RefType::nullable(HeapType::Func);
    pub const EXTERNREF: RefType = RefType::nullable(HeapType::Extern);
    pub const ANYREF: RefType = RefType::nullable(HeapType::Any);
    pub const EQREF: RefType = RefType::nullable(HeapType::Eq);
    pub const I31REF: RefType = RefType::nullable(HeapType::I31);
    pub const STRUCTREF: RefType = RefType::nullable(HeapType::Struct);
    pub const ARRAYREF: RefType = RefType::nullable(HeapType::Array);
    pub const NULLREF: RefType = RefType::nullable(HeapType::None);
    pub const NULLFUNCREF: RefType = RefType::nullable(HeapType::NoFunc);
    pub const NULLEXTERNREF: RefType = RefType::nullable(HeapType::NoExtern);
    pub const EXNREF: RefType = RefType::nullable(HeapType::Exn);
    pub const NULLEXNREF: RefType = RefType::nullable(HeapType::NoExn);

    pub const fn nullable(heap_type: HeapType) -> RefType {
        RefType {
            nullable: true,
            heap_type,
        }
    }

    pub const fn non_null(heap_type: HeapType) -> RefType {
        RefType {
            nullable: false,
            heap_type,
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum HeapType {
    Func,
    Extern,
    Any,
    Eq,
    I31,
    Struct,
    Array,
    None,
    NoFunc,
    NoExtern,
    Exn,
    NoExn,
    Concrete(TypeIdx),
}

impl HeapType {
    /// The single byte code of an abstract heap type. This is also its
    /// encoding as a negative s33.
    pub fn abstract_code(&self) -> Option<u8> {
        let code = match self {
            HeapType::NoExn => 0x74,
            HeapType::NoFunc => 0x73,
            HeapType::NoExtern => 0x72,
            HeapType::None => 0x71,
            HeapType::Func => 0x70,
            HeapType::Extern => 0x6f,
            HeapType::Any => 0x6e,
            HeapType::Eq => 0x6d,
            HeapType::I31 => 0x6c,
            HeapType::Struct => 0x6b,
            HeapType::Array => 0x6a,
            HeapType::Exn => 0x69,
            HeapType::Concrete(..) => return Option::None,
        };
        Some(code)
    }
}

/// The type of a struct field or array element.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum StorageType {
    Val(ValType),
    I8,
    I16,
}

impl From<ValType> for StorageType {
    fn from(val_type: ValType) -> StorageType {
        StorageType::Val(val_type)
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct FieldType {
    pub storage: StorageType,
    pub mutable: bool,
}

impl FieldType {
    pub fn new<T: Into<StorageType>>(storage: T, mutable: bool) -> FieldType {
        FieldType {
            storage: storage.into(),
            mutable,
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct FuncType {
    pub params: Vec<ValType>,
    pub results: Vec<ValType>,
}

impl FuncType {
    pub fn new(params: &[ValType], results: &[ValType]) -> FuncType {
        FuncType {
            params: params.to_vec(),
            results: results.to_vec(),
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct StructType {
    pub fields: Vec<FieldType>,
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ArrayType {
    pub element: FieldType,
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum CompositeType {
    Func(FuncType),
    Struct(StructType),
    Array(ArrayType),
}

/// An entry of the type section. Function signatures added through
/// `add_type` are final and have no supertype, which gives them the plain
/// MVP encoding.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct SubType {
    pub composite: CompositeType,
    pub supertype: Option<TypeIdx>,
    pub is_final: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableType {
    pub element_type: RefType,
    pub limits: Limits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MemoryType {
    pub limits: Limits,
    pub shared: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalType {
    pub val_type: ValType,
    pub mutable: bool,
}

/// The kind byte used by imports and exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalKind {
    Func = 0,
    Table = 1,
    Memory = 2,
    Global = 3,
    Tag = 4,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference_shorthands() {
        assert_eq!(ValType::FUNCREF, ValType::ref_null(HeapType::Func));
        assert!(ValType::EXTERNREF.is_defaultable());
        assert!(!ValType::ref_(HeapType::Any).is_defaultable());
        assert!(ValType::I64.is_defaultable());
    }

    #[test]
    fn abstract_heap_type_codes() {
        assert_eq!(HeapType::Func.abstract_code(), Some(0x70));
        assert_eq!(HeapType::Extern.abstract_code(), Some(0x6f));
        assert_eq!(HeapType::NoFunc.abstract_code(), Some(0x73));
        assert_eq!(HeapType::Exn.abstract_code(), Some(0x69));
        assert_eq!(HeapType::NoExn.abstract_code(), Some(0x74));
        assert_eq!(HeapType::Concrete(TypeIdx(3)).abstract_code(), Option::None);
    }
}
