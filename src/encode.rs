use super::*;

pub trait Encode {
    fn encode(&self, w: &mut Sink);
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, w: &mut Sink) {
        w.write_len(self.len());
        for val in self {
            val.encode(w);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, w: &mut Sink) {
        self[..].encode(w);
    }
}

impl Encode for str {
    fn encode(&self, w: &mut Sink) {
        w.write_name(self);
    }
}

impl Encode for String {
    fn encode(&self, w: &mut Sink) {
        w.write_name(self);
    }
}

impl Encode for u32 {
    fn encode(&self, w: &mut Sink) {
        w.write_uleb(u64::from(*self));
    }
}

impl Encode for u64 {
    fn encode(&self, w: &mut Sink) {
        w.write_uleb(*self);
    }
}

impl Encode for i32 {
    fn encode(&self, w: &mut Sink) {
        w.write_sleb(i64::from(*self));
    }
}

impl Encode for i64 {
    fn encode(&self, w: &mut Sink) {
        w.write_sleb(*self);
    }
}

impl Encode for f32 {
    fn encode(&self, w: &mut Sink) {
        w.write_f32(*self);
    }
}

impl Encode for f64 {
    fn encode(&self, w: &mut Sink) {
        w.write_f64(*self);
    }
}

impl Encode for ValType {
    fn encode(&self, w: &mut Sink) {
        let b = match *self {
            ValType::I32 => 0x7f,
            ValType::I64 => 0x7e,
            ValType::F32 => 0x7d,
            ValType::F64 => 0x7c,
            ValType::V128 => 0x7b,
            ValType::Ref(ref_type) => return ref_type.encode(w),
        };
        w.write_u8(b);
    }
}

impl Encode for RefType {
    fn encode(&self, w: &mut Sink) {
        match (self.nullable, self.heap_type.abstract_code()) {
            (true, Some(code)) => w.write_u8(code),
            (true, None) => {
                w.write_u8(0x63);
                self.heap_type.encode(w);
            },
            (false, _) => {
                w.write_u8(0x64);
                self.heap_type.encode(w);
            },
        }
    }
}

impl Encode for HeapType {
    fn encode(&self, w: &mut Sink) {
        match self.abstract_code() {
            Some(code) => w.write_u8(code),
            None => {
                // s33, so concrete indices are always non-negative
                if let HeapType::Concrete(TypeIdx(x)) = self {
                    w.write_sleb(i64::from(*x));
                }
            },
        }
    }
}

impl Encode for StorageType {
    fn encode(&self, w: &mut Sink) {
        match self {
            StorageType::Val(val_type) => val_type.encode(w),
            StorageType::I8 => w.write_u8(0x78),
            StorageType::I16 => w.write_u8(0x77),
        }
    }
}

impl Encode for FieldType {
    fn encode(&self, w: &mut Sink) {
        self.storage.encode(w);
        match self.mutable {
            false => w.write_u8(0x00),
            true => w.write_u8(0x01),
        }
    }
}

impl Encode for FuncType {
    fn encode(&self, w: &mut Sink) {
        w.write_u8(0x60);
        self.params.encode(w);
        self.results.encode(w);
    }
}

impl Encode for StructType {
    fn encode(&self, w: &mut Sink) {
        w.write_u8(0x5f);
        self.fields.encode(w);
    }
}

impl Encode for ArrayType {
    fn encode(&self, w: &mut Sink) {
        w.write_u8(0x5e);
        self.element.encode(w);
    }
}

impl Encode for CompositeType {
    fn encode(&self, w: &mut Sink) {
        match self {
            CompositeType::Func(func_type) => func_type.encode(w),
            CompositeType::Struct(struct_type) => struct_type.encode(w),
            CompositeType::Array(array_type) => array_type.encode(w),
        }
    }
}

impl Encode for SubType {
    fn encode(&self, w: &mut Sink) {
        match self.supertype {
            Some(supertype) => {
                w.write_u8(if self.is_final { 0x4f } else { 0x50 });
                [supertype][..].encode(w);
            },
            None if !self.is_final => {
                w.write_u8(0x50);
                w.write_len(0);
            },
            None => (),
        }
        self.composite.encode(w);
    }
}

impl Encode for Limits {
    fn encode(&self, w: &mut Sink) {
        match self.max {
            None => {
                w.write_u8(0x00);
                self.min.encode(w);
            },
            Some(max) => {
                w.write_u8(0x01);
                self.min.encode(w);
                max.encode(w);
            },
        }
    }
}

impl Encode for MemoryType {
    fn encode(&self, w: &mut Sink) {
        let mut flags = 0x00;
        if self.limits.max.is_some() {
            flags |= 0x01;
        }
        if self.shared {
            flags |= 0x02;
        }
        w.write_u8(flags);
        self.limits.min.encode(w);
        if let Some(max) = self.limits.max {
            max.encode(w);
        }
    }
}

impl Encode for TableType {
    fn encode(&self, w: &mut Sink) {
        self.element_type.encode(w);
        self.limits.encode(w);
    }
}

impl Encode for GlobalType {
    fn encode(&self, w: &mut Sink) {
        self.val_type.encode(w);
        match self.mutable {
            false => w.write_u8(0x00),
            true => w.write_u8(0x01),
        }
    }
}

impl Encode for ConstExpr {
    fn encode(&self, w: &mut Sink) {
        self.encode_instr(w);
        w.write_u8(opcodes::END);
    }
}

impl Encode for ExternalKind {
    fn encode(&self, w: &mut Sink) {
        w.write_u8(*self as u8);
    }
}

macro_rules! encode_index {
    ($($idx:ident),*) => {
        $(
            impl Encode for $idx {
                fn encode(&self, w: &mut Sink) {
                    let $idx(x) = self;
                    x.encode(w);
                }
            }
        )*
    };
}

encode_index!(TypeIdx, FuncIdx, TableIdx, MemIdx, GlobalIdx, TagIdx, ElemIdx, DataIdx, LocalIdx);
