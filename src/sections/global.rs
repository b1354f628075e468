use super::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Global {
    pub ty: GlobalType,
    pub init: ConstExpr,
}

impl Encode for Global {
    fn encode(&self, w: &mut Sink) {
        self.ty.encode(w);
        self.init.encode(w);
    }
}

#[derive(Clone, Debug, Default)]
pub struct GlobalSection {
    globals: Vec<Global>,
}

impl GlobalSection {
    pub fn push(&mut self, global: Global) -> u32 {
        self.globals.push(global);
        self.globals.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.globals.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Global> {
        self.globals.iter()
    }
}

impl Section for GlobalSection {
    fn id(&self) -> SectionId {
        SectionId::Global
    }

    fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.globals.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn mutable_global() {
        let global = Global {
            ty: GlobalType { val_type: ValType::I64, mutable: true },
            init: ConstExpr::I64(-2),
        };
        let mut sink = Sink::new();
        global.encode(&mut sink);
        assert_eq!(sink.into_bytes(), vec![0x7e, 0x01, 0x42, 0x7e, 0x0b]);
    }
}
