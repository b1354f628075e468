use super::*;

/// A locally defined function.
///
/// Locals are kept in declaration order as `(count, type)` runs. Adjacent runs
/// of the same type are merged when the code section is written.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: Option<String>,
    pub type_idx: TypeIdx,
    locals: Vec<(u32, ValType)>,
    local_names: Vec<(u64, String)>,
    body: Vec<u8>,
}

impl Function {
    pub fn new(name: Option<String>, type_idx: TypeIdx) -> Function {
        Function {
            name,
            type_idx,
            locals: Vec::new(),
            local_names: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn add_locals(&mut self, val_type: ValType, count: u32) {
        if count == 0 {
            return;
        }
        self.locals.push((count, val_type));
    }

    /// Declares one local of `val_type` per name.
    pub fn add_named_locals(&mut self, val_type: ValType, names: &[&str]) {
        let mut position = self.local_count();
        for name in names {
            self.local_names.push((position, (*name).to_owned()));
            position += 1;
        }
        for chunk in names.chunks(u32::MAX as usize) {
            self.add_locals(val_type, chunk.len() as u32);
        }
    }

    // not counting parameters
    pub fn local_count(&self) -> u64 {
        self.locals.iter().map(|&(count, _)| u64::from(count)).sum()
    }

    pub fn locals(&self) -> &[(u32, ValType)] {
        &self.locals
    }

    /// Names of declared locals, keyed by their position among the declared
    /// locals.
    pub fn local_names(&self) -> &[(u64, String)] {
        &self.local_names
    }

    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    fn local_decls(&self) -> Vec<(u32, ValType)> {
        let mut local_decls: Vec<(u32, ValType)> = Vec::with_capacity(self.locals.len());
        for &(count, val_type) in &self.locals {
            if let Some(last) = local_decls.last_mut() {
                if last.1 == val_type {
                    if let Some(merged) = last.0.checked_add(count) {
                        last.0 = merged;
                        continue;
                    }
                }
            }
            local_decls.push((count, val_type));
        }
        local_decls
    }
}

impl Encode for Function {
    fn encode(&self, w: &mut Sink) {
        w.write_length_prefixed(|function_code| {
            let local_decls = self.local_decls();
            function_code.write_len(local_decls.len());
            for (count, val_type) in local_decls {
                count.encode(function_code);
                val_type.encode(function_code);
            }
            function_code.write_bytes(&self.body);
        });
    }
}

pub struct FunctionSection<'a>(pub &'a [Function]);

impl<'a> Section for FunctionSection<'a> {
    fn id(&self) -> SectionId {
        SectionId::Function
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        w.write_len(self.0.len());
        for func in self.0 {
            func.type_idx.encode(w);
        }
    }
}

pub struct CodeSection<'a>(pub &'a [Function]);

impl<'a> Section for CodeSection<'a> {
    fn id(&self) -> SectionId {
        SectionId::Code
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.0.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn code_entry(func: &Function) -> Vec<u8> {
        let mut sink = Sink::new();
        func.encode(&mut sink);
        sink.into_bytes()
    }

    #[test]
    fn adjacent_locals_merge() {
        let mut func = Function::new(None, TypeIdx(0));
        func.add_locals(ValType::I32, 2);
        func.add_locals(ValType::I32, 1);
        func.add_locals(ValType::F64, 1);
        func.add_locals(ValType::I32, 0);
        func.add_locals(ValType::I32, 4);
        func.set_body(vec![opcodes::END]);
        assert_eq!(func.local_count(), 8);
        assert_eq!(
            code_entry(&func),
            vec![0x08, 0x03, 0x03, 0x7f, 0x01, 0x7c, 0x04, 0x7f, 0x0b],
        );
    }

    #[test]
    fn named_locals_follow_declaration_order() {
        let mut func = Function::new(Some("f".to_owned()), TypeIdx(0));
        func.add_locals(ValType::I64, 1);
        func.add_named_locals(ValType::I32, &["a", "b"]);
        assert_eq!(func.local_names(), &[(1, "a".to_owned()), (2, "b".to_owned())][..]);
    }

    #[test]
    fn named_locals_past_u32_range() {
        let mut func = Function::new(None, TypeIdx(0));
        func.add_locals(ValType::I32, u32::MAX);
        func.add_named_locals(ValType::I64, &["x", "y"]);
        assert_eq!(func.local_count(), u64::from(u32::MAX) + 2);
        assert_eq!(func.local_names()[1], (u64::from(u32::MAX) + 1, "y".to_owned()));
    }

    #[test]
    fn function_section_lists_type_indices() {
        let funcs = vec![Function::new(None, TypeIdx(1)), Function::new(None, TypeIdx(0))];
        let mut sink = Sink::new();
        encode_section(&FunctionSection(&funcs), &mut sink);
        assert_eq!(sink.into_bytes(), vec![0x03, 0x03, 0x02, 0x01, 0x00]);
    }
}
