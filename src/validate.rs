use super::*;

/// The sizes of every index space of the module being built.
pub(crate) struct Context<'m> {
    pub types: &'m TypeTable,
    pub funcs: u32,
    pub tables: u32,
    pub memories: u32,
    pub globals: u32,
    pub tags: u32,
    pub elems: u32,
    pub datas: u32,
}

fn check_in(space: IndexSpace, index: u32, count: u32, context: &'static str) -> Result<(), IndexError> {
    if index < count {
        return Ok(());
    }
    Err(IndexError {
        space,
        index,
        count,
        context,
    })
}

impl<'m> Context<'m> {
    fn count(&self, space: IndexSpace) -> u32 {
        match space {
            IndexSpace::Type => self.types.len(),
            IndexSpace::Func => self.funcs,
            IndexSpace::Table => self.tables,
            IndexSpace::Memory => self.memories,
            IndexSpace::Global => self.globals,
            IndexSpace::Tag => self.tags,
            IndexSpace::Elem => self.elems,
            IndexSpace::Data => self.datas,
        }
    }

    pub fn check_index(&self, space: IndexSpace, index: u32, context: &'static str) -> Result<(), IndexError> {
        check_in(space, index, self.count(space), context)
    }

    pub fn check_func_type(&self, type_idx: TypeIdx, context: &'static str) -> Result<(), BuildError> {
        self.check_index(IndexSpace::Type, type_idx.0, context)?;
        if self.types.func_type(type_idx).is_none() {
            return Err(StructuralError::NotAFunctionType {
                index: type_idx.0,
                context,
            }.into());
        }
        Ok(())
    }
}

// Types can only see a prefix of the type index space, so the checks below
// take the number of visible types rather than a `Context`.

impl HeapType {
    pub(crate) fn check(&self, visible: u32, context: &'static str) -> Result<(), IndexError> {
        match *self {
            HeapType::Concrete(TypeIdx(x)) => check_in(IndexSpace::Type, x, visible, context),
            _ => Ok(()),
        }
    }
}

impl ValType {
    pub(crate) fn check(&self, visible: u32, context: &'static str) -> Result<(), IndexError> {
        match self {
            ValType::Ref(ref_type) => ref_type.heap_type.check(visible, context),
            _ => Ok(()),
        }
    }
}

impl FieldType {
    fn check(&self, visible: u32, context: &'static str) -> Result<(), IndexError> {
        match self.storage {
            StorageType::Val(val_type) => val_type.check(visible, context),
            StorageType::I8 | StorageType::I16 => Ok(()),
        }
    }
}

impl CompositeType {
    fn check(&self, visible: u32, context: &'static str) -> Result<(), IndexError> {
        match self {
            CompositeType::Func(func_type) => {
                for val_type in func_type.params.iter().chain(&func_type.results) {
                    val_type.check(visible, context)?;
                }
            },
            CompositeType::Struct(struct_type) => {
                for field in &struct_type.fields {
                    field.check(visible, context)?;
                }
            },
            CompositeType::Array(array_type) => array_type.element.check(visible, context)?,
        }
        Ok(())
    }
}

impl TypeTable {
    /// Checks that every rec group is closed, that supertypes precede their
    /// subtypes and that types only refer to their own or earlier rec groups.
    pub(crate) fn check(&self) -> Result<(), BuildError> {
        self.check_closed()?;
        for (idx, sub_type) in self.iter() {
            if let Some(TypeIdx(supertype)) = sub_type.supertype {
                check_in(IndexSpace::Type, supertype, idx.0, "supertype declaration")?;
            }
            sub_type.composite.check(self.visible_from(idx), "type definition")?;
        }
        Ok(())
    }
}

impl ConstExpr {
    /// `globals` is the number of globals the expression may read.
    pub(crate) fn check(&self, cx: &Context, globals: u32, context: &'static str) -> Result<(), BuildError> {
        match self {
            ConstExpr::GlobalGet(GlobalIdx(x)) => check_in(IndexSpace::Global, *x, globals, context)?,
            ConstExpr::RefFunc(FuncIdx(x)) => cx.check_index(IndexSpace::Func, *x, context)?,
            ConstExpr::RefNull(heap_type) => heap_type.check(cx.types.len(), context)?,
            ConstExpr::I32(..)
            | ConstExpr::I64(..)
            | ConstExpr::F32(..)
            | ConstExpr::F64(..)
            | ConstExpr::V128(..)
            | ConstExpr::Raw(..) => (),
        }
        Ok(())
    }
}

impl Import {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        let types = cx.types.len();
        match &self.desc {
            ImportDesc::Func(type_idx) => cx.check_func_type(*type_idx, "function import")?,
            ImportDesc::Tag(type_idx) => cx.check_func_type(*type_idx, "tag import")?,
            ImportDesc::Table(table_type) => table_type.element_type.heap_type.check(types, "table import")?,
            ImportDesc::Global(global_type) => global_type.val_type.check(types, "global import")?,
            ImportDesc::Memory(..) => (),
        }
        Ok(())
    }
}

impl Function {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        cx.check_func_type(self.type_idx, "function signature")?;
        for (_, val_type) in self.locals() {
            val_type.check(cx.types.len(), "local declaration")?;
        }
        Ok(())
    }
}

impl Table {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        self.ty.element_type.heap_type.check(cx.types.len(), "table type")?;
        if let Some(init) = &self.init {
            init.check(cx, cx.globals, "table initializer")?;
        }
        Ok(())
    }
}

impl Global {
    /// `idx` is the global's own index. Initializers may only read globals
    /// declared before it.
    pub(crate) fn check(&self, cx: &Context, idx: u32) -> Result<(), BuildError> {
        self.ty.val_type.check(cx.types.len(), "global type")?;
        self.init.check(cx, idx, "global initializer")
    }
}

impl Export {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        let space = match self.desc.kind() {
            ExternalKind::Func => IndexSpace::Func,
            ExternalKind::Table => IndexSpace::Table,
            ExternalKind::Memory => IndexSpace::Memory,
            ExternalKind::Global => IndexSpace::Global,
            ExternalKind::Tag => IndexSpace::Tag,
        };
        cx.check_index(space, self.desc.index(), "export")?;
        Ok(())
    }
}

impl ElementSegment {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        if let ElementMode::Active { table, offset } = &self.mode {
            cx.check_index(IndexSpace::Table, table.0, "element segment")?;
            offset.to_const_expr().check(cx, cx.globals, "element segment offset")?;
        }
        match &self.items {
            ElementItems::Functions(funcs) => {
                for func_idx in funcs {
                    cx.check_index(IndexSpace::Func, func_idx.0, "element segment")?;
                }
            },
            ElementItems::Expressions { ty, exprs } => {
                ty.heap_type.check(cx.types.len(), "element segment")?;
                for expr in exprs {
                    expr.check(cx, cx.globals, "element segment")?;
                }
            },
        }
        Ok(())
    }
}

impl DataSegment {
    pub(crate) fn check(&self, cx: &Context) -> Result<(), BuildError> {
        if let DataMode::Active { memory, offset } = &self.mode {
            cx.check_index(IndexSpace::Memory, memory.0, "data segment")?;
            offset.to_const_expr().check(cx, cx.globals, "data segment offset")?;
        }
        Ok(())
    }
}

impl ModuleBuilder {
    pub(crate) fn context(&self) -> Context {
        Context {
            types: &self.types,
            funcs: self.imports.count(ExternalKind::Func) + self.functions.len() as u32,
            tables: self.imports.count(ExternalKind::Table) + self.tables.len(),
            memories: self.imports.count(ExternalKind::Memory) + self.memories.len(),
            globals: self.imports.count(ExternalKind::Global) + self.globals.len(),
            tags: self.imports.count(ExternalKind::Tag) + self.tags.len(),
            elems: self.elements.len(),
            datas: self.data.len(),
        }
    }

    /// Resolves every index in the module. Nothing is written until this has
    /// passed.
    pub(crate) fn check(&self) -> Result<(), BuildError> {
        self.types.check()?;

        let cx = self.context();
        for import in self.imports.iter() {
            import.check(&cx)?;
        }
        for func in &self.functions {
            func.check(&cx)?;
        }
        for table in self.tables.iter() {
            table.check(&cx)?;
        }
        for type_idx in self.tags.iter() {
            cx.check_func_type(type_idx, "tag")?;
        }
        let imported_globals = self.imports.count(ExternalKind::Global);
        for (i, global) in self.globals.iter().enumerate() {
            global.check(&cx, imported_globals + i as u32)?;
        }
        for export in self.exports.iter() {
            export.check(&cx)?;
        }
        if let StartSection(Some(FuncIdx(x))) = self.start {
            cx.check_index(IndexSpace::Func, x, "start function")?;
        }
        for segment in self.elements.iter() {
            segment.check(&cx)?;
        }
        for segment in self.data.iter() {
            segment.check(&cx)?;
        }

        if self.config.data_count == DataCountPolicy::Never && self.data.has_passive() {
            return Err(StructuralError::DataCountRequired.into());
        }

        Ok(())
    }
}
