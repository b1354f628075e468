use super::*;

const MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];
const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// When to emit the DataCount section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataCountPolicy {
    /// Only when there is a passive data segment.
    Auto,
    /// Whenever there are data segments at all.
    Always,
    /// Never. Building a module with a passive data segment then fails.
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub data_count: DataCountPolicy,
    /// Emit the `name` section for the module name, function names and local
    /// names.
    pub emit_names: bool,
}

impl Default for BuildConfig {
    fn default() -> BuildConfig {
        BuildConfig {
            data_count: DataCountPolicy::Auto,
            emit_names: true,
        }
    }
}

/// A table to add with `ModuleBuilder::add_table`. The default is an empty,
/// unbounded `funcref` table whose slots start out null.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub element_type: RefType,
    pub initial: u32,
    pub maximum: Option<u32>,
    pub init: Option<ConstExpr>,
}

impl Default for TableConfig {
    fn default() -> TableConfig {
        TableConfig {
            element_type: RefType::FUNCREF,
            initial: 0,
            maximum: None,
            init: None,
        }
    }
}

/// A memory, in pages. The default is an empty, unbounded, unshared memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryConfig {
    pub initial: u32,
    pub maximum: Option<u32>,
    pub shared: bool,
}

impl From<MemoryConfig> for MemoryType {
    fn from(config: MemoryConfig) -> MemoryType {
        MemoryType {
            limits: Limits {
                min: config.initial,
                max: config.maximum,
            },
            shared: config.shared,
        }
    }
}

/// The signature of a function or tag, either an existing type or one to be
/// added to the type section.
#[derive(Clone, Debug, PartialEq)]
pub enum Signature {
    Index(TypeIdx),
    Type(FuncType),
}

impl From<TypeIdx> for Signature {
    fn from(type_idx: TypeIdx) -> Signature {
        Signature::Index(type_idx)
    }
}

impl From<FuncType> for Signature {
    fn from(func_type: FuncType) -> Signature {
        Signature::Type(func_type)
    }
}

/// Collects the contents of a module and serializes it.
///
/// Every `add_*` method returns the index of what it added. Indices are never
/// renumbered, so they can be used in function bodies straight away. Nothing
/// is checked until `build`, which means a reference to an entity that is
/// only added later is fine.
#[derive(Clone, Debug, Default)]
pub struct ModuleBuilder {
    pub(crate) config: BuildConfig,
    pub(crate) name: Option<String>,
    pub(crate) types: TypeTable,
    pub(crate) imports: ImportSection,
    pub(crate) functions: Vec<Function>,
    pub(crate) tables: TableSection,
    pub(crate) memories: MemorySection,
    pub(crate) tags: TagSection,
    pub(crate) globals: GlobalSection,
    pub(crate) exports: ExportSection,
    pub(crate) start: StartSection,
    pub(crate) elements: ElementSection,
    pub(crate) data: DataSection,
    pub(crate) extra: Vec<ExtraSection>,
}

impl ModuleBuilder {
    pub fn new() -> ModuleBuilder {
        ModuleBuilder::default()
    }

    pub fn with_config(config: BuildConfig) -> ModuleBuilder {
        ModuleBuilder {
            config,
            ..ModuleBuilder::default()
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BuildConfig {
        &mut self.config
    }

    /// Sets the module name recorded in the `name` section.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_owned());
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn add_type(&mut self, func_type: FuncType) -> TypeIdx {
        self.types.add_type(func_type)
    }

    pub fn add_type_with(&mut self, func_type: FuncType, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.types.add_type_with(func_type, supertype, is_final)
    }

    pub fn add_struct(&mut self, fields: Vec<FieldType>, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.types.add_struct(fields, supertype, is_final)
    }

    pub fn add_array(&mut self, element: FieldType, supertype: Option<TypeIdx>, is_final: bool) -> TypeIdx {
        self.types.add_array(element, supertype, is_final)
    }

    pub fn start_rec_group(&mut self) -> Result<(), StructuralError> {
        self.types.start_rec_group()
    }

    pub fn end_rec_group(&mut self) -> Result<(), StructuralError> {
        self.types.end_rec_group()
    }

    fn signature<S: Into<Signature>>(&mut self, sig: S) -> TypeIdx {
        match sig.into() {
            Signature::Index(type_idx) => type_idx,
            Signature::Type(func_type) => self.types.add_type(func_type),
        }
    }

    fn imported(&self, kind: ExternalKind) -> u32 {
        self.imports.count(kind)
    }

    /// Adds a local function. Its index comes after all imported functions.
    pub fn add_function<S: Into<Signature>>(&mut self, name: &str, sig: S) -> FunctionBuilder {
        self.push_function(Some(name.to_owned()), sig)
    }

    pub fn add_unnamed_function<S: Into<Signature>>(&mut self, sig: S) -> FunctionBuilder {
        self.push_function(None, sig)
    }

    fn push_function<S: Into<Signature>>(&mut self, name: Option<String>, sig: S) -> FunctionBuilder {
        let type_idx = self.signature(sig);
        let position = self.functions.len();
        trace!("adding function {:?} with type {}", name, type_idx.0);
        self.functions.push(Function::new(name, type_idx));
        FunctionBuilder {
            module: self,
            position,
        }
    }

    /// Reopens a local function for editing. Returns `None` for imported or
    /// unknown functions.
    pub fn function_mut(&mut self, func_idx: FuncIdx) -> Option<FunctionBuilder> {
        let imported = self.imported(ExternalKind::Func);
        let position = func_idx.0.checked_sub(imported)? as usize;
        if position >= self.functions.len() {
            return None;
        }
        Some(FunctionBuilder {
            module: self,
            position,
        })
    }

    fn push_import(&mut self, module: &str, field: &str, desc: ImportDesc) -> u32 {
        self.imports.push(Import {
            module: module.to_owned(),
            field: field.to_owned(),
            desc,
        })
    }

    /// Imports a function. Imports take the lowest indices of their index
    /// space, so this fails once a local function exists.
    pub fn add_import<S: Into<Signature>>(&mut self, module: &str, field: &str, sig: S) -> Result<FuncIdx, StructuralError> {
        if !self.functions.is_empty() {
            return Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Func });
        }
        let type_idx = self.signature(sig);
        Ok(FuncIdx(self.push_import(module, field, ImportDesc::Func(type_idx))))
    }

    pub fn add_imported_global(
        &mut self,
        module: &str,
        field: &str,
        val_type: ValType,
        mutable: bool,
    ) -> Result<GlobalIdx, StructuralError> {
        if self.globals.len() != 0 {
            return Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Global });
        }
        let desc = ImportDesc::Global(GlobalType { val_type, mutable });
        Ok(GlobalIdx(self.push_import(module, field, desc)))
    }

    pub fn add_imported_memory(&mut self, module: &str, field: &str, config: MemoryConfig) -> Result<MemIdx, StructuralError> {
        if self.memories.len() != 0 {
            return Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Memory });
        }
        Ok(MemIdx(self.push_import(module, field, ImportDesc::Memory(config.into()))))
    }

    pub fn add_imported_table(
        &mut self,
        module: &str,
        field: &str,
        element_type: RefType,
        initial: u32,
        maximum: Option<u32>,
    ) -> Result<TableIdx, StructuralError> {
        if self.tables.len() != 0 {
            return Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Table });
        }
        let desc = ImportDesc::Table(TableType {
            element_type,
            limits: Limits {
                min: initial,
                max: maximum,
            },
        });
        Ok(TableIdx(self.push_import(module, field, desc)))
    }

    pub fn add_imported_tag<S: Into<Signature>>(&mut self, module: &str, field: &str, sig: S) -> Result<TagIdx, StructuralError> {
        if self.tags.len() != 0 {
            return Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Tag });
        }
        let type_idx = self.signature(sig);
        Ok(TagIdx(self.push_import(module, field, ImportDesc::Tag(type_idx))))
    }

    pub fn add_table(&mut self, config: TableConfig) -> TableIdx {
        let table = Table {
            ty: TableType {
                element_type: config.element_type,
                limits: Limits {
                    min: config.initial,
                    max: config.maximum,
                },
            },
            init: config.init,
        };
        TableIdx(self.imported(ExternalKind::Table) + self.tables.push(table))
    }

    /// Adds a `funcref` table with the given bounds, unless a table has been
    /// added already.
    pub fn set_table_bounds(&mut self, min: u32, max: Option<u32>) -> Result<TableIdx, StructuralError> {
        if self.tables.len() != 0 {
            return Err(StructuralError::TableBoundsAlreadySet);
        }
        Ok(self.add_table(TableConfig {
            initial: min,
            maximum: max,
            ..TableConfig::default()
        }))
    }

    pub fn add_memory(&mut self, config: MemoryConfig) -> MemIdx {
        MemIdx(self.imported(ExternalKind::Memory) + self.memories.push(config.into()))
    }

    /// Exports memory 0.
    pub fn export_memory_as(&mut self, name: &str) {
        self.add_export_of_kind(name, ExternalKind::Memory, 0);
    }

    /// Adds a global. Without an `init` expression the global starts at the
    /// zero value of its type, which non-nullable references don't have.
    pub fn add_global(&mut self, val_type: ValType, mutable: bool, init: Option<ConstExpr>) -> Result<GlobalIdx, EncodingError> {
        let init = match init {
            Some(init) => init,
            None => match ConstExpr::default_for(val_type) {
                Some(init) => init,
                None => return Err(EncodingError::NonDefaultable { ty: val_type }),
            },
        };
        let global = Global {
            ty: GlobalType { val_type, mutable },
            init,
        };
        Ok(GlobalIdx(self.imported(ExternalKind::Global) + self.globals.push(global)))
    }

    pub fn add_tag<S: Into<Signature>>(&mut self, sig: S) -> TagIdx {
        let type_idx = self.signature(sig);
        TagIdx(self.imported(ExternalKind::Tag) + self.tags.push(type_idx))
    }

    /// Exports a function.
    pub fn add_export(&mut self, name: &str, func_idx: FuncIdx) {
        self.exports.push(Export {
            name: name.to_owned(),
            desc: ExportDesc::Func(func_idx),
        });
    }

    pub fn add_export_of_kind(&mut self, name: &str, kind: ExternalKind, index: u32) {
        self.exports.push(Export {
            name: name.to_owned(),
            desc: ExportDesc::new(kind, index),
        });
    }

    pub fn add_start(&mut self, func_idx: FuncIdx) {
        self.start = StartSection(Some(func_idx));
    }

    pub fn add_element(&mut self, segment: ElementSegment) -> ElemIdx {
        ElemIdx(self.elements.push(segment))
    }

    /// Adds an active segment writing `funcs` into `table` from `offset` on.
    pub fn add_element_segment<O: Into<Offset>>(&mut self, table: TableIdx, offset: O, funcs: &[FuncIdx]) -> ElemIdx {
        self.add_element(ElementSegment {
            mode: ElementMode::Active {
                table,
                offset: offset.into(),
            },
            items: ElementItems::Functions(funcs.to_vec()),
        })
    }

    /// Adds a passive `funcref` segment. `None` entries become null
    /// references.
    pub fn add_passive_element_segment(&mut self, funcs: &[Option<FuncIdx>]) -> ElemIdx {
        let exprs = funcs
            .iter()
            .map(|func| match func {
                Some(func_idx) => ConstExpr::RefFunc(*func_idx),
                None => ConstExpr::RefNull(HeapType::Func),
            })
            .collect();
        self.add_element(ElementSegment {
            mode: ElementMode::Passive,
            items: ElementItems::Expressions {
                ty: RefType::FUNCREF,
                exprs,
            },
        })
    }

    /// Declares functions which are referenced with `ref.func` in a body.
    pub fn add_declarative_element_segment(&mut self, funcs: &[FuncIdx]) -> ElemIdx {
        self.add_element(ElementSegment {
            mode: ElementMode::Declarative,
            items: ElementItems::Functions(funcs.to_vec()),
        })
    }

    /// Appends `funcs` to the first local table, creating a `funcref` table if
    /// there is none. The table grows to fit and its maximum, if any, is
    /// raised along with it.
    pub fn append_to_table(&mut self, funcs: &[FuncIdx]) -> ElemIdx {
        if self.tables.len() == 0 {
            self.add_table(TableConfig::default());
        }
        let table_idx = TableIdx(self.imported(ExternalKind::Table));
        let mut offset = 0;
        if let Some(table) = self.tables.first_mut() {
            let limits = &mut table.ty.limits;
            offset = limits.min;
            limits.min = limits.min.saturating_add(funcs.len() as u32);
            if let Some(max) = limits.max {
                if max < limits.min {
                    limits.max = Some(limits.min);
                }
            }
        }
        self.add_element_segment(table_idx, Offset::I32(offset as i32), funcs)
    }

    /// Adds an active data segment for memory 0.
    pub fn add_data_segment<O: Into<Offset>>(&mut self, offset: O, bytes: &[u8]) -> DataIdx {
        self.add_data_segment_to(MemIdx(0), offset, bytes)
    }

    pub fn add_data_segment_to<O: Into<Offset>>(&mut self, memory: MemIdx, offset: O, bytes: &[u8]) -> DataIdx {
        DataIdx(self.data.push(DataSegment {
            mode: DataMode::Active {
                memory,
                offset: offset.into(),
            },
            bytes: bytes.to_vec(),
        }))
    }

    pub fn add_passive_data_segment(&mut self, bytes: &[u8]) -> DataIdx {
        DataIdx(self.data.push(DataSegment {
            mode: DataMode::Passive,
            bytes: bytes.to_vec(),
        }))
    }

    /// Adds a custom section after the standard sections. Custom and explicit
    /// sections are written in the order they were added.
    pub fn add_custom_section(&mut self, name: &str, bytes: &[u8]) {
        self.extra.push(ExtraSection::Custom {
            name: name.to_owned(),
            bytes: bytes.to_vec(),
        });
    }

    /// Appends `bytes` to the module as they are. They should form a complete
    /// section.
    pub fn add_explicit_section(&mut self, bytes: &[u8]) {
        self.extra.push(ExtraSection::Explicit(bytes.to_vec()));
    }

    fn data_count_section(&self) -> Option<DataCountSection> {
        let emit = match self.config.data_count {
            DataCountPolicy::Auto => self.data.has_passive(),
            DataCountPolicy::Always => self.data.len() != 0,
            DataCountPolicy::Never => false,
        };
        if emit {
            Some(DataCountSection(self.data.len()))
        } else {
            None
        }
    }

    fn name_section(&self) -> Result<NameSection, EncodingError> {
        let imported = self.imported(ExternalKind::Func);
        let mut names = NameSection {
            module: self.name.as_ref().map(|name| &name[..]),
            ..NameSection::default()
        };
        for (position, func) in self.functions.iter().enumerate() {
            let func_idx = imported + position as u32;
            if let Some(name) = &func.name {
                names.functions.push((func_idx, &name[..]));
            }
            if !func.local_names().is_empty() {
                let params = match self.types.func_type(func.type_idx) {
                    Some(func_type) => func_type.params.len() as u64,
                    None => 0,
                };
                let mut locals = Vec::with_capacity(func.local_names().len());
                for (position, name) in func.local_names() {
                    let index = params + position;
                    match u32::try_from(index) {
                        Ok(index) => locals.push((index, &name[..])),
                        Err(..) => return Err(EncodingError::LocalIndexOverflow { func: func_idx, index }),
                    }
                }
                names.locals.push((func_idx, locals));
            }
        }
        Ok(names)
    }

    /// Serializes the module.
    ///
    /// Every index is resolved first. If anything fails to resolve, the error
    /// is returned and no output is produced. Building does not change the
    /// builder, so calling it again gives identical bytes.
    pub fn build(&self) -> Result<Vec<u8>, BuildError> {
        self.check()?;
        let names = if self.config.emit_names {
            Some(self.name_section()?)
        } else {
            None
        };

        let mut w = Sink::new();
        w.write_bytes(&MAGIC);
        w.write_bytes(&VERSION);

        let functions = FunctionSection(&self.functions);
        let code = CodeSection(&self.functions);
        let data_count = self.data_count_section();

        let mut sections: Vec<&dyn Section> = vec![
            &self.types,
            &self.imports,
            &functions,
            &self.tables,
            &self.memories,
            &self.tags,
            &self.globals,
            &self.exports,
            &self.start,
            &self.elements,
        ];
        if let Some(data_count) = &data_count {
            sections.push(data_count);
        }
        sections.push(&code);
        sections.push(&self.data);

        for section in sections {
            if section.is_empty() {
                continue;
            }
            let offset = w.len();
            encode_section(section, &mut w);
            trace!("{:?} section at offset {}, {} bytes", section.id(), offset, w.len() - offset);
        }

        for extra in &self.extra {
            let offset = w.len();
            extra.encode(&mut w);
            trace!("extra section at offset {}, {} bytes", offset, w.len() - offset);
        }

        if let Some(names) = names {
            if !names.is_empty() {
                let offset = w.len();
                encode_section(&names, &mut w);
                trace!("name section at offset {}, {} bytes", offset, w.len() - offset);
            }
        }

        debug!(
            "built module: {} bytes, {} types, {} imports, {} functions",
            w.len(),
            self.types.len(),
            self.imports.iter().count(),
            self.functions.len(),
        );
        Ok(w.into_bytes())
    }

    /// Like `build`, but hands out the bytes as an immutable buffer.
    pub fn to_buffer(&self) -> Result<Box<[u8]>, BuildError> {
        Ok(self.build()?.into_boxed_slice())
    }
}

/// Edits one local function. Returned by `ModuleBuilder::add_function` and
/// `ModuleBuilder::function_mut`.
pub struct FunctionBuilder<'m> {
    module: &'m mut ModuleBuilder,
    position: usize,
}

impl<'m> FunctionBuilder<'m> {
    fn function(&mut self) -> &mut Function {
        &mut self.module.functions[self.position]
    }

    pub fn index(&self) -> FuncIdx {
        FuncIdx(self.module.imported(ExternalKind::Func) + self.position as u32)
    }

    pub fn type_idx(&self) -> TypeIdx {
        self.module.functions[self.position].type_idx
    }

    /// Sets the body, followed by an `end`.
    pub fn add_body(mut self, body: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(body.len() + 1);
        bytes.extend_from_slice(body);
        bytes.push(opcodes::END);
        self.function().set_body(bytes);
        self
    }

    /// Sets the body as given. The caller supplies the final `end`.
    pub fn add_body_with_end(mut self, body: &[u8]) -> Self {
        self.function().set_body(body.to_vec());
        self
    }

    pub fn add_locals(mut self, val_type: ValType, count: u32) -> Self {
        self.function().add_locals(val_type, count);
        self
    }

    /// Adds one local of `val_type` for each name.
    pub fn add_named_locals(mut self, val_type: ValType, names: &[&str]) -> Self {
        self.function().add_named_locals(val_type, names);
        self
    }

    /// Exports the function under its own name. Unnamed functions are
    /// exported under their index.
    pub fn export_func(self) -> Self {
        let name = match &self.module.functions[self.position].name {
            Some(name) => name.clone(),
            None => self.index().0.to_string(),
        };
        self.export_as(&name)
    }

    pub fn export_as(self, name: &str) -> Self {
        let func_idx = self.index();
        self.module.add_export(name, func_idx);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    const HEADER: [u8; 8] = [0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

    fn sections(bytes: &[u8]) -> Vec<u8> {
        let mut ids = Vec::new();
        let mut rest = &bytes[HEADER.len()..];
        while let Some((&id, tail)) = rest.split_first() {
            let (len, read) = leb128::test::read_unsigned(tail);
            ids.push(id);
            rest = &tail[read + len as usize..];
        }
        ids
    }

    #[test]
    fn empty_module_is_just_the_header() {
        let module = ModuleBuilder::new();
        assert_eq!(unwrap!(module.build()), HEADER.to_vec());
    }

    #[test]
    fn imports_come_first_in_index_space() {
        let mut module = ModuleBuilder::new();
        let imported = unwrap!(module.add_import("env", "f", sigs::v_v()));
        let local = module.add_function("g", sigs::v_v()).index();
        assert_eq!(imported, FuncIdx(0));
        assert_eq!(local, FuncIdx(1));
        assert_eq!(
            module.add_import("env", "h", sigs::v_v()),
            Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Func }),
        );
    }

    #[test]
    fn global_defaults() {
        let mut module = ModuleBuilder::new();
        assert_eq!(unwrap!(module.add_imported_global("env", "g", ValType::I32, false)), GlobalIdx(0));
        assert_eq!(unwrap!(module.add_global(ValType::F32, true, None)), GlobalIdx(1));
        assert_eq!(
            module.add_global(ValType::ref_(HeapType::Func), false, None),
            Err(EncodingError::NonDefaultable { ty: ValType::ref_(HeapType::Func) }),
        );
        assert_eq!(
            module.add_imported_global("env", "h", ValType::I32, false),
            Err(StructuralError::ImportAfterDefinition { space: IndexSpace::Global }),
        );
    }

    #[test]
    fn table_bounds_only_once() {
        let mut module = ModuleBuilder::new();
        assert_eq!(module.set_table_bounds(1, Some(2)), Ok(TableIdx(0)));
        assert_eq!(module.set_table_bounds(1, Some(2)), Err(StructuralError::TableBoundsAlreadySet));
    }

    #[test]
    fn append_to_table_grows_first_table() {
        let mut module = ModuleBuilder::new();
        let f = module.add_function("f", sigs::v_v()).add_body(&[]).index();
        unwrap!(module.set_table_bounds(1, Some(1)));
        assert_eq!(module.append_to_table(&[f, f]), ElemIdx(0));
        let table = unwrap!(module.tables.iter().next());
        assert_eq!(table.ty.limits, Limits { min: 3, max: Some(3) });
        assert_eq!(
            unwrap!(module.elements.iter().next()).mode,
            ElementMode::Active { table: TableIdx(0), offset: Offset::I32(1) },
        );
    }

    #[test]
    fn section_order() {
        let mut module = ModuleBuilder::new();
        unwrap!(module.add_import("env", "f", sigs::v_v()));
        module.add_function("g", sigs::v_v()).add_body(&[]).export_func();
        module.set_table_bounds(1, None).ok();
        module.add_memory(MemoryConfig { initial: 1, ..MemoryConfig::default() });
        module.add_tag(sigs::v_i());
        unwrap!(module.add_global(ValType::I32, false, None));
        module.add_start(FuncIdx(1));
        module.append_to_table(&[FuncIdx(1)]);
        module.add_passive_data_segment(b"hi");
        module.add_custom_section("c", &[]);
        let bytes = unwrap!(module.build());
        assert_eq!(sections(&bytes), vec![1, 2, 3, 4, 5, 13, 6, 7, 8, 9, 12, 10, 11, 0, 0]);
    }

    #[test]
    fn data_count_policies() {
        let mut module = ModuleBuilder::new();
        module.add_memory(MemoryConfig::default());
        module.add_data_segment(0, b"a");
        assert!(!sections(&unwrap!(module.build())).contains(&12));

        module.config_mut().data_count = DataCountPolicy::Always;
        assert!(sections(&unwrap!(module.build())).contains(&12));

        module.config_mut().data_count = DataCountPolicy::Never;
        module.add_passive_data_segment(b"b");
        assert_eq!(module.build(), Err(BuildError::Structural(StructuralError::DataCountRequired)));
    }

    #[test]
    fn names_are_optional() {
        let mut module = ModuleBuilder::with_config(BuildConfig { emit_names: false, ..BuildConfig::default() });
        module.set_name("m");
        module.add_function("f", sigs::v_v()).add_body(&[]);
        assert!(!sections(&unwrap!(module.build())).contains(&0));
    }

    #[test]
    fn local_names_are_offset_by_params() {
        let mut module = ModuleBuilder::new();
        module
            .add_function("f", sigs::v_ii())
            .add_locals(ValType::I64, 1)
            .add_named_locals(ValType::I32, &["x"])
            .add_body(&[]);
        let names = unwrap!(module.name_section());
        assert_eq!(names.functions, vec![(0, "f")]);
        assert_eq!(names.locals, vec![(0, vec![(3, "x")])]);
    }

    #[test]
    fn local_name_past_largest_index_fails_build() {
        let mut module = ModuleBuilder::new();
        module
            .add_function("f", sigs::v_ii())
            .add_locals(ValType::I32, u32::MAX - 1)
            .add_named_locals(ValType::I64, &["x"])
            .add_body(&[]);
        assert_eq!(
            module.build(),
            Err(BuildError::Encoding(EncodingError::LocalIndexOverflow {
                func: 0,
                index: u64::from(u32::MAX) + 1,
            })),
        );

        module.config_mut().emit_names = false;
        assert!(module.build().is_ok());
    }

    #[test]
    fn function_mut_skips_imports() {
        let mut module = ModuleBuilder::new();
        unwrap!(module.add_import("env", "f", sigs::v_v()));
        let g = module.add_unnamed_function(sigs::v_v()).index();
        assert!(module.function_mut(FuncIdx(0)).is_none());
        assert!(module.function_mut(FuncIdx(2)).is_none());
        unwrap!(module.function_mut(g)).add_body(&[opcodes::NOP]).export_func();
        assert_eq!(module.functions[0].body(), &[opcodes::NOP, opcodes::END][..]);
        assert_eq!(unwrap!(module.exports.iter().next()).name, "1");
    }

    #[test]
    fn build_is_repeatable() {
        let mut module = ModuleBuilder::new();
        module.add_function("f", sigs::i_v()).add_body(&opcodes::i32_const(7)).export_func();
        assert_eq!(unwrap!(module.build()), unwrap!(module.build()));
        assert_eq!(&unwrap!(module.to_buffer())[..], &unwrap!(module.build())[..]);
    }
}
