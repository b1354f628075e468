use super::*;

/// A value which has no representation in the binary format.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum EncodingError {
    #[fail(display = "unsigned value {} does not fit in 64 bits", value)]
    UnsignedOverflow {
        value: u128,
    },
    #[fail(display = "signed value {} does not fit in 64 bits", value)]
    SignedOverflow {
        value: i128,
    },
    #[fail(display = "type {:?} has no default value, an init expression is required", ty)]
    NonDefaultable {
        ty: ValType,
    },
    #[fail(display = "local {} of function {} is past the largest local index", index, func)]
    LocalIndexOverflow {
        func: u32,
        index: u64,
    },
}

/// The index spaces of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpace {
    Type,
    Func,
    Table,
    Memory,
    Global,
    Tag,
    Elem,
    Data,
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            IndexSpace::Type => "type",
            IndexSpace::Func => "function",
            IndexSpace::Table => "table",
            IndexSpace::Memory => "memory",
            IndexSpace::Global => "global",
            IndexSpace::Tag => "tag",
            IndexSpace::Elem => "element segment",
            IndexSpace::Data => "data segment",
        };
        f.write_str(s)
    }
}

/// A reference which does not resolve to a declared entity.
///
/// `count` is the number of entities that `index` was allowed to refer to in
/// the place where it was used. For most references that is the size of the
/// whole index space, but type references inside the type section and
/// `global.get` inside global initializers can only see a prefix of it.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
#[fail(display = "{} index {} out of range in {} ({} available)", space, index, context, count)]
pub struct IndexError {
    pub space: IndexSpace,
    pub index: u32,
    pub count: u32,
    pub context: &'static str,
}

/// A violation of the module's ordering or grouping rules.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum StructuralError {
    #[fail(display = "a recursive type group is already open")]
    NestedRecGroup,
    #[fail(display = "no recursive type group is open")]
    NoOpenRecGroup,
    #[fail(display = "recursive type group starting at type {} was never closed", start)]
    UnclosedRecGroup {
        start: u32,
    },
    #[fail(display = "imported {}s must be declared before local ones", space)]
    ImportAfterDefinition {
        space: IndexSpace,
    },
    #[fail(display = "the bounds of table 0 have already been set")]
    TableBoundsAlreadySet,
    #[fail(display = "passive data segments require a data count section")]
    DataCountRequired,
    #[fail(display = "type {} used by {} is not a function type", index, context)]
    NotAFunctionType {
        index: u32,
        context: &'static str,
    },
}

/// Any failure of `ModuleBuilder::build`.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum BuildError {
    #[fail(display = "{}", _0)]
    Encoding(#[cause] EncodingError),
    #[fail(display = "{}", _0)]
    Index(#[cause] IndexError),
    #[fail(display = "{}", _0)]
    Structural(#[cause] StructuralError),
}

impl From<EncodingError> for BuildError {
    fn from(e: EncodingError) -> BuildError {
        BuildError::Encoding(e)
    }
}

impl From<IndexError> for BuildError {
    fn from(e: IndexError) -> BuildError {
        BuildError::Index(e)
    }
}

impl From<StructuralError> for BuildError {
    fn from(e: StructuralError) -> BuildError {
        BuildError::Structural(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_error_message() {
        let err = IndexError {
            space: IndexSpace::Func,
            index: 3,
            count: 1,
            context: "export \"main\"",
        };
        assert_eq!(
            err.to_string(),
            "function index 3 out of range in export \"main\" (1 available)",
        );
    }

    #[test]
    fn build_error_keeps_cause() {
        let err = BuildError::from(StructuralError::DataCountRequired);
        assert_eq!(err.to_string(), "passive data segments require a data count section");
        assert!(err.cause().is_some());
    }
}
