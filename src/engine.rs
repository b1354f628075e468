use super::*;

/// A WebAssembly engine that built modules can be handed to.
///
/// The builder never looks inside the engine's types, it only passes the
/// bytes along and returns whatever the engine gives back.
pub trait Engine {
    type Module;
    type Instance;
    type Imports: ?Sized;
    type Error: Fail;

    fn compile(&self, bytes: &[u8]) -> Result<Self::Module, Self::Error>;

    fn instantiate(&self, module: &Self::Module, imports: &Self::Imports) -> Result<Self::Instance, Self::Error>;
}

/// Either the module could not be built or the engine rejected it.
#[derive(Debug)]
pub enum EngineError<E> {
    Build(BuildError),
    Engine(E),
}

impl<E: Display> fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::Build(e) => write!(f, "failed to build module: {}", e),
            EngineError::Engine(e) => write!(f, "engine error: {}", e),
        }
    }
}

impl<E: Fail> Fail for EngineError<E> {
    fn cause(&self) -> Option<&dyn Fail> {
        match self {
            EngineError::Build(e) => Some(e),
            EngineError::Engine(e) => Some(e),
        }
    }
}

impl<E> From<BuildError> for EngineError<E> {
    fn from(e: BuildError) -> EngineError<E> {
        EngineError::Build(e)
    }
}

impl ModuleBuilder {
    /// Builds the module and compiles it with `engine`.
    pub fn to_module<E: Engine>(&self, engine: &E) -> Result<E::Module, EngineError<E::Error>> {
        let bytes = self.build()?;
        debug!("compiling {} byte module", bytes.len());
        engine.compile(&bytes).map_err(EngineError::Engine)
    }

    /// Builds, compiles and instantiates the module.
    pub fn instantiate<E: Engine>(&self, engine: &E, imports: &E::Imports) -> Result<E::Instance, EngineError<E::Error>> {
        let module = self.to_module(engine)?;
        engine.instantiate(&module, imports).map_err(EngineError::Engine)
    }
}
