//! Builds WebAssembly modules in memory and serializes them to the binary format.
//!
//! A [`ModuleBuilder`] collects types, imports, functions, tables, memories,
//! tags, globals, exports, element and data segments. Function bodies are raw
//! opcode bytes, usually spliced together from the constants in [`opcodes`].
//! [`ModuleBuilder::build`] checks that every index resolves and then emits the
//! sections in canonical order.
//!
//! The builder only checks what it needs to in order to produce a well-formed
//! binary. Modules which an engine will reject (mismatched types, bad limits,
//! broken instruction sequences) can be built on purpose.
//!
//! The encoding follows the WebAssembly Core Specification 2.0 together with
//! the exception handling, GC, threads, multi-memory and bulk memory proposals.

#![allow(unused_imports)] // workaround spurious warnings

use failure::Fail;
use lazy_static::lazy_static;
use log::{debug, trace};

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::Display;
use std::fmt;

#[cfg(test)]
use unwrap::unwrap;

pub use self::const_expr::*;
pub use self::encode::Encode;
pub use self::engine::*;
pub use self::error::*;
pub use self::module::*;
pub use self::sections::*;
pub use self::sink::Sink;
pub use self::type_table::*;
pub use self::types::*;

pub mod leb128;
pub mod logger;
pub mod opcodes;
pub mod sigs;

mod const_expr;
mod encode;
mod engine;
mod error;
mod module;
mod sections;
mod sink;
mod type_table;
mod types;
mod validate;
