//! Opcode numbers, for assembling function bodies by hand.
//!
//! Single byte opcodes are plain `u8` constants. Prefixed opcode spaces live
//! in their own modules, each with a `PREFIX` byte and `u32` sub-opcodes which
//! are written as unsigned LEB128 after the prefix. [`lookup`] maps the text
//! format mnemonics onto the same numbers.
//!
//! Nothing here checks that a sequence of instructions makes sense.

use super::*;

macro_rules! single_byte_opcodes {
    ($($name:ident = $mnemonic:literal => $value:expr,)*) => {
        $(pub const $name: u8 = $value;)*

        const SINGLE_BYTE: &[(&str, u8)] = &[$(($mnemonic, $value),)*];
    };
}

macro_rules! prefixed_opcodes {
    ($(#[$attr:meta])* $module:ident = $prefix:expr, { $($name:ident = $mnemonic:literal => $value:expr,)* }) => {
        $(#[$attr])*
        pub mod $module {
            pub const PREFIX: u8 = $prefix;

            $(pub const $name: u32 = $value;)*

            pub(super) const TABLE: &[(&str, u32)] = &[$(($mnemonic, $value),)*];
        }
    };
}

single_byte_opcodes! {
    UNREACHABLE = "unreachable" => 0x00,
    NOP = "nop" => 0x01,
    BLOCK = "block" => 0x02,
    LOOP = "loop" => 0x03,
    IF = "if" => 0x04,
    ELSE = "else" => 0x05,
    TRY = "try" => 0x06,
    CATCH = "catch" => 0x07,
    THROW = "throw" => 0x08,
    RETHROW = "rethrow" => 0x09,
    THROW_REF = "throw_ref" => 0x0a,
    END = "end" => 0x0b,
    BR = "br" => 0x0c,
    BR_IF = "br_if" => 0x0d,
    BR_TABLE = "br_table" => 0x0e,
    RETURN = "return" => 0x0f,
    CALL = "call" => 0x10,
    CALL_INDIRECT = "call_indirect" => 0x11,
    RETURN_CALL = "return_call" => 0x12,
    RETURN_CALL_INDIRECT = "return_call_indirect" => 0x13,
    CALL_REF = "call_ref" => 0x14,
    RETURN_CALL_REF = "return_call_ref" => 0x15,
    DELEGATE = "delegate" => 0x18,
    CATCH_ALL = "catch_all" => 0x19,
    DROP = "drop" => 0x1a,
    SELECT = "select" => 0x1b,
    SELECT_WITH_TYPE = "select_t" => 0x1c,
    TRY_TABLE = "try_table" => 0x1f,
    LOCAL_GET = "local.get" => 0x20,
    LOCAL_SET = "local.set" => 0x21,
    LOCAL_TEE = "local.tee" => 0x22,
    GLOBAL_GET = "global.get" => 0x23,
    GLOBAL_SET = "global.set" => 0x24,
    TABLE_GET = "table.get" => 0x25,
    TABLE_SET = "table.set" => 0x26,
    I32_LOAD = "i32.load" => 0x28,
    I64_LOAD = "i64.load" => 0x29,
    F32_LOAD = "f32.load" => 0x2a,
    F64_LOAD = "f64.load" => 0x2b,
    I32_LOAD8_S = "i32.load8_s" => 0x2c,
    I32_LOAD8_U = "i32.load8_u" => 0x2d,
    I32_LOAD16_S = "i32.load16_s" => 0x2e,
    I32_LOAD16_U = "i32.load16_u" => 0x2f,
    I64_LOAD8_S = "i64.load8_s" => 0x30,
    I64_LOAD8_U = "i64.load8_u" => 0x31,
    I64_LOAD16_S = "i64.load16_s" => 0x32,
    I64_LOAD16_U = "i64.load16_u" => 0x33,
    I64_LOAD32_S = "i64.load32_s" => 0x34,
    I64_LOAD32_U = "i64.load32_u" => 0x35,
    I32_STORE = "i32.store" => 0x36,
    I64_STORE = "i64.store" => 0x37,
    F32_STORE = "f32.store" => 0x38,
    F64_STORE = "f64.store" => 0x39,
    I32_STORE8 = "i32.store8" => 0x3a,
    I32_STORE16 = "i32.store16" => 0x3b,
    I64_STORE8 = "i64.store8" => 0x3c,
    I64_STORE16 = "i64.store16" => 0x3d,
    I64_STORE32 = "i64.store32" => 0x3e,
    MEMORY_SIZE = "memory.size" => 0x3f,
    MEMORY_GROW = "memory.grow" => 0x40,
    I32_CONST = "i32.const" => 0x41,
    I64_CONST = "i64.const" => 0x42,
    F32_CONST = "f32.const" => 0x43,
    F64_CONST = "f64.const" => 0x44,
    I32_EQZ = "i32.eqz" => 0x45,
    I32_EQ = "i32.eq" => 0x46,
    I32_NE = "i32.ne" => 0x47,
    I32_LT_S = "i32.lt_s" => 0x48,
    I32_LT_U = "i32.lt_u" => 0x49,
    I32_GT_S = "i32.gt_s" => 0x4a,
    I32_GT_U = "i32.gt_u" => 0x4b,
    I32_LE_S = "i32.le_s" => 0x4c,
    I32_LE_U = "i32.le_u" => 0x4d,
    I32_GE_S = "i32.ge_s" => 0x4e,
    I32_GE_U = "i32.ge_u" => 0x4f,
    I64_EQZ = "i64.eqz" => 0x50,
    I64_EQ = "i64.eq" => 0x51,
    I64_NE = "i64.ne" => 0x52,
    I64_LT_S = "i64.lt_s" => 0x53,
    I64_LT_U = "i64.lt_u" => 0x54,
    I64_GT_S = "i64.gt_s" => 0x55,
    I64_GT_U = "i64.gt_u" => 0x56,
    I64_LE_S = "i64.le_s" => 0x57,
    I64_LE_U = "i64.le_u" => 0x58,
    I64_GE_S = "i64.ge_s" => 0x59,
    I64_GE_U = "i64.ge_u" => 0x5a,
    F32_EQ = "f32.eq" => 0x5b,
    F32_NE = "f32.ne" => 0x5c,
    F32_LT = "f32.lt" => 0x5d,
    F32_GT = "f32.gt" => 0x5e,
    F32_LE = "f32.le" => 0x5f,
    F32_GE = "f32.ge" => 0x60,
    F64_EQ = "f64.eq" => 0x61,
    F64_NE = "f64.ne" => 0x62,
    F64_LT = "f64.lt" => 0x63,
    F64_GT = "f64.gt" => 0x64,
    F64_LE = "f64.le" => 0x65,
    F64_GE = "f64.ge" => 0x66,
    I32_CLZ = "i32.clz" => 0x67,
    I32_CTZ = "i32.ctz" => 0x68,
    I32_POPCNT = "i32.popcnt" => 0x69,
    I32_ADD = "i32.add" => 0x6a,
    I32_SUB = "i32.sub" => 0x6b,
    I32_MUL = "i32.mul" => 0x6c,
    I32_DIV_S = "i32.div_s" => 0x6d,
    I32_DIV_U = "i32.div_u" => 0x6e,
    I32_REM_S = "i32.rem_s" => 0x6f,
    I32_REM_U = "i32.rem_u" => 0x70,
    I32_AND = "i32.and" => 0x71,
    I32_OR = "i32.or" => 0x72,
    I32_XOR = "i32.xor" => 0x73,
    I32_SHL = "i32.shl" => 0x74,
    I32_SHR_S = "i32.shr_s" => 0x75,
    I32_SHR_U = "i32.shr_u" => 0x76,
    I32_ROTL = "i32.rotl" => 0x77,
    I32_ROTR = "i32.rotr" => 0x78,
    I64_CLZ = "i64.clz" => 0x79,
    I64_CTZ = "i64.ctz" => 0x7a,
    I64_POPCNT = "i64.popcnt" => 0x7b,
    I64_ADD = "i64.add" => 0x7c,
    I64_SUB = "i64.sub" => 0x7d,
    I64_MUL = "i64.mul" => 0x7e,
    I64_DIV_S = "i64.div_s" => 0x7f,
    I64_DIV_U = "i64.div_u" => 0x80,
    I64_REM_S = "i64.rem_s" => 0x81,
    I64_REM_U = "i64.rem_u" => 0x82,
    I64_AND = "i64.and" => 0x83,
    I64_OR = "i64.or" => 0x84,
    I64_XOR = "i64.xor" => 0x85,
    I64_SHL = "i64.shl" => 0x86,
    I64_SHR_S = "i64.shr_s" => 0x87,
    I64_SHR_U = "i64.shr_u" => 0x88,
    I64_ROTL = "i64.rotl" => 0x89,
    I64_ROTR = "i64.rotr" => 0x8a,
    F32_ABS = "f32.abs" => 0x8b,
    F32_NEG = "f32.neg" => 0x8c,
    F32_CEIL = "f32.ceil" => 0x8d,
    F32_FLOOR = "f32.floor" => 0x8e,
    F32_TRUNC = "f32.trunc" => 0x8f,
    F32_NEAREST = "f32.nearest" => 0x90,
    F32_SQRT = "f32.sqrt" => 0x91,
    F32_ADD = "f32.add" => 0x92,
    F32_SUB = "f32.sub" => 0x93,
    F32_MUL = "f32.mul" => 0x94,
    F32_DIV = "f32.div" => 0x95,
    F32_MIN = "f32.min" => 0x96,
    F32_MAX = "f32.max" => 0x97,
    F32_COPYSIGN = "f32.copysign" => 0x98,
    F64_ABS = "f64.abs" => 0x99,
    F64_NEG = "f64.neg" => 0x9a,
    F64_CEIL = "f64.ceil" => 0x9b,
    F64_FLOOR = "f64.floor" => 0x9c,
    F64_TRUNC = "f64.trunc" => 0x9d,
    F64_NEAREST = "f64.nearest" => 0x9e,
    F64_SQRT = "f64.sqrt" => 0x9f,
    F64_ADD = "f64.add" => 0xa0,
    F64_SUB = "f64.sub" => 0xa1,
    F64_MUL = "f64.mul" => 0xa2,
    F64_DIV = "f64.div" => 0xa3,
    F64_MIN = "f64.min" => 0xa4,
    F64_MAX = "f64.max" => 0xa5,
    F64_COPYSIGN = "f64.copysign" => 0xa6,
    I32_WRAP_I64 = "i32.wrap_i64" => 0xa7,
    I32_TRUNC_F32_S = "i32.trunc_f32_s" => 0xa8,
    I32_TRUNC_F32_U = "i32.trunc_f32_u" => 0xa9,
    I32_TRUNC_F64_S = "i32.trunc_f64_s" => 0xaa,
    I32_TRUNC_F64_U = "i32.trunc_f64_u" => 0xab,
    I64_EXTEND_I32_S = "i64.extend_i32_s" => 0xac,
    I64_EXTEND_I32_U = "i64.extend_i32_u" => 0xad,
    I64_TRUNC_F32_S = "i64.trunc_f32_s" => 0xae,
    I64_TRUNC_F32_U = "i64.trunc_f32_u" => 0xaf,
    I64_TRUNC_F64_S = "i64.trunc_f64_s" => 0xb0,
    I64_TRUNC_F64_U = "i64.trunc_f64_u" => 0xb1,
    F32_CONVERT_I32_S = "f32.convert_i32_s" => 0xb2,
    F32_CONVERT_I32_U = "f32.convert_i32_u" => 0xb3,
    F32_CONVERT_I64_S = "f32.convert_i64_s" => 0xb4,
    F32_CONVERT_I64_U = "f32.convert_i64_u" => 0xb5,
    F32_DEMOTE_F64 = "f32.demote_f64" => 0xb6,
    F64_CONVERT_I32_S = "f64.convert_i32_s" => 0xb7,
    F64_CONVERT_I32_U = "f64.convert_i32_u" => 0xb8,
    F64_CONVERT_I64_S = "f64.convert_i64_s" => 0xb9,
    F64_CONVERT_I64_U = "f64.convert_i64_u" => 0xba,
    F64_PROMOTE_F32 = "f64.promote_f32" => 0xbb,
    I32_REINTERPRET_F32 = "i32.reinterpret_f32" => 0xbc,
    I64_REINTERPRET_F64 = "i64.reinterpret_f64" => 0xbd,
    F32_REINTERPRET_I32 = "f32.reinterpret_i32" => 0xbe,
    F64_REINTERPRET_I64 = "f64.reinterpret_i64" => 0xbf,
    I32_EXTEND8_S = "i32.extend8_s" => 0xc0,
    I32_EXTEND16_S = "i32.extend16_s" => 0xc1,
    I64_EXTEND8_S = "i64.extend8_s" => 0xc2,
    I64_EXTEND16_S = "i64.extend16_s" => 0xc3,
    I64_EXTEND32_S = "i64.extend32_s" => 0xc4,
    REF_NULL = "ref.null" => 0xd0,
    REF_IS_NULL = "ref.is_null" => 0xd1,
    REF_FUNC = "ref.func" => 0xd2,
    REF_EQ = "ref.eq" => 0xd3,
    REF_AS_NON_NULL = "ref.as_non_null" => 0xd4,
    BR_ON_NULL = "br_on_null" => 0xd5,
    BR_ON_NON_NULL = "br_on_non_null" => 0xd6,
}

/// Block type byte for blocks without results.
pub const EMPTY_BLOCK_TYPE: u8 = 0x40;

prefixed_opcodes! {
    /// Garbage collection instructions.
    gc = 0xfb, {
        STRUCT_NEW = "struct.new" => 0x00,
        STRUCT_NEW_DEFAULT = "struct.new_default" => 0x01,
        STRUCT_GET = "struct.get" => 0x02,
        STRUCT_GET_S = "struct.get_s" => 0x03,
        STRUCT_GET_U = "struct.get_u" => 0x04,
        STRUCT_SET = "struct.set" => 0x05,
        ARRAY_NEW = "array.new" => 0x06,
        ARRAY_NEW_DEFAULT = "array.new_default" => 0x07,
        ARRAY_NEW_FIXED = "array.new_fixed" => 0x08,
        ARRAY_NEW_DATA = "array.new_data" => 0x09,
        ARRAY_NEW_ELEM = "array.new_elem" => 0x0a,
        ARRAY_GET = "array.get" => 0x0b,
        ARRAY_GET_S = "array.get_s" => 0x0c,
        ARRAY_GET_U = "array.get_u" => 0x0d,
        ARRAY_SET = "array.set" => 0x0e,
        ARRAY_LEN = "array.len" => 0x0f,
        ARRAY_FILL = "array.fill" => 0x10,
        ARRAY_COPY = "array.copy" => 0x11,
        ARRAY_INIT_DATA = "array.init_data" => 0x12,
        ARRAY_INIT_ELEM = "array.init_elem" => 0x13,
        REF_TEST = "ref.test" => 0x14,
        REF_TEST_NULL = "ref.test_null" => 0x15,
        REF_CAST = "ref.cast" => 0x16,
        REF_CAST_NULL = "ref.cast_null" => 0x17,
        BR_ON_CAST = "br_on_cast" => 0x18,
        BR_ON_CAST_FAIL = "br_on_cast_fail" => 0x19,
        ANY_CONVERT_EXTERN = "any.convert_extern" => 0x1a,
        EXTERN_CONVERT_ANY = "extern.convert_any" => 0x1b,
        REF_I31 = "ref.i31" => 0x1c,
        I31_GET_S = "i31.get_s" => 0x1d,
        I31_GET_U = "i31.get_u" => 0x1e,
    }
}

prefixed_opcodes! {
    /// Saturating truncation, bulk memory and table instructions.
    numeric = 0xfc, {
        I32_TRUNC_SAT_F32_S = "i32.trunc_sat_f32_s" => 0x00,
        I32_TRUNC_SAT_F32_U = "i32.trunc_sat_f32_u" => 0x01,
        I32_TRUNC_SAT_F64_S = "i32.trunc_sat_f64_s" => 0x02,
        I32_TRUNC_SAT_F64_U = "i32.trunc_sat_f64_u" => 0x03,
        I64_TRUNC_SAT_F32_S = "i64.trunc_sat_f32_s" => 0x04,
        I64_TRUNC_SAT_F32_U = "i64.trunc_sat_f32_u" => 0x05,
        I64_TRUNC_SAT_F64_S = "i64.trunc_sat_f64_s" => 0x06,
        I64_TRUNC_SAT_F64_U = "i64.trunc_sat_f64_u" => 0x07,
        MEMORY_INIT = "memory.init" => 0x08,
        DATA_DROP = "data.drop" => 0x09,
        MEMORY_COPY = "memory.copy" => 0x0a,
        MEMORY_FILL = "memory.fill" => 0x0b,
        TABLE_INIT = "table.init" => 0x0c,
        ELEM_DROP = "elem.drop" => 0x0d,
        TABLE_COPY = "table.copy" => 0x0e,
        TABLE_GROW = "table.grow" => 0x0f,
        TABLE_SIZE = "table.size" => 0x10,
        TABLE_FILL = "table.fill" => 0x11,
    }
}

prefixed_opcodes! {
    /// 128-bit SIMD instructions. Only the commonly used part of the space.
    simd = 0xfd, {
        V128_LOAD = "v128.load" => 0x00,
        V128_LOAD8X8_S = "v128.load8x8_s" => 0x01,
        V128_LOAD8X8_U = "v128.load8x8_u" => 0x02,
        V128_LOAD16X4_S = "v128.load16x4_s" => 0x03,
        V128_LOAD16X4_U = "v128.load16x4_u" => 0x04,
        V128_LOAD32X2_S = "v128.load32x2_s" => 0x05,
        V128_LOAD32X2_U = "v128.load32x2_u" => 0x06,
        V128_LOAD8_SPLAT = "v128.load8_splat" => 0x07,
        V128_LOAD16_SPLAT = "v128.load16_splat" => 0x08,
        V128_LOAD32_SPLAT = "v128.load32_splat" => 0x09,
        V128_LOAD64_SPLAT = "v128.load64_splat" => 0x0a,
        V128_STORE = "v128.store" => 0x0b,
        V128_CONST = "v128.const" => 0x0c,
        I8X16_SHUFFLE = "i8x16.shuffle" => 0x0d,
        I8X16_SWIZZLE = "i8x16.swizzle" => 0x0e,
        I8X16_SPLAT = "i8x16.splat" => 0x0f,
        I16X8_SPLAT = "i16x8.splat" => 0x10,
        I32X4_SPLAT = "i32x4.splat" => 0x11,
        I64X2_SPLAT = "i64x2.splat" => 0x12,
        F32X4_SPLAT = "f32x4.splat" => 0x13,
        F64X2_SPLAT = "f64x2.splat" => 0x14,
        I8X16_EXTRACT_LANE_S = "i8x16.extract_lane_s" => 0x15,
        I8X16_EXTRACT_LANE_U = "i8x16.extract_lane_u" => 0x16,
        I8X16_REPLACE_LANE = "i8x16.replace_lane" => 0x17,
        I16X8_EXTRACT_LANE_S = "i16x8.extract_lane_s" => 0x18,
        I16X8_EXTRACT_LANE_U = "i16x8.extract_lane_u" => 0x19,
        I16X8_REPLACE_LANE = "i16x8.replace_lane" => 0x1a,
        I32X4_EXTRACT_LANE = "i32x4.extract_lane" => 0x1b,
        I32X4_REPLACE_LANE = "i32x4.replace_lane" => 0x1c,
        I64X2_EXTRACT_LANE = "i64x2.extract_lane" => 0x1d,
        I64X2_REPLACE_LANE = "i64x2.replace_lane" => 0x1e,
        F32X4_EXTRACT_LANE = "f32x4.extract_lane" => 0x1f,
        F32X4_REPLACE_LANE = "f32x4.replace_lane" => 0x20,
        F64X2_EXTRACT_LANE = "f64x2.extract_lane" => 0x21,
        F64X2_REPLACE_LANE = "f64x2.replace_lane" => 0x22,
        I8X16_EQ = "i8x16.eq" => 0x23,
        I16X8_EQ = "i16x8.eq" => 0x2d,
        I32X4_EQ = "i32x4.eq" => 0x37,
        F32X4_EQ = "f32x4.eq" => 0x41,
        F64X2_EQ = "f64x2.eq" => 0x47,
        V128_NOT = "v128.not" => 0x4d,
        V128_AND = "v128.and" => 0x4e,
        V128_ANDNOT = "v128.andnot" => 0x4f,
        V128_OR = "v128.or" => 0x50,
        V128_XOR = "v128.xor" => 0x51,
        V128_BITSELECT = "v128.bitselect" => 0x52,
        V128_ANY_TRUE = "v128.any_true" => 0x53,
        I8X16_ALL_TRUE = "i8x16.all_true" => 0x63,
        I8X16_ADD = "i8x16.add" => 0x6e,
        I16X8_ALL_TRUE = "i16x8.all_true" => 0x83,
        I16X8_ADD = "i16x8.add" => 0x8e,
        I32X4_ALL_TRUE = "i32x4.all_true" => 0xa3,
        I32X4_ADD = "i32x4.add" => 0xae,
        I32X4_SUB = "i32x4.sub" => 0xb1,
        I32X4_MUL = "i32x4.mul" => 0xb5,
        I64X2_ALL_TRUE = "i64x2.all_true" => 0xc3,
        I64X2_ADD = "i64x2.add" => 0xce,
        F32X4_ADD = "f32x4.add" => 0xe4,
        F32X4_SUB = "f32x4.sub" => 0xe5,
        F32X4_MUL = "f32x4.mul" => 0xe6,
        F32X4_DIV = "f32x4.div" => 0xe7,
        F32X4_MIN = "f32x4.min" => 0xe8,
        F32X4_MAX = "f32x4.max" => 0xe9,
        F64X2_ADD = "f64x2.add" => 0xf0,
        F64X2_SUB = "f64x2.sub" => 0xf1,
        F64X2_MUL = "f64x2.mul" => 0xf2,
        F64X2_DIV = "f64x2.div" => 0xf3,
        F64X2_MIN = "f64x2.min" => 0xf4,
        F64X2_MAX = "f64x2.max" => 0xf5,
    }
}

prefixed_opcodes! {
    /// Shared memory atomics.
    atomic = 0xfe, {
        MEMORY_ATOMIC_NOTIFY = "memory.atomic.notify" => 0x00,
        MEMORY_ATOMIC_WAIT32 = "memory.atomic.wait32" => 0x01,
        MEMORY_ATOMIC_WAIT64 = "memory.atomic.wait64" => 0x02,
        ATOMIC_FENCE = "atomic.fence" => 0x03,
        I32_ATOMIC_LOAD = "i32.atomic.load" => 0x10,
        I64_ATOMIC_LOAD = "i64.atomic.load" => 0x11,
        I32_ATOMIC_LOAD8_U = "i32.atomic.load8_u" => 0x12,
        I32_ATOMIC_LOAD16_U = "i32.atomic.load16_u" => 0x13,
        I64_ATOMIC_LOAD8_U = "i64.atomic.load8_u" => 0x14,
        I64_ATOMIC_LOAD16_U = "i64.atomic.load16_u" => 0x15,
        I64_ATOMIC_LOAD32_U = "i64.atomic.load32_u" => 0x16,
        I32_ATOMIC_STORE = "i32.atomic.store" => 0x17,
        I64_ATOMIC_STORE = "i64.atomic.store" => 0x18,
        I32_ATOMIC_STORE8 = "i32.atomic.store8" => 0x19,
        I32_ATOMIC_STORE16 = "i32.atomic.store16" => 0x1a,
        I64_ATOMIC_STORE8 = "i64.atomic.store8" => 0x1b,
        I64_ATOMIC_STORE16 = "i64.atomic.store16" => 0x1c,
        I64_ATOMIC_STORE32 = "i64.atomic.store32" => 0x1d,
        I32_ATOMIC_RMW_ADD = "i32.atomic.rmw.add" => 0x1e,
        I64_ATOMIC_RMW_ADD = "i64.atomic.rmw.add" => 0x1f,
        I32_ATOMIC_RMW8_ADD_U = "i32.atomic.rmw8.add_u" => 0x20,
        I32_ATOMIC_RMW16_ADD_U = "i32.atomic.rmw16.add_u" => 0x21,
        I64_ATOMIC_RMW8_ADD_U = "i64.atomic.rmw8.add_u" => 0x22,
        I64_ATOMIC_RMW16_ADD_U = "i64.atomic.rmw16.add_u" => 0x23,
        I64_ATOMIC_RMW32_ADD_U = "i64.atomic.rmw32.add_u" => 0x24,
        I32_ATOMIC_RMW_SUB = "i32.atomic.rmw.sub" => 0x25,
        I64_ATOMIC_RMW_SUB = "i64.atomic.rmw.sub" => 0x26,
        I32_ATOMIC_RMW8_SUB_U = "i32.atomic.rmw8.sub_u" => 0x27,
        I32_ATOMIC_RMW16_SUB_U = "i32.atomic.rmw16.sub_u" => 0x28,
        I64_ATOMIC_RMW8_SUB_U = "i64.atomic.rmw8.sub_u" => 0x29,
        I64_ATOMIC_RMW16_SUB_U = "i64.atomic.rmw16.sub_u" => 0x2a,
        I64_ATOMIC_RMW32_SUB_U = "i64.atomic.rmw32.sub_u" => 0x2b,
        I32_ATOMIC_RMW_AND = "i32.atomic.rmw.and" => 0x2c,
        I64_ATOMIC_RMW_AND = "i64.atomic.rmw.and" => 0x2d,
        I32_ATOMIC_RMW8_AND_U = "i32.atomic.rmw8.and_u" => 0x2e,
        I32_ATOMIC_RMW16_AND_U = "i32.atomic.rmw16.and_u" => 0x2f,
        I64_ATOMIC_RMW8_AND_U = "i64.atomic.rmw8.and_u" => 0x30,
        I64_ATOMIC_RMW16_AND_U = "i64.atomic.rmw16.and_u" => 0x31,
        I64_ATOMIC_RMW32_AND_U = "i64.atomic.rmw32.and_u" => 0x32,
        I32_ATOMIC_RMW_OR = "i32.atomic.rmw.or" => 0x33,
        I64_ATOMIC_RMW_OR = "i64.atomic.rmw.or" => 0x34,
        I32_ATOMIC_RMW8_OR_U = "i32.atomic.rmw8.or_u" => 0x35,
        I32_ATOMIC_RMW16_OR_U = "i32.atomic.rmw16.or_u" => 0x36,
        I64_ATOMIC_RMW8_OR_U = "i64.atomic.rmw8.or_u" => 0x37,
        I64_ATOMIC_RMW16_OR_U = "i64.atomic.rmw16.or_u" => 0x38,
        I64_ATOMIC_RMW32_OR_U = "i64.atomic.rmw32.or_u" => 0x39,
        I32_ATOMIC_RMW_XOR = "i32.atomic.rmw.xor" => 0x3a,
        I64_ATOMIC_RMW_XOR = "i64.atomic.rmw.xor" => 0x3b,
        I32_ATOMIC_RMW8_XOR_U = "i32.atomic.rmw8.xor_u" => 0x3c,
        I32_ATOMIC_RMW16_XOR_U = "i32.atomic.rmw16.xor_u" => 0x3d,
        I64_ATOMIC_RMW8_XOR_U = "i64.atomic.rmw8.xor_u" => 0x3e,
        I64_ATOMIC_RMW16_XOR_U = "i64.atomic.rmw16.xor_u" => 0x3f,
        I64_ATOMIC_RMW32_XOR_U = "i64.atomic.rmw32.xor_u" => 0x40,
        I32_ATOMIC_RMW_XCHG = "i32.atomic.rmw.xchg" => 0x41,
        I64_ATOMIC_RMW_XCHG = "i64.atomic.rmw.xchg" => 0x42,
        I32_ATOMIC_RMW8_XCHG_U = "i32.atomic.rmw8.xchg_u" => 0x43,
        I32_ATOMIC_RMW16_XCHG_U = "i32.atomic.rmw16.xchg_u" => 0x44,
        I64_ATOMIC_RMW8_XCHG_U = "i64.atomic.rmw8.xchg_u" => 0x45,
        I64_ATOMIC_RMW16_XCHG_U = "i64.atomic.rmw16.xchg_u" => 0x46,
        I64_ATOMIC_RMW32_XCHG_U = "i64.atomic.rmw32.xchg_u" => 0x47,
        I32_ATOMIC_RMW_CMPXCHG = "i32.atomic.rmw.cmpxchg" => 0x48,
        I64_ATOMIC_RMW_CMPXCHG = "i64.atomic.rmw.cmpxchg" => 0x49,
        I32_ATOMIC_RMW8_CMPXCHG_U = "i32.atomic.rmw8.cmpxchg_u" => 0x4a,
        I32_ATOMIC_RMW16_CMPXCHG_U = "i32.atomic.rmw16.cmpxchg_u" => 0x4b,
        I64_ATOMIC_RMW8_CMPXCHG_U = "i64.atomic.rmw8.cmpxchg_u" => 0x4c,
        I64_ATOMIC_RMW16_CMPXCHG_U = "i64.atomic.rmw16.cmpxchg_u" => 0x4d,
        I64_ATOMIC_RMW32_CMPXCHG_U = "i64.atomic.rmw32.cmpxchg_u" => 0x4e,
    }
}

/// An opcode, possibly from a prefixed space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Byte(u8),
    Prefixed {
        prefix: u8,
        sub: u32,
    },
}

impl Opcode {
    pub fn encode(&self, w: &mut Vec<u8>) {
        match *self {
            Opcode::Byte(b) => w.push(b),
            Opcode::Prefixed { prefix, sub } => {
                w.push(prefix);
                leb128::write_unsigned(w, u64::from(sub));
            },
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = Vec::with_capacity(1 + leb128::MAX_LEN_32);
        self.encode(&mut w);
        w
    }
}

lazy_static! {
    static ref BY_MNEMONIC: HashMap<&'static str, Opcode> = {
        let mut map = HashMap::new();
        for &(mnemonic, b) in SINGLE_BYTE {
            map.insert(mnemonic, Opcode::Byte(b));
        }
        let spaces: [(u8, &[(&'static str, u32)]); 4] = [
            (gc::PREFIX, gc::TABLE),
            (numeric::PREFIX, numeric::TABLE),
            (simd::PREFIX, simd::TABLE),
            (atomic::PREFIX, atomic::TABLE),
        ];
        for &(prefix, table) in spaces.iter() {
            for &(mnemonic, sub) in table {
                map.insert(mnemonic, Opcode::Prefixed { prefix, sub });
            }
        }
        map
    };
}

/// Looks an opcode up by its text format mnemonic, e.g. `"local.get"` or
/// `"struct.new"`.
pub fn lookup(mnemonic: &str) -> Option<Opcode> {
    BY_MNEMONIC.get(mnemonic).cloned()
}

pub fn i32_const(value: i32) -> Vec<u8> {
    let mut w = vec![I32_CONST];
    leb128::write_signed(&mut w, i64::from(value));
    w
}

pub fn i64_const(value: i64) -> Vec<u8> {
    let mut w = vec![I64_CONST];
    leb128::write_signed(&mut w, value);
    w
}

pub fn f32_const(value: f32) -> Vec<u8> {
    let mut w = vec![F32_CONST];
    w.extend_from_slice(&value.to_bits().to_le_bytes());
    w
}

pub fn f64_const(value: f64) -> Vec<u8> {
    let mut w = vec![F64_CONST];
    w.extend_from_slice(&value.to_bits().to_le_bytes());
    w
}

pub fn gc_instr(sub: u32) -> Vec<u8> {
    Opcode::Prefixed { prefix: gc::PREFIX, sub }.to_bytes()
}

pub fn numeric_instr(sub: u32) -> Vec<u8> {
    Opcode::Prefixed { prefix: numeric::PREFIX, sub }.to_bytes()
}

pub fn simd_instr(sub: u32) -> Vec<u8> {
    Opcode::Prefixed { prefix: simd::PREFIX, sub }.to_bytes()
}

pub fn atomic_instr(sub: u32) -> Vec<u8> {
    Opcode::Prefixed { prefix: atomic::PREFIX, sub }.to_bytes()
}

#[cfg(test)]
mod test {
    use super::*;

    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    #[test]
    fn mnemonics_resolve() {
        let expected = hashmap! {
            "unreachable" => Opcode::Byte(0x00),
            "i32.const" => Opcode::Byte(0x41),
            "local.get" => Opcode::Byte(0x20),
            "call" => Opcode::Byte(0x10),
            "ref.func" => Opcode::Byte(0xd2),
            "struct.new" => Opcode::Prefixed { prefix: 0xfb, sub: 0x00 },
            "ref.i31" => Opcode::Prefixed { prefix: 0xfb, sub: 0x1c },
            "memory.copy" => Opcode::Prefixed { prefix: 0xfc, sub: 0x0a },
            "i32x4.splat" => Opcode::Prefixed { prefix: 0xfd, sub: 0x11 },
            "i64.atomic.rmw32.cmpxchg_u" => Opcode::Prefixed { prefix: 0xfe, sub: 0x4e },
        };
        for (mnemonic, opcode) in expected {
            assert_eq!(lookup(mnemonic), Some(opcode), "{}", mnemonic);
        }
        assert_eq!(lookup("i32.frobnicate"), None);
    }

    #[test]
    fn mnemonics_are_unique() {
        let total = SINGLE_BYTE.len()
            + gc::TABLE.len()
            + numeric::TABLE.len()
            + simd::TABLE.len()
            + atomic::TABLE.len();
        assert_eq!(BY_MNEMONIC.len(), total);
    }

    #[test]
    fn wide_sub_opcodes_take_two_bytes() {
        assert_eq!(simd_instr(simd::F32X4_MIN), vec![0xfd, 0xe8, 0x01]);
        assert_eq!(gc_instr(gc::ARRAY_LEN), vec![0xfb, 0x0f]);
        assert_eq!(numeric_instr(numeric::TABLE_SIZE), vec![0xfc, 0x10]);
        assert_eq!(atomic_instr(atomic::ATOMIC_FENCE), vec![0xfe, 0x03]);
    }

    #[test]
    fn constant_helpers() {
        assert_eq!(i32_const(42), vec![0x41, 0x2a]);
        assert_eq!(i32_const(-1), vec![0x41, 0x7f]);
        assert_eq!(i64_const(128), vec![0x42, 0x80, 0x01]);
        assert_eq!(f32_const(1.0), vec![0x43, 0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(f64_const(0.0), vec![0x44, 0, 0, 0, 0, 0, 0, 0, 0]);
    }
}
