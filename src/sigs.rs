//! Frequently used function signatures.
//!
//! Names read `<results>_<params>` with one letter per value type: `i` i32,
//! `l` i64, `f` f32, `d` f64, `r` externref, `a` funcref, `v` for nothing.

use super::*;

use crate::ValType::{F32, F64, I32, I64};

pub fn make_sig(params: &[ValType], results: &[ValType]) -> FuncType {
    FuncType::new(params, results)
}

pub fn make_sig_v_x(x: ValType) -> FuncType {
    make_sig(&[x], &[])
}

pub fn make_sig_v_xx(x: ValType) -> FuncType {
    make_sig(&[x, x], &[])
}

pub fn make_sig_r_v(r: ValType) -> FuncType {
    make_sig(&[], &[r])
}

pub fn make_sig_r_x(r: ValType, x: ValType) -> FuncType {
    make_sig(&[x], &[r])
}

pub fn make_sig_r_xx(r: ValType, x: ValType) -> FuncType {
    make_sig(&[x, x], &[r])
}

pub fn v_v() -> FuncType { make_sig(&[], &[]) }
pub fn i_v() -> FuncType { make_sig(&[], &[I32]) }
pub fn l_v() -> FuncType { make_sig(&[], &[I64]) }
pub fn f_v() -> FuncType { make_sig(&[], &[F32]) }
pub fn d_v() -> FuncType { make_sig(&[], &[F64]) }
pub fn i_i() -> FuncType { make_sig(&[I32], &[I32]) }
pub fn i_ii() -> FuncType { make_sig(&[I32, I32], &[I32]) }
pub fn i_iii() -> FuncType { make_sig(&[I32, I32, I32], &[I32]) }
pub fn i_l() -> FuncType { make_sig(&[I64], &[I32]) }
pub fn i_dd() -> FuncType { make_sig(&[F64, F64], &[I32]) }
pub fn l_l() -> FuncType { make_sig(&[I64], &[I64]) }
pub fn l_ll() -> FuncType { make_sig(&[I64, I64], &[I64]) }
pub fn f_f() -> FuncType { make_sig(&[F32], &[F32]) }
pub fn f_ff() -> FuncType { make_sig(&[F32, F32], &[F32]) }
pub fn f_d() -> FuncType { make_sig(&[F64], &[F32]) }
pub fn d_d() -> FuncType { make_sig(&[F64], &[F64]) }
pub fn d_dd() -> FuncType { make_sig(&[F64, F64], &[F64]) }
pub fn v_i() -> FuncType { make_sig(&[I32], &[]) }
pub fn v_ii() -> FuncType { make_sig(&[I32, I32], &[]) }
pub fn v_iii() -> FuncType { make_sig(&[I32, I32, I32], &[]) }
pub fn v_iiii() -> FuncType { make_sig(&[I32, I32, I32, I32], &[]) }
pub fn v_l() -> FuncType { make_sig(&[I64], &[]) }
pub fn v_f() -> FuncType { make_sig(&[F32], &[]) }
pub fn v_d() -> FuncType { make_sig(&[F64], &[]) }
pub fn v_dd() -> FuncType { make_sig(&[F64, F64], &[]) }
pub fn v_ddi() -> FuncType { make_sig(&[F64, F64, I32], &[]) }
pub fn ii_v() -> FuncType { make_sig(&[], &[I32, I32]) }
pub fn iii_v() -> FuncType { make_sig(&[], &[I32, I32, I32]) }
pub fn ii_i() -> FuncType { make_sig(&[I32], &[I32, I32]) }
pub fn iii_i() -> FuncType { make_sig(&[I32], &[I32, I32, I32]) }
pub fn ii_ii() -> FuncType { make_sig(&[I32, I32], &[I32, I32]) }
pub fn iii_ii() -> FuncType { make_sig(&[I32, I32], &[I32, I32, I32]) }
pub fn r_r() -> FuncType { make_sig(&[ValType::EXTERNREF], &[ValType::EXTERNREF]) }
pub fn a_a() -> FuncType { make_sig(&[ValType::FUNCREF], &[ValType::FUNCREF]) }
pub fn i_r() -> FuncType { make_sig(&[ValType::EXTERNREF], &[I32]) }
pub fn v_r() -> FuncType { make_sig(&[ValType::EXTERNREF], &[]) }
pub fn v_a() -> FuncType { make_sig(&[ValType::FUNCREF], &[]) }
pub fn v_rr() -> FuncType { make_sig(&[ValType::EXTERNREF, ValType::EXTERNREF], &[]) }
pub fn v_aa() -> FuncType { make_sig(&[ValType::FUNCREF, ValType::FUNCREF], &[]) }
pub fn r_v() -> FuncType { make_sig(&[], &[ValType::EXTERNREF]) }
pub fn a_v() -> FuncType { make_sig(&[], &[ValType::FUNCREF]) }
pub fn a_i() -> FuncType { make_sig(&[I32], &[ValType::FUNCREF]) }
