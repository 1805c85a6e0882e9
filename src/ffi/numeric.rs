//! Exported integer functions.
//!
//! Both functions are pure and total: the product wraps on overflow
//! instead of trapping. They must not log or touch any global state.

use crate::arith;

/// Returns `input * 2`, wrapping on `i32` overflow.
#[no_mangle]
pub extern "C" fn double_input(input: i32) -> i32 {
    arith::double(input)
}

/// Returns `input * 3`, wrapping on `i32` overflow.
#[no_mangle]
pub extern "C" fn third_input(input: i32) -> i32 {
    arith::triple(input)
}
