//! Integer helpers. Both operations are total over `i32`: overflow wraps.

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}
