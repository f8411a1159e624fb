//! Branch-likelihood hints.
//!
//! Both functions return their argument unchanged. The branch that is not
//! expected calls an empty `#[cold]` function, which steers code layout on
//! stable Rust without changing behavior.

#[cold]
#[inline(never)]
fn cold_path() {}

/// Marks `condition` as usually true.
#[inline(always)]
pub fn likely(condition: bool) -> bool {
    if !condition {
        cold_path();
    }
    condition
}

/// Marks `condition` as usually false.
#[inline(always)]
pub fn unlikely(condition: bool) -> bool {
    if condition {
        cold_path();
    }
    condition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_identity() {
        assert!(likely(true));
        assert!(!likely(false));
        assert!(unlikely(true));
        assert!(!unlikely(false));
    }
}
