/// Compute effective limit: global flag, else configured default.
///
/// A zero limit is treated as unset.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.filter(|limit| *limit > 0).unwrap_or(configured)
}
