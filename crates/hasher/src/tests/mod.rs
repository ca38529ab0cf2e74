mod arbitrary;

mod property_buffer;

/// Number of quickcheck cases per property.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) || cfg!(feature = "test-fast") {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
