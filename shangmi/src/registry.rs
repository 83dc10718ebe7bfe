//! Process-wide SM2 curve domain.

use crate::{CurveDomain, Sm2Engine, U256, build_domain_parameters};

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

static SM2_DOMAIN: LazyLock<CurveDomain<Sm2Engine>> = LazyLock::new(build_domain_parameters);

/// Shared SM2 domain.
///
/// Built on first access, exactly once even under concurrent first use; every
/// caller receives the same instance afterwards.
pub fn global_curve() -> &'static CurveDomain<Sm2Engine> {
    &SM2_DOMAIN
}

/// Base point `G` of the shared SM2 domain.
pub fn generator() -> &'static <Sm2Engine as crate::CurveEngine>::Point {
    global_curve().generator()
}

/// Order `n` of the shared SM2 domain.
pub fn order() -> &'static U256 {
    global_curve().order()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveEngine;
    use sm2::ProjectivePoint;

    #[test]
    fn same_instance() {
        assert!(core::ptr::eq(global_curve(), global_curve()));
        assert_eq!(*global_curve(), build_domain_parameters());
    }

    #[test]
    fn accessors() {
        assert_eq!(*generator(), ProjectivePoint::GENERATOR);
        assert!(Sm2Engine.is_identity(&Sm2Engine.mul(generator(), order())));
    }

    #[cfg(feature = "std")]
    #[test]
    fn concurrent_first_access() {
        let handles: std::vec::Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| global_curve() as *const _ as usize))
            .collect();

        let addresses: std::vec::Vec<usize> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
