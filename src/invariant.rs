//! Debug-only invariant assertion helpers.
//!
//! Lists, trees and graphs call these from `validate_invariants` so structural
//! invariants stay explicit while release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Structural invariant violated: {}", message);
}
