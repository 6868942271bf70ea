//! Demonstration driver: declares the caller's locals and calls a swap.

use tracing::debug;

use crate::core::swap::{swap_by_pointer, swap_by_reference, swap_by_value};
use crate::core::types::{Demonstration, Mechanism, Pair};

/// Run one demonstration for `mechanism` starting from `initial`.
#[allow(unsafe_code)]
pub fn run(mechanism: Mechanism, initial: Pair) -> Demonstration {
    let mut a = initial.a;
    let mut b = initial.b;

    let in_callee = match mechanism {
        Mechanism::Value => swap_by_value(a, b),
        // SAFETY: both pointers come from distinct live locals in this frame
        // and no borrow of either is held across the call.
        Mechanism::Pointer => unsafe { swap_by_pointer(&raw mut a, &raw mut b) },
        Mechanism::Reference => swap_by_reference(&mut a, &mut b),
    };

    let demo = Demonstration {
        mechanism,
        before: initial,
        in_callee,
        after: Pair::new(a, b),
    };
    debug!(
        %mechanism,
        before = ?demo.before,
        in_callee = ?demo.in_callee,
        after = ?demo.after,
        swapped = demo.swapped(),
        "swap demonstrated"
    );
    demo
}

/// Run every mechanism in `mechanisms`, in order, from the same initial pair.
pub fn run_all(mechanisms: &[Mechanism], initial: Pair) -> Vec<Demonstration> {
    mechanisms
        .iter()
        .map(|&mechanism| run(mechanism, initial))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_demo_is_not_visible_to_caller() {
        let demo = run(Mechanism::Value, Pair::default());
        assert_eq!(demo.in_callee, Pair::new(2, 5));
        assert_eq!(demo.after, Pair::new(5, 2));
        assert!(!demo.swapped());
    }

    #[test]
    fn pointer_and_reference_demos_swap() {
        for mechanism in [Mechanism::Pointer, Mechanism::Reference] {
            let demo = run(mechanism, Pair::default());
            assert_eq!(demo.in_callee, Pair::new(2, 5), "{mechanism}");
            assert_eq!(demo.after, Pair::new(2, 5), "{mechanism}");
            assert!(demo.swapped(), "{mechanism}");
        }
    }

    #[test]
    fn run_all_preserves_order() {
        let demos = run_all(&[Mechanism::Reference, Mechanism::Value], Pair::new(1, 3));
        let mechanisms: Vec<Mechanism> = demos.iter().map(|demo| demo.mechanism).collect();
        assert_eq!(mechanisms, vec![Mechanism::Reference, Mechanism::Value]);
        assert!(demos.iter().all(|demo| demo.before == Pair::new(1, 3)));
    }
}
