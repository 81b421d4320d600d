//! Binds functions and methods of every supported arity.
//!
//! Each case binds `value_i = 10 * weight_i` and checks a weighted sum, which
//! only comes out right when every argument reaches its own parameter.

macro_rules! arity_case {
    ($name:ident; $($arg:ident: $weight:literal),*) => {
        mod $name {
            use std::cell::RefCell;

            use binder_core::Caller;

            const WEIGHTS: &[i64] = &[$($weight),*];

            struct Probe {
                offset: i64,
                calls: usize,
            }

            impl Probe {
                fn record(&mut self, $($arg: i64),*) -> i64 {
                    self.calls += 1;
                    self.offset $(+ $weight * $arg)*
                }

                fn peek(&self, $($arg: i64),*) -> i64 {
                    self.offset $(+ $weight * $arg)*
                }
            }

            fn weighted($($arg: i64),*) -> i64 {
                0 $(+ $weight * $arg)*
            }

            fn expected() -> i64 {
                WEIGHTS.iter().map(|weight| weight * weight * 10).sum()
            }

            #[test]
            fn static_binding() {
                let mut caller = Caller::create_static(($($weight * 10_i64,)*), weighted);

                assert_eq!(caller.parameters(), WEIGHTS.len());
                assert_eq!(caller.call(), expected());

                if let Some(last) = WEIGHTS.len().checked_sub(1) {
                    caller.set_parameter(last, 0_i64);
                    assert_eq!(caller.call(), expected() - WEIGHTS[last] * WEIGHTS[last] * 10);
                }
            }

            #[test]
            fn method_binding() {
                let probe = RefCell::new(Probe { offset: 7, calls: 0 });
                let caller = Caller::create(&probe, ($($weight * 10_i64,)*), Probe::record);

                assert_eq!(caller.parameters(), WEIGHTS.len());
                assert_eq!(caller.call(), 7 + expected());
                assert_eq!(caller.clone().call(), 7 + expected());
                assert_eq!(probe.borrow().calls, 2);
            }

            #[test]
            fn const_method_binding() {
                let probe = Probe { offset: -3, calls: 0 };
                let caller = Caller::create_const(&probe, ($($weight * 10_i64,)*), Probe::peek);

                assert_eq!(caller.parameters(), WEIGHTS.len());
                assert_eq!(caller.call(), expected() - 3);
            }
        }
    };
}

arity_case!(arity_00;);
arity_case!(arity_01; a1: 1);
arity_case!(arity_02; a1: 1, a2: 2);
arity_case!(arity_03; a1: 1, a2: 2, a3: 3);
arity_case!(arity_04; a1: 1, a2: 2, a3: 3, a4: 4);
arity_case!(arity_05; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5);
arity_case!(arity_06; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6);
arity_case!(arity_07; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7);
arity_case!(arity_08; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8);
arity_case!(arity_09; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9);
arity_case!(arity_10; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10);
arity_case!(arity_11; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11);
arity_case!(arity_12; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12);
arity_case!(arity_13; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13);
arity_case!(arity_14; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14);
arity_case!(arity_15; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15);
arity_case!(arity_16; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15, a16: 16);
arity_case!(arity_17; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15, a16: 16, a17: 17);
arity_case!(arity_18; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15, a16: 16, a17: 17, a18: 18);
arity_case!(arity_19; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15, a16: 16, a17: 17, a18: 18, a19: 19);
arity_case!(arity_20; a1: 1, a2: 2, a3: 3, a4: 4, a5: 5, a6: 6, a7: 7, a8: 8, a9: 9, a10: 10, a11: 11, a12: 12, a13: 13, a14: 14, a15: 15, a16: 16, a17: 17, a18: 18, a19: 19, a20: 20);
