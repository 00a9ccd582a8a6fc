use uint256::{ErrorKind, U256, add, checked_add};

use core::ops::{Rem, Shl};
use num_bigint::BigUint;
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const F: u32 = 0xFFFF_FFFF;

fn to_biguint(v: U256) -> BigUint {
    BigUint::from_bytes_le(&v.to_le_bytes())
}

fn modulus() -> BigUint {
    BigUint::one().shl(256u32)
}

/// Random values biased towards all-zero and all-one limbs, so carry and
/// borrow chains show up often.
fn sample(prng: &mut ChaCha20Rng) -> U256 {
    U256::from_limbs(std::array::from_fn(|_| match prng.gen_range(0..4) {
        0 => 0,
        1 => F,
        _ => prng.r#gen(),
    }))
}

#[test]
fn add_reference_values() {
    assert_eq!(add(U256::ZERO, U256::ZERO), (U256::ZERO, false));
    assert_eq!(add(U256::ZERO, U256::ONE), (U256::ONE, false));
    assert_eq!(add(U256::ONE, U256::ONE), (U256::from(2u32), false));
    assert_eq!(add(U256::MAX, U256::ONE), (U256::ZERO, true));
    assert_eq!(add(U256::MAX, U256::MAX), (U256::MAX - U256::ONE, true));
}

#[test]
fn add_propagates_chained_carries() {
    let a = U256::from_limbs([F, F, F, F, 0, 0, 0, 0]);
    let b = U256::from_limbs([1, F, F, F, 0, 0, 0, 0]);

    let (sum, overflow) = add(a, b);

    assert_eq!(sum.limbs(), [0, F, F, F, 1, 0, 0, 0]);
    assert!(!overflow);
}

#[test]
fn add_carry_runs_through_every_limb() {
    let a = U256::from_limbs([F, F, F, F, F, F, F, 0]);

    let (sum, overflow) = add(a, U256::ONE);

    assert_eq!(sum.limbs(), [0, 0, 0, 0, 0, 0, 0, 1]);
    assert!(!overflow);
}

#[test]
fn add_wraps_on_top_limb_overflow() {
    let a = U256::from_limbs([F, F, F, F, 0, 0, 0, F]);
    let b = U256::from_limbs([1, F, F, F, 0, 0, 0, 1]);

    let (sum, overflow) = add(a, b);

    assert_eq!(sum.limbs(), [0, F, F, F, 1, 0, 0, 0]);
    assert!(overflow);
    assert_eq!(a + b, sum);
}

#[test]
fn checked_add_fails_instead_of_wrapping() {
    assert_eq!(checked_add(U256::MAX, U256::ONE), Err(ErrorKind::Overflow));
    assert_eq!(checked_add(U256::MAX, U256::ZERO), Ok(U256::MAX));
    assert_eq!(
        checked_add(U256::from(40u32), U256::from(2u32)),
        Ok(U256::from(42u32))
    );
}

#[test]
fn add_identity_commutativity_associativity() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..200 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);
        let c = sample(&mut prng);

        assert_eq!(add(a, U256::ZERO), (a, false));
        assert_eq!(add(a, b), add(b, a));
        assert_eq!(add(add(a, b).0, c).0, add(a, add(b, c).0).0);
    }
}

#[test]
fn add_matches_biguint() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..500 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);

        let exact = to_biguint(a) + to_biguint(b);
        let (sum, overflow) = a.overflowing_add(b);

        assert_eq!(to_biguint(sum), exact.clone().rem(modulus()));
        assert_eq!(overflow, exact >= modulus());
    }
}

#[test]
fn sub_reference_values() {
    assert_eq!(U256::ZERO - U256::ZERO, U256::ZERO);
    assert_eq!(U256::ONE - U256::ONE, U256::ZERO);
    assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
    assert_eq!(U256::ONE - U256::MAX, U256::from(2u32));

    let a = U256::from_limbs([0, F, F, F, 0, 0, 0, F]);
    let b = U256::from_limbs([1, F, F, F, 0, 0, 0, 1]);
    assert_eq!((a - b).limbs(), [F, F, F, F, F, F, F, 0xFFFF_FFFD]);
}

#[test]
fn checked_sub_fails_on_underflow() {
    assert_eq!(U256::ZERO.checked_sub(U256::ONE), Err(ErrorKind::Overflow));
    assert_eq!(U256::MAX.checked_sub(U256::MAX), Ok(U256::ZERO));
    assert_eq!(U256::ONE.overflowing_sub(U256::MAX), (U256::from(2u32), true));
}

#[test]
fn sub_matches_biguint() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);

    for _ in 0..500 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);

        let (diff, borrow) = a.overflowing_sub(b);

        assert_eq!(borrow, b > a);
        assert_eq!(
            to_biguint(diff),
            (to_biguint(a) + modulus() - to_biguint(b)).rem(modulus())
        );
        assert_eq!(diff + b, a);
    }
}

#[test]
fn negate_is_twos_complement() {
    assert_eq!(U256::ZERO.wrapping_neg(), U256::ZERO);
    assert_eq!(U256::ONE.wrapping_neg(), U256::MAX);
    assert_eq!(U256::MAX.wrapping_neg(), U256::ONE);

    let v = U256::from_limbs([1, F, F, F, 0, 0, 0, 1]);
    assert_eq!(
        v.wrapping_neg().limbs(),
        [F, 0, 0, 0, F, F, F, 0xFFFF_FFFE]
    );

    let mut prng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..100 {
        let a = sample(&mut prng);
        assert_eq!(a + a.wrapping_neg(), U256::ZERO);
    }
}

#[test]
fn mul_reference_values() {
    assert_eq!(U256::ONE * U256::ONE, U256::ONE);
    assert_eq!(U256::ONE * U256::ZERO, U256::ZERO);
    assert_eq!(U256::from(2u32) * U256::from(2u32), U256::from(4u32));

    let left = U256::from_hex("fc42c691d6284761fb49dd54f3a13eb").unwrap();
    let right = U256::from_hex("4cfd2c7d8790c50c280ff0ff77617a8e").unwrap();
    let product = U256::from_hex(
        "4bdd4cc8b6067f7617c05917f828d17a26046ba5f436cb7df595f6c68c00a5a",
    )
    .unwrap();

    assert_eq!(left.overflowing_mul(right), (product, false));
}

#[test]
fn mul_overflow_truncates_and_reports() {
    let doubled = U256::MAX.overflowing_mul(U256::from(2u32));

    assert_eq!(doubled, (U256::MAX - U256::ONE, true));
    assert_eq!(U256::MAX.checked_mul(U256::from(2u32)), Err(ErrorKind::Overflow));
    assert_eq!(U256::MAX.checked_mul(U256::ONE), Ok(U256::MAX));

    let high = U256::ONE << 128;
    assert_eq!(high.overflowing_mul(high), (U256::ZERO, true));
    assert_eq!(high.checked_mul(U256::ONE << 127), Ok(U256::ONE << 255));
}

#[test]
fn mul_matches_biguint() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);

    for _ in 0..300 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);

        let exact = to_biguint(a) * to_biguint(b);
        let (product, overflow) = a.overflowing_mul(b);

        assert_eq!(to_biguint(product), exact.clone().rem(modulus()));
        assert_eq!(overflow, exact >= modulus());
    }
}

#[test]
fn shl_matches_biguint() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);

    for _ in 0..300 {
        let a = sample(&mut prng);
        let shift = prng.gen_range(0..256u32);

        assert_eq!(
            to_biguint(a << shift),
            (to_biguint(a) << shift).rem(modulus())
        );
        assert_eq!(to_biguint(a >> shift), to_biguint(a) >> shift);
    }
}

#[test]
fn assign_operators_wrap() {
    let mut v = U256::MAX;
    v += U256::ONE;
    assert_eq!(v, U256::ZERO);

    v -= U256::ONE;
    assert_eq!(v, U256::MAX);

    v *= U256::from(2u32);
    assert_eq!(v, U256::MAX - U256::ONE);
}
