use std::fmt;
use std::ops::{Add, BitXor, Mul};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Polynomial over GF(2), the base datatype for binary field elements.
///
/// Coefficients are stored as an unbounded bit vector: bit i of `bits` is
/// the coefficient of x^i. Addition is XOR (no carries), multiplication is
/// carry-less. Neither operation reduces the result; reduction against a
/// modulus is a separate step so that raw ring arithmetic and field
/// arithmetic stay distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    bits: BigUint,
}

impl Polynomial {
    pub fn new(bits: BigUint) -> Self {
        Polynomial { bits }
    }

    pub fn from_u64(bits: u64) -> Self {
        Polynomial { bits: BigUint::from(bits) }
    }

    /// Build a polynomial from the exponents of its nonzero terms,
    /// e.g. `[4, 1, 0]` is x^4 + x + 1.
    pub fn from_exponents(exponents: &[u64]) -> Self {
        let mut bits = BigUint::zero();
        for &exponent in exponents {
            bits = &bits | &(BigUint::one() << exponent);
        }
        Polynomial { bits }
    }

    pub fn zero() -> Self {
        Polynomial { bits: BigUint::zero() }
    }

    pub fn one() -> Self {
        Polynomial { bits: BigUint::one() }
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.bits.is_one()
    }

    /// The raw coefficient bit vector.
    pub fn bits(&self) -> &BigUint {
        &self.bits
    }

    /// Degree of the polynomial; the zero polynomial has none.
    pub fn degree(&self) -> Option<u64> {
        if self.bits.is_zero() {
            None
        } else {
            Some(self.bits.bits() - 1)
        }
    }

    /// Coefficient of x^i.
    fn coefficient(&self, i: u64) -> bool {
        (&self.bits >> i).is_odd()
    }

    /// Addition in GF(2)[x] is coefficient-wise XOR; every polynomial is
    /// its own additive inverse.
    pub fn add(&self, other: &Self) -> Self {
        Polynomial { bits: &self.bits ^ &other.bits }
    }

    /// Carry-less multiplication: for each set bit i of `other`, XOR
    /// `self << i` into the accumulator. The result is not reduced.
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc = BigUint::zero();
        let mut shifted = self.bits.clone();
        let mut rest = other.bits.clone();
        while !rest.is_zero() {
            if rest.is_odd() {
                acc = &acc ^ &shifted;
            }
            shifted = &shifted << 1u32;
            rest = &rest >> 1u32;
        }
        Polynomial { bits: acc }
    }

    /// Carry-less polynomial long division, returning (quotient, remainder).
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() {
            panic!("Division by zero polynomial");
        }
        let divisor_degree = divisor.bits.bits() - 1;

        let mut remainder = self.bits.clone();
        let mut quotient = BigUint::zero();
        while !remainder.is_zero() && remainder.bits() - 1 >= divisor_degree {
            let shift = remainder.bits() - 1 - divisor_degree;
            quotient = &quotient | &(BigUint::one() << shift);
            remainder = &remainder ^ &(&divisor.bits << shift);
        }

        (Polynomial { bits: quotient }, Polynomial { bits: remainder })
    }

    /// Remainder of division by `modulus`; the result has degree strictly
    /// below degree(modulus).
    pub fn reduce(&self, modulus: &Self) -> Self {
        self.div_rem(modulus).1
    }

    /// Multiplicative inverse modulo `modulus` via the extended Euclidean
    /// algorithm over GF(2)[x]. `None` for the zero polynomial or when no
    /// inverse exists.
    pub fn invert(&self, modulus: &Self) -> Option<Self> {
        let mut r0 = self.reduce(modulus);
        if r0.is_zero() {
            return None;
        }
        let mut r1 = modulus.clone();
        let mut s0 = Polynomial::one();
        let mut s1 = Polynomial::zero();

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            r0 = std::mem::replace(&mut r1, r);
            // s0, s1 = s1, s0 + q*s1 (subtraction is XOR in GF(2)[x])
            let next = Polynomial::add(&s0, &Polynomial::mul(&q, &s1));
            s0 = std::mem::replace(&mut s1, next);
        }

        if !r0.is_one() {
            return None;
        }
        Some(s0.reduce(modulus))
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::add(&self, &other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        Polynomial::mul(&self, &other)
    }
}

impl BitXor for &Polynomial {
    type Output = Polynomial;

    fn bitxor(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = match self.degree() {
            None => return write!(f, "0"),
            Some(degree) => degree,
        };

        let mut first = true;
        for i in (0..=degree).rev() {
            if !self.coefficient(i) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_is_xor() {
        let a = Polynomial::from_u64(0b011); // x + 1
        let b = Polynomial::from_u64(0b101); // x^2 + 1

        let sum = &a + &b;
        assert_eq!(sum, Polynomial::from_u64(0b110)); // x^2 + x

        // Addition is self-inverse
        assert!((&a + &a).is_zero());
    }

    #[test]
    fn test_carry_less_multiplication() {
        // (x + 1)(x^2 + 1) = x^3 + x^2 + x + 1
        let a = Polynomial::from_u64(0b011);
        let b = Polynomial::from_u64(0b101);
        assert_eq!(&a * &b, Polynomial::from_u64(0b1111));

        // Multiplication by x is a shift
        let x = Polynomial::from_u64(0b10);
        assert_eq!(&a * &x, Polynomial::from_u64(0b110));

        assert!((&a * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_division_with_remainder() {
        // x^4 + x + 1 divided by x: quotient x^3 + 1, remainder 1
        let dividend = Polynomial::from_u64(0b10011);
        let divisor = Polynomial::from_u64(0b10);

        let (quotient, remainder) = dividend.div_rem(&divisor);
        assert_eq!(quotient, Polynomial::from_u64(0b1001));
        assert_eq!(remainder, Polynomial::one());

        // Degree of a remainder is always below the divisor's
        let (_, r) = Polynomial::from_u64(0b111_0101).div_rem(&Polynomial::from_u64(0b10011));
        assert!(r.degree().map_or(true, |d| d < 4));
    }

    #[test]
    fn test_reduction() {
        // x^4 mod (x^4 + x + 1) = x + 1
        let modulus = Polynomial::from_u64(0b10011);
        let reduced = Polynomial::from_u64(0b10000).reduce(&modulus);
        assert_eq!(reduced, Polynomial::from_u64(0b11));

        // Already-reduced values pass through
        let small = Polynomial::from_u64(0b101);
        assert_eq!(small.reduce(&modulus), small);
    }

    #[test]
    fn test_inverse() {
        // In GF(2^4) with modulus x^4 + x + 1: x * (x^3 + 1) = x^4 + x = 1
        let modulus = Polynomial::from_u64(0b10011);
        let x = Polynomial::from_u64(0b10);

        let inverse = x.invert(&modulus).unwrap();
        assert_eq!(inverse, Polynomial::from_u64(0b1001));
        assert!((&x * &inverse).reduce(&modulus).is_one());
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        let modulus = Polynomial::from_u64(0b10011);
        assert!(Polynomial::zero().invert(&modulus).is_none());
        // A multiple of the modulus reduces to zero and has no inverse either
        assert!(modulus.invert(&modulus).is_none());
    }

    #[test]
    fn test_degree() {
        assert_eq!(Polynomial::zero().degree(), None);
        assert_eq!(Polynomial::one().degree(), Some(0));
        assert_eq!(Polynomial::from_u64(0b10011).degree(), Some(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Polynomial::from_u64(0b10011).to_string(), "x^4 + x + 1");
        assert_eq!(Polynomial::from_u64(0b110).to_string(), "x^2 + x");
        assert_eq!(Polynomial::zero().to_string(), "0");
        assert_eq!(Polynomial::one().to_string(), "1");
    }
}
