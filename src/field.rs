use std::collections::HashMap;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::polynomial::Polynomial;

/// A finite field, configured once at construction and immutable after.
///
/// The field operates on plain element values (`BigInt` for Z_p,
/// [`Polynomial`] for GF(2^n)): it supplies canonicalization and inversion
/// while the raw ring arithmetic stays on the element type itself. One
/// instance can be shared read-only across concurrent curve computations.
pub trait Field {
    type Element: Clone + PartialEq;

    /// Full reduction against the field modulus, applied after raw
    /// arithmetic.
    fn reduce(&self, value: Self::Element) -> Self::Element;

    /// Canonical representative of a field element.
    fn normalize(&self, value: Self::Element) -> Self::Element {
        self.reduce(value)
    }

    /// Multiplicative inverse; an error for the zero element and for
    /// values the algorithm cannot invert.
    fn invert(&self, value: &Self::Element) -> Result<Self::Element>;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;
}

/// The prime field Z_p with elements in [0, p).
#[derive(Clone, Debug)]
pub struct PrimeField {
    p: BigInt,
}

impl PrimeField {
    pub fn new(p: BigInt) -> Self {
        PrimeField { p }
    }

    pub fn prime(&self) -> &BigInt {
        &self.p
    }
}

impl Field for PrimeField {
    type Element = BigInt;

    fn reduce(&self, value: BigInt) -> BigInt {
        // Floor modulo: the representative is non-negative even for
        // negative inputs, unlike the `%` remainder.
        value.mod_floor(&self.p)
    }

    fn invert(&self, value: &BigInt) -> Result<BigInt> {
        let reduced = value.mod_floor(&self.p);
        if reduced.is_zero() {
            return Err(Error::NonInvertible(format!("{} is zero modulo {}", value, self.p)));
        }

        // Extended Euclidean algorithm over the integers; s0 tracks the
        // Bezout coefficient of the input.
        let mut r0 = reduced;
        let mut r1 = self.p.clone();
        let mut s0 = BigInt::one();
        let mut s1 = BigInt::zero();
        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            r0 = std::mem::replace(&mut r1, r);
            let next = &s0 - &(&q * &s1);
            s0 = std::mem::replace(&mut s1, next);
        }

        // gcd != 1 cannot happen for a true prime modulus, but is still
        // guarded: the element simply has no inverse then.
        if !r0.is_one() {
            return Err(Error::NonInvertible(format!(
                "{} is not coprime with the modulus {}",
                value, self.p
            )));
        }
        Ok(s0.mod_floor(&self.p))
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }
}

/// Irreducible polynomials over GF(2), one per supported extension degree,
/// written as the exponents of their nonzero terms.
///
/// Degrees up to 16 use standard irreducible tri- and pentanomials (degree
/// 8 is the AES polynomial); the large degrees are the NIST FIPS 186-4
/// binary-curve reduction polynomials.
static IRREDUCIBLE_EXPONENTS: &[(u64, &[u64])] = &[
    (1, &[1, 0]),
    (2, &[2, 1, 0]),
    (3, &[3, 1, 0]),
    (4, &[4, 1, 0]),
    (5, &[5, 2, 0]),
    (6, &[6, 1, 0]),
    (7, &[7, 1, 0]),
    (8, &[8, 4, 3, 1, 0]),
    (9, &[9, 4, 0]),
    (10, &[10, 3, 0]),
    (11, &[11, 2, 0]),
    (12, &[12, 6, 4, 1, 0]),
    (13, &[13, 4, 3, 1, 0]),
    (14, &[14, 10, 6, 1, 0]),
    (15, &[15, 1, 0]),
    (16, &[16, 12, 3, 1, 0]),
    (163, &[163, 7, 6, 3, 0]),
    (233, &[233, 74, 0]),
    (283, &[283, 12, 7, 5, 0]),
    (409, &[409, 87, 0]),
    (571, &[571, 10, 5, 2, 0]),
];

static IRREDUCIBLE_TABLE: Lazy<HashMap<u64, Polynomial>> = Lazy::new(|| {
    IRREDUCIBLE_EXPONENTS
        .iter()
        .map(|&(degree, exponents)| (degree, Polynomial::from_exponents(exponents)))
        .collect()
});

/// The binary extension field GF(2^n): polynomials over GF(2) reduced
/// against a fixed irreducible polynomial of degree n.
#[derive(Clone, Debug)]
pub struct BinaryField {
    modulus: Polynomial,
    degree: u64,
}

impl BinaryField {
    /// Build the field from its extension degree, using the built-in
    /// irreducible polynomial table.
    pub fn new(degree: u64) -> Result<Self> {
        let modulus = IRREDUCIBLE_TABLE
            .get(&degree)
            .cloned()
            .ok_or(Error::UnknownIrreducibleDegree(degree))?;
        Ok(BinaryField { modulus, degree })
    }

    /// Build the field from an explicitly supplied irreducible polynomial.
    pub fn with_modulus(modulus: Polynomial) -> Result<Self> {
        match modulus.degree() {
            Some(degree) if degree >= 1 => Ok(BinaryField { modulus, degree }),
            _ => Err(Error::Parse(format!(
                "field modulus must be a polynomial of degree at least 1, got {}",
                modulus
            ))),
        }
    }

    pub fn degree(&self) -> u64 {
        self.degree
    }

    pub fn irreducible(&self) -> &Polynomial {
        &self.modulus
    }
}

impl Field for BinaryField {
    type Element = Polynomial;

    fn reduce(&self, value: Polynomial) -> Polynomial {
        value.reduce(&self.modulus)
    }

    fn invert(&self, value: &Polynomial) -> Result<Polynomial> {
        value.invert(&self.modulus).ok_or_else(|| {
            Error::NonInvertible(format!("{} has no inverse modulo {}", value, self.modulus))
        })
    }

    fn zero(&self) -> Polynomial {
        Polynomial::zero()
    }

    fn one(&self) -> Polynomial {
        Polynomial::one()
    }
}
