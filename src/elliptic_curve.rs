//! Elliptic curve point arithmetic over finite fields.
//!
//! One abstract group-law algorithm (chord-tangent addition plus
//! double-and-add scalar multiplication) is shared by a fixed set of curve
//! families; each family supplies only its chord coefficient, tangent
//! coefficient, and resulting-point formulas. The Z_p Weierstrass family
//! lives here; the two GF(2^n) families are in
//! [`binary_elliptic_curve`](crate::binary_elliptic_curve).

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::error::Result;
use crate::field::{Field, PrimeField};

/// A point on an elliptic curve: either an affine coordinate pair or the
/// point at infinity, the group identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point<T> {
    Infinity,
    Affine { x: T, y: T },
}

impl<T> Point<T> {
    pub fn infinity() -> Self {
        Point::Infinity
    }

    pub fn affine(x: T, y: T) -> Self {
        Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&T> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&T> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

/// The group law shared by every curve family.
///
/// Implementors provide the three family-specific formulas; `add` and `mul`
/// are the common algorithm. All methods take `&self` only, so a curve can
/// be used from several threads at once.
pub trait CurveGroup {
    type Field: Field;

    fn field(&self) -> &Self::Field;

    /// Chord coefficient k for the first case, P.x != Q.x.
    fn chord_coefficient(
        &self,
        x1: &<Self::Field as Field>::Element,
        y1: &<Self::Field as Field>::Element,
        x2: &<Self::Field as Field>::Element,
        y2: &<Self::Field as Field>::Element,
    ) -> Result<<Self::Field as Field>::Element>;

    /// Tangent coefficient k for the doubling case, P = Q.
    fn tangent_coefficient(
        &self,
        x1: &<Self::Field as Field>::Element,
        y1: &<Self::Field as Field>::Element,
    ) -> Result<<Self::Field as Field>::Element>;

    /// Raw resulting point (x3, y3) from P, Q and the coefficient k.
    fn additive_point(
        &self,
        x1: &<Self::Field as Field>::Element,
        y1: &<Self::Field as Field>::Element,
        x2: &<Self::Field as Field>::Element,
        k: &<Self::Field as Field>::Element,
    ) -> (<Self::Field as Field>::Element, <Self::Field as Field>::Element);

    /// Group law on the curve.
    ///
    /// Cases, in order: either operand at infinity returns the other;
    /// distinct x coordinates take the chord formula; equal x with unequal
    /// y are inverse points and return infinity; equal points take the
    /// tangent formula. The coefficient and both result coordinates are
    /// normalized through the field.
    fn add(
        &self,
        p: &Point<<Self::Field as Field>::Element>,
        q: &Point<<Self::Field as Field>::Element>,
    ) -> Result<Point<<Self::Field as Field>::Element>> {
        let (x1, y1) = match p {
            Point::Infinity => return Ok(q.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Infinity => return Ok(p.clone()),
            Point::Affine { x, y } => (x, y),
        };

        let k = if x1 != x2 {
            self.chord_coefficient(x1, y1, x2, y2)?
        } else if y1 != y2 {
            return Ok(Point::Infinity);
        } else {
            self.tangent_coefficient(x1, y1)?
        };
        let k = self.field().normalize(k);

        let (x3, y3) = self.additive_point(x1, y1, x2, &k);
        Ok(Point::Affine {
            x: self.field().normalize(x3),
            y: self.field().normalize(y3),
        })
    }

    /// Scalar multiplication by double-and-add: O(log scalar) group
    /// operations. A zero scalar yields the identity, not an error.
    fn mul(
        &self,
        p: &Point<<Self::Field as Field>::Element>,
        scalar: &BigUint,
    ) -> Result<Point<<Self::Field as Field>::Element>> {
        let mut result = Point::Infinity;
        let mut addend = p.clone();
        let mut scalar = scalar.clone();
        while !scalar.is_zero() {
            if scalar.is_odd() {
                result = self.add(&result, &addend)?;
            }
            addend = self.add(&addend, &addend)?;
            scalar = &scalar >> 1u32;
        }
        Ok(result)
    }
}

/// Weierstrass curve y^2 = x^3 + ax + b over the prime field Z_p.
#[derive(Clone, Debug)]
pub struct WeierstrassCurve {
    field: PrimeField,
    pub a: BigInt,
    pub b: BigInt,
}

impl WeierstrassCurve {
    /// Coefficients may arrive unreduced; they are normalized before use.
    pub fn new(field: PrimeField, a: BigInt, b: BigInt) -> Self {
        let a = field.normalize(a);
        let b = field.normalize(b);
        WeierstrassCurve { field, a, b }
    }
}

impl CurveGroup for WeierstrassCurve {
    type Field = PrimeField;

    fn field(&self) -> &PrimeField {
        &self.field
    }

    fn chord_coefficient(&self, x1: &BigInt, y1: &BigInt, x2: &BigInt, y2: &BigInt) -> Result<BigInt> {
        // k = (y2 - y1) / (x2 - x1)
        let inverse = self.field.invert(&(x2 - x1))?;
        Ok(self.field.reduce((y2 - y1) * inverse))
    }

    fn tangent_coefficient(&self, x1: &BigInt, y1: &BigInt) -> Result<BigInt> {
        // k = (3*x1^2 + a) / (2*y1)
        let inverse = self.field.invert(&(BigInt::from(2) * y1))?;
        Ok(self.field.reduce((BigInt::from(3) * x1 * x1 + &self.a) * inverse))
    }

    fn additive_point(&self, x1: &BigInt, y1: &BigInt, x2: &BigInt, k: &BigInt) -> (BigInt, BigInt) {
        // x3 = k^2 - x1 - x2
        let x3 = self.field.reduce(k * k - x1 - x2);
        // y3 = y1 + k(x3 - x1), negated in the final coordinate
        let y3 = self.field.reduce(y1 + k * (&x3 - x1));
        (x3, self.field.reduce(-y3))
    }
}
