//! Elliptic curve families over binary fields GF(2^n).
//!
//! Characteristic 2 splits into two families with different addition-law
//! coefficients: non-supersingular (NSS2) and supersingular (SS2) curves.
//! Both share the chord formula; they differ in the tangent coefficient and
//! in how the curve coefficient enters the resulting y coordinate.
//!
//! References:
//! [3] Guide to Elliptic Curve Cryptography - Hankerson, Menezes, Vanstone

use crate::elliptic_curve::CurveGroup;
use crate::error::{Error, Result};
use crate::field::{BinaryField, Field};
use crate::polynomial::Polynomial;

/// Non-supersingular binary curve with coefficients a, b, c.
#[derive(Clone, Debug)]
pub struct NonSupersingularCurve {
    field: BinaryField,
    pub a: Polynomial,
    pub b: Polynomial,
    pub c: Polynomial,
}

impl NonSupersingularCurve {
    pub fn new(field: BinaryField, a: Polynomial, b: Polynomial, c: Polynomial) -> Self {
        let a = field.normalize(a);
        let b = field.normalize(b);
        let c = field.normalize(c);
        NonSupersingularCurve { field, a, b, c }
    }
}

impl CurveGroup for NonSupersingularCurve {
    type Field = BinaryField;

    fn field(&self) -> &BinaryField {
        &self.field
    }

    fn chord_coefficient(
        &self,
        x1: &Polynomial,
        y1: &Polynomial,
        x2: &Polynomial,
        y2: &Polynomial,
    ) -> Result<Polynomial> {
        // k = (y1 + y2) / (x1 + x2)
        let inverse = self.field.invert(&x1.add(x2))?;
        Ok(self.field.reduce(y1.add(y2).mul(&inverse)))
    }

    fn tangent_coefficient(&self, x1: &Polynomial, y1: &Polynomial) -> Result<Polynomial> {
        // k = (x1^2 + a*y1) / (a*x1)
        let inverse = self.field.invert(&self.a.mul(x1))?;
        Ok(self.field.reduce(x1.mul(x1).add(&self.a.mul(y1)).mul(&inverse)))
    }

    fn additive_point(
        &self,
        x1: &Polynomial,
        y1: &Polynomial,
        x2: &Polynomial,
        k: &Polynomial,
    ) -> (Polynomial, Polynomial) {
        // x3 = k^2 + a*k + b + x1 + x2
        let x3 = self
            .field
            .reduce(k.mul(k).add(&self.a.mul(k)).add(&self.b).add(x1).add(x2));
        // y3 = y1 + k(x3 + x1), with a*x3 added in the final coordinate
        let y3 = self.field.reduce(y1.add(&k.mul(&x3.add(x1))));
        (x3.clone(), self.field.reduce(self.a.mul(&x3).add(&y3)))
    }
}

/// Supersingular binary curve with coefficients a, b.
///
/// Doubling divides by a, so a curve whose a coefficient normalizes to zero
/// cannot double; the check happens when the tangent formula is evaluated,
/// since a is never consulted for inputs that only take the chord case.
#[derive(Clone, Debug)]
pub struct SupersingularCurve {
    field: BinaryField,
    pub a: Polynomial,
    pub b: Polynomial,
}

impl SupersingularCurve {
    pub fn new(field: BinaryField, a: Polynomial, b: Polynomial) -> Self {
        let a = field.normalize(a);
        let b = field.normalize(b);
        SupersingularCurve { field, a, b }
    }
}

impl CurveGroup for SupersingularCurve {
    type Field = BinaryField;

    fn field(&self) -> &BinaryField {
        &self.field
    }

    fn chord_coefficient(
        &self,
        x1: &Polynomial,
        y1: &Polynomial,
        x2: &Polynomial,
        y2: &Polynomial,
    ) -> Result<Polynomial> {
        // k = (y1 + y2) / (x1 + x2)
        let inverse = self.field.invert(&x1.add(x2))?;
        Ok(self.field.reduce(y1.add(y2).mul(&inverse)))
    }

    fn tangent_coefficient(&self, x1: &Polynomial, _y1: &Polynomial) -> Result<Polynomial> {
        if self.a.is_zero() {
            return Err(Error::DegenerateCurve(
                "coefficient a of a supersingular curve must not be zero".to_string(),
            ));
        }
        // k = (x1^2 + b) / a
        let inverse = self.field.invert(&self.a)?;
        Ok(self.field.reduce(x1.mul(x1).add(&self.b).mul(&inverse)))
    }

    fn additive_point(
        &self,
        x1: &Polynomial,
        y1: &Polynomial,
        x2: &Polynomial,
        k: &Polynomial,
    ) -> (Polynomial, Polynomial) {
        // x3 = k^2 + x1 + x2
        let x3 = self.field.reduce(k.mul(k).add(x1).add(x2));
        // y3 = y1 + k(x3 + x1), with a added in the final coordinate
        let y3 = self.field.reduce(y1.add(&k.mul(&x3.add(x1))));
        (x3, self.field.reduce(self.a.add(&y3)))
    }
}
