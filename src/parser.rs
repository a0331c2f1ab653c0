//! Parser for the line-oriented task file grammar.
//!
//! A file describes one field, one curve, and an ordered list of tasks:
//!
//! ```text
//! Z_p            GF(2^n)
//! <p>            <degree | irreducible polynomial, e.g. x^4+x+1>
//! <a>            <family: nss2 | ss2>
//! <b>            <a>
//! <tasks...>     <b>
//!                <c, nss2 only>
//!                <tasks...>
//! ```
//!
//! A task line is `a <point> <point>` or `m <point> <scalar>` (operands of
//! `m` in either order). Points are `(<int>, <int>)`; `o` is the point at
//! infinity; integers accept 0b/0o/0x radix prefixes. For GF(2^n), point
//! coordinates and curve coefficients are integers read as polynomial bit
//! vectors. Task lines are case-insensitive and blank lines are skipped.

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use crate::binary_elliptic_curve::{NonSupersingularCurve, SupersingularCurve};
use crate::elliptic_curve::{Point, WeierstrassCurve};
use crate::error::{Error, Result};
use crate::field::{BinaryField, PrimeField};
use crate::polynomial::Polynomial;
use crate::task::{RunnerConfig, Task};

/// Parse one task file into a runner configuration.
pub fn parse(input: &str) -> Result<RunnerConfig> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let field_type = next_line(&mut lines, "field type")?;
    match field_type {
        "Z_p" => parse_zp(&mut lines),
        "GF(2^n)" => parse_gf2(&mut lines),
        other => Err(Error::Parse(format!("unknown field type: {}", other))),
    }
}

/// Parse an integer literal with an optional 0b/0o/0x radix prefix and an
/// optional leading minus.
pub fn parse_int(text: &str) -> Result<BigInt> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (radix, digits) = if let Some(rest) = body.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = body.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = body.strip_prefix("0x") {
        (16, rest)
    } else {
        (10, body)
    };

    let value = if digits.is_empty() {
        None
    } else {
        BigInt::parse_bytes(digits.as_bytes(), radix)
    };
    let value = value.ok_or_else(|| Error::Parse(format!("invalid integer literal: {}", text)))?;
    Ok(if negative { -value } else { value })
}

/// Parse a polynomial in monomial notation, e.g. `x^4 + x + 1`.
pub fn parse_polynomial(text: &str) -> Result<Polynomial> {
    let mut polynomial = Polynomial::zero();
    for monomial in text.split('+') {
        let monomial = monomial.trim();
        let term = parse_monomial(monomial).ok_or_else(|| Error::PolynomialParse {
            monomial: monomial.to_string(),
            polynomial: text.to_string(),
        })?;
        polynomial = polynomial.add(&term);
    }
    Ok(polynomial)
}

fn parse_monomial(monomial: &str) -> Option<Polynomial> {
    match monomial {
        "0" => Some(Polynomial::zero()),
        "1" => Some(Polynomial::one()),
        "x" => Some(Polynomial::from_exponents(&[1])),
        _ => {
            let exponent = monomial.strip_prefix("x^")?.trim();
            exponent.parse::<u64>().ok().map(|e| Polynomial::from_exponents(&[e]))
        }
    }
}

/// Parse an integer literal as a polynomial bit vector.
fn parse_int_polynomial(text: &str) -> Result<Polynomial> {
    let bits = parse_int(text)?
        .to_biguint()
        .ok_or_else(|| Error::Parse(format!("polynomial bit value must be non-negative: {}", text)))?;
    Ok(Polynomial::new(bits))
}

fn next_line<'a>(lines: &mut impl Iterator<Item = &'a str>, expected: &str) -> Result<&'a str> {
    lines
        .next()
        .ok_or_else(|| Error::Parse(format!("unexpected end of input, expected {}", expected)))
}

fn parse_zp<'a, I: Iterator<Item = &'a str>>(lines: &mut I) -> Result<RunnerConfig> {
    let p = parse_int(next_line(lines, "field modulus")?)?;
    let a = parse_int(next_line(lines, "curve coefficient a")?)?;
    let b = parse_int(next_line(lines, "curve coefficient b")?)?;
    let curve = WeierstrassCurve::new(PrimeField::new(p), a, b);

    let tasks = lines
        .map(|line| parse_task(line, &parse_int))
        .collect::<Result<Vec<_>>>()?;
    Ok(RunnerConfig::Weierstrass { curve, tasks })
}

fn parse_gf2<'a, I: Iterator<Item = &'a str>>(lines: &mut I) -> Result<RunnerConfig> {
    let field_line = next_line(lines, "field degree or irreducible polynomial")?;
    // A line mentioning x is an explicit irreducible polynomial; a bare
    // integer is a degree resolved through the built-in table.
    let field = if field_line.contains('x') {
        BinaryField::with_modulus(parse_polynomial(field_line)?)?
    } else {
        let degree = parse_int(field_line)?
            .to_u64()
            .ok_or_else(|| Error::Parse(format!("invalid field degree: {}", field_line)))?;
        BinaryField::new(degree)?
    };

    let family = next_line(lines, "curve family")?.to_lowercase();
    match family.as_str() {
        "nss2" => {
            let a = parse_int_polynomial(next_line(lines, "curve coefficient a")?)?;
            let b = parse_int_polynomial(next_line(lines, "curve coefficient b")?)?;
            let c = parse_int_polynomial(next_line(lines, "curve coefficient c")?)?;
            let curve = NonSupersingularCurve::new(field, a, b, c);
            let tasks = lines
                .map(|line| parse_task(line, &parse_int_polynomial))
                .collect::<Result<Vec<_>>>()?;
            Ok(RunnerConfig::NonSupersingular { curve, tasks })
        }
        "ss2" => {
            let a = parse_int_polynomial(next_line(lines, "curve coefficient a")?)?;
            let b = parse_int_polynomial(next_line(lines, "curve coefficient b")?)?;
            let curve = SupersingularCurve::new(field, a, b);
            let tasks = lines
                .map(|line| parse_task(line, &parse_int_polynomial))
                .collect::<Result<Vec<_>>>()?;
            Ok(RunnerConfig::Supersingular { curve, tasks })
        }
        other => Err(Error::Parse(format!("unknown curve family: {}", other))),
    }
}

enum Operand<T> {
    Point(Point<T>),
    Scalar(BigUint),
}

fn parse_task<T>(line: &str, parse_element: &impl Fn(&str) -> Result<T>) -> Result<Task<T>> {
    let line = line.to_lowercase();
    let tokens = tokenize(&line)?;
    if tokens.len() != 3 {
        return Err(Error::Parse(format!("failed to parse task: {}", line)));
    }

    let first = parse_operand(&tokens[1], parse_element)?;
    let second = parse_operand(&tokens[2], parse_element)?;
    match (tokens[0].as_str(), first, second) {
        ("a", Operand::Point(p), Operand::Point(q)) => Ok(Task::Add(p, q)),
        ("a", _, _) => Err(Error::Parse(format!(
            "addition requires two point operands: {}",
            line
        ))),
        ("m", Operand::Point(p), Operand::Scalar(k)) => Ok(Task::Mul(p, k)),
        ("m", Operand::Scalar(k), Operand::Point(p)) => Ok(Task::Mul(p, k)),
        ("m", _, _) => Err(Error::Parse(format!(
            "multiplication requires one point and one scalar: {}",
            line
        ))),
        _ => Err(Error::Parse(format!("unknown task type: {}", line))),
    }
}

fn parse_operand<T>(token: &str, parse_element: &impl Fn(&str) -> Result<T>) -> Result<Operand<T>> {
    if token == "o" {
        return Ok(Operand::Point(Point::Infinity));
    }
    if let Some(body) = token.strip_prefix('(') {
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| Error::Parse(format!("invalid point format: {}", token)))?;
        let mut parts = body.split(',');
        return match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => Ok(Operand::Point(Point::affine(
                parse_element(x.trim())?,
                parse_element(y.trim())?,
            ))),
            _ => Err(Error::Parse(format!("invalid point format: {}", token))),
        };
    }
    let scalar = parse_int(token)?
        .to_biguint()
        .ok_or_else(|| Error::Parse(format!("scalar must be non-negative: {}", token)))?;
    Ok(Operand::Scalar(scalar))
}

/// Split a task line into tokens, keeping each parenthesized point (spaces
/// and all) as a single token.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        let mut token = String::new();
        if ch == '(' {
            let mut closed = false;
            for c in chars.by_ref() {
                token.push(c);
                if c == ')' {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(Error::Parse(format!("unterminated point: {}", line)));
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '(' {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_parse_int_radix_prefixes() {
        assert_eq!(parse_int("23").unwrap(), BigInt::from(23));
        assert_eq!(parse_int("0b10011").unwrap(), BigInt::from(19));
        assert_eq!(parse_int("0o17").unwrap(), BigInt::from(15));
        assert_eq!(parse_int("0x1f").unwrap(), BigInt::from(31));
        assert_eq!(parse_int("-5").unwrap(), BigInt::from(-5));
        assert!(parse_int("abc").is_err());
        assert!(parse_int("0b").is_err());
    }

    #[test]
    fn test_parse_polynomial() {
        assert_eq!(parse_polynomial("x^4+x+1").unwrap(), Polynomial::from_u64(0b10011));
        assert_eq!(parse_polynomial("x^4 + x + 1").unwrap(), Polynomial::from_u64(0b10011));
        assert_eq!(parse_polynomial("x").unwrap(), Polynomial::from_u64(0b10));
        assert_eq!(parse_polynomial("0").unwrap(), Polynomial::zero());

        let err = parse_polynomial("x^4+y+1");
        assert!(matches!(err, Err(Error::PolynomialParse { .. })));
    }

    #[test]
    fn test_parse_zp_file() {
        let input = "Z_p\n23\n1\n1\na (3,10) (4,0)\nm (3,10) 5\n";
        let config = parse(input).unwrap();
        match config {
            RunnerConfig::Weierstrass { curve, tasks } => {
                assert_eq!(curve.a, BigInt::from(1));
                assert_eq!(curve.b, BigInt::from(1));
                assert_eq!(tasks.len(), 2);
                assert_eq!(
                    tasks[0],
                    Task::Add(
                        Point::affine(BigInt::from(3), BigInt::from(10)),
                        Point::affine(BigInt::from(4), BigInt::from(0)),
                    )
                );
                assert_eq!(
                    tasks[1],
                    Task::Mul(
                        Point::affine(BigInt::from(3), BigInt::from(10)),
                        BigUint::from(5u32),
                    )
                );
            }
            other => panic!("expected a Weierstrass config, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_gf2_file_with_degree() {
        let input = "GF(2^n)\n4\nnss2\n1\n1\n0\na (2,3) (4,5)\n";
        let config = parse(input).unwrap();
        match config {
            RunnerConfig::NonSupersingular { curve, tasks } => {
                assert_eq!(curve.a, Polynomial::one());
                assert_eq!(curve.b, Polynomial::one());
                assert_eq!(curve.c, Polynomial::zero());
                assert_eq!(tasks.len(), 1);
            }
            other => panic!("expected an nss2 config, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_gf2_file_with_explicit_polynomial() {
        let input = "GF(2^n)\nx^4+x+1\nss2\n1\n1\nm (2,3) 2\n";
        let config = parse(input).unwrap();
        match config {
            RunnerConfig::Supersingular { curve, tasks } => {
                assert_eq!(curve.a, Polynomial::one());
                assert_eq!(tasks.len(), 1);
            }
            other => panic!("expected an ss2 config, got {:?}", other),
        }
    }

    #[test]
    fn test_task_lines_are_flexible() {
        // Upper case, spaces inside points, swapped multiplication operands,
        // infinity operand, blank lines
        let input = "Z_p\n23\n1\n1\n\nA ( 3 , 10 ) O\nM 5 (3,10)\n";
        let config = parse(input).unwrap();
        match config {
            RunnerConfig::Weierstrass { tasks, .. } => {
                assert_eq!(
                    tasks[0],
                    Task::Add(
                        Point::affine(BigInt::from(3), BigInt::from(10)),
                        Point::Infinity,
                    )
                );
                assert_eq!(
                    tasks[1],
                    Task::Mul(
                        Point::affine(BigInt::from(3), BigInt::from(10)),
                        BigUint::from(5u32),
                    )
                );
            }
            other => panic!("expected a Weierstrass config, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::Parse(_))));
        assert!(matches!(parse("F_q\n5\n"), Err(Error::Parse(_))));
        // Degree without a table entry
        assert!(matches!(
            parse("GF(2^n)\n17\nnss2\n1\n1\n0\n"),
            Err(Error::UnknownIrreducibleDegree(17))
        ));
        // Unknown curve family
        assert!(matches!(parse("GF(2^n)\n4\nweier\n1\n1\n"), Err(Error::Parse(_))));
        // Addition with a scalar operand
        assert!(matches!(parse("Z_p\n23\n1\n1\na (3,10) 5\n"), Err(Error::Parse(_))));
        // Multiplication with two points
        assert!(matches!(
            parse("Z_p\n23\n1\n1\nm (3,10) (4,0)\n"),
            Err(Error::Parse(_))
        ));
        // Negative scalar
        assert!(matches!(parse("Z_p\n23\n1\n1\nm (3,10) -2\n"), Err(Error::Parse(_))));
        // Unknown operation
        assert!(matches!(parse("Z_p\n23\n1\n1\nd (3,10) (4,0)\n"), Err(Error::Parse(_))));
    }
}
