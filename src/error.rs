use std::fmt;
use std::io;

/// Errors produced while building fields, evaluating curve operations,
/// or parsing task files.
#[derive(Debug)]
pub enum Error {
    /// A binary field was requested for a degree with no entry in the
    /// built-in irreducible polynomial table.
    UnknownIrreducibleDegree(u64),
    /// Multiplicative inverse of the zero element (or of an element not
    /// coprime with the modulus) was requested.
    NonInvertible(String),
    /// The curve coefficients make the requested operation undefined.
    DegenerateCurve(String),
    /// A task file line did not match the input grammar.
    Parse(String),
    /// A polynomial literal contained an unrecognized monomial.
    PolynomialParse { monomial: String, polynomial: String },
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownIrreducibleDegree(degree) => {
                write!(f, "no known irreducible polynomial of degree {} over GF(2)", degree)
            }
            Error::NonInvertible(what) => write!(f, "element is not invertible: {}", what),
            Error::DegenerateCurve(what) => write!(f, "degenerate curve configuration: {}", what),
            Error::Parse(what) => write!(f, "parse error: {}", what),
            Error::PolynomialParse { monomial, polynomial } => {
                write!(f, "failed to parse monomial: {} (polynomial: {})", monomial, polynomial)
            }
            Error::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for Error {}
