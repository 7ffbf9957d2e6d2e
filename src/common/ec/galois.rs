use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

// Galois field element
//------------------------------------------------------------------------------

// Element of GF(256) under the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct G(pub u8);

impl G {
    pub const ZERO: G = G(0);
    pub const ONE: G = G(1);

    // α^i, where α = 2 is the field generator
    pub fn gen_pow(i: usize) -> Self {
        Self(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }

    #[cfg(test)]
    pub fn inverse(self) -> Self {
        debug_assert!(self.0 != 0, "Zero has no inverse");
        Self(EXP_TABLE[(255 - self.log()) % 255])
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

impl Add for G {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction and addition coincide in characteristic 2
impl Sub for G {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return Self::ZERO;
        }
        Self::gen_pow(self.log() + rhs.log())
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Evaluates the polynomial at x by Horner's rule. Coefficients run from the highest degree.
#[cfg(test)]
pub fn eval_poly<'a, I>(coeffs: I, x: G) -> G
where
    I: IntoIterator<Item = &'a G>,
{
    coeffs.into_iter().fold(G::ZERO, |acc, &c| acc * x + c)
}


// Tables
//------------------------------------------------------------------------------

const PRIMITIVE_POLY: u16 = 0x11d;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    exp[255] = 1;
    (exp, log)
}

const TABLES: ([u8; 256], [u8; 256]) = build_tables();

// Index 255 wraps around to α^0
pub(crate) static EXP_TABLE: [u8; 256] = TABLES.0;

// Index 0 is unused
pub(crate) static LOG_TABLE: [u8; 256] = TABLES.1;
