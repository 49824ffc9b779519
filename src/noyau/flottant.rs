// src/noyau/flottant.rs

//! Flottant binaire à précision arbitraire (mantisse BigUint + exposant).
//!
//! Valeur = (-1)^neg · mant · 2^exp, arrondie à `prec` bits de mantisse.
//!
//! Contrats :
//! - Chaque opération est correctement arrondie (au plus proche, égalité -> pair)
//!   à partir du résultat mathématique exact.
//! - Précision du résultat = max des précisions des opérandes.
//! - Forme canonique : mantisse nulle ou impaire, zéro toujours positif.
//! - Pas de NaN ni d'infini : la division par zéro panique via `/`,
//!   ou renvoie `None` via `checked_div`.

use std::cmp::{max, min};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Largeur de mantisse d'un f64 : précision adoptée quand on demande 0 bit.
pub const PREC_F64: u32 = 53;

/// Précision effective : 0 bit => largeur f64.
pub fn precision_effective(prec: u32) -> u32 {
    if prec == 0 {
        PREC_F64
    } else {
        prec
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flottant {
    neg: bool,
    mant: BigUint,
    exp: i64,
    prec: u32,
}

impl Flottant {
    pub fn zero(prec: u32) -> Self {
        Self {
            neg: false,
            mant: BigUint::zero(),
            exp: 0,
            prec: precision_effective(prec),
        }
    }

    /// f64 -> Flottant : décomposition exacte du f64, puis UN seul arrondi à `prec` bits.
    ///
    /// # Panics
    /// Si `x` est NaN ou infini.
    pub fn from_f64(x: f64, prec: u32) -> Self {
        assert!(x.is_finite(), "Flottant::from_f64 : valeur non finie ({x})");

        let bits = x.to_bits();
        let neg = (bits >> 63) == 1;
        let exp_brut = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);

        // sous-normal : pas de bit implicite
        let (m, e) = if exp_brut == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), exp_brut - 1075)
        };

        arrondi(neg, BigUint::from(m), e, precision_effective(prec), false)
    }

    /// Entier exact -> Flottant (un seul arrondi).
    pub fn from_bigint(n: &BigInt, prec: u32) -> Self {
        arrondi(
            n.is_negative(),
            n.magnitude().clone(),
            0,
            precision_effective(prec),
            false,
        )
    }

    /// num/den exact, arrondi une seule fois à `prec` bits. `None` si den == 0.
    pub fn from_ratio(num: &BigInt, den: &BigInt, prec: u32) -> Option<Self> {
        if den.is_zero() {
            return None;
        }
        let prec = precision_effective(prec);
        if num.is_zero() {
            return Some(Self::zero(prec));
        }
        Some(quotient(
            num.is_negative() != den.is_negative(),
            num.magnitude(),
            0,
            den.magnitude(),
            0,
            prec,
        ))
    }

    pub fn prec(&self) -> u32 {
        self.prec
    }

    pub fn is_zero(&self) -> bool {
        self.mant.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.neg
    }

    /// Ré-arrondit la valeur à une autre précision.
    pub fn arrondir(&self, prec: u32) -> Self {
        arrondi(
            self.neg,
            self.mant.clone(),
            self.exp,
            precision_effective(prec),
            false,
        )
    }

    /// Valeur exacte sous forme rationnelle.
    pub fn to_rational(&self) -> BigRational {
        let sign = if self.neg { Sign::Minus } else { Sign::Plus };
        if self.mant.is_zero() {
            return BigRational::zero();
        }
        if self.exp >= 0 {
            let n = BigInt::from_biguint(sign, &self.mant << self.exp as usize);
            BigRational::from_integer(n)
        } else {
            let n = BigInt::from_biguint(sign, self.mant.clone());
            let d = BigInt::one() << (-self.exp) as usize;
            BigRational::new(n, d)
        }
    }

    pub fn checked_div(&self, rhs: &Flottant) -> Option<Flottant> {
        if rhs.is_zero() {
            return None;
        }
        let prec = max(self.prec, rhs.prec);
        if self.is_zero() {
            return Some(Flottant::zero(prec));
        }
        Some(quotient(
            self.neg != rhs.neg,
            &self.mant,
            self.exp,
            &rhs.mant,
            rhs.exp,
            prec,
        ))
    }

    /// Position (exposant) du bit de poids fort. Non défini pour zéro.
    fn msb(&self) -> i64 {
        self.exp + self.mant.bits() as i64 - 1
    }
}

/* ------------------------ Arrondi (au plus proche, égalité -> pair) ------------------------ */

/// Arrondit mant·2^exp à `prec` bits.
/// `sticky` signale des bits non nuls sous `mant` (utile seulement si mant dépasse `prec` bits).
fn arrondi(neg: bool, mant: BigUint, exp: i64, prec: u32, sticky: bool) -> Flottant {
    if mant.is_zero() {
        return Flottant::zero(prec);
    }

    let n = mant.bits();
    let p = u64::from(prec);

    let (mut m, mut e) = if n > p {
        let coupe = n - p;
        let bit_arrondi = mant.bit(coupe - 1);
        let reste = sticky || mant.trailing_zeros().is_some_and(|tz| tz < coupe - 1);

        let mut m = mant >> coupe;
        if bit_arrondi && (reste || m.bit(0)) {
            // peut passer à 2^p : la normalisation ci-dessous le ramène à 1·2^(e+p)
            m += 1u32;
        }
        (m, exp + coupe as i64)
    } else {
        (mant, exp)
    };

    if let Some(tz) = m.trailing_zeros() {
        m >>= tz;
        e += tz as i64;
    }

    Flottant {
        neg,
        mant: m,
        exp: e,
        prec,
    }
}

/// a·2^ea / b·2^eb correctement arrondi (b != 0).
fn quotient(neg: bool, a: &BigUint, ea: i64, b: &BigUint, eb: i64, prec: u32) -> Flottant {
    // au moins prec+2 bits de quotient : bit d'arrondi + reste exact => arrondi correct
    let la = a.bits() as i64;
    let lb = b.bits() as i64;
    let decalage = max(0, i64::from(prec) + 2 + lb - la);

    let num = a << decalage as usize;
    let q = &num / b;
    let r = &num % b;

    arrondi(neg, q, ea - eb - decalage, prec, !r.is_zero())
}

/// a + (±b) correctement arrondi.
fn somme(a: &Flottant, b: &Flottant, b_neg: bool) -> Flottant {
    let prec = max(a.prec, b.prec);

    if b.is_zero() {
        return arrondi(a.neg, a.mant.clone(), a.exp, prec, false);
    }
    if a.is_zero() {
        return arrondi(b_neg, b.mant.clone(), b.exp, prec, false);
    }

    let (grand, g_neg, petit, p_neg) = if a.msb() >= b.msb() {
        (a, a.neg, b, b_neg)
    } else {
        (b, b_neg, a, a.neg)
    };

    // Si `petit` est entièrement sous la fenêtre d'arrondi de `grand`,
    // il ne compte que comme bit collant : on le remplace par 2^(seuil-1).
    // Évite d'aligner des mantisses sur des milliers de bits (termes 1/1024^k).
    let fenetre = i64::from(max(prec, grand.mant.bits() as u32)) + 2;
    let seuil = grand.msb() - fenetre;
    let (pm, pe) = if petit.msb() < seuil {
        (BigUint::one(), seuil - 1)
    } else {
        (petit.mant.clone(), petit.exp)
    };

    let e = min(grand.exp, pe);
    let g = signe(g_neg, &grand.mant << (grand.exp - e) as usize);
    let s = signe(p_neg, pm << (pe - e) as usize);
    let total = g + s;

    arrondi(total.is_negative(), total.magnitude().clone(), e, prec, false)
}

fn signe(neg: bool, m: BigUint) -> BigInt {
    BigInt::from_biguint(if neg { Sign::Minus } else { Sign::Plus }, m)
}

/* ------------------------ Opérateurs (sur références) ------------------------ */

impl Add<&Flottant> for &Flottant {
    type Output = Flottant;

    fn add(self, rhs: &Flottant) -> Flottant {
        somme(self, rhs, rhs.neg)
    }
}

impl Sub<&Flottant> for &Flottant {
    type Output = Flottant;

    fn sub(self, rhs: &Flottant) -> Flottant {
        somme(self, rhs, !rhs.neg && !rhs.is_zero())
    }
}

impl Mul<&Flottant> for &Flottant {
    type Output = Flottant;

    fn mul(self, rhs: &Flottant) -> Flottant {
        let prec = max(self.prec, rhs.prec);
        if self.is_zero() || rhs.is_zero() {
            return Flottant::zero(prec);
        }
        arrondi(
            self.neg != rhs.neg,
            &self.mant * &rhs.mant,
            self.exp + rhs.exp,
            prec,
            false,
        )
    }
}

impl Div<&Flottant> for &Flottant {
    type Output = Flottant;

    /// # Panics
    /// Si le diviseur est nul (comme la division entière).
    fn div(self, rhs: &Flottant) -> Flottant {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("Flottant : division par zéro"),
        }
    }
}

impl Neg for Flottant {
    type Output = Flottant;

    fn neg(mut self) -> Flottant {
        if !self.is_zero() {
            self.neg = !self.neg;
        }
        self
    }
}

impl Neg for &Flottant {
    type Output = Flottant;

    fn neg(self) -> Flottant {
        -self.clone()
    }
}
