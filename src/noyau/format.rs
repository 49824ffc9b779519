// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::flottant::Flottant;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) positif en texte décimal.
pub fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    if digits == 0 {
        return format!("{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{int_part}.{frac}")
}

/// r >= 0 -> entier le plus proche de r * 10^digits (égalité -> pair).
fn rational_scaled_pair(r: &BigRational, digits: usize) -> BigInt {
    let x = r * BigRational::from_integer(pow10(digits));
    let q = x.floor().to_integer();
    let reste = x - BigRational::from_integer(q.clone());

    let double = &reste + &reste;
    let un = BigRational::from_integer(BigInt::from(1));

    if double > un || (double == un && q.bit(0)) {
        q + 1
    } else {
        q
    }
}

/* ------------------------ Notation fixe ------------------------ */

/// Texte en notation fixe avec exactement `digits` chiffres après la virgule.
///
/// - arrondi décimal exact de la valeur binaire (égalité -> pair)
/// - '-' devant toute valeur négative non nulle, même si elle s'arrondit à 0
/// - pas de point décimal si digits == 0
pub fn to_fixed(x: &Flottant, digits: usize) -> String {
    let r = x.to_rational();
    if r.is_zero() {
        return scaled_to_decimal(&BigInt::zero(), digits);
    }

    let scaled = rational_scaled_pair(&r.abs(), digits);
    let txt = scaled_to_decimal(&scaled, digits);

    if x.is_sign_negative() {
        format!("-{txt}")
    } else {
        txt
    }
}
