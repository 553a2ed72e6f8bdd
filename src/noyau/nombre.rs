// src/noyau/nombre.rs
//
// Nombres du noyau : entier exact (BigInt) ou flottant (f64).
// Règle générale : deux entiers restent exacts (+ - * % ^), dès qu’un flottant
// apparaît (ou pour /) on passe en flottant.
//
// Les erreurs de domaine sont retournées comme simple texte (le détail) :
// l’évaluateur y accroche le nom de l’opérateur fautif.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use super::reglages::Reglages;

#[derive(Clone, Debug)]
pub enum Nombre {
    Entier(BigInt),
    Flottant(f64),
}

impl Nombre {
    pub fn entier(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }

    pub fn est_entier(&self) -> bool {
        matches!(self, Nombre::Entier(_))
    }

    /// Valeur flottante (approchée pour les grands entiers).
    /// Un entier trop grand pour un f64 est une erreur de domaine.
    pub fn en_flottant(&self) -> Result<f64, String> {
        match self {
            Nombre::Flottant(x) => Ok(*x),
            Nombre::Entier(n) => match n.to_f64() {
                Some(x) if x.is_finite() => Ok(x),
                _ => Err("entier trop grand pour un flottant".into()),
            },
        }
    }

    fn comparer(&self, autre: &Nombre) -> Option<Ordering> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Some(a.cmp(b)),
            _ => {
                let a = self.en_flottant().ok()?;
                let b = autre.en_flottant().ok()?;
                a.partial_cmp(&b)
            }
        }
    }
}

impl PartialEq for Nombre {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Nombre::Entier(a), Nombre::Entier(b)) => a == b,
            (Nombre::Flottant(a), Nombre::Flottant(b)) => a == b,
            _ => self.comparer(other) == Some(Ordering::Equal),
        }
    }
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        Nombre::entier(n)
    }
}

impl From<f64> for Nombre {
    fn from(x: f64) -> Self {
        Nombre::Flottant(x)
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            // Debug garde toujours la partie décimale : 1.0, 0.5, 3.141592653589793
            Nombre::Flottant(x) => write!(f, "{x:?}"),
        }
    }
}

/* ------------------------ Opérateurs ------------------------ */

pub fn additionner(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Ok(Nombre::Entier(x + y)),
        _ => Ok(Nombre::Flottant(a.en_flottant()? + b.en_flottant()?)),
    }
}

pub fn soustraire(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Ok(Nombre::Entier(x - y)),
        _ => Ok(Nombre::Flottant(a.en_flottant()? - b.en_flottant()?)),
    }
}

pub fn multiplier(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Ok(Nombre::Entier(x * y)),
        _ => Ok(Nombre::Flottant(a.en_flottant()? * b.en_flottant()?)),
    }
}

/// Division « vraie » : toujours flottante, même entre deux entiers.
pub fn diviser(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    // deux entiers : quotient exact puis un seul arrondi (10^400 / 10^399 = 10.0)
    if let (Nombre::Entier(x), Nombre::Entier(y)) = (a, b) {
        if y.is_zero() {
            return Err("division par zéro".into());
        }
        return match BigRational::new(x.clone(), y.clone()).to_f64() {
            Some(q) if q.is_finite() => Ok(Nombre::Flottant(q)),
            _ => Err("quotient trop grand pour un flottant".into()),
        };
    }
    let d = b.en_flottant()?;
    if d == 0.0 {
        return Err("division par zéro".into());
    }
    Ok(Nombre::Flottant(a.en_flottant()? / d))
}

/// Modulo « plancher » : le reste a le signe du diviseur (-7 % 3 = 2).
pub fn modulo(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => {
            if y.is_zero() {
                return Err("modulo par zéro".into());
            }
            let mut r = x % y;
            if !r.is_zero() && r.is_negative() != y.is_negative() {
                r += y;
            }
            Ok(Nombre::Entier(r))
        }
        _ => {
            let (x, y) = (a.en_flottant()?, b.en_flottant()?);
            if y == 0.0 {
                return Err("modulo par zéro".into());
            }
            let mut r = x % y;
            if r != 0.0 && (r < 0.0) != (y < 0.0) {
                r += y;
            }
            Ok(Nombre::Flottant(r))
        }
    }
}

/// Puissance : exacte pour entier^entier≥0, flottante sinon.
pub fn puissance(a: &Nombre, b: &Nombre, reglages: &Reglages) -> Result<Nombre, String> {
    match (a, b) {
        (Nombre::Entier(base), Nombre::Entier(exp)) if !exp.is_negative() => {
            puissance_entiere(base, exp, reglages)
        }
        (Nombre::Entier(base), Nombre::Entier(_)) if base.is_zero() => {
            Err("zéro élevé à une puissance négative".into())
        }
        _ => puissance_flottante(a.en_flottant()?, b.en_flottant()?).map(Nombre::Flottant),
    }
}

fn puissance_entiere(base: &BigInt, exp: &BigInt, reglages: &Reglages) -> Result<Nombre, String> {
    // bases triviales : pas de limite d’exposant
    if base.is_zero() || base.is_one() {
        let r = if base.is_zero() && exp.is_zero() {
            BigInt::one()
        } else {
            base.clone()
        };
        return Ok(Nombre::Entier(r));
    }
    if *base == BigInt::from(-1) {
        let pair = (exp % 2u32).is_zero();
        return Ok(Nombre::entier(if pair { 1 } else { -1 }));
    }

    let max = reglages.exposant_max;
    let n = exp
        .to_u32()
        .filter(|n| *n <= max)
        .ok_or_else(|| format!("exposant trop grand (max {max})"))?;
    // taille du résultat ~ bits(base) * n
    if base.bits().saturating_mul(u64::from(n)) > reglages.bits_max {
        return Err("résultat trop grand".into());
    }
    Ok(Nombre::Entier(Pow::pow(base, n)))
}

pub fn puissance_flottante(x: f64, y: f64) -> Result<f64, String> {
    if x == 0.0 && y < 0.0 {
        return Err("zéro élevé à une puissance négative".into());
    }
    if x < 0.0 && y.is_finite() && y.fract() != 0.0 {
        return Err("base négative avec exposant non entier".into());
    }
    let r = x.powf(y);
    if r.is_infinite() && x.is_finite() && y.is_finite() {
        return Err("résultat trop grand".into());
    }
    Ok(r)
}

pub fn negatif(a: &Nombre) -> Nombre {
    match a {
        Nombre::Entier(x) => Nombre::Entier(-x),
        Nombre::Flottant(x) => Nombre::Flottant(-x),
    }
}

/* ------------------------ Fonctions de la table fixe ------------------------ */

pub fn valeur_absolue(a: &Nombre) -> Nombre {
    match a {
        Nombre::Entier(x) => Nombre::Entier(x.abs()),
        Nombre::Flottant(x) => Nombre::Flottant(x.abs()),
    }
}

pub fn racine_carree(a: &Nombre) -> Result<Nombre, String> {
    let x = a.en_flottant()?;
    if x < 0.0 {
        return Err("racine carrée d’un nombre négatif".into());
    }
    Ok(Nombre::Flottant(x.sqrt()))
}

pub fn factorielle(a: &Nombre, reglages: &Reglages) -> Result<Nombre, String> {
    let n = match a {
        Nombre::Entier(n) => n,
        Nombre::Flottant(_) => return Err("factorielle d’un nombre non entier".into()),
    };
    if n.is_negative() {
        return Err("factorielle d’un nombre négatif".into());
    }
    let max = reglages.factorielle_max;
    let n = n
        .to_u64()
        .filter(|n| *n <= max)
        .ok_or_else(|| format!("argument trop grand (max {max})"))?;

    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    Ok(Nombre::Entier(acc))
}

/// max/min rendent l’opérande choisi tel quel (entier reste entier).
/// À égalité, le premier gagne.
pub fn maximum(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match a.comparer(b) {
        Some(Ordering::Less) => Ok(b.clone()),
        Some(_) => Ok(a.clone()),
        None => Err("comparaison impossible".into()),
    }
}

pub fn minimum(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    match a.comparer(b) {
        Some(Ordering::Greater) => Ok(b.clone()),
        Some(_) => Ok(a.clone()),
        None => Err("comparaison impossible".into()),
    }
}

pub fn reste_flottant(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    let (x, y) = (a.en_flottant()?, b.en_flottant()?);
    if y == 0.0 {
        return Err("modulo par zéro".into());
    }
    Ok(Nombre::Flottant(x % y))
}

pub fn pgcd(a: &Nombre, b: &Nombre) -> Result<Nombre, String> {
    let (Nombre::Entier(x), Nombre::Entier(y)) = (a, b) else {
        return Err("pgcd d’un nombre non entier".into());
    };
    let (mut x, mut y) = (x.abs(), y.abs());
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    Ok(Nombre::Entier(x))
}
