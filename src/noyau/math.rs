// src/noyau/math.rs
//
// Bibliothèque mathématique « hôte » : fonctions réelles à un argument,
// retrouvées par leur nom quand le jeton n’est pas dans la table fixe.
// Injectée dans la résolution (trait), jamais consultée via un état global.

use std::collections::HashMap;

/// Fonction réelle à un argument.
pub type FonctionReelle = fn(f64) -> f64;

/// Capacité de recherche nom -> fonction réelle.
pub trait BibliothequeMath {
    fn fonction(&self, nom: &str) -> Option<FonctionReelle>;
}

/// Les fonctions à un argument de la bibliothèque standard (f64).
#[derive(Clone, Copy, Debug, Default)]
pub struct MathStd;

fn degres(x: f64) -> f64 {
    x.to_degrees()
}

fn radians(x: f64) -> f64 {
    x.to_radians()
}

/// Table (nom, fonction). Noms usuels, synonymes inclus (log = ln).
const FONCTIONS_STD: &[(&str, FonctionReelle)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("asinh", f64::asinh),
    ("acosh", f64::acosh),
    ("atanh", f64::atanh),
    ("exp", f64::exp),
    ("expm1", f64::exp_m1),
    ("exp2", f64::exp2),
    ("log", f64::ln),
    ("ln", f64::ln),
    ("log1p", f64::ln_1p),
    ("log2", f64::log2),
    ("log10", f64::log10),
    ("cbrt", f64::cbrt),
    ("floor", f64::floor),
    ("ceil", f64::ceil),
    ("trunc", f64::trunc),
    ("round", f64::round),
    ("fabs", f64::abs),
    ("degrees", degres),
    ("radians", radians),
];

impl BibliothequeMath for MathStd {
    fn fonction(&self, nom: &str) -> Option<FonctionReelle> {
        FONCTIONS_STD
            .iter()
            .find(|(n, _)| *n == nom)
            .map(|(_, f)| *f)
    }
}

/// Table libre (tests, environnements restreints).
impl BibliothequeMath for HashMap<String, FonctionReelle> {
    fn fonction(&self, nom: &str) -> Option<FonctionReelle> {
        self.get(nom).copied()
    }
}

impl<B: BibliothequeMath + ?Sized> BibliothequeMath for &B {
    fn fonction(&self, nom: &str) -> Option<FonctionReelle> {
        (**self).fonction(nom)
    }
}
