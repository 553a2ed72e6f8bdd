// src/noyau/entites.rs
//
// Entités = jetons typés (nombre, opérateur, fonction, parenthèse, virgule).
// Enum fermé : convertisseur et évaluateur font un match exhaustif dessus.
//
// Égalité : même variante + même appelable (pas le nom affiché).
// Donc "/" et "÷" donnent la même entité, "*" et "×" aussi.

use std::f64::consts::{E, PI, TAU};

use super::math::FonctionReelle;
use super::nombre::{self, Nombre};
use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Position d’un opérateur unaire par rapport à son opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Aucun,
    Prefixe,
    Suffixe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
    Negation,
}

impl Operateur {
    pub fn arite(self) -> usize {
        match self {
            Operateur::Negation => 1,
            _ => 2,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub fn unaire(self) -> Unaire {
        match self {
            Operateur::Negation => Unaire::Prefixe,
            _ => Unaire::Aucun,
        }
    }

    /// Précédence (du plus faible au plus fort) : + - < * / % < neg < ^
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Addition | Operateur::Soustraction => 1,
            Operateur::Multiplication | Operateur::Division | Operateur::Modulo => 2,
            Operateur::Negation => 3,
            Operateur::Puissance => 4,
        }
    }

    /// Graphie canonique (la première enregistrée).
    pub fn nom(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
            Operateur::Modulo => "%",
            Operateur::Puissance => "^",
            Operateur::Negation => "neg",
        }
    }

    pub fn appliquer(self, args: &[Nombre], reglages: &Reglages) -> Result<Nombre, String> {
        use Operateur::*;
        match (self, args) {
            (Negation, [a]) => Ok(nombre::negatif(a)),
            (Addition, [a, b]) => nombre::additionner(a, b),
            (Soustraction, [a, b]) => nombre::soustraire(a, b),
            (Multiplication, [a, b]) => nombre::multiplier(a, b),
            (Division, [a, b]) => nombre::diviser(a, b),
            (Modulo, [a, b]) => nombre::modulo(a, b),
            (Puissance, [a, b]) => nombre::puissance(a, b, reglages),
            _ => Err(format!("{} argument(s) au lieu de {}", args.len(), self.arite())),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Fonction {
    Abs,
    Sqrt,
    Factorielle,
    Max,
    Min,
    Pow,
    Atan2,
    Hypot,
    Fmod,
    Pgcd,
    /// Fonction à un argument venue de la bibliothèque hôte.
    Externe { nom: String, f: FonctionReelle },
}

impl PartialEq for Fonction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // identité de l’appelable, pas du nom.
            // NOTE: adresses de fonctions non garanties uniques (deux fonctions
            // identiques peuvent être fusionnées, une même fonction dupliquée
            // entre unités de compilation) : égalité au mieux.
            (Fonction::Externe { f: a, .. }, Fonction::Externe { f: b, .. }) => {
                std::ptr::fn_addr_eq(*a, *b)
            }
            (Fonction::Externe { .. }, _) | (_, Fonction::Externe { .. }) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Fonction {
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Abs | Fonction::Sqrt | Fonction::Factorielle | Fonction::Externe { .. } => 1,
            Fonction::Max
            | Fonction::Min
            | Fonction::Pow
            | Fonction::Atan2
            | Fonction::Hypot
            | Fonction::Fmod
            | Fonction::Pgcd => 2,
        }
    }

    pub fn nom(&self) -> &str {
        match self {
            Fonction::Abs => "abs",
            Fonction::Sqrt => "sqrt",
            Fonction::Factorielle => "factorial",
            Fonction::Max => "max",
            Fonction::Min => "min",
            Fonction::Pow => "pow",
            Fonction::Atan2 => "atan2",
            Fonction::Hypot => "hypot",
            Fonction::Fmod => "fmod",
            Fonction::Pgcd => "gcd",
            Fonction::Externe { nom, .. } => nom.as_str(),
        }
    }

    pub fn appliquer(&self, args: &[Nombre], reglages: &Reglages) -> Result<Nombre, String> {
        use Fonction::*;
        match (self, args) {
            (Abs, [a]) => Ok(nombre::valeur_absolue(a)),
            (Sqrt, [a]) => nombre::racine_carree(a),
            (Factorielle, [a]) => nombre::factorielle(a, reglages),
            (Max, [a, b]) => nombre::maximum(a, b),
            (Min, [a, b]) => nombre::minimum(a, b),
            (Pow, [a, b]) => {
                nombre::puissance_flottante(a.en_flottant()?, b.en_flottant()?).map(Nombre::Flottant)
            }
            (Atan2, [y, x]) => Ok(Nombre::Flottant(y.en_flottant()?.atan2(x.en_flottant()?))),
            (Hypot, [a, b]) => Ok(Nombre::Flottant(a.en_flottant()?.hypot(b.en_flottant()?))),
            (Fmod, [a, b]) => nombre::reste_flottant(a, b),
            (Pgcd, [a, b]) => nombre::pgcd(a, b),
            (Externe { f, .. }, [a]) => appliquer_externe(*f, a),
            _ => Err(format!("{} argument(s) au lieu de {}", args.len(), self.arite())),
        }
    }
}

/// NaN sorti d’un argument normal, ou infini sorti d’un argument fini :
/// hors du domaine de la fonction (log(-1), log(0), exp(1000)...).
fn appliquer_externe(f: FonctionReelle, a: &Nombre) -> Result<Nombre, String> {
    let x = a.en_flottant()?;
    let y = f(x);
    if y.is_nan() && !x.is_nan() {
        return Err("erreur de domaine mathématique".into());
    }
    if y.is_infinite() && x.is_finite() {
        return Err("résultat infini".into());
    }
    Ok(Nombre::Flottant(y))
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entite {
    Nombre(Nombre),
    Operateur(Operateur),
    Fonction(Fonction),
    Parenthese(Parenthese),
    Virgule,
}

impl Entite {
    pub fn est_structurelle(&self) -> bool {
        matches!(self, Entite::Parenthese(_) | Entite::Virgule)
    }
}

/// Table fixe : jeton -> entité. Le moins ("-", "−") n’y est pas :
/// il dépend du contexte (voir resolution.rs).
pub fn entite_fixe(jeton: &str) -> Option<Entite> {
    let e = match jeton {
        "(" => Entite::Parenthese(Parenthese::Gauche),
        ")" => Entite::Parenthese(Parenthese::Droite),
        "," => Entite::Virgule,

        "+" => Entite::Operateur(Operateur::Addition),
        "*" | "×" => Entite::Operateur(Operateur::Multiplication),
        "/" | "÷" => Entite::Operateur(Operateur::Division),
        "%" => Entite::Operateur(Operateur::Modulo),
        "^" => Entite::Operateur(Operateur::Puissance),

        "abs" => Entite::Fonction(Fonction::Abs),
        "sqrt" => Entite::Fonction(Fonction::Sqrt),
        "factorial" => Entite::Fonction(Fonction::Factorielle),
        "max" => Entite::Fonction(Fonction::Max),
        "min" => Entite::Fonction(Fonction::Min),
        "pow" => Entite::Fonction(Fonction::Pow),
        "atan2" => Entite::Fonction(Fonction::Atan2),
        "hypot" => Entite::Fonction(Fonction::Hypot),
        "fmod" => Entite::Fonction(Fonction::Fmod),
        "gcd" => Entite::Fonction(Fonction::Pgcd),

        // constantes nommées
        "π" | "pi" => Entite::Nombre(Nombre::Flottant(PI)),
        "τ" | "tau" => Entite::Nombre(Nombre::Flottant(TAU)),
        "e" => Entite::Nombre(Nombre::Flottant(E)),

        _ => return None,
    };
    Some(e)
}
