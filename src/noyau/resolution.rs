// src/noyau/resolution.rs
//
// Résolution : jetons texte -> entités typées (paresseux, même ordre).
//
// Ordre d’essai pour chaque jeton :
//   1) entier exact      "42"
//   2) flottant          "3.14", ".5", "5."
//   3) moins "-" / "−"   -> négation ou soustraction selon l’entité précédente
//   4) table fixe        parenthèses, virgule, opérateurs, fonctions, constantes
//   5) bibliothèque math (fonction réelle à un argument, injectée)
//   6) sinon : jeton inconnu
//
// Seul état : la dernière entité résolue (pour le moins). Il vit dans
// l’itérateur, pas dans le module.

use num_bigint::BigInt;

use super::entites::{entite_fixe, Entite, Fonction, Operateur, Parenthese};
use super::erreur::Erreur;
use super::math::{BibliothequeMath, MathStd};
use super::nombre::Nombre;

/// Moins unaire ou binaire, d’après l’entité qui précède.
///
/// - rien, "(", ",", un opérateur (y compris une négation) -> négation
/// - un nombre, ")"                                         -> soustraction
/// - une fonction (il manque sa parenthèse)                 -> erreur
pub fn desambiguer_moins(dernier: Option<&Entite>) -> Result<Operateur, Erreur> {
    match dernier {
        None
        | Some(Entite::Parenthese(Parenthese::Gauche))
        | Some(Entite::Virgule)
        | Some(Entite::Operateur(_)) => Ok(Operateur::Negation),
        Some(Entite::Nombre(_)) | Some(Entite::Parenthese(Parenthese::Droite)) => {
            Ok(Operateur::Soustraction)
        }
        Some(Entite::Fonction(f)) => Err(Erreur::Desambiguisation {
            contexte: format!("la fonction '{}'", f.nom()),
        }),
    }
}

fn est_chiffres(jeton: &str) -> bool {
    !jeton.is_empty() && jeton.bytes().all(|b| b.is_ascii_digit())
}

/// Chiffres + un seul point, au moins un chiffre.
fn est_decimal(jeton: &str) -> bool {
    let points = jeton.bytes().filter(|b| *b == b'.').count();
    points == 1
        && jeton.bytes().any(|b| b.is_ascii_digit())
        && jeton.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn lire_nombre(jeton: &str) -> Option<Nombre> {
    if est_chiffres(jeton) {
        return jeton.parse::<BigInt>().ok().map(Nombre::Entier);
    }
    if est_decimal(jeton) {
        return jeton.parse::<f64>().ok().map(Nombre::Flottant);
    }
    None
}

/// Résout un seul jeton. Fonction pure du jeton, de l’entité précédente
/// (pour le moins seulement) et de la bibliothèque.
pub fn resoudre_jeton<B>(
    jeton: &str,
    dernier: Option<&Entite>,
    bibliotheque: &B,
) -> Result<Entite, Erreur>
where
    B: BibliothequeMath + ?Sized,
{
    if let Some(n) = lire_nombre(jeton) {
        return Ok(Entite::Nombre(n));
    }

    if jeton == "-" || jeton == "−" {
        return desambiguer_moins(dernier).map(Entite::Operateur);
    }

    if let Some(e) = entite_fixe(jeton) {
        return Ok(e);
    }

    if let Some(f) = bibliotheque.fonction(jeton) {
        return Ok(Entite::Fonction(Fonction::Externe {
            nom: jeton.to_string(),
            f,
        }));
    }

    Err(Erreur::JetonInconnu {
        jeton: jeton.to_string(),
    })
}

/// Itérateur d’entités. S’arrête après la première erreur (amont ou locale).
pub struct Resolver<I, B> {
    jetons: I,
    bibliotheque: B,
    dernier: Option<Entite>,
    termine: bool,
}

impl<I, S, B> Iterator for Resolver<I, B>
where
    I: Iterator<Item = Result<S, Erreur>>,
    S: AsRef<str>,
    B: BibliothequeMath,
{
    type Item = Result<Entite, Erreur>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termine {
            return None;
        }

        let resultat = self.jetons.next()?.and_then(|jeton| {
            resoudre_jeton(jeton.as_ref(), self.dernier.as_ref(), &self.bibliotheque)
        });

        match resultat {
            Ok(entite) => {
                log::trace!("entité {entite:?}");
                self.dernier = Some(entite.clone());
                Some(Ok(entite))
            }
            Err(e) => {
                self.termine = true;
                Some(Err(e))
            }
        }
    }
}

/// Résolution avec la bibliothèque standard (`MathStd`).
pub fn resolve<I, S>(jetons: I) -> Resolver<I::IntoIter, MathStd>
where
    I: IntoIterator<Item = Result<S, Erreur>>,
    S: AsRef<str>,
{
    resolve_with(jetons, MathStd)
}

/// Résolution avec une bibliothèque injectée.
pub fn resolve_with<I, S, B>(jetons: I, bibliotheque: B) -> Resolver<I::IntoIter, B>
where
    I: IntoIterator<Item = Result<S, Erreur>>,
    S: AsRef<str>,
    B: BibliothequeMath,
{
    Resolver {
        jetons: jetons.into_iter(),
        bibliotheque,
        dernier: None,
        termine: false,
    }
}
