//! Noyau — évaluation (pipeline réel)
//!
//! lex -> resolve -> to_postfix -> evaluate
//!
//! Chaque étage est un itérateur paresseux : une expression est traitée en
//! une seule passe, sans vecteur intermédiaire.

use super::entites::Entite;
use super::erreur::Erreur;
use super::format::{render, render_all};
use super::jetons::{lex, tokenize};
use super::math::{BibliothequeMath, MathStd};
use super::nombre::Nombre;
use super::reglages::Reglages;
use super::resolution::resolve_with;
use super::rpn::Postfixe;

/* ------------------------ Évaluation RPN ------------------------ */

/// Dépile `arite` valeurs (dans l’ordre gauche -> droite), applique, rempile.
fn appliquer<F>(pile: &mut Vec<Nombre>, nom: &str, arite: usize, f: F) -> Result<(), Erreur>
where
    F: FnOnce(&[Nombre]) -> Result<Nombre, String>,
{
    if pile.len() < arite {
        return Err(Erreur::Arite {
            operateur: nom.to_string(),
        });
    }
    let args = pile.split_off(pile.len() - arite);
    let r = f(&args).map_err(|detail| Erreur::domaine(nom, detail))?;
    log::trace!("{nom} {args:?} = {r}");
    pile.push(r);
    Ok(())
}

/// Évalue une suite postfixée avec des réglages explicites.
pub fn evaluate_with<I>(postfixe: I, reglages: &Reglages) -> Result<Nombre, Erreur>
where
    I: IntoIterator<Item = Result<Entite, Erreur>>,
{
    let mut pile: Vec<Nombre> = Vec::new();

    for entite in postfixe {
        match entite? {
            Entite::Nombre(n) => {
                if pile.len() >= reglages.profondeur_max {
                    return Err(Erreur::TropProfond {
                        limite: reglages.profondeur_max,
                    });
                }
                pile.push(n);
            }
            Entite::Operateur(op) => {
                appliquer(&mut pile, op.nom(), op.arite(), |args| {
                    op.appliquer(args, reglages)
                })?;
            }
            Entite::Fonction(f) => {
                appliquer(&mut pile, f.nom(), f.arite(), |args| f.appliquer(args, reglages))?;
            }
            e @ (Entite::Parenthese(_) | Entite::Virgule) => {
                return Err(Erreur::JetonStructurel { jeton: render(&e) });
            }
        }
    }

    match pile.len() {
        1 => pile.pop().ok_or(Erreur::ExpressionMalFormee { profondeur: 0 }),
        profondeur => Err(Erreur::ExpressionMalFormee { profondeur }),
    }
}

/// Évalue une suite postfixée (réglages par défaut).
pub fn evaluate<I>(postfixe: I) -> Result<Nombre, Erreur>
where
    I: IntoIterator<Item = Result<Entite, Erreur>>,
{
    evaluate_with(postfixe, &Reglages::default())
}

/// Version tranche de `evaluate`.
pub fn eval_rpn(rpn: &[Entite]) -> Result<Nombre, Erreur> {
    evaluate(rpn.iter().cloned().map(Ok))
}

/* ------------------------ Façade ------------------------ */

/// Étapes intermédiaires, pour l’affichage « démarche ».
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub entites: String,
    pub rpn: String,
    pub resultat: Nombre,
}

/// Calculatrice configurée : réglages + bibliothèque mathématique.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice<B = MathStd> {
    reglages: Reglages,
    bibliotheque: B,
}

impl Calculatrice<MathStd> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BibliothequeMath> Calculatrice<B> {
    pub fn with_reglages(mut self, reglages: Reglages) -> Self {
        self.reglages = reglages;
        self
    }

    pub fn with_bibliotheque<C: BibliothequeMath>(self, bibliotheque: C) -> Calculatrice<C> {
        Calculatrice {
            reglages: self.reglages,
            bibliotheque,
        }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Pipeline complet, en une passe.
    pub fn eval_expression(&self, s: &str) -> Result<Nombre, Erreur> {
        log::debug!("évaluation de {s:?}");
        let entites = resolve_with(lex(s), &self.bibliotheque);
        let postfixe = Postfixe::new(entites, self.reglages.profondeur_max);
        let r = evaluate_with(postfixe, &self.reglages);
        match &r {
            Ok(n) => log::debug!("{s:?} = {n}"),
            Err(e) => log::debug!("{s:?} : {e}"),
        }
        r
    }

    /// Même pipeline, étages matérialisés et rendus en texte.
    pub fn demarche(&self, s: &str) -> Result<Demarche, Erreur> {
        let jetons = tokenize(s)?;
        let entites = resolve_with(jetons.iter().map(|j| Ok(j.as_str())), &self.bibliotheque)
            .collect::<Result<Vec<_>, _>>()?;
        let rpn = Postfixe::new(
            entites.iter().cloned().map(Ok),
            self.reglages.profondeur_max,
        )
        .collect::<Result<Vec<_>, _>>()?;
        let resultat = evaluate_with(rpn.iter().cloned().map(Ok), &self.reglages)?;

        Ok(Demarche {
            jetons: jetons.join(" "),
            entites: render_all(&entites),
            rpn: render_all(&rpn),
            resultat,
        })
    }
}

/// API publique : évalue une expression avec la configuration par défaut.
pub fn eval_expression(s: &str) -> Result<Nombre, Erreur> {
    Calculatrice::new().eval_expression(s)
}
