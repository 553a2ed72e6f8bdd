// src/noyau/rpn.rs
//
// Shunting-yard : entités infixes -> entités postfixées (RPN)
//
// Règles:
// - Nombre          : sortie directe
// - Fonction, "("   : empilés
// - ","             : dépile jusqu’à "(" (qui reste, pour l’argument suivant)
// - ")"             : dépile jusqu’à "(", jette "(", puis sort la fonction
//                     éventuelle au sommet (elle colle à ses arguments)
// - Opérateur op1   : dépile les op2 du sommet tant que
//                       prec(op2) > prec(op1)
//                       ou prec(op2) == prec(op1) et op1 associatif à gauche
//                     puis empile op1
// - fin             : vide la pile ; une "(" restante = parenthèse non fermée
//
// NOTE:
// - "^" est associatif à droite : il ne dépile pas un "^" déjà empilé,
//   donc 2^3^2 = 2^(3^2).
// - Un opérateur préfixe (négation) n’a pas encore d’opérande gauche :
//   il ne dépile rien (sinon "2 ^ -3" sortirait "^" trop tôt).
// - La sortie ne contient jamais de parenthèses ni de virgules.

use std::collections::VecDeque;

use super::entites::{Associativite, Entite, Operateur, Parenthese, Unaire};
use super::erreur::Erreur;
use super::reglages::PROFONDEUR_MAX;

/// Faut-il sortir `sommet` (déjà empilé) avant d’empiler `entrant` ?
fn doit_depiler(sommet: Operateur, entrant: Operateur) -> bool {
    let (p_sommet, p_entrant) = (sommet.precedence(), entrant.precedence());
    p_sommet > p_entrant
        || (p_sommet == p_entrant && entrant.associativite() == Associativite::Gauche)
}

/// Itérateur RPN (paresseux). S’arrête après la première erreur.
pub struct Postfixe<I> {
    entites: I,
    pile: Vec<Entite>,
    sortie: VecDeque<Entite>,
    profondeur_max: usize,
    epuise: bool,
    termine: bool,
}

impl<I> Postfixe<I> {
    pub fn new(entites: I, profondeur_max: usize) -> Self {
        Self {
            entites,
            pile: Vec::new(),
            sortie: VecDeque::new(),
            profondeur_max,
            epuise: false,
            termine: false,
        }
    }

    fn empiler(&mut self, e: Entite) -> Result<(), Erreur> {
        if self.pile.len() >= self.profondeur_max {
            return Err(Erreur::TropProfond {
                limite: self.profondeur_max,
            });
        }
        self.pile.push(e);
        Ok(())
    }

    fn sommet_est_ouvrante(&self) -> bool {
        matches!(self.pile.last(), Some(Entite::Parenthese(Parenthese::Gauche)))
    }

    fn traiter(&mut self, entite: Entite) -> Result<(), Erreur> {
        match entite {
            Entite::Nombre(_) => self.sortie.push_back(entite),

            Entite::Fonction(_) | Entite::Parenthese(Parenthese::Gauche) => self.empiler(entite)?,

            Entite::Virgule => {
                while !self.sommet_est_ouvrante() {
                    let e = self.pile.pop().ok_or(Erreur::SeparateurMalPlace)?;
                    self.sortie.push_back(e);
                }
            }

            Entite::Parenthese(Parenthese::Droite) => {
                loop {
                    match self.pile.pop() {
                        Some(Entite::Parenthese(Parenthese::Gauche)) => break,
                        Some(e) => self.sortie.push_back(e),
                        None => return Err(Erreur::ParentheseNonAppariee),
                    }
                }
                if let Some(Entite::Fonction(_)) = self.pile.last() {
                    self.sortie.extend(self.pile.pop());
                }
            }

            Entite::Operateur(op1) => {
                if op1.unaire() != Unaire::Prefixe {
                    while let Some(Entite::Operateur(op2)) = self.pile.last() {
                        let op2 = *op2;
                        if !doit_depiler(op2, op1) {
                            break;
                        }
                        self.pile.pop();
                        self.sortie.push_back(Entite::Operateur(op2));
                    }
                }
                self.empiler(Entite::Operateur(op1))?;
            }
        }
        Ok(())
    }

    fn echec(&mut self, e: Erreur) -> Option<Result<Entite, Erreur>> {
        self.termine = true;
        self.sortie.clear();
        self.pile.clear();
        Some(Err(e))
    }
}

impl<I> Iterator for Postfixe<I>
where
    I: Iterator<Item = Result<Entite, Erreur>>,
{
    type Item = Result<Entite, Erreur>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.sortie.pop_front() {
                log::trace!("rpn <- {e:?}");
                return Some(Ok(e));
            }
            if self.termine {
                return None;
            }

            if self.epuise {
                // fin d’entrée : on vide la pile
                return match self.pile.pop() {
                    None => {
                        self.termine = true;
                        None
                    }
                    Some(Entite::Parenthese(_)) => self.echec(Erreur::ParentheseNonAppariee),
                    Some(e) => {
                        log::trace!("rpn <- {e:?}");
                        Some(Ok(e))
                    }
                };
            }

            match self.entites.next() {
                None => self.epuise = true,
                Some(Err(e)) => return self.echec(e),
                Some(Ok(entite)) => {
                    if let Err(e) = self.traiter(entite) {
                        return self.echec(e);
                    }
                }
            }
        }
    }
}

/// Conversion infixe -> postfixe (paresseuse).
pub fn to_postfix<I>(entites: I) -> Postfixe<I::IntoIter>
where
    I: IntoIterator<Item = Result<Entite, Erreur>>,
{
    Postfixe::new(entites.into_iter(), PROFONDEUR_MAX)
}

/// Version « tout de suite » sur une tranche d’entités.
pub fn to_rpn(entites: &[Entite]) -> Result<Vec<Entite>, Erreur> {
    to_postfix(entites.iter().cloned().map(Ok)).collect()
}
