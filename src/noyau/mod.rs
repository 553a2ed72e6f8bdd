//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (caractères -> jetons texte)
//! - entites.rs    : entités typées + table fixe (opérateurs, fonctions, constantes)
//! - resolution.rs : jetons -> entités (moins unaire / binaire)
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - eval.rs       : évaluation RPN + pipeline complet
//! - format.rs     : affichage canonique des entités
//! - nombre.rs     : entiers exacts / flottants et leur arithmétique
//! - math.rs       : bibliothèque mathématique injectée (fonctions à un argument)
//! - reglages.rs   : garde-fous configurables
//! - erreur.rs     : erreurs du noyau

pub mod entites;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod math;
pub mod nombre;
pub mod reglages;
pub mod resolution;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use entites::{Associativite, Entite, Fonction, Operateur, Parenthese, Unaire};
pub use erreur::{Categorie, Erreur};
pub use eval::{eval_expression, eval_rpn, evaluate, evaluate_with, Calculatrice, Demarche};
pub use format::{render, render_all};
pub use jetons::{lex, tokenize, Lexer};
pub use math::{BibliothequeMath, FonctionReelle, MathStd};
pub use nombre::Nombre;
pub use reglages::Reglages;
pub use resolution::{resolve, resolve_with, Resolver};
pub use rpn::{to_postfix, to_rpn, Postfixe};
