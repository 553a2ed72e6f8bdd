// src/lib.rs
//
// Calculatrice RPN — bibliothèque
// -------------------------------
// Expression infixe (texte) -> nombre, via :
//   lex -> resolve -> to_postfix -> evaluate
//
// Pas d’entrée/sortie ici : l’appelant lit le texte, affiche le nombre ou
// l’erreur (voir `Erreur::categorie`).

pub mod noyau;

pub use noyau::*;
