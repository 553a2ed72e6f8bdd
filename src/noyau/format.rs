// src/noyau/format.rs
//
// Affichage des entités (débogage, tests « golden »).
// Graphie canonique = la première enregistrée : "÷" s’affiche "/", "×" "*".
// La négation s’affiche "neg" pour ne pas la confondre avec la soustraction.
// Pas un inverse du lexer : la graphie d’origine est perdue.

use std::fmt;

use super::entites::{Entite, Parenthese};

impl fmt::Display for Entite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entite::Nombre(n) => write!(f, "{n}"),
            Entite::Operateur(op) => f.write_str(op.nom()),
            Entite::Fonction(fonc) => f.write_str(fonc.nom()),
            Entite::Parenthese(Parenthese::Gauche) => f.write_str("("),
            Entite::Parenthese(Parenthese::Droite) => f.write_str(")"),
            Entite::Virgule => f.write_str(","),
        }
    }
}

pub fn render(e: &Entite) -> String {
    e.to_string()
}

/// Suite d’entités -> texte séparé par des espaces.
pub fn render_all<'a, I>(entites: I) -> String
where
    I: IntoIterator<Item = &'a Entite>,
{
    entites
        .into_iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(" ")
}
