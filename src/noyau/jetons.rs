// src/noyau/jetons.rs
//
// Tokenisation : suite de caractères -> suite (paresseuse) de jetons texte.
//
// Chaque caractère tombe dans exactement une classe :
// - parenthèse      ( )
// - opérateur       + - * / ^ % × ÷ −   (toujours un jeton d’un seul caractère)
// - virgule         ,
// - chiffre         0-9 et '.'          (s’accumulent : "3.14")
// - lettre          alphabétique + '_'  (s’accumulent : "sin", "π"), puis
//                   chiffres ASCII admis dans un nom déjà commencé ("log10")
// - espace          séparateur, jamais émis
//
// NOTE: pas de fusion des opérateurs, "--5" donne "-" "-" "5".
// Un caractère hors classe est une erreur lexicale (avec sa position).

use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use super::erreur::Erreur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classe {
    Parenthese,
    Operateur,
    Virgule,
    Chiffre,
    Lettre,
    Espace,
}

/// Glyphes d’opérateurs (ASCII + ×, ÷ et le moins Unicode).
pub const OPERATEURS: &[char] = &['+', '-', '*', '/', '^', '%', '×', '÷', '−'];

pub fn classer(c: char) -> Option<Classe> {
    match c {
        '(' | ')' => Some(Classe::Parenthese),
        ',' => Some(Classe::Virgule),
        c if OPERATEURS.contains(&c) => Some(Classe::Operateur),
        c if c.is_ascii_digit() || c == '.' => Some(Classe::Chiffre),
        c if c.is_alphabetic() || c == '_' => Some(Classe::Lettre),
        c if c.is_whitespace() => Some(Classe::Espace),
        _ => None,
    }
}

/// Itérateur de jetons. S’arrête après la première erreur.
pub struct Lexer<'a> {
    chars: Peekable<Enumerate<Chars<'a>>>,
    termine: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars().enumerate().peekable(),
            termine: false,
        }
    }

    /// Accumule la suite des caractères de même classe.
    /// Un nom garde les chiffres qui le suivent : [lettre_][lettre_0-9]*.
    fn accumuler(&mut self, premier: char, classe: Classe) -> String {
        let mut jeton = String::from(premier);
        while let Some(&(_, c)) = self.chars.peek() {
            let suite = classer(c) == Some(classe)
                || (classe == Classe::Lettre && c.is_ascii_digit());
            if !suite {
                break;
            }
            jeton.push(c);
            self.chars.next();
        }
        jeton
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, Erreur>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termine {
            return None;
        }

        loop {
            let (position, c) = self.chars.next()?;

            let jeton = match classer(c) {
                Some(Classe::Espace) => continue,
                Some(Classe::Parenthese | Classe::Operateur | Classe::Virgule) => c.to_string(),
                Some(classe @ (Classe::Chiffre | Classe::Lettre)) => self.accumuler(c, classe),
                None => {
                    self.termine = true;
                    return Some(Err(Erreur::Lexicale {
                        caractere: c,
                        position,
                    }));
                }
            };

            log::trace!("jeton {jeton:?} (position {position})");
            return Some(Ok(jeton));
        }
    }
}

/// Découpe `s` en jetons (paresseux).
pub fn lex(s: &str) -> Lexer<'_> {
    Lexer::new(s)
}

/// Version « tout de suite » : tous les jetons, ou la première erreur.
pub fn tokenize(s: &str) -> Result<Vec<String>, Erreur> {
    lex(s).collect()
}
