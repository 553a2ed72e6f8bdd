// src/noyau/erreur.rs
//
// Erreurs du noyau (une variante par type d’échec).
// Chaque étage échoue vite : la première erreur rencontrée remonte telle quelle.

/// Grande famille d’une erreur (pour l’appelant qui formate le message).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Lexicale,
    Resolution,
    Structure,
    Arite,
    Domaine,
    Resultat,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Erreur {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    Lexicale { caractere: char, position: usize },

    #[error("jeton inconnu: '{jeton}'")]
    JetonInconnu { jeton: String },

    #[error("signe moins ambigu après {contexte}")]
    Desambiguisation { contexte: String },

    #[error("parenthèses non appariées")]
    ParentheseNonAppariee,

    #[error("virgule hors d’une liste d’arguments")]
    SeparateurMalPlace,

    #[error("'{operateur}' : pas assez d’opérandes")]
    Arite { operateur: String },

    #[error("'{operateur}' : {detail}")]
    Domaine { operateur: String, detail: String },

    #[error("expression invalide ({profondeur} valeur(s) restante(s) au lieu d’une)")]
    ExpressionMalFormee { profondeur: usize },

    #[error("jeton structurel '{jeton}' inattendu en RPN")]
    JetonStructurel { jeton: String },

    #[error("expression trop profonde (limite {limite})")]
    TropProfond { limite: usize },
}

impl Erreur {
    pub fn categorie(&self) -> Categorie {
        match self {
            Erreur::Lexicale { .. } => Categorie::Lexicale,
            Erreur::JetonInconnu { .. } | Erreur::Desambiguisation { .. } => Categorie::Resolution,
            Erreur::ParentheseNonAppariee
            | Erreur::SeparateurMalPlace
            | Erreur::JetonStructurel { .. }
            | Erreur::TropProfond { .. } => Categorie::Structure,
            Erreur::Arite { .. } => Categorie::Arite,
            Erreur::Domaine { .. } => Categorie::Domaine,
            Erreur::ExpressionMalFormee { .. } => Categorie::Resultat,
        }
    }

    pub(crate) fn domaine(operateur: &str, detail: impl Into<String>) -> Self {
        Erreur::Domaine {
            operateur: operateur.to_string(),
            detail: detail.into(),
        }
    }
}
