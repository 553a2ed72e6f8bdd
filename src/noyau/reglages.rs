// src/noyau/reglages.rs
//
// Réglages du noyau : garde-fous sur la taille des calculs exacts et sur la
// profondeur des piles. Valeurs par défaut prudentes, modifiables par builder.

/// Plus grand exposant accepté pour une puissance entière exacte.
pub const EXPOSANT_MAX: u32 = 100_000;

/// Taille maximale (en bits) du résultat d’une puissance entière exacte.
pub const BITS_MAX: u64 = 1 << 20;

/// Plus grand argument accepté par `factorial`.
pub const FACTORIELLE_MAX: u64 = 10_000;

/// Profondeur maximale des piles (opérateurs et opérandes).
pub const PROFONDEUR_MAX: usize = 8192;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub exposant_max: u32,
    pub bits_max: u64,
    pub factorielle_max: u64,
    pub profondeur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            exposant_max: EXPOSANT_MAX,
            bits_max: BITS_MAX,
            factorielle_max: FACTORIELLE_MAX,
            profondeur_max: PROFONDEUR_MAX,
        }
    }
}

impl Reglages {
    pub fn with_exposant_max(mut self, n: u32) -> Self {
        self.exposant_max = n;
        self
    }

    pub fn with_bits_max(mut self, n: u64) -> Self {
        self.bits_max = n;
        self
    }

    pub fn with_factorielle_max(mut self, n: u64) -> Self {
        self.factorielle_max = n;
        self
    }

    pub fn with_profondeur_max(mut self, n: usize) -> Self {
        self.profondeur_max = n;
        self
    }
}
