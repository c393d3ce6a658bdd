// =============================================================================
// ERROR — Erreurs d'usage (jamais des erreurs de domaine)
// =============================================================================
//
// Deux régimes d'erreurs cohabitent dans ce crate :
//   1. Les erreurs de DOMAINE sont des données : Left(e) ou Nothing.
//      Aucun combinateur (map, chain, ap...) ne panique pour ça.
//   2. Les erreurs d'USAGE : un appel à unsafe_coerce sur la mauvaise
//      variante. C'est la seule opération qui peut paniquer.
//
// LawViolation sert à la vérification des lois (module core::laws).
//
// =============================================================================

use thiserror::Error;

/// Erreur d'usage : on a forcé l'extraction d'une valeur absente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdtError {
    /// `unsafe_coerce` appelé sur un `Left`
    #[error("unsafe_coerce appelé sur une valeur Left")]
    CoercedLeft,
    /// `unsafe_coerce` appelé sur `Nothing`
    #[error("unsafe_coerce appelé sur Nothing")]
    CoercedNothing,
}

/// Une loi algébrique qui n'est pas respectée pour des valeurs données.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("loi '{law}' violée : {details}")]
pub struct LawViolation {
    /// Nom court de la loi (ex: "functor/identity")
    pub law: &'static str,
    /// Les valeurs en cause, rendues avec Debug
    pub details: String,
}

impl LawViolation {
    pub fn new(law: &'static str, details: impl Into<String>) -> Self {
        LawViolation { law, details: details.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adt_error_messages() {
        assert_eq!(AdtError::CoercedLeft.to_string(), "unsafe_coerce appelé sur une valeur Left");
        assert_eq!(AdtError::CoercedNothing.to_string(), "unsafe_coerce appelé sur Nothing");
    }

    #[test]
    fn test_law_violation_display() {
        let v = LawViolation::new("functor/identity", "Right(5) != Right(6)");
        assert_eq!(v.to_string(), "loi 'functor/identity' violée : Right(5) != Right(6)");
    }
}
