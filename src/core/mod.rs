// =============================================================================
// CORE — Les types algébriques et leurs contrats
// =============================================================================
//
// Rien que des valeurs pures : pas d'I/O, pas d'état partagé, pas de
// concurrence. Chaque combinateur consomme des valeurs et en produit
// de nouvelles.
//
// Architecture :
//   typeclass → les capacités (Functor, Chain, Setoid...) sous forme de traits
//   either    → Either<L, R> : Left | Right
//   maybe     → Maybe<T>     : Nothing | Just
//   laws      → les lois algébriques, vérifiables sur des valeurs concrètes
//
// =============================================================================

pub mod typeclass;
pub mod either;
pub mod maybe;
pub mod laws;
