// =============================================================================
// ADTRUST — Either et Maybe, avec leurs classes de types
// =============================================================================
//
// Adtrust fournit deux types algébriques purs et immuables :
//   Either<L, R> = Left(L) | Right(R)   (une erreur OU une valeur)
//   Maybe<T>     = Nothing | Just(T)    (une valeur OU rien)
//
// et les contrats algébriques qu'ils implémentent, chacun comme un trait
// séparé (Functor, Apply, Applicative, Chain, Monad, Bifunctor, Alt, Plus,
// Extend, Setoid, Ordered, Semigroup, Foldable).
//
// Architecture :
//   core/   → les types, les traits et la vérification des lois
//   error   → les erreurs d'usage (unsafe_coerce) et les violations de lois
//
// Les erreurs de domaine sont des DONNÉES (Left, Nothing) : aucun
// combinateur ne panique, sauf unsafe_coerce qui est explicitement dangereux.
//
// =============================================================================

pub mod core;
pub mod error;

pub use crate::core::either::{Either, EitherPattern, Left, PanicPayload, Right};
pub use crate::core::maybe::{Just, Maybe, MaybePattern, Nothing};
pub use crate::error::{AdtError, LawViolation};
