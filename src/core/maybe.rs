// =============================================================================
// MAYBE — Le type option "une valeur OU rien"
// =============================================================================
//
// Un Maybe<T> est EXACTEMENT l'une des deux variantes :
//   - Nothing : l'absence de valeur (aucune donnée, tous les Nothing sont égaux)
//   - Just(T) : une valeur présente
//
// C'est le côté "succès" de Either sans le canal d'erreur : Maybe<T> se
// comporte comme Either<(), T>. Il n'a donc PAS de bimap ni de map_left.
//
// Nothing est ABSORBANT pour map, chain, ap et reduce :
//
//   Just(5).map(|x| x + 1)      → Just(6)
//   Nothing.map(|x| x + 1)      → Nothing
//   Just(5).chain(|_| Nothing)  → Nothing
//
// Ponts avec Either :
//   Either::to_maybe     : Right(r) → Just(r), Left → Nothing
//   Maybe::to_either(d)  : Just(v) → Right(v), Nothing → Left(d)
//
// =============================================================================

use super::either::{Either, Left, Right};
use super::typeclass::{
    Alt, Applicative, Apply, Chain, Extend, Foldable, Functor, Ordered, Plus, Semigroup, Setoid,
};
use crate::error::AdtError;

/// Une valeur présente (`Just`) ou absente (`Nothing`).
///
/// `Nothing` est déclaré en premier : l'ordre dérivé le place avant tout `Just`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    Nothing,
    Just(T),
}

pub use self::Maybe::{Just, Nothing};

/// Les deux gestionnaires de `case_of`, tous deux obligatoires.
pub struct MaybePattern<FN, FJ> {
    pub nothing: FN,
    pub just: FJ,
}

impl<T> Maybe<T> {
    pub fn of(value: T) -> Self {
        Just(value)
    }

    /// Le Maybe vide.
    pub fn empty() -> Self {
        Nothing
    }

    /// `Just(value)` si le prédicat est vrai, sinon `Nothing`.
    pub fn from_predicate<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Just(value)
        } else {
            Nothing
        }
    }

    /// Exécute un calcul faillible ; une erreur donne `Nothing`.
    ///
    /// L'erreur capturée est PERDUE. Pour la garder, passer par
    /// `Either::encase(..)` puis `.to_maybe()` au moment où on accepte de
    /// l'oublier.
    pub fn encase<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match computation() {
            Ok(value) => Just(value),
            Err(_) => {
                tracing::debug!("encase : erreur convertie en Nothing");
                Nothing
            }
        }
    }

    /// Garde les valeurs des `Just`, dans l'ordre.
    pub fn cat_maybes<I>(list: I) -> Vec<T>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        list.into_iter().flatten().collect()
    }

    /// Applique `f` à chaque élément et garde les résultats présents.
    pub fn map_maybe<A, I, F>(list: I, f: F) -> Vec<T>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Maybe<T>,
    {
        list.into_iter().flat_map(f).collect()
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Nothing => Nothing,
            Just(v) => Just(f(v)),
        }
    }

    /// `Just(f(v))` si les deux sont présents, sinon `Nothing`.
    pub fn ap<B, F>(self, other: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match (self, other) {
            (Just(v), Just(f)) => Just(f(v)),
            _ => Nothing,
        }
    }

    /// `self` s'il est présent, sinon `other`.
    pub fn alt(self, other: Self) -> Self {
        match self {
            Just(_) => self,
            Nothing => other,
        }
    }

    pub fn chain<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Nothing => Nothing,
            Just(v) => f(v),
        }
    }

    /// Comme `chain`, mais `f` retourne une `Option` standard.
    pub fn chain_option<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Option<B>,
    {
        self.chain(|v| f(v).into())
    }

    /// Garde la valeur seulement si elle satisfait le prédicat.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Just(v) => {
                if predicate(&v) {
                    Just(v)
                } else {
                    Nothing
                }
            }
            Nothing => Nothing,
        }
    }

    pub fn reduce<U, F>(self, reducer: F, initial: U) -> U
    where
        F: FnOnce(U, T) -> U,
    {
        match self {
            Nothing => initial,
            Just(v) => reducer(initial, v),
        }
    }

    /// `f` reçoit le Maybe entier.
    pub fn extend<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(&Maybe<T>) -> B,
    {
        match self {
            Nothing => Nothing,
            whole => Just(f(&whole)),
        }
    }

    /// Retourne la valeur d'un `Just`.
    ///
    /// # Panics
    ///
    /// Panique sur `Nothing`.
    pub fn unsafe_coerce(self) -> T {
        match self {
            Just(v) => v,
            Nothing => {
                let err = AdtError::CoercedNothing;
                tracing::error!(%err, "coercition forcée d'un Maybe");
                panic!("{}", err)
            }
        }
    }

    pub fn case_of<U, FN, FJ>(self, pattern: MaybePattern<FN, FJ>) -> U
    where
        FN: FnOnce() -> U,
        FJ: FnOnce(T) -> U,
    {
        match self {
            Nothing => (pattern.nothing)(),
            Just(v) => (pattern.just)(v),
        }
    }

    pub fn or_default(self, default: T) -> T {
        match self {
            Nothing => default,
            Just(v) => v,
        }
    }

    /// `f(v)` pour un `Just(v)`, `default` pour `Nothing`.
    pub fn map_or_default<U, F>(self, f: F, default: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Nothing => default,
            Just(v) => f(v),
        }
    }

    /// Sort du Maybe vers une `Option` standard.
    pub fn extract(self) -> Option<T> {
        self.into()
    }

    /// Zéro ou un élément.
    pub fn to_list(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// `Just(v) → Right(v)`, `Nothing → Left(left)`.
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Nothing => Left(left),
            Just(v) => Right(v),
        }
    }

    /// Effet de bord sur un `Just` ; retourne `self`.
    pub fn if_just<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Just(v) = &self {
            f(v);
        }
        self
    }

    /// Effet de bord sur `Nothing` ; retourne `self`.
    pub fn if_nothing<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_nothing() {
            f();
        }
        self
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Nothing => Nothing,
            Just(v) => Just(v),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn join(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Just(v),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Just(v) => Some(v),
            Nothing => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nothing => write!(f, "Nothing"),
            Just(v) => write!(f, "Just({})", v),
        }
    }
}

// -----------------------------------------------------------------------------
// Instances des classes de types
// -----------------------------------------------------------------------------

impl<T> Functor for Maybe<T> {
    type Item = T;
    type Mapped<B> = Maybe<B>;

    fn fmap<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(f)
    }
}

impl<T> Apply for Maybe<T> {
    fn ap<B, F>(self, other: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        Maybe::ap(self, other)
    }
}

impl<T> Applicative for Maybe<T> {
    fn of(value: T) -> Self {
        Just(value)
    }
}

impl<T> Chain for Maybe<T> {
    fn chain<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Maybe::chain(self, f)
    }
}

impl<T> Alt for Maybe<T> {
    fn alt(self, other: Self) -> Self {
        Maybe::alt(self, other)
    }
}

impl<T> Plus for Maybe<T> {
    fn zero() -> Self {
        Nothing
    }
}

impl<T> Extend for Maybe<T> {
    fn extend<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(&Self) -> B,
    {
        Maybe::extend(self, f)
    }
}

impl<T> Foldable for Maybe<T> {
    fn reduce<U, F>(self, reducer: F, initial: U) -> U
    where
        F: FnMut(U, T) -> U,
    {
        Maybe::reduce(self, reducer, initial)
    }
}

impl<T: Setoid> Setoid for Maybe<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Nothing, Nothing) => true,
            (Just(a), Just(b)) => a.equals(b),
            _ => false,
        }
    }
}

/// `Nothing` est inférieur à tout `Just`.
impl<T: Ordered> Ordered for Maybe<T> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (Nothing, _) => true,
            (Just(_), Nothing) => false,
            (Just(a), Just(b)) => a.lte(b),
        }
    }
}

impl<T: Semigroup> Semigroup for Maybe<T> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Just(a), Just(b)) => Just(a.concat(b)),
            (Just(a), Nothing) => Just(a),
            (Nothing, other) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ParseFailure;

    #[test]
    fn test_constructors() {
        assert_eq!(Maybe::of(5), Just(5));
        assert_eq!(Maybe::<i32>::empty(), Nothing);
        assert_eq!(Maybe::<i32>::zero(), Nothing);
        assert_eq!(Maybe::<i32>::default(), Nothing);
        assert_eq!(Maybe::from_predicate(|x: &i32| *x > 0, 5), Just(5));
        assert_eq!(Maybe::from_predicate(|x: &i32| *x > 0, -5), Nothing);
    }

    #[test]
    fn test_encase() {
        assert_eq!(Maybe::encase(|| Err::<i32, _>(ParseFailure)), Nothing);
        assert_eq!(Maybe::encase(|| Ok::<_, ParseFailure>(10)), Just(10));
        assert_eq!(Maybe::encase(|| "42".parse::<i32>()), Just(42));
    }

    #[test]
    fn test_encase_through_either_keeps_the_error() {
        let kept = Either::encase(|| "douze".parse::<i32>());
        assert!(kept.is_left());
        assert_eq!(kept.clone().to_maybe(), Maybe::encase(|| "douze".parse::<i32>()));

        let ok = Either::encase(|| "12".parse::<i32>());
        assert_eq!(ok.to_maybe(), Maybe::encase(|| "12".parse::<i32>()));
    }

    #[test]
    fn test_cat_maybes_and_map_maybe() {
        assert_eq!(Maybe::cat_maybes(vec![Just(1), Nothing, Just(3)]), vec![1, 3]);
        let evens = Maybe::map_maybe(1..=6, |x| Maybe::from_predicate(|v: &i32| v % 2 == 0, x));
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn test_is_just_is_nothing() {
        assert!(Just(1).is_just() && !Just(1).is_nothing());
        assert!(Nothing::<i32>.is_nothing() && !Nothing::<i32>.is_just());
    }

    #[test]
    fn test_map() {
        assert_eq!(Just(5).map(|x| x + 1), Just(6));
        assert_eq!(Nothing::<i32>.map(|x| x + 1), Nothing);
    }

    #[test]
    fn test_ap() {
        let add_one = |x: i32| x + 1;
        assert_eq!(Just(5).ap(Just(add_one)), Just(6));
        assert_eq!(Just(5).ap(Nothing::<fn(i32) -> i32>), Nothing);
        assert_eq!(Nothing::<i32>.ap(Just(add_one)), Nothing);
    }

    #[test]
    fn test_alt() {
        assert_eq!(Just(5).alt(Just(6)), Just(5));
        assert_eq!(Just(5).alt(Nothing), Just(5));
        assert_eq!(Nothing.alt(Just(6)), Just(6));
        assert_eq!(Nothing::<i32>.alt(Nothing), Nothing);
    }

    #[test]
    fn test_chain() {
        assert_eq!(Just(5).chain(|x| Just(x + 1)), Just(6));
        assert_eq!(Just(5).chain(|_| Nothing::<i32>), Nothing);
        assert_eq!(Nothing::<i32>.chain(|x| Just(x + 1)), Nothing);
    }

    #[test]
    fn test_chain_option_and_filter() {
        assert_eq!(Just("12").chain_option(|s| s.parse::<i32>().ok()), Just(12));
        assert_eq!(Just("xx").chain_option(|s| s.parse::<i32>().ok()), Nothing);
        assert_eq!(Just(4).filter(|x| x % 2 == 0), Just(4));
        assert_eq!(Just(3).filter(|x| x % 2 == 0), Nothing);
    }

    #[test]
    fn test_join() {
        assert_eq!(Just(Just(5)).join(), Just(5));
        assert_eq!(Just(Nothing::<i32>).join(), Nothing);
        assert_eq!(Nothing::<Maybe<i32>>.join(), Nothing);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(Just(5).reduce(|acc, x| x * acc, 2), 10);
        assert_eq!(Nothing::<i32>.reduce(|acc, x| x * acc, 0), 0);
    }

    #[test]
    fn test_extend() {
        assert_eq!(Just(5).extend(|m| m.is_just()), Just(true));
        assert_eq!(Nothing::<i32>.extend(|m| m.is_just()), Nothing);
    }

    #[test]
    fn test_unsafe_coerce_just() {
        assert_eq!(Just(5).unsafe_coerce(), 5);
    }

    #[test]
    #[should_panic(expected = "unsafe_coerce appelé sur Nothing")]
    fn test_unsafe_coerce_nothing_panics() {
        Nothing::<i32>.unsafe_coerce();
    }

    #[test]
    fn test_case_of() {
        let pattern = MaybePattern { nothing: || 0, just: |x: i32| x + 1 };
        assert_eq!(Just(6).case_of(pattern), 7);
        let pattern = MaybePattern { nothing: || 0, just: |x: i32| x + 1 };
        assert_eq!(Nothing.case_of(pattern), 0);
    }

    #[test]
    fn test_defaults_and_extract() {
        assert_eq!(Just(5).or_default(0), 5);
        assert_eq!(Nothing.or_default(0), 0);
        assert_eq!(Just(5).map_or_default(|x| x * 2, 0), 10);
        assert_eq!(Nothing::<i32>.map_or_default(|x| x * 2, 0), 0);
        assert_eq!(Just(5).extract(), Some(5));
        assert_eq!(Nothing::<i32>.extract(), None);
    }

    #[test]
    fn test_to_list_and_iter() {
        assert_eq!(Just(5).to_list(), vec![5]);
        assert!(Nothing::<i32>.to_list().is_empty());
        let total: i32 = vec![Just(1), Nothing, Just(2)].into_iter().flatten().sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_to_either() {
        assert_eq!(Just(5).to_either("absent"), Right(5));
        assert_eq!(Nothing::<i32>.to_either("absent"), Left("absent"));
    }

    #[test]
    fn test_to_either_round_trip() {
        let e: Either<&str, i32> = Right(5);
        assert_eq!(e.to_maybe(), Just(5));
        assert_eq!(Just(5).to_either("x").to_maybe(), Just(5));
    }

    #[test]
    fn test_if_just_if_nothing() {
        let mut seen = 0;
        Just(5).if_just(|x| seen = *x);
        assert_eq!(seen, 5);

        let mut called = false;
        Just(5).if_nothing(|| called = true);
        assert!(!called);
        Nothing::<i32>.if_nothing(|| called = true);
        assert!(called);
    }

    #[test]
    fn test_equals() {
        assert!(Just(5i32).equals(&Just(5)));
        assert!(!Just(5i32).equals(&Just(6)));
        assert!(!Just(5i32).equals(&Nothing));
        assert!(Nothing::<i32>.equals(&Nothing));
    }

    #[test]
    fn test_lte() {
        assert!(Nothing::<i32>.lte(&Just(5)));
        assert!(Nothing::<i32>.lte(&Nothing));
        assert!(!Just(5i32).lte(&Nothing));
        assert!(Just(5i32).lte(&Just(6)));
        assert!(!Just(5i32).lte(&Just(3)));
    }

    #[test]
    fn test_concat() {
        assert_eq!(Just(vec![1, 2]).concat(Just(vec![3])), Just(vec![1, 2, 3]));
        assert_eq!(Just(vec![1]).concat(Nothing), Just(vec![1]));
        assert_eq!(Nothing.concat(Just(vec![1])), Just(vec![1]));
        assert_eq!(Nothing::<Vec<i32>>.concat(Nothing), Nothing);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some(3)), Just(3));
        assert_eq!(Maybe::<i32>::from(None), Nothing);
        assert_eq!(Option::from(Just(3)), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Just(5).to_string(), "Just(5)");
        assert_eq!(Nothing::<i32>.to_string(), "Nothing");
    }
}
