// =============================================================================
// EITHER — Le type somme "une erreur OU une valeur"
// =============================================================================
//
// Un Either<L, R> est EXACTEMENT l'une des deux variantes :
//   - Left(L)  : la valeur "alternative" (par convention une erreur)
//   - Right(R) : la valeur de "succès"
//
// En théorie des catégories, c'est le COPRODUIT L + R : une injection
// à gauche, une injection à droite, et une propriété universelle
// (la fonction `either`) qui permet d'en sortir.
//
// Toutes les opérations sont biaisées à DROITE : map, chain, ap, reduce...
// ne touchent qu'à Right et laissent passer un Left tel quel. Un Left
// traverse donc toute une chaîne de calculs sans jamais "exploser".
//
// EXEMPLE :
//
//   Right(5).map(|x| x + 1)            → Right(6)
//   Left("Erreur").map(|x| x + 1)      → Left("Erreur")
//   Right(5).chain(|x| Left("trop"))   → Left("trop")
//
// Un enum Rust à deux variantes garantit par le compilateur qu'il n'existe
// ni état "aucun des deux" ni état "les deux à la fois".
//
// =============================================================================

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::maybe::{Just, Maybe, Nothing};
use super::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Chain, Extend, Foldable, Functor, Ordered, Semigroup,
    Setoid,
};
use crate::error::AdtError;

/// Une valeur qui est soit un `Left(L)`, soit un `Right(R)`.
///
/// L'ordre des variantes compte : l'ordre dérivé place tout `Left`
/// avant tout `Right`, comme `Ordered::lte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// Valeur alternative (erreur)
    Left(L),
    /// Valeur de succès
    Right(R),
}

pub use self::Either::{Left, Right};

/// Ce que `catch_unwind` récupère quand un calcul panique.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Les deux gestionnaires de `case_of`.
///
/// Les deux champs sont obligatoires : oublier un cas est une erreur
/// de compilation, pas une erreur à l'exécution.
pub struct EitherPattern<FL, FR> {
    pub left: FL,
    pub right: FR,
}

impl<L, R> Either<L, R> {
    /// Injection par défaut : `of(x) = Right(x)`.
    pub fn of(value: R) -> Self {
        Right(value)
    }

    /// Garde les charges utiles des `Left`, dans l'ordre.
    pub fn lefts<I>(list: I) -> Vec<L>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        list.into_iter().filter_map(|e| e.left_to_maybe().extract()).collect()
    }

    /// Garde les charges utiles des `Right`, dans l'ordre.
    pub fn rights<I>(list: I) -> Vec<R>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        list.into_iter().filter_map(|e| e.to_maybe().extract()).collect()
    }

    /// Sépare une liste en (lefts, rights) en un seul passage.
    ///
    /// `lefts.len() + rights.len()` vaut toujours la taille de l'entrée.
    pub fn partition<I>(list: I) -> (Vec<L>, Vec<R>)
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for e in list {
            match e {
                Left(l) => lefts.push(l),
                Right(r) => rights.push(r),
            }
        }
        (lefts, rights)
    }

    /// Exécute un calcul faillible et capture son erreur dans un `Left`.
    ///
    /// L'erreur est emballée telle quelle, sans transformation.
    pub fn encase<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        match computation() {
            Ok(value) => Right(value),
            Err(error) => {
                tracing::debug!("encase : erreur capturée dans un Left");
                Left(error)
            }
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// Transforme la valeur d'un `Right`. Un `Left` passe inchangé.
    pub fn map<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    /// Transforme la valeur d'un `Left`. Un `Right` passe inchangé.
    pub fn map_left<A, F>(self, f: F) -> Either<A, R>
    where
        F: FnOnce(L) -> A,
    {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// `f` sur un `Left`, `g` sur un `Right` : une seule des deux s'exécute.
    pub fn bimap<A, B, F, G>(self, f: F, g: G) -> Either<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(g(r)),
        }
    }

    /// Applique la fonction contenue dans `other` à la valeur de `self`.
    ///
    /// Si `other` est un `Left`, c'est lui qui gagne, même quand `self`
    /// est aussi un `Left`.
    pub fn ap<B, F>(self, other: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match (self, other) {
            (_, Left(e)) => Left(e),
            (Left(e), Right(_)) => Left(e),
            (Right(value), Right(f)) => Right(f(value)),
        }
    }

    /// Bind monadique : `f` produit lui-même un Either.
    pub fn chain<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r),
        }
    }

    /// `self` si c'est un `Right`, sinon `other`.
    pub fn alt(self, other: Self) -> Self {
        match self {
            Right(_) => self,
            Left(_) => other,
        }
    }

    /// `f` reçoit l'Either entier (pas la valeur déballée).
    pub fn extend<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(&Either<L, R>) -> B,
    {
        match self {
            Left(l) => Left(l),
            whole => Right(f(&whole)),
        }
    }

    /// `reducer(initial, r)` sur un `Right`, `initial` sur un `Left`.
    pub fn reduce<U, F>(self, reducer: F, initial: U) -> U
    where
        F: FnOnce(U, R) -> U,
    {
        match self {
            Left(_) => initial,
            Right(r) => reducer(initial, r),
        }
    }

    /// Filtrage exhaustif par enregistrement de gestionnaires.
    pub fn case_of<T, FL, FR>(self, pattern: EitherPattern<FL, FR>) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        self.either(pattern.left, pattern.right)
    }

    /// La propriété universelle du coproduit : une flèche par injection.
    pub fn either<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Left(l) => on_left(l),
            Right(r) => on_right(r),
        }
    }

    /// Retourne la valeur d'un `Right`.
    ///
    /// # Panics
    ///
    /// Panique sur un `Left`. Avec `Maybe::unsafe_coerce`, c'est la seule
    /// opération du crate qui panique : à réserver aux endroits où l'on a
    /// déjà prouvé que la valeur est un `Right`.
    pub fn unsafe_coerce(self) -> R {
        match self {
            Right(r) => r,
            Left(_) => {
                let err = AdtError::CoercedLeft;
                tracing::error!(%err, "coercition forcée d'un Either");
                panic!("{}", err)
            }
        }
    }

    pub fn left_or_default(self, default: L) -> L {
        match self {
            Left(l) => l,
            Right(_) => default,
        }
    }

    pub fn or_default(self, default: R) -> R {
        match self {
            Left(_) => default,
            Right(r) => r,
        }
    }

    /// Effet de bord sur un `Left` ; retourne `self` pour chaîner.
    pub fn if_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Left(l) = &self {
            f(l);
        }
        self
    }

    /// Effet de bord sur un `Right` ; retourne `self` pour chaîner.
    pub fn if_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Right(r) = &self {
            f(r);
        }
        self
    }

    /// `Left → Nothing`, `Right(r) → Just(r)`.
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Left(_) => Nothing,
            Right(r) => Just(r),
        }
    }

    /// `Left(l) → Just(l)`, `Right → Nothing`.
    pub fn left_to_maybe(self) -> Maybe<L> {
        match self {
            Left(l) => Just(l),
            Right(_) => Nothing,
        }
    }

    /// Échange les deux côtés.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Left(l) => Right(l),
            Right(r) => Left(r),
        }
    }

    pub fn left(&self) -> Option<&L> {
        match self {
            Left(l) => Some(l),
            Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Left(_) => None,
            Right(r) => Some(r),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Retourne la valeur présente, quel que soit le côté.
    pub fn extract(self) -> T {
        match self {
            Left(v) | Right(v) => v,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Aplatit un niveau d'imbrication.
    pub fn join(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

impl<R> Either<PanicPayload, R> {
    /// Exécute un calcul qui peut paniquer ; la panique devient un `Left`.
    ///
    /// Le `Left` contient la charge utile d'origine de la panique, qu'on
    /// peut récupérer avec `downcast_ref`. Le hook de panique habituel
    /// s'exécute quand même (message sur stderr).
    pub fn encase_panic<F>(computation: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Right(value),
            Err(payload) => {
                tracing::warn!("encase_panic : panique capturée dans un Left");
                Left(payload)
            }
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Right(r),
            Err(l) => Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Left(l) => Err(l),
            Right(r) => Ok(r),
        }
    }
}

impl<L: std::fmt::Display, R: std::fmt::Display> std::fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Left(l) => write!(f, "Left({})", l),
            Right(r) => write!(f, "Right({})", r),
        }
    }
}

// -----------------------------------------------------------------------------
// Instances des classes de types
// -----------------------------------------------------------------------------

impl<L, R> Functor for Either<L, R> {
    type Item = R;
    type Mapped<B> = Either<L, B>;

    fn fmap<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(f)
    }
}

impl<L, R> Apply for Either<L, R> {
    fn ap<B, F>(self, other: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Either::ap(self, other)
    }
}

impl<L, R> Applicative for Either<L, R> {
    fn of(value: R) -> Self {
        Right(value)
    }
}

impl<L, R> Chain for Either<L, R> {
    fn chain<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Either::chain(self, f)
    }
}

impl<L, R> Bifunctor for Either<L, R> {
    type Left = L;
    type Right = R;
    type Bimapped<A, B> = Either<A, B>;

    fn bimap<A, B, F, G>(self, f: F, g: G) -> Either<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        Either::bimap(self, f, g)
    }
}

impl<L, R> Alt for Either<L, R> {
    fn alt(self, other: Self) -> Self {
        Either::alt(self, other)
    }
}

impl<L, R> Extend for Either<L, R> {
    fn extend<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(&Self) -> B,
    {
        Either::extend(self, f)
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn reduce<U, F>(self, reducer: F, initial: U) -> U
    where
        F: FnMut(U, R) -> U,
    {
        Either::reduce(self, reducer, initial)
    }
}

/// Même variante ET charges utiles égales. Un `Left` n'est jamais égal à un `Right`.
impl<L: Setoid, R: Setoid> Setoid for Either<L, R> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Left(a), Left(b)) => a.equals(b),
            (Right(a), Right(b)) => a.equals(b),
            _ => false,
        }
    }
}

/// Tout `Left` est inférieur à tout `Right`.
impl<L: Ordered, R: Ordered> Ordered for Either<L, R> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (Left(a), Left(b)) => a.lte(b),
            (Right(a), Right(b)) => a.lte(b),
            (Left(_), Right(_)) => true,
            (Right(_), Left(_)) => false,
        }
    }
}

/// Deux `Right` : on concatène. Un seul `Right` : il gagne.
/// Deux `Left` : c'est le second qui est gardé.
impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Right(a), Right(b)) => Right(a.concat(b)),
            (Right(a), Left(_)) => Right(a),
            (Left(_), other) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Boom(&'static str);

    type E = Either<&'static str, i32>;

    #[test]
    fn test_of() {
        assert_eq!(E::of(5), Right(5));
    }

    #[test]
    fn test_lefts_and_rights() {
        let list: Vec<E> = vec![Left("Error"), Left("Error2"), Right(5)];
        assert_eq!(Either::lefts(list), vec!["Error", "Error2"]);

        let list: Vec<E> = vec![Right(10), Left("Error"), Right(5)];
        assert_eq!(Either::rights(list), vec![10, 5]);
    }

    #[test]
    fn test_lefts_and_rights_cover_the_list() {
        let list: Vec<E> = vec![Right(1), Left("a"), Right(2), Left("b"), Left("c"), Right(3)];
        let lefts = Either::lefts(list.clone());
        let rights = Either::rights(list.clone());
        assert_eq!(lefts.len() + rights.len(), list.len());
        assert_eq!(lefts, vec!["a", "b", "c"]);
        assert_eq!(rights, vec![1, 2, 3]);

        let empty: Vec<E> = Vec::new();
        assert!(Either::lefts(empty.clone()).is_empty());
        assert!(Either::rights(empty).is_empty());
    }

    #[test]
    fn test_partition_is_complete() {
        let list: Vec<E> = vec![Right(1), Left("a"), Right(2), Left("b"), Right(3)];
        let (lefts, rights) = Either::partition(list.clone());
        assert_eq!(lefts, vec!["a", "b"]);
        assert_eq!(rights, vec![1, 2, 3]);
        assert_eq!(lefts.len() + rights.len(), list.len());
    }

    #[test]
    fn test_encase() {
        let failed: Either<Boom, i32> = Either::encase(|| Err(Boom("a")));
        assert_eq!(failed, Left(Boom("a")));

        let ok: Either<Boom, i32> = Either::encase(|| Ok(10));
        assert_eq!(ok, Right(10));
    }

    #[test]
    fn test_encase_panic_keeps_payload() {
        let caught = Either::encase_panic(|| -> i32 { std::panic::panic_any(Boom("a")) });
        match caught {
            Left(payload) => assert_eq!(payload.downcast_ref::<Boom>(), Some(&Boom("a"))),
            Right(_) => panic!("la panique aurait dû être capturée"),
        }

        let fine = Either::encase_panic(|| 10);
        assert!(matches!(fine, Right(10)));
    }

    #[test]
    fn test_is_left_is_right() {
        let l: E = Left("x");
        let r: E = Right(1);
        assert!(l.is_left() && !l.is_right());
        assert!(r.is_right() && !r.is_left());
    }

    #[test]
    fn test_bimap() {
        let l: Either<String, i32> = Left("Error".to_string());
        assert_eq!(l.bimap(|x| x + "!", |x| x + 1), Left("Error!".to_string()));
        let r: Either<String, i32> = Right(5);
        assert_eq!(r.bimap(|x| x + "!", |x| x + 1), Right(6));
    }

    #[test]
    fn test_bifunctor_first_and_second() {
        let l: E = Left("Error");
        let r: E = Right(5);
        assert_eq!(l.first(|e: &str| e.len()), l.map_left(|e| e.len()));
        assert_eq!(r.first(|e: &str| e.len()), r.map_left(|e| e.len()));
        assert_eq!(l.second(|x: i32| x * 2), l.map(|x| x * 2));
        assert_eq!(r.second(|x: i32| x * 2), Right(10));
        assert_eq!(r.second(|x: i32| x * 2), r.map(|x| x * 2));
    }

    #[test]
    fn test_map() {
        assert_eq!(Left::<&str, i32>("Error").map(|x| x + 1), Left("Error"));
        assert_eq!(Right::<&str, i32>(5).map(|x| x + 1), Right(6));
    }

    #[test]
    fn test_map_left() {
        let l: Either<String, i32> = Left("Error".to_string());
        assert_eq!(l.map_left(|x| x + "!"), Left("Error!".to_string()));
        let r: Either<String, i32> = Right(5);
        assert_eq!(r.map_left(|x| x + "!"), Right(5));
    }

    #[test]
    fn test_ap() {
        let add_one = |x: i32| x + 1;
        assert_eq!(Right::<&str, i32>(5).ap(Right(add_one)), Right(6));
        assert_eq!(Right::<&str, i32>(5).ap(Left::<&str, fn(i32) -> i32>("Error")), Left("Error"));
        assert_eq!(Left::<&str, i32>("Error").ap(Right(add_one)), Left("Error"));
        assert_eq!(
            Left::<&str, i32>("Error").ap(Left::<&str, fn(i32) -> i32>("Function Error")),
            Left("Function Error")
        );
    }

    #[test]
    fn test_equals() {
        assert!(Left::<&str, i32>("Error").equals(&Left("Error")));
        assert!(!Left::<&str, i32>("Error").equals(&Left("Error!")));
        assert!(!Left::<&str, &str>("Error").equals(&Right("Error")));
        assert!(Right::<&str, i32>(5).equals(&Right(5)));
        assert!(!Right::<&str, i32>(5).equals(&Right(6)));
        assert!(!Right::<&str, i32>(5).equals(&Left("Error")));
    }

    #[test]
    fn test_lte() {
        let l5: Either<i32, i32> = Left(5);
        assert!(l5.lte(&Left(6)));
        assert!(!l5.lte(&Left(3)));
        assert!(l5.lte(&Right(6)));
        let r5: Either<i32, i32> = Right(5);
        assert!(r5.lte(&Right(6)));
        assert!(!r5.lte(&Right(3)));
        assert!(!r5.lte(&Left(6)));
    }

    #[test]
    fn test_lte_agrees_with_derived_ord() {
        let values: Vec<Either<i32, i32>> = vec![Left(3), Left(5), Right(1), Right(5)];
        for a in &values {
            for b in &values {
                assert_eq!(a.lte(b), a <= b, "a={a:?}, b={b:?}");
            }
        }
    }

    #[test]
    fn test_concat() {
        let r12: Either<&str, Vec<i32>> = Right(vec![1, 2]);
        assert_eq!(r12.clone().concat(Right(vec![3, 4])), Right(vec![1, 2, 3, 4]));
        assert_eq!(r12.clone().concat(Left("Error")), Right(vec![1, 2]));
        assert_eq!(Left("Error").concat(r12), Right(vec![1, 2]));
    }

    #[test]
    fn test_concat_two_lefts_keeps_second() {
        let a: Either<&str, Vec<i32>> = Left("first");
        assert_eq!(a.concat(Left("second")), Left("second"));
    }

    #[test]
    fn test_chain() {
        assert_eq!(Left::<&str, i32>("Error").chain(|x| Right(x + 1)), Left("Error"));
        assert_eq!(Right::<&str, i32>(5).chain(|x| Right(x + 1)), Right(6));
        assert_eq!(Right::<&str, i32>(5).chain(|_| Left::<&str, i32>("trop")), Left("trop"));
    }

    #[test]
    fn test_join() {
        let nested: Either<&str, E> = Right(Right(5));
        assert_eq!(nested.join(), Right(5));
        let nested: Either<&str, E> = Right(Left("inner"));
        assert_eq!(nested.join(), Left("inner"));
        let nested: Either<&str, E> = Left("outer");
        assert_eq!(nested.join(), Left("outer"));
    }

    #[test]
    fn test_alt() {
        assert_eq!(Left::<&str, i32>("Error").alt(Left("Error!")), Left("Error!"));
        assert_eq!(Left::<&str, i32>("Error").alt(Right(5)), Right(5));
        assert_eq!(Right::<&str, i32>(5).alt(Left("Error")), Right(5));
        assert_eq!(Right::<&str, i32>(5).alt(Right(6)), Right(5));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(Right::<&str, i32>(5).reduce(|acc, x| x * acc, 2), 10);
        assert_eq!(Left::<&str, i32>("Error").reduce(|acc, x| x * acc, 0), 0);
    }

    #[test]
    fn test_extend() {
        assert_eq!(Left::<&str, i32>("Error").extend(|x| x.is_right()), Left("Error"));
        assert_eq!(Right::<&str, i32>(5).extend(|x| x.is_right()), Right(true));
    }

    #[test]
    fn test_unsafe_coerce_right() {
        assert_eq!(Right::<&str, i32>(5).unsafe_coerce(), 5);
    }

    #[test]
    #[should_panic(expected = "unsafe_coerce appelé sur une valeur Left")]
    fn test_unsafe_coerce_left_panics() {
        Left::<&str, i32>("Error").unsafe_coerce();
    }

    #[test]
    fn test_case_of() {
        let out = Left::<&str, i32>("Error").case_of(EitherPattern {
            left: |x: &str| x.to_string(),
            right: |_: i32| "No error".to_string(),
        });
        assert_eq!(out, "Error");

        let out = Right::<&str, i32>(6).case_of(EitherPattern { left: |_: &str| 0, right: |x: i32| x + 1 });
        assert_eq!(out, 7);
    }

    #[test]
    fn test_left_or_default() {
        assert_eq!(Left::<&str, i32>("Error").left_or_default("No error"), "Error");
        assert_eq!(Right::<&str, i32>(5).left_or_default("No error"), "No error");
    }

    #[test]
    fn test_or_default() {
        assert_eq!(Left::<&str, i32>("Error").or_default(0), 0);
        assert_eq!(Right::<&str, i32>(5).or_default(0), 5);
    }

    #[test]
    fn test_if_left() {
        let mut a = 0;
        Left::<&str, i32>("Error").if_left(|_| a = 5);
        assert_eq!(a, 5);

        let mut b = 0;
        Right::<&str, i32>(5).if_left(|_| b = 5);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_if_right() {
        let mut a = 0;
        Left::<&str, i32>("Error").if_right(|_| a = 5);
        assert_eq!(a, 0);

        let mut b = 0;
        let same = Right::<&str, i32>(5).if_right(|x| b = *x);
        assert_eq!(b, 5);
        assert_eq!(same, Right(5));
    }

    #[test]
    fn test_to_maybe() {
        assert_eq!(Left::<&str, i32>("Error").to_maybe(), Nothing);
        assert_eq!(Right::<&str, i32>(5).to_maybe(), Just(5));
    }

    #[test]
    fn test_left_to_maybe() {
        assert_eq!(Left::<&str, i32>("Error").left_to_maybe(), Just("Error"));
        assert_eq!(Right::<&str, i32>(5).left_to_maybe(), Nothing);
    }

    #[test]
    fn test_either() {
        assert_eq!(Right::<&str, i32>(5).either(|_| 0, |x| x + 1), 6);
        assert_eq!(
            Left::<&str, i32>("Error").either(|x| format!("{}!", x), |_| String::new()),
            "Error!"
        );
    }

    #[test]
    fn test_extract() {
        assert_eq!(Right::<i32, i32>(5).extract(), 5);
        assert_eq!(Left::<&str, &str>("Error").extract(), "Error");
    }

    #[test]
    fn test_swap_and_accessors() {
        let r: E = Right(5);
        assert_eq!(r.swap(), Left(5));
        assert_eq!(r.right(), Some(&5));
        assert_eq!(r.left(), None);
        assert_eq!(r.as_ref(), Right(&5));
    }

    #[test]
    fn test_result_conversions() {
        let from_ok: E = Ok(5).into();
        assert_eq!(from_ok, Right(5));
        let from_err: E = Err("bad").into();
        assert_eq!(from_err, Left("bad"));
        let back: Result<i32, &str> = Right::<&str, i32>(5).into();
        assert_eq!(back, Ok(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Right::<&str, i32>(5).to_string(), "Right(5)");
        assert_eq!(Left::<&str, i32>("e").to_string(), "Left(e)");
    }
}
