// =============================================================================
// TYPECLASS — Les contrats algébriques partagés par Either et Maybe
// =============================================================================
//
// Chaque capacité est un trait SÉPARÉ (pas de classe de base commune) :
//
//   Functor      → map         : F<A> → (A → B) → F<B>
//   Apply        → ap          : F<A> → F<A → B> → F<B>
//   Applicative  → of          : A → F<A>
//   Chain        → chain       : F<A> → (A → F<B>) → F<B>
//   Monad        = Applicative + Chain
//   Bifunctor    → bimap       : F<A, B> → (A → C) → (B → D) → F<C, D>
//   Alt / Plus   → alt / zero  : choix entre deux valeurs, élément neutre
//   Extend       → extend      : F<A> → (F<A> → B) → F<B>
//   Setoid       → equals      : égalité structurelle
//   Ordered      → lte         : ordre total
//   Semigroup    → concat      : combinaison associative
//   Foldable     → reduce      : réduction vers une valeur
//
// Rust n'a pas de types de sorte supérieure : on encode "F<B>" avec un
// type associé générique (GAT) `Mapped<B>`. Pour Either<L, R>, on a
// Item = R et Mapped<B> = Either<L, B>.
//
// Maybe n'implémente pas Bifunctor : il n'a qu'un seul canal de valeur.
//
// Les lois que ces traits doivent respecter sont vérifiables avec les
// fonctions du module `laws`.
//
// =============================================================================

use std::cmp::Ordering;

/// Transformation de la valeur contenue, la "forme" est préservée.
///
/// Lois : `fa.fmap(id) == fa` et `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`.
pub trait Functor {
    /// Le type de la valeur transportée (le A de F<A>)
    type Item;
    /// Le même conteneur, transportant un B à la place (le F<B>)
    type Mapped<B>;

    fn fmap<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Item) -> B;
}

/// Application d'une fonction contenue à une valeur contenue.
///
/// `self` porte la valeur, `other` porte la fonction.
pub trait Apply: Functor {
    fn ap<B, F>(self, other: Self::Mapped<F>) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Item) -> B;
}

/// Injection d'une valeur pure dans le conteneur.
pub trait Applicative: Apply {
    fn of(value: Self::Item) -> Self;
}

/// Séquencement de calculs dépendants (bind).
pub trait Chain: Apply {
    fn chain<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Item) -> Self::Mapped<B>;
}

/// Une monade = Applicative + Chain. Aucune méthode supplémentaire.
pub trait Monad: Applicative + Chain {}

impl<M: Applicative + Chain> Monad for M {}

/// Transformation indépendante des deux canaux d'un conteneur à deux valeurs.
pub trait Bifunctor {
    type Left;
    type Right;
    type Bimapped<A, B>;

    /// `f` s'applique au canal gauche, `g` au canal droit.
    /// Une seule des deux fonctions est exécutée pour un type somme.
    fn bimap<A, B, F, G>(self, f: F, g: G) -> Self::Bimapped<A, B>
    where
        F: FnOnce(Self::Left) -> A,
        G: FnOnce(Self::Right) -> B;

    /// Transforme uniquement le canal gauche.
    fn first<A, F>(self, f: F) -> Self::Bimapped<A, Self::Right>
    where
        Self: Sized,
        F: FnOnce(Self::Left) -> A,
    {
        self.bimap(f, |r| r)
    }

    /// Transforme uniquement le canal droit.
    fn second<B, G>(self, g: G) -> Self::Bimapped<Self::Left, B>
    where
        Self: Sized,
        G: FnOnce(Self::Right) -> B,
    {
        self.bimap(|l| l, g)
    }
}

/// Choix biaisé : on garde `self` s'il "réussit", sinon `other`.
pub trait Alt: Functor {
    fn alt(self, other: Self) -> Self;
}

/// Élément neutre de `alt` : `zero().alt(x) == x == x.alt(zero())`.
pub trait Plus: Alt {
    fn zero() -> Self;
}

/// La fonction reçoit le conteneur ENTIER (pas seulement la valeur),
/// et son résultat est ré-emballé.
pub trait Extend: Functor {
    fn extend<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(&Self) -> B;
}

/// Égalité structurelle : réflexive, symétrique, transitive.
pub trait Setoid {
    fn equals(&self, other: &Self) -> bool;
}

/// Ordre total compatible avec `Setoid`.
pub trait Ordered: Setoid {
    fn lte(&self, other: &Self) -> bool;
}

/// Combinaison associative de deux valeurs.
pub trait Semigroup {
    fn concat(self, other: Self) -> Self;
}

/// Réduction du contenu vers une valeur accumulée.
pub trait Foldable: Functor {
    fn reduce<U, F>(self, reducer: F, initial: U) -> U
    where
        F: FnMut(U, Self::Item) -> U;
}

// -----------------------------------------------------------------------------
// Instances pour les types "charge utile" (payloads)
// -----------------------------------------------------------------------------
//
// equals/lte d'un Either ou d'un Maybe délèguent à ceux de la charge utile.
// Pour les types primitifs, c'est simplement == et <=, sauf pour les
// flottants (voir plus bas).

macro_rules! primitive_instances {
    ($($t:ty),* $(,)?) => {
        $(
            impl Setoid for $t {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Ordered for $t {
                fn lte(&self, other: &Self) -> bool {
                    self <= other
                }
            }
        )*
    };
}

primitive_instances!(
    (), bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    str, String,
);

// Les flottants passent par `total_cmp` (ordre total IEEE 754) : NaN est égal
// à lui-même et comparable à tout, -0.0 et +0.0 sont distincts. Avec == et <=,
// NaN casserait la réflexivité et la totalité.
macro_rules! float_instances {
    ($($t:ty),* $(,)?) => {
        $(
            impl Setoid for $t {
                fn equals(&self, other: &Self) -> bool {
                    self.total_cmp(other) == Ordering::Equal
                }
            }

            impl Ordered for $t {
                fn lte(&self, other: &Self) -> bool {
                    self.total_cmp(other) != Ordering::Greater
                }
            }
        )*
    };
}

float_instances!(f32, f64);

impl<T: Setoid + ?Sized> Setoid for &T {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn lte(&self, other: &Self) -> bool {
        (**self).lte(*other)
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equals(b))
    }
}

/// Ordre lexicographique : le premier élément différent décide,
/// sinon la liste la plus courte est la plus petite.
impl<T: Ordered> Ordered for Vec<T> {
    fn lte(&self, other: &Self) -> bool {
        for (a, b) in self.iter().zip(other) {
            if !a.equals(b) {
                return a.lte(b);
            }
        }
        self.len() <= other.len()
    }
}

impl<T: Setoid> Setoid for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl<T: Ordered> Ordered for Option<T> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a.lte(b),
        }
    }
}

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn concat(self, _other: Self) -> Self {}
}
