// =============================================================================
// LAWS — Vérification exécutable des lois algébriques
// =============================================================================
//
// Implémenter `Functor` ou `Chain` ne suffit pas : il faut respecter des
// ÉQUATIONS. Ce module en donne une version exécutable, une fonction par loi :
//
//   Functor      identité, composition
//   Apply        composition
//   Applicative  identité, homomorphisme, échange
//   Monad        identité gauche, identité droite, associativité
//   Bifunctor    identité, composition
//   Alt          associativité, distributivité
//   Plus         identité gauche/droite, annihilation
//   Extend       associativité
//   Setoid       réflexivité, symétrie, transitivité
//   Ordered      totalité, antisymétrie, transitivité
//   Semigroup    associativité
//   Foldable     reduce == reduce via la liste des éléments
//
// Chaque fonction retourne Ok(()) si la loi tient pour les valeurs données,
// sinon une LawViolation qui décrit les valeurs en cause.
//
// Les fonctions passées en paramètre sont des ENDOMORPHISMES (A → A),
// et on impose `Mapped<A> = F` sur les GAT. Quand une loi doit fabriquer
// une fonction qui capture (composition, échange), elle passe par une Box.
//
// =============================================================================

use std::fmt::Debug;

use super::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Extend, Foldable, Functor, Monad, Ordered, Plus,
    Semigroup, Setoid,
};
use crate::error::LawViolation;

/// Endomorphisme transporté par un conteneur de fonctions (`F<A → A>`).
pub type Endo<A> = fn(A) -> A;
/// Composée de deux endomorphismes.
pub type Composed<A> = Box<dyn FnOnce(A) -> A>;
/// `f ↦ (g ↦ f ∘ g)`, une fois `f` fixé.
pub type Composer<A> = Box<dyn FnOnce(Endo<A>) -> Composed<A>>;
/// `f ↦ f(y)`, pour un `y` capturé.
pub type AppliedTo<A> = Box<dyn FnOnce(Endo<A>) -> A>;

fn check<D>(law: &'static str, holds: bool, details: D) -> Result<(), LawViolation>
where
    D: FnOnce() -> String,
{
    if holds {
        Ok(())
    } else {
        let violation = LawViolation::new(law, details());
        tracing::trace!(law, details = %violation.details, "loi violée");
        Err(violation)
    }
}

fn identity<A>(x: A) -> A {
    x
}

// --- Functor -----------------------------------------------------------------

/// `fa.map(id) == fa`
pub fn functor_identity<F, A>(fa: F) -> Result<(), LawViolation>
where
    F: Functor<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
{
    let mapped = fa.clone().fmap(identity::<A>);
    check("functor/identity", mapped.equals(&fa), || {
        format!("{:?}.map(id) = {:?}", fa, mapped)
    })
}

/// `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
pub fn functor_composition<F, A, G, H>(fa: F, f: G, g: H) -> Result<(), LawViolation>
where
    F: Functor<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    G: Fn(A) -> A,
    H: Fn(A) -> A,
{
    let step_by_step = fa.clone().fmap(&f).fmap(&g);
    let composed = fa.clone().fmap(|x| g(f(x)));
    check("functor/composition", step_by_step.equals(&composed), || {
        format!("{:?} : {:?} != {:?}", fa, step_by_step, composed)
    })
}

// --- Apply -------------------------------------------------------------------

/// `v.ap(u.ap(a.map(|f| |g| f ∘ g))) == v.ap(u).ap(a)`
///
/// `u` porte la première fonction appliquée, `a` la seconde.
pub fn apply_composition<F, A>(
    v: F,
    u: <F as Functor>::Mapped<Endo<A>>,
    a: <F as Functor>::Mapped<Endo<A>>,
) -> Result<(), LawViolation>
where
    A: 'static,
    F: Apply<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    <F as Functor>::Mapped<Endo<A>>: Apply<
            Item = Endo<A>,
            Mapped<Composed<A>> = <F as Functor>::Mapped<Composed<A>>,
        > + Clone
        + Debug,
{
    let compose = |f: Endo<A>| -> Composer<A> {
        Box::new(move |g: Endo<A>| -> Composed<A> { Box::new(move |x: A| f(g(x))) })
    };
    let composed = u
        .clone()
        .ap::<Composed<A>, Composer<A>>(a.clone().fmap(compose));
    let nested = v.clone().ap::<A, Composed<A>>(composed);
    let sequential = v
        .clone()
        .ap::<A, Endo<A>>(u.clone())
        .ap::<A, Endo<A>>(a.clone());
    check("apply/composition", nested.equals(&sequential), || {
        format!("({:?}, {:?}, {:?}) : {:?} != {:?}", v, u, a, nested, sequential)
    })
}

// --- Applicative -------------------------------------------------------------

/// `v.ap(of(id)) == v`
pub fn applicative_identity<F, A>(v: F) -> Result<(), LawViolation>
where
    F: Applicative<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    <F as Functor>::Mapped<fn(A) -> A>: Applicative<Item = fn(A) -> A>,
{
    let id: fn(A) -> A = identity::<A>;
    let lifted = <<F as Functor>::Mapped<fn(A) -> A> as Applicative>::of(id);
    let applied = v.clone().ap::<A, fn(A) -> A>(lifted);
    check("applicative/identity", applied.equals(&v), || {
        format!("{:?}.ap(of(id)) = {:?}", v, applied)
    })
}

/// `of(x).ap(of(f)) == of(f(x))`
pub fn applicative_homomorphism<F, A>(x: A, f: fn(A) -> A) -> Result<(), LawViolation>
where
    F: Applicative<Item = A, Mapped<A> = F> + Setoid + Debug,
    <F as Functor>::Mapped<fn(A) -> A>: Applicative<Item = fn(A) -> A>,
    A: Clone,
{
    let lifted = <<F as Functor>::Mapped<fn(A) -> A> as Applicative>::of(f);
    let applied = F::of(x.clone()).ap::<A, fn(A) -> A>(lifted);
    let direct = F::of(f(x));
    check("applicative/homomorphism", applied.equals(&direct), || {
        format!("{:?} != {:?}", applied, direct)
    })
}

/// `of(y).ap(u) == u.ap(of(|f| f(y)))`
pub fn applicative_interchange<F, A>(
    y: A,
    u: <F as Functor>::Mapped<Endo<A>>,
) -> Result<(), LawViolation>
where
    A: Clone + 'static,
    F: Applicative<Item = A, Mapped<A> = F> + Setoid + Debug,
    <F as Functor>::Mapped<Endo<A>>: Apply<Item = Endo<A>, Mapped<A> = F> + Clone + Debug,
    <<F as Functor>::Mapped<Endo<A>> as Functor>::Mapped<AppliedTo<A>>:
        Applicative<Item = AppliedTo<A>>,
{
    let pure_first = F::of(y.clone()).ap::<A, Endo<A>>(u.clone());
    let apply_to_y: AppliedTo<A> = Box::new(move |f: Endo<A>| f(y));
    let lifted =
        <<<F as Functor>::Mapped<Endo<A>> as Functor>::Mapped<AppliedTo<A>> as Applicative>::of(
            apply_to_y,
        );
    let functions_first = u.clone().ap::<A, AppliedTo<A>>(lifted);
    check("applicative/interchange", pure_first.equals(&functions_first), || {
        format!("{:?} : {:?} != {:?}", u, pure_first, functions_first)
    })
}

// --- Monad -------------------------------------------------------------------

/// `of(a).chain(f) == f(a)`
pub fn monad_left_identity<F, A, G>(a: A, f: G) -> Result<(), LawViolation>
where
    F: Monad<Item = A, Mapped<A> = F> + Setoid + Debug,
    A: Clone,
    G: Fn(A) -> F,
{
    let chained = F::of(a.clone()).chain::<A, _>(&f);
    let direct = f(a);
    check("monad/left-identity", chained.equals(&direct), || {
        format!("{:?} != {:?}", chained, direct)
    })
}

/// `m.chain(of) == m`
pub fn monad_right_identity<F, A>(m: F) -> Result<(), LawViolation>
where
    F: Monad<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
{
    let chained = m.clone().chain::<A, _>(|x| F::of(x));
    check("monad/right-identity", chained.equals(&m), || {
        format!("{:?}.chain(of) = {:?}", m, chained)
    })
}

/// `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub fn monad_associativity<F, A, G, H>(m: F, f: G, g: H) -> Result<(), LawViolation>
where
    F: Monad<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    G: Fn(A) -> F,
    H: Fn(A) -> F,
{
    let sequential = m.clone().chain::<A, _>(&f).chain::<A, _>(&g);
    let nested = m.clone().chain::<A, _>(|x| f(x).chain::<A, _>(&g));
    check("monad/associativity", sequential.equals(&nested), || {
        format!("{:?} : {:?} != {:?}", m, sequential, nested)
    })
}

// --- Bifunctor ---------------------------------------------------------------

/// `p.bimap(id, id) == p`
pub fn bifunctor_identity<F, L, R>(p: F) -> Result<(), LawViolation>
where
    F: Bifunctor<Left = L, Right = R, Bimapped<L, R> = F> + Setoid + Clone + Debug,
{
    let mapped = p.clone().bimap::<L, R, _, _>(identity::<L>, identity::<R>);
    check("bifunctor/identity", mapped.equals(&p), || {
        format!("{:?}.bimap(id, id) = {:?}", p, mapped)
    })
}

/// `p.bimap(f1, g1).bimap(f2, g2) == p.bimap(f2 ∘ f1, g2 ∘ g1)`
pub fn bifunctor_composition<F, L, R, F1, F2, G1, G2>(
    p: F,
    (f1, g1): (F1, G1),
    (f2, g2): (F2, G2),
) -> Result<(), LawViolation>
where
    F: Bifunctor<Left = L, Right = R, Bimapped<L, R> = F> + Setoid + Clone + Debug,
    F1: Fn(L) -> L,
    F2: Fn(L) -> L,
    G1: Fn(R) -> R,
    G2: Fn(R) -> R,
{
    let step_by_step = p
        .clone()
        .bimap::<L, R, _, _>(&f1, &g1)
        .bimap::<L, R, _, _>(&f2, &g2);
    let composed = p
        .clone()
        .bimap::<L, R, _, _>(|l| f2(f1(l)), |r| g2(g1(r)));
    check("bifunctor/composition", step_by_step.equals(&composed), || {
        format!("{:?} : {:?} != {:?}", p, step_by_step, composed)
    })
}

// --- Alt / Plus --------------------------------------------------------------

/// `a.alt(b).alt(c) == a.alt(b.alt(c))`
pub fn alt_associativity<F>(a: F, b: F, c: F) -> Result<(), LawViolation>
where
    F: Alt + Setoid + Clone + Debug,
{
    let left = a.clone().alt(b.clone()).alt(c.clone());
    let right = a.clone().alt(b.clone().alt(c.clone()));
    check("alt/associativity", left.equals(&right), || {
        format!("({:?}, {:?}, {:?}) : {:?} != {:?}", a, b, c, left, right)
    })
}

/// `a.alt(b).map(f) == a.map(f).alt(b.map(f))`
pub fn alt_distributivity<F, A, G>(a: F, b: F, f: G) -> Result<(), LawViolation>
where
    F: Alt<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    G: Fn(A) -> A,
{
    let left = a.clone().alt(b.clone()).fmap(&f);
    let right = a.clone().fmap(&f).alt(b.clone().fmap(&f));
    check("alt/distributivity", left.equals(&right), || {
        format!("({:?}, {:?}) : {:?} != {:?}", a, b, left, right)
    })
}

/// `zero().alt(x) == x` et `x.alt(zero()) == x`
pub fn plus_identity<F>(x: F) -> Result<(), LawViolation>
where
    F: Plus + Setoid + Clone + Debug,
{
    let left = F::zero().alt(x.clone());
    let right = x.clone().alt(F::zero());
    check("plus/identity", left.equals(&x) && right.equals(&x), || {
        format!("{:?} : zero.alt = {:?}, alt(zero) = {:?}", x, left, right)
    })
}

/// `zero().map(f) == zero()`
pub fn plus_annihilation<F, A, G>(f: G) -> Result<(), LawViolation>
where
    F: Plus<Item = A, Mapped<A> = F> + Setoid + Debug,
    G: Fn(A) -> A,
{
    let mapped = F::zero().fmap(&f);
    check("plus/annihilation", mapped.equals(&F::zero()), || {
        format!("zero.map(f) = {:?}", mapped)
    })
}

// --- Extend ------------------------------------------------------------------

/// `w.extend(g).extend(f) == w.extend(|w| f(&w.extend(g)))`
pub fn extend_associativity<F, A, G, H>(w: F, f: G, g: H) -> Result<(), LawViolation>
where
    F: Extend<Item = A, Mapped<A> = F> + Setoid + Clone + Debug,
    G: Fn(&F) -> A,
    H: Fn(&F) -> A,
{
    let sequential = w.clone().extend::<A, _>(&g).extend::<A, _>(&f);
    let nested = w
        .clone()
        .extend::<A, _>(|inner: &F| f(&inner.clone().extend::<A, _>(&g)));
    check("extend/associativity", sequential.equals(&nested), || {
        format!("{:?} : {:?} != {:?}", w, sequential, nested)
    })
}

// --- Setoid ------------------------------------------------------------------

pub fn setoid_reflexivity<F>(a: &F) -> Result<(), LawViolation>
where
    F: Setoid + Debug,
{
    check("setoid/reflexivity", a.equals(a), || format!("{:?} != {:?}", a, a))
}

pub fn setoid_symmetry<F>(a: &F, b: &F) -> Result<(), LawViolation>
where
    F: Setoid + Debug,
{
    check("setoid/symmetry", a.equals(b) == b.equals(a), || {
        format!("{:?}, {:?}", a, b)
    })
}

pub fn setoid_transitivity<F>(a: &F, b: &F, c: &F) -> Result<(), LawViolation>
where
    F: Setoid + Debug,
{
    let premise = a.equals(b) && b.equals(c);
    check("setoid/transitivity", !premise || a.equals(c), || {
        format!("{:?}, {:?}, {:?}", a, b, c)
    })
}

// --- Ordered -----------------------------------------------------------------

pub fn ord_totality<F>(a: &F, b: &F) -> Result<(), LawViolation>
where
    F: Ordered + Debug,
{
    check("ord/totality", a.lte(b) || b.lte(a), || format!("{:?}, {:?}", a, b))
}

pub fn ord_antisymmetry<F>(a: &F, b: &F) -> Result<(), LawViolation>
where
    F: Ordered + Debug,
{
    let premise = a.lte(b) && b.lte(a);
    check("ord/antisymmetry", !premise || a.equals(b), || {
        format!("{:?}, {:?}", a, b)
    })
}

pub fn ord_transitivity<F>(a: &F, b: &F, c: &F) -> Result<(), LawViolation>
where
    F: Ordered + Debug,
{
    let premise = a.lte(b) && b.lte(c);
    check("ord/transitivity", !premise || a.lte(c), || {
        format!("{:?}, {:?}, {:?}", a, b, c)
    })
}

// --- Semigroup ---------------------------------------------------------------

/// `a.concat(b).concat(c) == a.concat(b.concat(c))`
pub fn semigroup_associativity<F>(a: F, b: F, c: F) -> Result<(), LawViolation>
where
    F: Semigroup + Setoid + Clone + Debug,
{
    let left = a.clone().concat(b.clone()).concat(c.clone());
    let right = a.clone().concat(b.clone().concat(c.clone()));
    check("semigroup/associativity", left.equals(&right), || {
        format!("({:?}, {:?}, {:?}) : {:?} != {:?}", a, b, c, left, right)
    })
}

// --- Foldable ----------------------------------------------------------------

/// `u.reduce(f, x) == u.reduce(push, []).fold(x, f)`
pub fn foldable_reduce<F, A, B, G>(u: F, f: G, initial: B) -> Result<(), LawViolation>
where
    F: Foldable<Item = A> + Clone + Debug,
    B: Setoid + Clone + Debug,
    G: Fn(B, A) -> B,
{
    let direct = u.clone().reduce(&f, initial.clone());
    let items = u.clone().reduce(
        |mut acc: Vec<A>, x| {
            acc.push(x);
            acc
        },
        Vec::new(),
    );
    let via_items = items.into_iter().fold(initial, &f);
    check("foldable/reduce", direct.equals(&via_items), || {
        format!("{:?} : {:?} != {:?}", u, direct, via_items)
    })
}
