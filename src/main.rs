// =============================================================================
// ADTRUST — Point d'entrée : démonstration de Either et Maybe
// =============================================================================
//
// Ce main.rs parcourt les opérations principales :
//   1. Capturer des erreurs avec encase (Result et panique)
//   2. Enchaîner des calculs faillibles avec chain / map / ap
//   3. Trier une liste d'Either avec partition
//   4. Passer de Either à Maybe et inversement
//   5. Vérifier quelques lois algébriques
//
// Le niveau de log se règle avec RUST_LOG (par défaut : info).
// Lancement : cargo run --features demo
//
// =============================================================================

use adtrust::core::laws;
use adtrust::core::typeclass::Semigroup;
use adtrust::{Either, EitherPattern, Just, Left, Maybe, MaybePattern, Nothing, Right};
use tracing_subscriber::EnvFilter;

fn parse_age(input: &str) -> Either<String, u32> {
    Either::encase(|| input.trim().parse::<u32>())
        .map_left(|e| format!("'{}' n'est pas un âge : {}", input, e))
}

fn check_adult(age: u32) -> Either<String, u32> {
    if age >= 18 {
        Right(age)
    } else {
        Left(format!("{} ans : mineur", age))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      ADTRUST — Either & Maybe                    ║");
    println!("║      Types algébriques et classes de types       ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Capturer des erreurs
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : encase ═══\n");

    for input in ["42", "douze", "17"] {
        println!("  parse_age({:?}) = {:?}", input, parse_age(input));
    }

    // Le hook par défaut afficherait la panique sur stderr.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let caught = Either::encase_panic(|| -> u32 { panic!("division impossible") });
    std::panic::set_hook(default_hook);
    let message = caught
        .as_ref()
        .map_left(|payload| payload.downcast_ref::<&str>().copied().unwrap_or("?"))
        .either(|msg| format!("panique capturée : {}", msg), |v| v.to_string());
    println!("  encase_panic = {}\n", message);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Enchaîner
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : chain / map / ap ═══\n");

    for input in ["42", "douze", "17"] {
        let verdict = parse_age(input).chain(check_adult).case_of(EitherPattern {
            left: |err: String| format!("✗ {}", err),
            right: |age: u32| format!("✓ adulte de {} ans", age),
        });
        println!("  {}", verdict);
    }

    let double = |x: u32| x * 2;
    println!("  Right(21).ap(Right(double)) = {:?}", Right::<String, u32>(21).ap(Right(double)));
    println!(
        "  Right(21).ap(Left(\"E\"))     = {:?}\n",
        Right::<&str, u32>(21).ap(Left::<&str, fn(u32) -> u32>("E"))
    );

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Trier une liste
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : partition ═══\n");

    let results: Vec<Either<String, u32>> =
        ["30", "x", "18", "-1", "65"].iter().map(|s| parse_age(s)).collect();
    let (errors, ages) = Either::partition(results);
    println!("  {} âges valides : {:?}", ages.len(), ages);
    println!("  {} erreurs :", errors.len());
    for e in &errors {
        println!("    - {}", e);
    }

    let merged = Right::<String, Vec<u32>>(ages.clone()).concat(Right(vec![99]));
    println!("  concat avec Right([99]) = {:?}\n", merged);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Either ⇄ Maybe
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Either ⇄ Maybe ═══\n");

    let adults = Maybe::cat_maybes(ages.iter().map(|&a| check_adult(a).to_maybe()));
    let first_adult: Maybe<u32> = adults.first().copied().into();
    println!("  premier adulte : {}", first_adult.map_or_default(|a| a.to_string(), "aucun".into()));

    let none: Maybe<u32> = Nothing;
    println!("  Nothing.to_either(\"absent\") = {:?}", none.to_either("absent"));
    println!(
        "  Just(3).case_of(...) = {}\n",
        Just(3).case_of(MaybePattern { nothing: || "rien".to_string(), just: |x: i32| format!("{} !", x) })
    );

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Les lois
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Vérification des lois ═══\n");

    let samples: Vec<Either<&str, i32>> = vec![Left("e"), Right(1), Right(8)];
    let mut violations = Vec::new();
    for &e in &samples {
        let outcome = laws::functor_identity(e)
            .and_then(|_| laws::monad_right_identity(e))
            .and_then(|_| laws::monad_associativity(e, |x| Right(x + 1), |x| Right(x * 2)));
        if let Err(v) = outcome {
            violations.push(v);
        }
    }

    if violations.is_empty() {
        println!("  ✓ functor et monad respectés sur {} valeurs", samples.len());
    } else {
        for v in &violations {
            println!("  ✗ {}", v);
        }
    }

    println!("\n═══════════════════════════════════════════════════");
    println!("Démonstration terminée !");
    println!("═══════════════════════════════════════════════════");
}
