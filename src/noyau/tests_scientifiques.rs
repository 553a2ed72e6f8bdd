//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - associativité, précédence, moins unaire
//! - sémantique numérique (exact vs flottant)
//! - erreurs : une catégorie précise par type d’échec
//! - RPN « golden » : infixe -> RPN rendu en texte

use super::entites::{Entite, Operateur};
use super::erreur::{Categorie, Erreur};
use super::eval::{eval_expression, evaluate, Calculatrice};
use super::format::render_all;
use super::jetons::lex;
use super::math::FonctionReelle;
use super::nombre::Nombre;
use super::resolution::resolve;
use super::rpn::to_postfix;

fn eval_ok(expr: &str) -> Nombre {
    env_logger::try_init().ok();
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str) -> Erreur {
    match eval_expression(expr) {
        Ok(n) => panic!("expr={expr:?} devrait échouer, obtenu {n}"),
        Err(e) => e,
    }
}

fn assert_entier(expr: &str, attendu: i64) {
    let r = eval_ok(expr);
    assert!(r.est_entier(), "expr={expr:?} devrait rester exact, obtenu {r}");
    assert_eq!(r, Nombre::entier(attendu), "expr={expr:?}");
}

fn assert_flottant(expr: &str, attendu: f64) {
    match eval_ok(expr) {
        Nombre::Flottant(x) => assert!(
            (x - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
            "expr={expr:?} obtenu {x}, attendu {attendu}"
        ),
        autre => panic!("expr={expr:?} devrait être flottant, obtenu {autre}"),
    }
}

fn rpn_texte(expr: &str) -> String {
    let r: Result<Vec<_>, _> = to_postfix(resolve(lex(expr))).collect();
    let r = r.unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    render_all(&r)
}

/* ------------------------ Propriétés de base ------------------------ */

#[test]
fn sci_associativite() {
    assert_entier("2^3^2", 512);
    assert_flottant("8/4/2", 1.0);
    assert_entier("10 - 4 - 3", 3);
    assert_entier("2 * 3 % 4", 2);
}

#[test]
fn sci_precedence() {
    assert_entier("2 + 3 * 4", 14);
    assert_entier("(2 + 3) * 4", 20);
    assert_entier("2 * 3 ^ 2", 18);
    assert_entier("-2 ^ 2", -4);
    assert_entier("(-2) ^ 2", 4);
    assert_flottant("2 ^ -1", 0.5);
}

#[test]
fn sci_moins_empile() {
    let e: Vec<_> = resolve(lex("---5")).collect::<Result<_, _>>().unwrap();
    assert_eq!(
        e.iter()
            .filter(|x| **x == Entite::Operateur(Operateur::Negation))
            .count(),
        3
    );
    assert_entier("---5", -5);
    assert_entier("--5", 5);
    assert_entier("3--5", 8);
    assert_entier("3 - -5", 8);
    assert_entier("-(2 + 3)", -5);
    assert_entier("max(-1, -2)", -1);
}

#[test]
fn sci_litteraux() {
    for s in ["0", "7", "42", "1000000", "123456789012345678901234567890"] {
        assert_eq!(eval_ok(s).to_string(), s);
    }
    assert_flottant("3.25", 3.25);
    assert_flottant(".5", 0.5);
    assert_flottant("5.", 5.0);
}

#[test]
fn sci_unicode() {
    assert_flottant("6 ÷ 4", 1.5);
    assert_entier("6 × 4", 24);
    assert_entier("6 − 4", 2);
    assert_entier("−4", -4);
    assert_flottant("2 × π", std::f64::consts::TAU);
    assert_flottant("τ", std::f64::consts::TAU);
}

/* ------------------------ Sémantique numérique ------------------------ */

#[test]
fn sci_exact_ou_flottant() {
    assert_entier("7 % 3", 1);
    assert_entier("-7 % 3", 2);
    assert_flottant("7.5 % 2", 1.5);
    assert_flottant("1 + 0.5", 1.5);
    assert_flottant("6 / 3", 2.0);
    // quotient d’entiers hors de portée d’un f64, mais lui représentable
    assert_flottant("10^400 / 10^399", 10.0);
    assert_entier("abs(-3)", 3);
    assert_flottant("sqrt(16)", 4.0);
    assert_entier("factorial(10)", 3_628_800);
    assert_entier("gcd(12, 18)", 6);
    assert_flottant("pow(2, 10)", 1024.0);
    assert_flottant("hypot(3, 4)", 5.0);
    assert_flottant("fmod(7, 3)", 1.0);
    assert_flottant("atan2(0, 1)", 0.0);
    assert_entier("min(4, 9)", 4);

    // exact même très grand
    let r = eval_ok("2^200 + 1");
    assert!(r.est_entier());
    assert_eq!(
        r.to_string(),
        "1606938044258990275541962092341162602522202993782792835301377"
    );
    assert_eq!(eval_ok("factorial(25)").to_string(), "15511210043330985984000000");
}

#[test]
fn sci_fonctions_de_la_bibliotheque() {
    assert_flottant("sin(0)", 0.0);
    assert_flottant("cos(0)", 1.0);
    assert_flottant("log10(1000)", 3.0);
    assert_flottant("log2(8) + exp2(3)", 11.0);
    assert_flottant("expm1(0) + log1p(0)", 0.0);
    assert_flottant("exp(0) + ln(e)", 2.0);
    assert_flottant("floor(2.7) + ceil(2.2)", 5.0);
    assert_flottant("sin ( max ( 2, 3 ) ÷ 3 × π )", (std::f64::consts::PI).sin());
}

#[test]
fn sci_bibliotheque_injectee() {
    let mut table: std::collections::HashMap<String, FonctionReelle> = Default::default();
    table.insert("triple".into(), |x| 3.0 * x);

    let c = Calculatrice::new().with_bibliotheque(table);
    assert_eq!(c.eval_expression("triple(2) + 1"), Ok(Nombre::Flottant(7.0)));
    assert_eq!(
        c.eval_expression("sin(0)"),
        Err(Erreur::JetonInconnu { jeton: "sin".into() })
    );

    // la table fixe reste disponible
    assert_eq!(c.eval_expression("max(1, 2)"), Ok(Nombre::entier(2)));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_par_categorie() {
    let cas = [
        ("1 + $", Categorie::Lexicale),
        ("5!", Categorie::Lexicale),
        ("[1]", Categorie::Lexicale),
        ("foo(1)", Categorie::Resolution),
        ("x + 1", Categorie::Resolution),
        ("sin - 1", Categorie::Resolution),
        ("(2 + 3", Categorie::Structure),
        ("2 + 3)", Categorie::Structure),
        ("1, 2", Categorie::Structure),
        ("2 +", Categorie::Arite),
        ("2 + * 3", Categorie::Arite),
        ("max(1)", Categorie::Arite),
        ("sqrt()", Categorie::Arite),
        ("1 / 0", Categorie::Domaine),
        ("5 % 0", Categorie::Domaine),
        ("sqrt(-1)", Categorie::Domaine),
        ("factorial(-1)", Categorie::Domaine),
        ("factorial(2.5)", Categorie::Domaine),
        ("log(-1)", Categorie::Domaine),
        ("0 ^ -1", Categorie::Domaine),
        ("", Categorie::Resultat),
        ("()", Categorie::Resultat),
        ("1 2", Categorie::Resultat),
        ("log(1, 2)", Categorie::Resultat),
    ];
    for (expr, categorie) in cas {
        let e = eval_err(expr);
        assert_eq!(e.categorie(), categorie, "expr={expr:?} err={e}");
    }
}

#[test]
fn sci_erreurs_detaillees() {
    assert_eq!(
        eval_err("1 / 0"),
        Erreur::Domaine {
            operateur: "/".into(),
            detail: "division par zéro".into()
        }
    );
    assert_eq!(
        eval_err("sqrt(-4)"),
        Erreur::Domaine {
            operateur: "sqrt".into(),
            detail: "racine carrée d’un nombre négatif".into()
        }
    );
    assert_eq!(eval_err("3 ÷ "), Erreur::Arite { operateur: "/".into() });
    assert_eq!(
        eval_err("12 @ 3"),
        Erreur::Lexicale {
            caractere: '@',
            position: 3
        }
    );
    assert_eq!(eval_err(""), Erreur::ExpressionMalFormee { profondeur: 0 });
}

#[test]
fn sci_vide() {
    assert_eq!(lex("").count(), 0);
    let vide: Vec<Result<String, Erreur>> = Vec::new();
    assert_eq!(
        evaluate(to_postfix(resolve(vide))),
        Err(Erreur::ExpressionMalFormee { profondeur: 0 })
    );
}

#[test]
fn sci_notation_scientifique_non_supportee() {
    // "3e2" = "3" "e2" : "e2" n’est pas un nom connu
    assert_eq!(
        eval_err("3e2"),
        Erreur::JetonInconnu { jeton: "e2".into() }
    );
    // "3 e 2" = trois valeurs, aucun opérateur
    assert_eq!(
        eval_err("3 e 2"),
        Erreur::ExpressionMalFormee { profondeur: 3 }
    );
}

/* ------------------------ RPN golden ------------------------ */

#[test]
fn sci_rpn_golden() {
    let cas = [
        ("-3 + -4", "3 neg 4 neg +"),
        ("-3.5 + -4.25", "3.5 neg 4.25 neg +"),
        ("6.0 - -2.5", "6.0 2.5 neg -"),
        ("-7 + -0.5", "7 neg 0.5 neg +"),
        ("(-3.5 + -4.5) * -2.0", "3.5 neg 4.5 neg + 2.0 neg *"),
        (" -3+    -4", "3 neg 4 neg +"),
        ("  (  -3.5+  -4.5  )* -2.0", "3.5 neg 4.5 neg + 2.0 neg *"),
        ("2+3", "2 3 +"),
        (" 4  -1 ", "4 1 -"),
        (" 6*     7", "6 7 *"),
        (" 8 /2 ", "8 2 /"),
        ("2 + 3 * 4", "2 3 4 * +"),
        ("2 * 3 + 4", "2 3 * 4 +"),
        ("2 + 3 * 4 - 5", "2 3 4 * + 5 -"),
        ("(2 + 3) * 4", "2 3 + 4 *"),
        ("2 * (3 + 4)", "2 3 4 + *"),
        ("(2 + 3) * (4 - 1)", "2 3 + 4 1 - *"),
        ("5 - 3 - 2", "5 3 - 2 -"),
        ("4 / 2 / 2", "4 2 / 2 /"),
        ("log(10)", "10 log"),
        ("sqrt(4 + 5)", "4 5 + sqrt"),
        ("2 ^ 3", "2 3 ^"),
        ("2 ^ 3 ^ 2", "2 3 2 ^ ^"),
        ("3.14 * 2 ^ 2", "3.14 2 2 ^ *"),
        ("0.5 + .5", "0.5 0.5 +"),
        ("max(1, 2 + 3)", "1 2 3 + max"),
        ("pow(2, 10)", "2 10 pow"),
        ("2 * 5 + 6 / 3 ^ 2", "2 5 * 6 3 2 ^ / +"),
        ("((7))", "7"),
        ("(1 + (2)) * 3", "1 2 + 3 *"),
    ];
    for (expr, attendu) in cas {
        assert_eq!(rpn_texte(expr), attendu, "expr={expr:?}");
    }
}
