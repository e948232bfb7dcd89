//! Tests du cerveau (campagne) : comportements attendus au bouton près.
//!
//! Conventions :
//! - une "séquence" est une liste de touches telles que l’afficheur les envoie
//!   (nombre => definir_operande, texte => effectuer_operation)
//! - valeurs exactes comparées avec assert_eq!, le reste avec float_eq

use float_eq::assert_float_eq;
use std::f64::consts::{E, PI};

use super::cerveau::Cerveau;
use super::programme::{Entree, Programme};

#[derive(Clone, Copy)]
enum T {
    N(f64),
    S(&'static str),
}

fn jouer(cerveau: &mut Cerveau, sequence: &[T]) {
    for t in sequence {
        match *t {
            T::N(x) => cerveau.definir_operande(x),
            T::S(s) => cerveau.effectuer_operation(s),
        }
    }
}

fn resultat_de(sequence: &[T]) -> f64 {
    let mut c = Cerveau::new();
    jouer(&mut c, sequence);
    c.resultat()
}

fn sym(s: &str) -> Entree {
    Entree::Symbole(s.to_string())
}

/* ------------------------ État initial ------------------------ */

#[test]
fn etat_initial() {
    let c = Cerveau::new();
    assert_eq!(c.resultat(), 0.0);
    assert!(c.programme().est_vide());
    assert!(!c.a_operation_en_attente());
}

/* ------------------------ Opérandes + constantes ------------------------ */

#[test]
fn operande_journalise() {
    let mut c = Cerveau::new();
    c.definir_operande(42.0);
    assert_eq!(c.resultat(), 42.0);
    assert_eq!(c.programme().entrees(), &[Entree::Nombre(42.0)]);
}

#[test]
fn constantes() {
    assert_eq!(resultat_de(&[T::S("π")]), PI);
    assert_eq!(resultat_de(&[T::N(7.0), T::S("e")]), E);
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn racine_carree() {
    assert_eq!(resultat_de(&[T::N(9.0), T::S("√")]), 3.0);
}

#[test]
fn carre() {
    assert_eq!(resultat_de(&[T::N(5.0), T::S("^")]), 25.0);
    assert_eq!(resultat_de(&[T::N(-3.0), T::S("^")]), 9.0);
}

#[test]
fn oppose_et_log() {
    assert_eq!(resultat_de(&[T::N(8.0), T::S("+/-")]), -8.0);
    assert_eq!(resultat_de(&[T::N(10.0), T::S("log")]), 1.0);
}

#[test]
fn trigonometrie_en_radians() {
    assert_float_eq!(resultat_de(&[T::S("π"), T::S("sin")]), 0.0, abs <= 1e-15);
    assert_float_eq!(resultat_de(&[T::S("π"), T::S("cos")]), -1.0, abs <= 1e-15);
    assert_float_eq!(resultat_de(&[T::N(PI / 4.0), T::S("tan")]), 1.0, abs <= 1e-15);
}

/* ------------------------ Binaires ------------------------ */

#[test]
fn binaire_simple() {
    assert_eq!(resultat_de(&[T::N(6.0), T::S("×"), T::N(7.0), T::S("=")]), 42.0);
    assert_eq!(resultat_de(&[T::N(7.0), T::S("÷"), T::N(2.0), T::S("=")]), 3.5);
    assert_eq!(resultat_de(&[T::N(7.0), T::S("−"), T::N(9.0), T::S("=")]), -2.0);
}

#[test]
fn chainage_gauche_a_droite() {
    // 3 + 4 résolu au second "+", puis + 5 au "="
    let seq = [
        T::N(3.0),
        T::S("+"),
        T::N(4.0),
        T::S("+"),
        T::N(5.0),
        T::S("="),
    ];
    assert_eq!(resultat_de(&seq), 12.0);

    // pas de priorité : 2 + 3 × 4 = 20
    let seq = [
        T::N(2.0),
        T::S("+"),
        T::N(3.0),
        T::S("×"),
        T::N(4.0),
        T::S("="),
    ];
    assert_eq!(resultat_de(&seq), 20.0);
}

#[test]
fn resultat_intermediaire_visible() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(3.0), T::S("+"), T::N(4.0), T::S("×")]);
    assert_eq!(c.resultat(), 7.0);
    assert!(c.a_operation_en_attente());
}

#[test]
fn second_operande_par_unaire() {
    // 2 + 9 √ = -> 2 + 3
    let seq = [T::N(2.0), T::S("+"), T::N(9.0), T::S("√"), T::S("=")];
    assert_eq!(resultat_de(&seq), 5.0);

    // 2 × π = (la constante fournit le second opérande)
    let seq = [T::N(2.0), T::S("×"), T::S("π"), T::S("=")];
    assert_eq!(resultat_de(&seq), 2.0 * PI);
}

#[test]
fn binaire_sans_second_operande() {
    // 5 + = -> 5 + 5 (l’accumulateur sert de second opérande)
    assert_eq!(resultat_de(&[T::N(5.0), T::S("+"), T::S("=")]), 10.0);
}

#[test]
fn egal_sans_attente() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(4.0), T::S("="), T::S("=")]);
    assert_eq!(c.resultat(), 4.0);
    assert!(!c.a_operation_en_attente());
}

#[test]
fn egal_vide_l_attente() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(4.0), T::S("+"), T::N(1.0), T::S("=")]);
    assert!(!c.a_operation_en_attente());
    // un second "=" ne refait pas l’addition
    c.effectuer_operation("=");
    assert_eq!(c.resultat(), 5.0);
}

/* ------------------------ IEEE-754 sans filet ------------------------ */

#[test]
fn division_par_zero() {
    assert_eq!(
        resultat_de(&[T::N(1.0), T::S("÷"), T::N(0.0), T::S("=")]),
        f64::INFINITY
    );
    assert!(resultat_de(&[T::N(0.0), T::S("÷"), T::N(0.0), T::S("=")]).is_nan());
}

#[test]
fn hors_domaine() {
    assert!(resultat_de(&[T::N(-1.0), T::S("√")]).is_nan());
    assert_eq!(resultat_de(&[T::N(0.0), T::S("log")]), f64::NEG_INFINITY);
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn effacer_direct() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(3.0), T::S("+"), T::N(4.0), T::S("bof")]);
    c.effacer();
    assert_eq!(c.resultat(), 0.0);
    assert!(c.programme().est_vide());
    assert!(!c.a_operation_en_attente());
}

#[test]
fn touche_c() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(3.0), T::S("×"), T::N(4.0), T::S("C")]);
    assert_eq!(c.resultat(), 0.0);
    // le "C" lui-même ne survit pas dans le journal
    assert!(c.programme().est_vide());
    assert!(!c.a_operation_en_attente());

    // pas d’attente fantôme après C : 2 = reste 2
    jouer(&mut c, &[T::N(2.0), T::S("=")]);
    assert_eq!(c.resultat(), 2.0);
}

/* ------------------------ Symboles inconnus ------------------------ */

#[test]
fn symbole_inconnu_journalise_sans_effet() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(6.0), T::S("%")]);
    assert_eq!(c.resultat(), 6.0);
    assert_eq!(
        c.programme().entrees(),
        &[Entree::Nombre(6.0), sym("%")]
    );

    // le rejeu passe sur le symbole sans rien changer
    let p = c.programme();
    let mut d = Cerveau::new();
    d.set_programme(&p);
    assert_eq!(d.resultat(), 6.0);
    assert_eq!(d.programme(), p);
}

#[test]
fn symbole_inconnu_n_annule_pas_l_attente() {
    let seq = [T::N(2.0), T::S("+"), T::N(3.0), T::S("-"), T::S("=")];
    assert_eq!(resultat_de(&seq), 5.0);
}

/* ------------------------ Programme (photo + rejeu) ------------------------ */

#[test]
fn programme_ordre_exact() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(3.0), T::S("+"), T::N(4.0), T::S("=")]);
    assert_eq!(
        c.programme().entrees(),
        &[Entree::Nombre(3.0), sym("+"), Entree::Nombre(4.0), sym("=")]
    );
}

#[test]
fn rejeu_reproduit_le_resultat() {
    let seq = [
        T::N(2.0),
        T::S("×"),
        T::S("π"),
        T::S("="),
        T::S("sin"),
        T::S("+"),
        T::N(1.5),
        T::S("^"),
        T::S("="),
    ];
    let mut c = Cerveau::new();
    jouer(&mut c, &seq);
    let p = c.programme();

    let mut d = Cerveau::new();
    jouer(&mut d, &[T::N(99.0), T::S("÷")]);
    d.set_programme(&p);

    assert_eq!(d.resultat().to_bits(), c.resultat().to_bits());
    assert_eq!(d.programme(), p);
}

#[test]
fn rejeu_reproduit_l_attente() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(10.0), T::S("−")]);
    let p = c.programme();

    let mut d = Cerveau::new();
    d.set_programme(&p);
    assert!(d.a_operation_en_attente());

    // le second opérande arrive après la restauration
    d.definir_operande(4.0);
    d.effectuer_operation("=");
    assert_eq!(d.resultat(), 6.0);
}

#[test]
fn rejeu_programme_vide() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(5.0), T::S("+")]);
    c.set_programme(&Programme::default());
    assert_eq!(c.resultat(), 0.0);
    assert!(!c.a_operation_en_attente());
    assert!(c.programme().est_vide());
}

#[test]
fn rejeu_avec_c_au_milieu() {
    // un programme écrit à la main peut contenir un "C" : le rejeu l’exécute
    let p = Programme::depuis_json(r#"[8, "×", 2, "C", 3, "+", 1, "="]"#).unwrap();
    let mut c = Cerveau::new();
    c.set_programme(&p);
    assert_eq!(c.resultat(), 4.0);
    assert_eq!(
        c.programme().entrees(),
        &[Entree::Nombre(3.0), sym("+"), Entree::Nombre(1.0), sym("=")]
    );
}

#[test]
fn photo_independante_du_cerveau() {
    let mut c = Cerveau::new();
    c.definir_operande(1.0);
    let p = c.programme();
    c.effectuer_operation("+/-");
    assert_eq!(p.entrees(), &[Entree::Nombre(1.0)]);
}

#[test]
fn rejeu_via_json() {
    let mut c = Cerveau::new();
    jouer(&mut c, &[T::N(0.1), T::S("+"), T::N(0.2), T::S("="), T::S("√")]);
    let texte = c.programme().vers_json().unwrap();

    let mut d = Cerveau::new();
    d.set_programme(&Programme::depuis_json(&texte).unwrap());
    assert_eq!(d.resultat().to_bits(), c.resultat().to_bits());
}
