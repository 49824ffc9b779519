//! Tests série de Bellard : valeurs épinglées, invariants, concurrence.
//!
//! Les valeurs épinglées ont été calculées hors ligne en arithmétique rationnelle
//! exacte, un arrondi au plus proche (égalité -> pair) par opération, en suivant
//! le même ordre d'opérations que bellard.rs.

use std::time::{Duration, Instant};

use super::bellard::{evaluate, evaluate_avec, pi_bellard, pi_bellard_avec, Division};
use super::flottant::PREC_F64;

const PI_200: &str = "3.14159265358979323846264338327950288419716939937510\
58209749445923078164062862089986280348253421170679\
82148086513282306647093844609550582231725359408128\
48111745028410270193852110555964462294895493038196";

/// Nombre de chiffres après la virgule qui coïncident avec π.
fn chiffres_corrects(valeur: &str) -> usize {
    let Some(frac) = valeur.strip_prefix("3.") else {
        return 0;
    };
    frac.chars()
        .zip(PI_200[2..].chars())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Zéro itération ------------------------ */

#[test]
fn zero_iteration_donne_zero() {
    assert_eq!(evaluate(0, 10), "0.0000000000");
    assert_eq!(evaluate(0, 0), "0");
    assert_eq!(evaluate(0, 3), "0.000");
    assert_eq!(evaluate_avec(0, 10, Division::Exacte), "0.0000000000");

    let p = pi_bellard(0, 64);
    assert!(p.is_zero());
    assert_eq!(p.prec(), 64);
}

/* ------------------------ Valeurs épinglées (division native) ------------------------ */

#[test]
fn un_terme_dix_bits() {
    // k=0 : 256 + 1/9 - 64/3 - 32 - (4/5 + 4/7 + 1/3), / 64, à 10 bits
    assert_eq!(evaluate(1, 10), "3.1406250000");
}

#[test]
fn un_terme_precision_f64() {
    assert_eq!(
        evaluate(1, 53),
        "3.14176587301587328937557686003856360912322998046875000"
    );
}

#[test]
fn deux_termes_precision_f64() {
    assert_eq!(
        evaluate(2, 53),
        "3.14159257186839058206828667607624083757400512695312500"
    );
}

#[test]
fn trois_termes_64_bits() {
    assert_eq!(
        evaluate(3, 64),
        "3.1415926536420507883626968004264767841959837824106216430664062500"
    );
}

#[test]
fn cent_termes_64_bits() {
    assert_eq!(
        evaluate(100, 64),
        "3.1415926535897932567274054571626606957579497247934341430664062500"
    );
}

#[test]
fn vingt_termes_100_bits() {
    assert_eq!(
        evaluate(20, 100),
        "3.1415926535897932569603993617408022914040613321207772834064292366562654024164658039808273315429687500"
    );
}

#[test]
fn petites_precisions() {
    assert_eq!(evaluate(2, 10), "3.1406250000");
    assert_eq!(evaluate(3, 20), "3.14159393310546875000");
    // 10 bits de mantisse : la précision, pas les itérations, limite le résultat
    assert_eq!(evaluate(100, 10), "3.1406250000");
}

#[test]
fn precision_zero_travaille_a_53_bits() {
    assert_eq!(evaluate(100, 0), "3");
    assert_eq!(evaluate(1, 0), "3");
    assert_eq!(pi_bellard(5, 0).prec(), PREC_F64);
    assert_eq!(pi_bellard(5, 0), pi_bellard(5, PREC_F64));
}

/* ------------------------ Division exacte ------------------------ */

#[test]
fn division_exacte_epinglee() {
    assert_eq!(evaluate_avec(1, 10, Division::Exacte), "3.1406250000");
    assert_eq!(
        evaluate_avec(3, 64, Division::Exacte),
        "3.1415926536420507697144194336758005192677956074476242065429687500"
    );
    assert_eq!(
        evaluate_avec(20, 100, Division::Exacte),
        "3.1415926535897932384626433832824887592648460686038735612066880031889581914583686739206314086914062500"
    );
}

#[test]
fn un_terme_identique_dans_les_deux_modes_a_53_bits() {
    // à 53 bits, la division f64 EST l'arrondi correct du quotient
    assert_eq!(pi_bellard(1, 53), pi_bellard_avec(1, 53, Division::Exacte));
}

#[test]
fn division_exacte_depasse_la_limite_f64() {
    let native = evaluate(40, 200);
    let exacte = evaluate_avec(40, 200, Division::Exacte);

    // native : bloquée vers 16 chiffres par l'arrondi f64 des termes
    assert!(chiffres_corrects(&native) < 20, "native={native}");
    // exacte : limitée par les 200 bits (~60 chiffres)
    assert!(chiffres_corrects(&exacte) >= 55, "exacte={exacte}");
}

/* ------------------------ Invariants ------------------------ */

#[test]
fn convergence_monotone_a_50_bits() {
    let mut precedent = 0;
    for it in 1..=10 {
        let v = evaluate(it, 50);
        let n = chiffres_corrects(&v);
        assert!(n >= precedent, "it={it} v={v} n={n} précédent={precedent}");
        precedent = n;
    }
    assert!(precedent >= 14, "précision finale insuffisante: {precedent}");
}

#[test]
fn cent_termes_approchent_pi() {
    let v = evaluate(100, 64);
    assert!(v.starts_with("3.14159265358979"), "v={v}");
    assert!(chiffres_corrects(&evaluate(100, 200)) >= 15);
}

#[test]
fn determinisme() {
    for (it, prec) in [(0, 0), (1, 10), (7, 33), (50, 128)] {
        assert_eq!(evaluate(it, prec), evaluate(it, prec));
        assert_eq!(pi_bellard(it, prec), pi_bellard(it, prec));
    }
}

#[test]
fn precision_partagee_par_le_resultat() {
    for prec in [1, 2, 10, 53, 64, 300] {
        assert_eq!(pi_bellard(5, prec).prec(), prec);
        assert_eq!(pi_bellard_avec(5, prec, Division::Exacte).prec(), prec);
    }
}

#[test]
fn nombre_de_chiffres_apres_la_virgule() {
    for prec in [1u32, 5, 17, 64] {
        let v = evaluate(3, prec);
        let (_, frac) = v.split_once('.').unwrap();
        assert_eq!(frac.len(), prec as usize, "v={v}");
    }
}

/* ------------------------ Concurrence ------------------------ */

#[test]
fn appels_concurrents_independants() {
    let cas: Vec<(u32, u32)> = vec![(0, 10), (1, 10), (3, 64), (20, 100), (100, 64), (10, 50)];
    let attendus: Vec<String> = cas.iter().map(|&(i, p)| evaluate(i, p)).collect();

    let obtenus: Vec<String> = std::thread::scope(|s| {
        let poignees: Vec<_> = cas
            .iter()
            .map(|&(i, p)| s.spawn(move || evaluate(i, p)))
            .collect();
        poignees.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(obtenus, attendus);
}

/* ------------------------ Limites contrôlées ------------------------ */

#[test]
fn gros_calcul_sous_budget() {
    let start = Instant::now();
    let v = evaluate_avec(300, 2048, Division::Exacte);
    budget(start, Duration::from_secs(30));

    assert_eq!(v.len(), 2 + 2048);
    assert!(chiffres_corrects(&v) >= 190, "v={}", &v[..220]);
}
