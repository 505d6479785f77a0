//! Rotor stepping behaviour observed through the public API.

use enigma_engine::{EnigmaMachine, Plugboard, Rotor, RotorTray};

fn tray(names: &[&str], positions: &[i64]) -> RotorTray {
    let mut rotors = vec![Rotor::from_preset("UKW-B", 0, 0).unwrap()];
    for (name, &position) in names.iter().zip(positions) {
        rotors.push(Rotor::from_preset(name, position, 0).unwrap());
    }
    RotorTray::new(rotors).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Double stepping
// ═══════════════════════════════════════════════════════════════════════

/// Middle rotor one step before its notch: after two keypresses it has
/// advanced twice and carried the left rotor once.
#[test]
fn middle_rotor_double_steps() {
    // II notch E (4); right rotor III sits on its notch V (21)
    let mut t = tray(&["I", "II", "III"], &[0, 3, 21]);
    t.step();
    assert_eq!(t.window(), "AEW");
    t.step();
    assert_eq!(t.window(), "BFX");
    assert_eq!(t.positions(), vec![1, 5, 23]);
}

#[test]
fn double_step_sequence_adu() {
    let mut t = tray(&["I", "II", "III"], &[0, 3, 20]);
    let windows: Vec<String> = (0..4)
        .map(|_| {
            t.step();
            t.window()
        })
        .collect();
    assert_eq!(windows, vec!["ADV", "AEW", "BFX", "BFY"]);
}

/// Double stepping follows each rotor's own notch.
#[test]
fn double_step_with_rotor_v_in_middle() {
    // V notch Z (25); I notch Q (16)
    let mut t = tray(&["III", "V", "I"], &[0, 24, 16]);
    t.step();
    assert_eq!(t.window(), "AZR");
    t.step();
    assert_eq!(t.window(), "BAS");
}

/// Rotor V's notch at Z carries on the Z -> A wrap.
#[test]
fn carry_on_wraparound_notch() {
    let mut t = tray(&["I", "II", "V"], &[0, 0, 25]);
    t.step();
    assert_eq!(t.positions(), vec![0, 1, 0]);
}

// ═══════════════════════════════════════════════════════════════════════
// Periodicity
// ═══════════════════════════════════════════════════════════════════════

/// 26 keypresses bring the fast rotor home; its single notch crossing
/// advances the middle rotor once and nothing else moves.
#[test]
fn fast_rotor_period_is_26() {
    let mut t = tray(&["I", "II", "III"], &[0, 0, 0]);
    for _ in 0..26 {
        t.step();
    }
    assert_eq!(t.positions(), vec![0, 1, 0]);
}

/// Without any notch in reach the slower rotors stay put.
#[test]
fn no_carry_before_notch() {
    let mut t = tray(&["I", "II", "III"], &[5, 9, 0]);
    for _ in 0..21 {
        t.step();
    }
    assert_eq!(t.positions(), vec![5, 9, 21]);
}

/// Double stepping shortens the full cycle to 26 * 25 * 26 keypresses.
#[test]
fn full_period_is_16900() {
    let mut t = tray(&["I", "II", "III"], &[0, 0, 0]);
    let start = t.positions();
    let mut period = 0;
    for press in 1..=26 * 26 * 26 {
        t.step();
        if t.positions() == start {
            period = press;
            break;
        }
    }
    assert_eq!(period, 16_900);
}

// ═══════════════════════════════════════════════════════════════════════
// Tray widths
// ═══════════════════════════════════════════════════════════════════════

/// Four rotors: carries ripple left, double stepping applies to every
/// rotor that has a left neighbour.
#[test]
fn four_rotor_tray_ripple() {
    // From left: IV(J=9) II(E=4) I(Q=16) III(V=21)
    let mut t = tray(&["IV", "II", "I", "III"], &[0, 4, 16, 21]);
    t.step();
    // III carries I; I at Q double-steps and carries II; II at E
    // double-steps and carries IV
    assert_eq!(t.positions(), vec![1, 5, 17, 22]);
}

#[test]
fn machine_steps_before_substituting() {
    // The first keypress is enciphered at position B, not A
    let mut stepped = EnigmaMachine::new(
        tray(&["I", "II", "III"], &[0, 0, 0]),
        Plugboard::identity(),
    );
    let direct = tray(&["I", "II", "III"], &[0, 0, 1]);
    assert_eq!(stepped.encrypt_symbol(0), direct.substitute(0));
}
