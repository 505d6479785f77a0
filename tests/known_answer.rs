//! Known-answer tests for the full encryption pipeline.
//!
//! The short vectors are the widely published Enigma I test vectors. The
//! 300-symbol sample is a frozen snapshot: rotors II V III, UKW-B, rings
//! all 0, start positions 7 4 19, no plugboard. Any change in output
//! indicates a regression in wiring, stepping or offset handling.

use enigma_engine::analysis::{self, SearchSpace};
use enigma_engine::{EnigmaMachine, MachineConfig, Plugboard, Rotor, RotorTray};

const PLAINTEXT: &str = concat!(
    "IPROPOSETOCONSIDERTHEQUESTIONCANMACHINESTHINKTHISSHOULDBEGINWITHDEFINITIONS",
    "OFTHEMEANINGOFTHETERMSMACHINEANDTHINKTHEDEFINITIONSMIGHTBEFRAMEDSOASTOREFLE",
    "CTSOFARASPOSSIBLETHENORMALUSEOFTHEWORDSBUTTHISATTITUDEISDANGEROUSIFTHEMEANI",
    "NGOFTHEWORDSMACHINEANDTHINKARETOBEFOUNDBYEXAMININGHOWTHEYARECOMMONLYUSEDITI",
);

const CIPHERTEXT: &str = concat!(
    "OWYHCZAHVRUUVMVAQFJQYVOCKDBIKMMEXHWEFLAECRQWJDMJTMMBSJFHAYRCPRKEUTAGVJOTGIY",
    "LZFSIZHIVRRYFXXTMGREYWSWVEAAXNAVMZOWYGVKKUWLTBOVNAODVTFRIUGMHSDEYMKTFFSBHTA",
    "EUJNIODVKEUNGWPOCRYLODSOIJXGVAPSADYJWGVKLUVZCPGLKVQLQOXFZZMDYYPAVYUPZPAOZJK",
    "BRVIKROXQKMZZXQLGVVMLRAUCFOCHSNREYOEOBTWBUSZPQLJJOFSGORHOJYNSEGWCMZNXQYFZOL",
);

/// Builds a three-rotor UKW-B machine from preset names.
fn machine(names: [&str; 3], positions: [i64; 3], rings: [i64; 3], plugs: &str) -> EnigmaMachine {
    let mut rotors = vec![Rotor::from_preset("UKW-B", 0, 0).unwrap()];
    for ((name, position), ring) in names.into_iter().zip(positions).zip(rings) {
        rotors.push(Rotor::from_preset(name, position, ring).unwrap());
    }
    EnigmaMachine::new(
        RotorTray::new(rotors).unwrap(),
        Plugboard::from_pairs_str(plugs).unwrap(),
    )
}

fn turing_machine() -> EnigmaMachine {
    machine(["II", "V", "III"], [7, 4, 19], [0, 0, 0], "")
}

// ═══════════════════════════════════════════════════════════════════════
// Published vectors
// ═══════════════════════════════════════════════════════════════════════

/// Rotors I II III, UKW-B, rings AAA, start AAA.
#[test]
fn published_vector_aaaaa() {
    let mut m = machine(["I", "II", "III"], [0, 0, 0], [0, 0, 0], "");
    assert_eq!(m.encrypt("AAAAA").unwrap(), "BDZGO");
}

/// Same machine with rings BBB.
#[test]
fn published_vector_ring_settings_bbb() {
    let mut m = machine(["I", "II", "III"], [0, 0, 0], [1, 1, 1], "");
    assert_eq!(m.encrypt("AAAAA").unwrap(), "EWTYX");
}

#[test]
fn published_vector_hello_world() {
    let mut m = machine(["I", "II", "III"], [0, 0, 0], [0, 0, 0], "");
    assert_eq!(m.encrypt("HELLOWORLD").unwrap(), "ILBDAAMTAZ");
}

// ═══════════════════════════════════════════════════════════════════════
// Frozen snapshots
// ═══════════════════════════════════════════════════════════════════════

/// The 300-symbol sample decrypts to the plaintext symbol for symbol.
#[test]
fn frozen_sample_decrypts_to_plaintext() {
    assert_eq!(CIPHERTEXT.len(), 300);
    let decrypted = turing_machine().encrypt(CIPHERTEXT).unwrap();
    assert!(decrypted.starts_with("IPROPOSETOCONSIDERTHEQUESTIONCANMACHINESTHINK"));
    assert_eq!(decrypted, PLAINTEXT);
}

#[test]
fn frozen_sample_encrypts_from_plaintext() {
    assert_eq!(turing_machine().encrypt(PLAINTEXT).unwrap(), CIPHERTEXT);
}

/// Same sample driven from a TOML key sheet.
#[test]
fn frozen_sample_from_key_sheet() {
    let sheet = r#"
reflector = "UKW-B"

[[rotors]]
name = "II"
position = "H"

[[rotors]]
name = "V"
position = "E"

[[rotors]]
name = "III"
position = "T"
"#;
    let mut m = MachineConfig::from_toml_str(sheet).unwrap().build().unwrap();
    assert_eq!(m.encrypt(CIPHERTEXT).unwrap(), PLAINTEXT);
}

/// Rings and a ten-cable plugboard together.
#[test]
fn frozen_vector_rings_and_plugboard() {
    let plugs = "AV BS CG DL FU HZ IN KM OW RX";
    let mut m = machine(["IV", "I", "V"], [12, 2, 25], [3, 17, 8], plugs);
    assert_eq!(
        m.encrypt("WETTERVORHERSAGEBISKAYA").unwrap(),
        "KDPQRVYPGLAPGZZOLQQJHIL"
    );
}

/// Decrypting symbol by symbol matches whole-message decryption.
#[test]
fn symbol_path_matches_message_path() {
    let mut m = turing_machine();
    let by_symbol: String = CIPHERTEXT
        .bytes()
        .map(|b| (b'A' + m.encrypt_symbol(b - b'A')) as char)
        .collect();
    assert_eq!(by_symbol, PLAINTEXT);
}

// ═══════════════════════════════════════════════════════════════════════
// Search
// ═══════════════════════════════════════════════════════════════════════

/// The position sweep ranks the true start positions first for the true
/// rotor order.
#[test]
fn search_recovers_sample_key() {
    let space = SearchSpace {
        rotors: vec!["II".to_string(), "V".to_string(), "III".to_string()],
        ..SearchSpace::default()
    };
    let candidates = analysis::search(CIPHERTEXT, &space).unwrap();
    assert_eq!(candidates.len(), 6);
    assert_eq!(candidates[0].rotors, vec!["II", "V", "III"]);
    assert_eq!(candidates[0].positions, vec![7, 4, 19]);
    assert!(candidates[0].score > analysis::ENGLISH_IOC - 0.2);
}
