//! Exhaustive rotor-order and start-position search.
//!
//! For every ordered choice of rotors (one per tray slot) the search tries
//! every combination of starting positions, decrypts the ciphertext with a
//! fresh machine and keeps the position set with the highest index of
//! coincidence. Ring settings and plugboard are held fixed for every trial.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::analysis::ioc::index_of_coincidence_indices;
use crate::config::MachineConfig;
use crate::error::{EnigmaError, Result};
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::rotor_spec::RotorSpec;
use crate::rotor_tray::RotorTray;

/// Default number of ciphertext symbols scored per trial.
pub const DEFAULT_MAX_LEN: usize = 300;

/// Parameters of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    /// Rotor names to draw from.
    pub rotors: Vec<String>,
    /// Number of rotor slots in the tray.
    pub slots: usize,
    /// Reflector name.
    pub reflector: String,
    /// Ring settings per slot, leftmost first; missing entries are zero.
    pub ring_settings: Vec<i64>,
    /// Plugboard used for every trial.
    pub plugboard: Plugboard,
    /// Starting positions tried per slot: `0..position_range`.
    pub position_range: u8,
    /// Only the first `max_len` ciphertext symbols are scored.
    pub max_len: Option<usize>,
}

impl Default for SearchSpace {
    /// Three slots drawn from rotors I..V, UKW-B, zero rings, no cables,
    /// every position, first 300 symbols.
    fn default() -> Self {
        SearchSpace {
            rotors: RotorSpec::rotor_names().map(str::to_string).collect(),
            slots: 3,
            reflector: "UKW-B".to_string(),
            ring_settings: Vec::new(),
            plugboard: Plugboard::identity(),
            position_range: ALPHABET_SIZE as u8,
            max_len: Some(DEFAULT_MAX_LEN),
        }
    }
}

/// Best scoring start positions for one rotor order.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Rotor names, leftmost first.
    pub rotors: Vec<&'static str>,
    /// Starting positions, leftmost first.
    pub positions: Vec<u8>,
    /// Index of coincidence of the decryption.
    pub score: f64,
}

impl Candidate {
    /// Start positions as window letters.
    pub fn window(&self) -> String {
        alphabet::indices_to_text(&self.positions)
    }

    /// Key sheet reproducing this candidate within `space`.
    pub fn to_config(&self, space: &SearchSpace) -> MachineConfig {
        let positions: Vec<i64> = self.positions.iter().map(|&p| i64::from(p)).collect();
        let pairs: Vec<String> = space
            .plugboard
            .pairs()
            .into_iter()
            .map(|(a, b)| [a, b].iter().collect())
            .collect();
        let pairs: Vec<&str> = pairs.iter().map(String::as_str).collect();
        MachineConfig::from_settings(
            &space.reflector,
            &self.rotors,
            &positions,
            &space.ring_settings,
            &pairs,
        )
    }
}

/// Runs the search and returns one candidate per rotor order, best first.
///
/// # Errors
/// - [`EnigmaError::InvalidInput`] if the ciphertext contains a symbol
///   outside `'A'..='Z'`.
/// - [`EnigmaError::UnknownRotor`] for an unknown rotor or reflector name.
/// - [`EnigmaError::InvalidSetting`] for a ring setting or position range
///   outside `[0, 26)` / `[1, 26]`.
/// - [`EnigmaError::Config`] if the slot count is zero or exceeds the
///   number of distinct rotors.
pub fn search(ciphertext: &str, space: &SearchSpace) -> Result<Vec<Candidate>> {
    let mut indices = alphabet::text_to_indices(ciphertext)?;
    if let Some(max_len) = space.max_len {
        indices.truncate(max_len);
    }

    let reflector = RotorSpec::lookup(&space.reflector)?;
    let specs = space
        .rotors
        .iter()
        .map(|name| RotorSpec::lookup(name))
        .collect::<Result<Vec<_>>>()?;
    if space.slots == 0 || space.slots > specs.len() {
        return Err(EnigmaError::Config(format!(
            "cannot fill {} slots from {} rotors",
            space.slots,
            specs.len()
        )));
    }
    if space.position_range == 0 || space.position_range as usize > ALPHABET_SIZE {
        return Err(EnigmaError::InvalidSetting {
            setting: "position range",
            value: i64::from(space.position_range),
        });
    }
    let rings: Vec<i64> = (0..space.slots)
        .map(|i| space.ring_settings.get(i).copied().unwrap_or(0))
        .collect();
    // Validates every ring once; trials below cannot fail afterwards.
    for &ring in &rings {
        Rotor::new(reflector, 0, ring)?;
    }

    let mut candidates = Vec::new();
    for order in permutations(&specs, space.slots) {
        let names: Vec<&'static str> = order.iter().map(|s| s.name()).collect();
        tracing::debug!(rotors = ?names, "scanning rotor order");

        let mut best: Option<(f64, Vec<u8>)> = None;
        let mut positions = vec![0u8; space.slots];
        loop {
            let mut machine = trial_machine(reflector, &order, &positions, &rings, space.plugboard)?;
            let decrypted = machine.encrypt_indices(&indices)?;
            let score = index_of_coincidence_indices(&decrypted);
            let improved = match &best {
                Some((top, _)) => score > *top,
                None => true,
            };
            if improved {
                best = Some((score, positions.clone()));
            }
            if !advance(&mut positions, space.position_range) {
                break;
            }
        }

        if let Some((score, positions)) = best {
            tracing::debug!(rotors = ?names, ?positions, score, "best position for order");
            candidates.push(Candidate {
                rotors: names,
                positions,
                score,
            });
        }
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(candidates)
}

fn trial_machine(
    reflector: &'static RotorSpec,
    order: &[&'static RotorSpec],
    positions: &[u8],
    rings: &[i64],
    plugboard: Plugboard,
) -> Result<EnigmaMachine> {
    let mut rotors = Vec::with_capacity(order.len() + 1);
    rotors.push(Rotor::new(reflector, 0, 0)?);
    for ((spec, &position), &ring) in order.iter().zip(positions).zip(rings) {
        rotors.push(Rotor::new(*spec, i64::from(position), ring)?);
    }
    Ok(EnigmaMachine::new(RotorTray::new(rotors)?, plugboard))
}

/// Odometer increment, rightmost digit fastest. Returns false on wrap-around.
fn advance(positions: &mut [u8], range: u8) -> bool {
    for digit in positions.iter_mut().rev() {
        *digit += 1;
        if *digit < range {
            return true;
        }
        *digit = 0;
    }
    false
}

/// Ordered selections of `k` distinct items, in lexicographic index order.
fn permutations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn extend<T: Copy>(
        items: &[T],
        k: usize,
        used: &mut [bool],
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for (i, &item) in items.iter().enumerate() {
            if !used[i] {
                used[i] = true;
                current.push(item);
                extend(items, k, used, current, out);
                current.pop();
                used[i] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(
        items,
        k,
        &mut vec![false; items.len()],
        &mut Vec::with_capacity(k),
        &mut out,
    );
    out
}
