//! Machine configuration: a serializable key sheet.
//!
//! A [`MachineConfig`] names the reflector, the rotors in installation
//! order (leftmost first) with their settings, and the plugboard cables.
//! It is read from TOML:
//!
//! ```toml
//! reflector = "UKW-B"
//! plugboard = ["AV", "BS", "CG"]
//!
//! [[rotors]]
//! name = "II"
//! position = 7
//!
//! [[rotors]]
//! name = "V"
//! position = "E"
//! ring_setting = "B"
//!
//! [[rotors]]
//! name = "III"
//! position = 19
//! ```
//!
//! Settings are either an index `0..26` or a single letter `"A".."Z"`.
//! Range checks are left to the engine constructors.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::error::{EnigmaError, Result};
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::rotor_tray::RotorTray;

/// A rotor position or ring setting as written in a key sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    /// Numeric index.
    Index(i64),
    /// Window letter.
    Letter(char),
}

impl Default for Setting {
    fn default() -> Self {
        Setting::Index(0)
    }
}

impl Setting {
    /// Numeric value of the setting.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] for a letter outside `'A'..='Z'`.
    pub fn value(self) -> Result<i64> {
        match self {
            Setting::Index(value) => Ok(value),
            Setting::Letter(letter) => alphabet::to_index(letter, 0)
                .map(i64::from)
                .map_err(|_| EnigmaError::Config(format!("invalid setting letter {:?}", letter))),
        }
    }
}

/// One rotor slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Registry name, e.g. `"III"`.
    pub name: String,
    /// Starting position.
    #[serde(default)]
    pub position: Setting,
    /// Ring setting.
    #[serde(default)]
    pub ring_setting: Setting,
}

/// Complete machine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Reflector name, e.g. `"UKW-B"`.
    #[serde(default = "default_reflector")]
    pub reflector: String,
    /// Plugboard cables as two-letter pairs.
    #[serde(default)]
    pub plugboard: Vec<String>,
    /// Rotors from leftmost to rightmost.
    pub rotors: Vec<RotorConfig>,
}

fn default_reflector() -> String {
    "UKW-B".to_string()
}

impl Default for MachineConfig {
    /// Rotors I, II, III at `AAA`, rings `AAA`, reflector UKW-B, no cables.
    fn default() -> Self {
        MachineConfig::from_settings("UKW-B", &["I", "II", "III"], &[0, 0, 0], &[0, 0, 0], &[])
    }
}

impl MachineConfig {
    /// Builds a config from parallel setting slices.
    ///
    /// `positions` and `rings` shorter than `rotors` are padded with zero.
    pub fn from_settings(
        reflector: &str,
        rotors: &[&str],
        positions: &[i64],
        rings: &[i64],
        plugboard: &[&str],
    ) -> Self {
        let rotors = rotors
            .iter()
            .enumerate()
            .map(|(i, name)| RotorConfig {
                name: name.to_string(),
                position: Setting::Index(positions.get(i).copied().unwrap_or(0)),
                ring_setting: Setting::Index(rings.get(i).copied().unwrap_or(0)),
            })
            .collect();
        MachineConfig {
            reflector: reflector.to_string(),
            plugboard: plugboard.iter().map(|p| p.to_string()).collect(),
            rotors,
        }
    }

    /// Parses a TOML key sheet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the document is not valid TOML or
    /// does not match the key-sheet shape.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| EnigmaError::Config(e.to_string()))
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EnigmaError::Config(e.to_string()))
    }

    /// Assembles a machine, validating through the engine constructors.
    ///
    /// # Errors
    /// Any error of [`Rotor::from_preset`], [`RotorTray::new`] or
    /// [`Plugboard::from_pairs_str`], plus [`EnigmaError::Config`] for a bad
    /// setting letter.
    pub fn build(&self) -> Result<EnigmaMachine> {
        let mut rotors = Vec::with_capacity(self.rotors.len() + 1);
        rotors.push(Rotor::from_preset(&self.reflector, 0, 0)?);
        for slot in &self.rotors {
            rotors.push(Rotor::from_preset(
                &slot.name,
                slot.position.value()?,
                slot.ring_setting.value()?,
            )?);
        }
        let tray = RotorTray::new(rotors)?;
        let plugboard = Plugboard::from_pairs_str(&self.plugboard.join(" "))?;

        tracing::debug!(
            reflector = %self.reflector,
            window = %tray.window(),
            cables = plugboard.pair_count(),
            "machine configured"
        );
        Ok(EnigmaMachine::new(tray, plugboard))
    }
}
