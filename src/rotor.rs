//! Rotor: one physical wired disc installed in a tray slot.
//!
//! A rotor pairs a shared, immutable [`RotorSpec`] with its own ring setting
//! and angular position. The signal path through the disc depends only on
//! the difference `position - ring_setting`: the contact under input `i`
//! is `i + offset`, the static wiring is applied, and the result is shifted
//! back by the same offset.

use crate::alphabet::{self, SIZE};
use crate::error::{EnigmaError, Result};
use crate::rotor_spec::RotorSpec;

/// One rotor or reflector instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotor {
    spec: &'static RotorSpec,
    ring_setting: u8,
    position: u8,
}

/// Validates a position or ring setting.
fn checked_setting(setting: &'static str, value: i64) -> Result<u8> {
    if (0..SIZE as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(EnigmaError::InvalidSetting { setting, value })
    }
}

impl Rotor {
    /// Creates a rotor from a registered preset name.
    ///
    /// # Parameters
    /// - `name`: Registry name (`"I"`..`"V"`, `"UKW-A"`, `"UKW-B"`, `"UKW-C"`).
    /// - `position`: Starting position in `[0, 26)`.
    /// - `ring_setting`: Ring setting in `[0, 26)`.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotor`] if `name` is not registered.
    /// - [`EnigmaError::InvalidSetting`] if a setting is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Rotor;
    ///
    /// let rotor = Rotor::from_preset("II", 4, 0).unwrap();
    /// assert_eq!(rotor.window_letter(), 'E');
    /// assert!(Rotor::from_preset("I", 26, 0).is_err());
    /// ```
    pub fn from_preset(name: &str, position: i64, ring_setting: i64) -> Result<Self> {
        let spec = RotorSpec::lookup(name)?;
        Self::new(spec, position, ring_setting)
    }

    /// Creates a rotor from a spec reference.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSetting`] if `position` or
    /// `ring_setting` is outside `[0, 26)`.
    pub fn new(spec: &'static RotorSpec, position: i64, ring_setting: i64) -> Result<Self> {
        Ok(Rotor {
            spec,
            position: checked_setting("position", position)?,
            ring_setting: checked_setting("ring setting", ring_setting)?,
        })
    }

    /// Advances the rotor by one position.
    #[inline]
    pub fn step(&mut self) {
        self.position = (self.position + 1) % SIZE;
    }

    /// True if the current position is one of the spec's notches.
    ///
    /// Reflectors have no notches and always return `false`.
    #[inline]
    pub fn is_at_notch(&self) -> bool {
        self.spec.notches().contains(&self.position)
    }

    /// Maps an index through the wiring on the entry path.
    #[inline]
    pub fn forward(&self, index: u8) -> u8 {
        let offset = self.offset();
        alphabet::shift(self.spec.wiring(alphabet::shift(index, offset)), -offset)
    }

    /// Maps an index through the inverse wiring on the return path.
    #[inline]
    pub fn backward(&self, index: u8) -> u8 {
        let offset = self.offset();
        alphabet::shift(self.spec.inverse(alphabet::shift(index, offset)), -offset)
    }

    #[inline]
    fn offset(&self) -> i16 {
        self.position as i16 - self.ring_setting as i16
    }

    /// Current position in `[0, 26)`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting in `[0, 26)`.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Letter shown in the rotor window.
    pub fn window_letter(&self) -> char {
        alphabet::to_symbol(self.position)
    }

    /// Shared wiring description.
    pub fn spec(&self) -> &'static RotorSpec {
        self.spec
    }

    /// Registry name of the wiring.
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// True if this instance is a reflector.
    pub fn is_reflector(&self) -> bool {
        self.spec.is_reflector()
    }
}
