//! Water sample states: unit-tagged quantities and solute compositions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numeric value carrying an explicit unit tag.
///
/// AQS performs no unit conversion. Callers normalise values before a state
/// is constructed; from then on the tag travels with the value through every
/// serialized artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Numeric magnitude expressed in the tagged unit.
    pub value: f64,
    /// Unit tag, e.g. `K`, `Pa` or `mg/L`.
    pub unit: String,
}

impl Quantity {
    /// Creates a quantity from a value and a unit tag.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Temperature in kelvin.
    pub fn kelvin(value: f64) -> Self {
        Self::new(value, "K")
    }

    /// Pressure in pascal.
    pub fn pascal(value: f64) -> Self {
        Self::new(value, "Pa")
    }

    /// Mass concentration in milligrams per litre.
    pub fn milligrams_per_liter(value: f64) -> Self {
        Self::new(value, "mg/L")
    }
}

/// Fully-specified description of one water sample.
///
/// Temperature and pressure are designated entries and always present;
/// solute components are keyed by unique name in deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleState {
    /// Sample temperature.
    pub temperature: Quantity,
    /// Sample pressure.
    pub pressure: Quantity,
    /// Solute concentrations keyed by component name.
    #[serde(default)]
    pub components: BTreeMap<String, Quantity>,
}

impl SampleState {
    /// Creates a state with the designated temperature and pressure entries
    /// and no components yet.
    pub fn new(temperature: Quantity, pressure: Quantity) -> Self {
        Self {
            temperature,
            pressure,
            components: BTreeMap::new(),
        }
    }

    /// Adds or replaces a solute component, returning the updated state.
    pub fn with_component(mut self, name: impl Into<String>, quantity: Quantity) -> Self {
        self.components.insert(name.into(), quantity);
        self
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<&Quantity> {
        self.components.get(name)
    }

    /// Overwrites the value of an existing component, leaving its unit tag
    /// untouched. Returns `false` when the component does not exist.
    pub fn set_component_value(&mut self, name: &str, value: f64) -> bool {
        match self.components.get_mut(name) {
            Some(quantity) => {
                quantity.value = value;
                true
            }
            None => false,
        }
    }

    /// Returns the component names in deterministic order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}
