//! The gate catalog: a mapping from gate name to its defining matrix.
//!
//! The catalog is plain configuration. The register simulator looks gates up
//! by name and treats the matrices as opaque unitaries; it never computes them.
//!
//! A catalog can be loaded from JSON or YAML. Complex entries are written as
//! `[re, im]` pairs:
//!
//! ```yaml
//! gates:
//!   x:
//!     kind: single
//!     matrix: [[[0, 0], [1, 0]], [[1, 0], [0, 0]]]
//!   cx:
//!     kind: controlled
//!     base: [[[0, 0], [1, 0]], [[1, 0], [0, 0]]]
//! ```

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ndarray::array;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GateError, GateResult};
use crate::matrix::{self, Matrix};

/// The fixed set of gates every catalog provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X (bit flip).
    X,
    /// Hadamard.
    H,
    /// Pauli-Y.
    Y,
    /// Pauli-Z (phase flip).
    Z,
    /// S gate, phase π/2.
    S,
    /// T gate, phase π/4.
    T,
    /// Controlled-X (CNOT).
    CX,
}

impl StandardGate {
    /// All standard gates, in catalog order.
    pub const ALL: [StandardGate; 7] = [
        StandardGate::X,
        StandardGate::H,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::S,
        StandardGate::T,
        StandardGate::CX,
    ];

    /// Get the catalog name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::S => "s",
            StandardGate::T => "t",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardGate {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(StandardGate::X),
            "h" => Ok(StandardGate::H),
            "y" => Ok(StandardGate::Y),
            "z" => Ok(StandardGate::Z),
            "s" => Ok(StandardGate::S),
            "t" => Ok(StandardGate::T),
            "cx" | "cnot" => Ok(StandardGate::CX),
            _ => Err(GateError::UnknownGate(s.to_string())),
        }
    }
}

/// The definition of one catalog gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDefinition {
    /// A 2×2 unitary acting on one qubit.
    Single {
        /// The local matrix.
        matrix: Matrix,
    },
    /// A single-qubit unitary applied when the control qubit is `|1⟩`.
    Controlled {
        /// The 2×2 gate applied to the target.
        base: Matrix,
    },
}

impl GateDefinition {
    /// Create a validated single-qubit definition.
    pub fn single(gate_name: &str, matrix: Matrix) -> GateResult<Self> {
        matrix::validate_single(gate_name, &matrix)?;
        Ok(GateDefinition::Single { matrix })
    }

    /// Create a validated controlled definition.
    pub fn controlled(gate_name: &str, base: Matrix) -> GateResult<Self> {
        matrix::validate_single(gate_name, &base)?;
        Ok(GateDefinition::Controlled { base })
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateDefinition::Single { .. } => 1,
            GateDefinition::Controlled { .. } => 2,
        }
    }

    /// The full local matrix: 2×2 for single gates, 4×4 for controlled ones.
    pub fn local_matrix(&self) -> Matrix {
        match self {
            GateDefinition::Single { matrix } => matrix.clone(),
            GateDefinition::Controlled { base } => matrix::controlled(base),
        }
    }

    fn validate(&self, gate_name: &str) -> GateResult<()> {
        match self {
            GateDefinition::Single { matrix } => matrix::validate_single(gate_name, matrix),
            GateDefinition::Controlled { base } => matrix::validate_single(gate_name, base),
        }
    }
}

/// On-disk form of a gate definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum GateSpec {
    Single { matrix: Vec<Vec<Complex64>> },
    Controlled { base: Vec<Vec<Complex64>> },
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    gates: BTreeMap<String, GateSpec>,
}

/// A mapping from gate name to gate definition.
///
/// Names are stored lowercase and looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct GateCatalog {
    gates: FxHashMap<String, GateDefinition>,
}

impl GateCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self {
            gates: FxHashMap::default(),
        }
    }

    /// The standard catalog: X, H, Y, Z, S, T and CX.
    ///
    /// Y is the canonical Pauli-Y `[[0, -i], [i, 0]]`.
    pub fn standard() -> Self {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);

        let x = array![[zero, one], [one, zero]];
        let mut gates = FxHashMap::default();
        gates.insert(
            "x".to_string(),
            GateDefinition::Single { matrix: x.clone() },
        );
        gates.insert(
            "h".to_string(),
            GateDefinition::Single {
                matrix: array![[h, h], [h, -h]],
            },
        );
        gates.insert(
            "y".to_string(),
            GateDefinition::Single {
                matrix: array![[zero, -i], [i, zero]],
            },
        );
        gates.insert(
            "z".to_string(),
            GateDefinition::Single {
                matrix: array![[one, zero], [zero, -one]],
            },
        );
        gates.insert(
            "s".to_string(),
            GateDefinition::Single {
                matrix: array![[one, zero], [zero, i]],
            },
        );
        gates.insert(
            "t".to_string(),
            GateDefinition::Single {
                matrix: array![[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            },
        );
        gates.insert("cx".to_string(), GateDefinition::Controlled { base: x });
        Self { gates }
    }

    /// Add or replace a gate after validating it.
    pub fn insert(&mut self, name: &str, definition: GateDefinition) -> GateResult<()> {
        definition.validate(&name.to_ascii_lowercase())?;
        self.register(name, definition);
        Ok(())
    }

    /// Store an already validated definition.
    fn register(&mut self, name: &str, definition: GateDefinition) {
        let key = name.to_ascii_lowercase();
        debug!(gate = %key, qubits = definition.num_qubits(), "registering gate");
        self.gates.insert(key, definition);
    }

    /// Look up a gate by name. Standard aliases such as `cnot` resolve to
    /// their canonical entry.
    pub fn get(&self, name: &str) -> GateResult<&GateDefinition> {
        self.resolve(name)
            .ok_or_else(|| GateError::UnknownGate(name.to_string()))
    }

    fn resolve(&self, name: &str) -> Option<&GateDefinition> {
        let key = name.to_ascii_lowercase();
        self.gates.get(&key).or_else(|| {
            let gate = key.parse::<StandardGate>().ok()?;
            self.gates.get(gate.name())
        })
    }

    /// Look up one of the standard gates.
    pub fn standard_gate(&self, gate: StandardGate) -> GateResult<&GateDefinition> {
        self.get(gate.name())
    }

    /// True if a gate with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered gate names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True if the catalog has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(s: &str) -> GateResult<Self> {
        let file: CatalogFile = serde_json::from_str(s)?;
        Self::from_file(file)
    }

    /// Parse a catalog from YAML.
    pub fn from_yaml_str(s: &str) -> GateResult<Self> {
        let file: CatalogFile = serde_yaml_ng::from_str(s)?;
        Self::from_file(file)
    }

    /// Load a catalog from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> GateResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&contents),
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            _ => Err(GateError::UnsupportedFormat(ext)),
        }
    }

    /// Serialize the catalog to pretty JSON.
    pub fn to_json_string(&self) -> GateResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }

    /// Serialize the catalog to YAML.
    pub fn to_yaml_string(&self) -> GateResult<String> {
        Ok(serde_yaml_ng::to_string(&self.to_file())?)
    }

    fn from_file(file: CatalogFile) -> GateResult<Self> {
        let mut catalog = Self::empty();
        for (name, spec) in file.gates {
            let definition = match spec {
                GateSpec::Single { matrix } => {
                    GateDefinition::single(&name, matrix::from_rows(&name, &matrix)?)?
                }
                GateSpec::Controlled { base } => {
                    GateDefinition::controlled(&name, matrix::from_rows(&name, &base)?)?
                }
            };
            catalog.register(&name, definition);
        }
        debug!(gates = catalog.len(), "loaded gate catalog");
        Ok(catalog)
    }

    fn to_file(&self) -> CatalogFile {
        let gates = self
            .gates
            .iter()
            .map(|(name, def)| {
                let spec = match def {
                    GateDefinition::Single { matrix } => GateSpec::Single {
                        matrix: matrix::to_rows(matrix),
                    },
                    GateDefinition::Controlled { base } => GateSpec::Controlled {
                        base: matrix::to_rows(base),
                    },
                };
                (name.clone(), spec)
            })
            .collect();
        CatalogFile { gates }
    }
}

impl Default for GateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
