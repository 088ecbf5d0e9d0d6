//! Shared domain types.
//!
//! These types are kept small so they can be:
//!
//! - used in-memory during evaluation
//! - printed as JSON by the CLI (inputs and results only)
//! - shared between the loader, the evaluator and the orchestrator

use serde::Serialize;

/// Highest polynomial degree carried by the basis.
pub const MAX_DEGREE: usize = 7;

/// Number of continuous input variables in the expansion.
pub const N_VARIABLES: usize = 4;

/// Continuous input variable of the metamodel.
///
/// The declaration order is the column order of the basis-index tables
/// (`T1`, `mratio`, `muf`, `Tb`) and must not be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Superstructure first-mode natural period.
    T1,
    /// Mass ratio `m1* / mtot`.
    MassRatio,
    /// Isolator friction coefficient.
    Friction,
    /// Isolation period.
    Tb,
}

impl Variable {
    /// Variables in table-column order.
    pub const ALL: [Variable; N_VARIABLES] = [
        Variable::T1,
        Variable::MassRatio,
        Variable::Friction,
        Variable::Tb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variable::T1 => "T1",
            Variable::MassRatio => "mratio",
            Variable::Friction => "muf",
            Variable::Tb => "Tb",
        }
    }

    /// Declared physical range `(low, high)` the expansion was fitted on.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Variable::T1 => (0.1, 1.0),
            Variable::MassRatio => (0.3, 0.9),
            Variable::Friction => (0.03, 0.18),
            Variable::Tb => (3.0, 6.0),
        }
    }

    /// Bounds as written in user-facing messages.
    pub fn bounds_label(self) -> &'static str {
        match self {
            Variable::T1 => "[0.1, 1]",
            Variable::MassRatio => "[0.3, 0.9]",
            Variable::Friction => "[0.03, 0.18]",
            Variable::Tb => "[3, 6]",
        }
    }

    /// Position of this variable in a basis-index row.
    pub fn column(self) -> usize {
        match self {
            Variable::T1 => 0,
            Variable::MassRatio => 1,
            Variable::Friction => 2,
            Variable::Tb => 3,
        }
    }
}

/// Response quantity of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rqi {
    /// Peak superstructure drift.
    #[serde(rename = "D1")]
    D1,
    /// Peak isolator displacement.
    #[serde(rename = "u0")]
    U0,
}

impl Rqi {
    pub fn tag(self) -> &'static str {
        match self {
            Rqi::D1 => "D1",
            Rqi::U0 => "u0",
        }
    }

    /// Parse the exact tag; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "D1" => Some(Rqi::D1),
            "u0" => Some(Rqi::U0),
            _ => None,
        }
    }

    /// Stem used in table file names (the intensity-measure pairing of the RQI).
    pub fn load_name(self) -> &'static str {
        match self {
            Rqi::D1 => "D1_Sd",
            Rqi::U0 => "u0_PGV",
        }
    }
}

/// Intensity-measure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Im {
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "GM")]
    Gm,
}

impl Im {
    pub fn tag(self) -> &'static str {
        match self {
            Im::Sc => "SC",
            Im::Gm => "GM",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SC" => Some(Im::Sc),
            "GM" => Some(Im::Gm),
            _ => None,
        }
    }
}

/// Independently tabulated output of the metamodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    C1,
    C2,
    Beta,
}

impl Quantity {
    /// Output order of `(c1, c2, beta)`.
    pub const ALL: [Quantity; 3] = [Quantity::C1, Quantity::C2, Quantity::Beta];

    /// Literal key used in table file names.
    pub fn key(self) -> &'static str {
        match self {
            Quantity::C1 => "C1",
            Quantity::C2 => "C2",
            Quantity::Beta => "beta",
        }
    }
}

/// Lookup key for one coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub quantity: Quantity,
    pub rqi: Rqi,
    pub im: Im,
}

impl TableKey {
    pub fn new(quantity: Quantity, rqi: Rqi, im: Im) -> Self {
        Self { quantity, rqi, im }
    }
}

impl std::fmt::Display for TableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.quantity.key(), self.rqi.tag(), self.im.tag())
    }
}

/// One row of an expansion: a coefficient and the degree of each variable's
/// basis polynomial, in `Variable::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PceTerm {
    pub coefficient: f64,
    pub degrees: [u8; N_VARIABLES],
}

/// Read-only sparse expansion for one `TableKey`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PceTable {
    pub terms: Vec<PceTerm>,
}

impl PceTable {
    pub fn new(terms: Vec<PceTerm>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Raw physical inputs for one evaluation, categorical tags still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInput {
    pub t1: f64,
    pub muf: f64,
    pub mratio: f64,
    pub tb: f64,
    pub rqi: String,
    pub im: String,
}

/// Validated physical inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalInput {
    pub t1: f64,
    pub muf: f64,
    pub mratio: f64,
    pub tb: f64,
    pub rqi: Rqi,
    pub im: Im,
}

impl PhysicalInput {
    /// Value of a continuous variable.
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::T1 => self.t1,
            Variable::MassRatio => self.mratio,
            Variable::Friction => self.muf,
            Variable::Tb => self.tb,
        }
    }
}

/// Metamodel prediction `(c1, c2, beta)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PceResult {
    pub c1: f64,
    pub c2: f64,
    pub beta: f64,
}

impl PceResult {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.c1, self.c2, self.beta)
    }
}
