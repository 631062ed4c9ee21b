//! Value objects for the Circuit Builder

/// The fixed gate vocabulary accepted from clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    H,
    X,
    Y,
    Z,
    Cnot,
    Rx,
    Ry,
    Rz,
}

impl GateKind {
    /// Match a client-supplied type name.
    ///
    /// Canonical names match exactly. Rotation kinds additionally accept any
    /// name starting with `Rx`, `Ry` or `Rz` (e.g. `"Rx(pi/2)"`).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "H" => Some(GateKind::H),
            "X" => Some(GateKind::X),
            "Y" => Some(GateKind::Y),
            "Z" => Some(GateKind::Z),
            "CNOT" => Some(GateKind::Cnot),
            "RX" => Some(GateKind::Rx),
            "RY" => Some(GateKind::Ry),
            "RZ" => Some(GateKind::Rz),
            _ if name.starts_with("Rx") => Some(GateKind::Rx),
            _ if name.starts_with("Ry") => Some(GateKind::Ry),
            _ if name.starts_with("Rz") => Some(GateKind::Rz),
            _ => None,
        }
    }
}

/// Why an operation record contributed no gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// `type` absent or outside the vocabulary.
    UnknownKind(Option<String>),
    /// No usable `target` index.
    MissingTarget,
    /// CNOT without a usable `control` index.
    MissingControl,
    /// Index negative or not below the register size.
    IndexOutOfRange(i64),
    /// CNOT with `control == target`.
    DuplicateQubit(usize),
}
