/// External (serializable) representations of a nesting result, as emitted by the packing engine.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;
