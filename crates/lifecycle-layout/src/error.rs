/// Layout errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Canvas parameter out of range
    #[error("invalid layout parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Mode name not recognised
    #[error("unknown layout mode: '{0}'")]
    UnknownMode(String),
}
