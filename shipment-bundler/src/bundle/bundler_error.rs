#[derive(thiserror::Error, Debug)]
pub enum BundlerError {
    #[error("failed to read shipment file '{filename}': {message}")]
    InputReadError { filename: String, message: String },
    #[error("malformed shipment on line {line_number} ('{line}'): {reason}")]
    MalformedLineError {
        line_number: usize,
        line: String,
        reason: String,
    },
    #[error("unknown day code '{0}', expected one of M T W R F")]
    InvalidDayCodeError(String),
    #[error("duplicate shipment id '{0}'")]
    DuplicateShipmentIdError(String),
    #[error("failed to write bundle output: {0}")]
    OutputWriteError(String),
}
