use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown color choice {0:?}, expected one of: auto, always, never")]
pub struct UnknownColorChoice(pub String);
