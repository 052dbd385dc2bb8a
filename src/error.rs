use crate::export::error::ExportError;
use crate::intake::error::IntakeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtoError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
