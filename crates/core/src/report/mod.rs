//! Daily-report pipeline: encoder, delta calculator, draft, validator,
//! assembler, and the submission service.

pub mod assembler;
pub mod delta;
pub mod draft;
pub mod format;
pub mod ports;
pub mod service;
pub mod validator;

pub use assembler::{assemble, ReportRefs};
pub use delta::register_delta;
pub use draft::{DraftPreview, Field, ReportDraft};
pub use format::{counter_code, counter_code_preview};
pub use ports::ReportGateway;
pub use service::{ReportService, SubmitError};
pub use validator::{validate, FieldError, ValidatedReport, ValidationErrors};
