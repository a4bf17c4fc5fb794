mod cpf_validator;
mod discount_validator;
mod number_validators;
mod start_date_before_end_date_validator;

pub use self::cpf_validator::cpf_valid;
pub use self::discount_validator::single_discount_type_valid;
pub use self::number_validators::*;
pub use self::start_date_before_end_date_validator::start_date_valid;

use std::borrow::Cow;
use validator::*;

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}

pub fn append_validation_error(
    validation_errors: Result<(), ValidationErrors>,
    field: &'static str,
    validation_error: Result<(), ValidationError>,
) -> Result<(), ValidationErrors> {
    if let Err(validation_error) = validation_error {
        let mut validation_errors = match validation_errors {
            Ok(_) => ValidationErrors::new(),
            Err(validation_errors) => validation_errors,
        };
        validation_errors.add(field, validation_error);
        Err(validation_errors)
    } else {
        validation_errors
    }
}
