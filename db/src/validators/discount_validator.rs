use std::borrow::Cow;
use validator::ValidationError;
use validators::*;

/// A coupon must carry exactly one discount form, either a fixed amount in
/// cents or a percentage of the subtotal.
pub fn single_discount_type_valid(
    discount_in_cents: Option<i64>,
    discount_as_percentage: Option<i64>,
) -> Result<(), ValidationError> {
    match (discount_in_cents, discount_as_percentage) {
        (Some(_), Some(_)) => {
            let mut validation_error = create_validation_error(
                "only_single_discount_type_allowed",
                "Discount must be either fixed or a percentage, not both",
            );
            validation_error.add_param(Cow::from("discount_in_cents"), &discount_in_cents);
            validation_error.add_param(Cow::from("discount_as_percentage"), &discount_as_percentage);
            Err(validation_error)
        }
        (None, None) => Err(create_validation_error(
            "discount_required",
            "A discount amount or percentage is required",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_discount_form_passes() {
        assert!(single_discount_type_valid(Some(500), None).is_ok());
        assert!(single_discount_type_valid(None, Some(10)).is_ok());
    }

    #[test]
    fn both_forms_fail() {
        let error = single_discount_type_valid(Some(500), Some(10)).unwrap_err();
        assert_eq!(error.code, "only_single_discount_type_allowed");
    }

    #[test]
    fn neither_form_fails() {
        let error = single_discount_type_valid(None, None).unwrap_err();
        assert_eq!(error.code, "discount_required");
    }
}
