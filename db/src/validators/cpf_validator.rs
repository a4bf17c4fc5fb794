use std::borrow::Cow;
use validator::ValidationError;
use validators::*;

/// Validates a Brazilian CPF taxpayer number: eleven digits where the last
/// two are check digits over the first nine. Punctuation (`000.000.000-00`)
/// is ignored.
pub fn cpf_valid(cpf: &str) -> Result<(), ValidationError> {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 || digits.iter().all(|&d| d == digits[0]) {
        return Err(invalid_cpf_error(cpf));
    }

    if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
        return Err(invalid_cpf_error(cpf));
    }

    Ok(())
}

fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(position, &digit)| digit * (weight_start - position as u32))
        .sum();
    match sum * 10 % 11 {
        10 => 0,
        digit => digit,
    }
}

fn invalid_cpf_error(cpf: &str) -> ValidationError {
    let mut validation_error = create_validation_error("cpf_invalid", "CPF is invalid");
    validation_error.add_param(Cow::from("cpf"), &cpf);
    validation_error
}
