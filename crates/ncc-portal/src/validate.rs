//! Field format checks enforced at the write boundary, mirroring what the
//! client-side forms promise before submission.

pub fn name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    max_length(value, 100, "Name")
}

pub fn email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Email is required".to_owned());
    }
    if !email_address::EmailAddress::is_valid(value.trim()) {
        return Err("Invalid email address".to_owned());
    }
    max_length(value, 255, "Email")
}

pub fn branch(value: &str) -> Result<(), String> {
    max_length(value, 100, "Branch")
}

pub fn year(value: i32) -> Result<(), String> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err("Year must be between 1 and 5".to_owned())
    }
}

pub fn address(value: &str) -> Result<(), String> {
    max_length(value, 500, "Address")
}

pub fn phone_number(value: &str, label: &str) -> Result<(), String> {
    if value.chars().count() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{label} must be exactly 10 digits"))
    }
}

pub fn aadhaar_number(value: &str) -> Result<(), String> {
    if value.chars().count() == 12 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Aadhaar must be exactly 12 digits".to_owned())
    }
}

/// Five upper-case letters, four digits, one upper-case letter.
pub fn pan_number(value: &str) -> Result<(), String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase();
    if well_formed {
        Ok(())
    } else {
        Err("PAN format must be: ABCDE1234F".to_owned())
    }
}

pub fn account_number(value: &str) -> Result<(), String> {
    let count = value.chars().count();
    if count < 8 {
        return Err("Account number must be at least 8 characters".to_owned());
    }
    if count > 20 {
        return Err("Account number must be less than 20 characters".to_owned());
    }
    Ok(())
}

pub fn regimental_number(value: &str) -> Result<(), String> {
    max_length(value, 50, "Regimental number")
}

pub fn cadet_rank(value: &str) -> Result<(), String> {
    max_length(value, 50, "Cadet rank")
}

pub fn company_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Company name is required".to_owned());
    }
    max_length(value, 100, "Company name")
}

pub fn experience_role(value: &str) -> Result<(), String> {
    max_length(value, 100, "Role")
}

pub fn civil_date(value: &str, label: &str) -> Result<(), String> {
    value
        .parse::<jiff::civil::Date>()
        .map(|_| ())
        .map_err(|_| format!("{label} must be a valid date (YYYY-MM-DD)"))
}

fn max_length(value: &str, limit: usize, label: &str) -> Result<(), String> {
    if value.chars().count() > limit {
        Err(format!("{label} must be less than {limit} characters"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_present_and_bounded() {
        assert!(name("Asha Rao").is_ok());
        assert!(name("").is_err());
        assert!(name("   ").is_err());
        assert!(name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn email_must_be_well_formed() {
        assert!(email("asha@example.com").is_ok());
        assert!(email("").is_err());
        assert!(email("not-an-address").is_err());
        assert!(email(&format!("{}@example.com", "x".repeat(250))).is_err());
    }

    #[test]
    fn phone_numbers_are_exactly_ten_digits() {
        assert!(phone_number("9876543210", "Phone number").is_ok());
        assert!(phone_number("987654321", "Phone number").is_err());
        assert!(phone_number("98765432101", "Phone number").is_err());
        assert!(phone_number("987654321x", "Phone number").is_err());
        assert_eq!(
            phone_number("12345", "Parent's phone number").unwrap_err(),
            "Parent's phone number must be exactly 10 digits"
        );
    }

    #[test]
    fn aadhaar_is_exactly_twelve_digits() {
        assert!(aadhaar_number("123456789012").is_ok());
        assert!(aadhaar_number("12345678901").is_err());
        assert!(aadhaar_number("1234567890123").is_err());
        assert!(aadhaar_number("12345678901a").is_err());
    }

    #[test]
    fn pan_matches_five_letters_four_digits_one_letter() {
        assert!(pan_number("ABCDE1234F").is_ok());
        assert!(pan_number("abcde1234f").is_err());
        assert!(pan_number("ABCD1234FG").is_err());
        assert!(pan_number("ABCDE12345").is_err());
        assert!(pan_number("ABCDE1234").is_err());
        assert!(pan_number("ABCDE1234FX").is_err());
    }

    #[test]
    fn year_is_between_one_and_five() {
        for valid in 1..=5 {
            assert!(year(valid).is_ok());
        }
        assert!(year(0).is_err());
        assert!(year(6).is_err());
        assert!(year(-1).is_err());
    }

    #[test]
    fn account_number_length_is_bounded() {
        assert!(account_number("00011122233").is_ok());
        assert!(account_number("1234567").is_err());
        assert!(account_number(&"1".repeat(21)).is_err());
    }

    #[test]
    fn civil_dates_parse_as_iso_8601() {
        assert!(civil_date("2024-06-01", "Start date").is_ok());
        assert!(civil_date("2024-13-01", "Start date").is_err());
        assert!(civil_date("yesterday", "Start date").is_err());
    }
}
