use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 姓名长度上限，与 student 表的列宽一致
pub const MAX_NAME_LEN: usize = 50;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Name must be at most 50 characters");
    }
    Ok(())
}

pub fn validate_student_number(student_id: &str) -> Result<(), &'static str> {
    if student_id.trim().is_empty() {
        return Err("Student number must not be empty");
    }
    Ok(())
}

pub fn validate_semester(id_semester: &str) -> Result<(), &'static str> {
    if id_semester.trim().is_empty() {
        return Err("Semester must not be empty");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert!(validate_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.lovelace+tag@dept.example.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(validate_student_number("S2025001").is_ok());
        assert!(validate_student_number("").is_err());
        assert!(validate_semester("2025-1").is_ok());
        assert!(validate_semester(" ").is_err());
    }
}
