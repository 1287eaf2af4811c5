use crate::domain::error::HostError;

const MAX_COMPUTER_NAME_LEN: usize = 15;

pub struct ComputerNameValidator;

impl ComputerNameValidator {
    pub fn validate(name: &str) -> Result<(), HostError> {
        let reject = |reason: &str| {
            Err(HostError::InvalidComputerName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return reject("name is empty");
        }
        if name.len() > MAX_COMPUTER_NAME_LEN {
            return reject("name is longer than 15 characters");
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return reject("only letters, digits and hyphens are allowed");
        }
        if name.starts_with('-') || name.ends_with('-') {
            return reject("name cannot start or end with a hyphen");
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return reject("name cannot be entirely numeric");
        }
        Ok(())
    }
}
