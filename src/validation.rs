// src/validation.rs
use serde::Serialize;

/// A single failed constraint on a decoded request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub error: String,
}

impl FieldError {
    pub fn new(field: &'static str, error: impl Into<String>) -> Self {
        Self { field, error: error.into() }
    }
}

/// Structural checks a request body must pass before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Collects field errors while checking a request body.
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, format!("{field} is a required field")));
        }
        self
    }

    pub fn at_least(&mut self, field: &'static str, value: i32, min: i32) -> &mut Self {
        if value < min {
            self.errors.push(FieldError::new(
                field,
                format!("{field} must be {min} or greater"),
            ));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_failed_field() {
        let errors = Checker::new()
            .required("name", "  ")
            .at_least("cost", -1, 0)
            .at_least("quantity", 3, 1)
            .finish()
            .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1], FieldError::new("cost", "cost must be 0 or greater"));
    }

    #[test]
    fn passes_when_nothing_fails() {
        assert!(Checker::new().required("name", "widget").at_least("quantity", 1, 1).finish().is_ok());
    }
}
