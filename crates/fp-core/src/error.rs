use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown property identifier: '{code}'")]
    UnknownProperty { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_property_names_the_code() {
        let err = CoreError::UnknownProperty {
            code: "XYZ".into(),
        };
        assert!(err.to_string().contains("'XYZ'"));
    }
}
