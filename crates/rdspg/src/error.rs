#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{call} returned a record without {field}")]
    MissingField {
        call: &'static str,
        field: &'static str,
    },

    #[error("Parameter group not found: {0}")]
    GroupNotFound(String),

    #[error("Parameter group {0} has no ARN, cannot look up its tags")]
    MissingArn(String),
}
