// number of user-supplied parameters the tool accepts
pub const EXPECTED_PARAMS: usize = 2;

#[derive(Debug, PartialEq)]
pub struct Params {
    pub first: String,
    pub second: String,
}

#[derive(Debug, PartialEq)]
pub enum CliError {
    // carries the number of parameters actually received
    WrongArgumentCount(usize),
}

// validates the user-supplied parameters (invocation name already split off)
pub fn parse(params: &[String]) -> Result<Params, CliError> {
    match params {
        [first, second] => Ok(Params {
            first: first.clone(),
            second: second.clone(),
        }),
        _ => Err(CliError::WrongArgumentCount(params.len())),
    }
}
