//! Errors and results.
use std::result::Result as StdResult;

// *************
// *** Error ***
// *************

#[derive(Debug)]
pub enum Error {
    /// The measured container has not been rendered yet.
    ContainerNotMounted,
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
