use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::command::CommandError;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FaultCode {
    Client,
    Server,
}

impl FaultCode {
    pub fn qualified(&self) -> &'static str {
        match self {
            FaultCode::Client => "soap:Client",
            FaultCode::Server => "soap:Server",
        }
    }
}

// Fault is the business-level error an operation returns in place of a result.
// Turning it into a soap:Fault envelope is left to the transport binding.
#[derive(Debug, PartialEq, Clone)]
pub struct Fault {
    pub code: FaultCode,
    pub string: String,
}

impl Fault {
    pub fn client(message: &str) -> Self {
        Self { code: FaultCode::Client, string: message.to_string() }
    }

    pub fn server(message: &str) -> Self {
        Self { code: FaultCode::Server, string: message.to_string() }
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.qualified(), self.string)
    }
}

impl Error for Fault {}

impl From<CommandError> for Fault {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Runtime { .. } => Fault::server(err.message()),
            _ => Fault::client(err.message()),
        }
    }
}

impl From<LibraryError> for Fault {
    fn from(err: LibraryError) -> Self {
        Fault::from(CommandError::from(err))
    }
}
