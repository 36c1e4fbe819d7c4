use std::fmt;

/// The error type for this application.
#[derive(Debug)]
pub enum AppError {
    /// An I/O error occurred.
    Io(std::io::Error),
    /// A UTF-8 parsing error occurred.
    Utf8(std::string::FromUtf8Error),
    /// The `svn` executable could not be found on the search path.
    SvnNotInstalled,
    /// The repository directory given at construction does not exist.
    RepositoryDirNotFound(String),
    /// The repository directory given at construction is not a directory.
    NotADirectory(String),
    /// SVN reported that the requested revision does not exist.
    /// Carries the revision number extracted from the stderr message.
    NoSuchRevision(String),
    /// SVN produced output that could not be parsed as XML, which is how
    /// it reacts to some malformed revision expressions. Carries the
    /// revision text that was supplied to the command.
    RevisionSyntax(String),
    /// The working-copy update issued before a diff failed.
    UpdateFailed { stderr: String },
    /// An SVN command signalled failure without a recognized marker on
    /// its error stream.
    SvnCommandFailed { command: String, stderr: String },
    /// Failed to parse a revision string.
    RevisionParse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O Error: {}", err),
            AppError::Utf8(err) => write!(f, "UTF-8 Conversion Error: {}", err),
            AppError::SvnNotInstalled => {
                write!(f, "Is svn installed? If so, check that it is in PATH")
            }
            AppError::RepositoryDirNotFound(path) => {
                write!(f, "The repository directory {} does not exist", path)
            }
            AppError::NotADirectory(path) => {
                write!(f, "The repository path {} is not a directory", path)
            }
            AppError::NoSuchRevision(rev) => write!(f, "No such revision {}", rev),
            AppError::RevisionSyntax(rev) => {
                write!(f, "'{}' is not valid revision syntax", rev)
            }
            AppError::UpdateFailed { stderr } => {
                write!(f, "SVN update failed: {}", stderr.trim())
            }
            AppError::SvnCommandFailed { command, stderr } => {
                write!(f, "SVN command failed: {}\n{}", command, stderr.trim())
            }
            AppError::RevisionParse(rev) => write!(f, "Failed to parse revision: {}", rev),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::Utf8(err)
    }
}

// This makes AppError a "real" error type that can be returned from main.
impl std::error::Error for AppError {}

// We will also define a uniform Result type for our application.
pub type AppResult<T> = Result<T, AppError>;
