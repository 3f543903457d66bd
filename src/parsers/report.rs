use crate::errors::Error;

/// A collaborator which receives each error the parser reports. Reporting
/// is best effort and cannot fail back into the parser.
pub trait ErrorSink {
    fn report(&mut self, error: &Error);
}

/// Writes each reported error to standard error, one line per error
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl ErrorSink for Stderr {
    fn report(&mut self, error: &Error) {
        eprintln!("{}", error);
    }
}

/// Records every reported error
impl ErrorSink for Vec<Error> {
    fn report(&mut self, error: &Error) {
        self.push(error.clone());
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, error: &Error) {
        (**self).report(error);
    }
}
