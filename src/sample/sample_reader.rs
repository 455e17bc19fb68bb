use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{Error, Result};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// The last column of the file is the class label.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use softmax_multiclass::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| Error::Argument(
                "the file name is not set. Use `SampleReader::file`.".into()
            ))?;
        Sample::from_csv(file, self.has_header)
    }
}
