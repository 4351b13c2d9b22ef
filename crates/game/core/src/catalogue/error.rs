use thiserror::Error;

/// Reasons a catalogue definition cannot be compiled.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("catalogue defines no {section}")]
    EmptySection { section: &'static str },

    #[error("duplicate {section} entry '{name}'")]
    Duplicate { section: &'static str, name: String },

    #[error("{entry} requires unknown blessing '{key}'")]
    UnknownPrerequisite { entry: String, key: String },

    #[error("catalogue holds more than {max} {section}")]
    TooManyEntries { section: &'static str, max: usize },
}
