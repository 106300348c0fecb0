use thiserror::Error;

pub type FmgResult<T> = Result<T, FmgError>;

#[derive(Error, Debug)]
pub enum FmgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML format error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML format error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Excel export error: {0}")]
    Export(String),

    #[error("Excel import error: {0}")]
    Import(String),
}

impl FmgError {
    /// True for parse-level XML failures, which the CLI reports with a
    /// distinct message from other per-file errors.
    pub fn is_xml_parse_error(&self) -> bool {
        matches!(self, FmgError::Xml(_) | FmgError::XmlAttr(_))
    }
}
