use std::error::Error as StdError;
use std::fmt;

use log::trace;

mod dom;

pub use dom::{Dom, NodeId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Capability(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability(msg) => write!(f, "document capability error: {msg}"),
        }
    }
}

impl StdError for Error {}

/// A document-like environment reduced to what the probe needs: element
/// creation plus attribute assignment and readback.
///
/// Implementors may fail any of the three operations; the probe treats every
/// failure the same way and never lets one escape.
pub trait DocumentCapability {
    type ElementId: Copy;

    /// Creates a new detached element. The probe never attaches it anywhere.
    fn create_element(&mut self, tag_name: &str) -> Result<Self::ElementId>;

    fn set_attribute(&mut self, element: Self::ElementId, name: &str, value: &str) -> Result<()>;

    fn attribute(&self, element: Self::ElementId, name: &str) -> Result<Option<String>>;
}

/// Reports whether the given document environment natively supports the
/// `date` input type.
///
/// The probe creates a detached `input` element, assigns its `type` the
/// literal `"date"`, and reads the attribute back. Engines that recognize
/// the type preserve it; engines that do not coerce it to the default
/// `"text"`, so the readback differs.
///
/// Never panics and never surfaces an error: any failure while creating the
/// element or touching its attribute yields `false`. Callers cannot tell
/// "unsupported" apart from "probe failed"; both read as `false`.
pub fn supports_date_input_in<D: DocumentCapability>(doc: &mut D) -> bool {
    let mut supported = false;
    let probe = (|| -> Result<()> {
        let tester = doc.create_element("input")?;
        doc.set_attribute(tester, "type", "date")?;
        let observed = doc.attribute(tester, "type")?.unwrap_or_default();
        trace!("probe element type readback: {observed}");
        supported = observed == "date";
        trace!("native date input support: {supported}");
        Ok(())
    })();
    if let Err(err) = probe {
        trace!("date input probe failed: {err}");
    }
    supported
}

/// [`supports_date_input_in`] against the built-in modern document profile.
pub fn supports_date_input() -> bool {
    supports_date_input_in(&mut Dom::new())
}
