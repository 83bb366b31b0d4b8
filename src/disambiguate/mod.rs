//! Disambiguation - second-stage inspection for shared signatures.
//!
//! A table match tagged with anything other than a final extension lands
//! here:
//!
//! - **ZIP containers**: part names inside the archive separate Office Open
//!   XML, Works and iWork from plain archives
//! - **Compound documents**: OLE2 stream names separate Word, Excel,
//!   PowerPoint and Outlook messages
//! - **Executables**: a [`SubtypeQuery`] reports the binary subtype
//! - **RIFF containers**: the form type marker in the header window
//! - **Byte-order marks**: stripped and transcoded for one more matching pass

pub mod bom;
pub mod compound;
pub mod container;
pub mod executable;
pub mod riff;

pub use bom::{strip_and_transcode, BomKind};
pub use executable::{
    ExecutableSubtype, ExtensionFallback, HeaderInspection, NativeQuery, ProbeKind, SubtypeQuery,
};
