//! MZ executables: which kind of program is it?
//!
//! The subtype comes from a [`SubtypeQuery`]. On Windows the loader itself
//! can be asked ([`NativeQuery`]); anywhere else the headers can be parsed
//! ([`HeaderInspection`]) or the question skipped ([`ExtensionFallback`]).
//! When no subtype is available the file name's own extension is reported
//! with an empty description.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ClassificationResult, Source};

/// Bytes of the file read by [`HeaderInspection`] when no buffer is given
pub const HEADER_PROBE_LEN: usize = 4096;

/// Binary subtype of an `MZ` executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutableSubtype {
    Win32,
    Win64,
    Dos,
    /// 16-bit Windows
    Wow,
    Posix,
    /// 16-bit OS/2
    Os2,
    Pif,
}

impl ExecutableSubtype {
    pub fn description(&self) -> &'static str {
        match self {
            ExecutableSubtype::Win32 => "32 bits Windows application",
            ExecutableSubtype::Dos => "MS-DOS application",
            ExecutableSubtype::Wow => "16-bit Windows application",
            ExecutableSubtype::Pif => "PIF file that executes an MS-DOS application",
            ExecutableSubtype::Posix => "POSIX application",
            ExecutableSubtype::Os2 => "16-bit OS/2 application",
            ExecutableSubtype::Win64 => "64 bits Windows application",
        }
    }

    pub fn to_result(self) -> ClassificationResult {
        ClassificationResult::new(".exe", self.description())
    }
}

/// Reports the subtype of an executable, or `None` when it cannot tell
pub trait SubtypeQuery: Send + Sync {
    fn name(&self) -> &'static str;

    fn query(&self, path: Option<&Path>, window: &[u8]) -> Option<ExecutableSubtype>;
}

/// Asks the operating system loader (`GetBinaryTypeW`); needs a path
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeQuery;

impl SubtypeQuery for NativeQuery {
    fn name(&self) -> &'static str {
        "native"
    }

    #[cfg(windows)]
    fn query(&self, path: Option<&Path>, _window: &[u8]) -> Option<ExecutableSubtype> {
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::Storage::FileSystem::GetBinaryTypeW;

        let wide: Vec<u16> = path?
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();
        let mut kind: u32 = 0;

        // SAFETY: `wide` is NUL terminated and outlives the call; `kind` is a
        // valid out pointer.
        let ok = unsafe { GetBinaryTypeW(wide.as_ptr(), &mut kind) };
        if ok == 0 {
            tracing::debug!(error = %std::io::Error::last_os_error(), "GetBinaryTypeW failed");
            return None;
        }

        match kind {
            0 => Some(ExecutableSubtype::Win32),
            1 => Some(ExecutableSubtype::Dos),
            2 => Some(ExecutableSubtype::Wow),
            3 => Some(ExecutableSubtype::Pif),
            4 => Some(ExecutableSubtype::Posix),
            5 => Some(ExecutableSubtype::Os2),
            6 => Some(ExecutableSubtype::Win64),
            other => {
                tracing::debug!(kind = other, "Unrecognised binary type");
                None
            }
        }
    }

    #[cfg(not(windows))]
    fn query(&self, _path: Option<&Path>, _window: &[u8]) -> Option<ExecutableSubtype> {
        None
    }
}

/// Never answers; the caller falls back to the file name's extension
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionFallback;

impl SubtypeQuery for ExtensionFallback {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn query(&self, _path: Option<&Path>, _window: &[u8]) -> Option<ExecutableSubtype> {
        None
    }
}

/// Parses the DOS stub and the new-executable header that follows it
///
/// Works on any host. Reads the first [`HEADER_PROBE_LEN`] bytes of the
/// file when a path is given, else uses the supplied window.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderInspection;

impl SubtypeQuery for HeaderInspection {
    fn name(&self) -> &'static str {
        "header"
    }

    fn query(&self, path: Option<&Path>, window: &[u8]) -> Option<ExecutableSubtype> {
        match path {
            Some(path) => match crate::core::read_prefix(path, HEADER_PROBE_LEN) {
                Ok(header) => inspect_header(&header),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Header read failed");
                    None
                }
            },
            None => inspect_header(window),
        }
    }
}

const E_LFANEW: usize = 0x3C;
const PE_SIGNATURE: &[u8] = b"PE\0\0";
const PE32_MAGIC: u16 = 0x10b;
const PE32_PLUS_MAGIC: u16 = 0x20b;
/// Subsystem field offset within the optional header (same for PE32 and PE32+)
const SUBSYSTEM_OFFSET: usize = 68;
const IMAGE_SUBSYSTEM_POSIX_CUI: u16 = 7;
/// Target operating system byte of an NE header
const NE_TARGET_OS: usize = 0x36;
const NE_TARGET_OS2: u8 = 1;

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Derive the subtype from raw header bytes
///
/// Anything that starts with `MZ` but carries no recognisable extended
/// header is a DOS program.
pub fn inspect_header(data: &[u8]) -> Option<ExecutableSubtype> {
    if !data.starts_with(b"MZ") {
        return None;
    }

    let Some(lfanew) = read_u32(data, E_LFANEW).map(|v| v as usize) else {
        return Some(ExecutableSubtype::Dos);
    };
    let Some(signature) = data.get(lfanew..lfanew.saturating_add(4)) else {
        return Some(ExecutableSubtype::Dos);
    };

    if signature == PE_SIGNATURE {
        // COFF file header is 20 bytes after the signature
        let optional = lfanew + 24;
        let subtype = match read_u16(data, optional)? {
            PE32_MAGIC => ExecutableSubtype::Win32,
            PE32_PLUS_MAGIC => ExecutableSubtype::Win64,
            magic => {
                tracing::trace!(magic, "Unknown optional header magic");
                return None;
            }
        };
        if read_u16(data, optional + SUBSYSTEM_OFFSET) == Some(IMAGE_SUBSYSTEM_POSIX_CUI) {
            return Some(ExecutableSubtype::Posix);
        }
        return Some(subtype);
    }

    match &signature[..2] {
        b"NE" => match data.get(lfanew + NE_TARGET_OS) {
            Some(&NE_TARGET_OS2) => Some(ExecutableSubtype::Os2),
            _ => Some(ExecutableSubtype::Wow),
        },
        b"LX" => Some(ExecutableSubtype::Os2),
        _ => Some(ExecutableSubtype::Dos),
    }
}

/// Choice of [`SubtypeQuery`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    /// Native on Windows, extension fallback elsewhere
    #[default]
    Auto,
    Native,
    Header,
    Extension,
}

impl ProbeKind {
    pub fn into_query(self) -> Box<dyn SubtypeQuery> {
        match self {
            ProbeKind::Auto if cfg!(windows) => Box::new(NativeQuery),
            ProbeKind::Auto => Box::new(ExtensionFallback),
            ProbeKind::Native => Box::new(NativeQuery),
            ProbeKind::Header => Box::new(HeaderInspection),
            ProbeKind::Extension => Box::new(ExtensionFallback),
        }
    }
}

impl std::fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProbeKind::Auto => "auto",
            ProbeKind::Native => "native",
            ProbeKind::Header => "header",
            ProbeKind::Extension => "extension",
        };
        f.write_str(name)
    }
}

/// Classify an `MZ` input through `query`
pub fn resolve(query: &dyn SubtypeQuery, source: &Source<'_>, window: &[u8]) -> ClassificationResult {
    match query.query(source.path(), window) {
        Some(subtype) => subtype.to_result(),
        None => {
            let extension = source.dotted_extension();
            tracing::debug!(
                probe = query.name(),
                extension = %extension,
                "Executable subtype unavailable, using file extension"
            );
            ClassificationResult::new(extension, "")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LFANEW: usize = 0x80;

    fn dos_stub() -> Vec<u8> {
        let mut data = vec![0u8; LFANEW];
        data[0] = b'M';
        data[1] = b'Z';
        data[E_LFANEW..E_LFANEW + 4].copy_from_slice(&(LFANEW as u32).to_le_bytes());
        data
    }

    fn pe(magic: u16, subsystem: u16) -> Vec<u8> {
        let mut data = dos_stub();
        data.extend_from_slice(PE_SIGNATURE);
        data.extend_from_slice(&[0u8; 20]);
        let optional = data.len();
        data.resize(optional + 96, 0);
        data[optional..optional + 2].copy_from_slice(&magic.to_le_bytes());
        data[optional + SUBSYSTEM_OFFSET..optional + SUBSYSTEM_OFFSET + 2]
            .copy_from_slice(&subsystem.to_le_bytes());
        data
    }

    fn ne(target_os: u8) -> Vec<u8> {
        let mut data = dos_stub();
        data.extend_from_slice(b"NE");
        data.resize(LFANEW + 0x40, 0);
        data[LFANEW + NE_TARGET_OS] = target_os;
        data
    }

    // ==================== Header inspection ====================

    #[test]
    fn test_pe32_and_pe32_plus() {
        assert_eq!(inspect_header(&pe(PE32_MAGIC, 2)), Some(ExecutableSubtype::Win32));
        assert_eq!(inspect_header(&pe(PE32_PLUS_MAGIC, 3)), Some(ExecutableSubtype::Win64));
    }

    #[test]
    fn test_posix_subsystem() {
        assert_eq!(
            inspect_header(&pe(PE32_MAGIC, IMAGE_SUBSYSTEM_POSIX_CUI)),
            Some(ExecutableSubtype::Posix)
        );
    }

    #[test]
    fn test_new_executable() {
        assert_eq!(inspect_header(&ne(2)), Some(ExecutableSubtype::Wow));
        assert_eq!(inspect_header(&ne(NE_TARGET_OS2)), Some(ExecutableSubtype::Os2));
    }

    #[test]
    fn test_linear_executable() {
        let mut lx = dos_stub();
        lx.extend_from_slice(b"LX\0\0");
        assert_eq!(inspect_header(&lx), Some(ExecutableSubtype::Os2));

        let mut le = dos_stub();
        le.extend_from_slice(b"LE\0\0");
        assert_eq!(inspect_header(&le), Some(ExecutableSubtype::Dos));
    }

    #[test]
    fn test_plain_dos_program() {
        assert_eq!(inspect_header(b"MZ\x90\x00"), Some(ExecutableSubtype::Dos));
        // e_lfanew pointing past the data
        assert_eq!(inspect_header(&dos_stub()), Some(ExecutableSubtype::Dos));
        assert_eq!(inspect_header(b"ELF"), None);
    }

    #[test]
    fn test_header_inspection_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tool.bin");
        std::fs::write(&path, pe(PE32_PLUS_MAGIC, 3)).unwrap();

        // The window alone is too short; the file is read
        assert_eq!(
            HeaderInspection.query(Some(path.as_path()), b"MZ"),
            Some(ExecutableSubtype::Win64)
        );
        assert_eq!(HeaderInspection.query(None, &pe(PE32_MAGIC, 2)), Some(ExecutableSubtype::Win32));
    }

    // ==================== Resolution ====================

    #[test]
    fn test_fallback_uses_file_extension() {
        let path = Path::new("installer.Exe");
        let data = dos_stub();
        let source = Source::new(Some(path), Some(data.as_slice())).unwrap();

        let result = resolve(&ExtensionFallback, &source, &data);
        assert_eq!(result.extension, ".Exe");
        assert_eq!(result.description, "");
    }

    #[test]
    fn test_fallback_without_path_is_empty() {
        let data = pe(PE32_MAGIC, 2);
        let source = Source::new(None, Some(data.as_slice())).unwrap();
        let result = resolve(&NativeQuery, &source, &data);
        assert_eq!(result, ClassificationResult::new("", ""));
    }

    #[test]
    fn test_subtype_descriptions() {
        let data = ne(2);
        let source = Source::new(None, Some(data.as_slice())).unwrap();
        let result = resolve(&HeaderInspection, &source, &data);
        assert_eq!(result.extension, ".exe");
        assert_eq!(result.description, "16-bit Windows application");
        assert_eq!(ExecutableSubtype::Win64.description(), "64 bits Windows application");
    }

    #[test]
    fn test_probe_kind_selection() {
        assert_eq!(ProbeKind::Header.into_query().name(), "header");
        assert_eq!(ProbeKind::Extension.into_query().name(), "extension");
        let auto = ProbeKind::Auto.into_query();
        if cfg!(windows) {
            assert_eq!(auto.name(), "native");
        } else {
            assert_eq!(auto.name(), "extension");
        }
    }
}
