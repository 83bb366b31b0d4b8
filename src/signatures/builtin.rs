//! Built-in signatures.
//!
//! Order matters: when two entries can match the same buffer the earlier one
//! wins. Longer, version-specific patterns are listed before the shorter
//! family prefix they share, and byte-order marks come last so that they
//! only claim text nothing else recognised.

use super::{SignatureEntry, Tag};

fn sig(
    offset: usize,
    pattern: &'static [u8],
    extension: &'static str,
    description: &'static str,
) -> SignatureEntry {
    SignatureEntry::new(offset, pattern, extension, description)
}

fn tagged(offset: usize, pattern: &'static [u8], tag: Tag, description: &'static str) -> SignatureEntry {
    SignatureEntry::tagged(offset, pattern, tag, description)
}

pub(super) fn entries() -> Vec<SignatureEntry> {
    vec![
        // === Microsoft compound documents ===
        tagged(
            0,
            &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
            Tag::CompoundDocument,
            "Microsoft Office applications (Word, Powerpoint, Excel, Works)",
        ),

        // === Zip family ===
        // The bare "PK" container tag would shadow these
        sig(0, &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x01, 0x00], ".zip", "ZLock Pro encrypted ZIP"),
        sig(0, b"PKLITE", ".zip", "PKLITE compressed ZIP archive (see also PKZIP)"),
        sig(0, b"PKSFX", ".zip", "PKSFX self-extracting executable compressed file (see also PKZIP)"),
        tagged(0, b"PK", Tag::ZipContainer, "Zip or Microsoft Office 2007 document"),
        sig(0, b"WinZip", ".zip", "WinZip compressed archive"),

        // === PDF ===
        sig(0, b"%PDF-1.7", ".pdf", "Adobe Portable Document file (version 1.7)"),
        sig(0, b"%PDF-1.6", ".pdf", "Adobe Portable Document file (version 1.6)"),
        sig(0, b"%PDF-1.5", ".pdf", "Adobe Portable Document file (version 1.5)"),
        sig(0, b"%PDF-1.4", ".pdf", "Adobe Portable Document file (version 1.4)"),
        sig(0, b"%PDF-1.3", ".pdf", "Adobe Portable Document file (version 1.3)"),
        sig(0, b"%PDF-1.2", ".pdf", "Adobe Portable Document file (version 1.2)"),
        sig(0, b"%PDF-1.1", ".pdf", "Adobe Portable Document file (version 1.1)"),
        sig(0, b"%PDF-1.0", ".pdf", "Adobe Portable Document file (version 1.0)"),
        sig(0, b"%PDF", ".pdf", "Adobe Portable Document file"),

        // === Mail and web ===
        sig(0, b"bplist", ".webarchive", "Safari webarchive"),
        sig(0, &[0x78, 0x9F, 0x3E, 0x22], ".dat", "Microsoft Outlook winmail.dat file"),
        sig(0, b"{\\rtf1", ".rtf", "Rich Text Format"),
        sig(0, &[0xC5, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0D], ".cold", "FileNet COLD document"),

        // === Development ===
        sig(0, b"# Microsoft Developer Studio", ".dsp", "Microsoft Developer Studio project file"),
        sig(0, b"dswfile", ".dsp", "Microsoft Visual Studio workspace file"),
        sig(0, b"#!/usr/bin/perl", ".pl", "Perl script file"),

        // === Corel Paint Shop Pro ===
        sig(0, b"Paint Shop Pro Image File", ".pspimage", "Corel Paint Shop Pro Image file"),
        sig(0, b"JASC BROWS FILE", ".jbf", "Corel Paint Shop Pro browse file"),

        // === Microsoft Access ===
        sig(0, b"\x00\x01\x00\x00Standard Jet DB", ".mdb", "Microsoft Access file"),
        sig(0, b"\x00\x01\x00\x00Standard ACE DB", ".accdb", "Microsoft Access 2007 file"),

        // === Microsoft Outlook ===
        sig(
            0,
            &[0x9C, 0xCB, 0xCB, 0x8D, 0x13, 0x75, 0xD2, 0x11, 0x91, 0x58, 0x00, 0xC0, 0x4F, 0x79, 0x56, 0xA4],
            ".wab",
            "Outlook address file",
        ),
        sig(0, b"!BDN", ".pst", "Microsoft Outlook Personal Folder File"),

        // === Archives ===
        sig(0, &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], ".7z", "7-Zip compressed file"),
        sig(0, &[0x1F, 0x8B, 0x08], ".gz", "GZIP archive file"),
        sig(0, &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], ".xz", "XZ compressed archive"),
        sig(0, b"BZh", ".bz2", "BZIP2 compressed archive"),
        sig(0, &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00], ".rar", "WinRAR compressed archive file (version 5)"),
        sig(0, &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00], ".rar", "WinRAR compressed archive file"),
        sig(2, b"-lh", ".lha", "Compressed archive file"),
        sig(0, b"MSCF", ".cab", "Microsoft cabinet file"),
        sig(0, &[0x49, 0x53, 0x63, 0x28], ".cab", "Install Shield v5.x or 6.x compressed file"),
        sig(0, &[0x4A, 0x41, 0x52, 0x43, 0x53, 0x00], ".jar", "JARCS compressed archive"),
        sig(0, &[0x1A, 0x02], ".arc", "LH archive file"),
        sig(0, &[0x1A, 0x03], ".arc", "LH archive file"),
        sig(0, &[0x1A, 0x04], ".arc", "LH archive file"),
        sig(0, &[0x1A, 0x08], ".arc", "LH archive file"),
        sig(0, &[0x1A, 0x09], ".arc", "LH archive file"),
        sig(0, b"TAPE", ".bkf", "Windows NT Backup file (NTBackup)"),

        // === XML ===
        sig(0, b"<?xml version=\"1.0\"?>", ".xml", "XML File"),
        sig(0, b"<?xml version=\"1.0\" encoding=\"utf-16\"", ".xml", "XML File (UTF16 encoding)"),
        sig(0, b"<?xml version=\"1.0\" encoding=\"utf-8\"", ".xml", "XML File (UTF8 encoding)"),
        sig(0, b"<?xml version=\"1.0\" encoding=\"utf-7\"", ".xml", "XML File (UTF7 encoding)"),

        // === E-mail ===
        sig(0, b"Return-Path: ", ".eml", "A common file extension for e-mail files"),
        sig(0, b"From ???", ".eml", "E-mail markup language file"),
        sig(0, b"From   ", ".eml", "E-mail markup language file"),
        sig(0, b"From: ", ".eml", "E-mail markup language file"),
        sig(0, b"BEGIN:VCARD", ".vcf", "vCard file"),

        // === TIFF and camera raw ===
        sig(
            0,
            &[0x49, 0x49, 0x1A, 0x00, 0x00, 0x00, 0x48, 0x45, 0x41, 0x50, 0x43, 0x43, 0x44, 0x52, 0x02, 0x00],
            ".crw",
            "Canon digital camera RAW file",
        ),
        sig(0, &[0x4D, 0x4D, 0x00, 0x2B], ".tif", "BigTIFF files; Tagged Image File Format files > 4 GB"),
        sig(0, &[0x4D, 0x4D, 0x00, 0x2A], ".tif", "Tagged Image File Format file (big endian, i.e., LSB last in the byte; Motorola)"),
        sig(0, &[0x49, 0x49, 0x2A, 0x00], ".tif", "Tagged Image File Format file (little endian, i.e., LSB first in the byte; Intel)"),
        sig(0, b"I I", ".tif", "Tagged Image File Format file"),

        // === AutoCAD ===
        sig(0, b"AC1002", ".dwg", "Generic AutoCAD drawing - AutoCAD R2.5"),
        sig(0, b"AC1003", ".dwg", "Generic AutoCAD drawing - AutoCAD R2.6"),
        sig(0, b"AC1004", ".dwg", "Generic AutoCAD drawing - AutoCAD R9"),
        sig(0, b"AC1006", ".dwg", "Generic AutoCAD drawing - AutoCAD R10"),
        sig(0, b"AC1009", ".dwg", "Generic AutoCAD drawing - AutoCAD R11/R12"),
        sig(0, b"AC1010", ".dwg", "Generic AutoCAD drawing - AutoCAD R13 (subtype 10)"),
        sig(0, b"AC1011", ".dwg", "Generic AutoCAD drawing - AutoCAD R13 (subtype 11)"),
        sig(0, b"AC1012", ".dwg", "Generic AutoCAD drawing - AutoCAD R13 (subtype 12)"),
        sig(0, b"AC1013", ".dwg", "Generic AutoCAD drawing - AutoCAD R13 (subtype 13)"),
        sig(0, b"AC1014", ".dwg", "Generic AutoCAD drawing - AutoCAD R13 (subtype 14)"),
        sig(0, b"AC1015", ".dwg", "Generic AutoCAD drawing - AutoCAD R2000"),
        sig(0, b"AC1018", ".dwg", "Generic AutoCAD drawing - AutoCAD R2004"),
        sig(0, b"AC1021", ".dwg", "Generic AutoCAD drawing - AutoCAD R2007"),

        // === ISO base media, full box prefix ===
        // These must precede the offset-4 "ftyp<brand>" entries that match a subset of their bytes
        sig(0, b"\x00\x00\x00\x20ftypheic", ".heif", "HEIF/HEVC"),
        sig(0, b"\x00\x00\x00\x18ftypheic", ".heif", "HEIF/HEVC"),
        sig(0, b"\x00\x00\x00\x24ftypheic", ".heif", "HEIF/HEVC"),
        sig(0, b"\x00\x00\x00\x20ftypM4A \x00\x00\x00\x00", ".mov", "Apple QuickTime movie file"),
        sig(0, b"\x00\x00\x00\x20ftypM4A", ".m4a", "Apple audio and video files"),
        sig(0, b"\x00\x00\x00\x18ftypmp42", ".mp4", "MPEG-4 video files"),
        sig(0, b"\x00\x00\x00\x18ftyp3gp5", ".mp4", "MPEG-4 video files"),

        // === ISO base media, brand at offset 4 ===
        sig(4, b"ftyp3gp", ".3gp", "3rd Generation Partnership Project 3GPP multimedia files"),
        sig(4, b"ftypM4A", ".m4a", "Apple Lossless Audio Codec file"),
        sig(4, b"ftypM4V", ".m4v", "ISO Media, MPEG v4 system, or iTunes AVC-LC file"),
        sig(4, b"ftypMSNV", ".mp4", "MPEG-4 video file"),
        sig(4, b"ftypisom", ".mp4", "ISO Base Media file (MPEG-4) v1"),
        sig(4, b"ftypmp42", ".m4v", "MPEG-4 video|QuickTime file"),
        sig(4, b"ftypqt", ".mov", "QuickTime movie file"),
        sig(4, b"moov", ".mov", "QuickTime movie file"),

        // === Images ===
        sig(0, &[0xD7, 0xCD, 0xC6, 0x9A], ".wmf", "Windows metafile"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xDB], ".jpg", "Samsung D807 JPEG file"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xE0], ".jpg", "JPEG/JIFF file"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xE1], ".jpg", "JPEG/Exif file"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xE2], ".jpg", "Canon EOS-1D JPEG file"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xE3], ".jpg", "Samsung D500 JPEG file"),
        sig(0, &[0xFF, 0xD8, 0xFF, 0xE8], ".jpg", "Still Picture Interchange File Format (SPIFF)"),
        tagged(0, b"RIFF", Tag::RiffContainer, "RIFF container"),
        sig(0, &[0x89, 0x50, 0x4E, 0x47], ".png", "Portable Network Graphics"),
        sig(0, &[0x00, 0x01, 0x00, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01], ".img", "Image Format Bitmap file"),
        sig(0, &[0x50, 0x49, 0x43, 0x54, 0x00, 0x08], ".img", "ADEX Corp. ChromaGraph Graphics Card Bitmap Graphic file"),
        sig(0, b"SCMI", ".img", "Img Software Set Bitmap"),
        sig(0, b"GIF87a", ".gif", "Graphics interchange format file (GIF87a)"),
        sig(0, b"GIF89a", ".gif", "Graphics interchange format file (GIF89a)"),
        sig(0, b"BM", ".bmp", "Windows (or device-independent) bitmap image"),
        sig(0, b"8BPS", ".psd", "Photoshop image file"),
        sig(0, b"CPTFILE", ".cpt", "Corel Photopaint file"),

        // === Audio and video ===
        sig(0, &[0x2E, 0x52, 0x4D, 0x46, 0x00, 0x00, 0x00, 0x12, 0x00], ".ra", "RealAudio file"),
        sig(0, &[0x2E, 0x72, 0x61, 0xFD, 0x00], ".ra", "RealAudio streaming media file"),
        sig(0, b".REC", ".ivr", "RealPlayer video file (V11 and later)"),
        sig(0, b".RMF", ".rm", "RealMedia streaming media file"),
        sig(0, b"ID3", ".mp3", "MPEG-1 Audio Layer 3 (MP3) audio file"),
        sig(0, b"fLaC", ".flac", "Free Lossless Audio Codec file"),
        sig(0, b"MThd", ".mdi", "Musical Instrument Digital Interface (MIDI) sound file"),
        sig(0, &[0x0B, 0x77], ".ac3", "Dolby Digital AC-3 audio file"),
        sig(
            0,
            &[0x1A, 0x45, 0xDF, 0xA3, 0x93, 0x42, 0x82, 0x88, 0x6D, 0x61, 0x74, 0x72, 0x6F, 0x73, 0x6B, 0x61],
            ".mkv",
            "Matroska open movie format",
        ),
        sig(0, b"OggS", ".opus", "Opus Interactive Audio Codec"),
        sig(
            0,
            &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C],
            ".wmv",
            "Microsoft Windows Media Audio/Video File (Advanced Streaming Format)",
        ),
        sig(0, &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11], ".wmv", "Advanced Systems Format"),
        sig(0, &[0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C], ".wmv", "Advanced Systems Format"),
        sig(0, &[0x46, 0x4F, 0x52, 0x4D, 0x00], ".aiff", "Audio Interchange File"),
        sig(0, &[0x46, 0x4C, 0x56, 0x01], ".flv", "Flash video file"),
        sig(0, b"FWS", ".swf", "Macromedia Shockwave Flash player file"),
        sig(0, b"CWS", ".swf", "Shockwave Flash file (v5+)"),
        sig(0, &[0x00, 0x00, 0x01, 0xBA], ".vob", "DVD Video Movie File (video/dvd, video/mpeg)"),

        // === Microsoft misc ===
        sig(0, b"EP", ".mdi", "Microsoft Document Imaging file"),
        sig(0, &[0x32, 0xBE], ".wri", "Microsoft Write file"),
        sig(0, &[0x31, 0xBE], ".wri", "Microsoft Write file"),
        sig(0, b"ElfFile\x00", ".evtx", "Windows Vista event log file"),
        sig(0, &[0x30, 0x00, 0x00, 0x00, 0x4C, 0x66, 0x4C, 0x65], ".evt", "Windows Event Viewer file"),
        sig(0, &[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF], ".hlp", "Windows help file"),
        sig(0, &[0x4C, 0x4E, 0x02, 0x00], ".hlp", "Windows Help file"),
        sig(0, &[0x3F, 0x5F, 0x03, 0x00], ".hlp", "Windows help file"),
        sig(0, b"ITSF", ".chm", "Microsoft Compiled HTML Help File"),
        sig(0, b"Windows Registry Editor Version 5.00", ".reg", "Windows Registry Editor Version 5.00 file"),
        sig(0, b"REGEDIT", ".reg", "Windows NT Registry and Registry Undo files"),
        sig(0, &[0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00], ".lnk", "Windows shortcut file"),
        sig(0, &[0x4B, 0x49, 0x00, 0x00], ".shd", "Windows 9x printer spool file"),
        sig(0, &[0x01, 0x0F, 0x00, 0x00], ".mdf", "Microsoft SQL Server 2000 database"),
        sig(0, &[0x00, 0x00, 0x02, 0x00], ".cur", "Windows cursor file"),
        sig(0, &[0x00, 0x00, 0x01, 0x00], ".ico", "Windows icon file"),

        // === Others ===
        sig(
            0,
            b"\x00\x05\x16\x07\x00\x02\x00\x00Mac OS X",
            ".macosxattr",
            "MAC OS X - Attribute file",
        ),
        sig(0, b"SQLite format 3\x00", ".sqlite", "SQLite database file"),

        // === Executables ===
        sig(0, &[0x7F, 0x45, 0x4C, 0x46], ".elf", "Executable and Linkable Format file"),
        tagged(0, b"MZ", Tag::Executable, "EXE or DLL file"),

        // Very short pattern, kept behind everything more specific
        sig(0, &[0x01, 0x00, 0x00, 0x00], ".emf", "Extended (Enhanced) Windows Metafile Format"),

        // === Byte-order marks ===
        // Checked last; 4-byte marks before the 2-byte marks they begin with
        tagged(0, &[0xFF, 0xFE, 0x00, 0x00], Tag::ByteOrderMark, "UTF-32 (little endian) text"),
        tagged(0, &[0x00, 0x00, 0xFE, 0xFF], Tag::ByteOrderMark, "UTF-32 (big endian) text"),
        tagged(0, &[0xDD, 0x73, 0x66, 0x73], Tag::ByteOrderMark, "UTF-EBCDIC text"),
        tagged(0, &[0x84, 0x31, 0x95, 0x33], Tag::ByteOrderMark, "GB18030 text"),
        tagged(0, &[0xEF, 0xBB, 0xBF], Tag::ByteOrderMark, "UTF-8 text"),
        tagged(0, &[0x2B, 0x2F, 0x76], Tag::ByteOrderMark, "UTF-7 text"),
        tagged(0, &[0x0E, 0xFE, 0xFF], Tag::ByteOrderMark, "SCSU text"),
        tagged(0, &[0xFB, 0xEE, 0x28], Tag::ByteOrderMark, "BOCU-1 text"),
        tagged(0, &[0xF7, 0x64, 0x4C], Tag::ByteOrderMark, "UTF-1 text"),
        tagged(0, &[0xFE, 0xFF], Tag::ByteOrderMark, "UTF-16 (big endian) text"),
        tagged(0, &[0xFF, 0xFE], Tag::ByteOrderMark, "UTF-16 (little endian) text"),
    ]
}
