use std::io::{Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

use crate::consts::{EHDR64_SIZE, EI_NIDENT, ELFCLASS32, ELFCLASS64, ELF_MAGIC, SHDR64_SIZE};
use crate::error::{read_or_truncated, Error, Result};

/// The fields of the ELF64 file header needed to locate the section
/// header table. Everything else in the header is skipped over.
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// File offset of the section header table.
    pub shoff: u64,
    /// Declared size of one section header entry.
    pub shentsize: u16,
    /// Number of section header entries.
    pub shnum: u16,
    /// Section index of the section-name string table.
    pub shstrndx: u16,
}

impl FileHeader {
    pub fn read_from<R: Read + Seek>(input: &mut R) -> Result<Self> {
        input.seek(SeekFrom::Start(0))?;

        let mut magic = [0u8; 4];
        read_or_truncated(input, &mut magic, Error::TruncatedHeader)?;
        if magic != ELF_MAGIC {
            return Err(Error::InvalidMagic);
        }

        let mut class = [0u8; 1];
        read_or_truncated(input, &mut class, Error::TruncatedHeader)?;
        match class[0] {
            ELFCLASS64 => {}
            ELFCLASS32 => return Err(Error::UnsupportedClass("32-bit".to_string())),
            tag => return Err(Error::UnsupportedClass(format!("unknown tag {}", tag))),
        }

        // Skip the rest of the identification block, then decode the fixed
        // little-endian fields that follow it.
        let mut ident_rest = [0u8; EI_NIDENT - 5];
        read_or_truncated(input, &mut ident_rest, Error::TruncatedHeader)?;
        let mut fixed = [0u8; EHDR64_SIZE - EI_NIDENT];
        read_or_truncated(input, &mut fixed, Error::TruncatedHeader)?;

        // Offsets below are relative to the end of the identification block:
        // e_shoff at 40, e_shentsize at 58, e_shnum at 60, e_shstrndx at 62.
        let header = FileHeader {
            shoff: LittleEndian::read_u64(&fixed[24..32]),
            shentsize: LittleEndian::read_u16(&fixed[42..44]),
            shnum: LittleEndian::read_u16(&fixed[44..46]),
            shstrndx: LittleEndian::read_u16(&fixed[46..48]),
        };
        if header.shentsize as usize != SHDR64_SIZE {
            warn!("unexpected section header entry size {} (expected {})", header.shentsize, SHDR64_SIZE);
            debug!("section header table at {:#x} with {} declared entries", header.shoff, header.shnum);
        }
        Ok(header)
    }
}
