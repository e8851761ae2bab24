use std::io::{Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};

use crate::consts::SHDR64_SIZE;
use crate::error::{read_or_truncated, Error, Result};
use crate::header::FileHeader;

/// One decoded section header table entry.
#[derive(Debug, Clone)]
pub struct SectionHeader {
    /// Offset of the section's name in the section-name string table.
    pub name: u32,
    /// Section type tag.
    pub section_type: u32,
    /// File offset of the section's content.
    pub offset: u64,
    /// Size of the section's content in bytes.
    pub size: u64,
    /// Index of an associated section; meaning depends on the type.
    pub link: u32,
    /// Size of one record for sections holding fixed-size records.
    pub entry_size: u64,
}

impl SectionHeader {
    fn decode(bytes: &[u8]) -> Self {
        SectionHeader {
            name: LittleEndian::read_u32(&bytes[0..4]),
            section_type: LittleEndian::read_u32(&bytes[4..8]),
            offset: LittleEndian::read_u64(&bytes[24..32]),
            size: LittleEndian::read_u64(&bytes[32..40]),
            link: LittleEndian::read_u32(&bytes[40..44]),
            entry_size: LittleEndian::read_u64(&bytes[56..64]),
        }
    }
}

/// Reads the whole section header table. All-or-nothing: a short entry
/// fails the table rather than yielding a partial list.
///
/// Entries larger than the fixed ELF64 layout are tolerated; the extra
/// bytes are read and ignored. Entries smaller than it cannot hold the
/// fixed fields and are treated as truncated.
pub fn read_section_headers<R: Read + Seek>(input: &mut R, header: &FileHeader) -> Result<Vec<SectionHeader>> {
    let entry_size = header.shentsize as usize;
    input.seek(SeekFrom::Start(header.shoff))?;
    let mut entry = vec![0u8; entry_size];
    let mut sections = Vec::with_capacity(header.shnum as usize);
    for index in 0..header.shnum as usize {
        read_or_truncated(input, &mut entry, Error::TruncatedSectionHeader(index))?;
        if entry_size < SHDR64_SIZE {
            return Err(Error::TruncatedSectionHeader(index));
        }
        sections.push(SectionHeader::decode(&entry[..SHDR64_SIZE]));
    }
    Ok(sections)
}

/// Reads a section's raw content bytes verbatim.
pub fn read_section_bytes<R: Read + Seek>(input: &mut R, section: &SectionHeader) -> Result<Vec<u8>> {
    input.seek(SeekFrom::Start(section.offset))?;
    let mut bytes = vec![0u8; section.size as usize];
    input.read_exact(&mut bytes)?;
    Ok(bytes)
}
