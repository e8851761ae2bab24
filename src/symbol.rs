use std::io::{Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};
use log::warn;

use crate::consts::{STB_GLOBAL, STT_FUNC, SYM64_SIZE};
use crate::error::Result;
use crate::section::SectionHeader;

/// One decoded dynamic symbol table entry.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Offset of the symbol's name in the linked string table.
    pub name: u32,
    /// Binding in the high nibble, type in the low nibble.
    pub info: u8,
    pub other: u8,
    /// Index of the section this symbol is defined in.
    pub section_index: u16,
    /// Virtual address; zero marks an undefined (imported) symbol.
    pub value: u64,
    pub size: u64,
}

impl Symbol {
    fn decode(bytes: &[u8]) -> Self {
        Symbol {
            name: LittleEndian::read_u32(&bytes[0..4]),
            info: bytes[4],
            other: bytes[5],
            section_index: LittleEndian::read_u16(&bytes[6..8]),
            value: LittleEndian::read_u64(&bytes[8..16]),
            size: LittleEndian::read_u64(&bytes[16..24]),
        }
    }

    pub fn binding(&self) -> u8 {
        self.info >> 4
    }

    pub fn symbol_type(&self) -> u8 {
        self.info & 0x0f
    }

    /// A function defined in this object and visible to other modules.
    pub fn is_exported_function(&self) -> bool {
        self.binding() == STB_GLOBAL && self.symbol_type() == STT_FUNC && self.value != 0
    }
}

/// Scans a dynamic symbol section and resolves the names of all exported
/// functions against its string table. Individually malformed records
/// (name offset out of bounds, no terminator, empty name) are skipped;
/// they never fail the scan.
pub fn scan_exported_functions<R: Read + Seek>(
    input: &mut R,
    dynsym: &SectionHeader,
    strtab: &[u8],
) -> Result<Vec<String>> {
    let stride = match dynsym.entry_size as usize {
        n if n >= SYM64_SIZE => n,
        n => {
            warn!("symbol entry size {} is smaller than the fixed {}-byte layout, using the fixed size", n, SYM64_SIZE);
            SYM64_SIZE
        }
    };
    if dynsym.size as usize % stride != 0 {
        warn!(
            "symbol table size {} is not a multiple of entry size {}, ignoring trailing bytes",
            dynsym.size, stride
        );
    }
    let count = dynsym.size as usize / stride;

    input.seek(SeekFrom::Start(dynsym.offset))?;
    let mut record = vec![0u8; stride];
    let mut names = Vec::new();
    for _ in 0..count {
        input.read_exact(&mut record)?;
        let symbol = Symbol::decode(&record[..SYM64_SIZE]);
        if !symbol.is_exported_function() {
            continue;
        }
        if let Some(name) = resolve_name(strtab, symbol.name as usize) {
            if !name.is_empty() {
                names.push(name);
            }
        }
    }
    Ok(names)
}

fn resolve_name(strtab: &[u8], offset: usize) -> Option<String> {
    if offset >= strtab.len() {
        return None;
    }
    let terminator = strtab[offset..].iter().position(|&byte| byte == 0)?;
    Some(String::from_utf8_lossy(&strtab[offset..offset + terminator]).into_owned())
}
