use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use crate::consts::SHT_DYNSYM;
use crate::error::{Error, Result};
use crate::header::FileHeader;
use crate::section::{read_section_bytes, read_section_headers};
use crate::symbol::scan_exported_functions;

/// Lists the exported function symbols of a 64-bit ELF shared object:
/// every dynamic symbol with global binding, function type and a nonzero
/// value. Names are returned sorted lexicographically with duplicates
/// removed. The first structural failure aborts the parse; no partial
/// list is ever returned alongside an error.
pub fn list_exported_functions<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let mut file = File::open(path)?;

    let header = FileHeader::read_from(&mut file)?;
    let sections = read_section_headers(&mut file, &header)?;
    let dynsym = sections
        .iter()
        .find(|section| section.section_type == SHT_DYNSYM)
        .ok_or(Error::NoDynamicSymbolTable)?;
    let strtab = sections.get(dynsym.link as usize).ok_or(Error::MalformedSectionLink {
        index: dynsym.link as usize,
        count: sections.len(),
    })?;
    let strtab_bytes = read_section_bytes(&mut file, strtab)?;
    let names = scan_exported_functions(&mut file, dynsym, &strtab_bytes)?;

    let unique: BTreeSet<String> = names.into_iter().collect();
    Ok(unique.into_iter().collect())
}
