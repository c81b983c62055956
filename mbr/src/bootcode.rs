//! Boot code catalog
//!
//! Named x86 real-mode stubs that fit the 446-byte boot code region.
//! Assign one with `record.bootcode = bootcode::HALT.to_vec()`.

use alloc::vec::Vec;

use crate::types::BOOTCODE_SIZE;

/// A named boot code blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootcode {
    pub name: &'static str,
    pub code: &'static [u8],
}

impl Bootcode {
    pub fn to_vec(&self) -> Vec<u8> {
        self.code.to_vec()
    }

    pub const fn len(&self) -> usize {
        self.code.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// No code; the region composes as zeros
pub const EMPTY: Bootcode = Bootcode {
    name: "empty",
    code: &[],
};

/// cli; hlt; jmp back to hlt
pub const HALT: Bootcode = Bootcode {
    name: "halt",
    code: &[0xFA, 0xF4, 0xEB, 0xFD],
};

/// int 0x18 (hand over to the next boot device), then halt
pub const NO_OS: Bootcode = Bootcode {
    name: "no-os",
    code: &[0xCD, 0x18, 0xFA, 0xF4, 0xEB, 0xFD],
};

pub static CATALOG: [Bootcode; 3] = [EMPTY, HALT, NO_OS];

const _: () = assert!(HALT.len() <= BOOTCODE_SIZE);
const _: () = assert!(NO_OS.len() <= BOOTCODE_SIZE);

/// Find a catalog entry by name (ASCII case-insensitive)
pub fn lookup(name: &str) -> Option<&'static Bootcode> {
    CATALOG.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}
