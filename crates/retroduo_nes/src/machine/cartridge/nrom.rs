/// Mapper 0: 16 or 32 KiB PRG, 8 KiB CHR, no registers.
///
/// A 16 KiB image is mirrored into 0xC000-0xFFFF by the offset wrap in the
/// cartridge.
#[derive(Debug, Default)]
pub(in super::super) struct Nrom;

impl Nrom {
    pub(super) fn prg_offset(&self, addr: u16) -> usize {
        (addr as usize) & 0x7FFF
    }

    pub(super) fn chr_offset(&self, addr: u16) -> usize {
        addr as usize
    }
}
