use std::io::Write;

use crate::{
    ranked_list::RankedList,
    types::{GenomatchError, Region, RegionPair},
};

/// Write regions as `offset\tlength\tencoding`
pub fn write_regions<W: Write>(
    writer: &mut W,
    regions: &RankedList<Region>,
) -> Result<(), GenomatchError> {
    for region in regions {
        writeln!(
            writer,
            "{}\t{}\t{}",
            region.offset(),
            region.len(),
            region.encoding()
        )?;
    }
    Ok(())
}

/// Write pairs as the columns of both regions side by side
pub fn write_pairs<W: Write>(
    writer: &mut W,
    pairs: &RankedList<RegionPair>,
) -> Result<(), GenomatchError> {
    for pair in pairs {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            pair.first.offset(),
            pair.first.len(),
            pair.first.encoding(),
            pair.second.offset(),
            pair.second.len(),
            pair.second.encoding()
        )?;
    }
    Ok(())
}

/// Write shared sequences as `length\tsequence`
pub fn write_shared_sequences<W: Write>(
    writer: &mut W,
    shared: &[String],
) -> Result<(), GenomatchError> {
    for sequence in shared {
        writeln!(writer, "{}\t{}", sequence.len(), sequence)?;
    }
    Ok(())
}
