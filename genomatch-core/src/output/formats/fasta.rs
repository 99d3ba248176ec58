use std::io::Write;

use crate::{
    ranked_list::RankedList,
    types::{GenomatchError, Region, RegionPair},
};

fn write_region_record<W: Write>(
    writer: &mut W,
    name: &str,
    region: &Region,
) -> Result<(), GenomatchError> {
    writeln!(
        writer,
        ">{} offset={} length={}",
        name,
        region.offset(),
        region.len()
    )?;
    writeln!(writer, "{}", region.encoding())?;
    Ok(())
}

/// Write one record per region, numbered by rank
pub fn write_regions<W: Write>(
    writer: &mut W,
    regions: &RankedList<Region>,
) -> Result<(), GenomatchError> {
    for (rank, region) in regions.iter().enumerate() {
        write_region_record(writer, &format!("region_{}", rank + 1), region)?;
    }
    Ok(())
}

/// Write two records per pair, first sample then second
pub fn write_pairs<W: Write>(
    writer: &mut W,
    pairs: &RankedList<RegionPair>,
) -> Result<(), GenomatchError> {
    for (rank, pair) in pairs.iter().enumerate() {
        write_region_record(writer, &format!("pair_{}_first", rank + 1), &pair.first)?;
        write_region_record(writer, &format!("pair_{}_second", rank + 1), &pair.second)?;
    }
    Ok(())
}

/// Write one record per shared sequence, in scan order
pub fn write_shared_sequences<W: Write>(
    writer: &mut W,
    shared: &[String],
) -> Result<(), GenomatchError> {
    for (index, sequence) in shared.iter().enumerate() {
        writeln!(writer, ">shared_{} length={}", index + 1, sequence.len())?;
        writeln!(writer, "{}", sequence)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::rank_regions;

    #[test]
    fn test_write_regions_records() {
        let mut regions = RankedList::new();
        regions.insert_by(Region::new("CC".to_string(), 3), rank_regions);
        regions.insert_by(Region::new("GAG".to_string(), 64), rank_regions);

        let mut buffer = Vec::new();
        write_regions(&mut buffer, &regions).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                ">region_1 offset=64 length=3",
                "GAG",
                ">region_2 offset=3 length=2",
                "CC",
            ]
        );
    }

    #[test]
    fn test_write_shared_sequences_records() {
        let mut buffer = Vec::new();
        write_shared_sequences(&mut buffer, &["AUGGC".to_string()]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">shared_1 length=5\nAUGGC\n"
        );
    }
}
