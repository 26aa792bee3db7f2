//! Plain-text blueprint report.

use std::io::{self, Write};
use std::path::Path;

use smade_blocks::BlockConfig;
use smade_blueprint::{Header, Meta};
use smade_tag::{Payload, Tag};

/// Write the header section and the block table.
///
/// With a lookup table, rows show the resolved block name; without one,
/// they show the raw block id. Rows are ordered by ascending id.
pub fn write_header_report(
    out: &mut dyn Write,
    path: &Path,
    header: &Header,
    blocks: Option<&BlockConfig>,
) -> io::Result<()> {
    let [xmin, ymin, zmin] = header.bbox_min;
    let [xmax, ymax, zmax] = header.bbox_max;

    writeln!(out, "{}", path.display())?;
    writeln!(out)?;
    writeln!(out, "Header")?;
    writeln!(out, "------")?;
    writeln!(out, "    Version : {}", header.version)?;
    writeln!(out, "Entity type : {}", header.entity_type)?;
    writeln!(
        out,
        "Bounding box: ({xmin:?}, {ymin:?}, {zmin:?}) - ({xmax:?}, {ymax:?}, {zmax:?})"
    )?;

    let rows = header.sorted_elements();
    match blocks {
        Some(blocks) => {
            writeln!(out, "     count Block ID")?;
            for (block_id, count) in rows {
                match blocks.name_of(block_id) {
                    Some(name) => writeln!(out, "{count:>10} {name}")?,
                    None => writeln!(out, "{count:>10} unknown ({block_id})")?,
                }
            }
            writeln!(out, "({:>9} Total)", header.total_blocks())?;
        }
        None => {
            writeln!(out, "Block ID   count")?;
            for (block_id, count) in rows {
                writeln!(out, "{block_id:>8} : {count}")?;
            }
            writeln!(out, "   Total : {}", header.total_blocks())?;
        }
    }
    Ok(())
}

/// Write the metadata section: version, docked entries and the top level
/// of the tag tree.
pub fn write_meta_report(out: &mut dyn Write, meta: Option<&Meta>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Meta")?;
    writeln!(out, "----")?;
    let Some(meta) = meta else {
        writeln!(out, "(no meta file)")?;
        return Ok(());
    };

    writeln!(out, "    Version : {}", meta.version)?;
    match &meta.docked {
        Some(entries) => {
            writeln!(out, "     Docked : {}", entries.len())?;
            for entry in entries {
                let [x, y, z] = entry.position;
                let [sx, sy, sz] = entry.size;
                writeln!(
                    out,
                    "              {} at ({x}, {y}, {z}) size ({sx:?}, {sy:?}, {sz:?}) style {} orientation {}",
                    entry.name, entry.style, entry.orientation
                )?;
            }
        }
        None => writeln!(out, "     Docked : none")?,
    }

    match &meta.tags {
        Some(root) => {
            writeln!(out, "       Tags : {}", describe(&root.root))?;
            if let Payload::Struct(members) = &root.root.payload {
                for member in members {
                    writeln!(out, "              {}", describe(member))?;
                }
            }
        }
        None => writeln!(out, "       Tags : none")?,
    }
    Ok(())
}

/// One-line summary of a tag: name, kind and size of containers.
fn describe(tag: &Tag) -> String {
    let name = tag.name.as_deref().unwrap_or("<unnamed>");
    match &tag.payload {
        Payload::Struct(members) => format!("{name} (struct, {} tags)", members.len()),
        Payload::List(list) => format!(
            "{name} (list of {}, {} elements)",
            list.element_kind(),
            list.len()
        ),
        other => format!("{name} ({})", other.kind()),
    }
}
