//! 二进制地图格式。

use tilemap_core::{CoreError, GridStore, Result, TileIndex, EMPTY_TILE};

use crate::MapFile;

/// 头部字节数：4 个 `i32`。
pub const HEADER_LEN: usize = 4 * 4;

fn corrupt(reason: impl Into<String>) -> CoreError {
    CoreError::CorruptData {
        reason: reason.into(),
    }
}

pub fn encode_map(map: &MapFile) -> Vec<u8> {
    let cells = map.grid.cells();
    let mut out = Vec::with_capacity(HEADER_LEN + cells.len() * 4);
    for value in [
        map.rows(),
        map.columns(),
        map.cell_width,
        map.cell_height,
    ] {
        out.extend_from_slice(&(value as i32).to_le_bytes());
    }
    for &tile in cells {
        out.extend_from_slice(&tile.to_le_bytes());
    }
    out
}

/// 解码；长度与声明尺寸不符、尺寸非正或出现 `< -1` 的 tile 时返回 `CorruptData`。
pub fn decode_map(bytes: &[u8]) -> Result<MapFile> {
    if bytes.len() < HEADER_LEN {
        return Err(corrupt(format!(
            "file is {} bytes, shorter than the {HEADER_LEN}-byte header",
            bytes.len()
        )));
    }
    let (header, body) = bytes.split_at(HEADER_LEN);
    let mut fields = [0u32; 4];
    for (slot, (chunk, name)) in fields.iter_mut().zip(
        header
            .chunks_exact(4)
            .zip(["rows", "columns", "cell_width", "cell_height"]),
    ) {
        let value = read_i32(chunk);
        if value <= 0 {
            return Err(corrupt(format!("{name} must be positive, found {value}")));
        }
        *slot = value as u32;
    }
    let [rows, columns, cell_width, cell_height] = fields;

    let want = (rows as usize)
        .checked_mul(columns as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| corrupt(format!("{rows}x{columns} grid is too large")))?;
    if body.len() != want {
        return Err(corrupt(format!(
            "{rows}x{columns} grid needs {want} bytes of cells, found {}",
            body.len()
        )));
    }

    let mut cells: Vec<TileIndex> = Vec::with_capacity(want / 4);
    for chunk in body.chunks_exact(4) {
        let tile = read_i32(chunk);
        if tile < EMPTY_TILE {
            return Err(corrupt(format!("invalid tile index {tile}")));
        }
        cells.push(tile);
    }

    let grid = GridStore::from_cells(rows, columns, cells)?;
    Ok(MapFile::new(grid, cell_width, cell_height))
}

fn read_i32(chunk: &[u8]) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(chunk);
    i32::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_little_endian() {
        let map = MapFile::new(GridStore::new(2, 3), 32, 16);
        let bytes = encode_map(&map);
        assert_eq!(&bytes[..4], &[2, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &[3, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[32, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[16, 0, 0, 0]);
        assert_eq!(bytes.len(), HEADER_LEN + 6 * 4);
        assert_eq!(&bytes[16..20], &(-1i32).to_le_bytes());
    }
}
