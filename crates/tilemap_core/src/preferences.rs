//! 地图偏好设置（行数/列数/格子尺寸）及其取值范围。

use std::fmt;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    Rows,
    Columns,
    CellWidth,
    CellHeight,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::Rows,
        Preference::Columns,
        Preference::CellWidth,
        Preference::CellHeight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preference::Rows => "rows",
            Preference::Columns => "columns",
            Preference::CellWidth => "cell_width",
            Preference::CellHeight => "cell_height",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLimits {
    pub rows: RangeInclusive<u32>,
    pub columns: RangeInclusive<u32>,
    pub cell_size: RangeInclusive<u32>,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            rows: 10..=500,
            columns: 10..=500,
            cell_size: 10..=70,
        }
    }
}

impl GridLimits {
    pub fn range(&self, pref: Preference) -> &RangeInclusive<u32> {
        match pref {
            Preference::Rows => &self.rows,
            Preference::Columns => &self.columns,
            Preference::CellWidth | Preference::CellHeight => &self.cell_size,
        }
    }

    pub fn check(&self, pref: Preference, value: u32) -> Result<u32> {
        let range = self.range(pref);
        if !range.contains(&value) {
            return Err(CoreError::PreferenceOutOfBounds {
                name: pref.name(),
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(value)
    }

    pub fn min_rows(&self) -> u32 {
        *self.rows.start()
    }

    pub fn min_columns(&self) -> u32 {
        *self.columns.start()
    }
}

/// 一次被接受的偏好修改。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceChange {
    pub preference: Preference,
    pub old: u32,
    pub new: u32,
    /// 缩小地图时被丢弃的非空格子数。
    pub discarded: usize,
}

impl fmt::Display for PreferenceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Setting '{}' changed from '{}' to '{}'",
            self.preference, self.old, self.new
        )?;
        if self.discarded > 0 {
            write!(f, " ({} tiles discarded)", self.discarded)?;
        }
        Ok(())
    }
}
