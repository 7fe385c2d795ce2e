//! 小地图：把整张地图等比缩放进固定区域，并标出当前视口覆盖的部分。
//!
//! 所有坐标都相对小地图区域左上角，y 向下。

use crate::viewport::ViewportTransform;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinimapRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MinimapRect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// 两个矩形的交集；不相交时返回 `None`。
    pub fn intersection(&self, other: &MinimapRect) -> Option<MinimapRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(MinimapRect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapLayout {
    /// 地图像素（未缩放）→ 小地图像素。
    pub scale_factor: f32,
    /// 地图轮廓，在区域内居中。
    pub map: MinimapRect,
    /// 视口覆盖的部分；滚动到地图外时会超出 `map`。
    pub view: MinimapRect,
}

impl MinimapLayout {
    /// 按区域尺寸计算布局；地图或区域为空时返回 `None`。
    pub fn compute(
        area_width: f32,
        area_height: f32,
        columns: u32,
        rows: u32,
        viewport: &ViewportTransform,
    ) -> Option<Self> {
        let (cell_width, cell_height) = viewport.cell_size();
        let map_width = columns as f32 * cell_width as f32;
        let map_height = rows as f32 * cell_height as f32;
        if map_width <= 0.0 || map_height <= 0.0 || area_width <= 0.0 || area_height <= 0.0 {
            return None;
        }

        let scale_factor = (area_width / map_width).min(area_height / map_height);
        let width = map_width * scale_factor;
        let height = map_height * scale_factor;
        let map = MinimapRect {
            x: (area_width - width) * 0.5,
            y: (area_height - height) * 0.5,
            width,
            height,
        };

        let (scroll_x, scroll_y) = viewport.scroll();
        let (canvas_width, canvas_height) = viewport.canvas_size();
        let scale = viewport.scale();
        let view = MinimapRect {
            x: map.x - scroll_x * scale_factor,
            y: map.y - scroll_y * scale_factor,
            width: canvas_width * scale_factor / scale,
            height: canvas_height * scale_factor / scale,
        };

        Some(Self {
            scale_factor,
            map,
            view,
        })
    }

    /// 视口矩形裁剪到地图轮廓内的部分。
    pub fn visible_view(&self) -> Option<MinimapRect> {
        self.view.intersection(&self.map)
    }
}
