use bevy::prelude::*;

/// 标记“世界相机”（渲染地图 sprite 与网格线）。
///
/// 相机的 `viewport_origin` 设在左上角，世界坐标 `(x, -y)` 即画布像素 `(x, y)`。
#[derive(Component)]
pub struct WorldCamera;
