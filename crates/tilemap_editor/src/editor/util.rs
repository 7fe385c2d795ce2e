use bevy::ecs::system::Command;
use bevy::prelude::*;

struct DespawnSilently(Entity);

impl Command for DespawnSilently {
    fn apply(self, world: &mut World) {
        if world.entities().contains(self.0) {
            let _ = world.despawn(self.0);
        }
    }
}

/// 安全地 despawn 一个实体（连同子节点）：实体已不存在时不会触发 command error。
pub fn despawn_silently(commands: &mut Commands, entity: Entity) {
    commands.queue(DespawnSilently(entity));
}

/// 清空某个 UI 节点下的全部子节点（节点本身保留）。
pub fn despawn_children(commands: &mut Commands, children_q: &Query<&Children>, parent: Entity) {
    let Ok(children) = children_q.get(parent) else {
        return;
    };
    for child in children.iter() {
        despawn_silently(commands, child);
    }
}
