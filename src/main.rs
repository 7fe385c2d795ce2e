fn main() {
    tilemap_editor::run();
}
